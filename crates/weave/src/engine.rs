//! Template engine abstraction.
//!
//! This module defines the [`TemplateEngine`] trait which allows the
//! processor to work with different template backends. The default
//! implementation is [`MiniJinjaEngine`].
//!
//! The processor treats the engine as a black box with two operations:
//! compile a source string under a positional identifier, and render a
//! previously compiled template against a flat context map. The engine owns
//! the template grammar and expression semantics; the processor owns
//! ordering, context resolution, and error wrapping.

use std::collections::HashMap;

use minijinja::{Environment, UndefinedBehavior, Value};

use crate::error::ProcessError;

/// A template engine that compiles and renders templates.
///
/// Engines handle template syntax, variable substitution, and whatever
/// logic (loops, conditionals, filters) the backend supports. The
/// processor identifies templates by their registration-order identifier;
/// engines are expected to key compiled templates by that identifier.
///
/// Errors must propagate: a failed render is reported as
/// [`ProcessError::TemplateRender`], never swallowed or replaced with
/// partial output.
pub trait TemplateEngine {
    /// Compiles `source` and stores it under `template_id`.
    ///
    /// Fails with [`ProcessError::TemplateCompile`] if the source is
    /// malformed per the engine's grammar.
    fn compile(&mut self, template_id: usize, source: &str) -> Result<(), ProcessError>;

    /// Renders the template previously compiled under `template_id`.
    ///
    /// Fails with [`ProcessError::TemplateRender`] on any render-time
    /// fault, including references the context cannot satisfy.
    fn render(
        &self,
        template_id: usize,
        context: &HashMap<String, Value>,
    ) -> Result<String, ProcessError>;
}

/// MiniJinja-based template engine.
///
/// This is the default engine, providing Jinja2-compatible syntax with
/// loops, conditionals, filters, and macros. Templates are compiled
/// eagerly on [`compile`](TemplateEngine::compile), so malformed sources
/// are rejected at build time rather than first render.
///
/// Undefined behavior is set to strict: a template that references a name
/// absent from the context fails its render instead of silently producing
/// empty output.
///
/// # Example
///
/// ```rust
/// use std::collections::HashMap;
/// use weave::{MiniJinjaEngine, TemplateEngine};
/// use minijinja::Value;
///
/// let mut engine = MiniJinjaEngine::new();
/// engine.compile(0, "Hello, {{ name }}!").unwrap();
///
/// let mut context = HashMap::new();
/// context.insert("name".to_string(), Value::from("World"));
///
/// let output = engine.render(0, &context).unwrap();
/// assert_eq!(output, "Hello, World!");
/// ```
pub struct MiniJinjaEngine {
    env: Environment<'static>,
}

impl MiniJinjaEngine {
    /// Creates a new MiniJinja engine with strict undefined handling.
    pub fn new() -> Self {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        Self { env }
    }

    /// Returns a reference to the underlying MiniJinja environment.
    pub fn environment(&self) -> &Environment<'static> {
        &self.env
    }

    /// Returns a mutable reference to the underlying MiniJinja environment.
    ///
    /// This allows registering custom filters or functions before the
    /// engine is handed to a builder.
    pub fn environment_mut(&mut self) -> &mut Environment<'static> {
        &mut self.env
    }
}

impl Default for MiniJinjaEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateEngine for MiniJinjaEngine {
    fn compile(&mut self, template_id: usize, source: &str) -> Result<(), ProcessError> {
        self.env
            .add_template_owned(template_id.to_string(), source.to_string())
            .map_err(|err| ProcessError::TemplateCompile {
                template_id,
                message: err.to_string(),
            })
    }

    fn render(
        &self,
        template_id: usize,
        context: &HashMap<String, Value>,
    ) -> Result<String, ProcessError> {
        let template = self
            .env
            .get_template(&template_id.to_string())
            .map_err(|err| ProcessError::TemplateRender {
                template_id,
                message: err.to_string(),
            })?;
        template
            .render(context)
            .map_err(|err| ProcessError::TemplateRender {
                template_id,
                message: err.to_string(),
            })
    }
}
