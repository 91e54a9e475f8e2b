//! Fluent configuration for building a [`TemplateProcessor`].
//!
//! The builder is the mutable half of a two-phase lifecycle: it accumulates
//! template sources and named value providers with ordinary chained calls,
//! then [`build`](TemplateProcessorBuilder::build) compiles everything and
//! produces an immutable, reusable processor. Nothing is validated before
//! `build()`; compile errors surface there, fail-fast.

use std::path::Path;

use minijinja::Value;
use serde::Serialize;

use crate::engine::{MiniJinjaEngine, TemplateEngine};
use crate::error::ProcessError;
use crate::processor::TemplateProcessor;
use crate::provider::{ProviderRegistry, ValueProvider};
use crate::source::{self, TemplateSource};

/// Accumulates templates and named values, then builds a processor.
///
/// Templates render in registration order; their outputs are concatenated
/// with no separators. Values registered under the same key replace each
/// other, last registration wins.
///
/// # Example
///
/// ```rust
/// use weave::TemplateProcessorBuilder;
///
/// let processor = TemplateProcessorBuilder::new()
///     .use_template("This is a {{ text }}")
///     .add("text", "test")
///     .build()
///     .unwrap();
///
/// assert_eq!(processor.get().unwrap(), "This is a test");
/// ```
pub struct TemplateProcessorBuilder {
    templates: Vec<TemplateSource>,
    providers: ProviderRegistry,
    engine: Box<dyn TemplateEngine>,
}

impl std::fmt::Debug for TemplateProcessorBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TemplateProcessorBuilder")
            .field("templates", &self.templates)
            .finish_non_exhaustive()
    }
}

impl TemplateProcessorBuilder {
    /// Creates a new builder backed by the default [`MiniJinjaEngine`].
    pub fn new() -> Self {
        Self {
            templates: Vec::new(),
            providers: ProviderRegistry::new(),
            engine: Box::new(MiniJinjaEngine::new()),
        }
    }

    /// Appends a template source string.
    ///
    /// The source receives the next sequential identifier; an empty string
    /// is a valid template. No syntax checking happens until `build()`.
    pub fn use_template(mut self, source: impl Into<String>) -> Self {
        let id = self.templates.len();
        self.templates.push(TemplateSource::new(id, source));
        self
    }

    /// Reads a template from a file as UTF-8 and appends it.
    ///
    /// Fails immediately with [`ProcessError::ResourceLoad`] if the file
    /// cannot be located or read; no processor can be built from a
    /// configuration that failed to load.
    pub fn use_template_file(self, path: impl AsRef<Path>) -> Result<Self, ProcessError> {
        let text = source::load_text(path)?;
        Ok(self.use_template(text))
    }

    /// Registers an eager named value.
    ///
    /// Accepts anything serializable. The value is captured now and
    /// substituted on every render. A `None` value renders as the empty
    /// string. An empty key is silently ignored.
    pub fn add(mut self, key: impl Into<String>, value: impl Serialize) -> Self {
        self.providers
            .add_static(key, Value::from_serialize(&value));
        self
    }

    /// Registers a lazy named value.
    ///
    /// The supplier runs fresh on every [`get`](TemplateProcessor::get)
    /// call, so suppliers backed by external state (counters, clocks) see
    /// that state at render time. A supplier returning `None` renders as
    /// the empty string.
    pub fn add_with<F, V>(mut self, key: impl Into<String>, supplier: F) -> Self
    where
        F: Fn() -> V + 'static,
        V: Serialize,
    {
        self.providers
            .add_provider(key, move || Value::from_serialize(&supplier()));
        self
    }

    /// Registers a hand-written provider.
    ///
    /// This is the escape hatch for providers that need more than a plain
    /// closure, or that produce [`minijinja::Value`]s directly.
    pub fn add_provider<P: ValueProvider + 'static>(
        mut self,
        key: impl Into<String>,
        provider: P,
    ) -> Self {
        self.providers.add_provider(key, provider);
        self
    }

    /// Replaces the template engine backing this builder.
    ///
    /// Must be called before `build()`; templates are compiled by whatever
    /// engine the builder holds at that point.
    pub fn with_engine(mut self, engine: Box<dyn TemplateEngine>) -> Self {
        self.engine = engine;
        self
    }

    /// Compiles every accumulated template and freezes the providers.
    ///
    /// Templates compile in registration order. The first compile failure
    /// aborts with [`ProcessError::TemplateCompile`] identifying the
    /// offending template; no partial processor is returned.
    pub fn build(mut self) -> Result<TemplateProcessor, ProcessError> {
        for template in &self.templates {
            self.engine.compile(template.id, &template.source)?;
        }
        Ok(TemplateProcessor::new(
            self.engine,
            self.templates.len(),
            self.providers,
        ))
    }
}

impl Default for TemplateProcessorBuilder {
    fn default() -> Self {
        Self::new()
    }
}
