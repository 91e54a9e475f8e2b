//! # Weave - Multi-Template Fill-In Rendering
//!
//! `weave` renders text by substituting named values into one or more
//! templates and concatenating the results into a single output string.
//! It is a lightweight "fill in the blanks" facility: register template
//! sources (literal strings or files) and named values (eager or lazily
//! computed), then request the rendered output on demand.
//!
//! The template grammar itself is delegated to an engine behind the
//! [`TemplateEngine`] trait; the default is [`MiniJinjaEngine`], giving
//! Jinja2-compatible syntax.
//!
//! ## Core Concepts
//!
//! - [`TemplateProcessorBuilder`]: fluent configuration of templates and
//!   named values
//! - [`TemplateProcessor`]: the built, immutable processor; one operation,
//!   [`get`](TemplateProcessor::get)
//! - [`ValueProvider`]: a named, zero-argument value source, invoked fresh
//!   on every render
//! - [`ProcessError`]: the fail-fast error taxonomy for loading,
//!   compiling, and rendering
//!
//! ## Quick Start
//!
//! ```rust
//! use weave::TemplateProcessorBuilder;
//!
//! let processor = TemplateProcessorBuilder::new()
//!     .use_template("This is a {{ text }}")
//!     .add("text", "test")
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(processor.get().unwrap(), "This is a test");
//! ```
//!
//! ## Multiple Templates
//!
//! Templates render in registration order against one shared context and
//! their outputs are concatenated with no separators:
//!
//! ```rust
//! let processor = weave::builder()
//!     .use_template("{{ greeting }}, ")
//!     .use_template("{{ name }}!")
//!     .add("greeting", "Hello")
//!     .add("name", "World")
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(processor.get().unwrap(), "Hello, World!");
//! ```
//!
//! ## Lazy Values
//!
//! Suppliers run fresh on every `get()` call, so values backed by external
//! state are re-read per render:
//!
//! ```rust
//! use std::cell::Cell;
//! use std::rc::Rc;
//! use minijinja::Value;
//!
//! let counter = Rc::new(Cell::new(0));
//! let c = Rc::clone(&counter);
//!
//! let processor = weave::builder()
//!     .use_template("call {{ n }}")
//!     .add_provider("n", move || {
//!         let value = c.get();
//!         c.set(value + 1);
//!         Value::from(value)
//!     })
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(processor.get().unwrap(), "call 0");
//! assert_eq!(processor.get().unwrap(), "call 1");
//! ```
//!
//! ## Error Handling
//!
//! The pipeline is fail-fast, all-or-nothing. A template that fails to
//! load aborts builder configuration; a malformed template aborts
//! [`build`](TemplateProcessorBuilder::build); a render-time fault aborts
//! the whole [`get`](TemplateProcessor::get) call with no partial output.
//! Each failure identifies the offending template by its registration
//! order.
//!
//! ```rust
//! use weave::ProcessError;
//!
//! let err = weave::builder()
//!     .use_template("ok")
//!     .use_template("{% if %}")
//!     .build()
//!     .unwrap_err();
//!
//! assert!(matches!(err, ProcessError::TemplateCompile { template_id: 1, .. }));
//! ```

mod builder;
mod engine;
mod error;
pub mod prelude;
mod processor;
mod provider;
mod source;

pub use builder::TemplateProcessorBuilder;
pub use engine::{MiniJinjaEngine, TemplateEngine};
pub use error::ProcessError;
pub use processor::TemplateProcessor;
pub use provider::{ProviderRegistry, StaticProvider, ValueProvider};
pub use source::{load_text, TemplateSource};

/// Creates a new [`TemplateProcessorBuilder`].
///
/// Convenience entry point, equivalent to
/// [`TemplateProcessorBuilder::new`].
pub fn builder() -> TemplateProcessorBuilder {
    TemplateProcessorBuilder::new()
}
