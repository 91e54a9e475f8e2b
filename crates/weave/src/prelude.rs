//! Processing prelude for convenient imports.
//!
//! Re-exports the most commonly used types in one line:
//!
//! ```rust
//! use weave::prelude::*;
//!
//! let processor = TemplateProcessorBuilder::new()
//!     .use_template("{{ who }}")
//!     .add("who", "you")
//!     .build()
//!     .unwrap();
//! assert_eq!(processor.get().unwrap(), "you");
//! ```

pub use crate::builder::TemplateProcessorBuilder;
pub use crate::engine::{MiniJinjaEngine, TemplateEngine};
pub use crate::error::ProcessError;
pub use crate::processor::TemplateProcessor;
pub use crate::provider::ValueProvider;
