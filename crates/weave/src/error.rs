//! Error types for template processing.
//!
//! This module provides [`ProcessError`], the error type for every fallible
//! operation in the builder/processor pipeline. It abstracts over the
//! underlying template engine's errors, providing a stable public API:
//! engine causes are captured as rendered messages, I/O causes are kept as
//! [`std::io::Error`] and exposed through [`std::error::Error::source`].
//!
//! The pipeline is fail-fast throughout: every variant is unrecoverable at
//! the point of detection, and compile/render failures identify the
//! offending template by its registration-order identifier.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Error type for template processing operations.
///
/// Each variant corresponds to one stage of the pipeline: loading template
/// text during builder configuration, compiling sources during
/// [`build`](crate::TemplateProcessorBuilder::build), and rendering during
/// [`get`](crate::TemplateProcessor::get).
#[derive(Debug)]
pub enum ProcessError {
    /// Template text could not be located or read from its declared path.
    ///
    /// Raised while configuring the builder, before any compilation happens.
    ResourceLoad {
        /// The path the template was declared at.
        path: PathBuf,
        /// The underlying I/O failure.
        source: io::Error,
    },

    /// A template source is malformed per the engine's grammar.
    ///
    /// Raised during `build()`. Compilation stops at the first failure and
    /// no processor is returned.
    TemplateCompile {
        /// Registration-order identifier of the offending template.
        template_id: usize,
        /// The engine's compile failure, rendered as text.
        message: String,
    },

    /// A compiled template failed to render.
    ///
    /// Raised during `get()`. The whole call is aborted; output already
    /// rendered from earlier templates in the same call is discarded.
    TemplateRender {
        /// Registration-order identifier of the offending template.
        template_id: usize,
        /// The engine's render failure, rendered as text.
        message: String,
    },
}

impl fmt::Display for ProcessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessError::ResourceLoad { path, source } => {
                write!(f, "unable to load template from {}: {}", path.display(), source)
            }
            ProcessError::TemplateCompile { template_id, message } => {
                write!(f, "template {} failed to compile: {}", template_id, message)
            }
            ProcessError::TemplateRender { template_id, message } => {
                write!(f, "template {} failed to render: {}", template_id, message)
            }
        }
    }
}

impl std::error::Error for ProcessError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ProcessError::ResourceLoad { source, .. } => Some(source),
            _ => None,
        }
    }
}
