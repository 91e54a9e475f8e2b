//! Template sources and file loading.

use std::fs;
use std::path::Path;

use crate::error::ProcessError;

/// A raw template string paired with its registration-order identifier.
///
/// Identifiers are 0-based, dense, and stable for the lifetime of the
/// processor; they double as the engine-side template names and define the
/// render order.
#[derive(Debug, Clone)]
pub struct TemplateSource {
    /// Positional identifier assigned at registration.
    pub id: usize,
    /// The raw template text. No validation happens before compilation.
    pub source: String,
}

impl TemplateSource {
    /// Creates a new template source.
    pub fn new(id: usize, source: impl Into<String>) -> Self {
        Self {
            id,
            source: source.into(),
        }
    }
}

/// Reads template text from a file as UTF-8.
///
/// Fails with [`ProcessError::ResourceLoad`] if the file is missing,
/// unreadable, or not valid UTF-8.
pub fn load_text(path: impl AsRef<Path>) -> Result<String, ProcessError> {
    let path = path.as_ref();
    fs::read_to_string(path).map_err(|source| ProcessError::ResourceLoad {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn load_text_reads_utf8_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "Hello, {{{{ name }}}}!").unwrap();

        let text = load_text(file.path()).unwrap();
        assert_eq!(text, "Hello, {{ name }}!");
    }

    #[test]
    fn load_text_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.tpl");

        let err = load_text(&path).unwrap_err();
        match err {
            ProcessError::ResourceLoad { path: reported, .. } => assert_eq!(reported, path),
            other => panic!("expected resource load error, got {:?}", other),
        }
    }

    #[test]
    fn load_text_rejects_invalid_utf8() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&[0xff, 0xfe, 0x00]).unwrap();

        assert!(matches!(
            load_text(file.path()),
            Err(ProcessError::ResourceLoad { .. })
        ));
    }
}
