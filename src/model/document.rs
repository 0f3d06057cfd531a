//! Source help documents.

use std::path::Path;

use crate::config::Encoding;

/// One decoded Vim help file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// Base file name, used in the title and the coverage report.
    pub name: String,
    pub encoding: Encoding,
    pub text: String,
}

impl Document {
    /// Creates a document from already decoded text.
    pub fn new(name: impl Into<String>, encoding: Encoding, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            encoding,
            text: text.into(),
        }
    }

    /// Creates a document named after the base name of `path`.
    pub fn from_path(path: &Path, encoding: Encoding, text: String) -> Self {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Self::new(name, encoding, text)
    }

    /// Physical lines of the text.
    pub fn lines(&self) -> Vec<&str> {
        self.text.lines().collect()
    }

    /// Number of physical lines.
    pub fn total_lines(&self) -> usize {
        self.text.lines().count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_path_uses_base_name() {
        let doc = Document::from_path(
            Path::new("runtime/doc/intro.txt"),
            Encoding::Ascii,
            "a\r\nb\n".to_string(),
        );
        assert_eq!(doc.name, "intro.txt");
        assert_eq!(doc.lines(), vec!["a", "b"]);
        assert_eq!(doc.total_lines(), 2);
    }
}
