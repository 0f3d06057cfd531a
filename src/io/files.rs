//! File system helpers.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::Encoding;
use crate::errors::Result;
use crate::model::Document;

/// Reads and decodes a help file.
pub fn read_document(path: &Path, encoding: Encoding) -> Result<Document> {
    let bytes = fs::read(path)?;
    let text = encoding.decode(&bytes, path)?;
    Ok(Document::from_path(path, encoding, text))
}

/// Resolves where the conversion of `input` is written.
///
/// An existing directory receives `<stem>.<extension>`; anything else is
/// taken as the output file itself.
pub fn resolve_output_path(input: &Path, output: &Path, extension: &str) -> PathBuf {
    if output.is_dir() {
        output_file_in(output, input, extension)
    } else {
        output.to_path_buf()
    }
}

/// Path of the conversion of `input` inside `dir`, named `<stem>.<extension>`.
///
/// `dir` need not exist yet.
pub fn output_file_in(dir: &Path, input: &Path, extension: &str) -> PathBuf {
    let stem = input.file_stem().unwrap_or(input.as_os_str());
    dir.join(format!("{}.{}", stem.to_string_lossy(), extension))
}

/// Writes output lines as UTF-8, one per line.
pub fn write_output(path: &Path, lines: &[String]) -> Result<()> {
    let mut content = lines.join("\n");
    content.push('\n');
    fs::write(path, content)?;
    tracing::debug!("Wrote {}", path.display());
    Ok(())
}

/// Lists the entries of a directory, sorted by name.
pub fn list_directory(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut entries = fs::read_dir(dir)?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<std::io::Result<Vec<_>>>()?;
    entries.sort();
    Ok(entries)
}
