//! Configuration data structures.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::encoding::Encoding;
use crate::errors::{ConvertError, Result};

/// Static per-file tables consulted by the batch driver.
///
/// Loaded once and never mutated; pass it by reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Files skipped entirely.
    #[serde(default = "default_ignored_files")]
    pub ignored_files: Vec<String>,

    /// Files whose structure the converter does not understand.
    #[serde(default = "default_weird_format_files")]
    pub weird_format_files: Vec<String>,

    /// Encoding name to the files declared in it. First match wins.
    #[serde(default = "default_encodings")]
    pub encodings: IndexMap<String, Vec<String>>,

    /// Language tag used for fenced example blocks.
    #[serde(default = "default_language")]
    pub language: String,

    /// Extension of files written into an output directory.
    #[serde(default = "default_output_extension")]
    pub output_extension: String,
}

fn default_ignored_files() -> Vec<String> {
    to_strings(&[
        "tags.txt",
        "vim_faq.txt",
        "if_sniff.txt",
        "os_vms.txt",
        "pi_getscript.txt",
        "pi_logipat.txt",
    ])
}

fn default_weird_format_files() -> Vec<String> {
    // double-guarded title
    to_strings(&["pi_tar.txt", "pi_zip.txt"])
}

fn default_encodings() -> IndexMap<String, Vec<String>> {
    let mut encodings = IndexMap::new();
    encodings.insert(
        Encoding::Utf8.to_string(),
        to_strings(&[
            "arabic.txt",
            "digraph.txt",
            "hebrew.txt",
            "mbyte.txt",
            "options.txt",
            "pattern.txt",
            "pi_netrw.txt",
            "russian.txt",
            "syntax.txt",
            "todo.txt",
            "various.txt",
            "version7.txt",
            "version8.txt",
        ]),
    );
    encodings.insert(
        Encoding::Latin1.to_string(),
        to_strings(&[
            "eval.txt",
            "farsi.txt",
            "map.txt",
            "mlang.txt",
            "quotes.txt",
            "spell.txt",
            "usr_24.txt",
            "version6.txt",
        ]),
    );
    encodings
}

fn default_language() -> String {
    "vim".to_string()
}

fn default_output_extension() -> String {
    "adoc".to_string()
}

fn to_strings(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ignored_files: default_ignored_files(),
            weird_format_files: default_weird_format_files(),
            encodings: default_encodings(),
            language: default_language(),
            output_extension: default_output_extension(),
        }
    }
}

impl Config {
    /// Creates a new default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks that every key of the encoding table names a known encoding.
    pub fn validate(&self) -> Result<()> {
        for name in self.encodings.keys() {
            name.parse::<Encoding>()?;
        }
        if self.language.trim().is_empty() {
            return Err(ConvertError::Config("language must not be empty".to_string()));
        }
        Ok(())
    }

    /// Returns true if the file should be skipped entirely.
    pub fn is_ignored(&self, base_name: &str) -> bool {
        self.ignored_files.iter().any(|f| f == base_name)
    }

    /// Returns true if the file has a structure the converter cannot handle.
    pub fn is_weird_format(&self, base_name: &str) -> bool {
        self.weird_format_files.iter().any(|f| f == base_name)
    }

    /// Resolves the declared encoding of a file from its base name.
    ///
    /// Files not listed in the table default to ASCII.
    pub fn encoding_for(&self, base_name: &str) -> Encoding {
        self.encodings
            .iter()
            .find(|(_, files)| files.iter().any(|f| f == base_name))
            .and_then(|(name, _)| name.parse().ok())
            .unwrap_or_default()
    }
}
