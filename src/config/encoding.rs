//! Text encodings declared for Vim help files.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{ConvertError, Result};

/// Character encoding of a source help file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Encoding {
    /// 7-bit ASCII; any byte above 0x7f is an error.
    #[default]
    #[serde(rename = "ascii")]
    Ascii,
    /// UTF-8, strictly validated.
    #[serde(rename = "utf-8", alias = "utf8")]
    Utf8,
    /// ISO-8859-1; every byte maps to the code point of the same value.
    #[serde(rename = "latin1", alias = "latin-1", alias = "iso-8859-1")]
    Latin1,
}

impl Encoding {
    /// Returns the canonical name of this encoding.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ascii => "ascii",
            Self::Utf8 => "utf-8",
            Self::Latin1 => "latin1",
        }
    }

    /// Decodes raw bytes read from `path`.
    pub fn decode(&self, bytes: &[u8], path: &Path) -> Result<String> {
        let error = |offset: usize| ConvertError::Decode {
            path: path.to_path_buf(),
            encoding: *self,
            offset,
        };

        match self {
            Self::Ascii => match bytes.iter().position(|b| !b.is_ascii()) {
                Some(offset) => Err(error(offset)),
                None => Ok(bytes.iter().map(|&b| char::from(b)).collect()),
            },
            Self::Utf8 => {
                String::from_utf8(bytes.to_vec()).map_err(|e| error(e.utf8_error().valid_up_to()))
            }
            Self::Latin1 => Ok(bytes.iter().map(|&b| char::from(b)).collect()),
        }
    }
}

impl FromStr for Encoding {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "ascii" | "us-ascii" => Ok(Self::Ascii),
            "utf-8" | "utf8" => Ok(Self::Utf8),
            "latin1" | "latin-1" | "iso-8859-1" => Ok(Self::Latin1),
            _ => Err(ConvertError::UnknownEncoding(s.to_string())),
        }
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
