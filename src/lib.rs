//! vimdoc2adoc - Vim help to AsciiDoc converter
//!
//! This library converts files written in the Vim help format into AsciiDoc,
//! keeping the section hierarchy, cross-reference tags and example blocks.
//!
//! # Features
//!
//! - **Convert**: Turn one help file into an AsciiDoc document
//! - **Batch**: Process a whole `runtime/doc` directory, in-process or through
//!   an external command
//! - **Coverage**: Account for every input line as recognized or passed through
//!
//! # Example
//!
//! ```no_run
//! use vimdoc2adoc::config::Encoding;
//! use vimdoc2adoc::interface::{convert_document, ConvertOptions};
//! use vimdoc2adoc::io::read_document;
//!
//! let doc = read_document("intro.txt".as_ref(), Encoding::Ascii).unwrap();
//! let conversion = convert_document(&doc, &ConvertOptions::default());
//! println!("{}", conversion.output());
//! eprintln!("{}", conversion.report);
//! ```

pub mod commands;
pub mod config;
pub mod errors;
pub mod hooks;
pub mod interface;
pub mod io;
pub mod model;
pub mod readers;

#[cfg(test)]
mod test_utils;

// Re-export commonly used types
pub use config::{Config, Encoding};
pub use errors::{ConvertError, Result};
pub use interface::{convert_document, Conversion, ConvertOptions};
pub use model::{CoverageReport, Document};

// Re-export command options
pub use commands::{BatchOptions, ConvertCommandOptions};
