//! Conversion engine: documents, sections and subsections.

mod document;
mod section;
mod subsection;

pub use document::{convert_document, Conversion, ConvertOptions};
pub use section::{process_preamble, process_section};
pub use subsection::process_subsection;
