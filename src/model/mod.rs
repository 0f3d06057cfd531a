//! Data model for help documents and their AsciiDoc rendering.

mod coverage;
mod document;
mod heading;
mod output;

pub use coverage::{CoverageReport, LineTally};
pub use document::Document;
pub use heading::{Heading, HeadingLevel};
pub use output::{AdocWriter, LITERAL_FENCE, SOURCE_FENCE};
