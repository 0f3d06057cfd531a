//! Readers recognizing the line structure of Vim help files.

mod headings;
mod patterns;
mod sections;
mod tags;

pub use headings::{is_subsection_title, parse_section_heading, parse_subsection_heading};
pub use patterns::{
    is_code_example_start, is_modeline, is_section_separator, CODE_EXAMPLE_START, MODELINE_PREFIX,
    SECTION_SEPARATOR, SECTION_TITLE, SUBSECTION_TITLE, XREF_TARGET_SEP,
};
pub use sections::{split_sections, SectionItem, SectionItems};
pub use tags::extract_title_and_tags;
