//! Splitting a help file into sections and subsections.

use crate::model::Heading;

use super::headings::{is_subsection_title, parse_subsection_heading};
use super::patterns::is_section_separator;

/// Splits lines on top-level rules.
///
/// Rule lines are dropped; `n` rules always yield `n + 1` sections, the
/// first of which is the preamble.
pub fn split_sections<'a>(lines: &'a [&'a str]) -> Vec<&'a [&'a str]> {
    lines.split(|line| is_section_separator(line)).collect()
}

/// One piece of a section, in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionItem<'a> {
    /// An all-caps subsection title line.
    Title(Heading),
    /// A run of lines that are not subsection titles.
    Body(&'a [&'a str]),
}

/// Iterator over the titles and bodies of a section.
///
/// The first item is always the body preceding the first title, possibly
/// empty. After that every title is followed by its body when it has one.
#[derive(Debug, Clone)]
pub struct SectionItems<'a> {
    rest: &'a [&'a str],
    started: bool,
}

impl<'a> SectionItems<'a> {
    /// Creates an iterator over a section's lines.
    pub fn new(lines: &'a [&'a str]) -> Self {
        Self {
            rest: lines,
            started: false,
        }
    }

    fn take_body(&mut self) -> &'a [&'a str] {
        let end = self
            .rest
            .iter()
            .position(|line| is_subsection_title(line))
            .unwrap_or(self.rest.len());
        let (body, rest) = self.rest.split_at(end);
        self.rest = rest;
        body
    }
}

impl<'a> Iterator for SectionItems<'a> {
    type Item = SectionItem<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if !self.started {
            self.started = true;
            return Some(SectionItem::Body(self.take_body()));
        }

        let (first, rest) = self.rest.split_first()?;
        match parse_subsection_heading(first) {
            Some(heading) => {
                self.rest = rest;
                Some(SectionItem::Title(heading))
            }
            None => Some(SectionItem::Body(self.take_body())),
        }
    }
}
