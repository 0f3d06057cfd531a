//! Headings recovered from section and subsection title lines.

use std::fmt;

/// Level of a rendered heading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadingLevel {
    /// Title of a top-level section (`==`).
    Section,
    /// Title of an all-caps subsection (`===`).
    Subsection,
}

impl HeadingLevel {
    /// AsciiDoc marker for this level.
    pub fn marker(&self) -> &'static str {
        match self {
            Self::Section => "==",
            Self::Subsection => "===",
        }
    }
}

/// A heading with its cross-reference anchors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heading {
    pub level: HeadingLevel,
    pub title: String,
    /// Anchor ids, in encounter order.
    pub tags: Vec<String>,
    /// Source numbering such as `1.` or `3.2`, if any.
    pub number: Option<String>,
}

impl Heading {
    /// Creates a heading without numbering.
    pub fn new(level: HeadingLevel, title: impl Into<String>, tags: Vec<String>) -> Self {
        Self {
            level,
            title: title.into(),
            tags,
            number: None,
        }
    }

    /// Sets the source numbering.
    pub fn with_number(mut self, number: Option<String>) -> Self {
        self.number = number;
        self
    }

    /// Renders the heading line, optionally suffixed with its source number.
    pub fn render(&self, show_numbers: bool) -> String {
        let mut line = format!("{} ", self.level.marker());
        if !self.tags.is_empty() {
            line.push_str(&format!("[[{}]]", self.tags.join(",")));
        }
        line.push_str(&self.title);
        if show_numbers {
            if let Some(number) = &self.number {
                line.push_str(&format!(" (`{}`)", number));
            }
        }
        line
    }
}

impl fmt::Display for Heading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(false))
    }
}
