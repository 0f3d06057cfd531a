//! AsciiDoc output buffer.

use super::heading::Heading;

/// Fence delimiting literal passthrough text.
pub const LITERAL_FENCE: &str = "....";

/// Fence delimiting a source block.
pub const SOURCE_FENCE: &str = "----";

/// Accumulates output lines and tracks whether a literal block is open.
///
/// Literal blocks are opened and closed idempotently, so nested callers can
/// request them without checking first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdocWriter {
    lines: Vec<String>,
    in_literal: bool,
}

impl AdocWriter {
    /// Creates an empty writer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one line verbatim.
    pub fn push_line(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    /// Opens a literal block unless one is already open.
    pub fn open_literal(&mut self) {
        if !self.in_literal {
            self.lines.push(LITERAL_FENCE.to_string());
        }
        self.in_literal = true;
    }

    /// Closes the literal block if one is open.
    pub fn close_literal(&mut self) {
        if self.in_literal {
            self.lines.push(LITERAL_FENCE.to_string());
        }
        self.in_literal = false;
    }

    /// Returns true while a literal block is open.
    pub fn is_literal_open(&self) -> bool {
        self.in_literal
    }

    /// Appends a heading line.
    pub fn heading(&mut self, heading: &Heading, show_numbers: bool) {
        self.lines.push(heading.render(show_numbers));
    }

    /// Appends a fenced source block.
    pub fn source_block<S: AsRef<str>>(&mut self, language: &str, body: &[S]) {
        self.lines.push(format!("[source,{}]", language));
        self.lines.push(SOURCE_FENCE.to_string());
        self.lines
            .extend(body.iter().map(|line| AsRef::<str>::as_ref(line).to_string()));
        self.lines.push(SOURCE_FENCE.to_string());
    }

    /// Returns the lines written so far.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Consumes the writer, returning its lines.
    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }
}
