//! Recognition of example blocks embedded in help prose.
//!
//! A block opens on a line ending in ` >` (or a lone `>`), continues over
//! empty and indented lines, and ends at the first line starting in column
//! one. A leading `<` on that line is a pure end marker and is dropped.

use crate::model::AdocWriter;
use crate::readers::is_code_example_start;

use super::{LineHook, LineOutcome};

/// State of the example-block recognizer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BlockState {
    /// Not inside a block.
    #[default]
    None,
    /// The opening line was just seen.
    Starting,
    /// Collecting block lines.
    InBlock,
}

/// Hook that turns example blocks into fenced source blocks.
#[derive(Debug, Clone)]
pub struct CodeExampleHook {
    language: String,
    state: BlockState,
    lines: Vec<String>,
}

impl CodeExampleHook {
    /// Creates a hook tagging blocks with `language`.
    pub fn new(language: impl Into<String>) -> Self {
        Self {
            language: language.into(),
            state: BlockState::None,
            lines: Vec::new(),
        }
    }

    /// Returns the current state.
    pub fn state(&self) -> BlockState {
        self.state
    }

    fn emit_block(&mut self, out: &mut AdocWriter) {
        out.close_literal();
        let mut lines = std::mem::take(&mut self.lines);
        if lines.first().is_some_and(|l| l.trim().is_empty()) {
            lines.remove(0);
        }
        let mut body = dedent(&lines);
        if body.last().is_some_and(|l| l.is_empty()) {
            body.pop();
        }
        out.source_block(&self.language, &body);
    }
}

impl LineHook for CodeExampleHook {
    fn name(&self) -> &str {
        "code-examples"
    }

    fn process_line(&mut self, line: &str, out: &mut AdocWriter) -> LineOutcome {
        let mut line = line;

        if self.state == BlockState::InBlock {
            if line.is_empty() || line.starts_with([' ', '\t']) {
                self.lines.push(line.to_string());
                return LineOutcome::Claimed;
            }

            self.state = BlockState::None;
            self.emit_block(out);
            out.open_literal();

            line = line.strip_prefix('<').unwrap_or(line);
            if !line.trim_end_matches([' ', '\t']).ends_with('>') {
                out.push_line(line);
                return LineOutcome::ClaimedWithOutput;
            }
            // The closing line looks like an opener itself; re-check it below.
        }

        if is_code_example_start(line) {
            self.state = BlockState::Starting;
            out.push_line(line.trim_end_matches([' ', '\t', '>']));
            self.lines.clear();
            return LineOutcome::ClaimedWithOutput;
        }

        LineOutcome::NotClaimed
    }

    fn post_process_line(&mut self) {
        if self.state == BlockState::Starting {
            self.state = BlockState::InBlock;
        }
    }

    fn finish(&mut self, out: &mut AdocWriter) {
        if self.state == BlockState::InBlock && !self.lines.is_empty() {
            tracing::debug!(
                "{}: block left open at end of subsection ({:?})",
                self.name(),
                self.state()
            );
            self.emit_block(out);
        }
        self.state = BlockState::None;
    }
}

/// Removes the leading whitespace common to all non-blank lines.
///
/// Blank lines become empty. Tabs and spaces are not interchangeable.
pub fn dedent<S: AsRef<str>>(lines: &[S]) -> Vec<String> {
    let margin = lines
        .iter()
        .map(AsRef::<str>::as_ref)
        .filter(|l| !l.trim().is_empty())
        .map(|l| &l[..l.len() - l.trim_start_matches([' ', '\t']).len()])
        .reduce(common_prefix)
        .unwrap_or("");

    lines
        .iter()
        .map(|l| {
            let l: &str = l.as_ref();
            if l.trim().is_empty() {
                String::new()
            } else {
                l[margin.len()..].to_string()
            }
        })
        .collect()
}

fn common_prefix<'a>(a: &'a str, b: &str) -> &'a str {
    let len = a
        .bytes()
        .zip(b.bytes())
        .take_while(|(x, y)| x == y)
        .count();
    &a[..len]
}
