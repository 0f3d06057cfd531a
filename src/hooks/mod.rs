//! Hooks that claim body lines before they are passed through verbatim.

mod code_examples;

pub use code_examples::{BlockState, CodeExampleHook};

use crate::model::AdocWriter;

/// What a hook did with one body line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineOutcome {
    /// The line is left to the default passthrough path.
    NotClaimed,
    /// The line was consumed and nothing was written for it yet.
    Claimed,
    /// The line was consumed and its output has already been written.
    ClaimedWithOutput,
}

impl LineOutcome {
    /// Returns true if the hook consumed the line.
    pub fn is_claimed(&self) -> bool {
        !matches!(self, Self::NotClaimed)
    }
}

/// A stateful processor fed every body line of a subsection.
pub trait LineHook {
    /// Returns the name of this hook.
    fn name(&self) -> &str;

    /// Processes one line, possibly writing output.
    fn process_line(&mut self, line: &str, out: &mut AdocWriter) -> LineOutcome;

    /// Called after every line, claimed or not.
    fn post_process_line(&mut self) {}

    /// Called once after the last line of the subsection.
    fn finish(&mut self, _out: &mut AdocWriter) {}
}
