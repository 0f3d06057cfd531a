//! Line patterns of the Vim help format.

use once_cell::sync::Lazy;
use regex::Regex;

/// Top-level rule: exactly 78 `=` characters.
pub static SECTION_SEPARATOR: Lazy<Regex> = Lazy::new(|| Regex::new(r"^={78}$").unwrap());

/// Numbered section title such as `1. Introduction\t\t*intro*`.
pub static SECTION_TITLE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?P<number>[\d.]+\.)\s+(?P<title>[A-Za-z \d.-]+)(?P<tail>\t+.*)$").unwrap()
});

/// All-caps subsection title, optionally numbered like `3.2 `, followed by tabs.
pub static SUBSECTION_TITLE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:(?P<number>\d{1,2}\.\d{1,2}) )?(?P<title>[A-Z][A-Z -]+)(?P<tail>\t+.*)$")
        .unwrap()
});

/// Boundary before a right-aligned cross-reference target.
pub static XREF_TARGET_SEP: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*\s+\*|\t\*").unwrap());

/// Line introducing an example block: a lone `>` or text ending in ` >`.
pub static CODE_EXAMPLE_START: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(?:.* )?>$").unwrap());

/// Prefix of the editor modeline closing a help file.
pub const MODELINE_PREFIX: &str = "vim:";

/// Returns true if the line is a top-level rule.
pub fn is_section_separator(line: &str) -> bool {
    SECTION_SEPARATOR.is_match(line)
}

/// Returns true if the line opens an example block.
///
/// Trailing spaces and tabs are ignored.
pub fn is_code_example_start(line: &str) -> bool {
    CODE_EXAMPLE_START.is_match(line.trim_end_matches([' ', '\t']))
}

/// Returns true if the line is an editor modeline.
pub fn is_modeline(line: &str) -> bool {
    line.trim_start().starts_with(MODELINE_PREFIX)
}
