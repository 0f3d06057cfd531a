//! Conversion of one subsection.

use crate::hooks::{CodeExampleHook, LineHook};
use crate::model::{AdocWriter, LineTally};
use crate::readers::{is_modeline, parse_section_heading};

use super::document::ConvertOptions;

/// Converts the lines of one subsection into `out`.
///
/// The first subsection of a section carries the section title within its
/// first two lines, or a modeline, in which case the whole subsection is
/// dropped. Body lines go through the example-block hook; lines it does not
/// claim are copied into a literal block.
pub fn process_subsection(
    lines: &[&str],
    is_first: bool,
    options: &ConvertOptions,
    out: &mut AdocWriter,
) -> LineTally {
    let mut tally = LineTally::default();
    let mut body = lines;

    if is_first {
        let mut examined = 0;
        for line in lines.iter().take(2) {
            examined += 1;
            tally.hit();
            if line.trim().is_empty() {
                continue;
            }
            if is_modeline(line) {
                tally.hits += lines.len() - examined;
                return tally;
            }
            out.heading(&parse_section_heading(line), options.show_numbers);
            break;
        }
        body = &lines[examined..];
    }

    if body.is_empty() {
        return tally;
    }

    let mut hook = CodeExampleHook::new(options.language.as_str());
    out.open_literal();
    for line in body {
        if hook.process_line(line, out).is_claimed() {
            tally.hit();
        } else {
            tally.miss();
            out.push_line(*line);
        }
        hook.post_process_line();
    }
    hook.finish(out);
    out.close_literal();

    tally
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn convert(lines: &[&str], is_first: bool) -> (Vec<String>, LineTally) {
        let mut out = AdocWriter::new();
        let tally = process_subsection(lines, is_first, &ConvertOptions::default(), &mut out);
        (out.into_lines(), tally)
    }

    #[test]
    fn test_first_subsection_heading_and_body() {
        let (lines, tally) = convert(&["1. TITLE\t\t*tag*", "some text"], true);
        assert_eq!(lines, vec!["== [[tag]]TITLE", "....", "some text", "...."]);
        assert_eq!(tally, LineTally::new(1, 1));
    }

    #[test]
    fn test_first_subsection_skips_leading_blank() {
        let (lines, tally) = convert(&["", "Title\t*t*", "text"], true);
        assert_eq!(lines, vec!["== [[t]]Title", "....", "text", "...."]);
        assert_eq!(tally, LineTally::new(2, 1));
    }

    #[test]
    fn test_modeline_discarded() {
        let (lines, tally) = convert(&["vim:tw=78:ts=8:ft=help:norelax:"], true);
        assert!(lines.is_empty());
        assert_eq!(tally, LineTally::new(1, 0));
    }

    #[test]
    fn test_modeline_after_blank_counts_everything() {
        let (lines, tally) = convert(&["", " vim:tw=78:ts=8:ft=help:norelax:", ""], true);
        assert!(lines.is_empty());
        assert_eq!(tally.hits, 3);
        assert_eq!(tally.misses, 0);
    }

    #[test]
    fn test_plain_subsection() {
        let (lines, tally) = convert(&["plain", "text"], false);
        assert_eq!(lines, vec!["....", "plain", "text", "...."]);
        assert_eq!(tally, LineTally::new(0, 2));
    }

    #[test]
    fn test_subsection_with_example() {
        let (lines, tally) = convert(&["Use: >", "\t:q", "Done."], false);
        assert_eq!(
            lines,
            vec![
                "....",
                "Use:",
                "....",
                "[source,vim]",
                "----",
                ":q",
                "----",
                "....",
                "Done.",
                "....",
            ]
        );
        assert_eq!(tally, LineTally::new(3, 0));
    }

    #[test]
    fn test_empty_subsection() {
        let (lines, tally) = convert(&[], false);
        assert!(lines.is_empty());
        assert_eq!(tally.accounted(), 0);
    }
}
