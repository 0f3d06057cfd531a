//! Conversion of top-level sections.

use crate::model::{AdocWriter, LineTally};
use crate::readers::{SectionItem, SectionItems};

use super::document::ConvertOptions;
use super::subsection::process_subsection;

/// Emits the preamble as one opaque literal block.
///
/// The preamble is never scanned for structure; all its lines are misses.
pub fn process_preamble(
    lines: &[&str],
    options: &ConvertOptions,
    out: &mut AdocWriter,
) -> LineTally {
    if let Some(title) = &options.preamble_title {
        out.push_line("[discrete]");
        out.push_line(format!("== {}", title));
    }
    out.open_literal();
    for line in lines {
        out.push_line(*line);
    }
    out.close_literal();
    LineTally::new(0, lines.len())
}

/// Converts a section that follows a top-level rule.
///
/// The rule itself is credited as one hit.
pub fn process_section(
    lines: &[&str],
    options: &ConvertOptions,
    out: &mut AdocWriter,
) -> LineTally {
    let mut tally = LineTally::new(1, 0);

    for (index, item) in SectionItems::new(lines).enumerate() {
        match item {
            SectionItem::Title(heading) => {
                out.heading(&heading, options.show_numbers);
                tally.hit();
            }
            SectionItem::Body(body) => {
                tally += process_subsection(body, index == 0, options, out);
            }
        }
    }

    tally
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_preamble_is_opaque() {
        let lines = [
            "*help.txt*\tFor Vim",
            "",
            "SHAPED LIKE A TITLE\t\t*x*",
            "Example: >",
            "  code",
        ];
        let mut out = AdocWriter::new();
        let tally = process_preamble(&lines, &ConvertOptions::default(), &mut out);

        let mut expected = vec!["...."];
        expected.extend(lines);
        expected.push("....");
        assert_eq!(out.into_lines(), expected);
        assert_eq!(tally, LineTally::new(0, 5));
    }

    #[test]
    fn test_preamble_title() {
        let options = ConvertOptions {
            preamble_title: Some("First section".to_string()),
            ..Default::default()
        };
        let mut out = AdocWriter::new();
        process_preamble(&["x"], &options, &mut out);
        assert_eq!(out.into_lines(), vec!["[discrete]", "== First section", "....", "x", "...."]);
    }

    #[test]
    fn test_section_with_subsections() {
        let lines = [
            "1. TITLE\t\t*tag*",
            "intro",
            "SUBSECTION ONE\t\tmore",
            "plain text",
        ];
        let mut out = AdocWriter::new();
        let tally = process_section(&lines, &ConvertOptions::default(), &mut out);

        assert_eq!(
            out.into_lines(),
            vec![
                "== [[tag]]TITLE",
                "....",
                "intro",
                "....",
                "=== SUBSECTION ONE",
                "....",
                "plain text",
                "....",
            ]
        );
        // Rule + section title + subsection title are hits.
        assert_eq!(tally, LineTally::new(3, 2));
        assert_eq!(tally.accounted(), lines.len() + 1);
    }

    #[test]
    fn test_show_numbers() {
        let lines = ["2. Usage\t*usage*", "2.1 BASICS\t\t*basics*"];
        let options = ConvertOptions {
            show_numbers: true,
            ..Default::default()
        };
        let mut out = AdocWriter::new();
        process_section(&lines, &options, &mut out);
        assert_eq!(
            out.into_lines(),
            vec!["== [[usage]]Usage (`2.`)", "=== [[basics]]BASICS (`2.1`)"]
        );
    }
}
