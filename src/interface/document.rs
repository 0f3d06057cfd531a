//! Whole-document conversion.

use crate::config::Config;
use crate::model::{AdocWriter, CoverageReport, Document, LineTally};
use crate::readers::split_sections;

use super::section::{process_preamble, process_section};

/// Rendering options for the conversion engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertOptions {
    /// Language tag of fenced example blocks.
    pub language: String,
    /// Emit a discrete heading with this title before the preamble.
    pub preamble_title: Option<String>,
    /// Append source numbering to headings.
    pub show_numbers: bool,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            language: "vim".to_string(),
            preamble_title: None,
            show_numbers: false,
        }
    }
}

impl ConvertOptions {
    /// Creates options using the language configured in `config`.
    pub fn from_config(config: &Config) -> Self {
        Self {
            language: config.language.clone(),
            ..Default::default()
        }
    }
}

/// Result of converting one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    /// AsciiDoc output lines.
    pub lines: Vec<String>,
    /// Line accounting for the input.
    pub report: CoverageReport,
}

impl Conversion {
    /// Returns the output as one string, lines joined with `\n`.
    pub fn output(&self) -> String {
        self.lines.join("\n")
    }
}

/// Converts a help document to AsciiDoc.
///
/// The text before the first rule is the preamble; every later section is
/// parsed for headings, subsections and example blocks.
pub fn convert_document(doc: &Document, options: &ConvertOptions) -> Conversion {
    let mut out = AdocWriter::new();
    out.push_line(format!("= {}", doc.name));
    out.push_line("");

    let lines = doc.lines();
    let mut tally = LineTally::default();
    for (index, section) in split_sections(&lines).into_iter().enumerate() {
        if index == 0 {
            tally += process_preamble(section, options, &mut out);
        } else {
            tally += process_section(section, options, &mut out);
        }
    }

    let report = CoverageReport::new(doc.name.as_str(), tally, doc.total_lines());
    if report.is_over_counted() {
        tracing::warn!(
            "{}: {} lines accounted for but only {} in the input",
            doc.name,
            report.accounted(),
            report.total
        );
    }

    Conversion {
        lines: out.into_lines(),
        report,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Encoding;
    use crate::test_utils::{make_document, rule, sample_help_file};
    use pretty_assertions::assert_eq;

    fn convert(text: &str) -> Conversion {
        convert_document(&make_document(text), &ConvertOptions::default())
    }

    #[test]
    fn test_end_to_end() {
        let text = [
            "*sample.txt*\tA sample",
            rule().as_str(),
            "1. TITLE\t\t*tag*",
            "SUBSECTION ONE\t\tmore",
            "plain text",
        ]
        .join("\n");

        let conversion = convert(&text);
        assert_eq!(
            conversion.lines,
            vec![
                "= sample.txt",
                "",
                "....",
                "*sample.txt*\tA sample",
                "....",
                "== [[tag]]TITLE",
                "=== SUBSECTION ONE",
                "....",
                "plain text",
                "....",
            ]
        );
        assert_eq!(conversion.report.to_string(), "sample.txt: 3/2/5 (5)");
    }

    #[test]
    fn test_every_line_accounted_once() {
        let text = sample_help_file();
        let conversion = convert(&text);
        assert!(conversion.report.is_complete(), "{}", conversion.report);
        assert_eq!(conversion.report.total, text.lines().count());
    }

    #[test]
    fn test_sample_structure() {
        let conversion = convert(&sample_help_file());
        let lines = &conversion.lines;
        let position = |needle: &str| {
            lines
                .iter()
                .position(|l| l == needle)
                .unwrap_or_else(|| panic!("missing line {needle:?}"))
        };

        let intro = position("== [[sample-intro]]Introduction");
        let usage = position("== [[sample-usage,usage]]Usage");
        let basic = position("=== [[sample-basic]]BASIC USAGE");
        let example = position(":set nocompatible");
        let options = position("=== [[sample-options]]OPTIONS");
        assert!(intro < usage && usage < basic && basic < example && example < options);

        assert_eq!(lines[example + 1], ":syntax on");
        assert_eq!(lines[example + 2], "----");
        assert!(!conversion.output().contains("norelax"));
    }

    #[test]
    fn test_idempotent() {
        let text = sample_help_file();
        assert_eq!(convert(&text), convert(&text));
    }

    #[test]
    fn test_modeline_section_dropped() {
        let text = format!("pre\n{}\nbody\n{}\nvim:tw=78:ts=8:ft=help:norelax:\n", rule(), rule());
        let conversion = convert(&text);
        assert!(!conversion.output().contains("vim:tw=78"));
        assert!(conversion.report.is_complete());
    }

    #[test]
    fn test_no_rules_is_all_preamble() {
        let conversion = convert("INTRO\t\t*intro*\ntext >\n  code\n");
        assert_eq!(
            conversion.output(),
            "= sample.txt\n\n....\nINTRO\t\t*intro*\ntext >\n  code\n...."
        );
        assert_eq!(conversion.report.misses, 3);
    }

    #[test]
    fn test_uses_configured_language() {
        let mut config = Config::default();
        config.language = "vimscript".to_string();
        let options = ConvertOptions::from_config(&config);

        let text = format!("pre\n{}\nTitle\nrun: >\n  :echo 1\n", rule());
        let doc = Document::new("x.txt", Encoding::Ascii, text);
        let conversion = convert_document(&doc, &options);
        assert!(conversion.lines.contains(&"[source,vimscript]".to_string()));
    }
}
