//! Heading recognition for section and subsection title lines.

use crate::model::{Heading, HeadingLevel};

use super::patterns::{SECTION_TITLE, SUBSECTION_TITLE};
use super::tags::extract_title_and_tags;

/// Parses the opening line of a section into a section heading.
///
/// Numbered titles (`1. Title\t\t*tag*`) keep their number aside; any other
/// line is split into title and tags as is.
pub fn parse_section_heading(line: &str) -> Heading {
    match SECTION_TITLE.captures(line) {
        Some(caps) => {
            let (_, tags) = extract_title_and_tags(&caps["tail"]);
            Heading::new(HeadingLevel::Section, caps["title"].trim_end(), tags)
                .with_number(Some(caps["number"].to_string()))
        }
        None => {
            let (title, tags) = extract_title_and_tags(line);
            Heading::new(HeadingLevel::Section, title, tags)
        }
    }
}

/// Parses an all-caps subsection title line, if the line is one.
pub fn parse_subsection_heading(line: &str) -> Option<Heading> {
    let caps = SUBSECTION_TITLE.captures(line)?;
    let (_, tags) = extract_title_and_tags(&caps["tail"]);
    let number = caps.name("number").map(|m| m.as_str().to_string());
    Some(Heading::new(HeadingLevel::Subsection, caps["title"].trim_end(), tags).with_number(number))
}

/// Returns true if the line is an all-caps subsection title.
pub fn is_subsection_title(line: &str) -> bool {
    SUBSECTION_TITLE.is_match(line)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbered_section_heading() {
        let heading = parse_section_heading("1. TITLE\t\t*tag*");
        assert_eq!(heading.to_string(), "== [[tag]]TITLE");
        assert_eq!(heading.number.as_deref(), Some("1."));
    }

    #[test]
    fn test_unnumbered_section_heading() {
        let heading = parse_section_heading("Introduction\t\t\t\t*intro* *introduction*");
        assert_eq!(heading.title, "Introduction");
        assert_eq!(heading.tags, vec!["intro", "introduction"]);
        assert!(heading.number.is_none());
    }

    #[test]
    fn test_subsection_heading_without_tags() {
        let heading = parse_subsection_heading("SUBSECTION ONE\t\tmore").unwrap();
        assert_eq!(heading.to_string(), "=== SUBSECTION ONE");
    }

    #[test]
    fn test_subsection_heading_with_number_and_tags() {
        let heading = parse_subsection_heading("2.1 WINDOW SIZE\t\t\t*win-size*").unwrap();
        assert_eq!(heading.title, "WINDOW SIZE");
        assert_eq!(heading.tags, vec!["win-size"]);
        assert_eq!(heading.number.as_deref(), Some("2.1"));
    }

    #[test]
    fn test_not_a_subsection() {
        assert!(parse_subsection_heading("plain prose line").is_none());
        assert!(!is_subsection_title("CAPS WITHOUT TAB"));
    }
}
