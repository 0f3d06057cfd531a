//! Cross-reference tag extraction.

use super::patterns::XREF_TARGET_SEP;

/// Splits a heading-like line into its visible title and trailing tags.
///
/// Tags are returned in encounter order, duplicates included, with `[` and
/// `]` escaped so they can serve as AsciiDoc anchor ids.
pub fn extract_title_and_tags(line: &str) -> (String, Vec<String>) {
    let mut parts = XREF_TARGET_SEP.split(line);
    let title = parts
        .next()
        .unwrap_or_default()
        .trim_end_matches([' ', '\t'])
        .to_string();

    let tags = parts
        .map(|part| escape_anchor(part.trim().trim_matches('*')))
        .collect();

    (title, tags)
}

fn escape_anchor(tag: &str) -> String {
    tag.replace('[', r"\[").replace(']', r"\]")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_tag() {
        let (title, tags) = extract_title_and_tags("Introduction\t\t\t*intro*");
        assert_eq!(title, "Introduction");
        assert_eq!(tags, vec!["intro"]);
    }

    #[test]
    fn test_multiple_tags_in_order() {
        let (title, tags) = extract_title_and_tags("Options\t\t*options* *opt* *options*");
        assert_eq!(title, "Options");
        assert_eq!(tags, vec!["options", "opt", "options"]);
        assert!(!title.contains('*'));
    }

    #[test]
    fn test_no_tags() {
        let (title, tags) = extract_title_and_tags("Just a title \t ");
        assert_eq!(title, "Just a title");
        assert!(tags.is_empty());
    }

    #[test]
    fn test_inline_emphasis_is_not_a_tag() {
        let (title, tags) = extract_title_and_tags("See *this* word");
        assert_eq!(title, "See *this* word");
        assert!(tags.is_empty());
    }

    #[test]
    fn test_brackets_escaped() {
        let (_, tags) = extract_title_and_tags("Motions\t*[count]* *]]*");
        assert_eq!(tags, vec![r"\[count\]", r"\]\]"]);
    }
}
