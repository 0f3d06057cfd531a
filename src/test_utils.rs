//! Shared test utilities.

use crate::config::Encoding;
use crate::model::Document;

/// A top-level rule line.
pub fn rule() -> String {
    "=".repeat(78)
}

/// Creates an ASCII document named `sample.txt`.
pub fn make_document(text: &str) -> Document {
    Document::new("sample.txt", Encoding::Ascii, text)
}

/// A small help file exercising every construct the converter knows.
pub fn sample_help_file() -> String {
    let rule = rule();
    let mut text = [
        "*sample.txt*\tFor Vim version 9.0.  Last change: 2024 Jan 01",
        "",
        "\t\t  SAMPLE REFERENCE MANUAL",
        "",
        "Sample documentation\t\t\t\t*sample*",
        "",
        "1. Introduction\t\t|sample-intro|",
        "2. Usage\t\t|sample-usage|",
        "",
        rule.as_str(),
        "1. Introduction\t\t\t\t\t\t*sample-intro*",
        "",
        "This is the introduction.  Use the command: >",
        "\t:help sample",
        "<",
        "And some text after it.",
        "",
        rule.as_str(),
        "2. Usage\t\t\t\t\t\t*sample-usage* *usage*",
        "",
        "2.1 BASIC USAGE\t\t\t\t\t\t*sample-basic*",
        "",
        "Type this: >",
        "",
        "    :set nocompatible",
        "    :syntax on",
        "",
        "Then continue.",
        "",
        "OPTIONS\t\t\t\t\t\t\t*sample-options*",
        "",
        "Nothing here.",
        "",
        rule.as_str(),
        " vim:tw=78:ts=8:noet:ft=help:norelax:",
    ]
    .join("\n");
    text.push('\n');
    text
}
