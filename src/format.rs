//! Text formatting: raw extracted page text → normalized Markdown.
//!
//! This is a display formatter, not a document-structure parser. The heading
//! heuristic is intentionally naive — extracted PDF text carries no reliable
//! structure markers, so the best available signal is typography: an
//! all-uppercase line, or a short line ending in a colon, usually renders as
//! a section label. Everything else passes through as a paragraph.
//!
//! `format_page` is a pure function: no I/O, no failure path, empty input
//! maps to empty output. It is also idempotent on its own output — a line
//! that already carries the heading marker is left alone, so running the
//! formatter twice is the same as running it once.

/// Lines at or above this length never qualify for the colon heading rule.
const HEADING_MAX_LEN: usize = 100;

/// Markdown marker emitted in front of detected headings.
const HEADING_PREFIX: &str = "### ";

/// Normalize one page of raw extracted text into Markdown.
///
/// 1. Split into lines, trim each, drop lines empty after trimming.
/// 2. Prefix heading-like lines (see [`is_heading`]) with `### `.
/// 3. Join all emitted lines with a blank line between them.
///
/// Best-effort by design: the output is readable Markdown, not a faithful
/// reconstruction of the document's heading hierarchy.
pub fn format_page(raw: &str) -> String {
    let mut blocks: Vec<String> = Vec::new();

    for line in raw.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line.starts_with(HEADING_PREFIX) {
            // Already formatted; emitting it again unchanged keeps the
            // formatter idempotent.
            blocks.push(line.to_string());
        } else if is_heading(line) {
            blocks.push(format!("{HEADING_PREFIX}{line}"));
        } else {
            blocks.push(line.to_string());
        }
    }

    blocks.join("\n\n")
}

/// Heading heuristic: the entire line is uppercase, or the line is short and
/// ends with a colon.
///
/// "Uppercase" requires at least one cased character and no lowercase ones,
/// so lines of digits or punctuation do not qualify on their own.
fn is_heading(line: &str) -> bool {
    let has_cased = line.chars().any(|c| c.is_uppercase() || c.is_lowercase());
    let all_upper = has_cased && !line.chars().any(|c| c.is_lowercase());
    all_upper || (line.chars().count() < HEADING_MAX_LEN && line.ends_with(':'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_empty_output() {
        assert_eq!(format_page(""), "");
        assert_eq!(format_page("   \n\t\n  "), "");
    }

    #[test]
    fn uppercase_line_is_heading() {
        assert_eq!(format_page("EXECUTIVE SUMMARY"), "### EXECUTIVE SUMMARY");
    }

    #[test]
    fn short_colon_line_is_heading() {
        assert_eq!(format_page("TOTAL:"), "### TOTAL:");
        assert_eq!(format_page("Revenue by quarter:"), "### Revenue by quarter:");
    }

    #[test]
    fn body_text_passes_through() {
        assert_eq!(format_page("this is body text."), "this is body text.");
    }

    #[test]
    fn long_colon_line_is_not_heading() {
        let long = format!("{}:", "x".repeat(120));
        assert_eq!(format_page(&long), long);
    }

    #[test]
    fn digits_only_line_is_not_heading() {
        assert_eq!(format_page("2024 12 31"), "2024 12 31");
    }

    #[test]
    fn blank_lines_dropped_and_paragraphs_separated() {
        let input = "first line\n\n\n  second line  \n";
        assert_eq!(format_page(input), "first line\n\nsecond line");
    }

    #[test]
    fn mixed_page_formats_as_expected() {
        let input = "INTRODUCTION\nSome opening prose.\nKey figures:\nrevenue rose.";
        let expected =
            "### INTRODUCTION\n\nSome opening prose.\n\n### Key figures:\n\nrevenue rose.";
        assert_eq!(format_page(input), expected);
    }

    #[test]
    fn idempotent_on_normalized_input() {
        let inputs = [
            "### INTRODUCTION\n\nSome opening prose.",
            "TOTAL:\nbody text here.",
            "plain paragraph only",
            "### Key figures:\n\nrevenue rose.\n\n### SUMMARY",
        ];
        for input in inputs {
            let once = format_page(input);
            let twice = format_page(&once);
            assert_eq!(once, twice, "not idempotent for {input:?}");
        }
    }
}
