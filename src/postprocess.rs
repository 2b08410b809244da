//! Post-processing: deterministic cleanup of assembled Markdown documents.
//!
//! Extraction backends differ in small ways — `\r\n` line endings from
//! documents authored on Windows, stray runs of blank lines where a page had
//! whitespace-only text runs, missing trailing newlines. This module applies
//! a short chain of cheap string rules so every strategy's output has the
//! same envelope regardless of which backend produced it. Each rule is a
//! pure `&str → String` function with no shared state and is independently
//! testable.
//!
//! Rules run in order: line endings are normalised before blank-line
//! collapsing (a `\r\n\r\n` run must count as blank lines), and the
//! final-newline rule runs last.

use once_cell::sync::Lazy;
use regex::Regex;

/// Apply all cleanup rules to an assembled Markdown document.
///
/// The rules never touch content lines, so observable structure (page
/// headings, separators, embedded filenames) is preserved exactly.
pub fn tidy_markdown(input: &str) -> String {
    let s = normalise_line_endings(input);
    let s = collapse_blank_lines(&s);
    ensure_final_newline(&s)
}

// ── Rule 1: Normalise line endings ───────────────────────────────────────────

fn normalise_line_endings(input: &str) -> String {
    input.replace("\r\n", "\n").replace('\r', "\n")
}

// ── Rule 2: Collapse excessive blank lines ───────────────────────────────────

static RE_BLANK_LINES: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n{3,}").unwrap());

fn collapse_blank_lines(input: &str) -> String {
    RE_BLANK_LINES.replace_all(input, "\n\n").to_string()
}

// ── Rule 3: Ensure file ends with single newline ─────────────────────────────

fn ensure_final_newline(input: &str) -> String {
    let trimmed = input.trim_end();
    if trimmed.is_empty() {
        String::from("\n")
    } else {
        format!("{}\n", trimmed)
    }
}
