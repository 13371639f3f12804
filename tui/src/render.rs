//! Live diff rendering for the typing line.

use crossterm::style::Stylize;
use crossterm::terminal::{Clear, ClearType};
use crossterm::{cursor, queue, style::Print};
use std::io::Write;
use std::time::Duration;
use typetrial_core::matched_prefix;

/// The three spans of the typing line: correctly typed prefix, the stretch
/// of the target covered by wrong input, and the untyped remainder.
///
/// Spaces in the typed region become `·` so a typed space is visible.
pub fn diff_spans<'a>(input: &str, target: &'a str) -> (String, String, &'a str) {
    let matched = matched_prefix(input, target);

    // byte offset in target covering as many chars as were typed,
    // clamped to the target's end
    let typed_chars = input.chars().count();
    let typed_end = target
        .char_indices()
        .nth(typed_chars)
        .map(|(i, _)| i)
        .unwrap_or(target.len());

    let correct = target[..matched].replace(' ', "·");
    let wrong = target[matched..typed_end].replace(' ', "·");

    (correct, wrong, &target[typed_end..])
}

/// Produce the colorized line: green for the matched prefix, red for the
/// stretch covered by wrong input, plain for the rest.
pub fn colorize(input: &str, target: &str) -> String {
    let (correct, wrong, rest) = diff_spans(input, target);

    let mut line = String::new();
    if !correct.is_empty() {
        line.push_str(&format!("{}", correct.green()));
    }
    if !wrong.is_empty() {
        line.push_str(&format!("{}", wrong.red()));
    }
    line.push_str(rest);
    line
}

/// Clear the current line and redraw the diff.
///
/// Only the current line is cleared. Quotes long enough to wrap will not
/// redraw cleanly; known limitation.
pub fn redraw_line(out: &mut impl Write, input: &str, target: &str) -> std::io::Result<()> {
    queue!(
        out,
        cursor::MoveToColumn(0),
        Clear(ClearType::UntilNewLine),
        Print(colorize(input, target))
    )?;
    out.flush()
}

/// Format a duration with millisecond precision, e.g. `3.204s`.
pub fn fmt_duration(d: Duration) -> String {
    let ms = d.as_millis();
    format!("{}.{:03}s", ms / 1000, ms % 1000)
}
