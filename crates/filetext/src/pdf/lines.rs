//! Line splitting and numbering for extracted PDF text.

use crate::core::config::LineNumbering;
use crate::core::text::{is_blank, strip};

/// Split `text` on every universal line boundary.
///
/// Besides `\n`, `\r` and `\r\n` this breaks on vertical tab, form feed
/// (page separator in most PDF text layers), the file/group/record
/// separators, NEL, and the Unicode line/paragraph separators. A trailing
/// boundary does not produce a final empty line.
pub fn split_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((idx, ch)) = chars.next() {
        if !is_line_boundary(ch) {
            continue;
        }

        lines.push(&text[start..idx]);

        let mut end = idx + ch.len_utf8();
        if ch == '\r'
            && let Some(&(next_idx, '\n')) = chars.peek()
        {
            chars.next();
            end = next_idx + 1;
        }
        start = end;
    }

    if start < text.len() {
        lines.push(&text[start..]);
    }

    lines
}

fn is_line_boundary(ch: char) -> bool {
    matches!(
        ch,
        '\n' | '\r' | '\u{0b}' | '\u{0c}' | '\u{1c}' | '\u{1d}' | '\u{1e}' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

/// Strip each line, drop blank ones and prefix the rest with `"<n>: "`.
///
/// Returns the joined text and the number of lines kept. Text that is empty
/// or whitespace-only yields `("", 0)`.
pub fn number_lines(text: &str, numbering: LineNumbering) -> (String, usize) {
    if is_blank(text) {
        return (String::new(), 0);
    }

    let mut numbered = Vec::new();

    for (position, line) in split_lines(text).into_iter().enumerate() {
        let stripped = strip(line);
        if stripped.is_empty() {
            continue;
        }

        let number = match numbering {
            LineNumbering::Sequential => numbered.len() + 1,
            LineNumbering::Source => position + 1,
        };
        numbered.push(format!("{}: {}", number, stripped));
    }

    let count = numbered.len();
    (numbered.join("\n"), count)
}
