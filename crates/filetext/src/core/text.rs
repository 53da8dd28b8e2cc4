//! Whitespace rules shared by the strategies.

/// Whitespace as the blank-line and empty-output checks understand it.
///
/// Unicode whitespace plus the ASCII information separators
/// (`\x1c`..=`\x1f`), which `char::is_whitespace` leaves out.
pub fn is_blank_char(ch: char) -> bool {
    ch.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&ch)
}

/// Trim [`is_blank_char`] characters from both ends.
pub fn strip(text: &str) -> &str {
    text.trim_matches(is_blank_char)
}

/// Whether `text` holds nothing but [`is_blank_char`] characters.
pub fn is_blank(text: &str) -> bool {
    text.chars().all(is_blank_char)
}
