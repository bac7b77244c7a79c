//! Shorthand decimal literals.
//!
//! - Trailing dot: `2.` → `2.0`, when the digits start a token and the dot
//!   is followed by whitespace or the end of the text.
//! - Leading dot: `.3` → `0.3`, when the dot does not follow a digit, a dot
//!   or an identifier, and the digits are followed by whitespace, `)` or the
//!   end of the text.
//!
//! Complete literals (`2.5`), ranges (`1..5`) and method calls (`x.5`) are
//! left alone.

use sp_lexer::{is_ident_char, scan_while, CodeCursor};

use super::util::{apply_edits, Edit};

/// Complete both kinds of shorthand decimals.
pub fn normalize_numeric_literals(source: &str) -> String {
    complete_leading_dot(&complete_trailing_dot(source))
}

/// `2.` → `2.0`
pub fn complete_trailing_dot(source: &str) -> String {
    let chars: Vec<char> = source.chars().collect();
    let mut cursor = CodeCursor::new(&chars);
    let mut edits = Vec::new();

    while let Some(i) = cursor.next_code() {
        if !chars[i].is_ascii_digit() || (i > 0 && !chars[i - 1].is_whitespace()) {
            continue;
        }

        let dot = scan_while(&chars, i, |c| c.is_ascii_digit());
        cursor.jump_to(dot);
        if chars.get(dot) != Some(&'.') {
            continue;
        }
        if chars.get(dot + 1).map_or(true, |c| c.is_whitespace()) {
            edits.push(Edit::insert(dot + 1, "0"));
        }
    }

    tracing::trace!(rewrites = edits.len(), "trailing-dot literals completed");
    apply_edits(&chars, &edits)
}

/// `.3` → `0.3`
pub fn complete_leading_dot(source: &str) -> String {
    let chars: Vec<char> = source.chars().collect();
    let mut cursor = CodeCursor::new(&chars);
    let mut edits = Vec::new();

    while let Some(i) = cursor.next_code() {
        if chars[i] != '.' {
            continue;
        }
        if i > 0 {
            let prev = chars[i - 1];
            if prev.is_ascii_digit() || prev == '.' || is_ident_char(prev) {
                continue;
            }
        }

        let end = scan_while(&chars, i + 1, |c| c.is_ascii_digit());
        if end == i + 1 {
            continue;
        }
        if chars.get(end).map_or(true, |&c| c.is_whitespace() || c == ')') {
            edits.push(Edit::insert(i, "0"));
            cursor.jump_to(end);
        }
    }

    tracing::trace!(rewrites = edits.len(), "leading-dot literals completed");
    apply_edits(&chars, &edits)
}
