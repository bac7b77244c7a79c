//! Vector function call handling.
//!
//! Two per-function passes share this module:
//!
//! - Call spacing: the prefix spelling `( ring  1, 2)` is rewritten so the
//!   `(` follows the name, `  ring( 1, 2)`. The replacement has the same
//!   width as the match, so columns on the line do not move.
//! - Assignment guard: `ring = ...` is rejected, since it would shadow the
//!   builtin.

use sp_lexer::{
    char_offset_to_byte, is_ident_char, line_of, scan_while, starts_with_at, CodeCursor,
};

use super::util::{apply_edits, Edit};
use crate::error::PreParseError;

/// Relocate the `(` of every prefix-spelled call to `name`.
pub fn normalize_call_spacing(source: &str, name: &str) -> String {
    let chars: Vec<char> = source.chars().collect();
    let name_len = name.chars().count();
    let mut cursor = CodeCursor::new(&chars);
    let mut edits = Vec::new();

    while let Some(i) = cursor.next_code() {
        if chars[i] != '(' {
            continue;
        }

        let name_start = scan_while(&chars, i + 1, char::is_whitespace);
        if !starts_with_at(&chars, name_start, name) {
            continue;
        }
        let name_end = name_start + name_len;
        let run_end = scan_while(&chars, name_end, |c| c == ',' || c.is_whitespace());
        if run_end == name_end {
            continue;
        }

        let leading: String = chars[i + 1..name_start].iter().collect();
        let padding = " ".repeat(run_end - name_end - 1);
        edits.push(Edit::replace(
            i,
            run_end,
            format!(" {leading}{name}({padding}"),
        ));
        cursor.jump_to(run_end);
    }

    tracing::debug!(name, rewrites = edits.len(), "call spacing normalized");
    apply_edits(&chars, &edits)
}

/// Fail if `name` is the target of an assignment anywhere in `source`.
///
/// Matches `name`, optional whitespace, then `=` followed by whitespace or
/// a word character, so `==`, `=>` and `=~` are not assignments.
pub fn check_assignment(source: &str, name: &str) -> Result<(), PreParseError> {
    let chars: Vec<char> = source.chars().collect();
    let name_len = name.chars().count();
    let mut cursor = CodeCursor::new(&chars);

    while let Some(i) = cursor.next_code() {
        if !starts_with_at(&chars, i, name) {
            continue;
        }
        if i > 0 && is_ident_char(chars[i - 1]) {
            continue;
        }

        let eq = scan_while(&chars, i + name_len, char::is_whitespace);
        let is_assignment = chars.get(eq) == Some(&'=')
            && chars
                .get(eq + 1)
                .is_some_and(|&c| c.is_whitespace() || is_ident_char(c));

        if is_assignment {
            let line = line_of(&chars, i);
            let offset = char_offset_to_byte(&chars, i);
            tracing::warn!(name, line, offset, "builtin fn name used as a variable");
            return Err(PreParseError::NameCollision {
                name: name.to_string(),
                line,
                offset,
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefix_call_moves_paren() {
        assert_eq!(normalize_call_spacing("(ring 1, 2)", "ring"), " ring(1, 2)");
    }

    #[test]
    fn comma_run_is_padded_to_same_width() {
        let input = "(  foo,  1)";
        let output = normalize_call_spacing(input, "foo");
        assert_eq!(output, "   foo(  1)");
        assert_eq!(output.len(), input.len());
    }

    #[test]
    fn multiline_prefix_call() {
        let input = "play (\n  knit :e3, 2)";
        assert_eq!(normalize_call_spacing(input, "knit"), "play  \n  knit(:e3, 2)");
    }

    #[test]
    fn normal_call_is_untouched() {
        assert_eq!(normalize_call_spacing("ring(1,2,3)", "ring"), "ring(1,2,3)");
    }

    #[test]
    fn longer_name_is_not_matched() {
        assert_eq!(normalize_call_spacing("(rings 1)", "ring"), "(rings 1)");
        assert_eq!(normalize_call_spacing("(ring)", "ring"), "(ring)");
    }

    #[test]
    fn strings_are_untouched() {
        let input = "puts '( ring 1)', \"( ring 2)\"";
        assert_eq!(normalize_call_spacing(input, "ring"), input);
    }

    #[test]
    fn every_occurrence_is_rewritten() {
        assert_eq!(
            normalize_call_spacing("[(ring 1), (ring 2)]", "ring"),
            "[ ring(1),  ring(2)]"
        );
    }

    #[test]
    fn assignment_is_a_collision() {
        let err = check_assignment("ring = 5", "ring").unwrap_err();
        assert_eq!(err.name(), "ring");
        assert_eq!(err.line(), 1);
    }

    #[test]
    fn assignment_without_spaces_is_a_collision() {
        let err = check_assignment("x = 1\n\nring=3", "ring").unwrap_err();
        assert_eq!(err.line(), 3);
    }

    #[test]
    fn comparisons_and_calls_are_fine() {
        for input in [
            "ring(1,2,3)",
            "x = ring 1, 2",
            "ring == y",
            "ring =~ /x/",
            "{ring => 1}",
            "rings = 5",
            "bring = 5",
            "my_ring = 5",
            "puts 'ring = 5'",
            "# ring = 5",
        ] {
            assert!(check_assignment(input, "ring").is_ok(), "{input}");
        }
    }

    #[test]
    fn collision_offset_is_in_bytes() {
        let err = check_assignment("é = 1\nring = 2", "ring").unwrap_err();
        assert_eq!(err.line(), 2);
        assert_eq!(err.offset(), 7);
    }

    #[test]
    fn quote_character_literal_does_not_hide_assignment() {
        let err = check_assignment("a = ?' ; ring = 1", "ring").unwrap_err();
        assert_eq!(err.name(), "ring");
        assert_eq!(err.offset(), 9);
    }

    #[test]
    fn collision_after_normalization() {
        let normalized = normalize_call_spacing("( ring 1)\nring = 2", "ring");
        assert!(check_assignment(&normalized, "ring").is_err());
    }
}
