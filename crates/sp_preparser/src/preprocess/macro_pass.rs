//! List macro expansion.
//!
//! `(ing 1 2 3)` becomes `(ing 1,2,3)`: the body of a `(keyword ...)` block
//! is stripped of line comments and its whitespace-separated tokens are
//! joined with commas.
//!
//! The body runs to the *next* `)`, not the matching one, so a body with
//! nested parentheses is cut short. Malformed blocks are left for the host
//! parser to reject.

use sp_lexer::{scan_while, starts_with_at, CodeCursor};
use sp_syntax::MacroKeyword;

use super::util::{apply_edits, Edit};

/// A located `(keyword body)` block. Offsets are char indices.
#[derive(Debug, Clone, PartialEq, Eq)]
struct MacroBlock {
    keyword: MacroKeyword,
    body_start: usize,
    /// Index of the closing `)`.
    body_end: usize,
}

/// Expand every list macro introduced by one of `keywords`.
pub fn expand_list_macros(source: &str, keywords: &[MacroKeyword]) -> String {
    if keywords.is_empty() {
        return source.to_string();
    }

    let chars: Vec<char> = source.chars().collect();
    let mut cursor = CodeCursor::new(&chars);
    let mut edits = Vec::new();

    while let Some(i) = cursor.next_code() {
        if chars[i] != '(' {
            continue;
        }
        let Some(block) = find_block(&chars, i, keywords) else {
            continue;
        };

        let body: String = chars[block.body_start..block.body_end].iter().collect();
        let flattened = flatten_body(&body);
        tracing::trace!(keyword = %block.keyword, %body, %flattened, "list macro");

        if flattened != body {
            edits.push(Edit::replace(block.body_start, block.body_end, flattened));
        }
        cursor.jump_to(block.body_end + 1);
    }

    tracing::debug!(rewrites = edits.len(), "list macros expanded");
    apply_edits(&chars, &edits)
}

/// Match `(` + keyword + whitespace + body + `)` with the `(` at `open`.
fn find_block(chars: &[char], open: usize, keywords: &[MacroKeyword]) -> Option<MacroBlock> {
    let keyword = keywords
        .iter()
        .copied()
        .find(|kw| starts_with_at(chars, open + 1, kw.as_str()))?;

    let keyword_end = open + 1 + keyword.as_str().len();
    let body_start = scan_while(chars, keyword_end, char::is_whitespace);
    if body_start == keyword_end {
        return None;
    }

    let body_end = body_start + chars[body_start..].iter().position(|&c| c == ')')?;

    Some(MacroBlock {
        keyword,
        body_start,
        body_end,
    })
}

/// Strip comments from each line of `body`, then join its tokens with commas.
pub fn flatten_body(body: &str) -> String {
    let stripped = body
        .lines()
        .map(strip_line_comment)
        .collect::<Vec<_>>()
        .join("\n");

    stripped.split_whitespace().collect::<Vec<_>>().join(",")
}

/// Drop a trailing `# comment`. `#{` opens an interpolation, not a comment.
fn strip_line_comment(line: &str) -> &str {
    let comment = line
        .char_indices()
        .find(|&(idx, c)| c == '#' && !line[idx + 1..].starts_with('{'));

    match comment {
        Some((idx, _)) => &line[..idx],
        None => line,
    }
}
