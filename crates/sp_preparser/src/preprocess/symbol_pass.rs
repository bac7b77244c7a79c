//! Symbol path folding.
//!
//! `:drums:kick:hard` would otherwise reach Ruby as three separate symbols;
//! it is folded into one constructor call, `<ctor>('drums : kick : hard')`.
//! A lone `:sym` is an ordinary symbol and is left alone.

use sp_lexer::{is_ident_char, is_symbol_segment_char, scan_while, CodeCursor};
use sp_syntax::SymbolPath;

use super::util::{apply_edits, Edit};

/// Fold every symbol path of two or more segments into `constructor` calls.
pub fn fold_symbol_paths(source: &str, constructor: &str) -> String {
    let chars: Vec<char> = source.chars().collect();
    let mut cursor = CodeCursor::new(&chars);
    let mut edits = Vec::new();

    while let Some(i) = cursor.next_code() {
        if chars[i] != ':' {
            continue;
        }
        // `Foo::Bar` and `key:` are not the start of a symbol
        if i > 0 && (chars[i - 1] == ':' || is_ident_char(chars[i - 1])) {
            continue;
        }

        let (segments, end) = scan_segments(&chars, i);
        let Some(path) = SymbolPath::new(segments) else {
            continue;
        };

        edits.push(Edit::replace(i, end, path.to_constructor_call(constructor)));
        cursor.jump_to(end);
    }

    tracing::debug!(rewrites = edits.len(), "symbol paths folded");
    apply_edits(&chars, &edits)
}

/// Collect `:seg` segments starting at `start`. Returns them with the index
/// just past the last one.
fn scan_segments(chars: &[char], start: usize) -> (Vec<String>, usize) {
    let mut segments = Vec::new();
    let mut i = start;

    while chars.get(i) == Some(&':') {
        let seg_end = scan_while(chars, i + 1, is_symbol_segment_char);
        if seg_end == i + 1 {
            break;
        }
        segments.push(chars[i + 1..seg_end].iter().collect());
        i = seg_end;
    }

    (segments, i)
}
