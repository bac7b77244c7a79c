//! Raw scanner for Sonic Pi (Ruby) source.
//!
//! The preparser rewrites text, not tokens, but it must never rewrite inside
//! string literal text or comments. This crate tells the passes which
//! character positions hold code:
//!
//! - `# ...` line comments (a `#` directly followed by `{` is not a comment)
//! - `'...'` strings, skipped whole
//! - `"..."` strings, skipped except for the code in `#{...}` interpolations
//! - `?'` and `?"` character literals, so their quote opens no string
//!
//! Heredocs, `%w[]`-style literals and `=begin`/`=end` blocks are not
//! recognised and scan as code.

/// Skip over a comment, single-quoted string or quote character literal
/// starting at `i`.
///
/// Double-quoted strings are not handled here because their interpolations
/// contain code; use [`StringState`] for those.
///
/// Returns `Some(new_position)` if `i` starts such a region, where
/// `new_position` is the first character after it (a comment ends *at* its
/// newline, which is left for the caller). Returns `None` otherwise.
pub fn skip_non_code(chars: &[char], i: usize) -> Option<usize> {
    if i >= chars.len() {
        return Some(chars.len());
    }

    if chars[i] == '#' && chars.get(i + 1) != Some(&'{') {
        let mut j = i + 1;
        while j < chars.len() && chars[j] != '\n' {
            j += 1;
        }
        return Some(j);
    }

    if is_quote_char_literal(chars, i) {
        return Some(i + 2);
    }

    if chars[i] == '\'' {
        let mut j = i + 1;
        while j < chars.len() && chars[j] != '\'' {
            if chars[j] == '\\' {
                j += 1;
            }
            j += 1;
        }
        return Some(if j < chars.len() { j + 1 } else { chars.len() });
    }

    None
}

/// `?'` or `?"` standing alone as a character literal. `x ?'a' : 'b'` is a
/// ternary, not a literal, so the quote must not be followed by a word.
fn is_quote_char_literal(chars: &[char], i: usize) -> bool {
    chars[i] == '?'
        && matches!(chars.get(i + 1), Some(&('\'' | '"')))
        && !chars.get(i + 2).is_some_and(|&c| is_ident_char(c))
        && (i == 0 || !is_ident_char(chars[i - 1]))
}

/// Nesting state for double-quoted strings.
///
/// Each stack entry is one open string; its value is the brace depth of the
/// interpolation currently open in it (`0` = in the literal text).
#[derive(Debug, Default)]
pub struct StringState {
    stack: Vec<u32>,
}

/// What a caller should do with the character it just offered to
/// [`StringState::handle_char`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandleResult {
    /// Not code: skip this many characters.
    Skip(usize),
    /// Code: process this character normally.
    Process,
}

impl StringState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn handle_char(&mut self, chars: &[char], i: usize) -> HandleResult {
        let Some(&depth) = self.stack.last() else {
            if chars[i] == '"' {
                self.stack.push(0);
                return HandleResult::Skip(1);
            }
            return HandleResult::Process;
        };

        if depth == 0 {
            if chars[i] == '\\' && i + 1 < chars.len() {
                return HandleResult::Skip(2);
            }
            if chars[i] == '#' && chars.get(i + 1) == Some(&'{') {
                self.set_depth(1);
                return HandleResult::Skip(2);
            }
            if chars[i] == '"' {
                self.stack.pop();
            }
            return HandleResult::Skip(1);
        }

        match chars[i] {
            '"' => {
                self.stack.push(0);
                HandleResult::Skip(1)
            }
            '{' => {
                self.set_depth(depth + 1);
                HandleResult::Process
            }
            '}' => {
                self.set_depth(depth - 1);
                if depth == 1 {
                    // closes the interpolation, back in literal text
                    HandleResult::Skip(1)
                } else {
                    HandleResult::Process
                }
            }
            _ => HandleResult::Process,
        }
    }

    fn set_depth(&mut self, depth: u32) {
        if let Some(top) = self.stack.last_mut() {
            *top = depth;
        }
    }
}

/// Walks the code positions of a source, skipping comments and string text.
///
/// Passes call [`CodeCursor::next_code`] to find candidate match starts and
/// [`CodeCursor::jump_to`] to continue after a match they consumed.
#[derive(Debug)]
pub struct CodeCursor<'a> {
    chars: &'a [char],
    pos: usize,
    strings: StringState,
}

impl<'a> CodeCursor<'a> {
    pub fn new(chars: &'a [char]) -> Self {
        Self {
            chars,
            pos: 0,
            strings: StringState::new(),
        }
    }

    /// Next position holding code, or `None` at the end of the source.
    pub fn next_code(&mut self) -> Option<usize> {
        while self.pos < self.chars.len() {
            if let HandleResult::Skip(n) = self.strings.handle_char(self.chars, self.pos) {
                self.pos += n;
                continue;
            }
            if let Some(skip) = skip_non_code(self.chars, self.pos) {
                self.pos = skip;
                continue;
            }
            let at = self.pos;
            self.pos += 1;
            return Some(at);
        }
        None
    }

    /// Resume scanning at `pos`. Never moves backwards.
    pub fn jump_to(&mut self, pos: usize) {
        self.pos = self.pos.max(pos);
    }
}

/// Characters that can continue a Ruby identifier.
pub fn is_ident_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Characters allowed in a symbol path segment.
pub fn is_symbol_segment_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '!' | '?' | '=' | '_')
}

/// First index at or after `start` whose character fails `pred`.
pub fn scan_while(chars: &[char], start: usize, pred: impl Fn(char) -> bool) -> usize {
    let mut i = start;
    while i < chars.len() && pred(chars[i]) {
        i += 1;
    }
    i
}

/// Whether `word` occurs at `i`.
pub fn starts_with_at(chars: &[char], i: usize, word: &str) -> bool {
    let mut j = i;
    for c in word.chars() {
        if chars.get(j) != Some(&c) {
            return false;
        }
        j += 1;
    }
    true
}

/// Convert a character index to a byte offset in UTF-8.
pub fn char_offset_to_byte(chars: &[char], char_idx: usize) -> usize {
    chars[..char_idx].iter().map(|c| c.len_utf8()).sum()
}

/// 1-based line number of a character index.
pub fn line_of(chars: &[char], char_idx: usize) -> usize {
    chars[..char_idx.min(chars.len())]
        .iter()
        .filter(|&&c| c == '\n')
        .count()
        + 1
}
