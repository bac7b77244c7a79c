//! Shared utilities for preprocessing passes.

/// Replace the characters `start..end` with `text`. Indices are char
/// offsets into the pass's input; `start == end` is an insertion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct Edit {
    pub start: usize,
    pub end: usize,
    pub text: String,
}

impl Edit {
    pub fn replace(start: usize, end: usize, text: impl Into<String>) -> Self {
        Self {
            start,
            end,
            text: text.into(),
        }
    }

    pub fn insert(at: usize, text: impl Into<String>) -> Self {
        Self::replace(at, at, text)
    }
}

/// Apply edits to `chars` and collect the result.
///
/// Edits must be sorted by position and must not overlap; every pass
/// produces them in a single left-to-right scan, which guarantees both.
pub(super) fn apply_edits(chars: &[char], edits: &[Edit]) -> String {
    let extra: usize = edits.iter().map(|e| e.text.len()).sum();
    let mut out = String::with_capacity(chars.len() + extra);
    let mut copied = 0;
    for edit in edits {
        debug_assert!(copied <= edit.start && edit.start <= edit.end);
        out.extend(&chars[copied..edit.start]);
        out.push_str(&edit.text);
        copied = edit.end;
    }
    out.extend(&chars[copied..]);
    out
}
