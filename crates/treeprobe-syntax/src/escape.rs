//! Text helpers shared by the tree renderer.

use std::borrow::Cow;

/// Longest leaf text shown before truncation, in characters.
pub const MAX_LEAF_CHARS: usize = 50;

/// Characters kept from a truncated leaf before the ellipsis.
pub const TRUNCATED_LEAF_CHARS: usize = 47;

const ELLIPSIS: &str = "...";

/// Replaces newlines and tabs with the two-character sequences `\n` and `\t`.
#[must_use]
pub fn escape_control(text: &str) -> Cow<'_, str> {
    if !text.contains(['\n', '\t']) {
        return Cow::Borrowed(text);
    }

    let mut escaped = String::with_capacity(text.len() + 8);
    for ch in text.chars() {
        match ch {
            '\n' => escaped.push_str("\\n"),
            '\t' => escaped.push_str("\\t"),
            other => escaped.push(other),
        }
    }
    Cow::Owned(escaped)
}

/// Shortens text longer than [`MAX_LEAF_CHARS`] characters to
/// [`TRUNCATED_LEAF_CHARS`] characters followed by `...`.
///
/// Counting is by `char`, so multi-byte characters are never split.
#[must_use]
pub fn truncate_display(text: &str) -> Cow<'_, str> {
    match text.char_indices().nth(MAX_LEAF_CHARS) {
        None => Cow::Borrowed(text),
        Some(_) => {
            let kept: String = text.chars().take(TRUNCATED_LEAF_CHARS).collect();
            Cow::Owned(format!("{kept}{ELLIPSIS}"))
        }
    }
}

/// Decodes source bytes, replacing invalid UTF-8 sequences.
#[must_use]
pub fn decode(bytes: &[u8]) -> Cow<'_, str> {
    String::from_utf8_lossy(bytes)
}
