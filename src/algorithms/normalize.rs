//! Text normalization for catalog matching
//!
//! Produces the canonical form every comparison in this crate works on:
//! lowercase, diacritics stripped, punctuation removed, whitespace collapsed.

use std::borrow::Cow;

use unicode_normalization::UnicodeNormalization;

/// Combining Diacritical Marks block (U+0300..=U+036F).
#[inline]
fn is_combining_diacritic(c: char) -> bool {
    matches!(c, '\u{0300}'..='\u{036F}')
}

/// Word characters in the classic `\w` sense: ASCII letters, digits and `_`.
#[inline]
fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Canonicalize a string for fuzzy comparison.
///
/// Steps, in order:
/// 1. lowercase
/// 2. canonical decomposition (NFD), dropping combining marks U+0300..=U+036F
/// 3. drop everything that is neither a word character nor whitespace
/// 4. collapse whitespace runs to a single space
/// 5. trim
///
/// Total over all inputs: empty or punctuation-only text yields `""`.
///
/// # Example
/// ```
/// use fuzzyshop::algorithms::normalize::normalize_text;
///
/// assert_eq!(normalize_text("Ação"), "acao");
/// assert_eq!(normalize_text("Jogo: PS5!!"), "jogo ps5");
/// assert_eq!(normalize_text("  Zelda\t Breath  "), "zelda breath");
/// ```
#[must_use]
pub fn normalize_text(text: &str) -> String {
    let lowered = text.to_lowercase();
    let mut out = String::with_capacity(lowered.len());
    let mut pending_space = false;

    for c in lowered.nfd() {
        if c.is_whitespace() {
            // Leading whitespace never opens a gap; trailing gaps are never flushed.
            pending_space = !out.is_empty();
            continue;
        }
        if is_combining_diacritic(c) || !is_word_char(c) {
            continue;
        }
        if pending_space {
            out.push(' ');
            pending_space = false;
        }
        out.push(c);
    }

    out
}

/// Check whether `text` is already a fixed point of [`normalize_text`].
///
/// Runs in a single pass without allocating.
#[must_use]
pub fn is_normalized(text: &str) -> bool {
    if text.starts_with(' ') || text.ends_with(' ') {
        return false;
    }
    let mut prev_space = false;
    for c in text.chars() {
        if c == ' ' {
            if prev_space {
                return false;
            }
            prev_space = true;
        } else if is_word_char(c) && !c.is_ascii_uppercase() {
            prev_space = false;
        } else {
            return false;
        }
    }
    true
}

/// Normalize `text`, borrowing it unchanged when it is already canonical.
#[must_use]
pub fn normalize_cow(text: &str) -> Cow<'_, str> {
    if is_normalized(text) {
        Cow::Borrowed(text)
    } else {
        Cow::Owned(normalize_text(text))
    }
}
