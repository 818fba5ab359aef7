//! Levenshtein (edit) distance implementation
//!
//! Classic dynamic-programming edit distance over Unicode scalar values,
//! with insertion, deletion and substitution all costing 1.

use super::EditDistance;
use smallvec::SmallVec;

/// Edit distance between two char slices.
///
/// Evaluates the recurrence
/// `d[j][i] = min(d[j-1][i] + 1, d[j][i-1] + 1, d[j-1][i-1] + cost)`
/// with rows indexed by `b` and columns by `a`, keeping a single row live.
#[inline]
fn dp_distance(a: &[char], b: &[char]) -> usize {
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    // row[i] holds d[j][i] for the row currently being filled
    let mut row: SmallVec<[usize; 64]> = (0..=a.len()).collect();

    for (j, &bc) in b.iter().enumerate() {
        let mut diag = row[0];
        row[0] = j + 1;

        for (i, &ac) in a.iter().enumerate() {
            let cost = usize::from(ac != bc);
            let above = row[i + 1] + 1;
            let left = row[i] + 1;
            let cell = above.min(left).min(diag + cost);

            diag = row[i + 1];
            row[i + 1] = cell;
        }
    }

    row[a.len()]
}

// ============================================================================
// Public API
// ============================================================================

/// Levenshtein distance calculator
///
/// # Complexity
/// - Time: O(m*n) where m and n are string lengths
/// - Space: O(m) using single-row DP
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Levenshtein;

impl Levenshtein {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl EditDistance for Levenshtein {
    fn distance(&self, a: &str, b: &str) -> usize {
        levenshtein(a, b)
    }

    fn name(&self) -> &'static str {
        "levenshtein"
    }
}

/// Compute the Levenshtein distance between two strings.
///
/// Counts characters, not bytes, so `"café"` and `"cafe"` are one edit apart.
///
/// # Example
/// ```
/// use fuzzyshop::algorithms::levenshtein::levenshtein;
///
/// assert_eq!(levenshtein("kitten", "sitting"), 3);
/// assert_eq!(levenshtein("xbox", "xbax"), 1);
/// ```
#[inline]
#[must_use]
pub fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_chars: SmallVec<[char; 64]> = a.chars().collect();
    let b_chars: SmallVec<[char; 64]> = b.chars().collect();

    dp_distance(&a_chars, &b_chars)
}

/// Normalized Levenshtein similarity (0.0 to 1.0).
///
/// `1 - distance / max(len_a, len_b)`, and 1.0 when both strings are empty.
#[inline]
#[must_use]
pub fn levenshtein_similarity(a: &str, b: &str) -> f64 {
    EditDistance::similarity(&Levenshtein, a, b)
}
