//! Containment-aware similarity
//!
//! Scores two texts after normalization. When one normalized text contains
//! the other the pair gets a fixed high score; otherwise the score is the
//! normalized Levenshtein similarity.

use super::levenshtein::levenshtein_similarity;
use super::normalize::normalize_cow;
use super::Similarity;

/// Score returned when one normalized text contains the other.
///
/// Exact matches score this too, not 1.0.
pub const CONTAINMENT_SCORE: f64 = 0.9;

/// Similarity with a containment short-circuit over normalized text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContainmentSimilarity {
    /// Score assigned when one normalized text is a substring of the other
    pub containment_score: f64,
}

impl Default for ContainmentSimilarity {
    fn default() -> Self {
        Self {
            containment_score: CONTAINMENT_SCORE,
        }
    }
}

impl ContainmentSimilarity {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_containment_score(containment_score: f64) -> Self {
        Self {
            containment_score: containment_score.clamp(0.0, 1.0),
        }
    }

    /// Score two texts the caller has already normalized.
    ///
    /// The empty string is contained in every string, so any pair with an
    /// empty side takes the containment branch.
    #[must_use]
    pub fn similarity_normalized(&self, a: &str, b: &str) -> f64 {
        if a.contains(b) || b.contains(a) {
            return self.containment_score;
        }
        levenshtein_similarity(a, b)
    }
}

impl Similarity for ContainmentSimilarity {
    fn similarity(&self, a: &str, b: &str) -> f64 {
        let a = normalize_cow(a);
        let b = normalize_cow(b);
        self.similarity_normalized(&a, &b)
    }

    fn name(&self) -> &'static str {
        "containment"
    }
}

/// Similarity score in `[0.0, 1.0]` between two raw texts.
///
/// Both sides are normalized first. Containment in either direction
/// (equality included) yields [`CONTAINMENT_SCORE`]; anything else is
/// `1 - levenshtein / max_len`.
///
/// # Example
/// ```
/// use fuzzyshop::algorithms::containment::calculate_similarity;
///
/// assert_eq!(calculate_similarity("Play", "PlayStation 5"), 0.9);
/// assert_eq!(calculate_similarity("xbox", "xbax"), 0.75);
/// ```
#[must_use]
pub fn calculate_similarity(a: &str, b: &str) -> f64 {
    ContainmentSimilarity::default().similarity(a, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_scores_containment_not_one() {
        assert_eq!(calculate_similarity("zelda", "zelda"), 0.9);
        assert_eq!(calculate_similarity("Ação", "acao"), 0.9);
    }

    #[test]
    fn test_containment_short_circuit() {
        assert_eq!(calculate_similarity("play", "playstation"), 0.9);
        assert_eq!(calculate_similarity("playstation", "play"), 0.9);
        assert_eq!(calculate_similarity("Nintendo Switch", "switch"), 0.9);
    }

    #[test]
    fn test_empty_inputs_hit_containment() {
        assert_eq!(calculate_similarity("", ""), 0.9);
        assert_eq!(calculate_similarity("", "xbox"), 0.9);
        assert_eq!(calculate_similarity("!!!", "xbox"), 0.9);
    }

    #[test]
    fn test_edit_distance_branch() {
        assert_eq!(calculate_similarity("xbox", "xbax"), 0.75);
        assert_eq!(calculate_similarity("abc", "xyz"), 0.0);
        // "zelda" vs "zleda": 2 substitutions over 5 chars
        assert!((calculate_similarity("zelda", "zleda") - 0.6).abs() < 1e-12);
    }

    #[test]
    fn test_symmetry_and_range() {
        let words = [
            "",
            "xbox",
            "xbax",
            "Play",
            "PlayStation 5",
            "Mario Kart 8 Deluxe",
            "mraio",
            "Ação!",
            "god of war",
        ];
        for a in words {
            for b in words {
                let ab = calculate_similarity(a, b);
                let ba = calculate_similarity(b, a);
                assert_eq!(ab, ba, "asymmetric for {:?} / {:?}", a, b);
                assert!((0.0..=1.0).contains(&ab), "out of range for {:?} / {:?}", a, b);
            }
        }
    }

    #[test]
    fn test_custom_containment_score() {
        let sim = ContainmentSimilarity::with_containment_score(1.0);
        assert_eq!(sim.similarity("ps5", "PS5"), 1.0);
        assert_eq!(sim.similarity("xbox", "xbax"), 0.75);
        assert_eq!(ContainmentSimilarity::with_containment_score(3.0).containment_score, 1.0);
    }

    #[test]
    fn test_similarity_trait_distance() {
        let sim = ContainmentSimilarity::new();
        assert!((sim.distance("xbox", "xbax") - 0.25).abs() < 1e-12);
        assert_eq!(sim.name(), "containment");
    }
}
