//! Catalog matching
//!
//! `ProductMatcher` normalizes a query once and tests it against the text
//! fields of each record. A field matches when its similarity to the query
//! reaches the threshold, or when its normalized text contains the query.
//! Results always keep catalog order; nothing is re-ranked.

use super::options::SearchOptions;
use super::record::{SearchField, Searchable};
use crate::algorithms::containment::{calculate_similarity, ContainmentSimilarity};
use crate::algorithms::normalize::{normalize_cow, normalize_text};
use crate::error::Result;
use rayon::prelude::*;
use tracing::{debug, trace};

/// Whether `query` and `text` are similar enough to count as a match.
///
/// Both sides are normalized internally, so raw or pre-normalized input
/// behave the same.
///
/// # Example
/// ```
/// use fuzzyshop::search::fuzzy_search;
///
/// assert!(fuzzy_search("xbox", "xbax", 0.75));
/// assert!(!fuzzy_search("xbox", "xbax", 0.76));
/// ```
#[must_use]
pub fn fuzzy_search(query: &str, text: &str, threshold: f64) -> bool {
    calculate_similarity(query, text) >= threshold
}

/// The field of a record that satisfied the query, with its similarity
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldMatch {
    pub field: SearchField,
    pub score: f64,
}

/// A matching record together with its catalog position
#[derive(Debug)]
pub struct SearchHit<'a, T> {
    /// Position in the searched slice
    pub index: usize,
    pub item: &'a T,
    /// Best matching field; `None` when the query was blank
    pub matched: Option<FieldMatch>,
}

/// Query-bound matcher over searchable records
///
/// # Example
///
/// ```rust
/// use fuzzyshop::search::{Product, ProductMatcher, SearchOptions};
///
/// let catalog = vec![
///     Product::new("FIFA 23").with_platform("PS5"),
///     Product::new("Mario Kart").with_platform("Switch"),
/// ];
/// let matcher = ProductMatcher::new("ps5", SearchOptions::default()).unwrap();
/// let found = matcher.filter(&catalog);
/// assert_eq!(found.len(), 1);
/// assert_eq!(found[0].name.as_deref(), Some("FIFA 23"));
/// ```
#[derive(Debug, Clone)]
pub struct ProductMatcher {
    query: String,
    passthrough: bool,
    options: SearchOptions,
    scorer: ContainmentSimilarity,
}

impl ProductMatcher {
    /// Create a matcher after validating `options`.
    pub fn new(query: &str, options: SearchOptions) -> Result<Self> {
        options.validate()?;
        Ok(Self::build(query, options))
    }

    /// Matcher with default options; cannot fail.
    pub fn with_defaults(query: &str) -> Self {
        Self::build(query, SearchOptions::default())
    }

    fn build(query: &str, options: SearchOptions) -> Self {
        // Blank means empty or whitespace-only before normalization.
        // A punctuation-only query is not blank: it normalizes to "" and
        // then matches any record with a non-empty field.
        let passthrough = query.trim().is_empty();
        let normalized = if passthrough {
            String::new()
        } else {
            normalize_text(query)
        };
        debug!(raw = query, normalized = %normalized, passthrough, "prepared catalog query");

        Self {
            query: normalized,
            passthrough,
            options,
            scorer: ContainmentSimilarity::default(),
        }
    }

    /// The normalized query
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn options(&self) -> &SearchOptions {
        &self.options
    }

    /// True when the query was blank and every record is kept
    pub fn is_passthrough(&self) -> bool {
        self.passthrough
    }

    /// Score one field value, returning it only if the field matches.
    fn score_field(&self, value: &str) -> Option<f64> {
        let normalized = normalize_cow(value);
        let score = self.scorer.similarity_normalized(&self.query, &normalized);
        if score >= self.options.threshold || normalized.contains(self.query.as_str()) {
            Some(score)
        } else {
            None
        }
    }

    /// Whether any configured field of `item` matches the query.
    pub fn matches<T: Searchable + ?Sized>(&self, item: &T) -> bool {
        if self.passthrough {
            return true;
        }
        self.options
            .fields
            .iter()
            .filter_map(|&field| item.field(field))
            .any(|value| self.score_field(value).is_some())
    }

    /// Highest-scoring matching field of `item`; earlier fields win ties.
    pub fn best_match<T: Searchable + ?Sized>(&self, item: &T) -> Option<FieldMatch> {
        if self.passthrough {
            return None;
        }
        let mut best: Option<FieldMatch> = None;
        for &field in &self.options.fields {
            let Some(value) = item.field(field) else {
                continue;
            };
            let Some(score) = self.score_field(value) else {
                continue;
            };
            trace!(%field, score, "field matched");
            if best.map_or(true, |b| score > b.score) {
                best = Some(FieldMatch { field, score });
            }
        }
        best
    }

    /// Keep the records that match, in catalog order.
    ///
    /// Catalogs at or above `parallel_threshold` records are filtered on
    /// the rayon pool.
    pub fn filter<'a, T: Searchable + Sync>(&self, items: &'a [T]) -> Vec<&'a T> {
        if self.passthrough {
            return items.iter().collect();
        }

        let matched: Vec<&T> = if items.len() >= self.options.parallel_threshold {
            debug!(total = items.len(), "filtering catalog in parallel");
            items.par_iter().filter(|item| self.matches(*item)).collect()
        } else {
            items.iter().filter(|item| self.matches(*item)).collect()
        };

        debug!(
            query = %self.query,
            total = items.len(),
            matched = matched.len(),
            "filtered catalog"
        );
        matched
    }

    /// Matching records with their positions and best fields, in catalog order.
    pub fn hits<'a, T: Searchable + Sync>(&self, items: &'a [T]) -> Vec<SearchHit<'a, T>> {
        if self.passthrough {
            return items
                .iter()
                .enumerate()
                .map(|(index, item)| SearchHit {
                    index,
                    item,
                    matched: None,
                })
                .collect();
        }

        let to_hit = |(index, item): (usize, &'a T)| {
            self.best_match(item).map(|m| SearchHit {
                index,
                item,
                matched: Some(m),
            })
        };

        if items.len() >= self.options.parallel_threshold {
            items.par_iter().enumerate().filter_map(to_hit).collect()
        } else {
            items.iter().enumerate().filter_map(to_hit).collect()
        }
    }

    /// First `limit` matching records in catalog order, for suggestion lists.
    pub fn suggestions<'a, T: Searchable>(&self, items: &'a [T], limit: usize) -> Vec<&'a T> {
        items
            .iter()
            .filter(|item| self.matches(*item))
            .take(limit)
            .collect()
    }
}

/// Filter `products` by a free-text query across name, description,
/// platform and category.
///
/// A blank query returns every product. Otherwise a product is kept when
/// any non-empty field has similarity of at least
/// [`DEFAULT_THRESHOLD`](crate::search::DEFAULT_THRESHOLD) to the query, or contains it after
/// normalization. Order is preserved.
///
/// # Example
/// ```
/// use fuzzyshop::search::{search_products, Product};
///
/// let catalog = vec![
///     Product::new("FIFA 23").with_platform("PS5"),
///     Product::new("Mario Kart").with_platform("Switch"),
/// ];
/// assert_eq!(search_products(&catalog, "fifa").len(), 1);
/// assert_eq!(search_products(&catalog, "   ").len(), 2);
/// ```
pub fn search_products<'a, T: Searchable + Sync>(products: &'a [T], query: &str) -> Vec<&'a T> {
    ProductMatcher::with_defaults(query).filter(products)
}
