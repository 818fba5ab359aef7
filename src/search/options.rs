//! Search configuration
//!
//! `SearchOptions` is plain serde data so it can be embedded in an
//! application's own config file; call `validate` before use.

use super::record::SearchField;
use crate::error::{Result, SearchError};
use serde::{Deserialize, Serialize};

/// Default minimum similarity for a field to count as a fuzzy match.
pub const DEFAULT_THRESHOLD: f64 = 0.3;

/// Minimum catalog size for parallel filtering.
///
/// Below this, sequential filtering is faster than handing work to the
/// rayon pool.
pub const PARALLEL_THRESHOLD: usize = 100;

/// Options for catalog search
///
/// # Example
///
/// ```rust
/// use fuzzyshop::search::{SearchField, SearchOptions};
///
/// let options = SearchOptions::default()
///     .with_threshold(0.5)
///     .with_fields([SearchField::Name, SearchField::Platform]);
/// assert!(options.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchOptions {
    /// Minimum similarity (0.0 to 1.0) for a field to match
    pub threshold: f64,

    /// Fields to inspect, in order
    ///
    /// Order matters only for tie-breaking in best-field scoring.
    pub fields: Vec<SearchField>,

    /// Catalog size at which filtering switches to the rayon pool
    pub parallel_threshold: usize,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            fields: SearchField::ALL.to_vec(),
            parallel_threshold: PARALLEL_THRESHOLD,
        }
    }
}

impl SearchOptions {
    /// Builder: Set the similarity threshold
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Builder: Set the fields to inspect
    pub fn with_fields(mut self, fields: impl IntoIterator<Item = SearchField>) -> Self {
        self.fields = fields.into_iter().collect();
        self
    }

    /// Builder: Set the catalog size at which filtering goes parallel
    pub fn with_parallel_threshold(mut self, parallel_threshold: usize) -> Self {
        self.parallel_threshold = parallel_threshold;
        self
    }

    /// Validate option values
    ///
    /// Checks:
    /// - Threshold is finite and in range [0.0, 1.0]
    /// - At least one field is selected
    /// - No field is selected twice
    pub fn validate(&self) -> Result<()> {
        if !self.threshold.is_finite() || !(0.0..=1.0).contains(&self.threshold) {
            return Err(SearchError::InvalidThreshold(self.threshold));
        }

        if self.fields.is_empty() {
            return Err(SearchError::NoFields);
        }

        for (i, field) in self.fields.iter().enumerate() {
            if self.fields[..i].contains(field) {
                return Err(SearchError::DuplicateField(*field));
            }
        }

        Ok(())
    }
}
