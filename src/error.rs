//! Error types for configurable search
//!
//! The core matching functions are total; only option validation can fail.

use crate::search::SearchField;
use thiserror::Error;

/// Errors raised when search options are rejected
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SearchError {
    /// Threshold is NaN, infinite, or outside [0.0, 1.0]
    #[error("threshold must be a finite number in range [0.0, 1.0], got {0}")]
    InvalidThreshold(f64),

    /// No record fields were selected for matching
    #[error("search must consider at least one field")]
    NoFields,

    /// The same record field was selected twice
    #[error("duplicate search field: {0}")]
    DuplicateField(SearchField),
}

/// Result type alias for fallible search operations
pub type Result<T> = std::result::Result<T, SearchError>;
