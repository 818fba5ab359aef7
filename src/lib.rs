//! FuzzyShop - Fuzzy product search for game store catalogs
//!
//! Typo-tolerant matching of shopper queries against catalog records
//! (games, consoles, accessories).
//!
//! # Features
//! - Text normalization (case, Latin diacritics, punctuation, whitespace)
//! - Containment-aware Levenshtein similarity
//! - Multi-field record filtering that keeps catalog order
//! - Parallel filtering for large catalogs
//!
//! # Example
//! ```
//! use fuzzyshop::{calculate_similarity, normalize_text, search_products, Product};
//!
//! assert_eq!(normalize_text("Jogo: PS5!!"), "jogo ps5");
//! assert_eq!(calculate_similarity("xbox", "xbax"), 0.75);
//!
//! let catalog = vec![
//!     Product::new("FIFA 23").with_platform("PS5"),
//!     Product::new("Mario Kart").with_platform("Switch"),
//! ];
//! let found = search_products(&catalog, "ps5");
//! assert_eq!(found.len(), 1);
//! ```

pub mod algorithms;
pub mod error;
pub mod search;

pub use algorithms::{
    calculate_similarity, normalize_text, ContainmentSimilarity, EditDistance, Levenshtein,
    Similarity, CONTAINMENT_SCORE,
};
pub use error::{Result, SearchError};
pub use search::{
    fuzzy_search, search_products, FieldMatch, Product, ProductMatcher, Record, SearchField,
    SearchHit, SearchOptions, Searchable, DEFAULT_THRESHOLD, PARALLEL_THRESHOLD,
};
