// Multi-field catalog search
//
// Filters collections of product-like records by a free-text query.
//
// # Architecture
//
// ```text
// raw query → normalize once → per record: each configured field → score/contains → keep or drop
// ```
//
// Records take part by implementing `Searchable`. `search_products` covers
// the common case; `ProductMatcher` exposes thresholds, field selection,
// best-field scoring and suggestion lists.

pub mod matcher;
pub mod options;
pub mod record;

pub use matcher::{fuzzy_search, search_products, FieldMatch, ProductMatcher, SearchHit};
pub use options::{SearchOptions, DEFAULT_THRESHOLD, PARALLEL_THRESHOLD};
pub use record::{Product, Record, SearchField, Searchable};
