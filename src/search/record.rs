//! Searchable record types
//!
//! Catalog entries expose up to four text fields to the matcher:
//! name, description, platform and category. Any type can take part in a
//! search by implementing `Searchable`; `Product` and `Record` cover the
//! statically-typed and map-shaped cases.

use ahash::AHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A text field of a catalog record that the matcher can inspect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchField {
    Name,
    Description,
    Platform,
    Category,
}

impl SearchField {
    /// Every field, in the order the matcher checks them by default
    pub const ALL: [SearchField; 4] = [
        SearchField::Name,
        SearchField::Description,
        SearchField::Platform,
        SearchField::Category,
    ];

    /// Key used for this field in map-shaped records
    pub fn as_str(self) -> &'static str {
        match self {
            SearchField::Name => "name",
            SearchField::Description => "description",
            SearchField::Platform => "platform",
            SearchField::Category => "category",
        }
    }
}

impl fmt::Display for SearchField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A record the matcher can search.
///
/// Every accessor defaults to `None`, so implementors only provide the
/// fields they actually carry.
pub trait Searchable {
    fn name(&self) -> Option<&str> {
        None
    }

    fn description(&self) -> Option<&str> {
        None
    }

    fn platform(&self) -> Option<&str> {
        None
    }

    fn category(&self) -> Option<&str> {
        None
    }

    /// Value of `field`, with empty strings treated as absent
    fn field(&self, field: SearchField) -> Option<&str> {
        let value = match field {
            SearchField::Name => self.name(),
            SearchField::Description => self.description(),
            SearchField::Platform => self.platform(),
            SearchField::Category => self.category(),
        };
        value.filter(|v| !v.is_empty())
    }
}

impl<T: Searchable + ?Sized> Searchable for &T {
    fn name(&self) -> Option<&str> {
        (**self).name()
    }

    fn description(&self) -> Option<&str> {
        (**self).description()
    }

    fn platform(&self) -> Option<&str> {
        (**self).platform()
    }

    fn category(&self) -> Option<&str> {
        (**self).category()
    }
}

/// A catalog product (game, console or accessory)
///
/// # Example
///
/// ```rust
/// use fuzzyshop::search::{Product, Searchable};
///
/// let product = Product::new("FIFA 23").with_platform("PS5").with_id(7);
/// assert_eq!(product.platform(), Some("PS5"));
/// assert_eq!(product.category(), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Catalog identifier, if the product came from a backing store
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl Product {
    /// Create a product with only a name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    pub fn with_id(mut self, id: u64) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_platform(mut self, platform: impl Into<String>) -> Self {
        self.platform = Some(platform.into());
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }
}

impl Searchable for Product {
    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    fn platform(&self) -> Option<&str> {
        self.platform.as_deref()
    }

    fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }
}

/// A loosely-typed record
///
/// Holds arbitrary named string fields, e.g. a row decoded from a remote
/// data source. Only the keys named by [`SearchField::as_str`] are searched.
///
/// # Example
///
/// ```rust
/// use fuzzyshop::search::{Record, Searchable};
///
/// let mut record = Record::new();
/// record.set_field("name", "Mario Kart 8");
/// record.set_field("sku", "MK8-SW");
/// assert_eq!(record.name(), Some("Mario Kart 8"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Field name -> value mapping
    pub fields: AHashMap<String, String>,

    /// Optional user data (e.g., database ID)
    pub data: Option<u64>,
}

impl Record {
    /// Create a new empty record
    pub fn new() -> Self {
        Self {
            fields: AHashMap::new(),
            data: None,
        }
    }

    /// Create a new record with user data
    pub fn with_data(data: u64) -> Self {
        Self {
            fields: AHashMap::new(),
            data: Some(data),
        }
    }

    pub fn set_field(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(name.into(), value.into());
    }

    pub fn get_field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    pub fn has_field(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    pub fn remove_field(&mut self, name: &str) -> Option<String> {
        self.fields.remove(name)
    }

    pub fn field_count(&self) -> usize {
        self.fields.len()
    }
}

impl Default for Record {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut record = Record::new();
        for (k, v) in iter {
            record.set_field(k, v);
        }
        record
    }
}

impl Searchable for Record {
    fn name(&self) -> Option<&str> {
        self.get_field(SearchField::Name.as_str())
    }

    fn description(&self) -> Option<&str> {
        self.get_field(SearchField::Description.as_str())
    }

    fn platform(&self) -> Option<&str> {
        self.get_field(SearchField::Platform.as_str())
    }

    fn category(&self) -> Option<&str> {
        self.get_field(SearchField::Category.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct NameOnly(&'static str);

    impl Searchable for NameOnly {
        fn name(&self) -> Option<&str> {
            Some(self.0)
        }
    }

    #[test]
    fn test_default_accessors_are_absent() {
        let item = NameOnly("Halo");
        assert_eq!(item.field(SearchField::Name), Some("Halo"));
        assert_eq!(item.field(SearchField::Description), None);
        assert_eq!(item.field(SearchField::Category), None);
    }

    #[test]
    fn test_empty_field_is_absent() {
        let product = Product::new("").with_platform("Switch");
        assert_eq!(product.name(), Some(""));
        assert_eq!(product.field(SearchField::Name), None);
        assert_eq!(product.field(SearchField::Platform), Some("Switch"));
    }

    #[test]
    fn test_reference_forwarding() {
        let product = Product::new("Zelda").with_category("Aventura");
        let by_ref: &Product = &product;
        assert_eq!(Searchable::field(&by_ref, SearchField::Category), Some("Aventura"));
    }

    #[test]
    fn test_product_builder() {
        let product = Product::new("God of War")
            .with_id(12)
            .with_description("Kratos e Atreus")
            .with_platform("PS4")
            .with_category("Ação");
        assert_eq!(product.id, Some(12));
        assert_eq!(product.description(), Some("Kratos e Atreus"));
        assert_eq!(product.category(), Some("Ação"));
    }

    #[test]
    fn test_product_deserialize_with_nulls() {
        let json = r#"{"id": 3, "name": null, "description": "Zelda", "platform": "Switch"}"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.id, Some(3));
        assert_eq!(product.name(), None);
        assert_eq!(product.description(), Some("Zelda"));
        assert_eq!(product.category(), None);
    }

    #[test]
    fn test_record_fields() {
        let mut record = Record::with_data(99);
        record.set_field("name", "Xbox Series S");
        record.set_field("color", "white");
        assert_eq!(record.data, Some(99));
        assert_eq!(record.field_count(), 2);
        assert!(record.has_field("color"));
        assert_eq!(record.name(), Some("Xbox Series S"));
        assert_eq!(record.platform(), None);
        assert_eq!(record.remove_field("color"), Some("white".to_string()));
        assert!(!record.has_field("color"));
    }

    #[test]
    fn test_record_from_iter() {
        let record: Record = [("platform", "PS5"), ("category", "Consoles")]
            .into_iter()
            .collect();
        assert_eq!(record.field(SearchField::Platform), Some("PS5"));
        assert_eq!(record.field(SearchField::Category), Some("Consoles"));
        assert_eq!(record.data, None);
    }

    #[test]
    fn test_search_field_serde() {
        let json = serde_json::to_string(&SearchField::ALL).unwrap();
        assert_eq!(json, r#"["name","description","platform","category"]"#);
        let field: SearchField = serde_json::from_str(r#""platform""#).unwrap();
        assert_eq!(field, SearchField::Platform);
    }
}
