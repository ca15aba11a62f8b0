use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u64,
    pub name: String,
    pub price: f64,
    pub original_price: f64,
    pub currency: String,
    pub category: String,
    pub brand: String,
    pub sizes: Vec<String>,
    pub rating: u8,
    pub reviews: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    #[default]
    Default,
    PriceAsc,
    PriceDesc,
    RatingDesc,
    ReviewsDesc,
}

impl SortKey {
    /// Parse a sort key name ("price-asc", "rating-desc", ...)
    /// Unknown names degrade to `Default` rather than failing, so a corrupt
    /// value can never break rendering
    pub fn parse(name: &str) -> Self {
        match name {
            "price-asc" => SortKey::PriceAsc,
            "price-desc" => SortKey::PriceDesc,
            "rating-desc" => SortKey::RatingDesc,
            "reviews-desc" => SortKey::ReviewsDesc,
            _ => SortKey::Default,
        }
    }

    /// The canonical name for this key, matching what `parse` accepts
    pub fn name(self) -> &'static str {
        match self {
            SortKey::Default => "default",
            SortKey::PriceAsc => "price-asc",
            SortKey::PriceDesc => "price-desc",
            SortKey::RatingDesc => "rating-desc",
            SortKey::ReviewsDesc => "reviews-desc",
        }
    }
}

/// Active storefront filters. Owned by the calling shell and passed into the
/// engine on every call; the engine keeps no reference across calls.
/// An empty selection for any facet means "match all", never "match none".
#[derive(Debug, Clone, Default)]
pub struct FilterCriteria {
    pub search_term: String,
    pub categories: Vec<String>,
    pub brands: Vec<String>,
    pub sizes: Vec<String>,
    pub sort: SortKey,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FacetCount {
    pub category: String,
    pub count: usize,
}

/// A product paired with a synthetic list key. The key is unique within one
/// paginated window even when the same product repeats across cycles, while
/// the product's own id stays untouched and comparison-safe.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplayItem {
    pub display_id: u64,
    pub product: Product,
}

/// On-disk catalog document. `schema` names the sibling JSON Schema file;
/// unknown top-level fields survive a load/save round-trip.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogData {
    pub schema: String,
    pub products: Vec<Product>,
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogDimensions {
    pub categories: Vec<String>,
    pub brands: Vec<String>,
    pub sizes: Vec<String>,
}

/// Allowed facet values for a catalog, extracted from its JSON Schema file.
/// Dimension order is the display order for sidebar counts.
#[derive(Debug, Clone)]
pub struct CatalogSchema {
    pub schema_id: String,
    pub title: String,
    pub description: Option<String>,
    pub categories: Vec<String>,
    pub brands: Vec<String>,
    pub sizes: Vec<String>,
    pub json_schema: Option<serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_key_parse_known_names() {
        assert_eq!(SortKey::parse("price-asc"), SortKey::PriceAsc);
        assert_eq!(SortKey::parse("price-desc"), SortKey::PriceDesc);
        assert_eq!(SortKey::parse("rating-desc"), SortKey::RatingDesc);
        assert_eq!(SortKey::parse("reviews-desc"), SortKey::ReviewsDesc);
        assert_eq!(SortKey::parse("default"), SortKey::Default);
    }

    #[test]
    fn test_sort_key_parse_unknown_falls_back_to_default() {
        assert_eq!(SortKey::parse("price_asc"), SortKey::Default);
        assert_eq!(SortKey::parse("PRICE-ASC"), SortKey::Default);
        assert_eq!(SortKey::parse(""), SortKey::Default);
        assert_eq!(SortKey::parse("garbage"), SortKey::Default);
    }

    #[test]
    fn test_sort_key_name_round_trips_through_parse() {
        for key in [
            SortKey::Default,
            SortKey::PriceAsc,
            SortKey::PriceDesc,
            SortKey::RatingDesc,
            SortKey::ReviewsDesc,
        ] {
            assert_eq!(SortKey::parse(key.name()), key);
        }
    }
}
