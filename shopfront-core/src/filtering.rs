use crate::models::{FilterCriteria, Product};
use unicode_normalization::UnicodeNormalization;

/// Normalize a string for search matching
/// - Unicode normalization (NFD decomposition) and lowercase
/// - Collapse internal whitespace
pub fn normalize_for_search(s: &str) -> String {
    let normalized: String = s.nfd().collect::<String>().to_lowercase();
    normalized.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Check the free-text search clause
/// Empty or whitespace-only terms always pass; otherwise the product name
/// must contain the term as a substring, compared case-insensitively
pub fn matches_search(product: &Product, search_term: &str) -> bool {
    let term = search_term.trim();
    if term.is_empty() {
        return true;
    }

    normalize_for_search(&product.name).contains(&normalize_for_search(term))
}

/// Check the category selection (empty selection passes everything)
pub fn matches_categories(product: &Product, categories: &[String]) -> bool {
    categories.is_empty() || categories.iter().any(|c| c == &product.category)
}

/// Check the brand selection (empty selection passes everything)
pub fn matches_brands(product: &Product, brands: &[String]) -> bool {
    brands.is_empty() || brands.iter().any(|b| b == &product.brand)
}

/// Check the size selection
/// A product passes when it stocks at least one selected size (intersection,
/// not subset); an empty selection passes everything
pub fn matches_sizes(product: &Product, sizes: &[String]) -> bool {
    if sizes.is_empty() {
        return true;
    }

    product.sizes.iter().any(|s| sizes.contains(s))
}

/// Check if a product matches the given criteria
/// AND logic between clauses, OR within each facet's selection
pub fn matches_criteria(product: &Product, criteria: &FilterCriteria) -> bool {
    matches_search(product, &criteria.search_term)
        && matches_categories(product, &criteria.categories)
        && matches_brands(product, &criteria.brands)
        && matches_sizes(product, &criteria.sizes)
}

/// Apply criteria to a product list, returning only matches in catalog order
pub fn apply_criteria(products: &[Product], criteria: &FilterCriteria) -> Vec<Product> {
    products
        .iter()
        .filter(|product| matches_criteria(product, criteria))
        .cloned()
        .collect()
}

/// Check if any filter clause is active
pub fn has_filters(criteria: &FilterCriteria) -> bool {
    !criteria.search_term.trim().is_empty()
        || !criteria.categories.is_empty()
        || !criteria.brands.is_empty()
        || !criteria.sizes.is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: u64, name: &str, category: &str, brand: &str, sizes: &[&str]) -> Product {
        Product {
            id,
            name: name.to_string(),
            price: 10.0,
            original_price: 10.0,
            currency: "USD".to_string(),
            category: category.to_string(),
            brand: brand.to_string(),
            sizes: sizes.iter().map(|s| s.to_string()).collect(),
            rating: 4,
            reviews: 12,
        }
    }

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_empty_criteria_matches_everything() {
        let catalog = vec![
            product(1, "Red Shirt", "Fashion", "Nike", &["M"]),
            product(2, "Blue Shirt", "Fashion", "Adidas", &["L"]),
        ];

        let results = apply_criteria(&catalog, &FilterCriteria::default());
        assert_eq!(results, catalog);
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let item = product(1, "Red Shirt", "Fashion", "Nike", &["M"]);

        assert!(matches_search(&item, "shirt"));
        assert!(matches_search(&item, "RED"));
        assert!(matches_search(&item, "d Sh"));
        assert!(!matches_search(&item, "jacket"));
    }

    #[test]
    fn test_whitespace_only_search_passes() {
        let item = product(1, "Red Shirt", "Fashion", "Nike", &["M"]);

        assert!(matches_search(&item, ""));
        assert!(matches_search(&item, "   "));
    }

    #[test]
    fn test_size_selection_uses_intersection() {
        let item = product(1, "Red Shirt", "Fashion", "Nike", &["S", "M"]);

        assert!(matches_sizes(&item, &strings(&["M", "L"])));
        assert!(!matches_sizes(&item, &strings(&["L", "XL"])));
    }

    #[test]
    fn test_product_without_sizes_never_matches_a_size_selection() {
        let item = product(1, "Gift Card", "Accessories", "Nike", &[]);

        assert!(matches_sizes(&item, &[]));
        assert!(!matches_sizes(&item, &strings(&["M"])));
    }

    #[test]
    fn test_clauses_combine_with_and() {
        let catalog = vec![
            product(1, "Red Shirt", "Fashion", "Nike", &["M"]),
            product(2, "Blue Shirt", "Fashion", "Adidas", &["L"]),
        ];
        let criteria = FilterCriteria {
            search_term: "shirt".to_string(),
            brands: strings(&["Nike"]),
            ..FilterCriteria::default()
        };

        let results = apply_criteria(&catalog, &criteria);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id, 1);
    }

    #[test]
    fn test_empty_selection_means_match_all_not_match_none() {
        let item = product(1, "Red Shirt", "Fashion", "Nike", &["M"]);

        assert!(matches_categories(&item, &[]));
        assert!(matches_brands(&item, &[]));
        assert!(matches_sizes(&item, &[]));
    }

    #[test]
    fn test_has_filters() {
        assert!(!has_filters(&FilterCriteria::default()));

        let whitespace_search = FilterCriteria {
            search_term: "  ".to_string(),
            ..FilterCriteria::default()
        };
        assert!(!has_filters(&whitespace_search));

        let brand_selected = FilterCriteria {
            brands: strings(&["Nike"]),
            ..FilterCriteria::default()
        };
        assert!(has_filters(&brand_selected));
    }

    #[test]
    fn test_normalize_for_search_collapses_whitespace() {
        assert_eq!(normalize_for_search("  Red   Shirt  "), "red shirt");
    }
}
