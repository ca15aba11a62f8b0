use crate::filtering::{matches_brands, matches_search, matches_sizes};
use crate::models::{FacetCount, FilterCriteria, Product};
use std::collections::HashSet;

/// Compute the sidebar count for each known category
/// A category's count answers "how many items would appear if this category
/// were selected" under the active search, brand and size clauses - the
/// category selection itself is deliberately left out, so selecting a
/// category never changes its own count
pub fn category_counts(
    products: &[Product],
    categories: &[String],
    criteria: &FilterCriteria,
) -> Vec<FacetCount> {
    categories
        .iter()
        .map(|category| {
            let count = products
                .iter()
                .filter(|product| {
                    &product.category == category
                        && matches_search(product, &criteria.search_term)
                        && matches_brands(product, &criteria.brands)
                        && matches_sizes(product, &criteria.sizes)
                })
                .count();

            FacetCount {
                category: category.clone(),
                count,
            }
        })
        .collect()
}

/// Distinct categories present in a catalog, in first-appearance order
/// Used as the sidebar ordering when no schema is loaded
pub fn known_categories(products: &[Product]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut categories = Vec::new();

    for product in products {
        if seen.insert(product.category.as_str()) {
            categories.push(product.category.clone());
        }
    }

    categories
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::query;

    fn product(id: u64, name: &str, category: &str, brand: &str, sizes: &[&str]) -> Product {
        Product {
            id,
            name: name.to_string(),
            price: 25.0,
            original_price: 25.0,
            currency: "USD".to_string(),
            category: category.to_string(),
            brand: brand.to_string(),
            sizes: sizes.iter().map(|s| s.to_string()).collect(),
            rating: 4,
            reviews: 3,
        }
    }

    fn catalog() -> Vec<Product> {
        vec![
            product(1, "Red Shirt", "Fashion", "Nike", &["M"]),
            product(2, "Blue Shirt", "Fashion", "Adidas", &["L"]),
            product(3, "Trail Shoe", "Footwear", "Nike", &["M", "L"]),
            product(4, "Canvas Tote", "Accessories", "Patagonia", &[]),
        ]
    }

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_counts_without_filters_partition_the_catalog() {
        let products = catalog();
        let categories = known_categories(&products);

        let counts = category_counts(&products, &categories, &FilterCriteria::default());
        let total: usize = counts.iter().map(|c| c.count).sum();

        assert_eq!(total, products.len());
        assert_eq!(counts[0], FacetCount { category: "Fashion".to_string(), count: 2 });
        assert_eq!(counts[1], FacetCount { category: "Footwear".to_string(), count: 1 });
        assert_eq!(counts[2], FacetCount { category: "Accessories".to_string(), count: 1 });
    }

    #[test]
    fn test_selecting_a_category_does_not_change_its_own_count() {
        let products = catalog();
        let categories = known_categories(&products);

        let unfiltered = category_counts(&products, &categories, &FilterCriteria::default());

        let criteria = FilterCriteria {
            categories: strings(&["Fashion"]),
            ..FilterCriteria::default()
        };
        let filtered = category_counts(&products, &categories, &criteria);

        assert_eq!(unfiltered, filtered);
    }

    #[test]
    fn test_counts_honor_the_other_filters() {
        let products = catalog();
        let categories = known_categories(&products);

        let criteria = FilterCriteria {
            brands: strings(&["Nike"]),
            ..FilterCriteria::default()
        };
        let counts = category_counts(&products, &categories, &criteria);

        assert_eq!(counts[0].count, 1); // Fashion: only the Nike shirt
        assert_eq!(counts[1].count, 1); // Footwear: the Nike shoe
        assert_eq!(counts[2].count, 0); // Accessories: no Nike items
    }

    #[test]
    fn test_counts_cover_the_query_result_when_no_category_is_selected() {
        let products = catalog();
        let categories = known_categories(&products);

        let criteria = FilterCriteria {
            search_term: "shirt".to_string(),
            ..FilterCriteria::default()
        };
        let counts = category_counts(&products, &categories, &criteria);
        let total: usize = counts.iter().map(|c| c.count).sum();

        assert!(total >= query(&products, &criteria).len());
    }

    #[test]
    fn test_unknown_category_counts_zero() {
        let products = catalog();
        let categories = strings(&["Electronics"]);

        let counts = category_counts(&products, &categories, &FilterCriteria::default());
        assert_eq!(counts, vec![FacetCount { category: "Electronics".to_string(), count: 0 }]);
    }

    #[test]
    fn test_known_categories_keeps_first_appearance_order() {
        let products = catalog();

        assert_eq!(
            known_categories(&products),
            strings(&["Fashion", "Footwear", "Accessories"])
        );
        assert!(known_categories(&[]).is_empty());
    }
}
