use crate::models::{CatalogSchema, Product};
use crate::pagination::CYCLE_OFFSET;
use regex::Regex;
use std::collections::HashSet;

/// Validate catalog products against their schema
/// Returns Ok(()) if valid, or Err(Vec<String>) listing every problem found
pub fn validate_catalog(products: &[Product], schema: &CatalogSchema) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    validate_dimensions(schema, &mut errors);
    validate_products(products, schema, &mut errors);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validate the schema's facet dimension lists
pub fn validate_dimensions(schema: &CatalogSchema, errors: &mut Vec<String>) {
    let dimensions = [
        ("categories", &schema.categories),
        ("brands", &schema.brands),
        ("sizes", &schema.sizes),
    ];

    for (name, values) in dimensions {
        if values.is_empty() {
            errors.push(format!("Dimension '{}' must have at least one value", name));
        }

        // Check for empty and duplicate values within a dimension
        let mut seen = HashSet::new();
        for value in values {
            if value.trim().is_empty() {
                errors.push(format!("Dimension '{}' contains an empty value", name));
            }
            if !seen.insert(value) {
                errors.push(format!("Dimension '{}' has duplicate value: '{}'", name, value));
            }
        }
    }
}

/// Validate individual products against the schema's dimensions
pub fn validate_products(products: &[Product], schema: &CatalogSchema, errors: &mut Vec<String>) {
    let currency_format = Regex::new(r"^[A-Z]{3}$").unwrap();
    let mut seen_ids = HashSet::new();

    for (idx, product) in products.iter().enumerate() {
        let product_ref = format!("Product #{} ('{}')", idx + 1, product.name);

        if product.name.trim().is_empty() {
            errors.push(format!("{}: name cannot be empty", product_ref));
        }

        if !seen_ids.insert(product.id) {
            errors.push(format!("{}: duplicate id {}", product_ref, product.id));
        }

        // Display ids for repeated cycles are id + n * CYCLE_OFFSET; an id at
        // or above the offset would collide with another product's repeat
        if product.id >= CYCLE_OFFSET {
            errors.push(format!(
                "{}: id {} must be below the display cycle offset {}",
                product_ref, product.id, CYCLE_OFFSET
            ));
        }

        if !(1..=5).contains(&product.rating) {
            errors.push(format!(
                "{}: rating {} is outside the 1-5 range",
                product_ref, product.rating
            ));
        }

        if product.price < 0.0 {
            errors.push(format!("{}: price cannot be negative", product_ref));
        }

        if product.original_price < 0.0 {
            errors.push(format!("{}: original price cannot be negative", product_ref));
        }

        if !currency_format.is_match(&product.currency) {
            errors.push(format!(
                "{}: currency '{}' is not a three-letter code",
                product_ref, product.currency
            ));
        }

        if !schema.categories.contains(&product.category) {
            errors.push(format!(
                "{}: category '{}' is not an allowed category",
                product_ref, product.category
            ));
        }

        if !schema.brands.contains(&product.brand) {
            errors.push(format!(
                "{}: brand '{}' is not an allowed brand",
                product_ref, product.brand
            ));
        }

        for size in &product.sizes {
            if !schema.sizes.contains(size) {
                errors.push(format!(
                    "{}: size '{}' is not an allowed size",
                    product_ref, size
                ));
            }
        }
    }
}
