use crate::models::{CatalogDimensions, CatalogSchema};
use serde_json::Value;

/// Extract the storefront facet dimensions from a JSON Schema
/// Looks for the "catalog_dimensions" top-level property
pub fn extract_catalog_dimensions(json_schema: &Value) -> Result<CatalogDimensions, String> {
    let dimensions_value = json_schema
        .get("catalog_dimensions")
        .ok_or("JSON Schema missing 'catalog_dimensions' property")?;

    serde_json::from_value(dimensions_value.clone())
        .map_err(|e| format!("Failed to parse catalog_dimensions: {}", e))
}

/// Build a CatalogSchema from a JSON Schema file
pub fn build_schema_from_json(json_schema: Value) -> Result<CatalogSchema, String> {
    // Extract schema metadata
    let schema_id = json_schema
        .get("$id")
        .and_then(|v| v.as_str())
        .unwrap_or("unknown")
        .to_string();

    let title = json_schema
        .get("title")
        .and_then(|v| v.as_str())
        .unwrap_or("Untitled Catalog")
        .to_string();

    let description = json_schema
        .get("description")
        .and_then(|v| v.as_str())
        .map(|s| s.to_string());

    // Extract the facet dimensions
    let dimensions = extract_catalog_dimensions(&json_schema)?;

    Ok(CatalogSchema {
        schema_id,
        title,
        description,
        categories: dimensions.categories,
        brands: dimensions.brands,
        sizes: dimensions.sizes,
        json_schema: Some(json_schema),
    })
}
