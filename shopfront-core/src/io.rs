use crate::models::{CatalogData, CatalogSchema};
use crate::schema::build_schema_from_json;
use crate::schema_validation::validate_against_schema;
use crate::validation::validate_catalog;
use std::error::Error;
use std::fs;
use std::path::Path;

/// Load a catalog document from a JSON file
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<CatalogData, Box<dyn Error>> {
    let contents = fs::read_to_string(path)?;
    let catalog: CatalogData = serde_json::from_str(&contents)?;
    Ok(catalog)
}

/// Save a catalog document to a JSON file with pretty printing
pub fn save_catalog<P: AsRef<Path>>(catalog: &CatalogData, path: P) -> Result<(), Box<dyn Error>> {
    let json = serde_json::to_string_pretty(catalog)?;
    fs::write(path, json)?;
    Ok(())
}

/// Load a catalog schema from a JSON Schema file
pub fn load_schema<P: AsRef<Path>>(path: P) -> Result<CatalogSchema, Box<dyn Error>> {
    let contents = fs::read_to_string(path)?;
    let json_schema: serde_json::Value = serde_json::from_str(&contents)?;
    let schema = build_schema_from_json(json_schema)?;
    Ok(schema)
}

/// Load a catalog together with an explicit schema file and validate it
/// The raw document is checked against the JSON Schema first, then the
/// products are checked structurally against the schema's dimensions
pub fn load_catalog_with_schema<P: AsRef<Path>, Q: AsRef<Path>>(
    catalog_path: P,
    schema_path: Q,
) -> Result<(CatalogData, CatalogSchema), Box<dyn Error>> {
    let contents = fs::read_to_string(catalog_path)?;
    let raw: serde_json::Value = serde_json::from_str(&contents)?;
    let schema = load_schema(schema_path)?;

    if let Some(ref json_schema) = schema.json_schema {
        validate_against_schema(json_schema, &raw)
            .map_err(|errors| format!("Validation failed:\n{}", errors.join("\n")))?;
    }

    let catalog: CatalogData = serde_json::from_value(raw)?;

    validate_catalog(&catalog.products, &schema)
        .map_err(|errors| format!("Validation failed:\n{}", errors.join("\n")))?;

    Ok((catalog, schema))
}

/// Load a catalog and its schema, resolving the schema file named inside
/// the catalog document relative to the catalog file's directory
pub fn load_catalog_with_auto_schema<P: AsRef<Path>>(
    catalog_path: P,
) -> Result<(CatalogData, CatalogSchema), Box<dyn Error>> {
    let catalog = load_catalog(&catalog_path)?;

    let data_dir = catalog_path
        .as_ref()
        .parent()
        .unwrap_or_else(|| Path::new("."));
    let schema_path = data_dir.join(&catalog.schema);

    load_catalog_with_schema(catalog_path, schema_path)
}
