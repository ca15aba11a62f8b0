// Public modules
pub mod facets;
pub mod filtering;
pub mod io;
pub mod models;
pub mod pagination;
pub mod query;
pub mod schema;
pub mod schema_validation;
pub mod sorting;
pub mod validation;

// Re-export commonly used types for convenience
pub use facets::{category_counts, known_categories};
pub use filtering::{apply_criteria, has_filters, matches_criteria, normalize_for_search};
pub use io::{
    load_catalog, load_catalog_with_auto_schema, load_catalog_with_schema, load_schema,
    save_catalog,
};
pub use models::{
    CatalogData, CatalogDimensions, CatalogSchema, DisplayItem, FacetCount, FilterCriteria,
    Product, SortKey,
};
pub use pagination::{chunk_rows, cycle_page, CYCLE_OFFSET, PAGE_SIZE};
pub use query::query;
pub use schema::{build_schema_from_json, extract_catalog_dimensions};
pub use schema_validation::validate_against_schema;
pub use sorting::sort_products;
pub use validation::validate_catalog;
