use std::path::PathBuf;
use shopfront_core::*;

/// Session state for the storefront shell - Domain state only
/// The engine itself is a pure function of (criteria, visible count);
/// everything mutable between calls lives here
#[derive(Debug)]
pub struct StoreState {
    /// Currently loaded schema (facet dimensions)
    pub schema: Option<CatalogSchema>,
    /// Currently loaded catalog
    pub catalog: Option<CatalogData>,
    /// Path to current catalog file
    pub current_file: Option<PathBuf>,
    /// Active filter criteria
    pub criteria: FilterCriteria,
    /// Number of items the listing currently shows
    pub visible_count: usize,
}

impl StoreState {
    pub fn new() -> Self {
        Self {
            schema: None,
            catalog: None,
            current_file: None,
            criteria: FilterCriteria::default(),
            visible_count: PAGE_SIZE,
        }
    }

    /// Load a catalog file with its schema
    pub fn load_from_file(&mut self, path: PathBuf) -> Result<(), Box<dyn std::error::Error>> {
        let (catalog, schema) = load_catalog_with_auto_schema(&path)?;

        self.catalog = Some(catalog);
        self.schema = Some(schema);
        self.current_file = Some(path);
        self.criteria = FilterCriteria::default();
        self.visible_count = PAGE_SIZE;

        Ok(())
    }

    /// Replace the active criteria
    /// Any criteria change invalidates the meaning of the current window, so
    /// the visible count snaps back to one page before the next render
    pub fn apply_filters(&mut self, criteria: FilterCriteria) {
        self.criteria = criteria;
        self.visible_count = PAGE_SIZE;
    }

    /// Drop every active filter and start over from one page
    pub fn clear_filters(&mut self) {
        self.apply_filters(FilterCriteria::default());
    }

    /// Extend the listing by one page
    pub fn load_more(&mut self) {
        self.visible_count += PAGE_SIZE;
    }

    /// Get a reference to products
    pub fn products(&self) -> &[Product] {
        self.catalog
            .as_ref()
            .map(|c| c.products.as_slice())
            .unwrap_or(&[])
    }

    /// Categories for the sidebar, in schema order when a schema is loaded
    /// and first-appearance order otherwise
    pub fn sidebar_categories(&self) -> Vec<String> {
        match self.schema {
            Some(ref schema) => schema.categories.clone(),
            None => known_categories(self.products()),
        }
    }

    /// Run the full listing pipeline for the current state: query, cyclic
    /// window of `visible_count`, rows of `row_size`, plus the sidebar counts
    pub fn visible_page(&self, row_size: usize) -> (Vec<Vec<DisplayItem>>, Vec<FacetCount>) {
        let products = self.products();

        let results = query(products, &self.criteria);
        let window = cycle_page(&results, self.visible_count);
        let rows = chunk_rows(&window, row_size);

        let counts = category_counts(products, &self.sidebar_categories(), &self.criteria);

        (rows, counts)
    }
}
