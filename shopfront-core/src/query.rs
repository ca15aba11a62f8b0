use crate::filtering::apply_criteria;
use crate::models::{FilterCriteria, Product};
use crate::sorting::sort_products;

/// Run a catalog query: filter by the active criteria, then order the result
/// Filtering preserves catalog order and the sort is stable, so repeated
/// calls with unchanged inputs return identical sequences. Pagination is a
/// separate step applied to the returned list
pub fn query(products: &[Product], criteria: &FilterCriteria) -> Vec<Product> {
    let mut results = apply_criteria(products, criteria);
    sort_products(&mut results, criteria.sort);
    results
}
