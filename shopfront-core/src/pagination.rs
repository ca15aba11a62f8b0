use crate::models::{DisplayItem, Product};

/// Spacing between the synthetic ids of successive display cycles
/// Every real product id must stay strictly below this value (checked at
/// catalog validation time) or ids from different cycles could collide
pub const CYCLE_OFFSET: u64 = 1000;

/// Base window size, and the increment applied per "load more" request
pub const PAGE_SIZE: usize = 18;

/// Produce a window of exactly `visible_count` entries by cycling through
/// the queried list
/// Index `i` shows `products[i % len]`; each completed cycle adds
/// `CYCLE_OFFSET` to the synthetic id, so repeated products still render
/// under distinct list keys. The whole window is recomputed on every call
/// because the underlying list may have changed since the last one.
/// An empty input yields an empty window regardless of the requested count
pub fn cycle_page(products: &[Product], visible_count: usize) -> Vec<DisplayItem> {
    if products.is_empty() {
        return Vec::new();
    }

    (0..visible_count)
        .map(|i| {
            let product = &products[i % products.len()];
            let cycle = (i / products.len()) as u64;

            DisplayItem {
                display_id: product.id + cycle * CYCLE_OFFSET,
                product: product.clone(),
            }
        })
        .collect()
}

/// Partition a display window into rows of `row_size` for grid rendering
/// Strict left-to-right; the final row may be shorter. A zero row size
/// yields no rows
pub fn chunk_rows(items: &[DisplayItem], row_size: usize) -> Vec<Vec<DisplayItem>> {
    if row_size == 0 {
        return Vec::new();
    }

    items.chunks(row_size).map(|chunk| chunk.to_vec()).collect()
}
