use crate::models::{Product, SortKey};

/// Sort products in place according to the requested key
/// `Default` keeps the incoming order untouched. All branches use a stable
/// sort, so equal keys preserve their relative input order and repeated
/// queries with unchanged criteria return identical sequences
pub fn sort_products(products: &mut [Product], key: SortKey) {
    match key {
        SortKey::Default => {}
        SortKey::PriceAsc => products.sort_by(|a, b| a.price.total_cmp(&b.price)),
        SortKey::PriceDesc => products.sort_by(|a, b| b.price.total_cmp(&a.price)),
        SortKey::RatingDesc => products.sort_by(|a, b| b.rating.cmp(&a.rating)),
        SortKey::ReviewsDesc => products.sort_by(|a, b| b.reviews.cmp(&a.reviews)),
    }
}
