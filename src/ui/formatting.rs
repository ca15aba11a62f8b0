use colored::Colorize;
use shopfront_core::{DisplayItem, FacetCount, FilterCriteria, SortKey};

/// Format a price with its currency code
pub fn format_price(price: f64, currency: &str) -> String {
    format!("{:.2} {}", price, currency)
}

/// Format a 1-5 rating as filled and empty stars
pub fn format_rating(rating: u8) -> String {
    let filled = rating.min(5) as usize;
    format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
}

/// Format one product cell: display key, name, brand, price (with the
/// original price struck through when discounted), rating and review count
pub fn format_product_cell(item: &DisplayItem) -> String {
    let product = &item.product;

    let mut price = format_price(product.price, &product.currency)
        .green()
        .to_string();
    if product.original_price > product.price {
        let original = format_price(product.original_price, &product.currency);
        price = format!("{} {}", price, original.strikethrough().dimmed());
    }

    format!(
        "{} {} by {} | {} | {} ({})",
        format!("#{}", item.display_id).dimmed(),
        product.name.bold(),
        product.brand,
        price,
        format_rating(product.rating).yellow(),
        product.reviews
    )
}

/// Format one grid row as a header line plus one line per product
pub fn format_row(index: usize, row: &[DisplayItem]) -> String {
    let mut lines = vec![format!("Row {}", index + 1).cyan().bold().to_string()];

    for item in row {
        lines.push(format!("  {}", format_product_cell(item)));
    }

    lines.join("\n")
}

/// Format the category sidebar with per-category counts
pub fn format_facet_sidebar(counts: &[FacetCount]) -> String {
    let mut lines = vec!["Categories".bold().to_string()];

    for facet in counts {
        lines.push(format!("  {} ({})", facet.category, facet.count));
    }

    lines.join("\n")
}

/// Format the active criteria into a single summary line
/// Returns an empty string when nothing is active
pub fn format_active_filters(criteria: &FilterCriteria) -> String {
    let mut parts = Vec::new();

    let term = criteria.search_term.trim();
    if !term.is_empty() {
        parts.push(format!("Search: \"{}\"", term));
    }
    if !criteria.categories.is_empty() {
        parts.push(format!("Category: {}", criteria.categories.join(" OR ")));
    }
    if !criteria.brands.is_empty() {
        parts.push(format!("Brand: {}", criteria.brands.join(" OR ")));
    }
    if !criteria.sizes.is_empty() {
        parts.push(format!("Size: {}", criteria.sizes.join(" OR ")));
    }
    if criteria.sort != SortKey::Default {
        parts.push(format!("Sort: {}", criteria.sort.name()));
    }

    parts.join("; ")
}
