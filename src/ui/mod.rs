pub mod formatting;

pub use formatting::{
    format_active_filters, format_facet_sidebar, format_price, format_product_cell, format_rating,
    format_row,
};
