use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process;

use shopfront_core::{cycle_page, query, FilterCriteria, SortKey};

mod errors;
mod state;
mod ui;

use errors::map_catalog_load_error;
use state::StoreState;
use ui::{format_active_filters, format_facet_sidebar, format_row};

/// Storefront catalog browser - filter, sort and page through a product catalog
///
/// Examples:
///   # Show the first page of the catalog
///   shopfront catalog.json
///
///   # Free-text search over product names
///   shopfront catalog.json --search shirt
///
///   # Filter by category and brand (repeat a flag for OR within that facet)
///   shopfront catalog.json --category Fashion --brand Nike --brand Adidas
///
///   # Sizes match products stocking any selected size
///   shopfront catalog.json --size M --size L
///
///   # Sort and page deeper into the cyclic listing
///   shopfront catalog.json --sort price-asc --pages 2
///
///   # Browse interactively (search, category, brand, size, sort, more, ...)
///   shopfront catalog.json --interactive
#[derive(Parser, Debug)]
#[command(name = "shopfront")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Filtering Logic:\n  \
    - Values repeated within one facet flag are combined with OR\n  \
    - Different facets (search, category, brand, size) are combined with AND\n  \
    - A size selection matches products stocking any of the selected sizes\n\n\
Sorting Options:\n  \
    default, price-asc, price-desc, rating-desc, reviews-desc\n  \
    (unknown values fall back to default catalog order)\n\n\
Paging:\n  \
    The listing always shows whole pages and wraps around the filtered\n  \
    result, so --pages can exceed the match count; wrapped repeats get\n  \
    fresh display ids.")]
struct Cli {
    /// Path to the catalog JSON file
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// Free-text search over product names (case-insensitive substring)
    #[arg(short = 'q', long = "search", value_name = "TEXT")]
    search: Option<String>,

    /// Filter by category (can be specified multiple times for OR logic)
    #[arg(short, long = "category", value_name = "NAME")]
    categories: Vec<String>,

    /// Filter by brand (can be specified multiple times for OR logic)
    #[arg(short, long = "brand", value_name = "NAME")]
    brands: Vec<String>,

    /// Filter by size (can be specified multiple times)
    #[arg(short, long = "size", value_name = "SIZE")]
    sizes: Vec<String>,

    /// Sort results (default, price-asc, price-desc, rating-desc, reviews-desc)
    #[arg(long = "sort", value_name = "KEY")]
    sort: Option<String>,

    /// Extra "load more" pages beyond the first
    #[arg(short, long = "pages", value_name = "N", default_value_t = 0)]
    pages: usize,

    /// Products per grid row
    #[arg(short, long = "row-size", value_name = "WIDTH", default_value_t = 3)]
    row_size: usize,

    /// Print the visible window as JSON instead of a grid
    #[arg(short, long)]
    json: bool,

    /// Start an interactive browsing session
    #[arg(short, long)]
    interactive: bool,
}

fn main() {
    let cli = Cli::parse();

    let mut state = StoreState::new();
    if let Err(err) = state.load_from_file(cli.file.clone()) {
        let (title, message, details) = map_catalog_load_error(err.as_ref(), &cli.file);
        eprintln!("{}: {}", title, message);
        eprintln!("{}", details);
        process::exit(1);
    }

    state.apply_filters(criteria_from_cli(&cli));
    for _ in 0..cli.pages {
        state.load_more();
    }

    if cli.json {
        if let Err(err) = print_json_window(&state) {
            eprintln!("Error: {}", err);
            process::exit(1);
        }
    } else if cli.interactive {
        if let Err(err) = run_interactive(&mut state, cli.row_size) {
            eprintln!("Error: {}", err);
            process::exit(1);
        }
    } else {
        render_listing(&state, cli.row_size);
    }
}

fn criteria_from_cli(cli: &Cli) -> FilterCriteria {
    FilterCriteria {
        search_term: cli.search.clone().unwrap_or_default(),
        categories: cli.categories.clone(),
        brands: cli.brands.clone(),
        sizes: cli.sizes.clone(),
        sort: cli.sort.as_deref().map(SortKey::parse).unwrap_or_default(),
    }
}

/// Print the sidebar, active filters and the visible grid for the current state
fn render_listing(state: &StoreState, row_size: usize) {
    let (rows, counts) = state.visible_page(row_size);

    println!("{}", format_facet_sidebar(&counts));
    println!();

    let active = format_active_filters(&state.criteria);
    if !active.is_empty() {
        println!("Active filters: {}", active);
        println!();
    }

    if rows.is_empty() {
        println!("No products match the current filters.");
        return;
    }

    for (index, row) in rows.iter().enumerate() {
        println!("{}", format_row(index, row));
    }

    let shown: usize = rows.iter().map(|row| row.len()).sum();
    println!();
    println!("Showing {} items.", shown);
}

/// Dump the visible window as JSON for scripting
fn print_json_window(state: &StoreState) -> anyhow::Result<()> {
    let results = query(state.products(), &state.criteria);
    let window = cycle_page(&results, state.visible_count);
    println!("{}", serde_json::to_string_pretty(&window)?);
    Ok(())
}

/// Interactive browsing loop
/// Every command that touches the criteria goes through apply_filters, which
/// snaps the listing back to one page; only "more" extends the window
fn run_interactive(state: &mut StoreState, row_size: usize) -> anyhow::Result<()> {
    render_listing(state, row_size);
    println!();
    println!("Commands: search <text>, category <name>, brand <name>, size <name>, sort <key>, more, clear, quit");
    prompt()?;

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        let input = line.trim();
        let (command, rest) = match input.split_once(' ') {
            Some((command, rest)) => (command, rest.trim()),
            None => (input, ""),
        };

        match command {
            "" => {
                prompt()?;
                continue;
            }
            "quit" | "exit" => break,
            "more" => state.load_more(),
            "clear" => state.clear_filters(),
            "search" => {
                let mut criteria = state.criteria.clone();
                criteria.search_term = rest.to_string();
                state.apply_filters(criteria);
            }
            "category" => {
                let mut criteria = state.criteria.clone();
                toggle_selection(&mut criteria.categories, rest);
                state.apply_filters(criteria);
            }
            "brand" => {
                let mut criteria = state.criteria.clone();
                toggle_selection(&mut criteria.brands, rest);
                state.apply_filters(criteria);
            }
            "size" => {
                let mut criteria = state.criteria.clone();
                toggle_selection(&mut criteria.sizes, rest);
                state.apply_filters(criteria);
            }
            "sort" => {
                let mut criteria = state.criteria.clone();
                criteria.sort = SortKey::parse(rest);
                state.apply_filters(criteria);
            }
            _ => {
                println!(
                    "Unknown command '{}'. Commands: search, category, brand, size, sort, more, clear, quit",
                    command
                );
                prompt()?;
                continue;
            }
        }

        println!();
        render_listing(state, row_size);
        prompt()?;
    }

    Ok(())
}

/// Add a value to a selection, or remove it when already selected
fn toggle_selection(selection: &mut Vec<String>, value: &str) {
    if value.is_empty() {
        return;
    }

    if let Some(position) = selection.iter().position(|v| v == value) {
        selection.remove(position);
    } else {
        selection.push(value.to_string());
    }
}

fn prompt() -> io::Result<()> {
    print!("> ");
    io::stdout().flush()
}
