//! Terminal rendering for catalog views

use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use owo_colors::OwoColorize;

use crate::catalog::{CatalogItem, ViewPage, ViewQuery};
use crate::types::CategoryCount;

/// Render one page of a derived view as a grid
pub fn display_catalog_page(page: &ViewPage<'_>, query: &ViewQuery) {
    println!("{}", "═".repeat(70).bright_blue());
    println!("{}", "🛒 MARKETPLACE CATALOG".bright_white().bold());
    println!("{}", "═".repeat(70).bright_blue());

    println!(
        "   {} '{}' | {} {} | {} {}",
        "Search:".bright_black(),
        query.search,
        "Category:".bright_black(),
        query.category.to_string().bright_cyan(),
        "Sort:".bright_black(),
        query.sort.to_string().bright_cyan(),
    );

    if page.items.is_empty() {
        println!("\n{}", "No items matched the current view".bright_black().italic());
    } else {
        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic)
            .set_header(vec!["ID", "Name", "Category", "Price"]);

        for item in &page.items {
            table.add_row(vec![
                item.id.to_string(),
                item.name.clone(),
                item.category.label().to_string(),
                item.price_display(),
            ]);
        }

        println!("{table}");
    }

    println!(
        "{} {} {} {} {} {}",
        "📄 Page".bright_black(),
        format!("{}/{}", page.page, page.total_pages.max(1)).bright_green(),
        "|".bright_black(),
        format!("{} shown", page.items.len()).bright_green(),
        "of".bright_black(),
        format!("{} matched", page.total).bright_green(),
    );
}

/// Render a single item with full detail
pub fn display_item_detail(item: &CatalogItem) {
    println!(
        "{} {}",
        format!("{}.", item.id).bright_black(),
        item.name.bright_white()
    );
    println!(
        "   {} {}",
        "Category:".bright_black(),
        item.category.label().bright_cyan()
    );
    println!(
        "   {} {}",
        "Price:".bright_black(),
        item.price_display().bright_yellow()
    );
    println!("   {} {}", "Image:".bright_black(), item.image.bright_blue());
}

/// Render per-category item counts
pub fn display_category_counts(counts: &[CategoryCount], catalog_size: usize) {
    println!("\n{}", "CATEGORY BREAKDOWN".bright_yellow());
    println!("{}", "─".repeat(50).bright_black());

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Category", "Items", "Share"]);

    for entry in counts {
        let share = if catalog_size > 0 {
            100.0 * entry.count as f64 / catalog_size as f64
        } else {
            0.0
        };
        table.add_row(vec![
            entry.category.label().to_string(),
            entry.count.to_string(),
            format!("{:.1}%", share),
        ]);
    }

    println!("{table}");
}
