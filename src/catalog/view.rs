//! View derivation: filter, sort, paginate
//!
//! A view is a derived, ordered subset of one catalog. Deriving a view never
//! mutates the catalog, and running the same query twice over the same
//! catalog yields an identical sequence.

use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::errors::CatalogError;

use super::generate::Catalog;
use super::item::{CatalogItem, Category};

/// Default page size for paged views
pub const DEFAULT_PAGE_SIZE: usize = 24;

/// Largest page size a caller may request
pub const MAX_PAGE_SIZE: usize = 200;

/// Category selection: everything, or a single category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn matches(&self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(only) => *only == category,
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::All => f.write_str("all"),
            CategoryFilter::Only(category) => f.write_str(category.label()),
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            Ok(CategoryFilter::All)
        } else {
            s.parse::<Category>().map(CategoryFilter::Only)
        }
    }
}

/// Ordering applied to a derived view.
///
/// `Unsorted` keeps the catalog's generation order. Unrecognized sort text
/// falls back to it (see [`SortOrder::parse_lenient`]) instead of being
/// rejected, matching the storefront's permissive handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    PriceAscending,
    PriceDescending,
    #[default]
    Unsorted,
}

impl SortOrder {
    /// Parse sort text, mapping anything unrecognized to `Unsorted`.
    ///
    /// The fallback is logged: a typo'd sort silently showing unsorted
    /// results is a support headache otherwise.
    pub fn parse_lenient(s: &str) -> SortOrder {
        match s.trim().to_ascii_lowercase().as_str() {
            "price-ascending" => SortOrder::PriceAscending,
            "price-descending" => SortOrder::PriceDescending,
            other => {
                if !other.is_empty() {
                    tracing::warn!(sort = other, "unrecognized sort order, leaving view unsorted");
                }
                SortOrder::Unsorted
            }
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::PriceAscending => "price-ascending",
            SortOrder::PriceDescending => "price-descending",
            SortOrder::Unsorted => "unsorted",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One view request: search text, category filter, sort order, and the
/// optional price bounds. Every combination of fields is legal.
#[derive(Debug, Clone, Default)]
pub struct ViewQuery {
    /// Case-insensitive substring match on item name; empty matches all
    pub search: String,
    pub category: CategoryFilter,
    pub sort: SortOrder,
    /// Inclusive lower price bound
    pub min_price: Option<Decimal>,
    /// Inclusive upper price bound
    pub max_price: Option<Decimal>,
}

impl ViewQuery {
    fn matches(&self, item: &CatalogItem, needle: &str) -> bool {
        if !needle.is_empty() && !item.name.to_lowercase().contains(needle) {
            return false;
        }
        if !self.category.matches(item.category) {
            return false;
        }
        if let Some(min) = self.min_price {
            if item.price < min {
                return false;
            }
        }
        if let Some(max) = self.max_price {
            if item.price > max {
                return false;
            }
        }
        true
    }
}

/// Derive a filtered, sorted view over `catalog`.
///
/// Filtering keeps items whose name contains the search text
/// (case-insensitive) and whose category and price pass the query's filters.
/// Sorting is stable, so price ties keep their catalog order. The catalog
/// itself is untouched.
pub fn apply_view<'a>(catalog: &'a Catalog, query: &ViewQuery) -> Vec<&'a CatalogItem> {
    let needle = query.search.to_lowercase();
    let mut items: Vec<&CatalogItem> = catalog
        .items()
        .iter()
        .filter(|item| query.matches(item, &needle))
        .collect();

    match query.sort {
        SortOrder::PriceAscending => items.sort_by(|a, b| a.price.cmp(&b.price)),
        SortOrder::PriceDescending => items.sort_by(|a, b| b.price.cmp(&a.price)),
        SortOrder::Unsorted => {}
    }

    items
}

/// One page of a derived view, with totals for the pager
#[derive(Debug, Clone)]
pub struct ViewPage<'a> {
    pub items: Vec<&'a CatalogItem>,
    /// Items matched by the query before pagination
    pub total: usize,
    /// 1-based page number actually served
    pub page: usize,
    pub page_size: usize,
    pub total_pages: usize,
}

/// Derive a view and slice out one page of it.
///
/// `page` is 1-based and clamped to at least 1; `page_size` is clamped to
/// [1, MAX_PAGE_SIZE]. A page past the end yields an empty item list with
/// the totals intact.
pub fn paged_view<'a>(
    catalog: &'a Catalog,
    query: &ViewQuery,
    page: usize,
    page_size: usize,
) -> ViewPage<'a> {
    let page = page.max(1);
    let page_size = page_size.clamp(1, MAX_PAGE_SIZE);

    let matched = apply_view(catalog, query);
    let total = matched.len();
    let total_pages = total.div_ceil(page_size);

    let start = (page - 1).saturating_mul(page_size);
    let items = matched
        .into_iter()
        .skip(start)
        .take(page_size)
        .collect();

    ViewPage {
        items,
        total,
        page,
        page_size,
        total_pages,
    }
}

/// Display view-model handed to renderers: everything is pre-formatted
/// strings, so the grid layer needs no knowledge of the data model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemView {
    pub name: String,
    pub category: String,
    pub price: String,
    pub image: String,
}

impl From<&CatalogItem> for ItemView {
    fn from(item: &CatalogItem) -> Self {
        Self {
            name: item.name.clone(),
            category: item.category.label().to_string(),
            price: item.price_display(),
            image: item.image.clone(),
        }
    }
}
