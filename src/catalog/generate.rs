//! Synthetic catalog generation
//!
//! Each view session gets a fresh 200-item catalog. Generation takes the
//! random source as an argument so callers can pass a seeded `StdRng` for
//! reproducible output (the `--seed` flag and all tests rely on this).

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::CategoryCount;

use super::item::{CatalogItem, Category};

/// Number of items in every generated catalog
pub const CATALOG_SIZE: usize = 200;

/// Lowest price, in whole cents ($29.99)
pub const MIN_PRICE_CENTS: i64 = 2_999;

/// Exclusive upper price bound, in whole cents ($999999.99)
pub const MAX_PRICE_CENTS: i64 = 99_999_999;

/// An immutable, ordered catalog of generated marketplace items
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    items: Vec<CatalogItem>,
}

impl Catalog {
    /// Generate a full catalog from the given random source.
    ///
    /// Ids are assigned 1..=200 in order; category and price are drawn
    /// uniformly. Prices are whole cents in [29.99, 999999.99), stored at
    /// scale 2 so they always render with two fraction digits.
    pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let items = (1..=CATALOG_SIZE as u32)
            .map(|id| {
                let category = Category::ALL[rng.random_range(0..Category::ALL.len())];
                let cents = rng.random_range(MIN_PRICE_CENTS..MAX_PRICE_CENTS);
                CatalogItem {
                    id,
                    name: format!("{} #{}", category.label(), id),
                    category,
                    price: Decimal::new(cents, 2),
                    image: image_url(id),
                }
            })
            .collect();
        Self { items }
    }

    /// Generate a reproducible catalog from a seed
    pub fn seeded(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        Self::generate(&mut rng)
    }

    /// Generate a catalog from the thread-local random source
    pub fn random() -> Self {
        Self::generate(&mut rand::rng())
    }

    /// Build a catalog from existing items (e.g. a deserialized export)
    pub fn from_items(items: Vec<CatalogItem>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Look up a single item by id. Ids are sequential from 1, so this is a
    /// direct index, with a scan fallback for catalogs built from arbitrary
    /// item sets.
    pub fn get(&self, id: u32) -> Option<&CatalogItem> {
        match self.items.get(id.checked_sub(1)? as usize) {
            Some(item) if item.id == id => Some(item),
            _ => self.items.iter().find(|item| item.id == id),
        }
    }

    /// Item counts per category, in display order
    pub fn category_counts(&self) -> Vec<CategoryCount> {
        Category::ALL
            .into_iter()
            .map(|category| CategoryCount {
                category,
                count: self.items.iter().filter(|i| i.category == category).count(),
            })
            .collect()
    }
}

/// Placeholder artwork keyed by item id so the grid stays visually stable
fn image_url(id: u32) -> String {
    format!("https://picsum.photos/seed/marketgrid-{}/320/200", id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_has_exactly_200_items() {
        let catalog = Catalog::seeded(1);
        assert_eq!(catalog.len(), CATALOG_SIZE);
    }

    #[test]
    fn test_ids_unique_and_sequential() {
        let catalog = Catalog::seeded(2);
        let ids: Vec<u32> = catalog.items().iter().map(|i| i.id).collect();
        assert_eq!(ids, (1..=CATALOG_SIZE as u32).collect::<Vec<_>>());

        let unique: HashSet<u32> = ids.into_iter().collect();
        assert_eq!(unique.len(), CATALOG_SIZE);
    }

    #[test]
    fn test_prices_in_range_at_scale_two() {
        let catalog = Catalog::seeded(3);
        let min = dec!(29.99);
        let max = dec!(999999.99);
        for item in catalog.items() {
            assert!(item.price >= min, "price {} below minimum", item.price);
            assert!(item.price < max, "price {} at or above maximum", item.price);
            assert_eq!(item.price.scale(), 2);
        }
    }

    #[test]
    fn test_names_derive_from_category_and_id() {
        let catalog = Catalog::seeded(4);
        for item in catalog.items() {
            assert_eq!(item.name, format!("{} #{}", item.category.label(), item.id));
        }
    }

    #[test]
    fn test_every_category_is_listed() {
        let catalog = Catalog::seeded(5);
        for item in catalog.items() {
            assert!(Category::ALL.contains(&item.category));
        }
    }

    #[test]
    fn test_seeded_generation_is_deterministic() {
        assert_eq!(Catalog::seeded(42), Catalog::seeded(42));
        assert_ne!(Catalog::seeded(42), Catalog::seeded(43));
    }

    #[test]
    fn test_get_by_id() {
        let catalog = Catalog::seeded(6);
        let item = catalog.get(7).unwrap();
        assert_eq!(item.id, 7);
        assert!(catalog.get(0).is_none());
        assert!(catalog.get(201).is_none());
    }

    #[test]
    fn test_category_counts_cover_catalog() {
        let catalog = Catalog::seeded(7);
        let counts = catalog.category_counts();
        assert_eq!(counts.len(), Category::ALL.len());
        let total: usize = counts.iter().map(|c| c.count).sum();
        assert_eq!(total, CATALOG_SIZE);
    }
}
