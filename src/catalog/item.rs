//! Catalog item and category definitions
//!
//! A `CatalogItem` is one listing in the simulated marketplace. Items are
//! strongly typed: the category is an enum rather than a free-form string so
//! an item can never carry an unlisted label.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CatalogError;

/// The fixed set of marketplace categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "AI Tools")]
    AiTools,
    #[serde(rename = "Automation")]
    Automation,
    #[serde(rename = "Freelancer Kits")]
    FreelancerKits,
    #[serde(rename = "Trading Bots")]
    TradingBots,
    #[serde(rename = "Premium Plugins")]
    PremiumPlugins,
    #[serde(rename = "Education Packs")]
    EducationPacks,
}

impl Category {
    /// All categories, in display order
    pub const ALL: [Category; 6] = [
        Category::AiTools,
        Category::Automation,
        Category::FreelancerKits,
        Category::TradingBots,
        Category::PremiumPlugins,
        Category::EducationPacks,
    ];

    /// Human-readable label, as shown in the storefront grid
    pub fn label(&self) -> &'static str {
        match self {
            Category::AiTools => "AI Tools",
            Category::Automation => "Automation",
            Category::FreelancerKits => "Freelancer Kits",
            Category::TradingBots => "Trading Bots",
            Category::PremiumPlugins => "Premium Plugins",
            Category::EducationPacks => "Education Packs",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Category::ALL
            .into_iter()
            .find(|c| c.label().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| CatalogError::UnknownCategory(trimmed.to_string()))
    }
}

/// One marketplace listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogItem {
    /// Sequential id, unique within one generated catalog (1-based)
    pub id: u32,
    /// Display name, derived from the category label and id
    pub name: String,
    pub category: Category,
    /// Price in USD, always at two decimal places
    pub price: Decimal,
    /// Opaque image URL for the grid renderer; never interpreted
    pub image: String,
}

impl CatalogItem {
    /// Price formatted for display, e.g. "$49.99"
    pub fn price_display(&self) -> String {
        format!("${:.2}", self.price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_category_labels_roundtrip() {
        for category in Category::ALL {
            let parsed: Category = category.label().parse().unwrap();
            assert_eq!(parsed, category);
        }
    }

    #[test]
    fn test_category_parse_case_insensitive() {
        assert_eq!("ai tools".parse::<Category>().unwrap(), Category::AiTools);
        assert_eq!(
            "  TRADING BOTS ".parse::<Category>().unwrap(),
            Category::TradingBots
        );
    }

    #[test]
    fn test_category_parse_unknown() {
        let err = "Gardening".parse::<Category>().unwrap_err();
        assert!(matches!(err, CatalogError::UnknownCategory(ref s) if s == "Gardening"));
    }

    #[test]
    fn test_price_display_two_decimals() {
        let item = CatalogItem {
            id: 5,
            name: "AI Tools #5".to_string(),
            category: Category::AiTools,
            price: dec!(49.9),
            image: String::new(),
        };
        assert_eq!(item.price_display(), "$49.90");
    }

    #[test]
    fn test_category_serializes_as_label() {
        let json = serde_json::to_string(&Category::FreelancerKits).unwrap();
        assert_eq!(json, "\"Freelancer Kits\"");
    }
}
