use rust_decimal::Decimal;
use std::str::FromStr;

use crate::catalog::{CategoryFilter, SortOrder};

/// Parse a price bound, accepting an optional leading '$'.
///
/// Bounds outside the catalog's own price range are legal filter input; they
/// just match nothing on that side.
pub fn parse_price(s: &str) -> Result<Decimal, String> {
    let raw = s.trim().trim_start_matches('$');
    Decimal::from_str(raw).map_err(|_| format!("'{}' is not a valid price", s))
}

/// Parse a category filter ("all" or one of the six category labels)
pub fn parse_category_filter(s: &str) -> Result<CategoryFilter, String> {
    CategoryFilter::from_str(s).map_err(|e| e.to_string())
}

/// Parse a sort order; unrecognized text degrades to unsorted rather than
/// failing the command line
pub fn parse_sort_order(s: &str) -> Result<SortOrder, String> {
    Ok(SortOrder::parse_lenient(s))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_parse_price_accepts_dollar_sign() {
        assert_eq!(parse_price("$49.99").unwrap(), dec!(49.99));
        assert_eq!(parse_price("29.99").unwrap(), dec!(29.99));
    }

    #[test]
    fn test_parse_price_accepts_bounds_outside_catalog_range() {
        assert_eq!(parse_price("10").unwrap(), dec!(10));
        assert_eq!(parse_price("999999.99").unwrap(), dec!(999999.99));
    }

    #[test]
    fn test_parse_price_rejects_non_numeric() {
        assert!(parse_price("free").is_err());
        assert!(parse_price("").is_err());
    }

    #[test]
    fn test_parse_sort_order_never_fails() {
        assert_eq!(parse_sort_order("price-ascending").unwrap(), SortOrder::PriceAscending);
        assert_eq!(parse_sort_order("whatever").unwrap(), SortOrder::Unsorted);
    }
}
