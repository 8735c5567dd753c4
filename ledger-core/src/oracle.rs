//! Price resolution for registered production.

use std::collections::BTreeMap;

/// Source of unit prices for product categories.
///
/// `register_production` consults the oracle whenever the caller does not
/// assert a price explicitly. Implementations range from a fixed trusted
/// catalog to an adapter over a signed external feed; the core only ever
/// sees this trait.
pub trait PriceOracle {
    /// Quoted price per unit for `category`, if one exists.
    fn unit_price(&self, category: &str) -> Option<i128>;
}

/// Fixed per-category price catalog.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PriceCatalog {
    prices: BTreeMap<String, i128>,
}

impl PriceCatalog {
    /// Create an empty catalog. With no quotes, every registration must
    /// assert its price explicitly.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style quote insertion.
    pub fn with_price(mut self, category: impl Into<String>, unit_price: i128) -> Self {
        self.set_price(category, unit_price);
        self
    }

    /// Insert or replace the quote for a category.
    pub fn set_price(&mut self, category: impl Into<String>, unit_price: i128) {
        self.prices.insert(category.into(), unit_price);
    }

    /// Number of quoted categories.
    pub fn len(&self) -> usize {
        self.prices.len()
    }

    /// Returns true if no category is quoted.
    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }
}

impl PriceOracle for PriceCatalog {
    fn unit_price(&self, category: &str) -> Option<i128> {
        self.prices.get(category).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_lookup() {
        let catalog = PriceCatalog::new()
            .with_price("corn", 100)
            .with_price("tomato", 50);

        assert_eq!(catalog.unit_price("corn"), Some(100));
        assert_eq!(catalog.unit_price("tomato"), Some(50));
        assert_eq!(catalog.unit_price("saffron"), None);
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn test_set_price_replaces() {
        let mut catalog = PriceCatalog::new();
        catalog.set_price("corn", 100);
        catalog.set_price("corn", 120);
        assert_eq!(catalog.unit_price("corn"), Some(120));
    }
}
