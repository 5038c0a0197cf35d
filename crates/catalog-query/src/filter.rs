use catalog_model::Product;
use serde::{Deserialize, Serialize};

use crate::SortKey;

/// Price range used before any products exist.
pub const DEFAULT_PRICE_RANGE: PriceRange = PriceRange {
    min: 0.0,
    max: 100_000.0,
};

/// Inclusive price interval.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
}

impl Default for PriceRange {
    fn default() -> Self {
        DEFAULT_PRICE_RANGE
    }
}

impl PriceRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, price: f64) -> bool {
        price >= self.min && price <= self.max
    }

    /// Whether this range excludes part of `bounds`.
    pub fn narrows(&self, bounds: &PriceRange) -> bool {
        self.min > bounds.min || self.max < bounds.max
    }
}

/// Which availability states are shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilityFilter {
    pub available: bool,
    pub unavailable: bool,
}

impl Default for AvailabilityFilter {
    fn default() -> Self {
        Self {
            available: true,
            unavailable: true,
        }
    }
}

impl AvailabilityFilter {
    pub fn admits(&self, available: bool) -> bool {
        if available {
            self.available
        } else {
            self.unavailable
        }
    }

    pub fn is_all(&self) -> bool {
        self.available && self.unavailable
    }
}

/// Search text, price range, availability flags and sort key.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FilterSpec {
    pub search: String,
    pub price_range: PriceRange,
    pub availability: AvailabilityFilter,
    pub sort: SortKey,
}

impl FilterSpec {
    /// Default filter whose price range covers `bounds` ("reset filters").
    pub fn with_bounds(bounds: PriceRange) -> Self {
        Self {
            price_range: bounds,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    #[must_use]
    pub fn sorted_by(mut self, sort: SortKey) -> Self {
        self.sort = sort;
        self
    }

    #[must_use]
    pub fn price_range(mut self, range: PriceRange) -> Self {
        self.price_range = range;
        self
    }

    #[must_use]
    pub fn availability(mut self, availability: AvailabilityFilter) -> Self {
        self.availability = availability;
        self
    }

    /// Snap the price range to freshly recomputed bounds after the product
    /// list changed. Returns true if the range moved.
    ///
    /// For front ends that keep one filter alive across mutations. A
    /// one-shot `list` builds its filter from the current bounds instead.
    pub fn rebase(&mut self, bounds: PriceRange) -> bool {
        if self.price_range == bounds {
            return false;
        }
        self.price_range = bounds;
        true
    }

    /// Whether any part of the filter hides products within `bounds`.
    pub fn is_active(&self, bounds: &PriceRange) -> bool {
        !self.search.is_empty() || self.price_range.narrows(bounds) || !self.availability.is_all()
    }

    /// Filter predicate, independent of sorting.
    pub fn matches(&self, product: &Product) -> bool {
        self.matches_search(product)
            && self.price_range.contains(product.price)
            && self.availability.admits(product.available)
    }

    fn matches_search(&self, product: &Product) -> bool {
        if self.search.is_empty() {
            return true;
        }
        let needle = self.search.to_lowercase();
        product.name.to_lowercase().contains(&needle)
            || product.description.to_lowercase().contains(&needle)
    }
}
