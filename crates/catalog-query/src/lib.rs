//! Derived views over the product catalog.
//!
//! Everything here is a pure function of the product list and a
//! [`FilterSpec`]: no state, no I/O, no failure modes. Re-deriving the output
//! of [`derive`] with the same filter yields the same sequence.

mod derived;
mod filter;
mod sort;

pub use derived::{derive, price_bounds};
pub use filter::{AvailabilityFilter, DEFAULT_PRICE_RANGE, FilterSpec, PriceRange};
pub use sort::{ParseSortKeyError, SortKey};
