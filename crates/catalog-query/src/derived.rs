use catalog_model::Product;

use crate::{DEFAULT_PRICE_RANGE, FilterSpec, PriceRange};

/// Visible products for `filter`, in the filter's sort order.
///
/// The sort is stable, so products that compare equal keep their relative
/// input order.
pub fn derive(products: &[Product], filter: &FilterSpec) -> Vec<Product> {
    let mut visible: Vec<Product> = products
        .iter()
        .filter(|product| filter.matches(product))
        .cloned()
        .collect();
    visible.sort_by(|a, b| filter.sort.compare(a, b));
    visible
}

/// Min and max price over the full product list.
///
/// Falls back to `[0, 100000]` when the list is empty.
pub fn price_bounds(products: &[Product]) -> PriceRange {
    let mut prices = products.iter().map(|product| product.price);
    let Some(first) = prices.next() else {
        return DEFAULT_PRICE_RANGE;
    };
    prices.fold(PriceRange::new(first, first), |range, price| {
        PriceRange::new(range.min.min(price), range.max.max(price))
    })
}
