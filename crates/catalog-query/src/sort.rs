use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use catalog_model::Product;
use icu_collator::options::CollatorOptions;
use icu_collator::{Collator, CollatorBorrowed};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Ordering applied after filtering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    /// Ascending by id, i.e. creation order.
    #[default]
    Default,
    PriceAsc,
    PriceDesc,
    NameAsc,
}

impl SortKey {
    pub const fn all() -> &'static [SortKey] {
        &[Self::Default, Self::PriceAsc, Self::PriceDesc, Self::NameAsc]
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::PriceAsc => "price_asc",
            Self::PriceDesc => "price_desc",
            Self::NameAsc => "name_asc",
        }
    }

    pub fn compare(&self, a: &Product, b: &Product) -> Ordering {
        match self {
            Self::Default => a.id.cmp(&b.id),
            Self::PriceAsc => a.price.total_cmp(&b.price),
            Self::PriceDesc => b.price.total_cmp(&a.price),
            Self::NameAsc => compare_names(&a.name, &b.name),
        }
    }
}

static NAME_COLLATOR: LazyLock<Option<CollatorBorrowed<'static>>> = LazyLock::new(|| {
    Collator::try_new(Default::default(), CollatorOptions::default())
        .inspect_err(|e| {
            tracing::warn!(error = %e, "collation data unavailable, sorting names by case-folded text");
        })
        .ok()
});

/// Root-locale collation, so accented letters sit next to their base
/// letter in every script. Identical collation keys fall back to the raw
/// string order.
fn compare_names(a: &str, b: &str) -> Ordering {
    let collated = match NAME_COLLATOR.as_ref() {
        Some(collator) => collator.compare(a, b),
        None => a
            .chars()
            .flat_map(char::to_lowercase)
            .cmp(b.chars().flat_map(char::to_lowercase)),
    };
    collated.then_with(|| a.cmp(b))
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown sort key '{0}' (expected default, price_asc, price_desc or name_asc)")]
pub struct ParseSortKeyError(pub String);

impl FromStr for SortKey {
    type Err = ParseSortKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        Self::all()
            .iter()
            .copied()
            .find(|key| key.as_str() == normalized)
            .ok_or_else(|| ParseSortKeyError(s.to_string()))
    }
}
