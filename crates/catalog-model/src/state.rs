use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::{ModelError, Product, ProductId, Result};

/// Full catalog contents, persisted as a single JSON object.
///
/// `products` keeps insertion order. `next_id` is strictly greater than any
/// id ever assigned, so deleted ids are never handed out again.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogState {
    pub products: Vec<Product>,
    pub next_id: ProductId,
}

impl Default for CatalogState {
    fn default() -> Self {
        Self {
            products: Vec::new(),
            next_id: ProductId::new(1),
        }
    }
}

impl CatalogState {
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|product| product.id == id)
    }

    pub fn position(&self, id: ProductId) -> Option<usize> {
        self.products.iter().position(|product| product.id == id)
    }

    pub fn max_id(&self) -> Option<ProductId> {
        self.products.iter().map(|product| product.id).max()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Check id uniqueness, that the counter is ahead of every id, and that
    /// the counter can still advance after handing out `next_id`.
    pub fn check_invariants(&self) -> Result<()> {
        let mut seen = BTreeSet::new();
        for product in &self.products {
            if !seen.insert(product.id) {
                return Err(ModelError::DuplicateId(product.id));
            }
        }
        if let Some(max_id) = self.max_id()
            && self.next_id <= max_id
        {
            return Err(ModelError::StaleNextId {
                next_id: self.next_id,
                max_id,
            });
        }
        if self.next_id.next().is_none() {
            return Err(ModelError::IdSpaceExhausted(self.next_id));
        }
        Ok(())
    }

    /// Raise `next_id` past the largest id. Returns true if it moved.
    pub fn repair_next_id(&mut self) -> Result<bool> {
        match self.max_id() {
            Some(max_id) if self.next_id <= max_id => {
                self.next_id = max_id
                    .next()
                    .ok_or(ModelError::IdSpaceExhausted(max_id))?;
                Ok(true)
            }
            _ => Ok(false),
        }
    }
}
