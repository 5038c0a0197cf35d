use serde::{Deserialize, Serialize};

use crate::ProductId;

/// A catalog entry as held by the store and written to storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub available: bool,
    /// Empty string means no image.
    #[serde(default)]
    pub image_url: String,
}

impl Product {
    pub fn has_image(&self) -> bool {
        !self.image_url.is_empty()
    }

    /// Copy of this product without its id, for editing.
    pub fn to_draft(&self) -> ProductDraft {
        ProductDraft {
            name: self.name.clone(),
            description: self.description.clone(),
            price: self.price,
            available: self.available,
            image_url: self.image_url.clone(),
        }
    }
}

/// Product fields before the store assigns an id.
///
/// Drafts are expected to have passed [`crate::validate_draft`]; the store
/// does not re-check them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDraft {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub available: bool,
    #[serde(default)]
    pub image_url: String,
}

impl ProductDraft {
    pub fn new(name: impl Into<String>, description: impl Into<String>, price: f64) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            price,
            available: true,
            image_url: String::new(),
        }
    }

    #[must_use]
    pub fn with_available(mut self, available: bool) -> Self {
        self.available = available;
        self
    }

    #[must_use]
    pub fn with_image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = image_url.into();
        self
    }

    pub fn into_product(self, id: ProductId) -> Product {
        Product {
            id,
            name: self.name,
            description: self.description,
            price: self.price,
            available: self.available,
            image_url: self.image_url,
        }
    }
}
