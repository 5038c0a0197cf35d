//! Form-level validation for product input.
//!
//! Raw form values come in as strings. Every field is checked and all
//! problems are reported together, so a form can highlight each field at
//! once. Only a fully valid form produces a [`ProductDraft`]; invalid input
//! never reaches the store.

use std::fmt;

use thiserror::Error;
use url::Url;

use crate::{Product, ProductDraft};

/// Form fields that can carry a validation error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Description,
    Price,
    ImageUrl,
}

impl Field {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Description => "description",
            Self::Price => "price",
            Self::ImageUrl => "imageUrl",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: Field,
    pub message: &'static str,
}

/// All field errors found in one form submission.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid product: {}", summarize(.errors))]
pub struct ValidationErrors {
    pub errors: Vec<FieldError>,
}

impl ValidationErrors {
    pub fn for_field(&self, field: Field) -> Option<&FieldError> {
        self.errors.iter().find(|error| error.field == field)
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }
}

fn summarize(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|error| format!("{}: {}", error.field, error.message))
        .collect::<Vec<_>>()
        .join("; ")
}

/// Raw add/edit form contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductForm {
    pub name: String,
    pub description: String,
    pub price: String,
    pub image_url: String,
    pub available: bool,
}

impl Default for ProductForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            price: String::new(),
            image_url: String::new(),
            available: true,
        }
    }
}

impl ProductForm {
    /// Pre-fill the form from an existing product (edit mode).
    pub fn from_product(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            description: product.description.clone(),
            price: product.price.to_string(),
            image_url: product.image_url.clone(),
            available: product.available,
        }
    }
}

/// Validate a form and build the draft it describes.
pub fn validate_draft(form: &ProductForm) -> Result<ProductDraft, ValidationErrors> {
    let mut errors = Vec::new();

    let name = form.name.trim();
    if name.is_empty() {
        errors.push(FieldError {
            field: Field::Name,
            message: "product name is required",
        });
    }

    let description = form.description.trim();
    if description.is_empty() {
        errors.push(FieldError {
            field: Field::Description,
            message: "product description is required",
        });
    }

    let price = match parse_price(&form.price) {
        Ok(price) => price,
        Err(message) => {
            errors.push(FieldError {
                field: Field::Price,
                message,
            });
            0.0
        }
    };

    let image_url = form.image_url.trim();
    if !image_url.is_empty() && Url::parse(image_url).is_err() {
        errors.push(FieldError {
            field: Field::ImageUrl,
            message: "enter a valid image URL",
        });
    }

    if !errors.is_empty() {
        return Err(ValidationErrors { errors });
    }

    Ok(ProductDraft {
        name: name.to_string(),
        description: description.to_string(),
        price,
        available: form.available,
        image_url: image_url.to_string(),
    })
}

fn parse_price(raw: &str) -> Result<f64, &'static str> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err("product price is required");
    }
    match raw.parse::<f64>() {
        Ok(price) if price.is_finite() && price > 0.0 => Ok(price),
        _ => Err("price must be a positive number"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ProductId;

    fn form(name: &str, description: &str, price: &str, image_url: &str) -> ProductForm {
        ProductForm {
            name: name.to_string(),
            description: description.to_string(),
            price: price.to_string(),
            image_url: image_url.to_string(),
            available: true,
        }
    }

    #[test]
    fn valid_form_produces_trimmed_draft() {
        let draft = validate_draft(&form(
            "  Смартфон Mini ",
            "Компактный смартфон",
            " 12999.5 ",
            "https://example.com/mini.webp",
        ))
        .expect("valid form");

        assert_eq!(draft.name, "Смартфон Mini");
        assert_eq!(draft.price, 12999.5);
        assert_eq!(draft.image_url, "https://example.com/mini.webp");
        assert!(draft.available);
    }

    #[test]
    fn collects_every_field_error() {
        let errors = validate_draft(&form(" ", "", "", "not a url")).unwrap_err();
        assert_eq!(errors.len(), 4);
        assert!(errors.for_field(Field::Name).is_some());
        assert!(errors.for_field(Field::Description).is_some());
        assert_eq!(
            errors.for_field(Field::Price).map(|e| e.message),
            Some("product price is required")
        );
        assert!(errors.for_field(Field::ImageUrl).is_some());
    }

    #[test]
    fn rejects_non_positive_and_non_numeric_prices() {
        for price in ["0", "-5", "abc", "NaN", "inf"] {
            let errors = validate_draft(&form("A", "B", price, "")).unwrap_err();
            assert_eq!(
                errors.for_field(Field::Price).map(|e| e.message),
                Some("price must be a positive number"),
                "price {price:?}"
            );
        }
    }

    #[test]
    fn relative_image_paths_are_not_urls() {
        let errors = validate_draft(&form("A", "B", "1", "/img/a.png")).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors.for_field(Field::ImageUrl).is_some());
    }

    #[test]
    fn error_message_lists_fields() {
        let errors = validate_draft(&form("", "B", "1", "")).unwrap_err();
        assert_eq!(
            errors.to_string(),
            "invalid product: name: product name is required"
        );
    }

    #[test]
    fn edit_form_prefills_from_product() {
        let product = ProductDraft::new("A", "B", 29999.0).into_product(ProductId::new(1));
        let form = ProductForm::from_product(&product);
        assert_eq!(form.price, "29999");
        assert_eq!(validate_draft(&form).unwrap(), product.to_draft());
    }
}
