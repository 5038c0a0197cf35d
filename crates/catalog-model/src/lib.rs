//! Data model for the product catalog.
//!
//! Holds the persisted shapes (`Product`, `CatalogState`), the id newtype,
//! the fixed seed catalog and the form-level validation that turns raw user
//! input into a `ProductDraft`.

pub mod error;
pub mod ids;
pub mod product;
pub mod seed;
pub mod state;
pub mod validate;

pub use error::{ModelError, Result};
pub use ids::ProductId;
pub use product::{Product, ProductDraft};
pub use seed::{SEED_NEXT_ID, seed_state};
pub use state::CatalogState;
pub use validate::{Field, FieldError, ProductForm, ValidationErrors, validate_draft};
