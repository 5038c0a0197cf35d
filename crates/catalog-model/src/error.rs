use thiserror::Error;

use crate::ProductId;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("invalid product id: {0}")]
    InvalidId(String),
    #[error("duplicate product id {0}")]
    DuplicateId(ProductId),
    #[error("next id {next_id} is not greater than existing id {max_id}")]
    StaleNextId {
        next_id: ProductId,
        max_id: ProductId,
    },
    #[error("no product id left after {0}")]
    IdSpaceExhausted(ProductId),
}

pub type Result<T> = std::result::Result<T, ModelError>;
