//! Carts service errors.

use shop::{carts::CartError, products::ProductRef};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CartsServiceError {
    #[error("cart already exists")]
    AlreadyExists,

    #[error("cart not found")]
    NotFound,

    #[error("quantity must be at least 1, got {0}")]
    InvalidQuantity(u32),

    #[error("product {0} not found")]
    ProductNotFound(ProductRef),

    #[error("quantity of {0} would overflow")]
    QuantityOverflow(ProductRef),
}

impl From<CartError> for CartsServiceError {
    fn from(error: CartError) -> Self {
        match error {
            CartError::InvalidQuantity(quantity) => Self::InvalidQuantity(quantity),
            CartError::ProductNotFound(missing) => Self::ProductNotFound(missing.0),
            CartError::QuantityOverflow(product) => Self::QuantityOverflow(product),
        }
    }
}
