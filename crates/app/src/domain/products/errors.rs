//! Products service errors.

use shop::{
    catalog::CatalogError,
    products::{ProductKind, ValidationError},
};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProductsServiceError {
    #[error("product already exists")]
    AlreadyExists,

    #[error("product not found")]
    NotFound,

    #[error(transparent)]
    InvalidData(#[from] ValidationError),

    #[error("expected {expected} data, got {found}")]
    KindMismatch {
        expected: ProductKind,
        found: ProductKind,
    },
}

impl From<CatalogError> for ProductsServiceError {
    fn from(error: CatalogError) -> Self {
        match error {
            CatalogError::Validation(error) => Self::InvalidData(error),
            CatalogError::AlreadyExists(_) => Self::AlreadyExists,
            CatalogError::NotFound(_) => Self::NotFound,
            CatalogError::KindMismatch { expected, found } => Self::KindMismatch { expected, found },
        }
    }
}
