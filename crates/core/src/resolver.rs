//! Product resolution
//!
//! Carts store only [`ProductRef`]s; anything that needs a product's price or
//! weight goes through a [`ProductResolver`] supplied by the caller.

use std::sync::Arc;

use thiserror::Error;

use crate::products::{Product, ProductRef};

/// A reference did not resolve to a catalog product.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("product {0} not found")]
pub struct ProductNotFound(pub ProductRef);

/// Looks up the current state of a product by reference.
pub trait ProductResolver {
    /// Fetch the product `product` points at.
    ///
    /// # Errors
    ///
    /// Returns [`ProductNotFound`] when the reference is dangling.
    fn resolve(&self, product: ProductRef) -> Result<Product, ProductNotFound>;
}

impl<R: ProductResolver + ?Sized> ProductResolver for &R {
    fn resolve(&self, product: ProductRef) -> Result<Product, ProductNotFound> {
        (**self).resolve(product)
    }
}

impl<R: ProductResolver + ?Sized> ProductResolver for Arc<R> {
    fn resolve(&self, product: ProductRef) -> Result<Product, ProductNotFound> {
        (**self).resolve(product)
    }
}
