//! Carts
//!
//! A cart is an ordered set of line items, at most one per [`ProductRef`].
//! It never stores product data: prices and weights are read through a
//! [`ProductResolver`] each time totals are computed.

use jiff::Timestamp;
use rust_decimal::Decimal;
use thiserror::Error;

use crate::{
    products::ProductRef,
    resolver::{ProductNotFound, ProductResolver},
    uuids::TypedUuid,
};

mod items;
mod snapshot;
mod totals;

pub use items::{LineItem, LineItemUuid};
pub use snapshot::{CartSnapshot, LineItemView};
pub use totals::Totals;

use totals::TotalsBuilder;

/// Cart UUID
pub type CartUuid = TypedUuid<Cart>;

/// Errors raised by cart mutations. A failed call leaves the cart unchanged.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CartError {
    /// Quantity was below 1.
    #[error("quantity must be at least 1, got {0}")]
    InvalidQuantity(u32),

    /// The product to add does not exist.
    #[error(transparent)]
    ProductNotFound(#[from] ProductNotFound),

    /// Adding would push the line item past the largest representable quantity.
    #[error("quantity of {0} would overflow")]
    QuantityOverflow(ProductRef),
}

/// Shopping cart
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cart {
    uuid: CartUuid,
    items: Vec<LineItem>,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl Cart {
    /// Create an empty cart.
    pub fn new(uuid: CartUuid, now: Timestamp) -> Self {
        Self {
            uuid,
            items: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Cart identifier
    pub const fn uuid(&self) -> CartUuid {
        self.uuid
    }

    /// When the cart was created
    pub const fn created_at(&self) -> Timestamp {
        self.created_at
    }

    /// When the cart was last changed
    pub const fn updated_at(&self) -> Timestamp {
        self.updated_at
    }

    /// Line items ordered by first-added time, then id.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Number of line items (not units).
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the cart has no line items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The line item for `product`, if present.
    pub fn item(&self, product: ProductRef) -> Option<&LineItem> {
        self.items.iter().find(|item| item.product() == product)
    }

    fn position(&self, product: ProductRef) -> Option<usize> {
        self.items.iter().position(|item| item.product() == product)
    }

    /// Add `quantity` units of `product`, merging with an existing line item.
    ///
    /// Returns the resulting line item.
    ///
    /// # Errors
    ///
    /// - [`CartError::InvalidQuantity`]: `quantity` is zero.
    /// - [`CartError::ProductNotFound`]: `product` does not resolve.
    /// - [`CartError::QuantityOverflow`]: the merged quantity does not fit.
    pub fn add<R: ProductResolver + ?Sized>(
        &mut self,
        resolver: &R,
        product: ProductRef,
        quantity: u32,
        now: Timestamp,
    ) -> Result<LineItem, CartError> {
        if quantity == 0 {
            return Err(CartError::InvalidQuantity(quantity));
        }

        resolver.resolve(product)?;

        let item = if let Some(item) = self
            .items
            .iter_mut()
            .find(|item| item.product() == product)
        {
            item.increment(quantity, now)
                .ok_or(CartError::QuantityOverflow(product))?;

            *item
        } else {
            let item = LineItem::new(product, quantity, now);
            let index = self
                .items
                .partition_point(|existing| existing.order_key() <= item.order_key());

            self.items.insert(index, item);

            item
        };

        self.updated_at = now;

        Ok(item)
    }

    /// Take `quantity` units of `product` out of the cart.
    ///
    /// Removing a product that is not in the cart does nothing. Removing at
    /// least as many units as are held deletes the line item.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::InvalidQuantity`] when `quantity` is zero.
    pub fn remove(
        &mut self,
        product: ProductRef,
        quantity: u32,
        now: Timestamp,
    ) -> Result<(), CartError> {
        if quantity == 0 {
            return Err(CartError::InvalidQuantity(quantity));
        }

        let Some(index) = self.position(product) else {
            return Ok(());
        };

        match self.items.get_mut(index) {
            Some(item) if item.quantity() > quantity => item.decrement(quantity, now),
            _ => {
                self.items.remove(index);
            }
        }

        self.updated_at = now;

        Ok(())
    }

    /// Delete every line item.
    pub fn clear(&mut self, now: Timestamp) {
        if !self.items.is_empty() {
            self.items.clear();
            self.updated_at = now;
        }
    }

    /// Drop the line item for a product that has left the catalog.
    ///
    /// Returns whether anything was removed.
    pub fn purge(&mut self, product: ProductRef, now: Timestamp) -> bool {
        let Some(index) = self.position(product) else {
            return false;
        };

        self.items.remove(index);
        self.updated_at = now;

        true
    }

    /// Price and weight totals, resolving every product afresh.
    ///
    /// Line items whose product does not resolve contribute nothing and are
    /// listed in [`Totals::dangling`].
    pub fn totals<R: ProductResolver + ?Sized>(&self, resolver: &R) -> Totals {
        let mut totals = TotalsBuilder::default();

        for item in &self.items {
            totals.push(item, resolver.resolve(item.product()).ok().as_ref());
        }

        totals.finish()
    }

    /// Σ quantity × unit price, rounded to two places.
    pub fn total_price<R: ProductResolver + ?Sized>(&self, resolver: &R) -> Decimal {
        self.totals(resolver).price
    }

    /// Σ quantity × unit weight, rounded to three places.
    pub fn total_weight<R: ProductResolver + ?Sized>(&self, resolver: &R) -> Decimal {
        self.totals(resolver).weight
    }

    /// Line items with their resolved products, plus totals.
    pub fn snapshot<R: ProductResolver + ?Sized>(&self, resolver: &R) -> CartSnapshot {
        let mut totals = TotalsBuilder::default();

        let items = self
            .items
            .iter()
            .map(|item| {
                let product = resolver.resolve(item.product()).ok();

                totals.push(item, product.as_ref());

                LineItemView {
                    item: *item,
                    product,
                }
            })
            .collect();

        CartSnapshot {
            uuid: self.uuid,
            items,
            totals: totals.finish(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}
