//! Cart line items

use jiff::Timestamp;

use crate::{products::ProductRef, uuids::TypedUuid};

/// Line item UUID
pub type LineItemUuid = TypedUuid<LineItem>;

/// A quantity of one product held by a cart.
///
/// The quantity is always at least 1; the owning [`super::Cart`] deletes the
/// item instead of letting it reach zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineItem {
    uuid: LineItemUuid,
    product: ProductRef,
    quantity: u32,
    added_at: Timestamp,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl LineItem {
    pub(super) fn new(product: ProductRef, quantity: u32, now: Timestamp) -> Self {
        Self {
            uuid: LineItemUuid::new(),
            product,
            quantity,
            added_at: now,
            created_at: now,
            updated_at: now,
        }
    }

    /// Line item identifier
    pub const fn uuid(&self) -> LineItemUuid {
        self.uuid
    }

    /// The referenced product
    pub const fn product(&self) -> ProductRef {
        self.product
    }

    /// Units of the product in the cart
    pub const fn quantity(&self) -> u32 {
        self.quantity
    }

    /// When the product was most recently added
    pub const fn added_at(&self) -> Timestamp {
        self.added_at
    }

    /// When the product was first added
    pub const fn created_at(&self) -> Timestamp {
        self.created_at
    }

    /// When the item was last changed
    pub const fn updated_at(&self) -> Timestamp {
        self.updated_at
    }

    /// Position key: first-added time, then id.
    pub(super) const fn order_key(&self) -> (Timestamp, LineItemUuid) {
        (self.created_at, self.uuid)
    }

    /// Add `quantity` units, returning `None` when the total would overflow.
    pub(super) fn increment(&mut self, quantity: u32, now: Timestamp) -> Option<()> {
        self.quantity = self.quantity.checked_add(quantity)?;
        self.added_at = now;
        self.updated_at = now;

        Some(())
    }

    /// Take `quantity` units away. The caller must delete the item instead
    /// when `quantity >= self.quantity`.
    pub(super) fn decrement(&mut self, quantity: u32, now: Timestamp) {
        debug_assert!(quantity < self.quantity, "line item quantity must stay positive");

        self.quantity -= quantity;
        self.updated_at = now;
    }
}
