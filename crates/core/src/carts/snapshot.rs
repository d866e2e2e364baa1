//! Cart snapshots

use jiff::Timestamp;

use crate::{
    carts::{CartUuid, LineItem, Totals},
    products::Product,
};

/// A line item together with the product it resolved to, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineItemView {
    /// The stored line item
    pub item: LineItem,

    /// The product as resolved when the snapshot was taken; `None` when dangling
    pub product: Option<Product>,
}

/// Read-only view of a cart: its line items plus computed totals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartSnapshot {
    /// Cart identifier
    pub uuid: CartUuid,

    /// Line items in cart order
    pub items: Vec<LineItemView>,

    /// Totals over `items`
    pub totals: Totals,

    /// When the cart was created
    pub created_at: Timestamp,

    /// When the cart was last changed
    pub updated_at: Timestamp,
}
