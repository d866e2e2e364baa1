//! Cart Models

use shop::carts::{CartSnapshot, LineItem};

/// Result of adding to a cart: the merged line item and the cart after the change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddedItem {
    pub item: LineItem,
    pub cart: CartSnapshot,
}
