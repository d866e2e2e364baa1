//! Cart request and response models

use salvo::{oapi::ToSchema, prelude::StatusError};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use shop::{
    carts::{CartSnapshot, LineItemView},
    products::{Product, ProductKind, ProductRef},
};
use shop_app::domain::carts::models::AddedItem;

use crate::extensions::*;

/// Names a product and how many units to add or remove.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ItemRequest {
    /// `book`, `musicalbum` or `softwarelicense` (any case); also accepted as `model`
    #[serde(alias = "model")]
    pub kind: String,

    /// Product UUID
    pub id: Uuid,

    /// Units to add or remove; defaults to 1
    #[serde(default)]
    pub quantity: Option<i64>,
}

impl ItemRequest {
    pub(crate) fn into_parts(self) -> Result<(ProductRef, u32), StatusError> {
        let kind = self.kind.parse::<ProductKind>().or_400("Invalid product kind")?;
        let quantity = u32::try_from(self.quantity.unwrap_or(1)).or_400("Invalid quantity")?;

        Ok((ProductRef::new(kind, self.id.into()), quantity))
    }
}

/// A product reference
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductRefResponse {
    pub kind: String,
    pub id: Uuid,
}

impl From<ProductRef> for ProductRefResponse {
    fn from(product: ProductRef) -> Self {
        ProductRefResponse {
            kind: product.kind.to_string(),
            id: product.id.into(),
        }
    }
}

/// A line item with its product resolved at read time
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct LineItemResponse {
    pub uuid: Uuid,
    pub product: ProductRefResponse,
    pub quantity: u32,

    /// `None` when the product no longer exists
    pub display_name: Option<String>,
    pub unit_price: Option<String>,
    pub unit_weight: Option<String>,

    /// When the product was last added
    pub added_at: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<LineItemView> for LineItemResponse {
    fn from(view: LineItemView) -> Self {
        let LineItemView { item, product } = view;

        LineItemResponse {
            uuid: item.uuid().into(),
            product: item.product().into(),
            quantity: item.quantity(),
            display_name: product.as_ref().map(Product::display_name),
            unit_price: product.as_ref().map(|product| product.price().to_string()),
            unit_weight: product
                .as_ref()
                .and_then(Product::weight)
                .as_ref()
                .map(ToString::to_string),
            added_at: item.added_at().to_string(),
            created_at: item.created_at().to_string(),
            updated_at: item.updated_at().to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CartResponse {
    /// The unique identifier of the cart
    pub uuid: Uuid,

    /// Line items, oldest first
    pub items: Vec<LineItemResponse>,

    /// Sum of quantity × unit price, two decimal places
    pub total_price: String,

    /// Sum of quantity × unit weight, three decimal places
    pub total_weight: String,

    /// Products referenced by line items that no longer exist
    pub dangling: Vec<ProductRefResponse>,

    pub created_at: String,
    pub updated_at: String,
}

impl From<CartSnapshot> for CartResponse {
    fn from(snapshot: CartSnapshot) -> Self {
        CartResponse {
            uuid: snapshot.uuid.into(),
            items: snapshot.items.into_iter().map(Into::into).collect(),
            total_price: snapshot.totals.price.to_string(),
            total_weight: snapshot.totals.weight.to_string(),
            dangling: snapshot.totals.dangling.into_iter().map(Into::into).collect(),
            created_at: snapshot.created_at.to_string(),
            updated_at: snapshot.updated_at.to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CartsResponse {
    /// Every cart, oldest first
    pub carts: Vec<CartResponse>,
}

/// The line item an add produced, plus the whole cart afterwards.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct AddItemResponse {
    pub item: LineItemResponse,
    pub cart: CartResponse,
}

impl From<AddedItem> for AddItemResponse {
    fn from(added: AddedItem) -> Self {
        let view = added
            .cart
            .items
            .iter()
            .find(|view| view.item.uuid() == added.item.uuid())
            .cloned()
            .unwrap_or(LineItemView {
                item: added.item,
                product: None,
            });

        AddItemResponse {
            item: view.into(),
            cart: added.cart.into(),
        }
    }
}
