//! Add Item Handler

use std::sync::Arc;

use salvo::{
    oapi::extract::{JsonBody, PathParam},
    prelude::*,
};
use uuid::Uuid;

use crate::{
    carts::{
        errors::into_status_error,
        models::{AddItemResponse, ItemRequest},
    },
    extensions::*,
    state::State,
};

/// Add Item Handler
///
/// Adds units of a product to the cart, merging with an existing line item.
#[endpoint(
    tags("carts"),
    summary = "Add Item",
    responses(
        (status_code = StatusCode::OK, description = "Item added"),
        (status_code = StatusCode::NOT_FOUND, description = "Cart or product not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Invalid kind or quantity"),
    ),
)]
pub(crate) async fn handler(
    cart: PathParam<Uuid>,
    json: JsonBody<ItemRequest>,
    depot: &mut Depot,
) -> Result<Json<AddItemResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let (product, quantity) = json.into_inner().into_parts()?;

    let added = state
        .app
        .carts
        .add_item(cart.into_inner().into(), product, quantity)
        .await
        .map_err(into_status_error)?;

    Ok(Json(added.into()))
}
