//! Remove Item Handler

use std::sync::Arc;

use salvo::{
    oapi::extract::{JsonBody, PathParam},
    prelude::*,
};
use uuid::Uuid;

use crate::{
    carts::{
        errors::into_status_error,
        models::{CartResponse, ItemRequest},
    },
    extensions::*,
    state::State,
};

/// Remove Item Handler
///
/// Removes units of a product. Removing at least the held quantity deletes
/// the line item; removing a product that is not in the cart does nothing.
#[endpoint(
    tags("carts"),
    summary = "Remove Item",
    responses(
        (status_code = StatusCode::OK, description = "Cart after removal"),
        (status_code = StatusCode::NOT_FOUND, description = "Cart not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Invalid kind or quantity"),
    ),
)]
pub(crate) async fn handler(
    cart: PathParam<Uuid>,
    json: JsonBody<ItemRequest>,
    depot: &mut Depot,
) -> Result<Json<CartResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let (product, quantity) = json.into_inner().into_parts()?;

    let cart = state
        .app
        .carts
        .remove_item(cart.into_inner().into(), product, quantity)
        .await
        .map_err(into_status_error)?;

    Ok(Json(cart.into()))
}
