//! Get Cart Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use crate::{
    carts::{errors::into_status_error, models::CartResponse},
    extensions::*,
    state::State,
};

/// Get Cart Handler
///
/// Returns the cart's line items and totals, priced at the current catalog.
#[endpoint(
    tags("carts"),
    summary = "Get Cart",
    responses(
        (status_code = StatusCode::OK, description = "Cart snapshot"),
        (status_code = StatusCode::NOT_FOUND, description = "Cart not found"),
    ),
)]
pub(crate) async fn handler(
    cart: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<CartResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let cart = state
        .app
        .carts
        .get_cart(cart.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(cart.into()))
}
