//! Delete Cart Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use crate::{carts::errors::into_status_error, extensions::*, state::State};

/// Delete Cart Handler
///
/// Deletes the cart and all of its line items.
#[endpoint(
    tags("carts"),
    summary = "Delete Cart",
    responses(
        (status_code = StatusCode::OK, description = "Cart deleted"),
        (status_code = StatusCode::NOT_FOUND, description = "Cart not found"),
    ),
)]
pub(crate) async fn handler(
    cart: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<StatusCode, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    state
        .app
        .carts
        .delete_cart(cart.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(StatusCode::OK)
}
