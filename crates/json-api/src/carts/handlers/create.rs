//! Create Cart Handler

use std::sync::Arc;

use salvo::{
    http::header::LOCATION,
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use shop::carts::CartUuid;

use crate::{
    carts::{errors::into_status_error, models::CartResponse},
    extensions::*,
    state::State,
};

/// Create Cart Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CreateCartRequest {
    /// Cart UUID; generated when omitted
    #[serde(default)]
    pub uuid: Option<Uuid>,
}

/// Create Cart Handler
#[endpoint(
    tags("carts"),
    summary = "Create Cart",
    responses(
        (status_code = StatusCode::CREATED, description = "Cart created"),
        (status_code = StatusCode::CONFLICT, description = "Cart already exists"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CreateCartRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<CartResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let uuid = json
        .into_inner()
        .uuid
        .map_or_else(CartUuid::new, CartUuid::from);

    let cart = state
        .app
        .carts
        .create_cart(uuid)
        .await
        .map_err(into_status_error)?;

    res.add_header(LOCATION, format!("/carts/{uuid}"), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    Ok(Json(cart.into()))
}
