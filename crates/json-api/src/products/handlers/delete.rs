//! Delete Product Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use shop::products::ProductRef;

use crate::{extensions::*, products::errors::into_status_error, state::State};

/// Delete Product Handler
///
/// Deleting a product also removes it from every cart.
#[endpoint(
    tags("products"),
    summary = "Delete Product",
    responses(
        (status_code = StatusCode::OK, description = "Product deleted"),
        (status_code = StatusCode::NOT_FOUND, description = "Product not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
    ),
)]
pub(crate) async fn handler(
    product: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<StatusCode, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let kind = depot.product_kind_or_500()?;

    state
        .app
        .products
        .delete_product(ProductRef::new(kind, product.into_inner().into()))
        .await
        .map_err(into_status_error)?;

    Ok(StatusCode::OK)
}
