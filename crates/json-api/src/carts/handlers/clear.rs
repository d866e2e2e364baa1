//! Clear Cart Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use crate::{
    carts::{errors::into_status_error, models::CartResponse},
    extensions::*,
    state::State,
};

/// Clear Cart Handler
///
/// Removes every line item; the cart itself remains.
#[endpoint(
    tags("carts"),
    summary = "Clear Cart",
    responses(
        (status_code = StatusCode::OK, description = "Empty cart"),
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
        .clear_cart(cart.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(cart.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use shop::carts::CartUuid;
    use shop_app::domain::carts::MockCartsService;

    use crate::test_helpers::{carts_service, make_cart};

    use super::*;

    #[tokio::test]
    async fn test_clear_cart_returns_zero_totals() -> TestResult {
        let uuid = CartUuid::new();

        let mut repo = MockCartsService::new();

        repo.expect_clear_cart()
            .once()
            .withf(move |id| *id == uuid)
            .return_once(move |_| Ok(make_cart(uuid)));

        repo.expect_list_carts().never();
        repo.expect_create_cart().never();
        repo.expect_get_cart().never();
        repo.expect_delete_cart().never();
        repo.expect_add_item().never();
        repo.expect_remove_item().never();

        let response: CartResponse = TestClient::post(format!("http://example.com/carts/{uuid}/clear"))
            .send(&carts_service(
                repo,
                Router::with_path("carts/{cart}/clear").post(handler),
            ))
            .await
            .take_json()
            .await?;

        assert!(response.items.is_empty());
        assert_eq!(response.total_price, "0.00");
        assert_eq!(response.total_weight, "0.000");

        Ok(())
    }
}
