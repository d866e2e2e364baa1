//! Cart Index Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{
    carts::{errors::into_status_error, models::CartsResponse},
    extensions::*,
    state::State,
};

/// Cart Index Handler
///
/// Returns every cart with its totals, oldest first.
#[endpoint(tags("carts"), summary = "List Carts")]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<CartsResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let carts = state
        .app
        .carts
        .list_carts()
        .await
        .map_err(into_status_error)?;

    Ok(Json(CartsResponse {
        carts: carts.into_iter().map(Into::into).collect(),
    }))
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
    async fn test_index_returns_carts_in_service_order() -> TestResult {
        let first = CartUuid::new();
        let second = CartUuid::new();

        let mut repo = MockCartsService::new();

        repo.expect_list_carts()
            .once()
            .return_once(move || Ok(vec![make_cart(first), make_cart(second)]));

        repo.expect_create_cart().never();
        repo.expect_get_cart().never();
        repo.expect_delete_cart().never();
        repo.expect_add_item().never();
        repo.expect_remove_item().never();
        repo.expect_clear_cart().never();

        let response: CartsResponse = TestClient::get("http://example.com/carts")
            .send(&carts_service(repo, Router::with_path("carts").get(handler)))
            .await
            .take_json()
            .await?;

        let uuids: Vec<_> = response.carts.iter().map(|cart| cart.uuid).collect();

        assert_eq!(uuids, [first.into_uuid(), second.into_uuid()]);

        Ok(())
    }
}
