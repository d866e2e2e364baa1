//! Get Product Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use shop::products::ProductRef;

use crate::{
    extensions::*,
    products::{errors::into_status_error, models::ProductResponse},
    state::State,
};

/// Get Product Handler
///
/// Returns a product.
#[endpoint(
    tags("products"),
    summary = "Get Product",
    responses(
        (status_code = StatusCode::OK, description = "Product"),
        (status_code = StatusCode::NOT_FOUND, description = "Product not found"),
    ),
)]
pub(crate) async fn handler(
    product: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<ProductResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let kind = depot.product_kind_or_500()?;

    let product = state
        .app
        .products
        .get_product(ProductRef::new(kind, product.into_inner().into()))
        .await
        .map_err(into_status_error)?;

    Ok(Json(product.into()))
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use shop::products::{ProductKind, ProductUuid};
    use shop_app::domain::products::{MockProductsService, ProductsServiceError};

    use crate::{
        products::KindScope,
        test_helpers::{make_license, products_service},
    };

    use super::*;

    fn make_service(repo: MockProductsService) -> Service {
        products_service(
            repo,
            Router::with_path("licenses/{product}")
                .hoop(KindScope(ProductKind::SoftwareLicense))
                .get(handler),
        )
    }

    fn expect_only_get(repo: &mut MockProductsService) {
        repo.expect_list_products().never();
        repo.expect_create_product().never();
        repo.expect_update_product().never();
        repo.expect_delete_product().never();
    }

    #[tokio::test]
    async fn test_get_product_returns_200() -> TestResult {
        let uuid = ProductUuid::new();
        let license = make_license(uuid, "Office Suite", Decimal::new(4900, 2))?;

        let mut repo = MockProductsService::new();

        repo.expect_get_product()
            .once()
            .withf(move |product| {
                *product == ProductRef::new(ProductKind::SoftwareLicense, uuid)
            })
            .return_once(move |_| Ok(license));

        expect_only_get(&mut repo);

        let mut res = TestClient::get(format!("http://example.com/licenses/{uuid}"))
            .send(&make_service(repo))
            .await;

        let body: ProductResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.uuid, uuid.into_uuid());
        assert_eq!(body.name.as_deref(), Some("Office Suite"));
        assert_eq!(body.display_name, "License: Office Suite");
        assert_eq!(body.weight, None);

        Ok(())
    }

    #[tokio::test]
    async fn test_get_unknown_product_returns_404() -> TestResult {
        let mut repo = MockProductsService::new();

        repo.expect_get_product()
            .once()
            .return_once(|_| Err(ProductsServiceError::NotFound));

        expect_only_get(&mut repo);

        let res = TestClient::get(format!("http://example.com/licenses/{}", Uuid::now_v7()))
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }

    #[tokio::test]
    async fn test_get_malformed_uuid_returns_400() -> TestResult {
        let mut repo = MockProductsService::new();

        repo.expect_get_product().never();

        expect_only_get(&mut repo);

        let res = TestClient::get("http://example.com/licenses/not-a-uuid")
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }
}
