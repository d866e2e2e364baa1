//! Create Product Handler

use std::sync::Arc;

use salvo::{http::header::LOCATION, oapi::extract::JsonBody, prelude::*};
use serde_json::Value;
use uuid::Uuid;

use shop::products::ProductUuid;

use crate::{
    extensions::*,
    products::{
        errors::into_status_error,
        models::{ProductPayload, ProductResponse, collection_path},
    },
    state::State,
};

/// Take the optional `uuid` out of a create body, leaving the product fields.
fn take_uuid(body: &mut Value) -> Result<ProductUuid, StatusError> {
    let uuid = body
        .as_object_mut()
        .and_then(|fields| fields.remove("uuid"))
        .filter(|uuid| !uuid.is_null())
        .map(serde_json::from_value::<Uuid>)
        .transpose()
        .or_400("invalid uuid")?;

    Ok(uuid.map_or_else(ProductUuid::new, ProductUuid::from))
}

/// Create Product Handler
///
/// The body carries the collection kind's fields plus an optional `uuid`,
/// generated when omitted.
#[endpoint(
    tags("products"),
    summary = "Create Product",
    responses(
        (status_code = StatusCode::CREATED, description = "Product created"),
        (status_code = StatusCode::CONFLICT, description = "Product already exists"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<Value>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<ProductResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let kind = depot.product_kind_or_500()?;
    let mut body = json.into_inner();

    let uuid = take_uuid(&mut body)?;
    let data = ProductPayload::from_json(kind, body)?.into_data()?;

    let product = state
        .app
        .products
        .create_product(uuid, data)
        .await
        .map_err(into_status_error)?;

    res.add_header(LOCATION, format!("/{}/{uuid}", collection_path(kind)), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    Ok(Json(product.into()))
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use shop::products::{BookData, ProductData, ProductKind, ValidationError};
    use shop_app::domain::products::{MockProductsService, ProductsServiceError};

    use crate::{
        products::KindScope,
        test_helpers::{make_book, products_service},
    };

    use super::*;

    fn make_service(repo: MockProductsService) -> Service {
        products_service(
            repo,
            Router::with_path("books")
                .hoop(KindScope(ProductKind::Book))
                .post(handler),
        )
    }

    fn expect_only_create(repo: &mut MockProductsService) {
        repo.expect_list_products().never();
        repo.expect_get_product().never();
        repo.expect_update_product().never();
        repo.expect_delete_product().never();
    }

    fn kindred() -> ProductData {
        BookData {
            title: "Kindred".to_string(),
            author: "Octavia E. Butler".to_string(),
            pages: 264,
            price: Decimal::new(1000, 2),
            weight: Some(Decimal::new(300, 3)),
        }
        .into()
    }

    fn kindred_json(uuid: ProductUuid) -> serde_json::Value {
        json!({
            "uuid": uuid.into_uuid(),
            "title": "Kindred",
            "author": "Octavia E. Butler",
            "pages": 264,
            "price": "10.00",
            "weight": "0.300",
        })
    }

    #[tokio::test]
    async fn test_create_product_success() -> TestResult {
        let uuid = ProductUuid::new();
        let product = make_book(uuid, "Kindred", Decimal::new(1000, 2))?;

        let mut repo = MockProductsService::new();

        repo.expect_create_product()
            .once()
            .withf(move |id, data| *id == uuid && *data == kindred())
            .return_once(move |_, _| Ok(product));

        expect_only_create(&mut repo);

        let mut res = TestClient::post("http://example.com/books")
            .json(&kindred_json(uuid))
            .send(&make_service(repo))
            .await;

        let body: ProductResponse = res.take_json().await?;
        let location = res.headers().get("location").and_then(|v| v.to_str().ok());

        assert_eq!(res.status_code, Some(StatusCode::CREATED));
        assert_eq!(location, Some(format!("/books/{uuid}").as_str()));
        assert_eq!(body.uuid, uuid.into_uuid());
        assert_eq!(body.price, "10.00");

        Ok(())
    }

    #[tokio::test]
    async fn test_create_product_without_uuid_generates_one() -> TestResult {
        let mut repo = MockProductsService::new();

        repo.expect_create_product()
            .once()
            .withf(|_, data| *data == kindred())
            .return_once(|uuid, _| {
                make_book(uuid, "Kindred", Decimal::new(1000, 2))
                    .map_err(ProductsServiceError::from)
            });

        expect_only_create(&mut repo);

        let res = TestClient::post("http://example.com/books")
            .json(&json!({
                "title": "Kindred",
                "author": "Octavia E. Butler",
                "pages": 264,
                "price": "10.00",
                "weight": "0.300",
            }))
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::CREATED));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_product_conflict_returns_409() -> TestResult {
        let uuid = ProductUuid::new();

        let mut repo = MockProductsService::new();

        repo.expect_create_product()
            .once()
            .return_once(|_, _| Err(ProductsServiceError::AlreadyExists));

        expect_only_create(&mut repo);

        let res = TestClient::post("http://example.com/books")
            .json(&kindred_json(uuid))
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::CONFLICT));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_product_invalid_data_returns_400() -> TestResult {
        let uuid = ProductUuid::new();

        let mut repo = MockProductsService::new();

        repo.expect_create_product()
            .once()
            .return_once(|_, _| {
                Err(ProductsServiceError::InvalidData(ValidationError::Blank { field: "title" }))
            });

        expect_only_create(&mut repo);

        let res = TestClient::post("http://example.com/books")
            .json(&kindred_json(uuid))
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_license_under_books_returns_400() -> TestResult {
        let mut repo = MockProductsService::new();

        repo.expect_create_product().never();

        expect_only_create(&mut repo);

        let res = TestClient::post("http://example.com/books")
            .json(&json!({ "name": "Office Suite", "price": "49.00" }))
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_with_invalid_uuid_returns_400() -> TestResult {
        let mut repo = MockProductsService::new();

        repo.expect_create_product().never();

        expect_only_create(&mut repo);

        let mut body = kindred_json(ProductUuid::new());

        if let Some(fields) = body.as_object_mut() {
            fields.insert("uuid".to_string(), json!("not-a-uuid"));
        }

        let res = TestClient::post("http://example.com/books")
            .json(&body)
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }
}
