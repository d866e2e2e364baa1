//! Update Product Handler

use std::sync::Arc;

use salvo::{
    oapi::extract::{JsonBody, PathParam},
    prelude::*,
};
use serde_json::Value;
use uuid::Uuid;

use shop::products::ProductRef;

use crate::{
    extensions::*,
    products::{
        errors::into_status_error,
        models::{ProductPayload, ProductResponse},
    },
    state::State,
};

/// Update Product Handler
///
/// Replaces every writable field of the product. The body is read as the
/// collection kind's fields.
#[endpoint(
    tags("products"),
    summary = "Update Product",
    responses(
        (status_code = StatusCode::OK, description = "Product updated"),
        (status_code = StatusCode::NOT_FOUND, description = "Product not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
    ),
)]
pub(crate) async fn handler(
    product: PathParam<Uuid>,
    json: JsonBody<Value>,
    depot: &mut Depot,
) -> Result<Json<ProductResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let kind = depot.product_kind_or_500()?;
    let data = ProductPayload::from_json(kind, json.into_inner())?.into_data()?;

    let updated = state
        .app
        .products
        .update_product(ProductRef::new(kind, product.into_inner().into()), data)
        .await
        .map_err(into_status_error)?;

    Ok(Json(updated.into()))
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use shop::products::{MusicAlbumData, ProductKind, ProductUuid};
    use shop_app::domain::products::{MockProductsService, ProductsServiceError};

    use crate::{
        products::KindScope,
        test_helpers::{make_album, products_service},
    };

    use super::*;

    fn make_service(repo: MockProductsService) -> Service {
        products_service(
            repo,
            Router::with_path("albums/{product}")
                .hoop(KindScope(ProductKind::MusicAlbum))
                .put(handler),
        )
    }

    fn expect_only_update(repo: &mut MockProductsService) {
        repo.expect_list_products().never();
        repo.expect_get_product().never();
        repo.expect_create_product().never();
        repo.expect_delete_product().never();
    }

    fn blue_json() -> serde_json::Value {
        json!({
            "artist": "Joni Mitchell",
            "title": "Blue",
            "tracks": 10,
            "price": "11.99",
            "weight": "0.100",
        })
    }

    #[tokio::test]
    async fn test_update_product_success() -> TestResult {
        let uuid = ProductUuid::new();
        let updated = make_album(uuid, "Blue", Decimal::new(1199, 2))?;

        let mut repo = MockProductsService::new();

        repo.expect_update_product()
            .once()
            .withf(move |product, data| {
                *product == ProductRef::new(ProductKind::MusicAlbum, uuid)
                    && *data
                        == MusicAlbumData {
                            artist: "Joni Mitchell".to_string(),
                            title: "Blue".to_string(),
                            tracks: 10,
                            price: Decimal::new(1199, 2),
                            weight: Some(Decimal::new(100, 3)),
                        }
                        .into()
            })
            .return_once(move |_, _| Ok(updated));

        expect_only_update(&mut repo);

        let mut res = TestClient::put(format!("http://example.com/albums/{uuid}"))
            .json(&blue_json())
            .send(&make_service(repo))
            .await;

        let body: ProductResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.price, "11.99");
        assert_eq!(body.artist.as_deref(), Some("Joni Mitchell"));

        Ok(())
    }

    #[tokio::test]
    async fn test_update_unknown_product_returns_404() -> TestResult {
        let mut repo = MockProductsService::new();

        repo.expect_update_product()
            .once()
            .return_once(|_, _| Err(ProductsServiceError::NotFound));

        expect_only_update(&mut repo);

        let res = TestClient::put(format!("http://example.com/albums/{}", Uuid::now_v7()))
            .json(&blue_json())
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }

    #[tokio::test]
    async fn test_update_album_with_extra_book_fields_parses_as_album() -> TestResult {
        let uuid = ProductUuid::new();
        let updated = make_album(uuid, "Blue", Decimal::new(1199, 2))?;

        let mut repo = MockProductsService::new();

        repo.expect_update_product()
            .once()
            .withf(|_, data| data.kind() == ProductKind::MusicAlbum)
            .return_once(move |_, _| Ok(updated));

        expect_only_update(&mut repo);

        let mut body = blue_json();

        if let Some(fields) = body.as_object_mut() {
            fields.insert("author".to_string(), json!("Joni Mitchell"));
            fields.insert("pages".to_string(), json!(12));
        }

        let res = TestClient::put(format!("http://example.com/albums/{uuid}"))
            .json(&body)
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        Ok(())
    }

    #[tokio::test]
    async fn test_update_with_book_fields_returns_400() -> TestResult {
        let mut repo = MockProductsService::new();

        repo.expect_update_product().never();

        expect_only_update(&mut repo);

        let res = TestClient::put(format!("http://example.com/albums/{}", Uuid::now_v7()))
            .json(&json!({
                "title": "Kindred",
                "author": "Octavia E. Butler",
                "pages": 264,
                "price": "10.00",
            }))
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }
}
