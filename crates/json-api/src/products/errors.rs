//! Product Errors

use salvo::http::StatusError;

use shop_app::domain::products::ProductsServiceError;

pub(crate) fn into_status_error(error: ProductsServiceError) -> StatusError {
    match error {
        ProductsServiceError::AlreadyExists => {
            StatusError::conflict().brief("Product already exists")
        }
        ProductsServiceError::NotFound => StatusError::not_found().brief("Product not found"),
        ProductsServiceError::InvalidData(source) => StatusError::bad_request()
            .brief("Invalid product payload")
            .detail(source.to_string()),
        error @ ProductsServiceError::KindMismatch { .. } => StatusError::bad_request()
            .brief("Product kind mismatch")
            .detail(error.to_string()),
    }
}
