//! Errors

use salvo::http::StatusError;

use shop_app::domain::carts::CartsServiceError;

pub(crate) fn into_status_error(error: CartsServiceError) -> StatusError {
    match error {
        CartsServiceError::AlreadyExists => StatusError::conflict().brief("Cart already exists"),
        CartsServiceError::NotFound => StatusError::not_found().brief("Cart not found"),
        error @ CartsServiceError::ProductNotFound(_) => StatusError::not_found()
            .brief("Product not found")
            .detail(error.to_string()),
        error @ (CartsServiceError::InvalidQuantity(_) | CartsServiceError::QuantityOverflow(_)) => {
            StatusError::bad_request()
                .brief("Invalid quantity")
                .detail(error.to_string())
        }
    }
}
