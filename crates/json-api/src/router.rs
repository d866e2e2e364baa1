//! App Router

use salvo::Router;
use shop::products::ProductKind;

use crate::{carts, healthcheck, products};

/// Every API route, without middleware or documentation routes.
pub(crate) fn app_router() -> Router {
    let router = Router::new()
        .push(Router::with_path("healthcheck").get(healthcheck::handler))
        .push(carts::router());

    ProductKind::ALL
        .into_iter()
        .fold(router, |router, kind| {
            router.push(products::collection_router(kind))
        })
}
