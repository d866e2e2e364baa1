//! Carts

mod errors;
mod handlers;
mod models;

use salvo::Router;

pub(crate) use handlers::*;

/// Cart routes, mounted under `/carts`.
pub(crate) fn router() -> Router {
    Router::with_path("carts")
        .get(index::handler)
        .post(create::handler)
        .push(
            Router::with_path("{cart}")
                .get(get::handler)
                .delete(delete::handler)
                .push(Router::with_path("add-item").post(add_item::handler))
                .push(Router::with_path("remove-item").post(remove_item::handler))
                .push(Router::with_path("clear").post(clear::handler)),
        )
}
