//! Products
//!
//! Every collection (`/books`, `/albums`, `/licenses`) shares one set of
//! handlers; the route's [`KindScope`] hoop tells them which kind they serve.

mod errors;
mod handlers;
mod models;

use salvo::{
    Request, Router, handler,
    prelude::{Depot, FlowCtrl, Response},
};
use shop::products::ProductKind;

use crate::extensions::*;

pub(crate) use handlers::*;
pub(crate) use models::collection_path;

/// Scopes the routes below it to one product kind.
#[derive(Debug, Clone, Copy)]
pub(crate) struct KindScope(pub(crate) ProductKind);

#[handler]
impl KindScope {
    async fn handle(
        &self,
        req: &mut Request,
        depot: &mut Depot,
        res: &mut Response,
        ctrl: &mut FlowCtrl,
    ) {
        depot.insert_product_kind(self.0);
        ctrl.call_next(req, depot, res).await;
    }
}

/// CRUD routes for one product collection.
pub(crate) fn collection_router(kind: ProductKind) -> Router {
    Router::with_path(collection_path(kind))
        .hoop(KindScope(kind))
        .get(index::handler)
        .post(create::handler)
        .push(
            Router::with_path("{product}")
                .get(get::handler)
                .put(update::handler)
                .delete(delete::handler),
        )
}
