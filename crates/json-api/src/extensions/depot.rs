//! Depot helper extensions.

use std::any::Any;

use salvo::prelude::{Depot, StatusError};
use shop::products::ProductKind;
use tracing::error;

/// Helpers for mapping depot extraction failures to HTTP errors.
pub(crate) trait DepotExt {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, StatusError>;

    /// Record which catalog collection the matched route serves.
    fn insert_product_kind(&mut self, kind: ProductKind);

    fn product_kind_or_500(&self) -> Result<ProductKind, StatusError>;
}

impl DepotExt for Depot {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, StatusError> {
        self.obtain::<T>()
            .map_err(|_ignored| StatusError::internal_server_error())
    }

    fn insert_product_kind(&mut self, kind: ProductKind) {
        self.inject(kind);
    }

    fn product_kind_or_500(&self) -> Result<ProductKind, StatusError> {
        self.obtain::<ProductKind>().copied().map_err(|_ignored| {
            error!("route is not scoped to a product kind");

            StatusError::internal_server_error()
        })
    }
}
