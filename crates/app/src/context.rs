//! App Context

use std::{path::Path, sync::Arc};

use jiff::Timestamp;
use shop::{
    catalog::Catalog,
    fixtures::{CatalogFixture, FixtureError},
};
use thiserror::Error;
use tracing::info;

use crate::{
    domain::{
        carts::{CartsService, MemoryCartsService},
        products::{MemoryProductsService, ProductsService},
    },
    store::Store,
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to load catalog fixture")]
    Fixture(#[source] FixtureError),
}

#[derive(Clone)]
pub struct AppContext {
    pub products: Arc<dyn ProductsService>,
    pub carts: Arc<dyn CartsService>,
}

impl AppContext {
    /// Build application context over an empty store.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::from_store(Arc::new(Store::new()))
    }

    /// Build application context over an existing store.
    #[must_use]
    pub fn from_store(store: Arc<Store>) -> Self {
        Self {
            products: Arc::new(MemoryProductsService::new(Arc::clone(&store))),
            carts: Arc::new(MemoryCartsService::new(store)),
        }
    }

    /// Build application context with the catalog seeded from a YAML fixture.
    ///
    /// # Errors
    ///
    /// Returns an error when the fixture cannot be read, parsed or loaded.
    pub fn from_fixture(path: &Path) -> Result<Self, AppInitError> {
        let mut catalog = Catalog::new();

        let loaded = CatalogFixture::from_path(path)
            .and_then(|fixture| fixture.load_into(&mut catalog, Timestamp::now()))
            .map_err(AppInitError::Fixture)?;

        info!(path = %path.display(), products = loaded.len(), "seeded catalog");

        Ok(Self::from_store(Arc::new(Store::with_catalog(catalog))))
    }
}
