//! In-memory store
//!
//! The catalog sits behind a single reader-writer lock. Each cart has its
//! own mutex, so writes to one cart never wait on another. When both are
//! needed the cart is locked first, then the catalog is read.

use std::sync::Arc;

use jiff::Timestamp;
use parking_lot::{Mutex, RwLock, RwLockReadGuard, RwLockWriteGuard};
use rustc_hash::FxHashMap;
use shop::{
    carts::{Cart, CartUuid},
    catalog::Catalog,
    products::ProductRef,
};

/// Shared handle to one cart.
pub type CartHandle = Arc<Mutex<Cart>>;

/// Catalog plus carts, shared by the services.
#[derive(Debug, Default)]
pub struct Store {
    catalog: RwLock<Catalog>,
    carts: RwLock<FxHashMap<CartUuid, CartHandle>>,
}

impl Store {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded with `catalog`.
    pub fn with_catalog(catalog: Catalog) -> Self {
        Self {
            catalog: RwLock::new(catalog),
            carts: RwLock::default(),
        }
    }

    /// Shared access to the catalog.
    pub fn catalog(&self) -> RwLockReadGuard<'_, Catalog> {
        self.catalog.read()
    }

    /// Exclusive access to the catalog. Never acquire a cart lock while holding this.
    pub fn catalog_mut(&self) -> RwLockWriteGuard<'_, Catalog> {
        self.catalog.write()
    }

    /// Handle to a cart, if it exists.
    pub fn cart(&self, uuid: CartUuid) -> Option<CartHandle> {
        self.carts.read().get(&uuid).cloned()
    }

    /// Every cart handle, in no particular order.
    pub fn carts(&self) -> Vec<CartHandle> {
        self.carts.read().values().cloned().collect()
    }

    /// Insert a new cart. Returns the cart back if its id is taken.
    pub fn insert_cart(&self, cart: Cart) -> Result<CartHandle, Cart> {
        let uuid = cart.uuid();
        let mut carts = self.carts.write();

        if carts.contains_key(&uuid) {
            return Err(cart);
        }

        let handle = Arc::new(Mutex::new(cart));

        carts.insert(uuid, Arc::clone(&handle));

        Ok(handle)
    }

    /// Remove a cart and all of its line items.
    pub fn remove_cart(&self, uuid: CartUuid) -> Option<CartHandle> {
        self.carts.write().remove(&uuid)
    }

    /// Drop every line item referencing `product`, returning how many carts changed.
    pub fn purge_product(&self, product: ProductRef, now: Timestamp) -> usize {
        self.carts()
            .into_iter()
            .filter(|cart| cart.lock().purge(product, now))
            .count()
    }
}
