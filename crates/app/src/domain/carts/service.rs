//! Carts service.

use std::sync::Arc;

use async_trait::async_trait;
use jiff::Timestamp;
use mockall::automock;
use shop::{
    carts::{Cart, CartSnapshot, CartUuid},
    catalog::Catalog,
    products::ProductRef,
};
use tracing::{info, warn};

use crate::{
    domain::carts::{errors::CartsServiceError, models::AddedItem},
    store::{CartHandle, Store},
};

#[derive(Debug, Clone)]
pub struct MemoryCartsService {
    store: Arc<Store>,
}

impl MemoryCartsService {
    #[must_use]
    pub fn new(store: Arc<Store>) -> Self {
        Self { store }
    }

    fn handle(&self, uuid: CartUuid) -> Result<CartHandle, CartsServiceError> {
        self.store.cart(uuid).ok_or(CartsServiceError::NotFound)
    }
}

fn snapshot(cart: &Cart, catalog: &Catalog) -> CartSnapshot {
    let snapshot = cart.snapshot(catalog);

    if !snapshot.totals.is_complete() {
        warn!(
            cart = %snapshot.uuid,
            dangling = ?snapshot.totals.dangling,
            "cart references missing products"
        );
    }

    snapshot
}

#[async_trait]
impl CartsService for MemoryCartsService {
    async fn list_carts(&self) -> Result<Vec<CartSnapshot>, CartsServiceError> {
        let mut carts: Vec<CartSnapshot> = self
            .store
            .carts()
            .iter()
            .map(|handle| {
                let cart = handle.lock();

                snapshot(&cart, &self.store.catalog())
            })
            .collect();

        carts.sort_by_key(|cart| (cart.created_at, cart.uuid));

        Ok(carts)
    }

    async fn create_cart(&self, uuid: CartUuid) -> Result<CartSnapshot, CartsServiceError> {
        let handle = self
            .store
            .insert_cart(Cart::new(uuid, Timestamp::now()))
            .map_err(|_cart| CartsServiceError::AlreadyExists)?;

        info!(cart = %uuid, "created cart");

        let cart = handle.lock();

        Ok(snapshot(&cart, &self.store.catalog()))
    }

    async fn get_cart(&self, uuid: CartUuid) -> Result<CartSnapshot, CartsServiceError> {
        let handle = self.handle(uuid)?;
        let cart = handle.lock();

        Ok(snapshot(&cart, &self.store.catalog()))
    }

    async fn delete_cart(&self, uuid: CartUuid) -> Result<(), CartsServiceError> {
        self.store
            .remove_cart(uuid)
            .ok_or(CartsServiceError::NotFound)?;

        info!(cart = %uuid, "deleted cart");

        Ok(())
    }

    async fn add_item(
        &self,
        uuid: CartUuid,
        product: ProductRef,
        quantity: u32,
    ) -> Result<AddedItem, CartsServiceError> {
        let handle = self.handle(uuid)?;
        let mut cart = handle.lock();
        let catalog = self.store.catalog();

        let item = cart.add(&*catalog, product, quantity, Timestamp::now())?;

        info!(
            cart = %uuid,
            %product,
            added = quantity,
            quantity = item.quantity(),
            "added item"
        );

        Ok(AddedItem {
            item,
            cart: snapshot(&cart, &catalog),
        })
    }

    async fn remove_item(
        &self,
        uuid: CartUuid,
        product: ProductRef,
        quantity: u32,
    ) -> Result<CartSnapshot, CartsServiceError> {
        let handle = self.handle(uuid)?;
        let mut cart = handle.lock();

        cart.remove(product, quantity, Timestamp::now())?;

        info!(cart = %uuid, %product, removed = quantity, "removed item");

        Ok(snapshot(&cart, &self.store.catalog()))
    }

    async fn clear_cart(&self, uuid: CartUuid) -> Result<CartSnapshot, CartsServiceError> {
        let handle = self.handle(uuid)?;
        let mut cart = handle.lock();

        cart.clear(Timestamp::now());

        info!(cart = %uuid, "cleared cart");

        Ok(snapshot(&cart, &self.store.catalog()))
    }
}

#[automock]
#[async_trait]
pub trait CartsService: Send + Sync {
    /// List every cart, oldest first.
    async fn list_carts(&self) -> Result<Vec<CartSnapshot>, CartsServiceError>;

    /// Creates a new, empty cart with the given UUID.
    async fn create_cart(&self, uuid: CartUuid) -> Result<CartSnapshot, CartsServiceError>;

    /// Retrieve a single cart with resolved line items and totals.
    async fn get_cart(&self, uuid: CartUuid) -> Result<CartSnapshot, CartsServiceError>;

    /// Deletes a cart with the given UUID, along with its line items.
    async fn delete_cart(&self, uuid: CartUuid) -> Result<(), CartsServiceError>;

    /// Add `quantity` units of a product to the given cart.
    async fn add_item(
        &self,
        uuid: CartUuid,
        product: ProductRef,
        quantity: u32,
    ) -> Result<AddedItem, CartsServiceError>;

    /// Remove up to `quantity` units of a product from the given cart.
    async fn remove_item(
        &self,
        uuid: CartUuid,
        product: ProductRef,
        quantity: u32,
    ) -> Result<CartSnapshot, CartsServiceError>;

    /// Remove every line item from the given cart.
    async fn clear_cart(&self, uuid: CartUuid) -> Result<CartSnapshot, CartsServiceError>;
}
