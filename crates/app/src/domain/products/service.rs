//! Products service.

use std::sync::Arc;

use async_trait::async_trait;
use jiff::Timestamp;
use mockall::automock;
use shop::{
    catalog::ProductFilter,
    products::{Product, ProductData, ProductKind, ProductRef, ProductUuid},
};
use tracing::info;

use crate::{domain::products::errors::ProductsServiceError, store::Store};

#[derive(Debug, Clone)]
pub struct MemoryProductsService {
    store: Arc<Store>,
}

impl MemoryProductsService {
    #[must_use]
    pub fn new(store: Arc<Store>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl ProductsService for MemoryProductsService {
    async fn list_products(
        &self,
        kind: ProductKind,
        filter: ProductFilter,
    ) -> Result<Vec<Product>, ProductsServiceError> {
        Ok(self.store.catalog().list(kind, &filter))
    }

    async fn get_product(&self, product: ProductRef) -> Result<Product, ProductsServiceError> {
        Ok(self.store.catalog().get(product)?.clone())
    }

    async fn create_product(
        &self,
        uuid: ProductUuid,
        data: ProductData,
    ) -> Result<Product, ProductsServiceError> {
        let created = self.store.catalog_mut().create(uuid, data, Timestamp::now())?;

        info!(product = %created.reference(), "created product");

        Ok(created)
    }

    async fn update_product(
        &self,
        product: ProductRef,
        data: ProductData,
    ) -> Result<Product, ProductsServiceError> {
        let updated = self
            .store
            .catalog_mut()
            .update(product, data, Timestamp::now())?;

        info!(%product, "updated product");

        Ok(updated)
    }

    async fn delete_product(&self, product: ProductRef) -> Result<(), ProductsServiceError> {
        self.store.catalog_mut().delete(product)?;

        // The catalog lock is released before any cart is locked.
        let carts = self.store.purge_product(product, Timestamp::now());

        info!(%product, carts, "deleted product");

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait ProductsService: Send + Sync {
    /// List products of one kind matching `filter`.
    async fn list_products(
        &self,
        kind: ProductKind,
        filter: ProductFilter,
    ) -> Result<Vec<Product>, ProductsServiceError>;

    /// Retrieve a single product.
    async fn get_product(&self, product: ProductRef) -> Result<Product, ProductsServiceError>;

    /// Create a new product; the kind comes from `data`.
    async fn create_product(
        &self,
        uuid: ProductUuid,
        data: ProductData,
    ) -> Result<Product, ProductsServiceError>;

    /// Replace a product's writable fields.
    async fn update_product(
        &self,
        product: ProductRef,
        data: ProductData,
    ) -> Result<Product, ProductsServiceError>;

    /// Delete a product and remove it from every cart.
    async fn delete_product(&self, product: ProductRef) -> Result<(), ProductsServiceError>;
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use shop::products::{BookData, SoftwareLicenseData, ValidationError};
    use testresult::TestResult;

    use crate::{domain::carts::CartsService, test::{TestContext, book_data}};

    use super::*;

    #[tokio::test]
    async fn create_product_returns_product() -> TestResult {
        let ctx = TestContext::new();
        let uuid = ProductUuid::new();

        let product = ctx.products.create_product(uuid, book_data("Kindred", "10.00")?).await?;

        assert_eq!(product.uuid(), uuid);
        assert_eq!(product.kind(), ProductKind::Book);
        assert_eq!(product.price(), Decimal::new(1000, 2));

        Ok(())
    }

    #[tokio::test]
    async fn create_product_with_taken_uuid_is_rejected() -> TestResult {
        let ctx = TestContext::new();
        let uuid = ProductUuid::new();

        ctx.products.create_product(uuid, book_data("Kindred", "10.00")?).await?;

        let result = ctx
            .products
            .create_product(uuid, book_data("Dawn", "8.00")?)
            .await;

        assert_eq!(result, Err(ProductsServiceError::AlreadyExists));

        Ok(())
    }

    #[tokio::test]
    async fn create_heavy_license_is_rejected() {
        let ctx = TestContext::new();

        let result = ctx
            .products
            .create_product(
                ProductUuid::new(),
                SoftwareLicenseData {
                    name: "Boxed".to_string(),
                    price: Decimal::new(4900, 2),
                    weight: Some(Decimal::new(15, 1)),
                }
                .into(),
            )
            .await;

        assert_eq!(
            result,
            Err(ProductsServiceError::InvalidData(ValidationError::LicenseWeight))
        );
    }

    #[tokio::test]
    async fn get_unknown_product_returns_not_found() {
        let ctx = TestContext::new();

        let result = ctx
            .products
            .get_product(ProductRef::new(ProductKind::MusicAlbum, ProductUuid::new()))
            .await;

        assert_eq!(result, Err(ProductsServiceError::NotFound));
    }

    #[tokio::test]
    async fn list_products_applies_filter() -> TestResult {
        let ctx = TestContext::new();

        ctx.create_book("Kindred", "10.00").await?;
        ctx.create_book("Parable of the Sower", "12.00").await?;
        ctx.create_book("Dawn", "8.00").await?;

        let products = ctx
            .products
            .list_products(
                ProductKind::Book,
                ProductFilter {
                    min_price: Some(Decimal::new(900, 2)),
                    ..ProductFilter::default()
                },
            )
            .await?;

        assert_eq!(products.len(), 2);

        let searched = ctx
            .products
            .list_products(
                ProductKind::Book,
                ProductFilter {
                    search: Some("sower".to_string()),
                    ..ProductFilter::default()
                },
            )
            .await?;

        assert_eq!(searched.len(), 1);

        Ok(())
    }

    #[tokio::test]
    async fn update_product_replaces_fields() -> TestResult {
        let ctx = TestContext::new();
        let product = ctx.create_book("Kindred", "10.00").await?;

        let updated = ctx
            .products
            .update_product(
                product,
                BookData {
                    title: "Kindred".to_string(),
                    author: "Octavia E. Butler".to_string(),
                    pages: 288,
                    price: Decimal::new(1150, 2),
                    weight: Some(Decimal::new(350, 3)),
                }
                .into(),
            )
            .await?;

        assert_eq!(updated.price(), Decimal::new(1150, 2));
        assert_eq!(updated.weight(), Some(Decimal::new(350, 3)));

        Ok(())
    }

    #[tokio::test]
    async fn delete_product_removes_it_from_carts() -> TestResult {
        let ctx = TestContext::new();
        let product = ctx.create_book("Kindred", "10.00").await?;
        let cart = ctx.create_cart().await?;

        ctx.carts.add_item(cart, product, 2).await?;
        ctx.products.delete_product(product).await?;

        let snapshot = ctx.carts.get_cart(cart).await?;

        assert!(snapshot.items.is_empty());
        assert!(snapshot.totals.is_complete());
        assert_eq!(
            ctx.products.get_product(product).await,
            Err(ProductsServiceError::NotFound)
        );

        Ok(())
    }

    #[tokio::test]
    async fn delete_unknown_product_returns_not_found() {
        let ctx = TestContext::new();

        let result = ctx
            .products
            .delete_product(ProductRef::new(ProductKind::Book, ProductUuid::new()))
            .await;

        assert_eq!(result, Err(ProductsServiceError::NotFound));
    }
}
