//! Catalog
//!
//! In-memory product collections, one per [`ProductKind`], dispatched by the
//! kind tag of a [`ProductRef`].

use jiff::Timestamp;
use rustc_hash::FxHashMap;
use thiserror::Error;

use crate::{
    products::{
        Product, ProductData, ProductKind, ProductRef, ProductUuid, ValidationError,
    },
    resolver::{ProductNotFound, ProductResolver},
};

mod filter;

pub use filter::{ProductFilter, TextField, TextFilter, TextMatch};

/// Errors raised by catalog writes and lookups.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// The product payload failed validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A product with this id already exists in the collection.
    #[error("product {0} already exists")]
    AlreadyExists(ProductRef),

    /// No product with this id exists in the collection.
    #[error(transparent)]
    NotFound(#[from] ProductNotFound),

    /// An update payload was for a different kind than the stored product.
    #[error("cannot write {found} data to {expected} product")]
    KindMismatch {
        /// Kind of the stored product
        expected: ProductKind,
        /// Kind of the payload
        found: ProductKind,
    },
}

type Collection = FxHashMap<ProductUuid, Product>;

/// Product catalog
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    books: Collection,
    albums: Collection,
    licenses: Collection,
}

impl Catalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    fn collection(&self, kind: ProductKind) -> &Collection {
        match kind {
            ProductKind::Book => &self.books,
            ProductKind::MusicAlbum => &self.albums,
            ProductKind::SoftwareLicense => &self.licenses,
        }
    }

    fn collection_mut(&mut self, kind: ProductKind) -> &mut Collection {
        match kind {
            ProductKind::Book => &mut self.books,
            ProductKind::MusicAlbum => &mut self.albums,
            ProductKind::SoftwareLicense => &mut self.licenses,
        }
    }

    /// Add a product to the collection for its kind.
    ///
    /// # Errors
    ///
    /// - [`CatalogError::Validation`]: `data` failed validation.
    /// - [`CatalogError::AlreadyExists`]: `uuid` is taken within that kind.
    pub fn create(
        &mut self,
        uuid: ProductUuid,
        data: ProductData,
        now: Timestamp,
    ) -> Result<Product, CatalogError> {
        let reference = ProductRef::new(data.kind(), uuid);
        let collection = self.collection_mut(reference.kind);

        if collection.contains_key(&uuid) {
            return Err(CatalogError::AlreadyExists(reference));
        }

        let product = Product::new(uuid, data, now)?;

        collection.insert(uuid, product.clone());

        Ok(product)
    }

    /// Fetch a product by reference.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::NotFound`] when nothing matches.
    pub fn get(&self, product: ProductRef) -> Result<&Product, CatalogError> {
        self.collection(product.kind)
            .get(&product.id)
            .ok_or(CatalogError::NotFound(ProductNotFound(product)))
    }

    /// Whether `product` resolves.
    pub fn contains(&self, product: ProductRef) -> bool {
        self.collection(product.kind).contains_key(&product.id)
    }

    /// List products of one kind matching `filter`, ordered by id.
    pub fn list(&self, kind: ProductKind, filter: &ProductFilter) -> Vec<Product> {
        let mut products: Vec<Product> = self
            .collection(kind)
            .values()
            .filter(|product| filter.matches(product))
            .cloned()
            .collect();

        products.sort_by_key(Product::uuid);

        products
    }

    /// Replace the writable fields of an existing product.
    ///
    /// # Errors
    ///
    /// - [`CatalogError::NotFound`]: nothing matches `product`.
    /// - [`CatalogError::KindMismatch`]: `data` is for another kind.
    /// - [`CatalogError::Validation`]: `data` failed validation; the product is unchanged.
    pub fn update(
        &mut self,
        product: ProductRef,
        data: ProductData,
        now: Timestamp,
    ) -> Result<Product, CatalogError> {
        if data.kind() != product.kind {
            return Err(CatalogError::KindMismatch {
                expected: product.kind,
                found: data.kind(),
            });
        }

        let stored = self
            .collection_mut(product.kind)
            .get_mut(&product.id)
            .ok_or(CatalogError::NotFound(ProductNotFound(product)))?;

        match (stored, data) {
            (Product::Book(book), ProductData::Book(data)) => book.replace(data, now)?,
            (Product::MusicAlbum(album), ProductData::MusicAlbum(data)) => {
                album.replace(data, now)?;
            }
            (Product::SoftwareLicense(license), ProductData::SoftwareLicense(data)) => {
                license.replace(data, now)?;
            }
            (stored, data) => {
                return Err(CatalogError::KindMismatch {
                    expected: stored.kind(),
                    found: data.kind(),
                });
            }
        }

        self.get(product).cloned()
    }

    /// Remove a product, returning it.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::NotFound`] when nothing matches.
    pub fn delete(&mut self, product: ProductRef) -> Result<Product, CatalogError> {
        self.collection_mut(product.kind)
            .remove(&product.id)
            .ok_or(CatalogError::NotFound(ProductNotFound(product)))
    }

    /// Total number of products across all kinds.
    pub fn len(&self) -> usize {
        self.books.len() + self.albums.len() + self.licenses.len()
    }

    /// Whether the catalog holds no products.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ProductResolver for Catalog {
    fn resolve(&self, product: ProductRef) -> Result<Product, ProductNotFound> {
        self.collection(product.kind)
            .get(&product.id)
            .cloned()
            .ok_or(ProductNotFound(product))
    }
}
