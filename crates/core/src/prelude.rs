//! Shop prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    carts::{Cart, CartError, CartSnapshot, CartUuid, LineItem, LineItemUuid, LineItemView, Totals},
    catalog::{Catalog, CatalogError, ProductFilter, TextField, TextFilter, TextMatch},
    fixtures::{CatalogFixture, FixtureError},
    products::{
        Book, BookData, InvalidProductKind, MusicAlbum, MusicAlbumData, Product, ProductData,
        ProductKind, ProductRef, ProductUuid, SoftwareLicense, SoftwareLicenseData,
        ValidationError,
    },
    resolver::{ProductNotFound, ProductResolver},
    uuids::TypedUuid,
};
