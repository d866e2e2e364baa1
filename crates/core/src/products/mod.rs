//! Products
//!
//! The catalog holds three unrelated kinds of product. Carts refer to them
//! through a [`ProductRef`], a `(kind, id)` pair, rather than a shared base
//! record.

use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};

use jiff::Timestamp;
use rust_decimal::Decimal;
use smallvec::{SmallVec, smallvec};
use thiserror::Error;

use crate::uuids::TypedUuid;

mod albums;
mod books;
mod licenses;
pub mod validation;

pub use albums::{MusicAlbum, MusicAlbumData};
pub use books::{Book, BookData};
pub use licenses::{SoftwareLicense, SoftwareLicenseData};
pub use validation::ValidationError;

/// Product UUID
pub type ProductUuid = TypedUuid<Product>;

/// Discriminates which catalog collection a product lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ProductKind {
    /// [`Book`]
    Book,

    /// [`MusicAlbum`]
    MusicAlbum,

    /// [`SoftwareLicense`]
    SoftwareLicense,
}

impl ProductKind {
    /// Every kind, in tag order.
    pub const ALL: [Self; 3] = [Self::Book, Self::MusicAlbum, Self::SoftwareLicense];

    /// The wire tag for this kind.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Book => "book",
            Self::MusicAlbum => "musicalbum",
            Self::SoftwareLicense => "softwarelicense",
        }
    }
}

impl Display for ProductKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

/// An unrecognised product kind tag.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("invalid product kind: {0:?}")]
pub struct InvalidProductKind(pub String);

impl FromStr for ProductKind {
    type Err = InvalidProductKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim();

        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(tag))
            .ok_or_else(|| InvalidProductKind(s.to_string()))
    }
}

/// Weak reference to a catalog product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProductRef {
    /// Which collection to resolve against
    pub kind: ProductKind,

    /// Product identifier within that collection
    pub id: ProductUuid,
}

impl ProductRef {
    /// Create a reference from its parts.
    pub const fn new(kind: ProductKind, id: ProductUuid) -> Self {
        Self { kind, id }
    }
}

impl Display for ProductRef {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}:{}", self.kind, self.id)
    }
}

/// A catalog product of any kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Product {
    /// A book
    Book(Book),

    /// A music album
    MusicAlbum(MusicAlbum),

    /// A software license
    SoftwareLicense(SoftwareLicense),
}

impl Product {
    /// Build a validated product of the kind carried by `data`.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] when `data` fails validation.
    pub fn new(uuid: ProductUuid, data: ProductData, now: Timestamp) -> Result<Self, ValidationError> {
        Ok(match data {
            ProductData::Book(data) => Self::Book(Book::new(uuid, data, now)?),
            ProductData::MusicAlbum(data) => Self::MusicAlbum(MusicAlbum::new(uuid, data, now)?),
            ProductData::SoftwareLicense(data) => {
                Self::SoftwareLicense(SoftwareLicense::new(uuid, data, now)?)
            }
        })
    }

    /// The collection this product belongs to.
    pub const fn kind(&self) -> ProductKind {
        match self {
            Self::Book(_) => ProductKind::Book,
            Self::MusicAlbum(_) => ProductKind::MusicAlbum,
            Self::SoftwareLicense(_) => ProductKind::SoftwareLicense,
        }
    }

    /// Product identifier
    pub const fn uuid(&self) -> ProductUuid {
        match self {
            Self::Book(book) => book.uuid,
            Self::MusicAlbum(album) => album.uuid,
            Self::SoftwareLicense(license) => license.uuid,
        }
    }

    /// A reference that resolves back to this product.
    pub const fn reference(&self) -> ProductRef {
        ProductRef::new(self.kind(), self.uuid())
    }

    /// Unit price
    pub const fn price(&self) -> Decimal {
        match self {
            Self::Book(book) => book.price,
            Self::MusicAlbum(album) => album.price,
            Self::SoftwareLicense(license) => license.price,
        }
    }

    /// Unit weight, if the product has one.
    pub const fn weight(&self) -> Option<Decimal> {
        match self {
            Self::Book(book) => book.weight,
            Self::MusicAlbum(album) => album.weight,
            Self::SoftwareLicense(license) => license.weight,
        }
    }

    /// Page count for books, track count for albums.
    pub const fn count(&self) -> Option<u32> {
        match self {
            Self::Book(book) => Some(book.pages),
            Self::MusicAlbum(album) => Some(album.tracks),
            Self::SoftwareLicense(_) => None,
        }
    }

    /// Human-readable label
    pub fn display_name(&self) -> String {
        match self {
            Self::Book(book) => book.display_name(),
            Self::MusicAlbum(album) => album.display_name(),
            Self::SoftwareLicense(license) => license.display_name(),
        }
    }

    /// Text fields searched by [`crate::catalog::ProductFilter`].
    pub fn search_fields(&self) -> SmallVec<[&str; 2]> {
        match self {
            Self::Book(book) => smallvec![book.title.as_str(), book.author.as_str()],
            Self::MusicAlbum(album) => smallvec![album.title.as_str(), album.artist.as_str()],
            Self::SoftwareLicense(license) => smallvec![license.name.as_str()],
        }
    }

    /// When the product was added to the catalog
    pub const fn created_at(&self) -> Timestamp {
        match self {
            Self::Book(book) => book.created_at,
            Self::MusicAlbum(album) => album.created_at,
            Self::SoftwareLicense(license) => license.created_at,
        }
    }

    /// When the product was last written
    pub const fn updated_at(&self) -> Timestamp {
        match self {
            Self::Book(book) => book.updated_at,
            Self::MusicAlbum(album) => album.updated_at,
            Self::SoftwareLicense(license) => license.updated_at,
        }
    }
}

/// Write payload for any product kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProductData {
    /// Book payload
    Book(BookData),

    /// Music album payload
    MusicAlbum(MusicAlbumData),

    /// Software license payload
    SoftwareLicense(SoftwareLicenseData),
}

impl ProductData {
    /// The kind of product this payload writes.
    pub const fn kind(&self) -> ProductKind {
        match self {
            Self::Book(_) => ProductKind::Book,
            Self::MusicAlbum(_) => ProductKind::MusicAlbum,
            Self::SoftwareLicense(_) => ProductKind::SoftwareLicense,
        }
    }

    /// Validate the payload without building a record.
    ///
    /// # Errors
    ///
    /// Returns the first [`ValidationError`] found.
    pub fn validate(self) -> Result<Self, ValidationError> {
        Ok(match self {
            Self::Book(data) => Self::Book(data.validate()?),
            Self::MusicAlbum(data) => Self::MusicAlbum(data.validate()?),
            Self::SoftwareLicense(data) => Self::SoftwareLicense(data.validate()?),
        })
    }
}

impl From<BookData> for ProductData {
    fn from(data: BookData) -> Self {
        Self::Book(data)
    }
}

impl From<MusicAlbumData> for ProductData {
    fn from(data: MusicAlbumData) -> Self {
        Self::MusicAlbum(data)
    }
}

impl From<SoftwareLicenseData> for ProductData {
    fn from(data: SoftwareLicenseData) -> Self {
        Self::SoftwareLicense(data)
    }
}
