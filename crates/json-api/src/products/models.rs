//! Product request and response models
//!
//! Prices and weights travel as decimal strings so no precision is lost.

use rust_decimal::Decimal;
use salvo::{oapi::ToSchema, prelude::StatusError};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use shop::products::{
    BookData, MusicAlbumData, Product, ProductData, ProductKind, SoftwareLicenseData,
};

use crate::extensions::*;

/// The URL segment a kind's collection is mounted under.
pub(crate) const fn collection_path(kind: ProductKind) -> &'static str {
    match kind {
        ProductKind::Book => "books",
        ProductKind::MusicAlbum => "albums",
        ProductKind::SoftwareLicense => "licenses",
    }
}

/// Book fields
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct BookPayload {
    pub title: String,
    pub author: String,
    pub pages: u32,

    /// Unit price, e.g. `"10.00"`
    pub price: String,

    /// Unit weight in kilograms, e.g. `"0.300"`
    #[serde(default)]
    pub weight: Option<String>,
}

/// Music album fields
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct MusicAlbumPayload {
    pub artist: String,
    pub title: String,
    pub tracks: u32,
    pub price: String,

    #[serde(default)]
    pub weight: Option<String>,
}

/// Software license fields; weight must be absent or zero
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct SoftwareLicensePayload {
    pub name: String,
    pub price: String,

    #[serde(default)]
    pub weight: Option<String>,
}

/// Writable product fields for one kind.
#[derive(Debug, Clone)]
pub(crate) enum ProductPayload {
    Book(BookPayload),
    MusicAlbum(MusicAlbumPayload),
    SoftwareLicense(SoftwareLicensePayload),
}

impl ProductPayload {
    /// Read `body` as the fields of the collection's `kind`. Fields belonging
    /// to other kinds are ignored.
    pub(crate) fn from_json(kind: ProductKind, body: Value) -> Result<Self, StatusError> {
        match kind {
            ProductKind::Book => serde_json::from_value(body).map(Self::Book),
            ProductKind::MusicAlbum => serde_json::from_value(body).map(Self::MusicAlbum),
            ProductKind::SoftwareLicense => serde_json::from_value(body).map(Self::SoftwareLicense),
        }
        .or_400("Invalid product payload")
    }

    /// Parse the decimal fields.
    pub(crate) fn into_data(self) -> Result<ProductData, StatusError> {
        Ok(match self {
            Self::Book(book) => BookData {
                title: book.title,
                author: book.author,
                pages: book.pages,
                price: parse_decimal(&book.price, "invalid price")?,
                weight: parse_weight(book.weight)?,
            }
            .into(),
            Self::MusicAlbum(album) => MusicAlbumData {
                artist: album.artist,
                title: album.title,
                tracks: album.tracks,
                price: parse_decimal(&album.price, "invalid price")?,
                weight: parse_weight(album.weight)?,
            }
            .into(),
            Self::SoftwareLicense(license) => SoftwareLicenseData {
                name: license.name,
                price: parse_decimal(&license.price, "invalid price")?,
                weight: parse_weight(license.weight)?,
            }
            .into(),
        })
    }
}

/// Parse a decimal query or body value.
pub(crate) fn parse_decimal(value: &str, context: &str) -> Result<Decimal, StatusError> {
    value.trim().parse::<Decimal>().or_400(context)
}

fn parse_weight(weight: Option<String>) -> Result<Option<Decimal>, StatusError> {
    weight
        .map(|weight| parse_decimal(&weight, "invalid weight"))
        .transpose()
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductResponse {
    /// `book`, `musicalbum` or `softwarelicense`
    pub kind: String,

    /// The unique identifier of the product
    pub uuid: Uuid,

    /// Human readable name, e.g. `Book: Kindred by Octavia E. Butler`
    pub display_name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pages: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artist: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tracks: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Unit price
    pub price: String,

    /// Unit weight in kilograms
    pub weight: Option<String>,

    /// The date and time the product was created
    pub created_at: String,

    /// The date and time the product was last updated
    pub updated_at: String,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        let mut response = ProductResponse {
            kind: product.kind().to_string(),
            uuid: product.uuid().into(),
            display_name: product.display_name(),
            title: None,
            author: None,
            pages: None,
            artist: None,
            tracks: None,
            name: None,
            price: product.price().to_string(),
            weight: product.weight().as_ref().map(ToString::to_string),
            created_at: product.created_at().to_string(),
            updated_at: product.updated_at().to_string(),
        };

        match product {
            Product::Book(book) => {
                response.title = Some(book.title);
                response.author = Some(book.author);
                response.pages = Some(book.pages);
            }
            Product::MusicAlbum(album) => {
                response.artist = Some(album.artist);
                response.title = Some(album.title);
                response.tracks = Some(album.tracks);
            }
            Product::SoftwareLicense(license) => {
                response.name = Some(license.name);
            }
        }

        response
    }
}
