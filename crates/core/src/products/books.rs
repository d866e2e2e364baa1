//! Books

use jiff::Timestamp;
use rust_decimal::Decimal;

use crate::products::{ProductUuid, ValidationError, validation};

/// Book record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    /// Book identifier
    pub uuid: ProductUuid,

    /// Book title
    pub title: String,

    /// Book author
    pub author: String,

    /// Number of pages
    pub pages: u32,

    /// Unit price
    pub price: Decimal,

    /// Shipping weight in kilograms
    pub weight: Option<Decimal>,

    /// When the book was added to the catalog
    pub created_at: Timestamp,

    /// When the book was last written
    pub updated_at: Timestamp,
}

/// Book write payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookData {
    /// Book title
    pub title: String,

    /// Book author
    pub author: String,

    /// Number of pages
    pub pages: u32,

    /// Unit price
    pub price: Decimal,

    /// Shipping weight in kilograms
    pub weight: Option<Decimal>,
}

impl BookData {
    /// Validate the payload, returning it with normalised fields.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] for blank text, a zero page count or an
    /// out-of-range price or weight.
    pub fn validate(self) -> Result<Self, ValidationError> {
        Ok(Self {
            title: validation::text("title", self.title)?,
            author: validation::text("author", self.author)?,
            pages: validation::positive("pages", self.pages)?,
            price: validation::price(self.price)?,
            weight: validation::weight(self.weight)?,
        })
    }
}

impl Book {
    /// Build a validated book.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] when `data` fails validation.
    pub fn new(uuid: ProductUuid, data: BookData, now: Timestamp) -> Result<Self, ValidationError> {
        let data = data.validate()?;

        Ok(Self {
            uuid,
            title: data.title,
            author: data.author,
            pages: data.pages,
            price: data.price,
            weight: data.weight,
            created_at: now,
            updated_at: now,
        })
    }

    /// Replace every writable field.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] when `data` fails validation; the book is left untouched.
    pub fn replace(&mut self, data: BookData, now: Timestamp) -> Result<(), ValidationError> {
        let data = data.validate()?;

        self.title = data.title;
        self.author = data.author;
        self.pages = data.pages;
        self.price = data.price;
        self.weight = data.weight;
        self.updated_at = now;

        Ok(())
    }

    /// Human-readable label
    pub fn display_name(&self) -> String {
        format!("Book: {} by {}", self.title, self.author)
    }
}
