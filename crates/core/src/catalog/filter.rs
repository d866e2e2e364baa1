//! Catalog listing filters

use std::fmt::{Display, Formatter, Result as FmtResult};

use rust_decimal::Decimal;
use smallvec::SmallVec;

use crate::products::{Product, ProductKind};

/// A named text field a [`TextFilter`] can target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextField {
    /// Book and album title
    Title,

    /// Book author
    Author,

    /// Album artist
    Artist,

    /// License name
    Name,
}

impl TextField {
    /// Whether products of `kind` carry this field.
    pub const fn applies_to(self, kind: ProductKind) -> bool {
        matches!(
            (self, kind),
            (Self::Title, ProductKind::Book | ProductKind::MusicAlbum)
                | (Self::Author, ProductKind::Book)
                | (Self::Artist, ProductKind::MusicAlbum)
                | (Self::Name, ProductKind::SoftwareLicense)
        )
    }

    /// Query parameter stem for this field.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Author => "author",
            Self::Artist => "artist",
            Self::Name => "name",
        }
    }

    fn value(self, product: &Product) -> Option<&str> {
        match (self, product) {
            (Self::Title, Product::Book(book)) => Some(&book.title),
            (Self::Title, Product::MusicAlbum(album)) => Some(&album.title),
            (Self::Author, Product::Book(book)) => Some(&book.author),
            (Self::Artist, Product::MusicAlbum(album)) => Some(&album.artist),
            (Self::Name, Product::SoftwareLicense(license)) => Some(&license.name),
            _ => None,
        }
    }
}

impl Display for TextField {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

/// How a [`TextFilter`] compares its value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextMatch {
    /// Case-sensitive equality
    Exact(String),

    /// Case-insensitive substring
    Contains(String),
}

/// A condition on a single named text field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextFilter {
    /// Field to inspect
    pub field: TextField,

    /// Comparison applied to the field
    pub matcher: TextMatch,
}

impl TextFilter {
    /// Exact match on `field`.
    pub fn exact(field: TextField, value: impl Into<String>) -> Self {
        Self {
            field,
            matcher: TextMatch::Exact(value.into()),
        }
    }

    /// Case-insensitive substring match on `field`.
    pub fn contains(field: TextField, value: impl Into<String>) -> Self {
        Self {
            field,
            matcher: TextMatch::Contains(value.into()),
        }
    }

    /// Products without the field never match.
    pub fn matches(&self, product: &Product) -> bool {
        let Some(value) = self.field.value(product) else {
            return false;
        };

        match &self.matcher {
            TextMatch::Exact(expected) => value == expected,
            TextMatch::Contains(needle) => value.to_lowercase().contains(&needle.to_lowercase()),
        }
    }
}

/// Narrows a catalog listing.
///
/// Every bound is inclusive. A product lacking the bounded attribute (no
/// weight, or no page/track count) fails any bound placed on it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductFilter {
    /// Case-insensitive substring matched against the product's text fields
    pub search: Option<String>,

    /// Inclusive lower price bound
    pub min_price: Option<Decimal>,

    /// Inclusive upper price bound
    pub max_price: Option<Decimal>,

    /// Inclusive lower weight bound
    pub min_weight: Option<Decimal>,

    /// Inclusive upper weight bound
    pub max_weight: Option<Decimal>,

    /// Inclusive lower bound on pages (books) or tracks (albums)
    pub min_count: Option<u32>,

    /// Inclusive upper bound on pages (books) or tracks (albums)
    pub max_count: Option<u32>,

    /// Per-field conditions, all of which must hold
    pub text: SmallVec<[TextFilter; 2]>,
}

fn within<T: PartialOrd + Copy>(value: Option<T>, min: Option<T>, max: Option<T>) -> bool {
    match value {
        Some(value) => min.is_none_or(|min| value >= min) && max.is_none_or(|max| value <= max),
        None => min.is_none() && max.is_none(),
    }
}

impl ProductFilter {
    /// Whether `product` passes every configured condition.
    pub fn matches(&self, product: &Product) -> bool {
        if !within(Some(product.price()), self.min_price, self.max_price) {
            return false;
        }

        if !within(product.weight(), self.min_weight, self.max_weight) {
            return false;
        }

        if !within(product.count(), self.min_count, self.max_count) {
            return false;
        }

        if !self.text.iter().all(|condition| condition.matches(product)) {
            return false;
        }

        match self.search.as_deref().map(str::trim) {
            None | Some("") => true,
            Some(needle) => {
                let needle = needle.to_lowercase();

                product
                    .search_fields()
                    .iter()
                    .any(|field| field.to_lowercase().contains(&needle))
            }
        }
    }
}
