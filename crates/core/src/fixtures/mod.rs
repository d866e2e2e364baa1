//! Fixtures
//!
//! YAML catalog seeds. A fixture file has up to three top-level maps,
//! `books`, `albums` and `licenses`, each keyed by a fixture name:
//!
//! ```yaml
//! books:
//!   dispossessed:
//!     title: The Dispossessed
//!     author: Ursula K. Le Guin
//!     pages: 387
//!     price: "10.00"
//!     weight: "0.300"
//! licenses:
//!   suite:
//!     name: Office Suite
//!     price: "49.00"
//! ```

use std::{fs, io, path::Path};

use jiff::Timestamp;
use rustc_hash::FxHashMap;
use serde::Deserialize;
use thiserror::Error;

use crate::{
    catalog::{Catalog, CatalogError},
    products::{ProductData, ProductRef, ProductUuid},
};

pub mod products;

pub use products::{BookFixture, MusicAlbumFixture, SoftwareLicenseFixture};

/// Errors raised while loading fixtures.
#[derive(Debug, Error)]
pub enum FixtureError {
    /// The fixture file could not be read.
    #[error("failed to read fixture: {0}")]
    Io(#[from] io::Error),

    /// The fixture file is not valid YAML for this shape.
    #[error("failed to parse fixture: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// A price or weight string is not a decimal number.
    #[error("invalid decimal: {0}")]
    InvalidDecimal(String),

    /// A product id is not a UUID.
    #[error("invalid uuid: {0}")]
    InvalidUuid(String),

    /// The same fixture name appears under more than one kind.
    #[error("duplicate fixture name: {0}")]
    DuplicateName(String),

    /// The catalog rejected a fixture product.
    #[error("fixture {name}: {source}")]
    Catalog {
        /// Fixture name
        name: String,

        /// Underlying catalog error
        #[source]
        source: CatalogError,
    },
}

/// A catalog fixture file
#[derive(Debug, Default, Deserialize)]
pub struct CatalogFixture {
    /// Fixture name -> book
    #[serde(default)]
    pub books: FxHashMap<String, BookFixture>,

    /// Fixture name -> music album
    #[serde(default)]
    pub albums: FxHashMap<String, MusicAlbumFixture>,

    /// Fixture name -> software license
    #[serde(default)]
    pub licenses: FxHashMap<String, SoftwareLicenseFixture>,
}

impl CatalogFixture {
    /// Parse a fixture from YAML text.
    ///
    /// # Errors
    ///
    /// Returns [`FixtureError::Yaml`] if the text does not parse.
    pub fn from_yaml(yaml: &str) -> Result<Self, FixtureError> {
        Ok(serde_norway::from_str(yaml)?)
    }

    /// Read and parse a fixture file.
    ///
    /// # Errors
    ///
    /// Returns [`FixtureError::Io`] if the file cannot be read, or
    /// [`FixtureError::Yaml`] if it does not parse.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, FixtureError> {
        Self::from_yaml(&fs::read_to_string(path)?)
    }

    /// Number of products in the fixture.
    pub fn len(&self) -> usize {
        self.books.len() + self.albums.len() + self.licenses.len()
    }

    /// Whether the fixture has no products.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Create every fixture product in `catalog`.
    ///
    /// Returns the reference each fixture name was stored under. Products
    /// created before a failing fixture stay in the catalog.
    ///
    /// # Errors
    ///
    /// Returns the first conversion or catalog error encountered.
    pub fn load_into(
        self,
        catalog: &mut Catalog,
        now: Timestamp,
    ) -> Result<FxHashMap<String, ProductRef>, FixtureError> {
        let mut entries: Vec<(String, (ProductUuid, ProductData))> = Vec::with_capacity(self.len());

        for (name, fixture) in self.books {
            entries.push((name, fixture.try_into()?));
        }

        for (name, fixture) in self.albums {
            entries.push((name, fixture.try_into()?));
        }

        for (name, fixture) in self.licenses {
            entries.push((name, fixture.try_into()?));
        }

        let mut refs = FxHashMap::default();

        for (name, (uuid, data)) in entries {
            if refs.contains_key(&name) {
                return Err(FixtureError::DuplicateName(name));
            }

            let product = match catalog.create(uuid, data, now) {
                Ok(product) => product,
                Err(source) => return Err(FixtureError::Catalog { name, source }),
            };

            refs.insert(name, product.reference());
        }

        Ok(refs)
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use testresult::TestResult;

    use crate::{products::ProductKind, resolver::ProductResolver};

    use super::*;

    const YAML: &str = r#"
books:
  dispossessed:
    title: The Dispossessed
    author: Ursula K. Le Guin
    pages: 387
    price: "10.00"
    weight: "0.300"
albums:
  blue:
    artist: Joni Mitchell
    title: Blue
    tracks: 10
    price: "9.99"
    weight: "0.100"
licenses:
  suite:
    name: Office Suite
    price: "49.00"
"#;

    #[test]
    fn loads_every_kind() -> TestResult {
        let mut catalog = Catalog::new();
        let refs = CatalogFixture::from_yaml(YAML)?.load_into(&mut catalog, Timestamp::UNIX_EPOCH)?;

        assert_eq!(catalog.len(), 3);

        let book = refs.get("dispossessed").copied().ok_or("missing book")?;
        let license = refs.get("suite").copied().ok_or("missing license")?;

        assert_eq!(book.kind, ProductKind::Book);
        assert_eq!(catalog.resolve(book)?.weight(), Some(Decimal::new(300, 3)));
        assert_eq!(catalog.resolve(license)?.display_name(), "License: Office Suite");

        Ok(())
    }

    #[test]
    fn missing_sections_default_to_empty() -> TestResult {
        let fixture = CatalogFixture::from_yaml("books: {}\n")?;

        assert!(fixture.is_empty());

        Ok(())
    }

    #[test]
    fn invalid_product_names_the_fixture() -> TestResult {
        let fixture = CatalogFixture::from_yaml(
            r#"
licenses:
  heavy:
    name: Boxed Suite
    price: "49.00"
    weight: "1.5"
"#,
        )?;

        let result = fixture.load_into(&mut Catalog::new(), Timestamp::UNIX_EPOCH);

        assert!(matches!(result, Err(FixtureError::Catalog { name, .. }) if name == "heavy"));

        Ok(())
    }

    #[test]
    fn duplicate_names_across_kinds_are_rejected() -> TestResult {
        let fixture = CatalogFixture::from_yaml(
            r#"
books:
  same:
    title: A
    author: B
    pages: 1
    price: "1.00"
albums:
  same:
    artist: C
    title: D
    tracks: 1
    price: "1.00"
"#,
        )?;

        let result = fixture.load_into(&mut Catalog::new(), Timestamp::UNIX_EPOCH);

        assert!(matches!(result, Err(FixtureError::DuplicateName(name)) if name == "same"));

        Ok(())
    }
}
