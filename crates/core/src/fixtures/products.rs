//! Product Fixtures

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::{
    fixtures::FixtureError,
    products::{BookData, MusicAlbumData, ProductData, ProductUuid, SoftwareLicenseData},
};

/// Book Fixture
#[derive(Debug, Deserialize)]
pub struct BookFixture {
    /// Fixed product id; generated when absent
    #[serde(default)]
    pub uuid: Option<String>,

    /// Book title
    pub title: String,

    /// Book author
    pub author: String,

    /// Page count
    pub pages: u32,

    /// Unit price (e.g. "10.00")
    pub price: String,

    /// Unit weight (e.g. "0.300")
    #[serde(default)]
    pub weight: Option<String>,
}

/// Music Album Fixture
#[derive(Debug, Deserialize)]
pub struct MusicAlbumFixture {
    /// Fixed product id; generated when absent
    #[serde(default)]
    pub uuid: Option<String>,

    /// Recording artist
    pub artist: String,

    /// Album title
    pub title: String,

    /// Track count
    pub tracks: u32,

    /// Unit price (e.g. "9.99")
    pub price: String,

    /// Unit weight (e.g. "0.100")
    #[serde(default)]
    pub weight: Option<String>,
}

/// Software License Fixture
#[derive(Debug, Deserialize)]
pub struct SoftwareLicenseFixture {
    /// Fixed product id; generated when absent
    #[serde(default)]
    pub uuid: Option<String>,

    /// License name
    pub name: String,

    /// Unit price (e.g. "49.00")
    pub price: String,

    /// Unit weight; must be absent or zero
    #[serde(default)]
    pub weight: Option<String>,
}

impl TryFrom<BookFixture> for (ProductUuid, ProductData) {
    type Error = FixtureError;

    fn try_from(fixture: BookFixture) -> Result<Self, Self::Error> {
        let data = BookData {
            title: fixture.title,
            author: fixture.author,
            pages: fixture.pages,
            price: parse_decimal(&fixture.price)?,
            weight: fixture.weight.as_deref().map(parse_decimal).transpose()?,
        };

        Ok((parse_uuid(fixture.uuid.as_deref())?, data.into()))
    }
}

impl TryFrom<MusicAlbumFixture> for (ProductUuid, ProductData) {
    type Error = FixtureError;

    fn try_from(fixture: MusicAlbumFixture) -> Result<Self, Self::Error> {
        let data = MusicAlbumData {
            artist: fixture.artist,
            title: fixture.title,
            tracks: fixture.tracks,
            price: parse_decimal(&fixture.price)?,
            weight: fixture.weight.as_deref().map(parse_decimal).transpose()?,
        };

        Ok((parse_uuid(fixture.uuid.as_deref())?, data.into()))
    }
}

impl TryFrom<SoftwareLicenseFixture> for (ProductUuid, ProductData) {
    type Error = FixtureError;

    fn try_from(fixture: SoftwareLicenseFixture) -> Result<Self, Self::Error> {
        let data = SoftwareLicenseData {
            name: fixture.name,
            price: parse_decimal(&fixture.price)?,
            weight: fixture.weight.as_deref().map(parse_decimal).transpose()?,
        };

        Ok((parse_uuid(fixture.uuid.as_deref())?, data.into()))
    }
}

/// Parse a decimal string (e.g. "0.300").
///
/// # Errors
///
/// Returns [`FixtureError::InvalidDecimal`] if the string is not a decimal number.
pub fn parse_decimal(s: &str) -> Result<Decimal, FixtureError> {
    Decimal::from_str(s.trim()).map_err(|_err| FixtureError::InvalidDecimal(s.to_string()))
}

fn parse_uuid(s: Option<&str>) -> Result<ProductUuid, FixtureError> {
    s.map_or_else(
        || Ok(ProductUuid::new()),
        |s| ProductUuid::from_str(s.trim()).map_err(|_err| FixtureError::InvalidUuid(s.to_string())),
    )
}
