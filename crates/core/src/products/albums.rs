//! Music Albums

use jiff::Timestamp;
use rust_decimal::Decimal;

use crate::products::{ProductUuid, ValidationError, validation};

/// Music album record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MusicAlbum {
    /// Album identifier
    pub uuid: ProductUuid,

    /// Recording artist
    pub artist: String,

    /// Album title
    pub title: String,

    /// Number of tracks
    pub tracks: u32,

    /// Unit price
    pub price: Decimal,

    /// Shipping weight in kilograms
    pub weight: Option<Decimal>,

    /// When the album was added to the catalog
    pub created_at: Timestamp,

    /// When the album was last written
    pub updated_at: Timestamp,
}

/// Music album write payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MusicAlbumData {
    /// Recording artist
    pub artist: String,

    /// Album title
    pub title: String,

    /// Number of tracks
    pub tracks: u32,

    /// Unit price
    pub price: Decimal,

    /// Shipping weight in kilograms
    pub weight: Option<Decimal>,
}

impl MusicAlbumData {
    /// Validate the payload, returning it with normalised fields.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] for blank text, a zero track count or an
    /// out-of-range price or weight.
    pub fn validate(self) -> Result<Self, ValidationError> {
        Ok(Self {
            artist: validation::text("artist", self.artist)?,
            title: validation::text("title", self.title)?,
            tracks: validation::positive("tracks", self.tracks)?,
            price: validation::price(self.price)?,
            weight: validation::weight(self.weight)?,
        })
    }
}

impl MusicAlbum {
    /// Build a validated album.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] when `data` fails validation.
    pub fn new(
        uuid: ProductUuid,
        data: MusicAlbumData,
        now: Timestamp,
    ) -> Result<Self, ValidationError> {
        let data = data.validate()?;

        Ok(Self {
            uuid,
            artist: data.artist,
            title: data.title,
            tracks: data.tracks,
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
    /// Returns a [`ValidationError`] when `data` fails validation; the album is left untouched.
    pub fn replace(&mut self, data: MusicAlbumData, now: Timestamp) -> Result<(), ValidationError> {
        let data = data.validate()?;

        self.artist = data.artist;
        self.title = data.title;
        self.tracks = data.tracks;
        self.price = data.price;
        self.weight = data.weight;
        self.updated_at = now;

        Ok(())
    }

    /// Human-readable label
    pub fn display_name(&self) -> String {
        format!("Album: {} by {}", self.title, self.artist)
    }
}
