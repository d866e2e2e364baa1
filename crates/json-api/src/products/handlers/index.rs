//! Product Index Handler

use std::sync::Arc;

use rust_decimal::Decimal;
use salvo::{
    oapi::{ToParameters, ToSchema},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use shop::{
    catalog::{ProductFilter, TextField, TextFilter},
    products::ProductKind,
};

use crate::{
    extensions::*,
    products::{
        errors::into_status_error,
        models::{ProductResponse, parse_decimal},
    },
    state::State,
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductsResponse {
    /// The list of products
    pub products: Vec<ProductResponse>,
}

/// Listing filters. Bounds are inclusive; text `*_contains` filters ignore case.
#[derive(Debug, Default, Deserialize, ToParameters)]
#[salvo(parameters(default_parameter_in = Query))]
pub(crate) struct ProductQuery {
    /// Case-insensitive search across every text field
    q: Option<String>,

    /// Lowest price
    min_price: Option<String>,

    /// Highest price
    max_price: Option<String>,

    /// Lowest weight; products without a weight are excluded
    min_weight: Option<String>,

    /// Highest weight; products without a weight are excluded
    max_weight: Option<String>,

    /// Fewest pages (books)
    min_pages: Option<u32>,

    /// Most pages (books)
    max_pages: Option<u32>,

    /// Fewest tracks (albums)
    min_tracks: Option<u32>,

    /// Most tracks (albums)
    max_tracks: Option<u32>,

    /// Exact title (books, albums)
    title: Option<String>,

    /// Title substring (books, albums)
    title_contains: Option<String>,

    /// Exact author (books)
    author: Option<String>,

    /// Author substring (books)
    author_contains: Option<String>,

    /// Exact artist (albums)
    artist: Option<String>,

    /// Artist substring (albums)
    artist_contains: Option<String>,

    /// Exact name (licenses)
    name: Option<String>,

    /// Name substring (licenses)
    name_contains: Option<String>,
}

fn not_applicable(param: &str, kind: ProductKind) -> StatusError {
    StatusError::bad_request()
        .brief("Unsupported filter")
        .detail(format!("{param} does not apply to {kind}"))
}

fn parse_bound(value: Option<String>, context: &str) -> Result<Option<Decimal>, StatusError> {
    value.map(|value| parse_decimal(&value, context)).transpose()
}

impl ProductQuery {
    /// Build the catalog filter for a collection of `kind`.
    ///
    /// Page bounds only apply to books, track bounds only to albums, and each
    /// text field only to the kinds that carry it; anything else is a 400.
    fn into_filter(self, kind: ProductKind) -> Result<ProductFilter, StatusError> {
        let pages = (self.min_pages, self.max_pages);
        let tracks = (self.min_tracks, self.max_tracks);

        let (min_count, max_count) = match kind {
            ProductKind::Book => {
                if tracks != (None, None) {
                    return Err(not_applicable("min_tracks/max_tracks", kind));
                }

                pages
            }
            ProductKind::MusicAlbum => {
                if pages != (None, None) {
                    return Err(not_applicable("min_pages/max_pages", kind));
                }

                tracks
            }
            ProductKind::SoftwareLicense => {
                if pages != (None, None) {
                    return Err(not_applicable("min_pages/max_pages", kind));
                }

                if tracks != (None, None) {
                    return Err(not_applicable("min_tracks/max_tracks", kind));
                }

                (None, None)
            }
        };

        let mut filter = ProductFilter {
            search: self.q.filter(|search| !search.trim().is_empty()),
            min_price: parse_bound(self.min_price, "invalid min_price")?,
            max_price: parse_bound(self.max_price, "invalid max_price")?,
            min_weight: parse_bound(self.min_weight, "invalid min_weight")?,
            max_weight: parse_bound(self.max_weight, "invalid max_weight")?,
            min_count,
            max_count,
            ..ProductFilter::default()
        };

        let fields = [
            (TextField::Title, self.title, self.title_contains),
            (TextField::Author, self.author, self.author_contains),
            (TextField::Artist, self.artist, self.artist_contains),
            (TextField::Name, self.name, self.name_contains),
        ];

        for (field, exact, contains) in fields {
            let exact = exact.filter(|value| !value.is_empty());
            let contains = contains.filter(|value| !value.trim().is_empty());

            if exact.is_none() && contains.is_none() {
                continue;
            }

            if !field.applies_to(kind) {
                return Err(not_applicable(field.as_str(), kind));
            }

            if let Some(value) = exact {
                filter.text.push(TextFilter::exact(field, value));
            }

            if let Some(value) = contains {
                filter.text.push(TextFilter::contains(field, value));
            }
        }

        Ok(filter)
    }
}

/// Product Index Handler
///
/// Returns the collection's matching products ordered by UUID.
#[endpoint(
    tags("products"),
    summary = "List Products",
    responses(
        (status_code = StatusCode::OK, description = "Products"),
        (status_code = StatusCode::BAD_REQUEST, description = "Invalid or unsupported filter"),
    ),
)]
pub(crate) async fn handler(
    query: ProductQuery,
    depot: &mut Depot,
) -> Result<Json<ProductsResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let kind = depot.product_kind_or_500()?;

    let filter = query.into_filter(kind)?;

    let products = state
        .app
        .products
        .list_products(kind, filter)
        .await
        .map_err(into_status_error)?;

    Ok(Json(ProductsResponse {
        products: products.into_iter().map(Into::into).collect(),
    }))
}
