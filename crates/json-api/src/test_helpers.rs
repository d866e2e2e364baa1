//! Test helpers.

use std::sync::Arc;

use jiff::Timestamp;
use rust_decimal::Decimal;
use salvo::{affix_state::inject, prelude::*};
use testresult::TestResult;

use shop::{
    carts::{Cart, CartSnapshot, CartUuid, LineItem},
    catalog::Catalog,
    products::{
        BookData, MusicAlbumData, Product, ProductUuid, SoftwareLicenseData, ValidationError,
    },
};
use shop_app::{
    context::AppContext,
    domain::{carts::MockCartsService, products::MockProductsService},
};

use crate::state::State;

fn strict_products_mock() -> MockProductsService {
    let mut products = MockProductsService::new();

    products.expect_list_products().never();
    products.expect_get_product().never();
    products.expect_create_product().never();
    products.expect_update_product().never();
    products.expect_delete_product().never();

    products
}

fn strict_carts_mock() -> MockCartsService {
    let mut carts = MockCartsService::new();

    carts.expect_list_carts().never();
    carts.expect_create_cart().never();
    carts.expect_get_cart().never();
    carts.expect_delete_cart().never();
    carts.expect_add_item().never();
    carts.expect_remove_item().never();
    carts.expect_clear_cart().never();

    carts
}

fn state(products: MockProductsService, carts: MockCartsService) -> Arc<State> {
    State::from_app_context(AppContext {
        products: Arc::new(products),
        carts: Arc::new(carts),
    })
}

pub(crate) fn products_service(products: MockProductsService, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state(products, strict_carts_mock())))
            .push(route),
    )
}

pub(crate) fn carts_service(carts: MockCartsService, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state(strict_products_mock(), carts)))
            .push(route),
    )
}

pub(crate) fn make_book(
    uuid: ProductUuid,
    title: &str,
    price: Decimal,
) -> Result<Product, ValidationError> {
    Product::new(
        uuid,
        BookData {
            title: title.to_string(),
            author: "Octavia E. Butler".to_string(),
            pages: 264,
            price,
            weight: Some(Decimal::new(300, 3)),
        }
        .into(),
        Timestamp::UNIX_EPOCH,
    )
}

pub(crate) fn make_album(
    uuid: ProductUuid,
    title: &str,
    price: Decimal,
) -> Result<Product, ValidationError> {
    Product::new(
        uuid,
        MusicAlbumData {
            artist: "Joni Mitchell".to_string(),
            title: title.to_string(),
            tracks: 10,
            price,
            weight: Some(Decimal::new(100, 3)),
        }
        .into(),
        Timestamp::UNIX_EPOCH,
    )
}

pub(crate) fn make_license(
    uuid: ProductUuid,
    name: &str,
    price: Decimal,
) -> Result<Product, ValidationError> {
    Product::new(
        uuid,
        SoftwareLicenseData {
            name: name.to_string(),
            price,
            weight: None,
        }
        .into(),
        Timestamp::UNIX_EPOCH,
    )
}

/// An empty cart snapshot.
pub(crate) fn make_cart(uuid: CartUuid) -> CartSnapshot {
    Cart::new(uuid, Timestamp::UNIX_EPOCH).snapshot(&Catalog::new())
}

/// A cart holding `quantity` of a 10.00 / 0.300 book.
pub(crate) fn cart_with_book(uuid: CartUuid, quantity: u32) -> TestResult<(LineItem, CartSnapshot)> {
    let mut catalog = Catalog::new();
    let mut cart = Cart::new(uuid, Timestamp::UNIX_EPOCH);

    let product = catalog
        .create(
            ProductUuid::new(),
            BookData {
                title: "Kindred".to_string(),
                author: "Octavia E. Butler".to_string(),
                pages: 264,
                price: Decimal::new(1000, 2),
                weight: Some(Decimal::new(300, 3)),
            }
            .into(),
            Timestamp::UNIX_EPOCH,
        )?
        .reference();

    let item = cart.add(&catalog, product, quantity, Timestamp::UNIX_EPOCH)?;

    Ok((item, cart.snapshot(&catalog)))
}
