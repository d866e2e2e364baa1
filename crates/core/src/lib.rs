//! Shop
//!
//! Catalog and cart aggregation core for a small shop: books, music albums
//! and software licenses held by carts as weak `(kind, id)` references, with
//! totals computed against a caller-supplied product resolver.

pub mod carts;
pub mod catalog;
pub mod fixtures;
pub mod prelude;
pub mod products;
pub mod resolver;
pub mod uuids;
