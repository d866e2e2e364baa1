//! Cart totals

use rust_decimal::{Decimal, RoundingStrategy};
use smallvec::SmallVec;

use crate::{
    carts::LineItem,
    products::{
        Product, ProductRef,
        validation::{PRICE_SCALE, WEIGHT_SCALE},
    },
};

/// Aggregate price and weight of a cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Totals {
    /// Σ quantity × unit price, rounded to two places
    pub price: Decimal,

    /// Σ quantity × unit weight (absent weight counts as zero), rounded to three places
    pub weight: Decimal,

    /// Line items whose product no longer resolves; they contribute nothing
    pub dangling: SmallVec<[ProductRef; 1]>,
}

impl Default for Totals {
    fn default() -> Self {
        Self {
            price: round(Decimal::ZERO, PRICE_SCALE),
            weight: round(Decimal::ZERO, WEIGHT_SCALE),
            dangling: SmallVec::new(),
        }
    }
}

impl Totals {
    /// Whether every line item resolved.
    pub fn is_complete(&self) -> bool {
        self.dangling.is_empty()
    }
}

/// Accumulates unrounded sums; rounding happens once in [`TotalsBuilder::finish`].
#[derive(Debug, Default)]
pub(crate) struct TotalsBuilder {
    price: Decimal,
    weight: Decimal,
    dangling: SmallVec<[ProductRef; 1]>,
}

impl TotalsBuilder {
    pub(crate) fn push(&mut self, item: &LineItem, product: Option<&Product>) {
        let Some(product) = product else {
            self.dangling.push(item.product());

            return;
        };

        let quantity = Decimal::from(item.quantity());

        self.price += quantity * product.price();
        self.weight += quantity * product.weight().unwrap_or(Decimal::ZERO);
    }

    pub(crate) fn finish(self) -> Totals {
        Totals {
            price: round(self.price, PRICE_SCALE),
            weight: round(self.weight, WEIGHT_SCALE),
            dangling: self.dangling,
        }
    }
}

/// Round half away from zero and pad to exactly `scale` fractional digits.
fn round(value: Decimal, scale: u32) -> Decimal {
    let mut rounded = value.round_dp_with_strategy(scale, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(scale);

    rounded
}
