use std::{collections::BTreeMap, fmt};

use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

use super::{charge::BookingCharge, error::InvalidInputError};

/// Line items of a [`PriceBreakdown`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PriceCategory {
    Accommodation,
    Extras,
    ServiceFee,
    Taxes,
}

impl PriceCategory {
    pub const ALL: [PriceCategory; 4] = [
        PriceCategory::Accommodation,
        PriceCategory::Extras,
        PriceCategory::ServiceFee,
        PriceCategory::Taxes,
    ];

    /// Stable label used as the breakdown map key.
    pub fn label(self) -> &'static str {
        match self {
            PriceCategory::Accommodation => "Accommodation",
            PriceCategory::Extras => "Extras",
            PriceCategory::ServiceFee => "Service Fee",
            PriceCategory::Taxes => "Taxes",
        }
    }

    /// Translation key for the localized label.
    pub fn message_key(self) -> &'static str {
        match self {
            PriceCategory::Accommodation => "booking.breakdown.accommodation",
            PriceCategory::Extras => "booking.breakdown.extras",
            PriceCategory::ServiceFee => "booking.breakdown.serviceFee",
            PriceCategory::Taxes => "booking.breakdown.taxes",
        }
    }
}

impl fmt::Display for PriceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Result of pricing a booking.
///
/// All amounts are exact; nothing is rounded here. Use
/// [`round_for_display`] when presenting an amount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceBreakdown {
    pub subtotal: Decimal,
    pub extras_total: Decimal,
    pub before_tax: Decimal,
    pub tax_amount: Decimal,
    pub service_fee_amount: Decimal,
    pub total: Decimal,
    /// Category label -> amount. Keys are the [`PriceCategory`] labels.
    pub breakdown: BTreeMap<String, Decimal>,
}

impl PriceBreakdown {
    pub fn amount(&self, category: PriceCategory) -> Decimal {
        match category {
            PriceCategory::Accommodation => self.subtotal,
            PriceCategory::Extras => self.extras_total,
            PriceCategory::ServiceFee => self.service_fee_amount,
            PriceCategory::Taxes => self.tax_amount,
        }
    }
}

/// Price a booking.
///
/// ```
/// use rust_decimal_macros::dec;
/// use voyager::core::pricing::{BookingCharge, Extra, compute_price};
///
/// let charge = BookingCharge::new(dec!(2450), 1, 1)
///     .with_extra(Extra::new("insurance", dec!(120)))
///     .with_extra(Extra::new("flights", dec!(850)));
/// let price = compute_price(&charge).unwrap();
/// assert_eq!(price.before_tax, dec!(3420));
/// assert_eq!(price.total, dec!(3933));
/// ```
pub fn compute_price(charge: &BookingCharge) -> Result<PriceBreakdown, InvalidInputError> {
    charge.validate()?;

    let too_large =
        |field: &str| InvalidInputError::new(field, "amount cannot be priced exactly");

    let subtotal = exact_mul(charge.base_price, Decimal::from(charge.nights))
        .and_then(|v| exact_mul(v, Decimal::from(charge.guests)))
        .ok_or_else(|| too_large("basePrice"))?;

    let mut extras_total = Decimal::ZERO;
    for (index, extra) in charge.extras.iter().enumerate() {
        extras_total = exact_add(extras_total, extra.price)
            .ok_or_else(|| too_large(&format!("extras[{}].price", index)))?;
    }

    let before_tax = exact_add(subtotal, extras_total).ok_or_else(|| too_large("extras"))?;
    let tax_amount = exact_mul(before_tax, charge.tax_rate).ok_or_else(|| too_large("taxRate"))?;
    let service_fee_amount = exact_mul(before_tax, charge.service_fee_rate)
        .ok_or_else(|| too_large("serviceFeeRate"))?;
    let total = exact_add(before_tax, tax_amount)
        .and_then(|v| exact_add(v, service_fee_amount))
        .ok_or_else(|| too_large("basePrice"))?;

    let mut price = PriceBreakdown {
        subtotal,
        extras_total,
        before_tax,
        tax_amount,
        service_fee_amount,
        total,
        breakdown: BTreeMap::new(),
    };
    price.breakdown = PriceCategory::ALL
        .iter()
        .map(|&category| (category.label().to_string(), price.amount(category)))
        .collect();

    Ok(price)
}

/// `a * b`, or `None` when the product overflows or would be rounded.
///
/// `rust_decimal` keeps at most 28 significant digits and rounds quietly
/// past that; a rounded product comes back with a smaller scale than the
/// operands' scales add up to.
fn exact_mul(a: Decimal, b: Decimal) -> Option<Decimal> {
    let mul = |a: Decimal, b: Decimal| {
        let product = a.checked_mul(b)?;
        (a.is_zero() || b.is_zero() || product.scale() == a.scale() + b.scale())
            .then_some(product)
    };
    // Trailing zeros can push the scale past 28 without losing digits.
    mul(a, b).or_else(|| mul(a.normalize(), b.normalize()))
}

/// `a + b`, or `None` when the sum overflows or would be rounded.
fn exact_add(a: Decimal, b: Decimal) -> Option<Decimal> {
    let add = |a: Decimal, b: Decimal| {
        let sum = a.checked_add(b)?;
        (a.is_zero() || b.is_zero() || sum.scale() == a.scale().max(b.scale())).then_some(sum)
    };
    add(a, b).or_else(|| add(a.normalize(), b.normalize()))
}

/// Round an amount to cents for presentation.
///
/// This is the only rounding step in the pricing path.
pub fn round_for_display(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}
