use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use super::error::InvalidInputError;

/// Tax applied to the pre-tax amount when the caller does not override it.
pub const DEFAULT_TAX_RATE: Decimal = dec!(0.10);

/// Service fee applied to the pre-tax amount when the caller does not override it.
pub const DEFAULT_SERVICE_FEE_RATE: Decimal = dec!(0.05);

/// An optional priced add-on (insurance, flights, transfers, tours, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Extra {
    pub name: String,
    pub price: Decimal,
}

impl Extra {
    pub fn new(name: impl Into<String>, price: Decimal) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }
}

impl FromStr for Extra {
    type Err = InvalidInputError;

    /// Parse a `name=price` pair.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some((name, price)) = s.split_once('=') else {
            return Err(InvalidInputError::new(
                "extras",
                format!("expected NAME=PRICE, got \"{}\"", s),
            ));
        };
        let name = name.trim();
        if name.is_empty() {
            return Err(InvalidInputError::new("extras", "extra name is empty"));
        }
        let price = Decimal::from_str(price.trim()).map_err(|e| {
            InvalidInputError::new(format!("extras.{}", name), format!("bad price: {}", e))
        })?;
        Ok(Extra::new(name, price))
    }
}

/// Everything needed to price one booking.
///
/// Rates are fractions (`0.10` is ten percent). The struct is plain data:
/// nothing is checked until [`compute_price`](super::compute_price) runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingCharge {
    /// Price per guest per night.
    pub base_price: Decimal,
    pub nights: u32,
    pub guests: u32,
    #[serde(default)]
    pub extras: Vec<Extra>,
    #[serde(default = "default_tax_rate")]
    pub tax_rate: Decimal,
    #[serde(default = "default_service_fee_rate")]
    pub service_fee_rate: Decimal,
}

fn default_tax_rate() -> Decimal {
    DEFAULT_TAX_RATE
}

fn default_service_fee_rate() -> Decimal {
    DEFAULT_SERVICE_FEE_RATE
}

impl BookingCharge {
    pub fn new(base_price: Decimal, nights: u32, guests: u32) -> Self {
        Self {
            base_price,
            nights,
            guests,
            extras: Vec::new(),
            tax_rate: DEFAULT_TAX_RATE,
            service_fee_rate: DEFAULT_SERVICE_FEE_RATE,
        }
    }

    pub fn with_extra(mut self, extra: Extra) -> Self {
        self.extras.push(extra);
        self
    }

    pub fn with_extras(mut self, extras: impl IntoIterator<Item = Extra>) -> Self {
        self.extras.extend(extras);
        self
    }

    pub fn with_tax_rate(mut self, rate: Decimal) -> Self {
        self.tax_rate = rate;
        self
    }

    pub fn with_service_fee_rate(mut self, rate: Decimal) -> Self {
        self.service_fee_rate = rate;
        self
    }

    /// Check every precondition, reporting the first violated field.
    pub fn validate(&self) -> Result<(), InvalidInputError> {
        if self.base_price < Decimal::ZERO {
            return Err(InvalidInputError::new("basePrice", "must not be negative"));
        }
        if self.nights == 0 {
            return Err(InvalidInputError::new("nights", "must be at least 1"));
        }
        if self.guests == 0 {
            return Err(InvalidInputError::new("guests", "must be at least 1"));
        }
        for (index, extra) in self.extras.iter().enumerate() {
            if extra.price < Decimal::ZERO {
                return Err(InvalidInputError::new(
                    format!("extras[{}].price", index),
                    format!("price of \"{}\" must not be negative", extra.name),
                ));
            }
        }
        check_rate("taxRate", self.tax_rate)?;
        check_rate("serviceFeeRate", self.service_fee_rate)?;
        Ok(())
    }
}

/// Rates live in `[0, 1)`.
pub(crate) fn check_rate(field: &str, rate: Decimal) -> Result<(), InvalidInputError> {
    if rate < Decimal::ZERO || rate >= Decimal::ONE {
        return Err(InvalidInputError::new(
            field,
            format!("{} is outside [0, 1)", rate),
        ));
    }
    Ok(())
}

/// Number of nights between two calendar dates.
///
/// The order of the dates does not matter; a same-day range is rejected
/// because a booking needs at least one night.
pub fn stay_nights(check_in: NaiveDate, check_out: NaiveDate) -> Result<u32, InvalidInputError> {
    let days = (check_out - check_in).num_days().unsigned_abs();
    if days == 0 {
        return Err(InvalidInputError::new(
            "nights",
            "check-in and check-out are the same day",
        ));
    }
    u32::try_from(days).map_err(|_| InvalidInputError::new("nights", "stay is too long"))
}
