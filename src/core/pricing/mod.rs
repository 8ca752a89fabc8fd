//! Booking price calculation.
//!
//! Turns a [`BookingCharge`] into a [`PriceBreakdown`] with exact decimal
//! arithmetic. Nothing in this module rounds except [`round_for_display`]
//! and the cent split of [`installment_plan`].

mod breakdown;
mod charge;
mod error;
mod installments;

pub use breakdown::{PriceBreakdown, PriceCategory, compute_price, round_for_display};
pub use charge::{
    BookingCharge, DEFAULT_SERVICE_FEE_RATE, DEFAULT_TAX_RATE, Extra, stay_nights,
};
pub(crate) use charge::check_rate;
pub use error::InvalidInputError;
pub use installments::{
    DEFAULT_INSTALLMENT_INTERVAL_DAYS, Installment, InstallmentStatus, installment_plan,
};
