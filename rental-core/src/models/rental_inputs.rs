use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised when an input record fails domain validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    /// The purchase price must be non-negative.
    #[error("purchase price must be non-negative, got {0}")]
    NegativePurchasePrice(Decimal),

    /// The down payment must be non-negative.
    #[error("down payment must be non-negative, got {0}")]
    NegativeDownPayment(Decimal),

    /// The down payment cannot exceed the purchase price.
    #[error("down payment {down_payment} exceeds purchase price {purchase_price}")]
    DownPaymentExceedsPrice {
        down_payment: Decimal,
        purchase_price: Decimal,
    },

    /// The peak-season weekly rent must be non-negative.
    #[error("weekly rent must be non-negative, got {0}")]
    NegativeWeeklyRent(Decimal),

    /// The shoulder-season nightly rate must be non-negative.
    #[error("shoulder nightly rate must be non-negative, got {0}")]
    NegativeShoulderRate(Decimal),
}

/// Input parameters for one profitability evaluation.
///
/// These correspond to the values the presentation layer collects from the
/// user. The financed amount is not stored; it is derived via
/// [`RentalInputs::loan`] so that `loan + down_payment == purchase_price`
/// holds by construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RentalInputs {
    /// Total property acquisition cost.
    pub purchase_price: Decimal,

    /// Upfront equity contribution.
    pub down_payment: Decimal,

    /// Peak-season weekly rental rate.
    pub weekly_rent: Decimal,

    /// Peak-season weeks occupied.
    pub weeks_rented: u32,

    /// Off-peak nights booked.
    pub shoulder_nights: u32,

    /// Off-peak nightly rate.
    pub shoulder_rate: Decimal,
}

impl RentalInputs {
    /// Financed amount: purchase price minus down payment.
    pub fn loan(&self) -> Decimal {
        self.purchase_price - self.down_payment
    }

    /// Validates the record before any computation proceeds.
    ///
    /// # Errors
    ///
    /// Returns [`InputError`] if any monetary field is negative or the
    /// down payment exceeds the purchase price.
    ///
    /// # Example
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use rental_core::{InputError, RentalInputs};
    ///
    /// let inputs = RentalInputs {
    ///     purchase_price: dec!(2500000),
    ///     down_payment: dec!(3000000),
    ///     weekly_rent: dec!(15000),
    ///     weeks_rented: 11,
    ///     shoulder_nights: 20,
    ///     shoulder_rate: dec!(1000),
    /// };
    ///
    /// assert_eq!(
    ///     inputs.validate(),
    ///     Err(InputError::DownPaymentExceedsPrice {
    ///         down_payment: dec!(3000000),
    ///         purchase_price: dec!(2500000),
    ///     })
    /// );
    /// ```
    pub fn validate(&self) -> Result<(), InputError> {
        if self.purchase_price < Decimal::ZERO {
            return Err(InputError::NegativePurchasePrice(self.purchase_price));
        }
        if self.down_payment < Decimal::ZERO {
            return Err(InputError::NegativeDownPayment(self.down_payment));
        }
        if self.down_payment > self.purchase_price {
            return Err(InputError::DownPaymentExceedsPrice {
                down_payment: self.down_payment,
                purchase_price: self.purchase_price,
            });
        }
        if self.weekly_rent < Decimal::ZERO {
            return Err(InputError::NegativeWeeklyRent(self.weekly_rent));
        }
        if self.shoulder_rate < Decimal::ZERO {
            return Err(InputError::NegativeShoulderRate(self.shoulder_rate));
        }
        Ok(())
    }
}
