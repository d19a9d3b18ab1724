//! First-year tax write-off estimate for a vacation rental purchase.
//!
//! This module estimates the deductions an owner could claim in the first
//! year of ownership: depreciation on the structure, the interest portion
//! of year-one mortgage payments, and one-time closing costs. All figures
//! are rough heuristics, not tax advice.
//!
//! # Estimate structure
//!
//! | Item                | Formula                                           |
//! |---------------------|---------------------------------------------------|
//! | Structure value     | purchase_price × structure_value_factor           |
//! | Annual depreciation | structure_value ÷ depreciation_period_years       |
//! | Mortgage interest   | mortgage × mortgage_interest_share                |
//! | Closing costs       | purchase_price × closing_cost_rate                |
//! | Total deductions    | depreciation + interest + closing costs           |
//!
//! Depreciation and interest are reported in whole dollars; closing costs
//! keep cents.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use rental_core::calculations::{DeductionConfig, DeductionSchedule};
//! use rental_core::RentalAssumptions;
//!
//! let config = DeductionConfig::from_assumptions(&RentalAssumptions::default());
//! let schedule = DeductionSchedule::new(config);
//!
//! // $2.5M purchase carrying $140,625 of annual debt service
//! let estimate = schedule.calculate(dec!(2500000.00), dec!(140625.00)).unwrap();
//!
//! assert_eq!(estimate.structure_value, dec!(2125000.00));
//! assert_eq!(estimate.annual_depreciation, dec!(77273));
//! assert_eq!(estimate.mortgage_interest, dec!(95625));
//! assert_eq!(estimate.closing_costs, dec!(50000.00));
//! assert_eq!(estimate.total_deductions, dec!(222898.00));
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::calculations::common::{round_half_up, round_whole};
use crate::models::RentalAssumptions;

/// Errors that can occur during deduction estimate calculations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DeductionError {
    /// The structure value factor must be between 0 and 1 (exclusive of 0).
    #[error("structure value factor must be between 0 and 1, got {0}")]
    InvalidStructureValueFactor(Decimal),

    /// The depreciation period must be strictly positive (it is a divisor).
    #[error("depreciation period must be positive, got {0}")]
    InvalidDepreciationPeriod(Decimal),

    /// The mortgage interest share must be between 0 and 1.
    #[error("mortgage interest share must be between 0 and 1, got {0}")]
    InvalidMortgageInterestShare(Decimal),

    /// The closing cost rate must be between 0 and 1.
    #[error("closing cost rate must be between 0 and 1, got {0}")]
    InvalidClosingCostRate(Decimal),
}

/// Configuration parameters for the deduction estimate.
///
/// These values are typically obtained from [`RentalAssumptions`]. The
/// structure value factor is configurable because the heuristic varies by
/// market; the default treats 85% of the purchase price as depreciable
/// structure (the remainder being land).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeductionConfig {
    /// Depreciable structure as a fraction of purchase price.
    pub structure_value_factor: Decimal,

    /// Straight-line depreciation period, in years.
    ///
    /// Residential rental property conventionally depreciates over 27.5
    /// years.
    pub depreciation_period_years: Decimal,

    /// Share of year-one mortgage payments attributable to interest.
    ///
    /// Early in an amortization schedule most of each payment is
    /// interest; roughly 68% is used as the year-one estimate.
    pub mortgage_interest_share: Decimal,

    /// One-time closing costs as a fraction of purchase price.
    pub closing_cost_rate: Decimal,
}

impl DeductionConfig {
    /// Creates a new configuration from a [`RentalAssumptions`].
    pub fn from_assumptions(assumptions: &RentalAssumptions) -> Self {
        Self {
            structure_value_factor: assumptions.structure_value_factor,
            depreciation_period_years: assumptions.depreciation_period_years,
            mortgage_interest_share: assumptions.mortgage_interest_share,
            closing_cost_rate: assumptions.closing_cost_rate,
        }
    }

    /// Validates the configuration values.
    ///
    /// # Errors
    ///
    /// Returns [`DeductionError`] if:
    /// - `structure_value_factor` is not in (0, 1]
    /// - `depreciation_period_years` is not positive
    /// - `mortgage_interest_share` is not in [0, 1]
    /// - `closing_cost_rate` is not in [0, 1]
    ///
    /// # Example
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use rental_core::calculations::{DeductionConfig, DeductionError};
    ///
    /// let invalid_config = DeductionConfig {
    ///     structure_value_factor: dec!(0.85),
    ///     depreciation_period_years: dec!(0.0),
    ///     mortgage_interest_share: dec!(0.68),
    ///     closing_cost_rate: dec!(0.02),
    /// };
    ///
    /// assert_eq!(
    ///     invalid_config.validate(),
    ///     Err(DeductionError::InvalidDepreciationPeriod(dec!(0.0)))
    /// );
    /// ```
    pub fn validate(&self) -> Result<(), DeductionError> {
        if self.structure_value_factor <= Decimal::ZERO || self.structure_value_factor > Decimal::ONE
        {
            return Err(DeductionError::InvalidStructureValueFactor(
                self.structure_value_factor,
            ));
        }
        if self.depreciation_period_years <= Decimal::ZERO {
            return Err(DeductionError::InvalidDepreciationPeriod(
                self.depreciation_period_years,
            ));
        }
        if self.mortgage_interest_share < Decimal::ZERO
            || self.mortgage_interest_share > Decimal::ONE
        {
            return Err(DeductionError::InvalidMortgageInterestShare(
                self.mortgage_interest_share,
            ));
        }
        if self.closing_cost_rate < Decimal::ZERO || self.closing_cost_rate > Decimal::ONE {
            return Err(DeductionError::InvalidClosingCostRate(self.closing_cost_rate));
        }
        Ok(())
    }
}

/// Result of the deduction estimate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeductionEstimate {
    /// Estimated depreciable structure value.
    pub structure_value: Decimal,

    /// Straight-line depreciation claimable per year, in whole dollars.
    pub annual_depreciation: Decimal,

    /// Estimated year-one mortgage interest, in whole dollars.
    pub mortgage_interest: Decimal,

    /// Estimated one-time closing costs.
    pub closing_costs: Decimal,

    /// Sum of the three deduction lines.
    pub total_deductions: Decimal,
}

/// Calculator for the first-year deduction estimate.
#[derive(Debug, Clone)]
pub struct DeductionSchedule {
    config: DeductionConfig,
}

impl DeductionSchedule {
    /// Creates a new deduction schedule with the given configuration.
    pub fn new(config: DeductionConfig) -> Self {
        Self { config }
    }

    /// Calculates the complete deduction estimate.
    ///
    /// # Arguments
    ///
    /// * `purchase_price` - Total acquisition cost
    /// * `mortgage` - Annualized debt service from the expense schedule
    ///
    /// # Errors
    ///
    /// Returns [`DeductionError`] if the configuration is invalid.
    pub fn calculate(
        &self,
        purchase_price: Decimal,
        mortgage: Decimal,
    ) -> Result<DeductionEstimate, DeductionError> {
        self.config.validate()?;

        let structure_value = self.structure_value(purchase_price);
        let annual_depreciation = self.annual_depreciation(structure_value);
        let mortgage_interest = self.mortgage_interest(mortgage);
        let closing_costs = self.closing_costs(purchase_price);
        let total_deductions =
            round_half_up(annual_depreciation + mortgage_interest + closing_costs);

        Ok(DeductionEstimate {
            structure_value,
            annual_depreciation,
            mortgage_interest,
            closing_costs,
            total_deductions,
        })
    }

    /// Estimates the depreciable structure value.
    fn structure_value(
        &self,
        purchase_price: Decimal,
    ) -> Decimal {
        round_half_up(purchase_price * self.config.structure_value_factor)
    }

    /// Straight-line depreciation over the configured period.
    fn annual_depreciation(
        &self,
        structure_value: Decimal,
    ) -> Decimal {
        round_whole(structure_value / self.config.depreciation_period_years)
    }

    /// Interest portion of year-one debt service.
    fn mortgage_interest(
        &self,
        mortgage: Decimal,
    ) -> Decimal {
        round_whole(mortgage * self.config.mortgage_interest_share)
    }

    /// One-time closing cost estimate.
    fn closing_costs(
        &self,
        purchase_price: Decimal,
    ) -> Decimal {
        round_half_up(purchase_price * self.config.closing_cost_rate)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn test_config() -> DeductionConfig {
        DeductionConfig::from_assumptions(&RentalAssumptions::default())
    }

    // =========================================================================
    // DeductionConfig::validate tests
    // =========================================================================

    #[test]
    fn validate_accepts_default_config() {
        let result = test_config().validate();

        assert_eq!(result, Ok(()));
    }

    #[test]
    fn validate_rejects_zero_structure_value_factor() {
        let config = DeductionConfig {
            structure_value_factor: dec!(0.00),
            ..test_config()
        };

        assert_eq!(
            config.validate(),
            Err(DeductionError::InvalidStructureValueFactor(dec!(0.00)))
        );
    }

    #[test]
    fn validate_rejects_structure_value_factor_above_one() {
        let config = DeductionConfig {
            structure_value_factor: dec!(1.2),
            ..test_config()
        };

        assert_eq!(
            config.validate(),
            Err(DeductionError::InvalidStructureValueFactor(dec!(1.2)))
        );
    }

    #[test]
    fn validate_rejects_zero_depreciation_period() {
        let config = DeductionConfig {
            depreciation_period_years: dec!(0.0),
            ..test_config()
        };

        assert_eq!(
            config.validate(),
            Err(DeductionError::InvalidDepreciationPeriod(dec!(0.0)))
        );
    }

    #[test]
    fn validate_rejects_negative_depreciation_period() {
        let config = DeductionConfig {
            depreciation_period_years: dec!(-27.5),
            ..test_config()
        };

        assert_eq!(
            config.validate(),
            Err(DeductionError::InvalidDepreciationPeriod(dec!(-27.5)))
        );
    }

    #[test]
    fn validate_rejects_negative_interest_share() {
        let config = DeductionConfig {
            mortgage_interest_share: dec!(-0.68),
            ..test_config()
        };

        assert_eq!(
            config.validate(),
            Err(DeductionError::InvalidMortgageInterestShare(dec!(-0.68)))
        );
    }

    #[test]
    fn validate_rejects_interest_share_above_one() {
        let config = DeductionConfig {
            mortgage_interest_share: dec!(1.01),
            ..test_config()
        };

        assert_eq!(
            config.validate(),
            Err(DeductionError::InvalidMortgageInterestShare(dec!(1.01)))
        );
    }

    #[test]
    fn validate_rejects_negative_closing_cost_rate() {
        let config = DeductionConfig {
            closing_cost_rate: dec!(-0.02),
            ..test_config()
        };

        assert_eq!(
            config.validate(),
            Err(DeductionError::InvalidClosingCostRate(dec!(-0.02)))
        );
    }

    #[test]
    fn validate_accepts_zero_closing_cost_rate() {
        let config = DeductionConfig {
            closing_cost_rate: dec!(0.00),
            ..test_config()
        };

        assert_eq!(config.validate(), Ok(()));
    }

    // =========================================================================
    // calculate tests
    // =========================================================================

    #[test]
    fn calculate_matches_reference_scenario() {
        let schedule = DeductionSchedule::new(test_config());

        let estimate = schedule.calculate(dec!(2500000.00), dec!(140625.00)).unwrap();

        // Structure: 2500000 × 0.85 = 2125000
        assert_eq!(estimate.structure_value, dec!(2125000.00));
        // Depreciation: 2125000 / 27.5 = 77272.72..., rounds to 77273
        assert_eq!(estimate.annual_depreciation, dec!(77273));
        // Interest: 140625 × 0.68 = 95625
        assert_eq!(estimate.mortgage_interest, dec!(95625));
        // Closing: 2500000 × 0.02 = 50000
        assert_eq!(estimate.closing_costs, dec!(50000.00));
        // Total: 77273 + 95625 + 50000 = 222898
        assert_eq!(estimate.total_deductions, dec!(222898.00));
    }

    #[test]
    fn calculate_handles_zero_purchase_price() {
        let schedule = DeductionSchedule::new(test_config());

        let estimate = schedule.calculate(dec!(0.00), dec!(0.00)).unwrap();

        assert_eq!(estimate.structure_value, dec!(0.00));
        assert_eq!(estimate.annual_depreciation, dec!(0));
        assert_eq!(estimate.mortgage_interest, dec!(0));
        assert_eq!(estimate.closing_costs, dec!(0.00));
        assert_eq!(estimate.total_deductions, dec!(0.00));
    }

    #[test]
    fn calculate_handles_zero_mortgage() {
        let schedule = DeductionSchedule::new(test_config());

        let estimate = schedule.calculate(dec!(1000000.00), dec!(0.00)).unwrap();

        assert_eq!(estimate.mortgage_interest, dec!(0));
        // Depreciation and closing costs still apply to an all-cash purchase
        assert_eq!(estimate.annual_depreciation, dec!(30909));
        assert_eq!(estimate.closing_costs, dec!(20000.00));
    }

    #[test]
    fn calculate_rounds_depreciation_to_whole_dollars() {
        let schedule = DeductionSchedule::new(test_config());

        // Structure: 1000000 × 0.85 = 850000
        // Depreciation: 850000 / 27.5 = 30909.09..., rounds to 30909
        let estimate = schedule.calculate(dec!(1000000.00), dec!(75000.00)).unwrap();

        assert_eq!(estimate.annual_depreciation, dec!(30909));
    }

    #[test]
    fn calculate_rounds_interest_to_whole_dollars() {
        let schedule = DeductionSchedule::new(test_config());

        // Interest: 63750 × 0.68 = 43350
        let estimate = schedule.calculate(dec!(1000000.00), dec!(63750.00)).unwrap();

        assert_eq!(estimate.mortgage_interest, dec!(43350));
    }

    #[test]
    fn calculate_total_is_sum_of_deduction_lines() {
        let schedule = DeductionSchedule::new(test_config());

        let estimate = schedule.calculate(dec!(1234567.00), dec!(70000.00)).unwrap();

        assert_eq!(
            estimate.total_deductions,
            estimate.annual_depreciation + estimate.mortgage_interest + estimate.closing_costs
        );
    }

    #[test]
    fn calculate_rejects_invalid_config() {
        let schedule = DeductionSchedule::new(DeductionConfig {
            depreciation_period_years: dec!(-1.0),
            ..test_config()
        });

        let result = schedule.calculate(dec!(1000000.00), dec!(75000.00));

        assert_eq!(
            result,
            Err(DeductionError::InvalidDepreciationPeriod(dec!(-1.0)))
        );
    }

    #[test]
    fn calculate_respects_custom_structure_value_factor() {
        let schedule = DeductionSchedule::new(DeductionConfig {
            structure_value_factor: dec!(0.70),
            ..test_config()
        });

        let estimate = schedule.calculate(dec!(1000000.00), dec!(0.00)).unwrap();

        assert_eq!(estimate.structure_value, dec!(700000.00));
    }
}
