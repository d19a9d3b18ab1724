//! Annual expense schedule for a vacation rental property.
//!
//! This module produces the named expense breakdown behind an evaluation.
//! Two expense models are supported behind one calculator, selected
//! explicitly by configuration rather than by duplicating the program:
//!
//! - **Itemized**: each operating category is a fixed fraction of the
//!   purchase price.
//! - **Flat**: a single fixed operating lump covers taxes, insurance,
//!   maintenance, and management together.
//!
//! Debt service is common to both models and is estimated as a flat
//! annualized fraction of the loan amount.
//!
//! # Itemized line items
//!
//! | Category          | Formula                          |
//! |-------------------|----------------------------------|
//! | Mortgage          | loan × mortgage_rate_factor      |
//! | Property Tax      | purchase_price × property_tax_rate |
//! | Insurance         | purchase_price × insurance_rate  |
//! | Maintenance       | purchase_price × maintenance_rate |
//! | Management        | purchase_price × management_rate |
//! | Utilities & Other | purchase_price × utilities_rate  |
//!
//! Line items are emitted in the order above; callers render them in
//! insertion order.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use rental_core::calculations::{ExpenseConfig, ExpenseSchedule};
//! use rental_core::RentalAssumptions;
//!
//! let config = ExpenseConfig::itemized(&RentalAssumptions::default());
//! let schedule = ExpenseSchedule::new(config);
//!
//! let breakdown = schedule.calculate(dec!(2500000), dec!(1875000)).unwrap();
//!
//! assert_eq!(breakdown.total, dec!(240375.00));
//! assert_eq!(breakdown.line_items.len(), 6);
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::calculations::common::round_half_up;
use crate::models::RentalAssumptions;

/// Errors that can occur during expense schedule calculations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExpenseError {
    /// The mortgage rate factor must be between 0 and 1.
    #[error("mortgage rate factor must be between 0 and 1, got {0}")]
    InvalidMortgageRateFactor(Decimal),

    /// The property tax rate must be between 0 and 1.
    #[error("property tax rate must be between 0 and 1, got {0}")]
    InvalidPropertyTaxRate(Decimal),

    /// The insurance rate must be between 0 and 1.
    #[error("insurance rate must be between 0 and 1, got {0}")]
    InvalidInsuranceRate(Decimal),

    /// The maintenance rate must be between 0 and 1.
    #[error("maintenance rate must be between 0 and 1, got {0}")]
    InvalidMaintenanceRate(Decimal),

    /// The management rate must be between 0 and 1.
    #[error("management rate must be between 0 and 1, got {0}")]
    InvalidManagementRate(Decimal),

    /// The utilities rate must be between 0 and 1.
    #[error("utilities rate must be between 0 and 1, got {0}")]
    InvalidUtilitiesRate(Decimal),

    /// The flat operating lump must be non-negative.
    #[error("flat operating expenses must be non-negative, got {0}")]
    InvalidFlatOperatingExpenses(Decimal),
}

/// Named expense categories, in presentation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExpenseCategory {
    Mortgage,
    PropertyTax,
    Insurance,
    Maintenance,
    Management,
    UtilitiesOther,
    /// Combined operating lump used by the flat expense model.
    FixedOperating,
}

impl ExpenseCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mortgage => "Mortgage",
            Self::PropertyTax => "Property Tax",
            Self::Insurance => "Insurance",
            Self::Maintenance => "Maintenance",
            Self::Management => "Management",
            Self::UtilitiesOther => "Utilities & Other",
            Self::FixedOperating => "Fixed Operating",
        }
    }
}

/// Operating expense rates for the itemized model, each a fraction of
/// purchase price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemizedRates {
    pub property_tax_rate: Decimal,
    pub insurance_rate: Decimal,
    pub maintenance_rate: Decimal,
    pub management_rate: Decimal,
    pub utilities_rate: Decimal,
}

impl ItemizedRates {
    /// Creates itemized rates from a [`RentalAssumptions`].
    pub fn from_assumptions(assumptions: &RentalAssumptions) -> Self {
        Self {
            property_tax_rate: assumptions.property_tax_rate,
            insurance_rate: assumptions.insurance_rate,
            maintenance_rate: assumptions.maintenance_rate,
            management_rate: assumptions.management_rate,
            utilities_rate: assumptions.utilities_rate,
        }
    }

    fn validate(&self) -> Result<(), ExpenseError> {
        if !is_rate(self.property_tax_rate) {
            return Err(ExpenseError::InvalidPropertyTaxRate(self.property_tax_rate));
        }
        if !is_rate(self.insurance_rate) {
            return Err(ExpenseError::InvalidInsuranceRate(self.insurance_rate));
        }
        if !is_rate(self.maintenance_rate) {
            return Err(ExpenseError::InvalidMaintenanceRate(self.maintenance_rate));
        }
        if !is_rate(self.management_rate) {
            return Err(ExpenseError::InvalidManagementRate(self.management_rate));
        }
        if !is_rate(self.utilities_rate) {
            return Err(ExpenseError::InvalidUtilitiesRate(self.utilities_rate));
        }
        Ok(())
    }
}

fn is_rate(value: Decimal) -> bool {
    value >= Decimal::ZERO && value <= Decimal::ONE
}

/// Selection of how operating expenses are estimated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExpenseModel {
    /// A single fixed annual operating lump on top of debt service.
    Flat { fixed_annual: Decimal },

    /// Percent-of-price operating categories on top of debt service.
    Itemized(ItemizedRates),
}

/// Configuration for the expense schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseConfig {
    /// Annualized debt service as a fraction of the loan amount.
    pub mortgage_rate_factor: Decimal,

    /// The operating expense model to apply.
    pub model: ExpenseModel,
}

impl ExpenseConfig {
    /// Itemized configuration from a [`RentalAssumptions`].
    pub fn itemized(assumptions: &RentalAssumptions) -> Self {
        Self {
            mortgage_rate_factor: assumptions.mortgage_rate_factor,
            model: ExpenseModel::Itemized(ItemizedRates::from_assumptions(assumptions)),
        }
    }

    /// Flat configuration from a [`RentalAssumptions`].
    pub fn flat(assumptions: &RentalAssumptions) -> Self {
        Self {
            mortgage_rate_factor: assumptions.mortgage_rate_factor,
            model: ExpenseModel::Flat {
                fixed_annual: assumptions.flat_operating_expenses,
            },
        }
    }

    /// Validates the configuration values.
    ///
    /// # Errors
    ///
    /// Returns [`ExpenseError`] if the mortgage rate factor or any
    /// operating rate is outside [0, 1], or the flat lump is negative.
    pub fn validate(&self) -> Result<(), ExpenseError> {
        if !is_rate(self.mortgage_rate_factor) {
            return Err(ExpenseError::InvalidMortgageRateFactor(
                self.mortgage_rate_factor,
            ));
        }
        match &self.model {
            ExpenseModel::Flat { fixed_annual } => {
                if *fixed_annual < Decimal::ZERO {
                    return Err(ExpenseError::InvalidFlatOperatingExpenses(*fixed_annual));
                }
            }
            ExpenseModel::Itemized(rates) => rates.validate()?,
        }
        Ok(())
    }
}

/// A single named expense line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseLineItem {
    pub category: ExpenseCategory,
    pub amount: Decimal,
}

/// The computed expense breakdown for one evaluation.
///
/// `line_items` preserves presentation order; `total` is their exact sum.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseBreakdown {
    pub line_items: Vec<ExpenseLineItem>,
    pub total: Decimal,
}

impl ExpenseBreakdown {
    /// Looks up a line item amount by category.
    pub fn amount(&self, category: ExpenseCategory) -> Option<Decimal> {
        self.line_items
            .iter()
            .find(|item| item.category == category)
            .map(|item| item.amount)
    }

    /// The debt service line of the breakdown.
    ///
    /// Every model emits a mortgage line; an absent line reads as zero.
    pub fn mortgage(&self) -> Decimal {
        self.amount(ExpenseCategory::Mortgage)
            .unwrap_or(Decimal::ZERO)
    }
}

/// Calculator for the annual expense schedule.
#[derive(Debug, Clone)]
pub struct ExpenseSchedule {
    config: ExpenseConfig,
}

impl ExpenseSchedule {
    /// Creates a new expense schedule with the given configuration.
    pub fn new(config: ExpenseConfig) -> Self {
        Self { config }
    }

    /// Calculates the expense breakdown for a property.
    ///
    /// # Arguments
    ///
    /// * `purchase_price` - Total acquisition cost
    /// * `loan` - Financed amount
    ///
    /// # Errors
    ///
    /// Returns [`ExpenseError`] if the configuration is invalid.
    pub fn calculate(
        &self,
        purchase_price: Decimal,
        loan: Decimal,
    ) -> Result<ExpenseBreakdown, ExpenseError> {
        self.config.validate()?;

        let mut line_items = vec![ExpenseLineItem {
            category: ExpenseCategory::Mortgage,
            amount: self.mortgage(loan),
        }];
        line_items.extend(self.operating_line_items(purchase_price));

        let total = round_half_up(line_items.iter().map(|item| item.amount).sum());

        Ok(ExpenseBreakdown { line_items, total })
    }

    /// Estimates annualized debt service on the loan.
    fn mortgage(
        &self,
        loan: Decimal,
    ) -> Decimal {
        round_half_up(loan * self.config.mortgage_rate_factor)
    }

    /// Produces the operating line items for the configured model.
    fn operating_line_items(
        &self,
        purchase_price: Decimal,
    ) -> Vec<ExpenseLineItem> {
        match &self.config.model {
            ExpenseModel::Flat { fixed_annual } => vec![ExpenseLineItem {
                category: ExpenseCategory::FixedOperating,
                amount: round_half_up(*fixed_annual),
            }],
            ExpenseModel::Itemized(rates) => [
                (ExpenseCategory::PropertyTax, rates.property_tax_rate),
                (ExpenseCategory::Insurance, rates.insurance_rate),
                (ExpenseCategory::Maintenance, rates.maintenance_rate),
                (ExpenseCategory::Management, rates.management_rate),
                (ExpenseCategory::UtilitiesOther, rates.utilities_rate),
            ]
            .into_iter()
            .map(|(category, rate)| ExpenseLineItem {
                category,
                amount: round_half_up(purchase_price * rate),
            })
            .collect(),
        }
    }
}
