use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Heuristic constants used across the profitability evaluation.
///
/// All figures are rough estimation ratios, not underwriting numbers.
/// `Default` carries the standard set; callers tune individual fields
/// before building the calculators.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RentalAssumptions {
    /// Annualized debt service as a fraction of the loan amount.
    pub mortgage_rate_factor: Decimal,
    pub property_tax_rate: Decimal,
    pub insurance_rate: Decimal,
    pub maintenance_rate: Decimal,
    pub management_rate: Decimal,
    pub utilities_rate: Decimal,
    /// Single operating lump used by the flat expense model.
    pub flat_operating_expenses: Decimal,
    /// Depreciable structure as a fraction of purchase price.
    pub structure_value_factor: Decimal,
    pub depreciation_period_years: Decimal,
    /// Share of year-one mortgage payments attributable to interest.
    pub mortgage_interest_share: Decimal,
    pub closing_cost_rate: Decimal,
}

impl Default for RentalAssumptions {
    fn default() -> Self {
        Self {
            mortgage_rate_factor: Decimal::new(75, 3),
            property_tax_rate: Decimal::new(159, 4),
            insurance_rate: Decimal::new(5, 3),
            maintenance_rate: Decimal::new(1, 2),
            management_rate: Decimal::new(5, 3),
            utilities_rate: Decimal::new(4, 3),
            flat_operating_expenses: Decimal::new(90_000, 0),
            structure_value_factor: Decimal::new(85, 2),
            depreciation_period_years: Decimal::new(275, 1),
            mortgage_interest_share: Decimal::new(68, 2),
            closing_cost_rate: Decimal::new(2, 2),
        }
    }
}
