//! The composite profitability evaluation.
//!
//! This module exposes the single call surface of the crate:
//! [`ProfitabilityCalculator::evaluate`], a pure function from a validated
//! [`RentalInputs`] record to a full [`ProfitabilityEvaluation`]. Each
//! evaluation is recomputed from scratch; nothing is cached or mutated
//! between calls.
//!
//! # Evaluation steps
//!
//! | Step | Formula |
//! |------|---------|
//! | Summer income | weekly_rent × weeks_rented |
//! | Shoulder income | shoulder_nights × shoulder_rate |
//! | Total income | summer + shoulder |
//! | Total nights | weeks_rented × 7 + shoulder_nights |
//! | Expenses | expense schedule (flat or itemized model) |
//! | Cash flow | total income − total expenses |
//! | Loan-to-rent | loan ÷ total income |
//! | Cash-on-cash ROI | cash flow ÷ down payment × 100 |
//! | Cap rate | total income ÷ purchase price × 100 |
//! | Write-offs | deduction schedule |
//! | Year-one net | cash flow − closing costs |
//!
//! A ratio whose divisor is zero is reported as `None` (never NaN or
//! infinity); the rest of the record is still computed and returned.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use rental_core::{
//!     CashFlowStatus, ProfitabilityCalculator, RentalAssumptions, RentalInputs,
//! };
//!
//! let inputs = RentalInputs {
//!     purchase_price: dec!(2500000),
//!     down_payment: dec!(625000),
//!     weekly_rent: dec!(15000),
//!     weeks_rented: 11,
//!     shoulder_nights: 20,
//!     shoulder_rate: dec!(1000),
//! };
//!
//! let calculator = ProfitabilityCalculator::itemized(&RentalAssumptions::default());
//! let evaluation = calculator.evaluate(&inputs).unwrap();
//!
//! assert_eq!(evaluation.income.total_income, dec!(185000.00));
//! assert_eq!(evaluation.expenses.total, dec!(240375.00));
//! assert_eq!(evaluation.cash_flow, dec!(-55375.00));
//! assert_eq!(evaluation.cash_flow_status, CashFlowStatus::Negative);
//! assert_eq!(evaluation.loan_to_rent_ratio, Some(dec!(10.14)));
//! assert_eq!(evaluation.year_one_net_cash_flow, dec!(-105375.00));
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use crate::calculations::common::round_half_up;
use crate::calculations::deductions::{
    DeductionConfig, DeductionError, DeductionEstimate, DeductionSchedule,
};
use crate::calculations::expenses::{
    ExpenseBreakdown, ExpenseConfig, ExpenseError, ExpenseSchedule,
};
use crate::models::{CashFlowStatus, InputError, RentalAssumptions, RentalInputs};

/// Errors that can occur during a profitability evaluation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EvaluationError {
    /// An input failed domain validation before computation began.
    #[error(transparent)]
    Input(#[from] InputError),

    /// The expense schedule configuration is invalid.
    #[error(transparent)]
    Expense(#[from] ExpenseError),

    /// The deduction schedule configuration is invalid.
    #[error(transparent)]
    Deduction(#[from] DeductionError),
}

/// Seasonal rental income breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncomeBreakdown {
    /// Peak-season income: weekly rent × weeks rented.
    pub summer_income: Decimal,

    /// Off-peak income: nights booked × nightly rate.
    pub shoulder_income: Decimal,

    /// Sum of peak and off-peak income.
    pub total_income: Decimal,

    /// Occupied nights across both seasons.
    pub total_nights_rented: u32,
}

/// The full derived result record of one evaluation.
///
/// Ratio fields are `None` when their divisor was zero; every other field
/// is always populated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfitabilityEvaluation {
    pub income: IncomeBreakdown,
    pub expenses: ExpenseBreakdown,

    /// Annual operating cash flow: total income minus total expenses.
    pub cash_flow: Decimal,
    pub cash_flow_status: CashFlowStatus,

    /// Cash flow minus one-time closing costs.
    pub year_one_net_cash_flow: Decimal,
    pub year_one_status: CashFlowStatus,

    /// Financed amount over total annual income; `None` with no income.
    pub loan_to_rent_ratio: Option<Decimal>,

    /// Cash flow as a percentage of the down payment; `None` with no
    /// money down.
    pub cash_on_cash_roi: Option<Decimal>,

    /// Total income as a percentage of purchase price; `None` for a
    /// zero-price property.
    pub cap_rate: Option<Decimal>,

    pub deductions: DeductionEstimate,
}

/// Calculator composing the expense and deduction schedules into the
/// single `evaluate` surface.
#[derive(Debug, Clone)]
pub struct ProfitabilityCalculator {
    expenses: ExpenseSchedule,
    deductions: DeductionSchedule,
}

impl ProfitabilityCalculator {
    /// Creates a calculator from explicit schedule configurations.
    pub fn new(expense_config: ExpenseConfig, deduction_config: DeductionConfig) -> Self {
        Self {
            expenses: ExpenseSchedule::new(expense_config),
            deductions: DeductionSchedule::new(deduction_config),
        }
    }

    /// Calculator using the itemized expense model.
    pub fn itemized(assumptions: &RentalAssumptions) -> Self {
        Self::new(
            ExpenseConfig::itemized(assumptions),
            DeductionConfig::from_assumptions(assumptions),
        )
    }

    /// Calculator using the flat expense model.
    pub fn flat(assumptions: &RentalAssumptions) -> Self {
        Self::new(
            ExpenseConfig::flat(assumptions),
            DeductionConfig::from_assumptions(assumptions),
        )
    }

    /// Evaluates one input snapshot into the full derived result record.
    ///
    /// # Errors
    ///
    /// Returns [`EvaluationError`] if the inputs fail domain validation or
    /// either schedule configuration is invalid. A zero divisor is not an
    /// error: the affected ratio is reported as `None` and the rest of the
    /// record is returned.
    pub fn evaluate(
        &self,
        inputs: &RentalInputs,
    ) -> Result<ProfitabilityEvaluation, EvaluationError> {
        inputs.validate()?;

        let loan = inputs.loan();

        // Seasonal income
        let summer_income = self.summer_income(inputs.weekly_rent, inputs.weeks_rented);
        let shoulder_income = self.shoulder_income(inputs.shoulder_nights, inputs.shoulder_rate);
        let total_income = round_half_up(summer_income + shoulder_income);
        let total_nights_rented = self.total_nights_rented(inputs.weeks_rented, inputs.shoulder_nights);

        // Annual expenses
        let expenses = self.expenses.calculate(inputs.purchase_price, loan)?;

        // Operating cash flow
        let cash_flow = round_half_up(total_income - expenses.total);
        let cash_flow_status = CashFlowStatus::classify(cash_flow);

        // Leverage and return ratios
        let loan_to_rent_ratio = self.loan_to_rent_ratio(loan, total_income);
        let cash_on_cash_roi = self.cash_on_cash_roi(cash_flow, inputs.down_payment);
        let cap_rate = self.cap_rate(total_income, inputs.purchase_price);

        // First-year write-offs
        let deductions = self
            .deductions
            .calculate(inputs.purchase_price, expenses.mortgage())?;

        // Year-one position after one-time closing costs
        let year_one_net_cash_flow = round_half_up(cash_flow - deductions.closing_costs);
        let year_one_status = CashFlowStatus::classify(year_one_net_cash_flow);

        Ok(ProfitabilityEvaluation {
            income: IncomeBreakdown {
                summer_income,
                shoulder_income,
                total_income,
                total_nights_rented,
            },
            expenses,
            cash_flow,
            cash_flow_status,
            year_one_net_cash_flow,
            year_one_status,
            loan_to_rent_ratio,
            cash_on_cash_roi,
            cap_rate,
            deductions,
        })
    }

    /// Peak-season income: weekly rent × weeks rented.
    fn summer_income(
        &self,
        weekly_rent: Decimal,
        weeks_rented: u32,
    ) -> Decimal {
        round_half_up(weekly_rent * Decimal::from(weeks_rented))
    }

    /// Off-peak income: nights booked × nightly rate.
    fn shoulder_income(
        &self,
        shoulder_nights: u32,
        shoulder_rate: Decimal,
    ) -> Decimal {
        round_half_up(shoulder_rate * Decimal::from(shoulder_nights))
    }

    /// Occupied nights across both seasons.
    fn total_nights_rented(
        &self,
        weeks_rented: u32,
        shoulder_nights: u32,
    ) -> u32 {
        weeks_rented * 7 + shoulder_nights
    }

    /// Financed amount over total annual income.
    ///
    /// Undefined when the property earns nothing.
    fn loan_to_rent_ratio(
        &self,
        loan: Decimal,
        total_income: Decimal,
    ) -> Option<Decimal> {
        if total_income <= Decimal::ZERO {
            warn!(
                total_income = %total_income,
                "total income is zero; loan-to-rent ratio is undefined"
            );
            return None;
        }
        Some(round_half_up(loan / total_income))
    }

    /// Cash flow as a percentage of the cash actually invested.
    ///
    /// Undefined for a purchase with no money down.
    fn cash_on_cash_roi(
        &self,
        cash_flow: Decimal,
        down_payment: Decimal,
    ) -> Option<Decimal> {
        if down_payment <= Decimal::ZERO {
            warn!(
                down_payment = %down_payment,
                "down payment is zero; cash-on-cash ROI is undefined"
            );
            return None;
        }
        Some(round_half_up(
            cash_flow / down_payment * Decimal::ONE_HUNDRED,
        ))
    }

    /// Total income as a percentage of purchase price, ignoring financing.
    ///
    /// Undefined for a zero purchase price.
    fn cap_rate(
        &self,
        total_income: Decimal,
        purchase_price: Decimal,
    ) -> Option<Decimal> {
        if purchase_price <= Decimal::ZERO {
            warn!(
                purchase_price = %purchase_price,
                "purchase price is zero; cap rate is undefined"
            );
            return None;
        }
        Some(round_half_up(
            total_income / purchase_price * Decimal::ONE_HUNDRED,
        ))
    }
}
