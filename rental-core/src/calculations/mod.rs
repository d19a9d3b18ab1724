//! Calculation modules for the rental profitability evaluation.
//!
//! This module provides the computation logic behind a single evaluation:
//! the expense schedule, the tax write-off estimate, and the composite
//! profitability calculator that ties them together.

pub mod common;
pub mod deductions;
pub mod evaluate;
pub mod expenses;

pub use deductions::{DeductionConfig, DeductionError, DeductionEstimate, DeductionSchedule};
pub use evaluate::{
    EvaluationError, IncomeBreakdown, ProfitabilityCalculator, ProfitabilityEvaluation,
};
pub use expenses::{
    ExpenseBreakdown, ExpenseCategory, ExpenseConfig, ExpenseError, ExpenseLineItem, ExpenseModel,
    ExpenseSchedule, ItemizedRates,
};
