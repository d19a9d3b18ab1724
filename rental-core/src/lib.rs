pub mod calculations;
pub mod models;

pub use calculations::evaluate::{
    EvaluationError, IncomeBreakdown, ProfitabilityCalculator, ProfitabilityEvaluation,
};
pub use models::*;
