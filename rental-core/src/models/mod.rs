mod assumptions;
mod cash_flow_status;
mod rental_inputs;

pub use assumptions::RentalAssumptions;
pub use cash_flow_status::CashFlowStatus;
pub use rental_inputs::{InputError, RentalInputs};
