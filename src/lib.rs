pub mod app;
pub mod calculation;
pub mod error;
pub mod export;
pub mod format;
pub mod logging;
pub mod mortgage;
pub mod normalize;
pub mod state;
pub mod ui;
pub mod views;

pub use calculation::{compute_repayment, Repayment, RepaymentFigures};
pub use error::MortgageError;
pub use mortgage::{Field, MortgageInputs};
pub use state::{FieldUpdate, MortgageContext, MortgageState, WriteOutcome};
