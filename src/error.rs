use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum MortgageError {
    #[error("mortgage state accessed outside a MortgageProvider")]
    NoProvider,

    #[error("not a number: {0:?}")]
    InvalidNumber(String),

    #[error("negative values are not accepted: {0}")]
    NegativeValue(f64),
}
