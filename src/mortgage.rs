//! The four loan inputs and the selector used to address them.

use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// One complete snapshot of the loan inputs.
///
/// Snapshots are never edited in place: [`MortgageInputs::with_field`] builds
/// the next one and the shared state swaps it in whole.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MortgageInputs {
    pub property_price: f64,
    pub deposit: f64,
    /// Annual percentage, `5.0` means 5%.
    pub interest_rate: f64,
    pub term_years: f64,
}

impl Default for MortgageInputs {
    fn default() -> Self {
        Self {
            property_price: 250_000.0,
            deposit: 20_000.0,
            interest_rate: 5.0,
            term_years: 25.0,
        }
    }
}

impl MortgageInputs {
    pub fn get(&self, field: Field) -> f64 {
        match field {
            Field::PropertyPrice => self.property_price,
            Field::Deposit => self.deposit,
            Field::InterestRate => self.interest_rate,
            Field::TermYears => self.term_years,
        }
    }

    /// Returns a new snapshot with `field` replaced and every other field copied.
    pub fn with_field(&self, field: Field, value: f64) -> Self {
        let mut next = *self;
        match field {
            Field::PropertyPrice => next.property_price = value,
            Field::Deposit => next.deposit = value,
            Field::InterestRate => next.interest_rate = value,
            Field::TermYears => next.term_years = value,
        }
        next
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Field {
    PropertyPrice,
    Deposit,
    InterestRate,
    TermYears,
}

impl Field {
    /// Form order.
    pub const ALL: [Field; 4] = [
        Field::PropertyPrice,
        Field::Deposit,
        Field::InterestRate,
        Field::TermYears,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PropertyPrice => "propertyPrice",
            Self::Deposit => "deposit",
            Self::InterestRate => "interestRate",
            Self::TermYears => "termYears",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::PropertyPrice => "Property Price (£)",
            Self::Deposit => "Deposit (£)",
            Self::InterestRate => "Interest Rate (%)",
            Self::TermYears => "Term (Years)",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Self::PropertyPrice => 0,
            Self::Deposit => 1,
            Self::InterestRate => 2,
            Self::TermYears => 3,
        }
    }

    pub fn next(&self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(&self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// Price and deposit are shown with thousands separators.
    pub fn is_currency(&self) -> bool {
        matches!(self, Self::PropertyPrice | Self::Deposit)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Field {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "propertyPrice" => Ok(Self::PropertyPrice),
            "deposit" => Ok(Self::Deposit),
            "interestRate" => Ok(Self::InterestRate),
            "termYears" => Ok(Self::TermYears),
            other => Err(format!("unknown mortgage field '{other}'")),
        }
    }
}
