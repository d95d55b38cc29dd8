//! Amortizing-loan repayment figures.
//!
//! Everything here is a pure function of one [`MortgageInputs`] snapshot.
//! Both views call [`compute_repayment`] on every read; nothing is cached, so
//! two readers of the same snapshot always agree.

use serde::Serialize;

use crate::mortgage::MortgageInputs;

pub const MONTHS_PER_YEAR: f64 = 12.0;

/// Raw derived figures at full precision.
///
/// `monthly_payment` and everything built on it may be non-finite for a zero
/// rate or a zero term. Use [`Repayment::displayed`] before showing them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Repayment {
    pub principal: f64,
    pub monthly_rate: f64,
    pub total_payments: f64,
    pub monthly_payment: f64,
    pub total_paid: f64,
    pub total_interest: f64,
}

/// Figures as shown to the user: non-finite values replaced by zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RepaymentFigures {
    pub principal: f64,
    pub monthly_payment: f64,
    pub total_paid: f64,
    pub total_interest: f64,
}

/// One pie slice, rounded to whole currency units.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Slice {
    pub name: &'static str,
    pub value: f64,
}

/// Computes the fixed monthly repayment and its breakdown.
///
/// M = P * r / (1 - (1 + r)^-n)
///
/// The principal is floored at zero: a deposit at or above the price leaves
/// nothing to borrow.
pub fn compute_repayment(inputs: &MortgageInputs) -> Repayment {
    let principal = (inputs.property_price - inputs.deposit).max(0.0);
    let monthly_rate = inputs.interest_rate / 100.0 / MONTHS_PER_YEAR;
    let total_payments = inputs.term_years * MONTHS_PER_YEAR;

    let monthly_payment =
        principal * monthly_rate / (1.0 - (1.0 + monthly_rate).powf(-total_payments));

    let total_paid = monthly_payment * total_payments;
    let total_interest = total_paid - principal;

    Repayment {
        principal,
        monthly_rate,
        total_payments,
        monthly_payment,
        total_paid,
        total_interest,
    }
}

/// Zero for NaN and infinities, the value otherwise.
pub fn display_or_zero(value: f64) -> f64 {
    if value.is_finite() { value } else { 0.0 }
}

impl Repayment {
    pub fn displayed(&self) -> RepaymentFigures {
        RepaymentFigures {
            principal: display_or_zero(self.principal),
            monthly_payment: display_or_zero(self.monthly_payment),
            total_paid: display_or_zero(self.total_paid),
            total_interest: display_or_zero(self.total_interest),
        }
    }

    /// Principal and interest split for the pie chart.
    pub fn slices(&self) -> [Slice; 2] {
        let figures = self.displayed();
        [
            Slice {
                name: "Principal",
                value: figures.principal.round(),
            },
            Slice {
                name: "Total Interest",
                value: figures.total_interest.round(),
            },
        ]
    }

    /// False when the monthly payment fell back to zero.
    pub fn is_finite(&self) -> bool {
        self.monthly_payment.is_finite()
    }
}
