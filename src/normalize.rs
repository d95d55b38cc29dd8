use crate::error::MortgageError;

/// Turns raw field text into a value ready to be stored.
///
/// Grouping commas and surrounding whitespace are dropped first. An empty
/// field becomes `0.0` so a cleared box never blocks typing. Anything that is
/// not a finite, non-negative number is rejected and the caller keeps the
/// previous value.
pub fn normalize(raw: &str) -> Result<f64, MortgageError> {
    let cleaned: String = raw.chars().filter(|c| *c != ',').collect();
    let cleaned = cleaned.trim();

    if cleaned.is_empty() {
        return Ok(0.0);
    }

    let value: f64 = cleaned
        .parse()
        .map_err(|_| MortgageError::InvalidNumber(raw.to_string()))?;

    if !value.is_finite() {
        return Err(MortgageError::InvalidNumber(raw.to_string()));
    }
    if value < 0.0 {
        return Err(MortgageError::NegativeValue(value));
    }

    // "-0" parses to negative zero
    Ok(value + 0.0)
}
