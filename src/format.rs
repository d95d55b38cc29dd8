use crate::mortgage::Field;

pub const CURRENCY_SYMBOL: &str = "£";

/// Groups the integer part in threes and keeps at most three fraction digits,
/// dropping trailing zeros: `250000.0` -> `"250,000"`, `1234.5` -> `"1,234.5"`.
pub fn group_thousands(value: f64) -> String {
    let fixed = format!("{:.3}", value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');

    let mut out = group_digits(int_part);
    if !frac_part.is_empty() {
        out.push('.');
        out.push_str(frac_part);
    }
    if value < 0.0 && out.chars().any(|c| c.is_ascii_digit() && c != '0') {
        out.insert(0, '-');
    }
    out
}

/// `£` plus a grouped amount with exactly `decimals` fraction digits.
pub fn currency(value: f64, decimals: usize) -> String {
    let fixed = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (fixed.as_str(), None),
    };

    let sign = if value < 0.0 && fixed.chars().any(|c| c.is_ascii_digit() && c != '0') {
        "-"
    } else {
        ""
    };
    match frac_part {
        Some(frac) => format!("{sign}{CURRENCY_SYMBOL}{}.{frac}", group_digits(int_part)),
        None => format!("{sign}{CURRENCY_SYMBOL}{}", group_digits(int_part)),
    }
}

/// The text a form box shows for a stored value. Zero shows as an empty box.
pub fn field_text(field: Field, value: f64) -> String {
    if value == 0.0 {
        return String::new();
    }
    if field.is_currency() {
        group_thousands(value)
    } else {
        value.to_string()
    }
}

fn group_digits(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
