use chrono::{DateTime, Utc};

/// Chart axis and list date format, e.g. "Jan 15, 2024".
pub const DISPLAY_DATE_FORMAT: &str = "%b %d, %Y";

/// Date picker format, e.g. "15 Jan 2024".
pub const PICKER_DATE_FORMAT: &str = "%d %b %Y";

pub fn format_display_date(at: DateTime<Utc>) -> String {
    at.format(DISPLAY_DATE_FORMAT).to_string()
}

pub fn format_picker_date(at: DateTime<Utc>) -> String {
    at.format(PICKER_DATE_FORMAT).to_string()
}

/// Balance / statistic figure: "USD 1,234.56" (always two decimals).
pub fn format_usd(value: f64) -> String {
    format!("USD {}", format_grouped(value, 2, 2))
}

/// Transaction amount: en-US grouping, at most three decimals, trailing
/// zeros dropped ("1,000", "12.5").
pub fn format_amount(value: f64) -> String {
    format_grouped(value, 0, 3)
}

/// en-US number formatting with thousands separators and a bounded
/// number of fraction digits.
pub fn format_grouped(value: f64, min_fraction: usize, max_fraction: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let fixed = format!("{:.*}", max_fraction, value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));

    let mut fraction = frac_part.trim_end_matches('0').to_string();
    while fraction.len() < min_fraction {
        fraction.push('0');
    }

    let mut out = String::with_capacity(fixed.len() + int_part.len() / 3 + 1);
    let is_zero = !fixed.bytes().any(|b| b.is_ascii_digit() && b != b'0');
    if value.is_sign_negative() && !is_zero {
        out.push('-');
    }
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if !fraction.is_empty() {
        out.push('.');
        out.push_str(&fraction);
    }
    out
}
