// Display formatting - Indian numbering convention
// K = thousand, L = lakh (1,00,000), Cr = crore (1,00,00,000)

use crate::kpi::Ratio;
use num_format::{Locale, ToFormattedString};

/// Shown in place of a missing or zero figure
pub const PLACEHOLDER: &str = "—";

const THOUSAND: f64 = 1_000.0;
const LAKH: f64 = 100_000.0;
const CRORE: f64 = 10_000_000.0;

/// (divisor, decimals, suffix), smallest first
const UNITS: [(f64, usize, &str); 4] = [
    (1.0, 0, ""),
    (THOUSAND, 1, "K"),
    (LAKH, 2, "L"),
    (CRORE, 2, "Cr"),
];

fn round_to(value: f64, decimals: usize) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

/// Compact magnitude for KPI tiles and chart labels
///
/// `None`, zero and non-finite values render as [`PLACEHOLDER`].
/// The unit is settled after rounding, so 99,999 reads "1.00L" rather than "100.0K".
pub fn format_compact(value: Option<f64>) -> String {
    let v = match value {
        Some(v) if v.is_finite() && v != 0.0 => v,
        _ => return PLACEHOLDER.to_string(),
    };

    let abs = v.abs();
    let mut unit = UNITS
        .iter()
        .rposition(|(divisor, _, _)| abs >= *divisor)
        .unwrap_or(0);

    loop {
        let (divisor, decimals, suffix) = UNITS[unit];
        let mantissa = round_to(v / divisor, decimals);

        match UNITS.get(unit + 1) {
            Some((next, _, _)) if mantissa.abs() * divisor >= *next => unit += 1,
            _ => return format!("{:.*}{}", decimals, mantissa, suffix),
        }
    }
}

/// Whole number with Indian digit grouping: 1234567 -> "12,34,567"
pub fn format_indian(value: f64) -> String {
    if !value.is_finite() {
        return PLACEHOLDER.to_string();
    }

    (value.round() as i64).to_formatted_string(&Locale::en_IN)
}

/// Signed percentage for growth figures: "-6.81%", "+4.20%"
pub fn format_ratio_percent(ratio: Ratio) -> String {
    match ratio {
        Ratio::Value(v) => format!("{:+.2}%", v),
        Ratio::NotApplicable => "N/A".to_string(),
    }
}

/// Unsigned percentage for shares and show rates: "30.97%"
pub fn format_share(ratio: Ratio) -> String {
    match ratio {
        Ratio::Value(v) => format!("{:.2}%", v),
        Ratio::NotApplicable => "N/A".to_string(),
    }
}

/// Conversion multiplier: "3.25x"
pub fn format_multiplier(ratio: Ratio) -> String {
    match ratio {
        Ratio::Value(v) => format!("{:.2}x", v),
        Ratio::NotApplicable => "No data".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compact_thousands() {
        assert_eq!(format_compact(Some(92710.0)), "92.7K");
        assert_eq!(format_compact(Some(7415.0)), "7.4K");
        assert_eq!(format_compact(Some(1000.0)), "1.0K");
    }

    #[test]
    fn test_compact_lakh_and_crore() {
        assert_eq!(format_compact(Some(250_000.0)), "2.50L");
        assert_eq!(format_compact(Some(12_345_678.0)), "1.23Cr");
    }

    #[test]
    fn test_compact_small_and_negative() {
        assert_eq!(format_compact(Some(999.0)), "999");
        assert_eq!(format_compact(Some(-7415.0)), "-7.4K");
    }

    #[test]
    fn test_compact_promotes_unit_after_rounding() {
        assert_eq!(format_compact(Some(999.6)), "1.0K");
        assert_eq!(format_compact(Some(99_999.0)), "1.00L");
        assert_eq!(format_compact(Some(9_999_999.0)), "1.00Cr");
        assert_eq!(format_compact(Some(-99_999.0)), "-1.00L");
        assert_eq!(format_compact(Some(99_940.0)), "99.9K");
    }

    #[test]
    fn test_compact_placeholder() {
        assert_eq!(format_compact(None), PLACEHOLDER);
        assert_eq!(format_compact(Some(0.0)), PLACEHOLDER);
        assert_eq!(format_compact(Some(f64::NAN)), PLACEHOLDER);
        assert_eq!(format_compact(Some(f64::INFINITY)), PLACEHOLDER);
    }

    #[test]
    fn test_indian_grouping() {
        assert_eq!(format_indian(0.0), "0");
        assert_eq!(format_indian(999.0), "999");
        assert_eq!(format_indian(1000.0), "1,000");
        assert_eq!(format_indian(100_000.0), "1,00,000");
        assert_eq!(format_indian(1_234_567.0), "12,34,567");
        assert_eq!(format_indian(123_456_789.0), "12,34,56,789");
        assert_eq!(format_indian(-11679.0), "-11,679");
        assert_eq!(format_indian(11678.6), "11,679");
        assert_eq!(format_indian(f64::NAN), PLACEHOLDER);
    }

    #[test]
    fn test_ratio_strings() {
        assert_eq!(format_ratio_percent(Ratio::Value(-6.8075)), "-6.81%");
        assert_eq!(format_ratio_percent(Ratio::Value(4.2)), "+4.20%");
        assert_eq!(format_ratio_percent(Ratio::NotApplicable), "N/A");
        assert_eq!(format_share(Ratio::Value(30.9676)), "30.97%");
        assert_eq!(format_multiplier(Ratio::Value(3.254)), "3.25x");
        assert_eq!(format_multiplier(Ratio::NotApplicable), "No data");
    }
}
