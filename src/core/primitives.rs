use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::error::{ChartError, ChartResult};

pub fn decimal_to_f64(value: Decimal, field_name: &str) -> ChartResult<f64> {
    value.to_f64().ok_or_else(|| {
        ChartError::InvalidData(format!("{field_name} cannot be represented as f64"))
    })
}

/// Parses a `year-month-day` date such as `2020-1-31` or `2020-01-31`.
pub fn parse_ymd(input: &str, field_name: &str) -> ChartResult<NaiveDate> {
    let invalid = || {
        ChartError::InvalidArgument(format!(
            "{field_name} must be a `year-month-day` date, got `{input}`"
        ))
    };
    let mut parts = input.trim().split('-').map(str::parse::<u32>);
    let (Some(Ok(year)), Some(Ok(month)), Some(Ok(day)), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return Err(invalid());
    };
    let year = i32::try_from(year).map_err(|_| invalid())?;
    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(invalid)
}

/// Uppercases the first character and lowercases the rest.
#[must_use]
pub fn capitalize(input: &str) -> String {
    let mut chars = input.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_ymd_accepts_unpadded_parts() {
        let date = parse_ymd("2020-1-5", "start").expect("date");
        assert_eq!(date, NaiveDate::from_ymd_opt(2020, 1, 5).expect("date"));
    }

    #[test]
    fn parse_ymd_rejects_malformed_input() {
        for input in ["2020-13-01", "2020-01", "2020/01/01", "2020-01-01-01", ""] {
            assert!(
                matches!(parse_ymd(input, "start"), Err(ChartError::InvalidArgument(_))),
                "{input}"
            );
        }
    }

    #[test]
    fn capitalize_lowers_the_tail() {
        assert_eq!(capitalize("adj CLOSE"), "Adj close");
        assert_eq!(capitalize("Close"), "Close");
        assert_eq!(capitalize(""), "");
    }
}
