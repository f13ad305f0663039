//! Fixed-point money: every price and every cost in this crate is an
//! integer count of hundredths of the quote currency ("cents"). No binary
//! floating point appears anywhere in the pipeline.

use thiserror::Error;

/// An amount of money, in integer cents. Always non-negative.
pub type Cents = u64;

/// A malformed price token.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MoneyError {
    /// The token had no leading digits at all.
    #[error("empty or non-numeric price: {0:?}")]
    NotNumeric(String),
    /// A `.` was present but not followed by exactly two digits.
    #[error("price {0:?} has a fractional part that isn't exactly two digits")]
    BadFraction(String),
}

/// Parses a price token of the form `D+` or `D+.DD` into cents.
///
/// `"7"` -> 700, `"7.05"` -> 705, `"0.07"` -> 7. A fractional part, when
/// present, must be exactly two digits; this crate does not guess at
/// truncating or padding a different width.
pub fn parse_price(token: &str) -> Result<Cents, MoneyError> {
    let (whole, frac) = match token.split_once('.') {
        Some((whole, frac)) => (whole, Some(frac)),
        None => (token, None),
    };

    if whole.is_empty() || !whole.bytes().all(|b| b.is_ascii_digit()) {
        return Err(MoneyError::NotNumeric(token.to_string()));
    }
    let whole: Cents = whole
        .parse()
        .map_err(|_| MoneyError::NotNumeric(token.to_string()))?;

    let frac_cents: Cents = match frac {
        None => 0,
        Some(frac) if frac.len() == 2 && frac.bytes().all(|b| b.is_ascii_digit()) => {
            frac.parse().map_err(|_| MoneyError::BadFraction(token.to_string()))?
        }
        Some(_) => return Err(MoneyError::BadFraction(token.to_string())),
    };

    Ok(whole * 100 + frac_cents)
}

/// Formats cents as the canonical `D+.DD` representation: no currency
/// symbol, no grouping, no sign. `7` -> `"0.07"`.
pub fn format_price(cents: Cents) -> String {
    format!("{}.{:02}", cents / 100, cents % 100)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_bare_integer() {
        assert_eq!(parse_price("1075").unwrap(), 107_500);
    }

    #[test]
    fn parses_two_digit_fraction() {
        assert_eq!(parse_price("10.75").unwrap(), 1075);
        assert_eq!(parse_price("0.07").unwrap(), 7);
    }

    #[test]
    fn parses_zero() {
        assert_eq!(parse_price("0").unwrap(), 0);
        assert_eq!(parse_price("0.00").unwrap(), 0);
    }

    #[test]
    fn rejects_non_numeric() {
        assert!(parse_price("").is_err());
        assert!(parse_price("abc").is_err());
    }

    #[test]
    fn rejects_malformed_fraction() {
        assert!(parse_price("10.5").is_err());
        assert!(parse_price("10.555").is_err());
        assert!(parse_price("10.ab").is_err());
    }

    #[test]
    fn formats_sub_dollar_amounts_with_leading_zero() {
        assert_eq!(format_price(7), "0.07");
        assert_eq!(format_price(70), "0.70");
    }

    #[test]
    fn formats_round_trip_with_parse() {
        assert_eq!(format_price(parse_price("2164.95").unwrap()), "2164.95");
        assert_eq!(format_price(parse_price("10.00").unwrap()), "10.00");
    }

    #[test]
    fn formats_large_amounts() {
        assert_eq!(format_price(216_495), "2164.95");
    }
}
