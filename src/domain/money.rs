use std::fmt;

/// Amounts and percentages are plain decimal numbers.
/// No rounding is applied to stored values; two decimals are a display concern.
pub type Amount = f64;

/// Currency symbol used when none is configured (South African rand).
pub const DEFAULT_CURRENCY_SYMBOL: &str = "R";

/// Format an amount with fixed 2-decimal precision.
/// Example: 500.0 -> "500.00", 1234.567 -> "1234.57"
pub fn format_amount(amount: Amount) -> String {
    // Avoid printing "-0.00"
    let amount = if amount == 0.0 { 0.0 } else { amount };
    format!("{:.2}", amount)
}

/// Format an amount prefixed by a currency symbol.
/// Example: ("R", 1500.0) -> "R1500.00"
pub fn format_money(symbol: &str, amount: Amount) -> String {
    format!("{}{}", symbol, format_amount(amount))
}

/// Format a percentage in its shortest form.
/// Example: 50.0 -> "50", 12.5 -> "12.5"
pub fn format_percent(percent: f64) -> String {
    // Avoid printing "-0"
    let percent = if percent == 0.0 { 0.0 } else { percent };
    format!("{}", percent)
}

/// Parse a decimal string into an amount.
/// Example: "1000" -> 1000.0, " 12.5 " -> 12.5
pub fn parse_amount(input: &str) -> Result<Amount, ParseAmountError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ParseAmountError::InvalidFormat(input.to_string()));
    }

    match trimmed.parse::<f64>() {
        // "NaN" and "inf" parse fine as f64 but are never valid money
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(ParseAmountError::InvalidFormat(input.to_string())),
    }
}

/// Parse a comma-separated list of percentages.
/// Example: "50,30,20" -> [50.0, 30.0, 20.0]
///
/// Blank entries count as zero, so "50,,50" yields [50.0, 0.0, 50.0].
pub fn parse_shares(input: &str) -> Result<Vec<f64>, ParseAmountError> {
    input
        .split(',')
        .map(|part| {
            if part.trim().is_empty() {
                Ok(0.0)
            } else {
                parse_amount(part)
            }
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseAmountError {
    InvalidFormat(String),
}

impl fmt::Display for ParseAmountError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseAmountError::InvalidFormat(input) => {
                write!(f, "invalid number: '{}'", input.trim())
            }
        }
    }
}

impl std::error::Error for ParseAmountError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(500.0), "500.00");
        assert_eq!(format_amount(1234.567), "1234.57");
        assert_eq!(format_amount(0.5), "0.50");
        assert_eq!(format_amount(0.0), "0.00");
        assert_eq!(format_amount(-0.0), "0.00");
        assert_eq!(format_amount(-12.3), "-12.30");
    }

    #[test]
    fn test_format_money_and_percent() {
        assert_eq!(format_money("R", 1500.0), "R1500.00");
        assert_eq!(format_money("$", 2.5), "$2.50");
        assert_eq!(format_percent(50.0), "50");
        assert_eq!(format_percent(12.5), "12.5");
        assert_eq!(format_percent(-10.0), "-10");
        assert_eq!(format_percent(-0.0), "0");
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("1000"), Ok(1000.0));
        assert_eq!(parse_amount(" 12.5 "), Ok(12.5));
        assert_eq!(parse_amount("-3"), Ok(-3.0));
        assert_eq!(parse_amount(".25"), Ok(0.25));
    }

    #[test]
    fn test_parse_amount_invalid() {
        assert!(parse_amount("").is_err());
        assert!(parse_amount("   ").is_err());
        assert!(parse_amount("abc").is_err());
        assert!(parse_amount("12.34.56").is_err());
        assert!(parse_amount("NaN").is_err());
        assert!(parse_amount("inf").is_err());
    }

    #[test]
    fn test_parse_shares() {
        assert_eq!(parse_shares("50,30,20"), Ok(vec![50.0, 30.0, 20.0]));
        assert_eq!(parse_shares(" 60 , 40 "), Ok(vec![60.0, 40.0]));
        assert_eq!(parse_shares("50,,50"), Ok(vec![50.0, 0.0, 50.0]));
        assert_eq!(parse_shares(""), Ok(vec![0.0]));
    }

    #[test]
    fn test_parse_shares_invalid() {
        assert_eq!(
            parse_shares("50,abc"),
            Err(ParseAmountError::InvalidFormat("abc".to_string()))
        );
    }
}
