//! Typed amount parsing.
//!
//! Entry amounts stay user-editable strings and are parsed lazily. The parse
//! itself is an explicit typed result so callers decide what a failure means:
//! total computation and export both skip failed rows instead of surfacing an
//! error to the user.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AmountParseError {
    #[error("amount is empty")]
    Empty,
    #[error("'{0}' is not a valid amount")]
    Invalid(String),
}

/// Parse a user-entered amount string into a dollar value.
///
/// Input is trimmed first. Accepts anything `f64` accepts, so negative
/// amounts and scientific notation pass through unchanged.
pub fn parse_amount(raw: &str) -> Result<f64, AmountParseError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(AmountParseError::Empty);
    }
    trimmed
        .parse::<f64>()
        .map_err(|_| AmountParseError::Invalid(trimmed.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_amounts() {
        assert_eq!(parse_amount("1000"), Ok(1000.0));
        assert_eq!(parse_amount("12.50"), Ok(12.5));
        assert_eq!(parse_amount("  42.0  "), Ok(42.0));
        assert_eq!(parse_amount("-5.25"), Ok(-5.25));
    }

    #[test]
    fn test_parse_empty_amount() {
        assert_eq!(parse_amount(""), Err(AmountParseError::Empty));
        assert_eq!(parse_amount("   "), Err(AmountParseError::Empty));
    }

    #[test]
    fn test_parse_invalid_amount() {
        assert_eq!(
            parse_amount("abc"),
            Err(AmountParseError::Invalid("abc".to_string()))
        );
        assert_eq!(
            parse_amount("$10"),
            Err(AmountParseError::Invalid("$10".to_string()))
        );
        assert_eq!(
            parse_amount("1,000"),
            Err(AmountParseError::Invalid("1,000".to_string()))
        );
    }
}
