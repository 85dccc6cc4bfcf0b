use crate::utils::error::{EstimateError, Result};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::str::FromStr;

/// Largest absolute amount, hour count or rate accepted from input.
pub const MAX_INPUT_MAGNITUDE: Decimal = dec!(1000000000000);

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(EstimateError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(EstimateError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(EstimateError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_min_quantity(field_name: &str, value: u32, min_value: u32) -> Result<()> {
    if value < min_value {
        return Err(EstimateError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

pub fn validate_magnitude(field_name: &str, value: Decimal) -> Result<()> {
    if value.abs() > MAX_INPUT_MAGNITUDE {
        return Err(EstimateError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Magnitude must not exceed {}", MAX_INPUT_MAGNITUDE),
        });
    }
    Ok(())
}

/// Parses raw form text ("12", " 2.5 ") into a decimal. Text that is not a
/// number, or is out of range, is rejected here instead of flowing into the
/// totals.
pub fn parse_decimal_input(field_name: &str, raw: &str) -> Result<Decimal> {
    let trimmed = raw.trim();
    let value = Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .map_err(|_| EstimateError::InvalidNumberError {
            field: field_name.to_string(),
            value: raw.to_string(),
        })?;
    validate_magnitude(field_name, value)?;
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("output_path", "./output").is_ok());
        assert!(validate_path("output_path", "").is_err());
        assert!(validate_path("output_path", "out\0put").is_err());
    }

    #[test]
    fn test_parse_decimal_input() {
        assert_eq!(parse_decimal_input("hours", "2.5").unwrap(), dec!(2.5));
        assert_eq!(parse_decimal_input("hours", " 40 ").unwrap(), dec!(40));
        assert_eq!(parse_decimal_input("rate", "-5").unwrap(), dec!(-5));
        assert!(parse_decimal_input("rate", "1e2").unwrap() == dec!(100));
        assert!(matches!(
            parse_decimal_input("hours", "abc"),
            Err(EstimateError::InvalidNumberError { .. })
        ));
        assert!(parse_decimal_input("hours", "").is_err());
    }

    #[test]
    fn test_validate_min_quantity() {
        assert!(validate_min_quantity("quantity", 1, 1).is_ok());
        assert!(validate_min_quantity("quantity", 0, 1).is_err());
    }

    #[test]
    fn test_parse_decimal_input_rejects_extreme_values() {
        let err = parse_decimal_input("overhead_rate", "79228162514264337593543950335").unwrap_err();
        assert!(matches!(
            err,
            EstimateError::InvalidConfigValueError { ref field, .. } if field == "overhead_rate"
        ));
        assert!(parse_decimal_input("profit_margin", "-1e13").is_err());
        assert_eq!(
            parse_decimal_input("rate", "1000000000000").unwrap(),
            MAX_INPUT_MAGNITUDE
        );
    }
}
