//! Parsing and display of user-entered values.

use crate::error::{MenuError, Result};

/// Parses text from a numeric field into a finite number.
///
/// Surrounding whitespace is ignored. `NaN` and infinities are rejected.
pub fn parse_finite(text: &str) -> Result<f32> {
    let trimmed = text.trim();
    match trimmed.parse::<f32>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(MenuError::InvalidNumber(text.to_string())),
    }
}

/// Parses a normal-mode index from a select value.
///
/// Accepts the leading integer of the trimmed text, so `"3"`, `" -1 "` and
/// `"4.0"` are all valid; text without leading digits is rejected.
pub fn parse_mode_index(text: &str) -> Result<i32> {
    let trimmed = text.trim();
    let sign_len = usize::from(trimmed.starts_with(['-', '+']));
    let digits = trimmed[sign_len..]
        .chars()
        .take_while(char::is_ascii_digit)
        .count();
    if digits == 0 {
        return Err(MenuError::InvalidModeIndex(text.to_string()));
    }
    trimmed[..sign_len + digits]
        .parse::<i32>()
        .map_err(|_| MenuError::InvalidModeIndex(text.to_string()))
}

/// Formats `value` with a fixed number of decimals, or returns `fallback`
/// when the value is not finite.
pub fn format_fixed(value: f32, decimals: usize, fallback: &str) -> String {
    if value.is_finite() {
        format!("{value:.decimals$}")
    } else {
        fallback.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_finite() {
        assert_eq!(parse_finite("0.0234").unwrap(), 0.0234);
        assert_eq!(parse_finite("  1.5 ").unwrap(), 1.5);
        assert!(parse_finite("").is_err());
        assert!(parse_finite("abc").is_err());
        assert!(parse_finite("NaN").is_err());
        assert!(parse_finite("inf").is_err());
        assert!(parse_finite("-infinity").is_err());
    }

    #[test]
    fn test_parse_mode_index() {
        assert_eq!(parse_mode_index("2").unwrap(), 2);
        assert_eq!(parse_mode_index(" -1 ").unwrap(), -1);
        assert_eq!(parse_mode_index("4.0").unwrap(), 4);
        assert_eq!(parse_mode_index("+7").unwrap(), 7);
        assert!(parse_mode_index("None").is_err());
        assert!(parse_mode_index("-").is_err());
        assert!(parse_mode_index("99999999999").is_err());
    }

    #[test]
    fn test_format_fixed() {
        assert_eq!(format_fixed(0.01, 4, "0.0000"), "0.0100");
        assert_eq!(format_fixed(1.0, 1, "0.0"), "1.0");
        assert_eq!(format_fixed(f32::NAN, 4, "0.0000"), "0.0000");
        assert_eq!(format_fixed(f32::INFINITY, 1, "0.0"), "0.0");
    }

    #[test]
    fn test_error_messages() {
        let err = parse_finite("x").unwrap_err();
        assert_eq!(err.to_string(), "invalid number: 'x'");
        let err = parse_mode_index("x").unwrap_err();
        assert_eq!(err.to_string(), "invalid normal mode index: 'x'");
    }
}
