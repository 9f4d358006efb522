//! Plain number rendering.

/// Render a float with the fewest digits that read back as the same value.
///
/// No exponent, no trailing zeros, no fixed width: `42.0` renders as `42`,
/// `1e-7` as `0.0000001`.
pub fn format_minimal(value: f64) -> String {
    if let Some(s) = non_finite(value) {
        return s.to_string();
    }
    format!("{}", value)
}

/// Render a float with exactly `places` digits after the decimal point.
///
/// Ties round to even, so `0.125` at two places renders as `0.12`.
pub fn format_fixed(value: f64, places: usize) -> String {
    if let Some(s) = non_finite(value) {
        return s.to_string();
    }
    format!("{:.*}", places, value)
}

fn non_finite(value: f64) -> Option<&'static str> {
    if value.is_nan() {
        Some("NaN")
    } else if value.is_infinite() {
        Some(if value.is_sign_positive() {
            "+Inf"
        } else {
            "-Inf"
        })
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_minimal() {
        assert_eq!(format_minimal(42.0), "42");
        assert_eq!(format_minimal(42.5), "42.5");
        assert_eq!(format_minimal(-0.25), "-0.25");
        assert_eq!(format_minimal(0.1 + 0.2), "0.30000000000000004");
        assert_eq!(format_minimal(1e-7), "0.0000001");
        assert_eq!(format_minimal(1e21), "1000000000000000000000");
    }

    #[test]
    fn test_format_fixed() {
        assert_eq!(format_fixed(3.14159, 2), "3.14");
        assert_eq!(format_fixed(3.14159, 0), "3");
        assert_eq!(format_fixed(1234.567, 2), "1234.57");
        assert_eq!(format_fixed(-42.1, 2), "-42.10");
        assert_eq!(format_fixed(7.0, 2), "7.00");
    }

    #[test]
    fn test_non_finite() {
        assert_eq!(format_minimal(f64::NAN), "NaN");
        assert_eq!(format_minimal(f64::INFINITY), "+Inf");
        assert_eq!(format_fixed(f64::NEG_INFINITY, 2), "-Inf");
    }
}
