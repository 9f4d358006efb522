//! Built-in number format codes.
//!
//! Format codes below 164 are built in; the workbook stores no pattern for them.
//! Only the codes that change how a BIFF cell renders are listed here.

/// First format code available to workbook-defined (custom) formats.
pub const FIRST_CUSTOM_FORMAT: u16 = 164;

/// True for the built-in date and time codes, including the Far East ranges.
///
/// See the OpenOffice.org Excel file format documentation, FORMAT record.
///
/// # Examples
/// ```
/// use xlsfmt::is_builtin_date_format;
///
/// assert!(is_builtin_date_format(14));
/// assert!(is_builtin_date_format(36));
/// assert!(!is_builtin_date_format(21));
/// ```
pub fn is_builtin_date_format(format_no: u16) -> bool {
    matches!(format_no, 14..=17 | 22 | 27..=36 | 50..=58)
}

/// True for codes that index the workbook's custom format table.
pub fn is_custom_format(format_no: u16) -> bool {
    format_no >= FIRST_CUSTOM_FORMAT
}

/// Decimal places for the fixed-point built-ins.
///
/// Codes 3 and 4 carry a thousands separator in Excel; it is not rendered.
pub fn fixed_decimals(format_no: u16) -> Option<usize> {
    match format_no {
        1 | 3 => Some(0), // 0, #,##0
        2 | 4 => Some(2), // 0.00, #,##0.00
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_ranges() {
        for code in [14, 15, 16, 17, 22, 27, 30, 36, 50, 55, 58] {
            assert!(is_builtin_date_format(code), "code {} should be a date", code);
        }
        for code in [0, 1, 13, 18, 21, 23, 26, 37, 49, 59, 164] {
            assert!(!is_builtin_date_format(code), "code {} is not a date", code);
        }
    }

    #[test]
    fn test_fixed_decimals() {
        assert_eq!(fixed_decimals(1), Some(0));
        assert_eq!(fixed_decimals(2), Some(2));
        assert_eq!(fixed_decimals(3), Some(0));
        assert_eq!(fixed_decimals(4), Some(2));
        assert_eq!(fixed_decimals(0), None);
        assert_eq!(fixed_decimals(9), None);
    }

    #[test]
    fn test_is_custom() {
        assert!(!is_custom_format(163));
        assert!(is_custom_format(164));
    }
}
