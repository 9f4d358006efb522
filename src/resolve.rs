//! Format resolution: pick a rendering rule for a numeric cell from its style.
//!
//! Custom patterns are classified by plain substring checks rather than parsed.
//! The marker list and its order are relied on by existing output and must stay
//! exactly as they are, gaps included.

use log::{debug, trace};

use crate::builtin_formats::{fixed_decimals, is_builtin_date_format, is_custom_format};
use crate::date_serial::serial_to_timestamp;
use crate::error::RenderError;
use crate::number::{format_fixed, format_minimal};
use crate::pattern::format_pattern;
use crate::rk::XfRk;
use crate::workbook::Workbook;

/// Case-sensitive markers of a numeric pattern.
const NUMBER_MARKERS: [&str; 2] = ["#", ".00"];

/// Markers checked against the lowercased pattern. A pattern carrying any of them
/// also renders as a plain number.
const PLAIN_MARKERS: [&str; 6] = ["m/y", "d/y", "m.y", "d.y", "h:", "д.г"];

/// How a custom format pattern renders a numeric cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatKind {
    /// The raw number, minimal digits
    Number,
    /// A date/time through the pattern's own tokens
    Date,
}

/// Classify a custom pattern. Numeric markers are checked first, so `#,##0 m/yy`
/// is a number.
pub fn classify_custom(pattern: &str) -> FormatKind {
    let lower = pattern.to_lowercase();
    let plain = lower == "general"
        || has_number_marker(pattern)
        || PLAIN_MARKERS.iter().any(|m| lower.contains(m));
    let kind = if plain {
        FormatKind::Number
    } else {
        FormatKind::Date
    };
    trace!("custom format {:?} classified as {:?}", pattern, kind);
    kind
}

/// True if the pattern contains `#` or `.00`.
pub fn has_number_marker(pattern: &str) -> bool {
    NUMBER_MARKERS.iter().any(|m| pattern.contains(m))
}

/// Render an RK value through its style.
///
/// Never fails: a style index past the end of the style table renders the raw value.
pub fn render_rk(wb: &dyn Workbook, value: XfRk) -> String {
    let format_no = match wb.format_no(value.xf) {
        Ok(format_no) => format_no,
        Err(err) => {
            debug!("rendering RK without style: {}", err);
            return value.rk.to_string();
        }
    };

    if is_custom_format(format_no) {
        match wb.custom_format(format_no) {
            Some(pattern) => {
                if classify_custom(pattern) == FormatKind::Number {
                    return value.rk.to_string();
                }
                return render_date_pattern(wb, value.rk.to_f64(), pattern);
            }
            None => debug!("custom format {} not defined", format_no),
        }
    } else if is_builtin_date_format(format_no) {
        return render_builtin_date(wb, value.rk.to_f64());
    }

    value.rk.to_string()
}

/// Render a full 8-byte float through its style.
///
/// Fails only when the style index is out of range.
pub fn render_number(wb: &dyn Workbook, xf: u16, value: f64) -> Result<String, RenderError> {
    let format_no = wb.format_no(xf)?;
    let pattern = wb.custom_format(format_no);

    if pattern.is_some_and(has_number_marker) {
        return Ok(format_minimal(value));
    }
    if is_builtin_date_format(format_no) {
        return Ok(render_builtin_date(wb, value));
    }
    if let Some(places) = fixed_decimals(format_no) {
        return Ok(format_fixed(value, places));
    }
    if format_no != 0 {
        match pattern {
            Some(pattern) => return Ok(render_date_pattern(wb, value, pattern)),
            None => debug!("format {} has no pattern, rendering plain number", format_no),
        }
    }

    Ok(format_minimal(value))
}

/// Built-in date codes render in the fixed international form.
fn render_builtin_date(wb: &dyn Workbook, serial: f64) -> String {
    serial_to_timestamp(serial, wb.date_system()).to_string()
}

fn render_date_pattern(wb: &dyn Workbook, serial: f64, pattern: &str) -> String {
    format_pattern(serial, wb.date_system(), pattern, wb.locale())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rk::Rk;
    use crate::workbook::{Style, WorkbookTables};

    fn workbook(format_no: u16, pattern: Option<&str>) -> WorkbookTables {
        let mut wb = WorkbookTables::new();
        wb.push_style(Style::new(format_no));
        if let Some(p) = pattern {
            wb.insert_custom_format(format_no, p);
        }
        wb
    }

    #[test]
    fn test_classify_numeric() {
        assert_eq!(classify_custom("General"), FormatKind::Number);
        assert_eq!(classify_custom("#,##0.00"), FormatKind::Number);
        assert_eq!(classify_custom("0.00"), FormatKind::Number);
    }

    #[test]
    fn test_classify_plain_markers() {
        assert_eq!(classify_custom("mm/yy"), FormatKind::Number);
        assert_eq!(classify_custom("DD.YYYY"), FormatKind::Number);
        assert_eq!(classify_custom("h:mm"), FormatKind::Number);
        assert_eq!(classify_custom("ДД.ГГГГ"), FormatKind::Number);
    }

    #[test]
    fn test_classify_date() {
        assert_eq!(classify_custom("yyyy-mm-dd"), FormatKind::Date);
        assert_eq!(classify_custom("d mmmm yyyy"), FormatKind::Date);
        assert_eq!(classify_custom("0"), FormatKind::Date);
    }

    #[test]
    fn test_number_marker_wins() {
        assert_eq!(classify_custom("# m/y"), FormatKind::Number);
    }

    #[test]
    fn test_rk_custom_date() {
        let wb = workbook(164, Some("yyyy-mm-dd"));
        let value = XfRk::new(0, Rk::from_int(46031).unwrap());
        assert_eq!(render_rk(&wb, value), "2026-01-09");
    }

    #[test]
    fn test_rk_builtin_date() {
        let wb = workbook(22, None);
        let value = XfRk::new(0, Rk::from_int(46031).unwrap());
        assert_eq!(render_rk(&wb, value), "2026-01-09T00:00:00Z");
    }

    #[test]
    fn test_rk_missing_style_renders_raw() {
        let wb = WorkbookTables::new();
        let value = XfRk::new(9, Rk::from_int(12).unwrap());
        assert_eq!(render_rk(&wb, value), "12");
    }

    #[test]
    fn test_rk_custom_without_pattern() {
        let wb = workbook(170, None);
        let value = XfRk::new(0, Rk::from_int(7).unwrap());
        assert_eq!(render_rk(&wb, value), "7");
    }

    #[test]
    fn test_number_fixed() {
        assert_eq!(render_number(&workbook(1, None), 0, 2.6).unwrap(), "3");
        assert_eq!(render_number(&workbook(2, None), 0, 3.14159).unwrap(), "3.14");
        assert_eq!(render_number(&workbook(3, None), 0, 1234.4).unwrap(), "1234");
        assert_eq!(render_number(&workbook(4, None), 0, 0.5).unwrap(), "0.50");
    }

    #[test]
    fn test_number_general() {
        assert_eq!(render_number(&workbook(0, None), 0, 2.25).unwrap(), "2.25");
    }

    #[test]
    fn test_number_custom_pattern() {
        let wb = workbook(165, Some("#,##0.0"));
        assert_eq!(render_number(&wb, 0, 1234.5).unwrap(), "1234.5");

        let wb = workbook(166, Some("d mmm yyyy"));
        assert_eq!(render_number(&wb, 0, 46031.0).unwrap(), "9 Jan 2026");
    }

    #[test]
    fn test_number_elapsed_hours() {
        let wb = workbook(167, Some("[h]"));
        assert_eq!(render_number(&wb, 0, 1.5).unwrap(), "36");
    }

    #[test]
    fn test_number_missing_style() {
        let wb = WorkbookTables::new();
        assert_eq!(
            render_number(&wb, 2, 1.0),
            Err(RenderError::StyleOutOfRange { index: 2, len: 0 })
        );
    }
}
