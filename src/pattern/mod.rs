//! Date pattern formatting.
//!
//! Renders a serial number through a custom date/time format string such as
//! `yyyy-mm-dd`, `d mmmm yyyy`, `h:mm AM/PM` or `[h]:mm`.

pub mod lexer;
pub mod tokens;

use crate::date_serial::{serial_to_timestamp, MILLIS_PER_DAY};
use crate::locale::Locale;
use crate::options::DateSystem;
use lexer::Lexer;
use tokens::{AmPmStyle, ElapsedUnit, Token};

/// A tokenized date pattern, ready to format any number of timestamps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatePattern {
    tokens: Vec<Token>,
    twelve_hour: bool,
}

impl DatePattern {
    /// Tokenize a pattern. Never fails; unknown characters render literally.
    pub fn parse(pattern: &str) -> Self {
        let tokens = Lexer::new(pattern).tokenize();
        let twelve_hour = tokens.iter().any(|t| matches!(t, Token::AmPm(_)));
        DatePattern {
            tokens,
            twelve_hour,
        }
    }

    /// True if the pattern holds at least one date or time token.
    pub fn has_date_parts(&self) -> bool {
        self.tokens.iter().any(Token::is_date_part)
    }

    /// Format a serial number. Calendar tokens use the date in `system`; elapsed
    /// tokens count from serial zero.
    pub fn format(&self, serial: f64, system: DateSystem, locale: &Locale) -> String {
        let ts = serial_to_timestamp(serial, system);
        let mut result = String::new();
        for token in &self.tokens {
            match token {
                Token::Literal(s) => result.push_str(s),
                Token::Year(n) => {
                    if *n <= 2 {
                        result.push_str(&format!("{:02}", ts.year.rem_euclid(100)));
                    } else {
                        result.push_str(&format!("{:04}", ts.year));
                    }
                }
                Token::Month(n) => match n {
                    1 => result.push_str(&ts.month.to_string()),
                    2 => result.push_str(&format!("{:02}", ts.month)),
                    3 => result.push_str(locale.month_short(ts.month)),
                    4 => result.push_str(locale.month_full(ts.month)),
                    _ => {
                        if let Some(c) = locale.month_full(ts.month).chars().next() {
                            result.push(c);
                        }
                    }
                },
                Token::Minute(n) => push_padded(&mut result, ts.minute, *n),
                Token::Day(n) => match n {
                    1 => result.push_str(&ts.day.to_string()),
                    2 => result.push_str(&format!("{:02}", ts.day)),
                    3 => result.push_str(locale.day_short(ts.weekday)),
                    _ => result.push_str(locale.day_full(ts.weekday)),
                },
                Token::Hour(n) => {
                    let hour = if self.twelve_hour {
                        to_12_hour(ts.hour)
                    } else {
                        ts.hour
                    };
                    push_padded(&mut result, hour, *n);
                }
                Token::Second(n) => push_padded(&mut result, ts.second, *n),
                Token::SubSecond(places) => {
                    let digits = format!("{:03}", ts.millisecond);
                    result.push('.');
                    for i in 0..*places {
                        result.push(digits.chars().nth(i).unwrap_or('0'));
                    }
                }
                Token::AmPm(style) => result.push_str(&format_am_pm(*style, ts.hour, locale)),
                Token::Elapsed(unit, n) => {
                    let total = elapsed(serial, *unit);
                    result.push_str(&format!("{:0width$}", total, width = *n));
                }
            }
        }
        result
    }
}

/// Format a serial number through a custom pattern string.
pub fn format_pattern(serial: f64, system: DateSystem, pattern: &str, locale: &Locale) -> String {
    DatePattern::parse(pattern).format(serial, system, locale)
}

/// Whole units since serial zero, from the serial rounded to the millisecond.
fn elapsed(serial: f64, unit: ElapsedUnit) -> i64 {
    let millis = (serial * MILLIS_PER_DAY as f64).round() as i64;
    let per_unit = match unit {
        ElapsedUnit::Hours => 3_600_000,
        ElapsedUnit::Minutes => 60_000,
        ElapsedUnit::Seconds => 1000,
    };
    millis.div_euclid(per_unit)
}

fn push_padded(out: &mut String, value: u32, width: usize) {
    if width >= 2 {
        out.push_str(&format!("{:02}", value));
    } else {
        out.push_str(&value.to_string());
    }
}

/// 0 -> 12, 1-12 -> 1-12, 13-23 -> 1-11
fn to_12_hour(hour: u32) -> u32 {
    match hour {
        0 => 12,
        1..=12 => hour,
        _ => hour - 12,
    }
}

fn format_am_pm(style: AmPmStyle, hour: u32, locale: &Locale) -> String {
    let is_pm = hour >= 12;
    match style {
        AmPmStyle::Upper => {
            if is_pm {
                locale.pm_string.to_uppercase()
            } else {
                locale.am_string.to_uppercase()
            }
        }
        AmPmStyle::Lower => {
            if is_pm {
                locale.pm_string.to_lowercase()
            } else {
                locale.am_string.to_lowercase()
            }
        }
        AmPmStyle::ShortUpper => (if is_pm { "P" } else { "A" }).to_string(),
        AmPmStyle::ShortLower => (if is_pm { "p" } else { "a" }).to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fmt(serial: f64, pattern: &str) -> String {
        format_pattern(serial, DateSystem::Date1900, pattern, &Locale::EN_US)
    }

    #[test]
    fn test_to_12_hour() {
        assert_eq!(to_12_hour(0), 12);
        assert_eq!(to_12_hour(12), 12);
        assert_eq!(to_12_hour(13), 1);
        assert_eq!(to_12_hour(23), 11);
    }

    #[test]
    fn test_iso_date() {
        assert_eq!(fmt(46031.0, "yyyy-mm-dd"), "2026-01-09");
    }

    #[test]
    fn test_names() {
        assert_eq!(fmt(46031.0, "dddd, mmmm d, yyyy"), "Friday, January 9, 2026");
        assert_eq!(fmt(46031.0, "ddd d-mmm-yy"), "Fri 9-Jan-26");
        assert_eq!(fmt(46031.0, "mmmmm"), "J");
    }

    #[test]
    fn test_time() {
        assert_eq!(fmt(46031.75, "hh:mm:ss"), "18:00:00");
        assert_eq!(fmt(46031.75, "h:mm AM/PM"), "6:00 PM");
        assert_eq!(fmt(0.25, "h:mm a/p"), "6:00 a");
    }

    #[test]
    fn test_subsecond() {
        // 1.5 seconds past midnight
        let serial = 1.5 / 86400.0;
        assert_eq!(fmt(serial, "ss.0"), "01.5");
    }

    #[test]
    fn test_elapsed_time() {
        assert_eq!(fmt(1.5, "[h]"), "36");
        assert_eq!(fmt(1.5, "[h]:mm:ss"), "36:00:00");
        assert_eq!(fmt(0.0625, "[mm]:ss"), "90:00");
        assert_eq!(fmt(1.0 / 86400.0 * 75.0, "[s]"), "75");
        assert_eq!(fmt(0.25, "[hh]"), "06");
    }

    #[test]
    fn test_elapsed_ignores_epoch() {
        let pattern = DatePattern::parse("[h]");
        let locale = Locale::EN_US;
        assert_eq!(pattern.format(2.0, DateSystem::Date1904, &locale), "48");
        assert_eq!(pattern.format(2.0, DateSystem::Date1900, &locale), "48");
    }

    #[test]
    fn test_has_date_parts() {
        assert!(DatePattern::parse("yyyy").has_date_parts());
        assert!(!DatePattern::parse("\"text\"").has_date_parts());
    }
}
