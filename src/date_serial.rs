//! Date serial number conversion.
//!
//! Excel stores dates as a day count since an epoch, with the time of day in the
//! fractional part:
//! - 1900 system: serial 1 = January 1, 1900
//! - 1904 system: serial 1 = January 1, 1904
//!
//! The 1900 system keeps Lotus 1-2-3's leap year bug: serial 60 is February 29, 1900,
//! a day that never existed, and every later serial is one day ahead of the calendar.
//! [`Timestamp`] can hold that phantom day; `chrono` types cannot.

use std::fmt;

use crate::options::DateSystem;

pub(crate) const MILLIS_PER_DAY: i64 = 86_400_000;

/// Serial 60 in the 1900 system.
const PHANTOM_LEAP_DAY: i64 = 60;

/// Keeps civil arithmetic and the `i32` year inside range for absurd serials.
const MAX_DAYS: i64 = 100_000_000_000;

/// A calendar date and time of day decoded from a serial number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Timestamp {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
    pub millisecond: u32,
    /// Day of week, 0 = Sunday ... 6 = Saturday.
    pub weekday: u32,
}

impl Timestamp {
    /// Returns the date part as a tuple.
    pub fn date(&self) -> (i32, u32, u32) {
        (self.year, self.month, self.day)
    }

    /// Returns the time part as a tuple, without milliseconds.
    pub fn time(&self) -> (u32, u32, u32) {
        (self.hour, self.minute, self.second)
    }

    /// True for the 1900 system's nonexistent February 29, 1900.
    pub fn is_phantom_leap_day(&self) -> bool {
        self.year == 1900 && self.month == 2 && self.day == 29
    }

    #[cfg(feature = "chrono")]
    pub fn to_naive_date(&self) -> Option<chrono::NaiveDate> {
        chrono::NaiveDate::from_ymd_opt(self.year, self.month, self.day)
    }

    /// Converts to a chrono date-time; `None` for the phantom leap day.
    #[cfg(feature = "chrono")]
    pub fn to_naive_date_time(&self) -> Option<chrono::NaiveDateTime> {
        self.to_naive_date()?
            .and_hms_milli_opt(self.hour, self.minute, self.second, self.millisecond)
    }
}

/// Fixed international form, `YYYY-MM-DDTHH:MM:SSZ`.
impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}Z",
            self.year, self.month, self.day, self.hour, self.minute, self.second
        )
    }
}

/// Convert a serial number to a calendar timestamp.
///
/// The fractional part is rounded to the nearest millisecond; a fraction that
/// rounds up to a full day carries into the next date. Negative serials are not
/// validated and produce dates before the epoch.
pub fn serial_to_timestamp(serial: f64, system: DateSystem) -> Timestamp {
    let whole = serial.floor();
    let mut days = (whole as i64).clamp(-MAX_DAYS, MAX_DAYS);
    let mut millis = ((serial - whole) * MILLIS_PER_DAY as f64).round() as i64;
    if millis >= MILLIS_PER_DAY {
        days += 1;
        millis -= MILLIS_PER_DAY;
    }

    let (year, month, day) = serial_to_date(days, system);
    let millis = millis.clamp(0, MILLIS_PER_DAY - 1) as u32;

    Timestamp {
        year,
        month,
        day,
        hour: millis / 3_600_000,
        minute: (millis / 60_000) % 60,
        second: (millis / 1000) % 60,
        millisecond: millis % 1000,
        weekday: serial_weekday(days, system),
    }
}

/// Convert the whole-day part of a serial number to (year, month, day).
pub fn serial_to_date(days: i64, system: DateSystem) -> (i32, u32, u32) {
    match system {
        DateSystem::Date1900 => {
            if days == PHANTOM_LEAP_DAY {
                return (1900, 2, 29);
            }
            let adjusted = if days > PHANTOM_LEAP_DAY { days - 1 } else { days };
            civil_from_days(epoch_base(system) + adjusted)
        }
        DateSystem::Date1904 => civil_from_days(epoch_base(system) + days),
    }
}

/// Convert a calendar date to a serial number (the inverse of [`serial_to_date`]).
pub fn date_to_serial(year: i32, month: u32, day: u32, system: DateSystem) -> f64 {
    if system == DateSystem::Date1900 && (year, month, day) == (1900, 2, 29) {
        return PHANTOM_LEAP_DAY as f64;
    }

    let mut serial = days_from_civil(i64::from(year), month, day) - epoch_base(system);
    if system == DateSystem::Date1900 && serial >= PHANTOM_LEAP_DAY {
        serial += 1;
    }
    serial as f64
}

/// Civil day number of serial 0.
fn epoch_base(system: DateSystem) -> i64 {
    match system {
        DateSystem::Date1900 => days_from_civil(1899, 12, 31),
        DateSystem::Date1904 => days_from_civil(1903, 12, 31),
    }
}

fn serial_weekday(days: i64, system: DateSystem) -> u32 {
    match system {
        // Excel counts serial 1 as a Sunday; from serial 61 on this agrees with the
        // real calendar.
        DateSystem::Date1900 => (days + 6).rem_euclid(7) as u32,
        DateSystem::Date1904 => civil_weekday(epoch_base(system) + days),
    }
}

/// 1970-01-01 (civil day 0) was a Thursday.
fn civil_weekday(civil: i64) -> u32 {
    (civil + 4).rem_euclid(7) as u32
}

/// Days since 1970-01-01 for a proleptic Gregorian date.
fn days_from_civil(year: i64, month: u32, day: u32) -> i64 {
    let month = i64::from(month);
    let y = if month <= 2 { year - 1 } else { year };
    let era = y.div_euclid(400);
    let yoe = y - era * 400;
    let mp = if month > 2 { month - 3 } else { month + 9 };
    let doy = (153 * mp + 2) / 5 + i64::from(day) - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    era * 146_097 + doe - 719_468
}

/// Proleptic Gregorian date for a count of days since 1970-01-01.
fn civil_from_days(civil: i64) -> (i32, u32, u32) {
    let z = civil + 719_468;
    let era = z.div_euclid(146_097);
    let doe = z - era * 146_097;
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = (doy - (153 * mp + 2) / 5 + 1) as u32;
    let month = (if mp < 10 { mp + 3 } else { mp - 9 }) as u32;
    let year = yoe + era * 400 + i64::from(month <= 2);
    (year as i32, month, day)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_civil_roundtrip() {
        assert_eq!(days_from_civil(1970, 1, 1), 0);
        assert_eq!(civil_from_days(0), (1970, 1, 1));
        assert_eq!(civil_from_days(days_from_civil(2000, 2, 29)), (2000, 2, 29));
        assert_eq!(civil_from_days(days_from_civil(1600, 3, 1)), (1600, 3, 1));
    }

    #[test]
    fn test_serial_to_date_1900_early() {
        assert_eq!(serial_to_date(1, DateSystem::Date1900), (1900, 1, 1));
        assert_eq!(serial_to_date(31, DateSystem::Date1900), (1900, 1, 31));
        assert_eq!(serial_to_date(32, DateSystem::Date1900), (1900, 2, 1));
    }

    #[test]
    fn test_serial_to_date_leap_year_bug() {
        assert_eq!(serial_to_date(59, DateSystem::Date1900), (1900, 2, 28));
        assert_eq!(serial_to_date(60, DateSystem::Date1900), (1900, 2, 29));
        assert_eq!(serial_to_date(61, DateSystem::Date1900), (1900, 3, 1));
    }

    #[test]
    fn test_serial_to_date_1904() {
        assert_eq!(serial_to_date(1, DateSystem::Date1904), (1904, 1, 1));
        // 1904 is a real leap year
        assert_eq!(serial_to_date(60, DateSystem::Date1904), (1904, 2, 29));
    }

    #[test]
    fn test_time_of_day() {
        let ts = serial_to_timestamp(46031.75, DateSystem::Date1900);
        assert_eq!(ts.date(), (2026, 1, 9));
        assert_eq!(ts.time(), (18, 0, 0));
    }

    #[test]
    fn test_fraction_carries_into_next_day() {
        let ts = serial_to_timestamp(100.999_999_999_9, DateSystem::Date1900);
        assert_eq!(ts.date(), serial_to_date(101, DateSystem::Date1900));
        assert_eq!(ts.time(), (0, 0, 0));
    }

    #[test]
    fn test_weekday() {
        // Serial 1 is a Sunday in Excel's reckoning
        assert_eq!(serial_to_timestamp(1.0, DateSystem::Date1900).weekday, 0);
        // January 9, 2026 was a Friday
        assert_eq!(serial_to_timestamp(46031.0, DateSystem::Date1900).weekday, 5);
        // January 1, 1904 was a Friday
        assert_eq!(serial_to_timestamp(1.0, DateSystem::Date1904).weekday, 5);
    }

    #[test]
    fn test_roundtrip_1900() {
        for &(y, m, d) in &[
            (1900, 1, 1),
            (1900, 2, 29),
            (1900, 3, 1),
            (2000, 2, 29),
            (2024, 12, 31),
            (2026, 1, 9),
        ] {
            let serial = date_to_serial(y, m, d, DateSystem::Date1900);
            let days = serial as i64;
            assert_eq!(
                serial_to_date(days, DateSystem::Date1900),
                (y, m, d),
                "Roundtrip failed for {}-{}-{}",
                y,
                m,
                d
            );
        }
    }
}
