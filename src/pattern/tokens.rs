//! Token types for date pattern strings.

/// Case and width of an AM/PM marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AmPmStyle {
    /// `AM/PM`
    Upper,
    /// `am/pm`
    Lower,
    /// `A/P`
    ShortUpper,
    /// `a/p`
    ShortLower,
}

/// Unit of a bracketed elapsed-time token such as `[h]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElapsedUnit {
    Hours,
    Minutes,
    Seconds,
}

/// A token in a date pattern. Counts are the run length of the letter (`yyyy` = 4).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    Literal(String),
    Year(usize),
    /// `m` run not yet known to be a month or a minute
    Month(usize),
    Minute(usize),
    Day(usize),
    Hour(usize),
    Second(usize),
    /// `.0`, `.00`, `.000` after seconds
    SubSecond(usize),
    AmPm(AmPmStyle),
    /// `[h]`, `[mm]`, `[ss]`: total time since serial zero, not time of day
    Elapsed(ElapsedUnit, usize),
}

impl Token {
    /// True for tokens that take part in month/minute disambiguation.
    pub(crate) fn is_date_part(&self) -> bool {
        !matches!(self, Token::Literal(_))
    }
}
