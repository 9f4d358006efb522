//! Locale data for date pattern tokens.

/// Month and day names plus AM/PM markers used when rendering date patterns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locale {
    pub am_string: &'static str,
    pub pm_string: &'static str,
    pub month_names_short: [&'static str; 12],
    pub month_names_full: [&'static str; 12],
    pub day_names_short: [&'static str; 7],
    pub day_names_full: [&'static str; 7],
}

impl Default for Locale {
    fn default() -> Self {
        Self::EN_US
    }
}

impl Locale {
    /// US English.
    pub const EN_US: Locale = Locale {
        am_string: "AM",
        pm_string: "PM",
        month_names_short: [
            "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
        ],
        month_names_full: [
            "January",
            "February",
            "March",
            "April",
            "May",
            "June",
            "July",
            "August",
            "September",
            "October",
            "November",
            "December",
        ],
        day_names_short: ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"],
        day_names_full: [
            "Sunday",
            "Monday",
            "Tuesday",
            "Wednesday",
            "Thursday",
            "Friday",
            "Saturday",
        ],
    };

    pub fn month_short(&self, month: u32) -> &'static str {
        self.month_names_short[month_index(month)]
    }

    pub fn month_full(&self, month: u32) -> &'static str {
        self.month_names_full[month_index(month)]
    }

    /// `weekday` is 0 = Sunday ... 6 = Saturday.
    pub fn day_short(&self, weekday: u32) -> &'static str {
        self.day_names_short[(weekday % 7) as usize]
    }

    pub fn day_full(&self, weekday: u32) -> &'static str {
        self.day_names_full[(weekday % 7) as usize]
    }
}

fn month_index(month: u32) -> usize {
    (month.clamp(1, 12) - 1) as usize
}
