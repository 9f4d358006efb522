//! Workbook-wide rendering settings.

/// The date system used for serial number conversion.
///
/// Stored once per workbook (the `DATEMODE` record) and never changed after load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum DateSystem {
    /// Windows Excel default (1900-based, includes leap year bug)
    #[default]
    Date1900,
    /// Mac Excel legacy (1904-based)
    Date1904,
}

impl DateSystem {
    /// Map the raw `DATEMODE` flag (0 or 1) to a date system.
    pub fn from_flag(flag: u16) -> Self {
        if flag == 1 {
            DateSystem::Date1904
        } else {
            DateSystem::Date1900
        }
    }
}
