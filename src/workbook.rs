//! Workbook-wide lookup tables consulted while rendering cells.
//!
//! The loader fills these in once, before any cell is rendered. Rendering only ever
//! reads them, so one context can be shared across threads without locking.

use std::collections::HashMap;

use crate::error::RenderError;
use crate::locale::Locale;
use crate::options::DateSystem;

/// Read-only view of the tables a cell needs in order to render itself.
pub trait Workbook {
    /// Format code of the style (XF) record at `xf`.
    fn format_no(&self, xf: u16) -> Result<u16, RenderError>;

    /// Pattern string of a custom format code, if the workbook defines one.
    fn custom_format(&self, format_no: u16) -> Option<&str>;

    /// Entry `index` of the shared string table.
    fn shared_string(&self, index: u32) -> Result<&str, RenderError>;

    fn date_system(&self) -> DateSystem;

    /// Locale used for month and day names in date patterns.
    fn locale(&self) -> &Locale {
        &Locale::EN_US
    }
}

/// The part of a style (XF) record that rendering cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Style {
    pub format_no: u16,
}

impl Style {
    pub fn new(format_no: u16) -> Self {
        Style { format_no }
    }
}

/// Owned workbook tables.
#[derive(Debug, Clone, Default)]
pub struct WorkbookTables {
    styles: Vec<Style>,
    custom_formats: HashMap<u16, String>,
    shared_strings: Vec<String>,
    date_system: DateSystem,
    locale: Locale,
}

impl WorkbookTables {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_date_system(mut self, date_system: DateSystem) -> Self {
        self.date_system = date_system;
        self
    }

    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    /// Append a style record and return its index.
    ///
    /// Returns `None` and leaves the table unchanged once every `u16` index is taken.
    pub fn push_style(&mut self, style: Style) -> Option<u16> {
        let index = u16::try_from(self.styles.len()).ok()?;
        self.styles.push(style);
        Some(index)
    }

    /// Register a custom format pattern (codes 164 and up in a real file).
    pub fn insert_custom_format(&mut self, format_no: u16, pattern: impl Into<String>) {
        self.custom_formats.insert(format_no, pattern.into());
    }

    /// Append a shared string and return its index.
    ///
    /// Returns `None` and leaves the table unchanged once every `u32` index is taken.
    pub fn push_shared_string(&mut self, s: impl Into<String>) -> Option<u32> {
        let index = u32::try_from(self.shared_strings.len()).ok()?;
        self.shared_strings.push(s.into());
        Some(index)
    }

    pub fn styles(&self) -> &[Style] {
        &self.styles
    }

    pub fn shared_strings(&self) -> &[String] {
        &self.shared_strings
    }
}

impl Workbook for WorkbookTables {
    fn format_no(&self, xf: u16) -> Result<u16, RenderError> {
        self.styles
            .get(usize::from(xf))
            .map(|s| s.format_no)
            .ok_or(RenderError::StyleOutOfRange {
                index: xf,
                len: self.styles.len(),
            })
    }

    fn custom_format(&self, format_no: u16) -> Option<&str> {
        self.custom_formats.get(&format_no).map(String::as_str)
    }

    fn shared_string(&self, index: u32) -> Result<&str, RenderError> {
        self.shared_strings
            .get(index as usize)
            .map(String::as_str)
            .ok_or(RenderError::SharedStringOutOfRange {
                index,
                len: self.shared_strings.len(),
            })
    }

    fn date_system(&self) -> DateSystem {
        self.date_system
    }

    fn locale(&self) -> &Locale {
        &self.locale
    }
}
