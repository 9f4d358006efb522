//! xlsfmt - render BIFF (.xls) cell values as text
//!
//! This crate turns cell records that a BIFF reader has already parsed into the
//! text a spreadsheet would show: it decodes RK packed numbers, converts date
//! serials in both epoch systems, resolves a cell's style to a format rule, and
//! renders every cell variant (including multi-column runs) against read-only
//! workbook tables.

pub mod builtin_formats;
pub mod cell;
pub mod date_serial;
pub mod error;
pub mod locale;
pub mod number;
pub mod options;
pub mod pattern;
pub mod resolve;
pub mod rk;
pub mod workbook;

pub use builtin_formats::{fixed_decimals, is_builtin_date_format};
pub use cell::{Cell, Position, Run};
pub use date_serial::{serial_to_timestamp, Timestamp};
pub use error::{CellError, RenderError, ValueError};
pub use locale::Locale;
pub use options::DateSystem;
pub use pattern::{format_pattern, DatePattern};
pub use resolve::{classify_custom, render_number, render_rk, FormatKind};
pub use rk::{Rk, RkValue, XfRk};
pub use workbook::{Style, Workbook, WorkbookTables};
