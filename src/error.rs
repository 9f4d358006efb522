//! Error types for decoding and rendering.

use thiserror::Error;

/// Errors raised when a decoded value is requested in the wrong shape.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValueError {
    #[error("packed value is an integer ({0}), not a float")]
    IsInteger(i64),
}

/// Errors raised while rendering a cell against a workbook.
///
/// These point at defects in the tables supplied by the loader; rendering never
/// attempts to repair them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    #[error("style index {index} out of range (styles: {len})")]
    StyleOutOfRange { index: u16, len: usize },

    #[error("shared string index {index} out of range (strings: {len})")]
    SharedStringOutOfRange { index: u32, len: usize },
}

/// Errors raised when constructing a cell from record fields.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CellError {
    #[error("run record holds no cells")]
    EmptyRun,

    #[error("run spans columns {first}..={last} but holds {len} cells")]
    SpanMismatch { first: u16, last: u16, len: usize },
}
