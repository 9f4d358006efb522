//! Cell values decoded from BIFF row records.
//!
//! One [`Cell`] is built per cell record once its bytes are parsed, and is never
//! mutated afterwards. Every variant renders to one string per column it covers,
//! in column order.

use crate::error::{CellError, RenderError};
use crate::resolve::{render_number, render_rk};
use crate::rk::XfRk;
use crate::workbook::Workbook;

/// Text rendered for a cell with no specific content.
pub const PLACEHOLDER_TEXT: &str = "default";

/// Text rendered for a formula whose byte code is kept but not evaluated.
pub const FORMULA_TEXT: &str = "FormulaCol";

/// Row and first column of a cell record, zero-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub row: u16,
    pub first_col: u16,
}

impl Position {
    pub fn new(row: u16, first_col: u16) -> Self {
        Position { row, first_col }
    }
}

/// The values of a multi-column record, one per covered column.
///
/// Only built through [`Run::new`], which checks the values against the record's
/// column span, so a run is never empty and never runs past its last column.
#[derive(Debug, Clone, PartialEq)]
pub struct Run<T> {
    pos: Position,
    last_col: u16,
    values: Vec<T>,
}

impl<T> Run<T> {
    /// Check `values` against the span `pos.first_col..=last_col`.
    pub fn new(pos: Position, last_col: u16, values: Vec<T>) -> Result<Self, CellError> {
        check_span(pos, last_col, values.len())?;
        Ok(Run {
            pos,
            last_col,
            values,
        })
    }

    pub fn pos(&self) -> Position {
        self.pos
    }

    pub fn last_col(&self) -> u16 {
        self.last_col
    }

    pub fn values(&self) -> &[T] {
        &self.values
    }
}

/// A decoded cell record.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    /// No specific content; never produced for a real record.
    Placeholder { pos: Position },
    /// `BLANK`: a formatted but empty cell.
    Blank { pos: Position, xf: u16 },
    /// `MULBLANK`: adjacent blank cells, one style each.
    BlankRun { run: Run<u16> },
    /// `NUMBER`: a full 8-byte float.
    Number { pos: Position, xf: u16, value: f64 },
    /// `RK`: a packed number.
    Rk { pos: Position, value: XfRk },
    /// `MULRK`: adjacent packed numbers, one style each.
    RkRun { run: Run<XfRk> },
    /// `LABELSST`: an index into the shared string table.
    SharedString { pos: Position, xf: u16, index: u32 },
    /// `LABEL`: inline text.
    Label { pos: Position, xf: u16, text: String },
    /// The string result of a formula, already decoded.
    FormulaResult { pos: Position, text: String },
    /// `FORMULA`: cached result bytes plus the formula's byte code.
    Formula {
        pos: Position,
        xf: u16,
        result: [u8; 8],
        flags: u16,
        bytes: Vec<u8>,
    },
}

impl Cell {
    /// Build a `MULRK` cell, checking the record's last column against its values.
    pub fn rk_run(pos: Position, last_col: u16, values: Vec<XfRk>) -> Result<Cell, CellError> {
        Ok(Cell::RkRun {
            run: Run::new(pos, last_col, values)?,
        })
    }

    /// Build a `MULBLANK` cell, checking the record's last column against its styles.
    pub fn blank_run(pos: Position, last_col: u16, xfs: Vec<u16>) -> Result<Cell, CellError> {
        Ok(Cell::BlankRun {
            run: Run::new(pos, last_col, xfs)?,
        })
    }

    pub fn position(&self) -> Position {
        match self {
            Cell::BlankRun { run } => run.pos(),
            Cell::RkRun { run } => run.pos(),
            Cell::Placeholder { pos }
            | Cell::Blank { pos, .. }
            | Cell::Number { pos, .. }
            | Cell::Rk { pos, .. }
            | Cell::SharedString { pos, .. }
            | Cell::Label { pos, .. }
            | Cell::FormulaResult { pos, .. }
            | Cell::Formula { pos, .. } => *pos,
        }
    }

    pub fn row(&self) -> u16 {
        self.position().row
    }

    pub fn first_col(&self) -> u16 {
        self.position().first_col
    }

    /// Last column covered; equal to `first_col` except for runs.
    pub fn last_col(&self) -> u16 {
        match self {
            Cell::BlankRun { run } => run.last_col(),
            Cell::RkRun { run } => run.last_col(),
            _ => self.first_col(),
        }
    }

    /// Number of columns covered.
    pub fn width(&self) -> usize {
        usize::from(self.last_col() - self.first_col()) + 1
    }

    /// Style index of a single-column cell, if it carries one.
    pub fn xf(&self) -> Option<u16> {
        match self {
            Cell::Blank { xf, .. }
            | Cell::Number { xf, .. }
            | Cell::SharedString { xf, .. }
            | Cell::Label { xf, .. }
            | Cell::Formula { xf, .. } => Some(*xf),
            Cell::Rk { value, .. } => Some(value.xf),
            _ => None,
        }
    }

    /// Render one string per covered column.
    ///
    /// Fails only on defects in the workbook tables: a `NUMBER` cell whose style
    /// index is out of range, or a shared string index past the end of the table.
    pub fn render(&self, wb: &dyn Workbook) -> Result<Vec<String>, RenderError> {
        let rendered = match self {
            Cell::Placeholder { .. } => vec![PLACEHOLDER_TEXT.to_string()],
            Cell::Blank { .. } => vec![String::new()],
            Cell::BlankRun { run } => vec![String::new(); run.values().len()],
            Cell::Number { xf, value, .. } => vec![render_number(wb, *xf, *value)?],
            Cell::Rk { value, .. } => vec![render_rk(wb, *value)],
            Cell::RkRun { run } => run.values().iter().map(|v| render_rk(wb, *v)).collect(),
            Cell::SharedString { index, .. } => vec![wb.shared_string(*index)?.to_string()],
            Cell::Label { text, .. } | Cell::FormulaResult { text, .. } => vec![text.clone()],
            Cell::Formula { .. } => vec![FORMULA_TEXT.to_string()],
        };
        Ok(rendered)
    }
}

fn check_span(pos: Position, last_col: u16, len: usize) -> Result<(), CellError> {
    if len == 0 {
        return Err(CellError::EmptyRun);
    }
    let mismatch = CellError::SpanMismatch {
        first: pos.first_col,
        last: last_col,
        len,
    };
    if last_col < pos.first_col {
        return Err(mismatch);
    }
    if usize::from(last_col - pos.first_col) + 1 != len {
        return Err(mismatch);
    }
    Ok(())
}
