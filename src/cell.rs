//! Decoded cell records and the text they display.

use crate::classify;
use crate::number::render_number;
use crate::pattern::CompiledFormat;
use crate::rk::Rk;
use crate::serial::{excel_serial_to_timestamp, DateSystem};
use crate::tables::WorkbookTables;
use chrono::SecondsFormat;
use log::{debug, trace};

/// Shown for FORMULA records; the cached result is not decoded.
pub const FORMULA_PLACEHOLDER: &str = "FormulaCol";
/// Shown for records that carry a position but no typed value.
pub const PLAIN_PLACEHOLDER: &str = "default";

/// Zero-based cell coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub row: u16,
    pub col: u16,
}

impl Position {
    pub fn new(row: u16, col: u16) -> Self {
        Self { row, col }
    }
}

/// An RK value paired with the style it is displayed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct XfRk {
    pub xf: u16,
    pub rk: Rk,
}

impl XfRk {
    pub fn new(xf: u16, rk: Rk) -> Self {
        Self { xf, rk }
    }

    /// Custom temporal patterns render the value as a date through the
    /// pattern itself, built-in date formats as an RFC 3339 timestamp, and
    /// everything else as the decoded number.
    pub fn render<T: WorkbookTables + ?Sized>(&self, tables: &T) -> String {
        let Some(format_number) = tables.format_number(self.xf) else {
            trace!("XF {} out of range, rendering RK as a number", self.xf);
            return self.rk.to_string();
        };
        let serial = self.rk.decode().as_serial();

        if classify::is_custom(format_number) {
            match tables.format_pattern(format_number) {
                Some(pattern)
                    if !classify::looks_numeric(pattern) && classify::is_temporal(pattern) =>
                {
                    if let Some(text) = render_pattern(serial, pattern, tables.date_system()) {
                        return text;
                    }
                }
                Some(_) => {}
                None => debug!("format {format_number} used by XF {} is missing", self.xf),
            }
        } else if classify::is_builtin_datetime(format_number) {
            if let Some(text) = render_builtin(serial, tables.date_system()) {
                return text;
            }
        }
        self.rk.to_string()
    }
}

fn render_pattern(serial: f64, pattern: &str, date_system: DateSystem) -> Option<String> {
    let at = excel_serial_to_timestamp(serial, date_system)?;
    Some(CompiledFormat::parse(pattern).render(&at))
}

fn render_builtin(serial: f64, date_system: DateSystem) -> Option<String> {
    let at = excel_serial_to_timestamp(serial, date_system)?;
    Some(at.and_utc().to_rfc3339_opts(SecondsFormat::Secs, true))
}

/// A NUMBER cell: dates in one of three fixed layouts, otherwise a plain number.
fn render_float<T: WorkbookTables + ?Sized>(tables: &T, xf: u16, value: f64) -> String {
    let format_number = tables.format_number(xf).filter(|&n| n != 0);
    if let Some(format_number) = format_number {
        let date_system = tables.date_system();
        let rendered = match tables.format_pattern(format_number) {
            Some(pattern) => classify::classify(pattern)
                .and_then(|kind| render_pattern(value, kind.fixed_pattern(), date_system)),
            None if classify::is_builtin_datetime(format_number) => {
                render_builtin(value, date_system)
            }
            None => None,
        };
        if let Some(text) = rendered {
            return text;
        }
    }
    render_number(value)
}

/// One decoded cell record.
#[derive(Debug, Clone, PartialEq)]
pub enum CellRecord {
    Plain {
        at: Position,
    },
    Blank {
        at: Position,
        xf: u16,
    },
    MultiBlank {
        row: u16,
        first_col: u16,
        last_col: u16,
        xfs: Vec<u16>,
    },
    Rk {
        at: Position,
        value: XfRk,
    },
    MultiRk {
        row: u16,
        first_col: u16,
        last_col: u16,
        values: Vec<XfRk>,
    },
    Number {
        at: Position,
        xf: u16,
        value: f64,
    },
    SharedString {
        at: Position,
        xf: u16,
        sst: u32,
    },
    Label {
        at: Position,
        xf: u16,
        text: String,
    },
    Formula {
        at: Position,
        xf: u16,
        result: [u8; 8],
        flags: u16,
        expression: Vec<u8>,
    },
    FormulaString {
        at: Position,
        text: String,
    },
}

impl CellRecord {
    /// A formula whose string result arrived in the following STRING record.
    pub fn formula_string(at: Position, text: impl Into<String>) -> Self {
        CellRecord::FormulaString {
            at,
            text: text.into(),
        }
    }

    pub fn row(&self) -> u16 {
        match self {
            CellRecord::MultiBlank { row, .. } | CellRecord::MultiRk { row, .. } => *row,
            _ => self.single_position().row,
        }
    }

    pub fn first_col(&self) -> u16 {
        match self {
            CellRecord::MultiBlank { first_col, .. } | CellRecord::MultiRk { first_col, .. } => {
                *first_col
            }
            _ => self.single_position().col,
        }
    }

    pub fn last_col(&self) -> u16 {
        match self {
            CellRecord::MultiBlank { last_col, .. } | CellRecord::MultiRk { last_col, .. } => {
                *last_col
            }
            _ => self.single_position().col,
        }
    }

    fn single_position(&self) -> Position {
        match self {
            CellRecord::Plain { at }
            | CellRecord::Blank { at, .. }
            | CellRecord::Rk { at, .. }
            | CellRecord::Number { at, .. }
            | CellRecord::SharedString { at, .. }
            | CellRecord::Label { at, .. }
            | CellRecord::Formula { at, .. }
            | CellRecord::FormulaString { at, .. } => *at,
            CellRecord::MultiBlank {
                row, first_col, ..
            }
            | CellRecord::MultiRk {
                row, first_col, ..
            } => Position::new(*row, *first_col),
        }
    }

    /// Display text for each covered column, left to right.
    pub fn render<T: WorkbookTables + ?Sized>(&self, tables: &T) -> Vec<String> {
        match self {
            CellRecord::Plain { .. } => vec![PLAIN_PLACEHOLDER.to_string()],
            CellRecord::Blank { .. } => vec![String::new()],
            CellRecord::MultiBlank { xfs, .. } => vec![String::new(); xfs.len()],
            CellRecord::Rk { value, .. } => vec![value.render(tables)],
            CellRecord::MultiRk { values, .. } => {
                values.iter().map(|value| value.render(tables)).collect()
            }
            CellRecord::Number { xf, value, .. } => vec![render_float(tables, *xf, *value)],
            CellRecord::SharedString { sst, .. } => vec![tables.shared_string(*sst).to_string()],
            CellRecord::Label { text, .. } | CellRecord::FormulaString { text, .. } => {
                vec![text.clone()]
            }
            CellRecord::Formula { .. } => vec![FORMULA_PLACEHOLDER.to_string()],
        }
    }
}
