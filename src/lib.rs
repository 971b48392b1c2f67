//! Display text for legacy Excel (BIFF) cell records.
//!
//! Decodes RK-packed numbers, classifies and renders custom date/time number
//! formats, and turns decoded cell records into the strings Excel would show.
//! Reading the workbook stream, the XF/FORMAT tables and the shared string
//! table is left to the caller, which exposes them through [`WorkbookTables`].

pub mod cell;
pub mod classify;
pub mod error;
pub mod number;
pub mod pattern;
pub mod record;
pub mod rk;
pub mod serial;
pub mod tables;
pub mod writer;

pub use cell::{CellRecord, Position, XfRk};
pub use classify::{classify, is_date_only, is_temporal, is_time_only, TemporalKind};
pub use error::{Error, Result};
pub use number::render_number;
pub use pattern::CompiledFormat;
pub use rk::{Rk, RkNumber};
pub use serial::{excel_serial_to_timestamp, DateSystem};
pub use tables::{Tables, WorkbookTables};
pub use writer::{CsvConfig, OutputFormat};
