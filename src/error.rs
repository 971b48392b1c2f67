use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("RK value {value} is an integer, not a float")]
    NotAFloat { value: i64 },

    #[error("record 0x{record_type:04X} truncated: need {expected} bytes, have {actual}")]
    TruncatedRecord {
        record_type: u16,
        expected: usize,
        actual: usize,
    },

    #[error("record 0x{record_type:04X} covers columns {first_col}..={last_col} but carries {entries} entries")]
    ColumnMismatch {
        record_type: u16,
        first_col: u16,
        last_col: u16,
        entries: usize,
    },

    #[error("record 0x{0:04X} is not a cell record")]
    UnsupportedRecord(u16),

    #[error("invalid RK value: {0}")]
    InvalidRk(String),

    #[error("invalid serial number: {0}")]
    InvalidSerial(String),

    #[error("failed to write CSV: {0}")]
    CsvWrite(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::Io(_) => 1,
            Error::NotAFloat { .. } => 2,
            Error::TruncatedRecord { .. } => 2,
            Error::ColumnMismatch { .. } => 2,
            Error::UnsupportedRecord(_) => 2,
            Error::InvalidRk(_) => 2,
            Error::InvalidSerial(_) => 2,
            Error::CsvWrite(_) => 4,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
