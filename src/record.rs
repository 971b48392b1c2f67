//! Decoding of BIFF cell-record payloads into [`CellRecord`]s.
//!
//! Only the record body is handled here; splitting the workbook stream into
//! records is left to the caller.

use crate::cell::{CellRecord, Position, XfRk};
use crate::error::{Error, Result};
use crate::rk::Rk;

pub const RECORD_FORMULA: u16 = 0x0006;
pub const RECORD_LABELSST: u16 = 0x00FD;
pub const RECORD_MULRK: u16 = 0x00BD;
pub const RECORD_MULBLANK: u16 = 0x00BE;
pub const RECORD_BLANK: u16 = 0x0201;
pub const RECORD_NUMBER: u16 = 0x0203;
pub const RECORD_LABEL_BIFF5: u16 = 0x0204;
pub const RECORD_RK: u16 = 0x027E;

/// Little-endian reader over a record payload.
struct Payload<'a> {
    record_type: u16,
    data: &'a [u8],
}

impl<'a> Payload<'a> {
    fn require(&self, len: usize) -> Result<()> {
        if self.data.len() < len {
            return Err(Error::TruncatedRecord {
                record_type: self.record_type,
                expected: len,
                actual: self.data.len(),
            });
        }
        Ok(())
    }

    fn bytes<const N: usize>(&self, offset: usize) -> Result<[u8; N]> {
        self.require(offset + N)?;
        let mut out = [0u8; N];
        out.copy_from_slice(&self.data[offset..offset + N]);
        Ok(out)
    }

    fn u16(&self, offset: usize) -> Result<u16> {
        self.bytes(offset).map(u16::from_le_bytes)
    }

    fn u32(&self, offset: usize) -> Result<u32> {
        self.bytes(offset).map(u32::from_le_bytes)
    }

    fn f64(&self, offset: usize) -> Result<f64> {
        self.bytes(offset).map(f64::from_le_bytes)
    }

    /// The `Cell` header shared by single-cell records: row, column, XF.
    fn cell_header(&self) -> Result<(Position, u16)> {
        Ok((Position::new(self.u16(0)?, self.u16(2)?), self.u16(4)?))
    }

    /// Row, first column, entries and last column of a MUL* record. The
    /// entries must cover exactly `first_col..=last_col`.
    fn multi_header(&self, entry_size: usize) -> Result<(u16, u16, &'a [u8], u16)> {
        self.require(6)?;
        let data = self.data;
        let end = data.len() - 2;
        let (row, first_col, last_col) = (self.u16(0)?, self.u16(2)?, self.u16(end)?);
        let entries = &data[4..end];

        let width = usize::from(last_col.wrapping_sub(first_col)) + 1;
        if last_col < first_col || entries.len() != width * entry_size {
            return Err(Error::ColumnMismatch {
                record_type: self.record_type,
                first_col,
                last_col,
                entries: entries.len() / entry_size,
            });
        }
        Ok((row, first_col, entries, last_col))
    }
}

impl CellRecord {
    /// Decodes the payload of a cell record.
    pub fn parse(record_type: u16, data: &[u8]) -> Result<Self> {
        let payload = Payload { record_type, data };
        match record_type {
            RECORD_BLANK => {
                let (at, xf) = payload.cell_header()?;
                Ok(CellRecord::Blank { at, xf })
            }
            RECORD_RK => {
                let (at, xf) = payload.cell_header()?;
                let rk = Rk(payload.u32(6)?);
                Ok(CellRecord::Rk {
                    at,
                    value: XfRk::new(xf, rk),
                })
            }
            RECORD_NUMBER => {
                let (at, xf) = payload.cell_header()?;
                Ok(CellRecord::Number {
                    at,
                    xf,
                    value: payload.f64(6)?,
                })
            }
            RECORD_LABELSST => {
                let (at, xf) = payload.cell_header()?;
                Ok(CellRecord::SharedString {
                    at,
                    xf,
                    sst: payload.u32(6)?,
                })
            }
            RECORD_LABEL_BIFF5 => {
                let (at, xf) = payload.cell_header()?;
                let len = usize::from(payload.u16(6)?);
                payload.require(8 + len)?;
                // 8-bit characters; bytes map to the first 256 code points.
                let text = data[8..8 + len].iter().copied().map(char::from).collect();
                Ok(CellRecord::Label { at, xf, text })
            }
            RECORD_FORMULA => {
                let (at, xf) = payload.cell_header()?;
                let result = payload.bytes::<8>(6)?;
                let flags = payload.u16(14)?;
                payload.require(20)?;
                Ok(CellRecord::Formula {
                    at,
                    xf,
                    result,
                    flags,
                    expression: data[20..].to_vec(),
                })
            }
            RECORD_MULBLANK => {
                let (row, first_col, entries, last_col) = payload.multi_header(2)?;
                let xfs = entries
                    .chunks_exact(2)
                    .map(|chunk| u16::from_le_bytes([chunk[0], chunk[1]]))
                    .collect();
                Ok(CellRecord::MultiBlank {
                    row,
                    first_col,
                    last_col,
                    xfs,
                })
            }
            RECORD_MULRK => {
                let (row, first_col, entries, last_col) = payload.multi_header(6)?;
                let values = entries
                    .chunks_exact(6)
                    .map(|chunk| {
                        let xf = u16::from_le_bytes([chunk[0], chunk[1]]);
                        let rk = u32::from_le_bytes([chunk[2], chunk[3], chunk[4], chunk[5]]);
                        XfRk::new(xf, Rk(rk))
                    })
                    .collect();
                Ok(CellRecord::MultiRk {
                    row,
                    first_col,
                    last_col,
                    values,
                })
            }
            other => Err(Error::UnsupportedRecord(other)),
        }
    }
}
