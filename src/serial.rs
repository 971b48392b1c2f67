//! Excel serial numbers to calendar timestamps.

use chrono::{NaiveDate, NaiveDateTime, TimeDelta};

const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// The workbook's date system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateSystem {
    /// Windows Excel default, day 1 is 1900-01-01 and 1900 is treated as a leap year
    #[default]
    Date1900,
    /// Mac Excel legacy, day 0 is 1904-01-01
    Date1904,
}

fn epoch(serial: f64, system: DateSystem) -> Option<NaiveDateTime> {
    let date = match system {
        DateSystem::Date1904 => NaiveDate::from_ymd_opt(1904, 1, 1)?,
        // Below the phantom 1900-02-29 (serial 60) days count from 1899-12-31.
        DateSystem::Date1900 if serial < 61.0 => NaiveDate::from_ymd_opt(1899, 12, 31)?,
        DateSystem::Date1900 => NaiveDate::from_ymd_opt(1899, 12, 30)?,
    };
    date.and_hms_opt(0, 0, 0)
}

/// Converts a serial to a timestamp, rounded to the millisecond.
/// Returns `None` for non-finite or out-of-range serials.
pub fn excel_serial_to_timestamp(serial: f64, system: DateSystem) -> Option<NaiveDateTime> {
    if !serial.is_finite() {
        return None;
    }
    let millis = (serial * MILLIS_PER_DAY).round();
    if millis.abs() >= i64::MAX as f64 {
        return None;
    }
    let offset = TimeDelta::try_milliseconds(millis as i64)?;
    epoch(serial, system)?.checked_add_signed(offset)
}
