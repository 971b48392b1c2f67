use crate::cell::CellRecord;
use crate::error::Result;
use crate::tables::WorkbookTables;
use clap::ValueEnum;
use csv::WriterBuilder;
use std::collections::BTreeMap;
use std::io::Write;

#[derive(Debug, Clone, Copy, ValueEnum, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Csv,
    Tsv,
    European,
}

impl OutputFormat {
    pub fn delimiter(&self) -> u8 {
        match self {
            OutputFormat::Csv => b',',
            OutputFormat::Tsv => b'\t',
            OutputFormat::European => b';',
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct CsvConfig {
    pub format: OutputFormat,
    pub empty_value: String,
}

/// Write rows as delimited records.
pub fn write_rows<W, I, R>(rows: I, writer: W, config: &CsvConfig) -> Result<()>
where
    W: Write,
    I: IntoIterator<Item = R>,
    R: IntoIterator,
    R::Item: AsRef<[u8]>,
{
    let mut csv_writer = WriterBuilder::new()
        .delimiter(config.format.delimiter())
        .flexible(true)
        .from_writer(writer);

    for row in rows {
        csv_writer.write_record(row)?;
    }

    csv_writer.flush()?;
    Ok(())
}

/// Lay rendered records out as a dense grid starting at row 0, column 0 and
/// write it. Later records win when two cover the same cell. Only the
/// occupied cells are held in memory; rows are padded as they are written.
pub fn write_records<W: Write, T: WorkbookTables + ?Sized>(
    records: &[CellRecord],
    tables: &T,
    writer: W,
    config: &CsvConfig,
) -> Result<()> {
    let mut cells: BTreeMap<u16, BTreeMap<usize, String>> = BTreeMap::new();
    let mut max_col = 0usize;
    for record in records {
        let values = record.render(tables);
        let first_col = usize::from(record.first_col());
        let covered = first_col + values.len().saturating_sub(1);
        max_col = max_col.max(covered.max(usize::from(record.last_col())));

        let row = cells.entry(record.row()).or_default();
        for (offset, value) in values.into_iter().enumerate() {
            row.insert(first_col + offset, value);
        }
    }

    let Some(max_row) = cells.keys().next_back().copied() else {
        return write_rows(Vec::<Vec<String>>::new(), writer, config);
    };

    let rows = (0..=max_row).map(|row| {
        let mut occupied = cells.remove(&row).unwrap_or_default();
        (0..=max_col)
            .map(|col| match occupied.remove(&col) {
                Some(value) if !value.is_empty() => value,
                _ => config.empty_value.clone(),
            })
            .collect::<Vec<_>>()
    });
    write_rows(rows, writer, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::{Position, XfRk};
    use crate::rk::Rk;
    use crate::tables::Tables;
    use pretty_assertions::assert_eq;

    fn output(records: &[CellRecord], tables: &Tables, config: &CsvConfig) -> String {
        let mut out = Vec::new();
        write_records(records, tables, &mut out, config).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_delimiters() {
        assert_eq!(OutputFormat::Csv.delimiter(), b',');
        assert_eq!(OutputFormat::Tsv.delimiter(), b'\t');
        assert_eq!(OutputFormat::European.delimiter(), b';');
    }

    #[test]
    fn test_write_records_grid() {
        let tables = Tables::new()
            .with_xf(0)
            .with_xf(164)
            .with_format(164, "yyyy-mm-dd")
            .with_shared_string("name")
            .with_shared_string("a, b");
        let records = vec![
            CellRecord::SharedString {
                at: Position::new(0, 0),
                xf: 0,
                sst: 0,
            },
            CellRecord::MultiRk {
                row: 1,
                first_col: 0,
                last_col: 1,
                values: vec![XfRk::new(0, Rk(0x0000_002A)), XfRk::new(1, Rk(0x0002_C3C2))],
            },
            CellRecord::SharedString {
                at: Position::new(2, 2),
                xf: 0,
                sst: 1,
            },
        ];
        let config = CsvConfig {
            format: OutputFormat::Csv,
            empty_value: String::new(),
        };

        assert_eq!(
            output(&records, &tables, &config),
            "name,,\n10,2024-01-05,\n,,\"a, b\"\n"
        );
    }

    #[test]
    fn test_empty_value_and_delimiter() {
        let tables = Tables::new().with_xf(0);
        let records = vec![
            CellRecord::MultiBlank {
                row: 0,
                first_col: 0,
                last_col: 1,
                xfs: vec![0, 0],
            },
            CellRecord::Number {
                at: Position::new(0, 2),
                xf: 0,
                value: 0.5,
            },
        ];
        let config = CsvConfig {
            format: OutputFormat::European,
            empty_value: "-".to_string(),
        };

        assert_eq!(output(&records, &tables, &config), "-;-;0.5\n");
    }

    #[test]
    fn test_later_records_overwrite() {
        let tables = Tables::new().with_xf(0);
        let records = vec![
            CellRecord::Number {
                at: Position::new(0, 0),
                xf: 0,
                value: 1.0,
            },
            CellRecord::Number {
                at: Position::new(0, 0),
                xf: 0,
                value: 2.0,
            },
        ];
        assert_eq!(output(&records, &tables, &CsvConfig::default()), "2\n");
    }

    #[test]
    fn test_sparse_rows_are_padded() {
        let tables = Tables::new().with_xf(0);
        let records = vec![CellRecord::Number {
            at: Position::new(3, 1),
            xf: 0,
            value: 7.0,
        }];
        let config = CsvConfig {
            format: OutputFormat::Csv,
            empty_value: "-".to_string(),
        };
        assert_eq!(output(&records, &tables, &config), "-,-\n-,-\n-,-\n-,7\n");
    }

    #[test]
    fn test_no_records() {
        assert_eq!(output(&[], &Tables::new(), &CsvConfig::default()), "");
    }
}
