//! Workbook-level lookup tables the cell renderer reads from.
//!
//! The tables are built once from the workbook globals and only read while
//! cells render, so a shared reference can serve any number of threads.

use crate::serial::DateSystem;
use std::collections::HashMap;

pub trait WorkbookTables {
    /// Format number of an XF (style) record, `None` past the end of the table.
    fn format_number(&self, style_index: u16) -> Option<u16>;

    /// Pattern string of a FORMAT record, `None` when the workbook has none.
    fn format_pattern(&self, format_number: u16) -> Option<&str>;

    /// Shared string by SST index. The index must be valid.
    fn shared_string(&self, index: u32) -> &str;

    fn date_system(&self) -> DateSystem {
        DateSystem::Date1900
    }
}

/// In-memory tables.
#[derive(Debug, Clone, Default)]
pub struct Tables {
    xf_formats: Vec<u16>,
    formats: HashMap<u16, String>,
    shared_strings: Vec<String>,
    date_system: DateSystem,
}

impl Tables {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an XF record; its style index is its position.
    pub fn with_xf(mut self, format_number: u16) -> Self {
        self.xf_formats.push(format_number);
        self
    }

    pub fn with_format(mut self, format_number: u16, pattern: impl Into<String>) -> Self {
        self.formats.insert(format_number, pattern.into());
        self
    }

    pub fn with_shared_string(mut self, text: impl Into<String>) -> Self {
        self.shared_strings.push(text.into());
        self
    }

    pub fn with_date_system(mut self, date_system: DateSystem) -> Self {
        self.date_system = date_system;
        self
    }
}

impl WorkbookTables for Tables {
    fn format_number(&self, style_index: u16) -> Option<u16> {
        self.xf_formats.get(usize::from(style_index)).copied()
    }

    fn format_pattern(&self, format_number: u16) -> Option<&str> {
        self.formats.get(&format_number).map(String::as_str)
    }

    /// # Panics
    ///
    /// Panics when `index` is past the end of the shared string table.
    fn shared_string(&self, index: u32) -> &str {
        &self.shared_strings[index as usize]
    }

    fn date_system(&self) -> DateSystem {
        self.date_system
    }
}
