//! Custom date/time patterns: lexing, compiling and rendering.

mod compiler;
mod lexer;
mod render;

pub use compiler::{compile, Component};
pub use lexer::{lex, Mark, Token};
pub use render::render;

use chrono::NaiveDateTime;

/// A pattern compiled once and rendered against any number of timestamps.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CompiledFormat {
    components: Vec<Component>,
}

impl CompiledFormat {
    pub fn parse(pattern: &str) -> Self {
        Self {
            components: compile(lex(pattern)),
        }
    }

    pub fn components(&self) -> &[Component] {
        &self.components
    }

    pub fn render(&self, at: &NaiveDateTime) -> String {
        render(&self.components, at)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_compiled_format_renders_repeatedly() {
        let format = CompiledFormat::parse("dd/mm/yyyy hh:mm");
        let first = NaiveDate::from_ymd_opt(2024, 1, 5)
            .unwrap()
            .and_hms_opt(13, 4, 5)
            .unwrap();
        let second = NaiveDate::from_ymd_opt(1987, 11, 30)
            .unwrap()
            .and_hms_opt(0, 59, 0)
            .unwrap();
        assert_eq!(format.components().len(), 9);
        assert_eq!(format.render(&first), "05/01/2024 13:04");
        assert_eq!(format.render(&second), "30/11/1987 00:59");
    }

    #[test]
    fn test_no_marks_is_one_literal() {
        let format = CompiledFormat::parse("###");
        assert_eq!(format.components(), &[Component::Literal("###".to_string())]);

        let quoted = CompiledFormat::parse("\"N/A\"");
        assert_eq!(quoted.components(), &[Component::Literal("\"N/A\"".to_string())]);

        let backslash = CompiledFormat::parse("\\");
        assert_eq!(backslash.components(), &[Component::Literal("\\".to_string())]);
    }

    #[test]
    fn test_single_letter_hour_is_two_digits() {
        let at = NaiveDate::from_ymd_opt(2024, 1, 5)
            .unwrap()
            .and_hms_opt(8, 4, 5)
            .unwrap();
        assert_eq!(CompiledFormat::parse("h:mm").render(&at), "08:04");
    }
}
