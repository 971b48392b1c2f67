use super::compiler::Component;
use super::lexer::Mark;
use chrono::{Datelike, NaiveDateTime, Timelike};

/// Zero-pad width for month and day: one digit for a single letter, two for
/// anything longer.
fn width(text: &str) -> usize {
    text.len().clamp(1, 2)
}

pub fn render(components: &[Component], at: &NaiveDateTime) -> String {
    let mut out = String::new();
    for component in components {
        match component {
            Component::Literal(text) => out.push_str(text),
            Component::Mark(mark, text) => {
                let field = match mark {
                    Mark::Year if text.len() <= 2 => format!("{:02}", at.year().rem_euclid(100)),
                    Mark::Year => format!("{:04}", at.year()),
                    Mark::Month => format!("{:0w$}", at.month(), w = width(text)),
                    Mark::Day => format!("{:0w$}", at.day(), w = width(text)),
                    Mark::Hour => format!("{:02}", at.hour()),
                    Mark::Minute => format!("{:02}", at.minute()),
                    Mark::Second => format!("{:02}", at.second()),
                };
                out.push_str(&field);
            }
        }
    }
    out
}
