//! Splits a custom format pattern into date/time marks and literal text.

/// The calendar field a mark stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mark {
    Year,
    Month,
    Day,
    Hour,
    Minute,
    Second,
}

/// A lexed piece of a pattern, carrying the exact text it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    Mark(Mark, String),
    Literal(String),
    /// Always last; holds literal text that followed the final mark.
    End(String),
}

fn mark_letter(c: char) -> Option<char> {
    let lower = c.to_ascii_lowercase();
    matches!(lower, 'y' | 'm' | 'd' | 'h' | 's').then_some(lower)
}

/// For each index, the letter of the first mark at or after it.
fn next_mark_letters(chars: &[char]) -> Vec<Option<char>> {
    let mut next = vec![None; chars.len() + 1];
    for i in (0..chars.len()).rev() {
        next[i] = mark_letter(chars[i]).or(next[i + 1]);
    }
    next
}

/// Lexes `pattern`. Never fails: anything that is not a mark is literal text.
///
/// An `m` run means minutes when it follows an hour mark or precedes a second
/// mark, and months otherwise.
pub fn lex(pattern: &str) -> Vec<Token> {
    let chars: Vec<char> = pattern.chars().collect();
    let next_marks = next_mark_letters(&chars);
    let mut tokens = Vec::new();
    let mut literal = String::new();
    let mut previous: Option<Mark> = None;
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        let Some(letter) = mark_letter(c) else {
            literal.push(c);
            i += 1;
            continue;
        };

        let start = i;
        while i < chars.len() && chars[i].to_ascii_lowercase() == letter {
            i += 1;
        }
        let text: String = chars[start..i].iter().collect();

        let mark = match letter {
            'y' => Mark::Year,
            'd' => Mark::Day,
            'h' => Mark::Hour,
            's' => Mark::Second,
            _ if previous == Some(Mark::Hour) || next_marks[i] == Some('s') => Mark::Minute,
            _ => Mark::Month,
        };

        if !literal.is_empty() {
            tokens.push(Token::Literal(std::mem::take(&mut literal)));
        }
        tokens.push(Token::Mark(mark, text));
        previous = Some(mark);
    }

    tokens.push(Token::End(literal));
    tokens
}
