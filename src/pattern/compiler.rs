use super::lexer::{Mark, Token};

/// One renderable piece of a compiled pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Component {
    Mark(Mark, String),
    Literal(String),
}

/// Turns lexed tokens into components, one per token, in a single pass.
/// Text trailing the last mark becomes a final literal when non-empty.
pub fn compile(tokens: Vec<Token>) -> Vec<Component> {
    let mut components = Vec::with_capacity(tokens.len());
    for token in tokens {
        match token {
            Token::Mark(mark, text) => components.push(Component::Mark(mark, text)),
            Token::Literal(text) => components.push(Component::Literal(text)),
            Token::End(text) => {
                if !text.is_empty() {
                    components.push(Component::Literal(text));
                }
                break;
            }
        }
    }
    components
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::lexer::lex;

    #[test]
    fn test_compile_maps_tokens_in_order() {
        assert_eq!(
            compile(lex("dd.mm.yy")),
            vec![
                Component::Mark(Mark::Day, "dd".to_string()),
                Component::Literal(".".to_string()),
                Component::Mark(Mark::Month, "mm".to_string()),
                Component::Literal(".".to_string()),
                Component::Mark(Mark::Year, "yy".to_string()),
            ]
        );
    }

    #[test]
    fn test_compile_flushes_trailing_literal() {
        assert_eq!(
            compile(lex("h\" o'clock\"")),
            vec![
                Component::Mark(Mark::Hour, "h".to_string()),
                Component::Literal("\" o'clock\"".to_string()),
            ]
        );
    }

    #[test]
    fn test_compile_literal_only_and_empty() {
        assert_eq!(compile(lex("###")), vec![Component::Literal("###".to_string())]);
        assert!(compile(lex("")).is_empty());
    }

    #[test]
    fn test_compile_stops_at_end() {
        let tokens = vec![
            Token::End("x".to_string()),
            Token::Literal("ignored".to_string()),
        ];
        assert_eq!(compile(tokens), vec![Component::Literal("x".to_string())]);
    }
}
