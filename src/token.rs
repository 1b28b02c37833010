use std::fmt::{self, Display};

#[derive(Debug, PartialEq, Clone)]
pub struct Token {
    pub(crate) kind: TokenKind,
    pub(crate) lexeme: String,
    pub(crate) line: usize,
}

impl Token {
    pub fn kind(&self) -> &TokenKind {
        &self.kind
    }

    pub fn lexeme(&self) -> &str {
        self.lexeme.as_str()
    }

    pub fn line(&self) -> usize {
        self.line
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            TokenKind::String(literal) => write!(f, "String {} {}", self.lexeme, literal),
            // Integral doubles keep a ".0" suffix, matching the jlox dump.
            TokenKind::Number(literal) if literal.fract() == 0.0 => {
                write!(f, "Number {} {:.1}", self.lexeme, literal)
            },
            TokenKind::Number(literal) => write!(f, "Number {} {}", self.lexeme, literal),
            TokenKind::EndOfFile => write!(f, "EndOfFile"),
            kind => write!(f, "{:?} {}", kind, self.lexeme),
        }
    }
}

#[derive(Debug, PartialEq, Clone)]
pub enum TokenKind {
    LeftParen, RightParen, LeftBrace, RightBrace,
    Comma, Dot, Minus, Plus, Semicolon, Slash, Star,

    Bang, BangEqual,
    Equal, EqualEqual,
    Greater, GreaterEqual,
    Less, LessEqual,

    Identifier, String(String), Number(f64),

    And, Class, Else, False, Fun, For, If, Nil, Or,
    Print, Return, Super, This, True, Var, While,

    EndOfFile,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn display(kind: TokenKind, lexeme: &str) -> String {
        Token { kind, lexeme: lexeme.into(), line: 1 }.to_string()
    }

    #[test]
    fn number_tokens_always_show_a_decimal_point() {
        assert_eq!("Number 1 1.0", display(TokenKind::Number(1.0), "1"));
        assert_eq!("Number 42 42.0", display(TokenKind::Number(42.0), "42"));
        assert_eq!("Number 9.5 9.5", display(TokenKind::Number(9.5), "9.5"));
    }

    #[test]
    fn string_tokens_show_lexeme_then_literal() {
        assert_eq!(
            "String \"abc\" abc",
            display(TokenKind::String("abc".into()), "\"abc\""),
        );
    }

    #[test]
    fn end_of_file_has_nothing_to_show() {
        assert_eq!("EndOfFile", display(TokenKind::EndOfFile, ""));
    }
}
