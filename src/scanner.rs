use crate::{
    error::DiagnosticSink,
    token::{Token, TokenKind},
};
use peekmore::{PeekMore, PeekMoreIterator};
use phf::phf_map;
use std::str::Chars;

static KEYWORDS: phf::Map<&'static str, TokenKind> = phf_map! {
    "and" => TokenKind::And,
    "class" => TokenKind::Class,
    "else" => TokenKind::Else,
    "false" => TokenKind::False,
    "for" => TokenKind::For,
    "fun" => TokenKind::Fun,
    "if" => TokenKind::If,
    "nil" => TokenKind::Nil,
    "or" => TokenKind::Or,
    "print" => TokenKind::Print,
    "return" => TokenKind::Return,
    "super" => TokenKind::Super,
    "this" => TokenKind::This,
    "true" => TokenKind::True,
    "var" => TokenKind::Var,
    "while" => TokenKind::While,
};

/// Single-pass tokenizer over a complete source unit.
///
/// Lexical errors go to the injected sink and never stop the scan, so the
/// caller always gets a token sequence back; it consults the sink afterwards
/// to decide whether that sequence is worth handing to a parser. The source
/// is walked one Unicode scalar at a time; lexemes are accumulated from the
/// consumed chars, so they always equal the exact source substring.
pub struct Scanner<'a> {
    src: PeekMoreIterator<Chars<'a>>,
    lexeme_buffer: String,
    line: usize,
    sink: &'a mut dyn DiagnosticSink,
}

impl <'a> Iterator for Scanner<'a> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        // A loop, not recursion: a long run of non-token input (whitespace,
        // blank lines, comments) must not grow the stack per character.
        loop {
            let kind = self.next_token_kind()?;

            let lexeme = self.lexeme_buffer.clone();
            self.lexeme_buffer.clear();

            if let Some(kind) = kind {
                return Some(Token {
                    kind,
                    lexeme,
                    line: self.line,
                });
            }
        }
    }
}

impl <'a> Scanner<'a> {
    pub fn new(src: &'a str, sink: &'a mut dyn DiagnosticSink) -> Self {
        Self {
            src: src.chars().peekmore(),
            lexeme_buffer: String::new(),
            line: 1,
            sink,
        }
    }

    pub fn scan_tokens(mut self) -> Vec<Token> {
        let mut tokens = Vec::new();
        while let Some(token) = self.next() {
            tokens.push(token);
        }
        tokens.push(Token {
            kind: TokenKind::EndOfFile,
            lexeme: "".to_string(),
            line: self.line,
        });
        tokens
    }

    // Outer None means end of input; inner None means the characters consumed
    // produced no token (whitespace, a comment, or a reported error).
    fn next_token_kind(&mut self) -> Option<Option<TokenKind>> {
        let next_char = self.src.next()?;
        self.lexeme_buffer.push(next_char);

        use TokenKind::*;
        Some(match next_char {
            '(' => Some(LeftParen),
            ')' => Some(RightParen),
            '{' => Some(LeftBrace),
            '}' => Some(RightBrace),
            ',' => Some(Comma),
            '.' => Some(Dot),
            '-' => Some(Minus),
            '+' => Some(Plus),
            ';' => Some(Semicolon),
            '*' => Some(Star),
            '!' => Some(if self.does_next_match('=') { BangEqual } else { Bang }),
            '=' => Some(if self.does_next_match('=') { EqualEqual } else { Equal }),
            '<' => Some(if self.does_next_match('=') { LessEqual } else { Less }),
            '>' => Some(if self.does_next_match('=') { GreaterEqual } else { Greater }),
            '/' => {
                if self.does_next_match('/') { // is this a comment?
                    // Stop short of the newline so the '\n' arm still counts it.
                    self.advance_until_match('\n');
                    None
                } else {
                    Some(Slash)
                }
            },
            ' ' | '\r' | '\t' => None,
            '\n' => {
                self.line += 1;
                None
            },
            '"' => self.extract_string(),
            c if c.is_digit(10) => self.extract_number(),
            c if can_start_identifier(&c) => Some(self.extract_identifier()),
            c => {
                self.sink.report(self.line, &format!("Unexpected character '{}'", c));
                None
            },
        })
    }

    fn does_next_match(&mut self, c: char) -> bool {
        match self.src.peek() {
            Some(next) if c == *next => {
                self.lexeme_buffer.push(self.src.next().unwrap());
                true
            }
            _ => false,
        }
    }

    fn extract_string(&mut self) -> Option<TokenKind> {
        let mut newline_count = 0;
        self.advance_until_match_for_each('"', |c| if c == '\n' { newline_count += 1 });
        self.line += newline_count;
        match self.src.next() {
            None => {
                self.sink.report(self.line, "Unterminated String.");
                None
            },
            Some(q) => { // q here must be " due to advance_until_match_for_each
                self.lexeme_buffer.push(q);
                Some(TokenKind::String(self.lexeme_buffer.trim_matches('"').to_string()))
            },
        }
    }

    fn extract_number(&mut self) -> Option<TokenKind> {
        self.advance_until(|n| !n.is_digit(10));

        // A '.' only belongs to the number when a digit follows it, so a
        // trailing '.' is left behind as its own Dot token.
        if let Some(&'.') = self.src.peek() {
            if let Some(maybe_digit) = self.src.peek_next() {
                if maybe_digit.is_digit(10) {
                    self.lexeme_buffer.push(self.src.next().unwrap());
                    self.advance_until(|n| !n.is_digit(10));
                }
            }
        }

        match self.lexeme_buffer.parse() {
            Err(_) => {
                let message = format!("Could not convert {} into a number", self.lexeme_buffer);
                self.sink.report(self.line, &message);
                None
            },
            Ok(number) => Some(TokenKind::Number(number)),
        }
    }

    fn extract_identifier(&mut self) -> TokenKind {
        self.advance_until(|n| !is_part_of_valid_identifier(n));

        let text = self.lexeme_buffer.as_str();
        match KEYWORDS.get(text) {
            Some(kind) => kind.clone(),
            None => TokenKind::Identifier,
        }
    }

    fn advance_until_match(&mut self, c: char) {
        self.advance_until(|n| n == &c)
    }

    fn advance_until(&mut self, should_stop: impl Fn(&char) -> bool) {
        self.advance_until_for_each(should_stop, |_| {})
    }

    fn advance_until_match_for_each(
        &mut self,
        c: char,
        f: impl FnMut(char) -> ()
    ) {
        self.advance_until_for_each(|n| n == &c, f);
    }

    fn advance_until_for_each(
        &mut self,
        should_stop: impl Fn(&char) -> bool,
        mut f: impl FnMut(char) -> ()
    ) {
        let is_done = |nxt: Option<&char>| nxt.is_none() || should_stop(nxt.unwrap());
        while !is_done(self.src.peek()) {
            let next = self.src.next().unwrap();
            self.lexeme_buffer.push(next);
            f(next);
        }
    }
}

fn can_start_identifier(c: &char) -> bool {
    c.is_ascii_alphabetic() || c == &'_'
}

fn is_part_of_valid_identifier(c: &char) -> bool {
    can_start_identifier(c) || c.is_digit(10)
}
