use std::str::CharIndices;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pos(pub u32, pub u32);

impl Pos {
    pub fn start() -> Pos {
        Pos(1, 1)
    }

    pub fn line(&self) -> u32 {
        self.0
    }

    pub fn column(&self) -> u32 {
        self.1
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub start: Pos,
    pub lexeme: String,
}

/// Splits a text into whitespace-delimited tokens, remembering where each
/// one starts.
#[derive(Debug)]
pub struct Lexer<'a> {
    text: &'a str,
    chars: std::iter::Peekable<CharIndices<'a>>,
    pos: Pos,
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token()
    }
}

impl<'a> Lexer<'a> {
    pub fn new(text: &'a str) -> Lexer<'a> {
        Lexer {
            text,
            chars: text.char_indices().peekable(),
            pos: Pos::start(),
        }
    }

    fn next_token(&mut self) -> Option<Token> {
        while self.peek()?.1.is_whitespace() {
            self.next();
        }
        self.word()
    }

    fn next(&mut self) -> Option<(usize, char)> {
        let (offset, char) = self.chars.next()?;

        if char == '\n' {
            self.pos = Pos(self.pos.line() + 1, 1);
        } else {
            self.pos = Pos(self.pos.line(), self.pos.column() + 1);
        }

        Some((offset, char))
    }

    fn peek(&mut self) -> Option<(usize, char)> {
        self.chars.peek().copied()
    }

    fn word(&mut self) -> Option<Token> {
        let start = self.pos;
        let (begin, _) = self.peek()?;
        let mut end = self.text.len();

        while let Some((offset, char)) = self.peek() {
            if char.is_whitespace() {
                end = offset;
                break;
            }
            self.next();
        }

        Some(Token {
            start,
            lexeme: self.text[begin..end].to_string(),
        })
    }
}
