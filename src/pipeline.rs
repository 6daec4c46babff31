use crate::dictionary::Dictionary;
use crate::lexer::{Lexer, Token};
use crate::validation::is_valid;

/// Word counts for one checked text.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Report {
    pub total: usize,
    pub valid: usize,
    pub misspelled: Vec<Token>,
}

pub struct Pipeline<'a> {
    dictionary: &'a Dictionary,
}

impl<'a> Pipeline<'a> {
    pub fn new(dictionary: &'a Dictionary) -> Pipeline<'a> {
        Pipeline { dictionary }
    }

    pub fn run(&self, lexer: Lexer) -> Report {
        let mut report = Report::default();
        for token in lexer {
            report.total += 1;
            // Numbers, urls and other punctuated tokens are not words
            if !is_valid(&token.lexeme) {
                continue;
            }
            report.valid += 1;
            if !self.dictionary.check(&token.lexeme) {
                report.misspelled.push(token);
            }
        }
        report
    }
}

/// Tokens of a text that are worth looking up.
pub fn valid_words(text: &str) -> Vec<String> {
    Lexer::new(text)
        .map(|t| t.lexeme)
        .filter(|w| is_valid(w))
        .collect()
}
