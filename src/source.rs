use std::fs;
use std::path::Path;
use std::vec::IntoIter;

use crate::error::DictionaryError;
use crate::lexer::Lexer;

/// Whitespace-delimited words read from a dictionary file.
///
/// The whole file is read when the source is opened, so a source that
/// opened successfully can only end by running out of words.
#[derive(Debug)]
pub struct WordSource {
    words: IntoIter<String>,
}

impl WordSource {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, DictionaryError> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|source| DictionaryError::InvalidDictionarySource {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::from_text(&String::from_utf8_lossy(&bytes)))
    }

    pub fn from_text(text: &str) -> Self {
        let words = Lexer::new(text).map(|t| t.lexeme).collect::<Vec<_>>();
        Self {
            words: words.into_iter(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.words.len()
    }
}

impl Iterator for WordSource {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        self.words.next()
    }
}
