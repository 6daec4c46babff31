//! Word validation applied to raw text tokens before they reach a dictionary.
//!
//! A token is worth checking when it:
//! - is at most [`MAX_WORD_LENGTH`] characters long
//! - starts with a letter
//! - continues with letters and apostrophes only

/// Longest word accepted (pneumonoultramicroscopicsilicovolcanoconiosis)
pub const MAX_WORD_LENGTH: usize = 45;

/// Returns true if the token looks like a word a dictionary could know.
pub fn is_valid(word: &str) -> bool {
    let mut chars = word.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    if !first.is_ascii_alphabetic() {
        return false;
    }

    let mut length = 1;
    for c in chars {
        length += 1;
        if length > MAX_WORD_LENGTH {
            return false;
        }
        if !(c.is_ascii_alphabetic() || c == '\'') {
            return false;
        }
    }
    true
}
