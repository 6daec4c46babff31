/// Lowercases the ASCII letters of a word. Everything else, apostrophes
/// included, passes through untouched.
pub fn normalize(word: &str) -> String {
    word.to_ascii_lowercase()
}
