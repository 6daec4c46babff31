use std::collections::BTreeSet;

use super::Backend;
use crate::normalize::normalize;

#[derive(Debug, Default)]
pub struct OrderedSet(BTreeSet<String>);

impl OrderedSet {
    pub fn new() -> Self {
        Self(BTreeSet::new())
    }

    /// Stored words in lexicographic order.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl Backend for OrderedSet {
    fn name(&self) -> &'static str {
        "ordered"
    }

    fn add(&mut self, word: &str) -> bool {
        self.0.insert(normalize(word))
    }

    fn check(&self, word: &str) -> bool {
        self.0.contains(&normalize(word))
    }

    fn size(&self) -> usize {
        self.0.len()
    }
}
