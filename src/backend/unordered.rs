use std::collections::HashSet;

use super::Backend;
use crate::normalize::normalize;

#[derive(Debug, Default)]
pub struct UnorderedSet(HashSet<String>);

impl UnorderedSet {
    pub fn new() -> Self {
        Self(HashSet::new())
    }
}

impl Backend for UnorderedSet {
    fn name(&self) -> &'static str {
        "unordered"
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::contract;

    #[test]
    fn unordered_set_contract() {
        contract::all(UnorderedSet::new);
    }
}
