//! Unsorted word lists, one per first letter, searched linearly.

use super::Backend;
use crate::normalize::normalize;

/// One bucket per letter plus one for words starting with anything else.
const BUCKETS: usize = 27;

fn bucket_of(word: &str) -> usize {
    match word.bytes().next() {
        Some(b @ b'a'..=b'z') => (b - b'a') as usize,
        _ => BUCKETS - 1,
    }
}

#[derive(Debug)]
pub struct LinearList {
    buckets: Vec<Vec<String>>,
    size: usize,
}

impl Default for LinearList {
    fn default() -> Self {
        Self {
            buckets: vec![Vec::new(); BUCKETS],
            size: 0,
        }
    }
}

impl LinearList {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Backend for LinearList {
    fn name(&self) -> &'static str {
        "list"
    }

    fn add(&mut self, word: &str) -> bool {
        let word = normalize(word);
        let bucket = &mut self.buckets[bucket_of(&word)];
        if bucket.contains(&word) {
            return false;
        }
        bucket.push(word);
        self.size += 1;
        true
    }

    fn check(&self, word: &str) -> bool {
        let word = normalize(word);
        self.buckets[bucket_of(&word)].contains(&word)
    }

    fn size(&self) -> usize {
        self.size
    }
}
