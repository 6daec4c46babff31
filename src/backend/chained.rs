//! Fixed-size hash table with singly linked collision chains.
//!
//! The bucket count never changes, so chains grow with the dictionary.
//! Each entry is owned by its predecessor (or by the bucket slot for the
//! head of a chain) and new words are appended at the tail.

use super::{Backend, Shape};
use crate::normalize::normalize;

/// Number of bucket slots in every table.
pub const MAX_HASH: usize = 501_037;

const FNV_OFFSET_BASIS: u32 = 0x811c_9dc5;
const FNV_PRIME: u32 = 0x0100_0193;

/// FNV-1a over the bytes of the word, reduced to `0..max`. A `max` of
/// zero is treated as one.
pub fn string_hash(word: &str, max: usize) -> usize {
    let hash = word.bytes().fold(FNV_OFFSET_BASIS, |hash, byte| {
        (hash ^ byte as u32).wrapping_mul(FNV_PRIME)
    });
    hash as usize % max.max(1)
}

#[derive(Debug)]
struct Entry {
    text: String,
    next: Option<Box<Entry>>,
}

type Chain = Option<Box<Entry>>;

fn chain_iter(chain: &Chain) -> impl Iterator<Item = &Entry> {
    std::iter::successors(chain.as_deref(), |entry| entry.next.as_deref())
}

#[derive(Debug)]
pub struct ChainedHashTable {
    buckets: Vec<Chain>,
    size: usize,
}

impl Default for ChainedHashTable {
    fn default() -> Self {
        Self::with_buckets(MAX_HASH)
    }
}

impl ChainedHashTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// A table with a custom bucket count, mostly useful to force collisions.
    pub fn with_buckets(buckets: usize) -> Self {
        let buckets = buckets.max(1);
        Self {
            buckets: (0..buckets).map(|_| None).collect(),
            size: 0,
        }
    }

    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    pub fn occupied_buckets(&self) -> usize {
        self.buckets.iter().filter(|b| b.is_some()).count()
    }

    pub fn longest_chain(&self) -> usize {
        self.buckets
            .iter()
            .map(|b| chain_iter(b).count())
            .max()
            .unwrap_or(0)
    }

    fn bucket(&self, word: &str) -> usize {
        string_hash(word, self.buckets.len())
    }

    fn append(&mut self, word: String) -> bool {
        let index = self.bucket(&word);
        if chain_iter(&self.buckets[index]).any(|entry| entry.text == word) {
            return false;
        }

        let mut slot = &mut self.buckets[index];
        while let Some(entry) = slot {
            slot = &mut entry.next;
        }

        *slot = Some(Box::new(Entry {
            text: word,
            next: None,
        }));
        self.size += 1;
        true
    }
}

impl Drop for ChainedHashTable {
    fn drop(&mut self) {
        for bucket in self.buckets.iter_mut() {
            let mut next = bucket.take();
            while let Some(mut entry) = next {
                next = entry.next.take();
            }
        }
    }
}

impl Backend for ChainedHashTable {
    fn name(&self) -> &'static str {
        "chained"
    }

    fn add(&mut self, word: &str) -> bool {
        self.append(normalize(word))
    }

    fn check(&self, word: &str) -> bool {
        let word = normalize(word);
        chain_iter(&self.buckets[self.bucket(&word)]).any(|entry| entry.text == word)
    }

    fn size(&self) -> usize {
        self.size
    }

    fn shape(&self) -> Shape {
        Shape::Chained {
            buckets: self.bucket_count(),
            occupied: self.occupied_buckets(),
            longest_chain: self.longest_chain(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::contract;
    use crate::source::WordSource;
    use std::collections::{HashMap, HashSet};

    /// The fixture dictionary plus every word extended by two letters.
    fn suffixed_words() -> Vec<String> {
        let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("dictionaries/small");
        let base = WordSource::open(path).unwrap().collect::<Vec<_>>();
        let mut words = base.iter().cloned().collect::<HashSet<_>>();
        for word in &base {
            for a in 'a'..='z' {
                for b in 'a'..='z' {
                    words.insert(format!("{word}{a}{b}"));
                }
            }
        }
        words.into_iter().collect()
    }

    #[test]
    fn chained_table_contract() {
        contract::all(ChainedHashTable::new);
    }

    #[test]
    fn tiny_table_contract() {
        contract::all(|| ChainedHashTable::with_buckets(1));
    }

    #[test]
    fn chained_table_dedups_on_load() {
        let mut table = ChainedHashTable::new();
        let source = WordSource::from_text("obsession obsession Obsession obsolete");
        assert_eq!(table.load_words(source), 2);
        assert_eq!(table.size(), 2);
    }

    #[test]
    fn chained_table_add_is_idempotent() {
        let mut table = ChainedHashTable::with_buckets(3);
        for word in ["google", "variadic", "google", "VARIADIC"] {
            table.add(word);
        }
        assert_eq!(table.size(), 2);
        assert!(table.longest_chain() <= 2);
    }

    #[test]
    fn collisions_chain_in_insertion_order() {
        let mut table = ChainedHashTable::with_buckets(1);
        for word in ["logic", "absolutely", "rewards"] {
            assert!(table.add(word));
        }
        let stored = chain_iter(&table.buckets[0])
            .map(|e| e.text.as_str())
            .collect::<Vec<_>>();
        assert_eq!(stored, vec!["logic", "absolutely", "rewards"]);
        assert_eq!(table.longest_chain(), 3);
        assert_eq!(table.occupied_buckets(), 1);
        assert!(table.check("Rewards"));
        assert!(!table.check("reward"));
    }

    #[test]
    fn hash_is_stable_and_in_range() {
        assert_eq!(string_hash("", MAX_HASH), FNV_OFFSET_BASIS as usize % MAX_HASH);
        assert_eq!(string_hash("logic", MAX_HASH), string_hash("logic", MAX_HASH));
        assert_ne!(string_hash("logic", MAX_HASH), string_hash("logid", MAX_HASH));
        for word in ["a", "won't", "pneumonoultramicroscopicsilicovolcanoconiosis"] {
            assert!(string_hash(word, 7) < 7);
        }
        assert_eq!(string_hash("logic", 0), 0);
        assert_eq!(string_hash("logic", 1), 0);
    }

    #[test]
    fn hash_function_metrics() {
        let words = suffixed_words();
        assert!(words.len() > 50_000);

        let mut per_bucket = HashMap::new();
        let mut per_tenth = [0usize; 10];
        for word in &words {
            let h = string_hash(word, MAX_HASH);
            *per_bucket.entry(h).or_insert(0usize) += 1;
            per_tenth[h * 10 / MAX_HASH] += 1;
        }

        // a uniform hash would collide about n^2 / 2m times here
        let collisions = words.len() - per_bucket.len();
        assert!(collisions < words.len() / 15, "{collisions} collisions");
        let longest = per_bucket.values().copied().max().unwrap_or(0);
        assert!(longest <= 4, "chain of {longest}");
        for (tenth, count) in per_tenth.iter().enumerate() {
            assert!(*count > words.len() / 12, "tenth {tenth} holds {count}");
        }
    }

    #[test]
    fn long_chains_drop_cleanly() {
        let mut table = ChainedHashTable::with_buckets(1);
        for i in 0..200_000 {
            let next = table.buckets[0].take();
            table.buckets[0] = Some(Box::new(Entry {
                text: format!("w{i}"),
                next,
            }));
        }
        assert_eq!(table.longest_chain(), 200_000);
        drop(table);
    }

    #[test]
    fn shape_reports_buckets() {
        let mut table = ChainedHashTable::new();
        table.add("hello");
        assert_eq!(
            table.shape(),
            Shape::Chained {
                buckets: MAX_HASH,
                occupied: 1,
                longest_chain: 1
            }
        );
    }
}
