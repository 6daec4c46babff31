use std::fmt;
use std::path::Path;
use std::time::Instant;

use log::info;

use crate::error::DictionaryError;
use crate::source::WordSource;

pub mod chained;
pub mod list;
pub mod ordered;
pub mod trie;
pub mod unordered;

pub use chained::ChainedHashTable;
pub use list::LinearList;
pub use ordered::OrderedSet;
pub use trie::{CharClass, Trie};
pub use unordered::UnorderedSet;

/// A storage strategy for case-insensitive word lookup.
///
/// Every implementation normalizes words before storing or comparing them,
/// and `add` is idempotent: `size` counts distinct normalized words.
pub trait Backend {
    fn name(&self) -> &'static str;

    /// Stores a word. Returns false if it was already present or cannot be
    /// represented by this backend.
    fn add(&mut self, word: &str) -> bool;

    fn check(&self, word: &str) -> bool;

    fn size(&self) -> usize;

    fn shape(&self) -> Shape {
        Shape::Flat
    }

    fn stats(&self) -> BackendStats {
        BackendStats {
            name: self.name(),
            size: self.size(),
            shape: self.shape(),
        }
    }

    /// Adds every word of an already opened source, returning how many were new.
    fn load_words(&mut self, source: WordSource) -> usize {
        source.filter(|word| self.add(word)).count()
    }

    /// Opens a dictionary file and adds all of its words. Nothing is stored
    /// if the file cannot be opened.
    fn load(&mut self, path: &Path) -> Result<usize, DictionaryError> {
        let source = WordSource::open(path)?;
        let tokens = source.remaining();
        let started = Instant::now();
        let added = self.load_words(source);
        info!(
            "loaded {added} new words ({tokens} tokens) from {path:?} into {} in {:?}",
            self.name(),
            started.elapsed()
        );
        Ok(added)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Flat,
    Trie {
        nodes: usize,
        slots: usize,
    },
    Chained {
        buckets: usize,
        occupied: usize,
        longest_chain: usize,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct BackendStats {
    pub name: &'static str,
    pub size: usize,
    pub shape: Shape,
}

impl fmt::Display for BackendStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} words", self.name, self.size)?;
        match self.shape {
            Shape::Flat => Ok(()),
            Shape::Trie { nodes, slots } => {
                write!(f, ", {nodes} nodes of {slots} slots")
            }
            Shape::Chained {
                buckets,
                occupied,
                longest_chain,
            } => {
                let load_factor = self.size as f64 / buckets as f64;
                write!(
                    f,
                    ", {occupied}/{buckets} buckets used, longest chain {longest_chain}, load factor {load_factor:.3}"
                )
            }
        }
    }
}
