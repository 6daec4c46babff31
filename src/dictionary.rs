use std::fmt;
use std::path::Path;

use clap::ValueEnum;
use serde::Deserialize;

use crate::backend::{
    Backend, BackendStats, ChainedHashTable, CharClass, LinearList, OrderedSet, Trie,
    UnorderedSet,
};
use crate::error::DictionaryError;
use crate::source::WordSource;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum BackendKind {
    List,
    Ordered,
    Unordered,
    Chained,
    Trie,
    TrieAscii,
    /// Whichever backend answers `check` the quickest.
    #[default]
    Fastest,
}

impl BackendKind {
    /// Every concrete backend, aliases excluded.
    pub const ALL: [BackendKind; 6] = [
        BackendKind::List,
        BackendKind::Ordered,
        BackendKind::Unordered,
        BackendKind::Chained,
        BackendKind::Trie,
        BackendKind::TrieAscii,
    ];

    pub fn resolve(self) -> BackendKind {
        match self {
            BackendKind::Fastest => BackendKind::Trie,
            kind => kind,
        }
    }
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_possible_value() {
            Some(value) => f.write_str(value.get_name()),
            None => write!(f, "{self:?}"),
        }
    }
}

#[derive(Debug)]
enum Storage {
    List(LinearList),
    Ordered(OrderedSet),
    Unordered(UnorderedSet),
    Chained(ChainedHashTable),
    Trie(Trie),
}

/// A word list behind one backend, chosen when the dictionary is built.
#[derive(Debug)]
pub struct Dictionary {
    kind: BackendKind,
    storage: Storage,
}

impl Default for Dictionary {
    fn default() -> Self {
        Self::new(BackendKind::default())
    }
}

impl Dictionary {
    pub fn new(kind: BackendKind) -> Self {
        let kind = kind.resolve();
        let storage = match kind {
            BackendKind::List => Storage::List(LinearList::new()),
            BackendKind::Ordered => Storage::Ordered(OrderedSet::new()),
            BackendKind::Unordered => Storage::Unordered(UnorderedSet::new()),
            BackendKind::Chained => Storage::Chained(ChainedHashTable::new()),
            BackendKind::TrieAscii => Storage::Trie(Trie::new(CharClass::Ascii)),
            BackendKind::Trie | BackendKind::Fastest => Storage::Trie(Trie::new(CharClass::Folded)),
        };
        Self { kind, storage }
    }

    /// The concrete backend in use, never [`BackendKind::Fastest`].
    pub fn kind(&self) -> BackendKind {
        self.kind
    }

    fn backend(&self) -> &dyn Backend {
        match &self.storage {
            Storage::List(b) => b,
            Storage::Ordered(b) => b,
            Storage::Unordered(b) => b,
            Storage::Chained(b) => b,
            Storage::Trie(b) => b,
        }
    }

    fn backend_mut(&mut self) -> &mut dyn Backend {
        match &mut self.storage {
            Storage::List(b) => b,
            Storage::Ordered(b) => b,
            Storage::Unordered(b) => b,
            Storage::Chained(b) => b,
            Storage::Trie(b) => b,
        }
    }

    pub fn load<P: AsRef<Path>>(&mut self, path: P) -> Result<usize, DictionaryError> {
        self.backend_mut().load(path.as_ref())
    }

    pub fn load_words(&mut self, source: WordSource) -> usize {
        self.backend_mut().load_words(source)
    }

    pub fn check(&self, word: &str) -> bool {
        self.backend().check(word)
    }

    pub fn add(&mut self, word: &str) -> bool {
        self.backend_mut().add(word)
    }

    pub fn size(&self) -> usize {
        self.backend().size()
    }

    pub fn stats(&self) -> BackendStats {
        self.backend().stats()
    }
}
