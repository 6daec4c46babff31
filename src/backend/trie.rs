//! Prefix tree keyed by one character class per level.
//!
//! Each node owns its children outright, so the whole tree is dropped with
//! the [`Trie`] that owns the root. Words are stored by walking down the
//! existing prefix and materializing a node for every character past it.

use log::debug;

use super::{Backend, Shape};
use crate::normalize::normalize;

/// How a byte of a normalized word is mapped to a child slot.
///
/// Insertion and lookup always go through the same class, since it belongs
/// to the trie rather than to either operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CharClass {
    /// `a`-`z` folded into slots 0-25, apostrophe in slot 26.
    #[default]
    Folded,
    /// Raw byte value as slot index, up to and including `z`.
    Ascii,
}

impl CharClass {
    pub const fn slots(self) -> usize {
        match self {
            CharClass::Folded => 27,
            CharClass::Ascii => b'z' as usize + 1,
        }
    }

    pub fn index(self, byte: u8) -> Option<usize> {
        match self {
            CharClass::Folded => match byte {
                b'a'..=b'z' => Some((byte - b'a') as usize),
                b'A'..=b'Z' => Some((byte - b'A') as usize),
                b'\'' => Some(26),
                _ => None,
            },
            CharClass::Ascii => {
                let index = byte as usize;
                (index < self.slots()).then_some(index)
            }
        }
    }

    /// Slot path for a word, or None if some byte has no slot.
    fn path(self, word: &str) -> Option<Vec<usize>> {
        word.bytes().map(|b| self.index(b)).collect()
    }
}

#[derive(Debug)]
struct TrieNode {
    terminal: bool,
    children: Box<[Option<Box<TrieNode>>]>,
}

impl TrieNode {
    fn new(slots: usize) -> Self {
        Self {
            terminal: false,
            children: (0..slots).map(|_| None).collect(),
        }
    }
}

#[derive(Debug)]
pub struct Trie {
    class: CharClass,
    root: TrieNode,
    size: usize,
    nodes: usize,
}

impl Default for Trie {
    fn default() -> Self {
        Self::new(CharClass::default())
    }
}

impl Trie {
    pub fn new(class: CharClass) -> Self {
        Self {
            class,
            root: TrieNode::new(class.slots()),
            size: 0,
            nodes: 1,
        }
    }

    pub fn class(&self) -> CharClass {
        self.class
    }

    /// Number of allocated nodes, root included.
    pub fn node_count(&self) -> usize {
        self.nodes
    }

    fn insert(&mut self, word: &str) -> bool {
        let Some(path) = self.class.path(word) else {
            debug!("{} cannot store {word:?}", self.name());
            return false;
        };

        let slots = self.class.slots();
        let mut created = 0;
        let mut node = &mut self.root;

        // Existing children are followed; past the stored prefix a new node
        // is materialized for every remaining character.
        for &slot in &path {
            node = node.children[slot]
                .get_or_insert_with(|| {
                    created += 1;
                    Box::new(TrieNode::new(slots))
                })
                .as_mut();
        }
        self.nodes += created;

        if node.terminal {
            return false;
        }
        node.terminal = true;
        self.size += 1;
        true
    }

    fn find(&self, word: &str) -> Option<&TrieNode> {
        let mut node = &self.root;
        for byte in word.bytes() {
            let slot = self.class.index(byte)?;
            node = node.children[slot].as_deref()?;
        }
        Some(node)
    }
}

impl Drop for Trie {
    fn drop(&mut self) {
        // unlink iteratively so long words cannot overflow the stack
        let mut pending = self
            .root
            .children
            .iter_mut()
            .filter_map(Option::take)
            .collect::<Vec<_>>();
        while let Some(mut node) = pending.pop() {
            pending.extend(node.children.iter_mut().filter_map(Option::take));
        }
    }
}

impl Backend for Trie {
    fn name(&self) -> &'static str {
        match self.class {
            CharClass::Folded => "trie",
            CharClass::Ascii => "trie-ascii",
        }
    }

    fn add(&mut self, word: &str) -> bool {
        self.insert(&normalize(word))
    }

    fn check(&self, word: &str) -> bool {
        self.find(&normalize(word)).is_some_and(|node| node.terminal)
    }

    fn size(&self) -> usize {
        self.size
    }

    fn shape(&self) -> Shape {
        Shape::Trie {
            nodes: self.nodes,
            slots: self.class.slots(),
        }
    }
}
