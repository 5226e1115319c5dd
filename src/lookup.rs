use std::collections::HashMap;

use crate::{Example, VocabEntry};

/// Outcome of offering a sentence to the entry behind a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Append {
    Added,
    /// Added, and the entry is now at the cap
    AddedFull,
    Duplicate,
    Full,
    NoEntry,
}

/// Ordered entry list plus the lowercased-word lookup table.
///
/// Keys are not unique-safe: inserting a second entry whose word lowercases
/// to an existing key repoints the key at the newer entry. Both entries stay
/// in `entries()`, but only the last one is eligible for matching.
#[derive(Debug, Default)]
pub struct Vocabulary {
    entries: Vec<VocabEntry>,
    index: HashMap<String, usize>,
}

impl Vocabulary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true when the key was already taken by an earlier entry.
    pub fn push(&mut self, entry: VocabEntry) -> bool {
        let key = entry.word.to_lowercase();
        let pos = self.entries.len();
        self.entries.push(entry);
        self.index.insert(key, pos).is_some()
    }

    pub fn lookup(&self, key: &str) -> Option<&VocabEntry> {
        self.index.get(key).map(|&i| &self.entries[i])
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// Appends `text` to the entry behind `key` unless it is at `cap` or
    /// already holds the exact same text.
    pub fn try_append(&mut self, key: &str, text: &str, cap: usize) -> Append {
        let Some(&i) = self.index.get(key) else {
            return Append::NoEntry;
        };
        let entry = &mut self.entries[i];
        if entry.examples.len() >= cap {
            return Append::Full;
        }
        if entry.has_example(text) {
            return Append::Duplicate;
        }
        entry.examples.push(Example::new(text));
        if entry.examples.len() >= cap {
            Append::AddedFull
        } else {
            Append::Added
        }
    }

    /// Removes `key` from future matching. The entry itself is kept.
    pub fn retire(&mut self, key: &str) -> bool {
        self.index.remove(key).is_some()
    }

    pub fn entries(&self) -> &[VocabEntry] {
        &self.entries
    }

    pub fn into_entries(self) -> Vec<VocabEntry> {
        self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn key_count(&self) -> usize {
        self.index.len()
    }

    pub fn words_with_examples(&self) -> usize {
        self.entries.iter().filter(|e| !e.examples.is_empty()).count()
    }
}
