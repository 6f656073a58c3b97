//! A mutable prefix tree, generic over per-word metadata.
//!
//! Words are stored case-insensitively, one character per edge. Each node
//! owns its children outright, with no back or cross references, so
//! deletion can prune emptied branches bottom-up without bookkeeping.
//!
//! The trie never fails a lookup: absent words and prefixes yield `None`
//! or empty collections.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

#[derive(Debug, Clone)]
struct TrieNode<M> {
    children: BTreeMap<char, TrieNode<M>>,
    terminal: bool,
    frequency: u64,
    meta: Option<M>,
}

impl<M> TrieNode<M> {
    fn new() -> Self {
        Self { children: BTreeMap::new(), terminal: false, frequency: 0, meta: None }
    }
}

/// A successful exact lookup.
#[derive(Debug)]
pub struct Hit<'a, M> {
    /// How many times the word has been inserted.
    pub frequency: u64,
    /// Metadata attached at insert time, if any.
    pub meta: Option<&'a M>,
}

/// A word collected from the trie, with its frequency and metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion<M> {
    /// The stored (lowercased) word.
    pub word: String,
    /// How many times the word has been inserted.
    pub frequency: u64,
    /// Metadata attached at insert time, if any.
    pub meta: Option<M>,
}

/// A prefix tree over lowercased words.
///
/// The total-word count equals the number of terminal nodes at all times;
/// re-inserting an existing word bumps its frequency without changing the
/// count.
#[derive(Debug, Clone)]
pub struct Trie<M> {
    root: TrieNode<M>,
    words: usize,
}

impl<M> Default for Trie<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M> Trie<M> {
    /// Creates an empty trie.
    pub fn new() -> Self {
        Self { root: TrieNode::new(), words: 0 }
    }

    /// Inserts `word` (lowercased), attaching `meta` to its terminal node.
    ///
    /// The word's frequency is incremented on every insertion; the
    /// trie-wide word count only on the first. Supplied metadata replaces
    /// whatever the node already carried.
    ///
    /// # Errors
    ///
    /// [`ValidationError::EmptyWord`] for an empty `word`.
    pub fn insert(&mut self, word: &str, meta: Option<M>) -> Result<(), ValidationError> {
        if word.is_empty() {
            return Err(ValidationError::EmptyWord);
        }
        let lower = word.to_lowercase();
        let mut node = &mut self.root;
        for c in lower.chars() {
            node = node.children.entry(c).or_insert_with(TrieNode::new);
        }
        if !node.terminal {
            node.terminal = true;
            self.words += 1;
        }
        node.frequency += 1;
        if meta.is_some() {
            node.meta = meta;
        }
        Ok(())
    }

    /// Case-insensitive exact lookup.
    pub fn search(&self, word: &str) -> Option<Hit<'_, M>> {
        let node = self.walk(&word.to_lowercase())?;
        node.terminal.then(|| Hit { frequency: node.frequency, meta: node.meta.as_ref() })
    }

    /// Whether any stored word starts with `prefix`.
    pub fn starts_with(&self, prefix: &str) -> bool {
        self.walk(&prefix.to_lowercase()).is_some()
    }

    /// Deletes `word`, pruning branches left empty and non-terminal.
    ///
    /// Returns whether the word was present. Nodes kept alive by longer
    /// words retain their frequency, so re-inserting such a word resumes
    /// its old count.
    pub fn delete(&mut self, word: &str) -> bool {
        let lower: Vec<char> = word.to_lowercase().chars().collect();
        let before = self.words;
        Self::delete_rec(&mut self.root, &lower, 0, &mut self.words);
        self.words < before
    }

    /// Returns whether the caller should prune its edge to `node`.
    fn delete_rec(node: &mut TrieNode<M>, word: &[char], depth: usize, words: &mut usize) -> bool {
        if depth == word.len() {
            if !node.terminal {
                return false;
            }
            node.terminal = false;
            *words -= 1;
            return node.children.is_empty();
        }
        let Some(child) = node.children.get_mut(&word[depth]) else {
            return false;
        };
        if Self::delete_rec(child, word, depth + 1, words) {
            node.children.remove(&word[depth]);
            return node.children.is_empty() && !node.terminal;
        }
        false
    }

    /// Number of distinct words stored.
    pub fn len(&self) -> usize {
        self.words
    }

    /// Whether the trie stores no words.
    pub fn is_empty(&self) -> bool {
        self.words == 0
    }

    /// Drops every stored word.
    pub fn clear(&mut self) {
        self.root = TrieNode::new();
        self.words = 0;
    }

    fn walk(&self, lowered: &str) -> Option<&TrieNode<M>> {
        let mut node = &self.root;
        for c in lowered.chars() {
            node = node.children.get(&c)?;
        }
        Some(node)
    }
}

impl<M: Clone> Trie<M> {
    /// Collects words starting with `prefix`, most frequent first.
    ///
    /// Descendants are gathered depth-first in character order and
    /// collection stops once `limit` entries are held; the gathered set is
    /// then stable-sorted by frequency descending. With more than `limit`
    /// matching words, which ones are returned is therefore decided by
    /// character order, not frequency.
    pub fn suggestions(&self, prefix: &str, limit: usize) -> Vec<Suggestion<M>> {
        let lower = prefix.to_lowercase();
        let Some(node) = self.walk(&lower) else {
            return Vec::new();
        };
        let mut found = Vec::new();
        collect(node, lower, limit, &mut found);
        found.sort_by(|a, b| b.frequency.cmp(&a.frequency));
        found
    }

    /// Every stored word, depth-first in character order.
    pub fn all_words(&self) -> Vec<Suggestion<M>> {
        let mut found = Vec::new();
        collect(&self.root, String::new(), usize::MAX, &mut found);
        found
    }
}

fn collect<M: Clone>(
    node: &TrieNode<M>,
    word: String,
    limit: usize,
    out: &mut Vec<Suggestion<M>>,
) {
    if out.len() >= limit {
        return;
    }
    if node.terminal {
        out.push(Suggestion {
            word: word.clone(),
            frequency: node.frequency,
            meta: node.meta.clone(),
        });
    }
    for (c, child) in &node.children {
        let mut next = word.clone();
        next.push(*c);
        collect(child, next, limit, out);
    }
}
