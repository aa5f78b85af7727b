//! Prefix dictionary used to prune the grid search.
//!
//! Every inserted word creates one node per prefix. A node can be both the end
//! of a word and the parent of longer words ("cat" and "cats").

use std::collections::HashMap;

/// A single node of the trie.
#[derive(Debug, Clone, Default)]
pub struct TrieNode {
    children: HashMap<char, TrieNode>,
    is_word: bool,
}

impl TrieNode {
    /// True if the path from the root to this node spells an inserted word
    pub fn is_word(&self) -> bool {
        self.is_word
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    pub fn child(&self, ch: char) -> Option<&TrieNode> {
        self.children.get(&ch)
    }

    /// Follow every char of `token` from this node.
    ///
    /// Grid tokens may span several chars (e.g. "qu"), so the search descends
    /// by token rather than by char.
    pub fn descend(&self, token: &str) -> Option<&TrieNode> {
        token.chars().try_fold(self, |node, ch| node.child(ch))
    }
}

/// The prefix dictionary.
#[derive(Debug, Clone, Default)]
pub struct Trie {
    root: TrieNode,
    len: usize,
}

impl Trie {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a word. Inserting the same word again leaves the trie unchanged.
    pub fn insert(&mut self, word: &str) {
        if word.is_empty() {
            return;
        }

        let mut node = &mut self.root;
        for ch in word.chars() {
            node = node.children.entry(ch).or_default();
        }

        if !node.is_word {
            node.is_word = true;
            self.len += 1;
        }
    }

    /// True if `prefix` starts at least one inserted word. The empty prefix
    /// always matches.
    pub fn has_prefix(&self, prefix: &str) -> bool {
        self.node(prefix).is_some()
    }

    /// True only if `word` itself was inserted, not merely a prefix of one.
    pub fn has_word(&self, word: &str) -> bool {
        self.node(word).is_some_and(TrieNode::is_word)
    }

    /// The node reached by consuming `seq` from the root, if any.
    pub fn node(&self, seq: &str) -> Option<&TrieNode> {
        self.root.descend(seq)
    }

    pub fn root(&self) -> &TrieNode {
        &self.root
    }

    /// Number of distinct words inserted
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl<S: AsRef<str>> Extend<S> for Trie {
    fn extend<I: IntoIterator<Item = S>>(&mut self, words: I) {
        for word in words {
            self.insert(word.as_ref());
        }
    }
}

impl<S: AsRef<str>> FromIterator<S> for Trie {
    fn from_iter<I: IntoIterator<Item = S>>(words: I) -> Self {
        let mut trie = Trie::new();
        trie.extend(words);
        trie
    }
}
