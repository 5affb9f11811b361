use log::debug;
use std::collections::{BTreeMap, VecDeque};

pub(crate) type NodeId = usize;

pub(crate) const ROOT: NodeId = 0;

#[derive(Debug, Clone, Default)]
struct TrieNode {
    // Only the root has no letter.
    letter: Option<char>,
    children: BTreeMap<char, NodeId>,
    is_word: bool,
}

/// Prefix tree over lowercased words.
///
/// Nodes live in a flat arena and refer to their children by index. Children
/// are kept in character order, so every traversal (completion, suggestions,
/// enumeration) is deterministic.
#[derive(Debug, Clone)]
pub struct Trie {
    nodes: Vec<TrieNode>,
    words: usize,
}

impl Default for Trie {
    fn default() -> Self {
        Self::new()
    }
}

impl Trie {
    pub fn new() -> Self {
        Trie {
            nodes: vec![TrieNode::default()],
            words: 0,
        }
    }

    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut trie = Trie::new();
        for word in words {
            trie.insert(word.as_ref());
        }
        debug!(
            "built trie with {} words in {} nodes",
            trie.words,
            trie.nodes.len()
        );
        trie
    }

    /// Inserts `word` case-folded to lowercase. Empty words and repeats are no-ops.
    pub fn insert(&mut self, word: &str) {
        let word = word.to_lowercase();
        if word.is_empty() {
            return;
        }

        let mut curr = ROOT;
        for letter in word.chars() {
            curr = match self.nodes[curr].children.get(&letter) {
                Some(&child) => child,
                None => {
                    let child = self.nodes.len();
                    self.nodes.push(TrieNode {
                        letter: Some(letter),
                        ..TrieNode::default()
                    });
                    self.nodes[curr].children.insert(letter, child);
                    child
                }
            };
        }

        if !self.nodes[curr].is_word {
            self.nodes[curr].is_word = true;
            self.words += 1;
        }
    }

    pub fn lookup_word(&self, word: &str) -> bool {
        self.find_node(&word.to_lowercase())
            .is_some_and(|node| self.nodes[node].is_word)
    }

    /// Follows the first child in character order from `prefix` down to the
    /// nearest word. Returns an empty string if `prefix` is absent or the walk
    /// dead-ends. The result is neither guaranteed shortest nor smallest.
    pub fn complete_from_prefix(&self, prefix: &str) -> String {
        let prefix = prefix.to_lowercase();
        let Some(mut node) = self.find_node(&prefix) else {
            return String::new();
        };

        let mut completion = prefix;
        while !self.nodes[node].is_word {
            let Some(&child) = self.nodes[node].children.values().next() else {
                return String::new();
            };
            completion.extend(self.nodes[child].letter);
            node = child;
        }
        completion
    }

    /// Up to `limit` words starting with `prefix`, in breadth-first order:
    /// shorter completions come first, ties broken by character order.
    pub fn get_suggestions(&self, prefix: &str, limit: usize) -> Vec<String> {
        let prefix = prefix.to_lowercase();
        let Some(start) = self.find_node(&prefix) else {
            return Vec::new();
        };

        let mut suggestions = Vec::new();
        let mut queue = VecDeque::from([(prefix, start)]);
        while suggestions.len() < limit {
            let Some((word, node)) = queue.pop_front() else {
                break;
            };
            for (&letter, &child) in &self.nodes[node].children {
                let mut next = word.clone();
                next.push(letter);
                queue.push_back((next, child));
            }
            if self.nodes[node].is_word {
                suggestions.push(word);
            }
        }
        suggestions
    }

    /// Every stored word, depth first in character order.
    pub fn all_words(&self) -> Vec<String> {
        let mut words = Vec::with_capacity(self.words);
        let mut buf = String::new();
        self.collect_words(ROOT, &mut buf, &mut words);
        words
    }

    fn collect_words(&self, node: NodeId, buf: &mut String, out: &mut Vec<String>) {
        if self.nodes[node].is_word {
            out.push(buf.clone());
        }
        for (&letter, &child) in &self.nodes[node].children {
            buf.push(letter);
            self.collect_words(child, buf, out);
            buf.pop();
        }
    }

    fn find_node(&self, prefix: &str) -> Option<NodeId> {
        prefix
            .chars()
            .try_fold(ROOT, |node, letter| self.nodes[node].children.get(&letter).copied())
    }

    /// Number of distinct words stored.
    pub fn len(&self) -> usize {
        self.words
    }

    pub fn is_empty(&self) -> bool {
        self.words == 0
    }

    /// Number of nodes including the root.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub(crate) fn is_word(&self, node: NodeId) -> bool {
        self.nodes[node].is_word
    }

    pub(crate) fn children(&self, node: NodeId) -> impl Iterator<Item = (char, NodeId)> + '_ {
        self.nodes[node]
            .children
            .iter()
            .map(|(&letter, &child)| (letter, child))
    }
}
