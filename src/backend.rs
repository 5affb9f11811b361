use crate::automaton::LevenshteinNfa;
use crate::bktree::BkTree;
use crate::distance::tolerance;
use crate::trie::Trie;
use log::trace;
use std::sync::Arc;

/// A fuzzy-matching strategy: ranked suggestions for a possibly misspelled word.
pub trait Backend: Send + Sync {
    /// At most `limit` suggestions, best first.
    fn get_suggestions(&self, word: &str, limit: usize) -> Vec<String>;
}

impl Backend for BkTree {
    fn get_suggestions(&self, word: &str, limit: usize) -> Vec<String> {
        let tolerance = tolerance(word);
        let mut suggestions = self.get_similar_words_ordered(word, tolerance);
        suggestions.truncate(limit);
        trace!(
            "bk-tree: {} suggestions for {word:?} within {tolerance}",
            suggestions.len()
        );
        suggestions
    }
}

/// Runs a fresh [`LevenshteinNfa`] against a shared trie for every query.
#[derive(Debug, Clone)]
pub struct LevenshteinBackend {
    trie: Arc<Trie>,
}

impl LevenshteinBackend {
    pub fn new(trie: Arc<Trie>) -> Self {
        LevenshteinBackend { trie }
    }

    pub fn trie(&self) -> &Trie {
        &self.trie
    }
}

impl Backend for LevenshteinBackend {
    fn get_suggestions(&self, word: &str, limit: usize) -> Vec<String> {
        let tolerance = tolerance(word);
        let suggestions =
            LevenshteinNfa::new(word, tolerance).get_similar_words(&self.trie, Some(limit));
        trace!(
            "automaton: {} suggestions for {word:?} within {tolerance}",
            suggestions.len()
        );
        suggestions
    }
}
