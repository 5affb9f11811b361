use crate::backend::{Backend, LevenshteinBackend};
use crate::bktree::BkTree;
use crate::config::{Strategy, SuggestConfig};
use crate::distance::levenshtein;
use crate::error::SuggestError;
use crate::trie::Trie;
use log::debug;
use rayon::prelude::*;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    pub word: String,
    pub distance: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SuggestedCorrection {
    NoSuggestions,
    Suggestions(Vec<Suggestion>),
}

/// Spelling front end: exact lookup and completion through the trie,
/// corrections through whichever [`Backend`] the config selects.
pub struct Corrector {
    trie: Arc<Trie>,
    backend: Box<dyn Backend>,
    config: SuggestConfig,
}

impl Corrector {
    /// Builds the structures for `config.strategy` from normalized word tokens.
    /// Tokens are lowercased; empty ones are skipped.
    pub fn from_words<I, S>(words: I, config: SuggestConfig) -> Result<Self, SuggestError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        config.validate()?;
        let words: Vec<String> = words
            .into_iter()
            .map(|w| w.as_ref().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();

        let trie = Arc::new(Trie::from_words(&words));
        let backend: Box<dyn Backend> = match config.strategy {
            Strategy::BkTree => Box::new(BkTree::from_words(&words)?),
            Strategy::Automaton => Box::new(LevenshteinBackend::new(Arc::clone(&trie))),
        };
        debug!(
            "corrector ready: {} words, {:?} backend",
            trie.len(),
            config.strategy
        );

        Ok(Corrector {
            trie,
            backend,
            config,
        })
    }

    pub fn config(&self) -> &SuggestConfig {
        &self.config
    }

    pub fn strategy(&self) -> Strategy {
        self.config.strategy
    }

    pub fn is_word(&self, word: &str) -> bool {
        self.trie.lookup_word(word)
    }

    /// Known words starting with `prefix`, shortest first.
    pub fn complete(&self, prefix: &str) -> Vec<String> {
        self.trie.get_suggestions(prefix, self.config.limit)
    }

    pub fn suggest_single_word_corrections(&self, word: &str) -> SuggestedCorrection {
        let word = word.to_lowercase();
        if word.is_empty() || self.trie.lookup_word(&word) {
            return SuggestedCorrection::NoSuggestions;
        }

        let suggestions: Vec<Suggestion> = self
            .backend
            .get_suggestions(&word, self.config.limit)
            .into_iter()
            .map(|candidate| Suggestion {
                distance: levenshtein(&word, &candidate),
                word: candidate,
            })
            .collect();

        if suggestions.is_empty() {
            SuggestedCorrection::NoSuggestions
        } else {
            SuggestedCorrection::Suggestions(suggestions)
        }
    }

    pub fn suggest_word_corrections(&self, words: &[String]) -> Vec<SuggestedCorrection> {
        words
            .par_iter()
            .map(|word| self.suggest_single_word_corrections(word))
            .collect()
    }
}
