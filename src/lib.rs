//! Fuzzy word suggestions over a fixed vocabulary.
//!
//! - [`Trie`] -- exact lookup and prefix completion
//! - [`BkTree`] -- bounded edit-distance search pruned by the triangle inequality
//! - [`LevenshteinNfa`] -- automaton walked in lockstep with a [`Trie`]
//! - [`Backend`] -- the strategy both matchers expose, selected by [`SuggestConfig`]
//! - [`Corrector`] -- lookup, completion and correction behind one handle

pub mod automaton;
pub mod backend;
pub mod bktree;
pub mod config;
pub mod corrector;
pub mod distance;
pub mod error;
pub mod trie;

pub use automaton::{AutomatonState, LevenshteinNfa, Nfa, StateSet, levenshtein_using_nfa};
pub use backend::{Backend, LevenshteinBackend};
pub use bktree::BkTree;
pub use config::{Strategy, SuggestConfig};
pub use corrector::{Corrector, SuggestedCorrection, Suggestion};
pub use distance::{MAX_TOLERANCE, levenshtein, tolerance};
pub use error::SuggestError;
pub use trie::Trie;
