//! Levenshtein automaton over a [`Trie`].
//!
//! [`LevenshteinNfa`] recognises every string within `max_edits` edits of a
//! query. Its live states are tracked as a small set of
//! [`AutomatonState`]s and advanced one character at a time, so a trie can be
//! walked in lockstep with the automaton and abandoned as soon as no state
//! survives.

use crate::trie::{NodeId, ROOT, Trie};
use smallvec::SmallVec;

/// Live states of an automaton. Kept small by [`Nfa::simplify`].
pub type StateSet<S> = SmallVec<[S; 8]>;

/// Step/transition protocol shared by nondeterministic automata.
pub trait Nfa {
    type State: Copy + Ord;

    fn initial_states(&self) -> StateSet<Self::State>;

    fn accept(&self, state: &Self::State) -> bool;

    /// Pushes every successor of `state` on input `c` into `out`.
    fn transitions(&self, state: &Self::State, c: char, out: &mut StateSet<Self::State>);

    /// Reduces `states` to an equivalent set. Identity unless overridden.
    fn simplify(&self, states: StateSet<Self::State>) -> StateSet<Self::State> {
        states
    }

    fn step(&self, states: &[Self::State], c: char) -> StateSet<Self::State> {
        let mut next = StateSet::new();
        for state in states {
            self.transitions(state, c, &mut next);
        }
        next.sort_unstable();
        next.dedup();
        self.simplify(next)
    }

    fn step_all(&self, states: &[Self::State], text: &str) -> StateSet<Self::State> {
        let mut current: StateSet<Self::State> = states.iter().copied().collect();
        for c in text.chars() {
            current = self.step(&current, c);
        }
        current
    }
}

/// `offset` characters of the query matched with `budget` edits still to spend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AutomatonState {
    pub offset: usize,
    pub budget: usize,
}

impl AutomatonState {
    pub fn new(offset: usize, budget: usize) -> Self {
        AutomatonState { offset, budget }
    }

    /// Whether exploring `self` already explores `other`: the budget surplus
    /// covers the offset gap. Budgets are unsigned, so infeasible states never
    /// reach this check.
    pub fn subsumes(&self, other: &AutomatonState) -> bool {
        self.budget >= other.budget
            && self.budget - other.budget >= self.offset.abs_diff(other.offset)
    }
}

/// NFA accepting exactly the strings within `max_edits` of `query`.
///
/// Built per query and dropped afterwards; it never mutates the trie it runs
/// against.
#[derive(Debug, Clone)]
pub struct LevenshteinNfa {
    query: Vec<char>,
    max_edits: usize,
}

impl LevenshteinNfa {
    pub fn new(query: &str, max_edits: usize) -> Self {
        LevenshteinNfa {
            query: query.chars().collect(),
            max_edits,
        }
    }

    pub fn query(&self) -> String {
        self.query.iter().collect()
    }

    pub fn max_edits(&self) -> usize {
        self.max_edits
    }

    /// Fewest edits over the accepting states, or `None` if no state accepts.
    ///
    /// An accepting state still owes the deletion of the unmatched query
    /// suffix, so that is counted on top of the budget already spent.
    pub fn accept_best(&self, states: &[AutomatonState]) -> Option<usize> {
        states
            .iter()
            .filter(|state| self.accept(state))
            .map(|state| self.max_edits - state.budget + self.query.len() - state.offset)
            .min()
    }

    /// Every trie word within `max_edits` of the query with its edit count,
    /// sorted by ascending edits. Ties keep trie (character) order.
    pub fn intersection_with_trie_dfs(&self, trie: &Trie) -> Vec<(usize, String)> {
        let mut found = Vec::new();
        let mut word = String::new();
        self.intersect(trie, ROOT, &self.initial_states(), &mut word, &mut found);
        found.sort_by_key(|&(edits, _)| edits);
        found
    }

    fn intersect(
        &self,
        trie: &Trie,
        node: NodeId,
        states: &[AutomatonState],
        word: &mut String,
        found: &mut Vec<(usize, String)>,
    ) {
        if trie.is_word(node) {
            if let Some(edits) = self.accept_best(states) {
                found.push((edits, word.clone()));
            }
        }

        for (letter, child) in trie.children(node) {
            let next = self.step(states, letter);
            // no live parse extends past this edge
            if next.is_empty() {
                continue;
            }
            word.push(letter);
            self.intersect(trie, child, &next, word, found);
            word.pop();
        }
    }

    /// Up to `limit` trie words (all of them for `None`), closest first.
    pub fn get_similar_words(&self, trie: &Trie, limit: Option<usize>) -> Vec<String> {
        let found = self.intersection_with_trie_dfs(trie);
        let limit = limit.unwrap_or(found.len());
        found.into_iter().take(limit).map(|(_, word)| word).collect()
    }
}

impl Nfa for LevenshteinNfa {
    type State = AutomatonState;

    fn initial_states(&self) -> StateSet<AutomatonState> {
        smallvec::smallvec![AutomatonState::new(0, self.max_edits)]
    }

    fn accept(&self, state: &AutomatonState) -> bool {
        self.query.len() - state.offset <= state.budget
    }

    fn transitions(&self, state: &AutomatonState, c: char, out: &mut StateSet<AutomatonState>) {
        let AutomatonState { offset, budget } = *state;
        let remaining = self.query.len() - offset;
        if budget > 0 {
            // `c` inserted
            out.push(AutomatonState::new(offset, budget - 1));
            // `c` substituted for query[offset]
            if remaining > 0 {
                out.push(AutomatonState::new(offset + 1, budget - 1));
            }
        }
        // skip k query characters, then match `c`
        for k in 0..(budget + 1).min(remaining) {
            if self.query[offset + k] == c {
                out.push(AutomatonState::new(offset + k + 1, budget - k));
            }
        }
    }

    fn simplify(&self, states: StateSet<AutomatonState>) -> StateSet<AutomatonState> {
        states
            .iter()
            .filter(|state| {
                !states
                    .iter()
                    .any(|other| other != *state && other.subsumes(state))
            })
            .copied()
            .collect()
    }
}

/// Edit distance between `s1` and `s2` if it is at most `max_edits`.
pub fn levenshtein_using_nfa(s1: &str, s2: &str, max_edits: usize) -> Option<usize> {
    let nfa = LevenshteinNfa::new(s2, max_edits);
    let states = nfa.step_all(&nfa.initial_states(), s1);
    nfa.accept_best(&states)
}
