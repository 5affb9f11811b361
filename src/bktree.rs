use crate::distance::levenshtein;
use crate::error::SuggestError;
use log::debug;
use std::collections::BTreeMap;

type NodeId = usize;

const ROOT: NodeId = 0;

#[derive(Debug, Clone)]
struct BkNode {
    word: String,
    // Edge keys are distances to `word`; never 0, never repeated.
    children: BTreeMap<usize, NodeId>,
}

impl BkNode {
    fn new(word: &str) -> Self {
        BkNode {
            word: word.to_owned(),
            children: BTreeMap::new(),
        }
    }
}

/// Burkhard-Keller tree keyed by Levenshtein distance.
///
/// A tree always holds at least its root word.
#[derive(Debug, Clone)]
pub struct BkTree {
    nodes: Vec<BkNode>,
}

impl BkTree {
    pub fn new(root_word: &str) -> Result<Self, SuggestError> {
        if root_word.is_empty() {
            return Err(SuggestError::EmptyVocabulary);
        }
        Ok(BkTree {
            nodes: vec![BkNode::new(root_word)],
        })
    }

    /// Builds a tree rooted at the first non-empty word.
    pub fn from_words<I, S>(words: I) -> Result<Self, SuggestError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut words = words.into_iter();
        let root = words
            .by_ref()
            .find(|w| !w.as_ref().is_empty())
            .ok_or(SuggestError::EmptyVocabulary)?;

        let mut tree = BkTree::new(root.as_ref())?;
        for word in words {
            tree.insert(word.as_ref());
        }
        debug!("built bk-tree with {} words", tree.len());
        Ok(tree)
    }

    pub fn insert(&mut self, word: &str) {
        if word.is_empty() {
            return;
        }

        let mut curr = ROOT;
        loop {
            let dist = levenshtein(&self.nodes[curr].word, word);
            match self.nodes[curr].children.get(&dist) {
                Some(&child) => curr = child,
                None => {
                    // distance 0 means the word is already here
                    if dist == 0 {
                        return;
                    }
                    let child = self.nodes.len();
                    self.nodes.push(BkNode::new(word));
                    self.nodes[curr].children.insert(dist, child);
                    return;
                }
            }
        }
    }

    /// Words within `tolerance` edits of `word`, in traversal order.
    pub fn get_similar_words(&self, word: &str, tolerance: usize) -> Vec<String> {
        self.search(word, tolerance)
            .into_iter()
            .map(|(similar, _)| similar)
            .collect()
    }

    /// Like [`get_similar_words`](Self::get_similar_words), sorted by
    /// ascending distance. Equal distances keep traversal order.
    pub fn get_similar_words_ordered(&self, word: &str, tolerance: usize) -> Vec<String> {
        let mut found = self.search(word, tolerance);
        found.sort_by_key(|&(_, dist)| dist);
        found.into_iter().map(|(similar, _)| similar).collect()
    }

    fn search(&self, word: &str, tolerance: usize) -> Vec<(String, usize)> {
        let mut found = Vec::new();
        let mut stack = vec![ROOT];

        while let Some(id) = stack.pop() {
            let node = &self.nodes[id];
            let dist = levenshtein(&node.word, word);
            if dist <= tolerance {
                found.push((node.word.clone(), dist));
            }

            // Triangle inequality: anything under an edge outside
            // [dist - tolerance, dist + tolerance] is farther than `tolerance`.
            let window = dist.saturating_sub(tolerance)..=dist + tolerance;
            stack.extend(node.children.range(window).rev().map(|(_, &child)| child));
        }
        found
    }

    pub fn root_word(&self) -> &str {
        &self.nodes[ROOT].word
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false: a tree holds at least its root word.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn edge_count(&self) -> usize {
        self.nodes.iter().map(|node| node.children.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn animals() -> BkTree {
        BkTree::from_words(["cat", "cats", "car", "dog"]).unwrap()
    }

    // Same search without the edge window.
    fn scan_all(tree: &BkTree, word: &str, tolerance: usize) -> Vec<String> {
        let mut found: Vec<String> = tree
            .nodes
            .iter()
            .filter(|node| levenshtein(&node.word, word) <= tolerance)
            .map(|node| node.word.clone())
            .collect();
        found.sort();
        found
    }

    #[test]
    fn test_similar_words_ordered() {
        let tree = animals();
        assert_eq!(tree.get_similar_words_ordered("cot", 1), vec!["cat"]);
        // cat=1, then cats/car/dog=2 in traversal order
        assert_eq!(
            tree.get_similar_words_ordered("cot", 2),
            vec!["cat", "cats", "car", "dog"]
        );
    }

    #[test]
    fn test_similar_words_unordered() {
        let tree = animals();
        assert_eq!(tree.get_similar_words("dot", 1), vec!["dog"]);
        assert!(tree.get_similar_words("zzzzzz", 2).is_empty());
    }

    #[test]
    fn test_exact_match_with_zero_tolerance() {
        let tree = animals();
        assert_eq!(tree.get_similar_words("cats", 0), vec!["cats"]);
        assert!(tree.get_similar_words("cow", 0).is_empty());
    }

    #[test]
    fn test_duplicate_insert() {
        let mut tree = animals();
        let (nodes, edges) = (tree.len(), tree.edge_count());
        tree.insert("cat");
        tree.insert("dog");
        assert_eq!(tree.len(), nodes);
        assert_eq!(tree.edge_count(), edges);
    }

    #[test]
    fn test_empty_insert() {
        let mut tree = animals();
        tree.insert("");
        assert_eq!(tree.len(), 4);
        assert_eq!(tree.edge_count(), 3);
    }

    #[test]
    fn test_colliding_distance_routes_deeper() {
        // "bat" and "car" are both 1 away from "cat"
        let tree = BkTree::from_words(["cat", "bat", "car"]).unwrap();
        assert_eq!(tree.nodes[ROOT].children.len(), 1);
        assert_eq!(tree.len(), 3);
        for node in &tree.nodes {
            assert!(!node.children.contains_key(&0));
        }
    }

    #[test]
    fn test_from_words_skips_leading_empty() {
        let tree = BkTree::from_words(["", "", "hello"]).unwrap();
        assert_eq!(tree.root_word(), "hello");
        assert!(!tree.is_empty());
    }

    #[test]
    fn test_empty_vocabulary() {
        assert!(matches!(
            BkTree::from_words(Vec::<String>::new()),
            Err(SuggestError::EmptyVocabulary)
        ));
        assert!(matches!(BkTree::new(""), Err(SuggestError::EmptyVocabulary)));
    }

    #[test]
    fn test_pruning_matches_full_scan() {
        let words = [
            "spelling", "spilling", "selling", "smelling", "swelling", "spell", "spill", "sell",
            "shell", "smell", "yelling", "telling", "tell", "well", "we", "wee", "weed",
        ];
        let tree = BkTree::from_words(words).unwrap();
        for query in ["speling", "sel", "wel", "tel", "x", "spellings"] {
            for tolerance in 0..=3 {
                let mut found = tree.get_similar_words(query, tolerance);
                found.sort();
                assert_eq!(found, scan_all(&tree, query, tolerance), "{query} ~{tolerance}");
            }
        }
    }
}
