/// Upper bound on the edit tolerance picked by [`tolerance`].
pub const MAX_TOLERANCE: usize = 3;

/// Unit-cost Levenshtein distance over `char`s.
///
/// Keeps a single DP row sized by the shorter string.
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let (shorter, longer) = if a.len() <= b.len() { (&a, &b) } else { (&b, &a) };

    let n = shorter.len();
    let mut prev: Vec<usize> = (0..=n).collect();
    let mut curr = vec![0; n + 1];

    for (i, &lc) in longer.iter().enumerate() {
        curr[0] = i + 1;
        for j in 1..=n {
            let cost = if lc == shorter[j - 1] { 0 } else { 1 };
            let ins = curr[j - 1] + 1;
            let del = prev[j] + 1;
            let sub = prev[j - 1] + cost;
            curr[j] = ins.min(del).min(sub);
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[n]
}

/// Edits tolerated for `word`: half its length, at least one, capped at [`MAX_TOLERANCE`].
pub fn tolerance(word: &str) -> usize {
    (word.chars().count() / 2).max(1).min(MAX_TOLERANCE)
}
