//! "Did you mean" suggestion engine
//!
//! Ranks command-table verbs by Ratcliff/Obershelp similarity to a mistyped
//! line: recursively find the longest matching block, then match the pieces
//! on either side; the ratio is twice the total matched length over the sum
//! of both lengths. Candidates at or above the threshold are returned best
//! first, ties broken by candidate iteration order.

use std::collections::HashMap;
use tracing::trace;

/// Minimum normalized similarity for a candidate to be suggested.
pub const SUGGEST_CUTOFF: f64 = 0.6;

/// Maximum number of suggestions reported.
pub const SUGGEST_LIMIT: usize = 3;

/// Normalized similarity of two strings in `[0, 1]`.
///
/// `1.0` means identical; `0.0` means no characters in common. Symmetric in
/// its arguments and deterministic.
pub fn similarity(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let total = a.len() + b.len();
    if total == 0 {
        return 1.0;
    }
    let matched = matched_len(&a, &b, 0, a.len(), 0, b.len());
    2.0 * matched as f64 / total as f64
}

/// Total length of the aligned matching blocks between `a[alo..ahi]` and
/// `b[blo..bhi]`.
fn matched_len(a: &[char], b: &[char], alo: usize, ahi: usize, blo: usize, bhi: usize) -> usize {
    let (i, j, size) = longest_match(a, b, alo, ahi, blo, bhi);
    if size == 0 {
        return 0;
    }
    size + matched_len(a, b, alo, i, blo, j) + matched_len(a, b, i + size, ahi, j + size, bhi)
}

/// Longest block of characters common to `a[alo..ahi]` and `b[blo..bhi]`,
/// returned as (start in a, start in b, length). Earliest block wins among
/// equals.
fn longest_match(
    a: &[char],
    b: &[char],
    alo: usize,
    ahi: usize,
    blo: usize,
    bhi: usize,
) -> (usize, usize, usize) {
    let mut b_positions: HashMap<char, Vec<usize>> = HashMap::new();
    for (j, &ch) in b.iter().enumerate().take(bhi).skip(blo) {
        b_positions.entry(ch).or_default().push(j);
    }

    let (mut best_i, mut best_j, mut best_size) = (alo, blo, 0);
    // run_lengths[j] = length of the common run ending at a[i], b[j]
    let mut run_lengths: HashMap<usize, usize> = HashMap::new();
    for i in alo..ahi {
        let mut next_runs: HashMap<usize, usize> = HashMap::new();
        if let Some(positions) = b_positions.get(&a[i]) {
            for &j in positions {
                let k = if j > blo {
                    run_lengths.get(&(j - 1)).copied().unwrap_or(0) + 1
                } else {
                    1
                };
                next_runs.insert(j, k);
                if k > best_size {
                    best_i = i + 1 - k;
                    best_j = j + 1 - k;
                    best_size = k;
                }
            }
        }
        run_lengths = next_runs;
    }

    (best_i, best_j, best_size)
}

/// Up to [`SUGGEST_LIMIT`] candidates whose similarity to `input` is at
/// least [`SUGGEST_CUTOFF`], best first. An empty result signals "no
/// suggestion".
pub fn suggest<'a>(input: &str, candidates: &[&'a str]) -> Vec<&'a str> {
    let mut scored: Vec<(f64, &'a str)> = candidates
        .iter()
        .map(|&c| (similarity(input, c), c))
        .filter(|(score, _)| *score >= SUGGEST_CUTOFF)
        .collect();
    // Stable sort: equal scores keep candidate-table order.
    scored.sort_by(|x, y| y.0.partial_cmp(&x.0).unwrap_or(std::cmp::Ordering::Equal));
    scored.truncate(SUGGEST_LIMIT);
    trace!(input, suggestions = ?scored, "ranked suggestions");
    scored.into_iter().map(|(_, c)| c).collect()
}
