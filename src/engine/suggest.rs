// "Did you mean" suggestions for unknown commands

const MAX_SUGGESTIONS: usize = 3;
// ratio >= 0.6, i.e. 2*M/T >= 3/5
const CUTOFF_NUM: usize = 3;
const CUTOFF_DEN: usize = 5;

/// Longest common block of `a[alo..ahi]` and `b[blo..bhi]` as `(i, j, size)`.
/// Ties go to the block starting earliest in `a`, then earliest in `b`.
fn longest_block(a: &[char], b: &[char], alo: usize, ahi: usize, blo: usize, bhi: usize) -> (usize, usize, usize) {
    let mut best = (alo, blo, 0);
    // run[j] = length of the common run ending at a[i - 1], b[j - 1]
    let mut run = vec![0usize; bhi - blo + 1];
    for i in alo..ahi {
        let mut next = vec![0usize; bhi - blo + 1];
        for j in blo..bhi {
            if a[i] == b[j] {
                let k = run[j - blo] + 1;
                next[j - blo + 1] = k;
                if k > best.2 {
                    best = (i + 1 - k, j + 1 - k, k);
                }
            }
        }
        run = next;
    }
    best
}

/// Characters shared by the matching blocks of `a` and `b`.
pub fn matching_chars(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    let mut total = 0;
    let mut pending = vec![(0, a.len(), 0, b.len())];
    while let Some((alo, ahi, blo, bhi)) = pending.pop() {
        let (i, j, k) = longest_block(&a, &b, alo, ahi, blo, bhi);
        if k == 0 {
            continue;
        }
        total += k;
        pending.push((alo, i, blo, j));
        pending.push((i + k, ahi, j + k, bhi));
    }
    total
}

/// `2*M / T`: 1.0 for identical strings, 0.0 for nothing in common.
pub fn similarity(a: &str, b: &str) -> f64 {
    let total = a.chars().count() + b.chars().count();
    if total == 0 {
        return 1.0;
    }
    (2 * matching_chars(a, b)) as f64 / total as f64
}

/// Close matches for `word`, best first. Ties keep candidate order.
pub fn close_matches<'a, I>(word: &str, candidates: I) -> Vec<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    let word_len = word.chars().count();
    let mut scored: Vec<(f64, &str)> = candidates
        .into_iter()
        .filter(|c| {
            let total = word_len + c.chars().count();
            2 * matching_chars(word, c) * CUTOFF_DEN >= total * CUTOFF_NUM
        })
        .map(|c| (similarity(word, c), c))
        .collect();
    // Stable sort keeps registry order among equal scores.
    scored.sort_by(|a, b| b.0.total_cmp(&a.0));
    scored.into_iter().take(MAX_SUGGESTIONS).map(|(_, c)| c).collect()
}
