use super::normalize::normalize;

/// Similarity ratio between two strings in `[0, 1]`.
///
/// Both inputs are normalized first, then compared with the
/// Ratcliff/Obershelp matching-blocks measure: `2M / T` where `T` is the sum
/// of both lengths and `M` the total length of non-overlapping matching
/// blocks. Returns 0.0 when both normalized strings are empty.
///
/// The ratio is symmetric but not a metric (no triangle inequality); it is
/// a deliberate tradeoff favouring simplicity over edit-distance measures.
pub fn similarity(a: &str, b: &str) -> f64 {
    let a: Vec<char> = normalize(a).chars().collect();
    let b: Vec<char> = normalize(b).chars().collect();

    let total = a.len() + b.len();
    if total == 0 {
        return 0.0;
    }

    let matched = matching_blocks_len(&a, &b);
    2.0 * matched as f64 / total as f64
}

/// Total length of matching blocks, found greedily: take the longest common
/// contiguous substring, then recurse on the regions before and after it.
fn matching_blocks_len(a: &[char], b: &[char]) -> usize {
    let (ai, bi, len) = longest_match(a, b);
    if len == 0 {
        return 0;
    }
    len + matching_blocks_len(&a[..ai], &b[..bi])
        + matching_blocks_len(&a[ai + len..], &b[bi + len..])
}

/// Longest common contiguous substring of `a` and `b`, as
/// `(start_in_a, start_in_b, length)`.
///
/// Ties prefer the match starting at the lowest index in `a`, then the
/// lowest index in `b`. Returns length 0 when there is no common character.
fn longest_match(a: &[char], b: &[char]) -> (usize, usize, usize) {
    let mut best = (0, 0, 0);
    // run_lengths[j] = length of the common suffix ending at a[i-1], b[j-1]
    let mut run_lengths = vec![0usize; b.len() + 1];

    for i in 0..a.len() {
        let mut next = vec![0usize; b.len() + 1];
        for j in 0..b.len() {
            if a[i] == b[j] {
                let len = run_lengths[j] + 1;
                next[j + 1] = len;
                // Strict comparison: the earliest-ending (hence
                // earliest-starting) match wins ties.
                if len > best.2 {
                    best = (i + 1 - len, j + 1 - len, len);
                }
            }
        }
        run_lengths = next;
    }

    best
}
