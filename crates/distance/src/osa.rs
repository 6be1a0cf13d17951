//! Optimal string alignment distance.
//!
//! The restricted Damerau-Levenshtein distance: Levenshtein plus swaps of two
//! adjacent code points, where no code point takes part in more than one
//! swap. It does not satisfy the triangle inequality
//! (`osa("ca", "abc") == 3` while `osa("ca", "ac") + osa("ac", "abc") == 2`).
//!
//! Only three rows of the `(m + 1) x (n + 1)` matrix are live at any time;
//! they are kept in a ring indexed by `i % 3`.

/// Number of matrix rows kept alive: current, previous and the one before.
const RING: usize = 3;

/// Calculate the optimal string alignment distance between two strings.
///
/// Both strings are decoded to Unicode code points first.
///
/// # Arguments
/// * `s` - Source string
/// * `t` - Target string
///
/// # Returns
/// Minimum number of insertions, deletions, substitutions and adjacent
/// transpositions needed to transform `s` into `t`
///
/// # Example
/// ```
/// use fuzzy_distance::osa_distance;
///
/// assert_eq!(osa_distance("ab", "ba"), 1);
/// assert_eq!(osa_distance("中国", "中华人民共和国"), 5);
/// ```
pub fn osa_distance(s: &str, t: &str) -> usize {
    let s_chars: Vec<char> = s.chars().collect();
    let t_chars: Vec<char> = t.chars().collect();

    osa(&s_chars, &t_chars)
}

/// Optimal string alignment distance over arbitrary pre-decoded sequences.
///
/// The longer input drives the outer loop, so the rows are as short as the
/// shorter input: `O(len(s) * len(t))` time, `O(min(len(s), len(t)))` space.
pub fn osa<T: PartialEq>(s: &[T], t: &[T]) -> usize {
    if s.len() < t.len() {
        return osa(t, s);
    }

    let m = s.len();
    let n = t.len();

    let mut rows = vec![vec![0usize; n + 1]; (m + 1).min(RING)];
    for (i, row) in rows.iter_mut().enumerate() {
        row[0] = i;
    }
    for (j, cell) in rows[0].iter_mut().enumerate() {
        *cell = j;
    }

    for i in 1..=m {
        let cur = i % RING;
        let prev = (i - 1) % RING;
        rows[cur][0] = i;

        for j in 1..=n {
            let cost = usize::from(s[i - 1] != t[j - 1]);

            let mut best = (rows[prev][j] + 1) // deletion
                .min(rows[cur][j - 1] + 1) // insertion
                .min(rows[prev][j - 1] + cost); // substitution or match

            if i > 1 && j > 1 && s[i - 1] == t[j - 2] && s[i - 2] == t[j - 1] {
                best = best.min(rows[(i - 2) % RING][j - 2] + 1); // transposition
            }

            rows[cur][j] = best;
        }
    }

    rows[m % RING][n]
}
