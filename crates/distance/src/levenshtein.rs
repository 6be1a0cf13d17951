//! Classic Levenshtein edit distance.
//!
//! Wagner–Fischer recurrence collapsed to a single rolling column. The column
//! runs over `s` and is swept once per element of `t`, so memory is
//! `O(len(s))` and the argument order only decides which axis is iterated.

/// Calculate the Levenshtein edit distance between two strings.
///
/// Both strings are decoded to Unicode code points first, so a multi-byte
/// character such as `ё` or `中` counts as a single edit unit.
///
/// # Arguments
/// * `s` - Source string
/// * `t` - Target string
///
/// # Returns
/// Minimum number of single code point insertions, deletions and
/// substitutions needed to transform `s` into `t`
///
/// # Example
/// ```
/// use fuzzy_distance::levenshtein_distance;
///
/// assert_eq!(levenshtein_distance("kitten", "sitting"), 3);
/// assert_eq!(levenshtein_distance("ёлка", "ёлочка"), 2);
/// ```
pub fn levenshtein_distance(s: &str, t: &str) -> usize {
    let s_chars: Vec<char> = s.chars().collect();
    let t_chars: Vec<char> = t.chars().collect();

    levenshtein(&s_chars, &t_chars)
}

/// Levenshtein distance over arbitrary pre-decoded sequences.
///
/// Runs in `O(len(s) * len(t))` time with one column of `len(s) + 1`
/// integers. Very long inputs cost time quadratically; cap them before
/// calling if a bound is needed.
pub fn levenshtein<T: PartialEq>(s: &[T], t: &[T]) -> usize {
    // column[y]: distance between s[..y] and the prefix of t seen so far
    let mut column: Vec<usize> = (0..=s.len()).collect();

    for (x, t_item) in t.iter().enumerate() {
        let x = x + 1;
        let mut last_diag = x - 1;
        column[0] = x;

        for y in 1..=s.len() {
            let old_diag = column[y];
            let cost = usize::from(s[y - 1] != *t_item);

            column[y] = (column[y] + 1) // deletion
                .min(column[y - 1] + 1) // insertion
                .min(last_diag + cost); // substitution or match

            last_diag = old_diag;
        }
    }

    column[s.len()]
}
