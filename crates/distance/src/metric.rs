//! Metric selection and length-bounded evaluation.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{DistanceError, Result};
use crate::{levenshtein_distance, osa_distance};

/// Edit distance metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    /// Insertions, deletions and substitutions
    Levenshtein,
    /// Levenshtein plus adjacent transpositions (optimal string alignment)
    Osa,
}

impl Metric {
    /// Every supported metric, in display order.
    pub const ALL: [Metric; 2] = [Metric::Levenshtein, Metric::Osa];

    /// Canonical lowercase name.
    pub fn name(&self) -> &'static str {
        match self {
            Metric::Levenshtein => "levenshtein",
            Metric::Osa => "osa",
        }
    }

    /// One-line description for listings.
    pub fn description(&self) -> &'static str {
        match self {
            Metric::Levenshtein => "insertions, deletions and substitutions",
            Metric::Osa => "Levenshtein plus adjacent transpositions (restricted Damerau)",
        }
    }

    /// Compute the distance between `a` and `b` with this metric.
    #[inline]
    pub fn distance(self, a: &str, b: &str) -> usize {
        match self {
            Metric::Levenshtein => levenshtein_distance(a, b),
            Metric::Osa => osa_distance(a, b),
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Metric {
    type Err = DistanceError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "levenshtein" | "lev" => Ok(Metric::Levenshtein),
            "osa" | "damerau" => Ok(Metric::Osa),
            _ => Err(DistanceError::UnknownMetric(s.to_string())),
        }
    }
}

/// Compute the distance between two strings with the given metric.
///
/// # Example
/// ```
/// use fuzzy_distance::{distance, Metric};
///
/// assert_eq!(distance("ab", "ba", Metric::Levenshtein), 2);
/// assert_eq!(distance("ab", "ba", Metric::Osa), 1);
/// ```
#[inline]
pub fn distance(a: &str, b: &str, metric: Metric) -> usize {
    metric.distance(a, b)
}

/// Compute a distance only if both inputs fit within `max_chars` code points.
///
/// Computation time grows with the product of the input lengths, so callers
/// handling untrusted input should bound it here instead of running the
/// algorithm unconditionally.
///
/// # Errors
/// Returns [`DistanceError::InputTooLong`] naming the first input over the
/// limit.
pub fn distance_within_limit(a: &str, b: &str, metric: Metric, max_chars: usize) -> Result<usize> {
    let len_a = a.chars().count();
    let len_b = b.chars().count();

    for len in [len_a, len_b] {
        if len > max_chars {
            tracing::debug!(%metric, len, max_chars, "input rejected by length limit");
            return Err(DistanceError::InputTooLong { len, max: max_chars });
        }
    }

    let result = metric.distance(a, b);
    tracing::debug!(%metric, len_a, len_b, distance = result, "distance computed");

    Ok(result)
}
