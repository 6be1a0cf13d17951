//! Code-point aware edit distances.
//!
//! This crate provides:
//! - Levenshtein distance with a single rolling column
//! - Optimal string alignment (restricted Damerau-Levenshtein) distance with
//!   a three-row ring buffer
//! - Metric selection and length-bounded evaluation
//! - WASM bindings for browser usage
//!
//! Strings are compared as sequences of Unicode code points, never bytes.
//! Every call owns its working buffers, so all functions are safe to call
//! from any number of threads at once.
//!
//! # Example
//!
//! ```
//! use fuzzy_distance::{levenshtein_distance, osa_distance};
//!
//! assert_eq!(levenshtein_distance("ab", "ba"), 2);
//! assert_eq!(osa_distance("ab", "ba"), 1);
//! assert_eq!(osa_distance("日本", "中华人民共和国"), 7);
//! ```

mod error;
mod levenshtein;
mod metric;
mod osa;

#[cfg(feature = "wasm")]
mod wasm;

pub use error::{DistanceError, DistanceErrorCode, Result};
pub use levenshtein::{levenshtein, levenshtein_distance};
pub use metric::{distance, distance_within_limit, Metric};
pub use osa::{osa, osa_distance};
