//! WASM bindings for edit distances.
//!
//! These bindings allow the crate to be used from JavaScript/TypeScript
//! in both browser and Deno environments. JS strings are UTF-16 on the other
//! side; wasm-bindgen hands them over as UTF-8 and distances are computed
//! over code points either way.

use crate::Metric;
use wasm_bindgen::prelude::*;

/// Calculate Levenshtein edit distance between two strings.
#[wasm_bindgen]
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    crate::levenshtein_distance(a, b)
}

/// Calculate optimal string alignment distance between two strings.
#[wasm_bindgen]
pub fn osa_distance(a: &str, b: &str) -> usize {
    crate::osa_distance(a, b)
}

/// Calculate distance with a metric chosen by name.
///
/// # Arguments
/// * `a` - First string
/// * `b` - Second string
/// * `metric` - `"levenshtein"` or `"osa"`
///
/// # Returns
/// Distance, or an error string for an unknown metric
#[wasm_bindgen]
pub fn edit_distance(a: &str, b: &str, metric: &str) -> Result<usize, JsValue> {
    let metric: Metric = metric
        .parse()
        .map_err(|e: crate::DistanceError| JsValue::from_str(&e.to_string()))?;

    Ok(metric.distance(a, b))
}

/// Calculate every metric for a pair of strings.
///
/// # Returns
/// JSON object keyed by metric name, e.g. `{"levenshtein":2,"osa":1}`
#[wasm_bindgen]
pub fn compare(a: &str, b: &str) -> Result<String, JsValue> {
    let distances: serde_json::Map<String, serde_json::Value> = Metric::ALL
        .iter()
        .map(|metric| (metric.name().to_string(), metric.distance(a, b).into()))
        .collect();

    serde_json::to_string(&distances)
        .map_err(|e| JsValue::from_str(&format!("JSON serialize error: {}", e)))
}
