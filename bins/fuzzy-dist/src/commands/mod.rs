//! Command implementations

pub mod compare;
pub mod files;
pub mod metrics;

use crate::config::{OutputFormat, Settings};
use anyhow::Result;
use fuzzy_distance::{distance_within_limit, Metric};
use owo_colors::OwoColorize;
use serde::{Serialize, Serializer};

/// Distances between one pair of inputs
#[derive(Debug, Serialize)]
pub struct Report {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub left: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub right: Option<String>,
    pub left_chars: usize,
    pub right_chars: usize,
    /// Metric name and distance, in the order the metrics were requested
    #[serde(serialize_with = "serialize_in_order")]
    pub distances: Vec<(&'static str, usize)>,
}

/// Write the distances as a JSON object whose keys keep the requested order
fn serialize_in_order<S: Serializer>(
    distances: &[(&'static str, usize)],
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    serializer.collect_map(distances.iter().map(|(name, value)| (name, value)))
}

/// Compute every requested metric for a pair, honouring the length limit
pub fn measure(left: &str, right: &str, metrics: &[Metric], settings: &Settings) -> Result<Report> {
    let mut distances = Vec::with_capacity(metrics.len());
    for metric in metrics {
        let value = distance_within_limit(left, right, *metric, settings.max_chars)?;
        distances.push((metric.name(), value));
    }

    Ok(Report {
        left: None,
        right: None,
        left_chars: left.chars().count(),
        right_chars: right.chars().count(),
        distances,
    })
}

/// Print a report in the requested format
pub fn print_report(report: &Report, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(report)?),
        OutputFormat::Text => {
            if let (Some(left), Some(right)) = (&report.left, &report.right) {
                println!("{} {} ↔ {}", "Files:".bold(), left, right);
            }
            println!(
                "{} {} vs {} code points",
                "Lengths:".bold(),
                report.left_chars,
                report.right_chars
            );
            for (name, value) in &report.distances {
                println!("  {:<12} {}", name.cyan(), value.to_string().bold());
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(max_chars: usize) -> Settings {
        Settings {
            metrics: Metric::ALL.to_vec(),
            max_chars,
            format: OutputFormat::Json,
        }
    }

    #[test]
    fn test_measure_keeps_requested_order() {
        let report = measure("ab", "ba", &[Metric::Osa, Metric::Levenshtein], &settings(10)).unwrap();
        assert_eq!(report.distances, vec![("osa", 1), ("levenshtein", 2)]);
    }

    #[test]
    fn test_report_json_keeps_requested_order() {
        let report = measure("ab", "ba", &[Metric::Osa, Metric::Levenshtein], &settings(10)).unwrap();
        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains(r#""distances":{"osa":1,"levenshtein":2}"#), "{}", json);
    }

    #[test]
    fn test_measure_respects_limit() {
        let err = measure("abc", "abd", &[Metric::Osa], &settings(2)).unwrap_err();
        assert!(err.to_string().contains("Input too long"));
    }
}
