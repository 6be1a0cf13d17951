//! List available metrics

use crate::config::OutputFormat;
use anyhow::Result;
use fuzzy_distance::Metric;
use owo_colors::OwoColorize;

pub fn run(format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            let metrics: Vec<_> = Metric::ALL
                .iter()
                .map(|m| serde_json::json!({ "name": m.name(), "description": m.description() }))
                .collect();
            println!("{}", serde_json::to_string_pretty(&metrics)?);
        }
        OutputFormat::Text => {
            for metric in Metric::ALL {
                println!("{:<12} {}", metric.name().bold(), metric.description().dimmed());
            }
        }
    }
    Ok(())
}
