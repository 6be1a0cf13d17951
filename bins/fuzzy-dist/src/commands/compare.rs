//! Compare two strings given on the command line

use super::{measure, print_report};
use crate::config::Settings;
use anyhow::Result;
use fuzzy_distance::Metric;

pub fn run(left: &str, right: &str, requested: &[Metric], settings: &Settings) -> Result<()> {
    let metrics = settings.select_metrics(requested);
    tracing::info!(?metrics, "comparing strings");

    let report = measure(left, right, &metrics, settings)?;
    print_report(&report, settings.format)
}
