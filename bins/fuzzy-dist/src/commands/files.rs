//! Compare the contents of two UTF-8 files

use super::{measure, print_report};
use crate::config::Settings;
use anyhow::{Context, Result};
use fuzzy_distance::Metric;
use std::path::Path;

pub fn run(left: &Path, right: &Path, requested: &[Metric], settings: &Settings) -> Result<()> {
    let left_text = read_text(left)?;
    let right_text = read_text(right)?;

    let metrics = settings.select_metrics(requested);
    tracing::info!(
        left = %left.display(),
        right = %right.display(),
        ?metrics,
        "comparing files"
    );

    let mut report = measure(&left_text, &right_text, &metrics, settings)?;
    report.left = Some(left.display().to_string());
    report.right = Some(right.display().to_string());

    print_report(&report, settings.format)
}

fn read_text(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}
