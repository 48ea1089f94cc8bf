//! Analysis options resolution: defaults, then a JSON file, then flags.

use std::path::Path;

use anyhow::{Context, Result};
use assess_model::AnalysisOptions;

/// Per-flag overrides collected from the command line.
#[derive(Debug, Clone, Default)]
pub struct OptionOverrides {
    pub score_suffix: Option<String>,
    pub correct_prefix: Option<String>,
    pub warn_threshold: Option<f64>,
}

/// Loads options from a JSON file; missing keys keep their defaults.
pub fn load_options_file(path: &Path) -> Result<AnalysisOptions> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("read options file: {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parse options file: {}", path.display()))
}

/// Builds the effective options. Flags take precedence over the file.
pub fn resolve_options(
    config: Option<&Path>,
    overrides: OptionOverrides,
) -> Result<AnalysisOptions> {
    let mut options = match config {
        Some(path) => load_options_file(path)?,
        None => AnalysisOptions::default(),
    };
    if let Some(suffix) = overrides.score_suffix {
        options = options.with_score_suffix(suffix);
    }
    if let Some(prefix) = overrides.correct_prefix {
        options = options.with_correct_prefix(prefix);
    }
    if let Some(threshold) = overrides.warn_threshold {
        options = options.with_low_correctness_threshold(threshold);
    }
    let threshold = options.low_correctness_threshold;
    anyhow::ensure!(
        (0.0..=1.0).contains(&threshold),
        "warn threshold must be between 0 and 1, got {threshold}"
    );
    Ok(options)
}
