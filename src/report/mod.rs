pub mod json;
pub mod text;

use serde::Serialize;

use crate::model::score::{ScoreLabel, label_order};

#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Final identification of one observed centroid.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Identification {
    pub feature: usize,
    pub pixel: f64,
    pub label: ScoreLabel,
    pub nmatch: usize,
    pub line_index: Option<usize>,
    pub wave: Option<f64>,
    pub ion: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LabelCount {
    pub label: ScoreLabel,
    pub count: usize,
    pub fraction: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct SearchSettings {
    pub dwv_guess: f64,
    pub start_window: String,
    pub tol: f64,
    pub dwv_uncertainty: f64,
    pub max_skip: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct SummaryData {
    pub tool: String,
    pub version: String,
    pub ions: Vec<String>,
    pub n_reference_lines: usize,
    pub n_centroids: usize,
    pub settings: SearchSettings,
    pub n_quads: usize,
    pub n_matches: usize,
    pub n_skipped: usize,
    pub labels: Vec<LabelCount>,
    pub confident_fraction: f64,
}

/// Counts per label in display order; every label is present.
pub fn label_counts(labels: &[ScoreLabel]) -> Vec<LabelCount> {
    let total = labels.len();
    label_order()
        .iter()
        .map(|&label| {
            let count = labels.iter().filter(|&&l| l == label).count();
            LabelCount {
                label,
                count,
                fraction: fraction(count, total),
            }
        })
        .collect()
}

pub fn confident_fraction(labels: &[ScoreLabel]) -> f64 {
    fraction(labels.iter().filter(|l| l.is_confident()).count(), labels.len())
}

fn fraction(count: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 / total as f64
    }
}

pub fn format_f64_4(v: f64) -> String {
    if v.is_finite() {
        format!("{v:.4}")
    } else {
        "NaN".to_string()
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/mod.rs"]
mod tests;
