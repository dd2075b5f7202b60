pub mod stage1_lists;
pub mod stage2_search;
pub mod stage3_identify;
pub mod stage4_report;

use std::path::PathBuf;

use tracing::info;

use crate::error::AppError;
use crate::input::centroids::load_centroids;
use crate::lists::DataPaths;
use crate::lists::load::LineListRequest;
use crate::patterns::search::{SearchParams, StartWindow};
use crate::report::{
    Identification, SearchSettings, SummaryData, confident_fraction, format_f64_4, label_counts,
};
use stage1_lists::run_stage1;
use stage2_search::run_stage2;
use stage3_identify::run_stage3;
use stage4_report::write_reports;

#[derive(Debug, Clone)]
pub struct MatchConfig {
    pub data: DataPaths,
    pub request: LineListRequest,
    pub centroids: PathBuf,
    pub search: SearchParams,
    pub out_dir: Option<PathBuf>,
}

#[derive(Debug, Clone)]
pub struct MatchRun {
    pub summary: SummaryData,
    pub identifications: Vec<Identification>,
}

/// Load lists and centroids, search every quad, score and report.
pub fn run_match(config: &MatchConfig) -> Result<MatchRun, AppError> {
    let stage1 = run_stage1(&config.data, &config.request)?;
    let pixels = load_centroids(&config.centroids)?;
    info!(
        n = pixels.len(),
        path = %config.centroids.display(),
        "loaded centroids"
    );

    let outcome = run_stage2(&pixels, &stage1, &config.search)?;
    let identifications = run_stage3(&pixels, &stage1, &outcome);

    let summary = SummaryData {
        tool: env!("CARGO_PKG_NAME").to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        ions: stage1.list.ions().into_iter().map(str::to_string).collect(),
        n_reference_lines: stage1.list.len(),
        n_centroids: pixels.len(),
        settings: SearchSettings {
            dwv_guess: config.search.dwv_guess,
            start_window: describe_window(&config.search.start_window),
            tol: config.search.quad.tol,
            dwv_uncertainty: config.search.quad.dwv_uncertainty,
            max_skip: config.search.max_skip,
        },
        n_quads: outcome.n_quads,
        n_matches: outcome.n_matches,
        n_skipped: outcome.n_skipped,
        labels: label_counts(&outcome.labels),
        confident_fraction: confident_fraction(&outcome.labels),
    };

    if let Some(out_dir) = &config.out_dir {
        write_reports(&summary, &identifications, out_dir)?;
    }

    Ok(MatchRun {
        summary,
        identifications,
    })
}

pub fn describe_window(window: &StartWindow) -> String {
    match window {
        StartWindow::Range([lo, hi]) => {
            format!("({}, {})", format_f64_4(*lo), format_f64_4(*hi))
        }
        StartWindow::Central { wv_cen, npix } => format!(
            "central {} A at pixel {}",
            format_f64_4(*wv_cen),
            format_f64_4(npix / 2.0)
        ),
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/tests.rs"]
mod tests;
