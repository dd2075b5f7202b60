use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::error::AppError;
use crate::lists::DataPaths;
use crate::lists::load::LineListRequest;
use crate::patterns::QuadParams;
use crate::patterns::search::{SearchParams, StartWindow};
use crate::pipeline::MatchConfig;

/// Largest `--max-skip`; the quad count grows with its cube.
pub const MAX_SKIP_LIMIT: usize = 16;

#[derive(Debug, Parser)]
#[command(name = "arclines", version, about = "Arc line lists and quad pattern identification")]
pub struct Cli {
    /// Debug logging (RUST_LOG overrides).
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Identify observed centroids against reference line lists.
    Match(MatchArgs),
    /// Load, merge and summarise reference line lists.
    Lists(ListsArgs),
}

#[derive(Debug, Clone, Args)]
pub struct ListSelection {
    /// Reference data directory.
    #[arg(long, env = "ARCLINES_DATA")]
    pub data_dir: PathBuf,

    /// Comma-separated ions, e.g. ArI,NeI.
    #[arg(long, value_delimiter = ',', required_unless_present = "all")]
    pub ions: Vec<String>,

    /// Use every ion list in the data directory.
    #[arg(long, conflicts_with = "ions")]
    pub all: bool,

    /// Skip ions without a list.
    #[arg(long)]
    pub skip_missing: bool,

    /// Include unidentified lines flagged for the selected ions.
    #[arg(long)]
    pub unknown: bool,
}

impl ListSelection {
    pub fn request(&self) -> LineListRequest {
        LineListRequest {
            ions: self.ions.clone(),
            all: self.all,
            skip: self.skip_missing,
            unknown: self.unknown,
        }
    }
}

#[derive(Debug, Clone, Args)]
pub struct MatchArgs {
    #[command(flatten)]
    pub lists: ListSelection,

    /// Observed line centroids (pixels, first column).
    #[arg(long)]
    pub centroids: PathBuf,

    /// Dispersion guess in wavelength per pixel.
    #[arg(long)]
    pub dwv: f64,

    /// Lower bound for the first line of each quad.
    #[arg(long, requires = "wv_max", conflicts_with = "wv_cen")]
    pub wv_min: Option<f64>,

    /// Upper bound for the first line of each quad.
    #[arg(long, requires = "wv_min")]
    pub wv_max: Option<f64>,

    /// Central wavelength guess.
    #[arg(long, requires = "npix")]
    pub wv_cen: Option<f64>,

    /// Spectrum length in pixels (with --wv-cen).
    #[arg(long)]
    pub npix: Option<f64>,

    /// Matching tolerance in pixels.
    #[arg(long, default_value_t = 2.0)]
    pub tol: f64,

    /// Fractional uncertainty of the dispersion guess.
    #[arg(long, default_value_t = 0.2)]
    pub dwv_uncertainty: f64,

    /// Centroids a quad may step over.
    #[arg(long, default_value_t = 0)]
    pub max_skip: usize,

    /// Output directory for reports.
    #[arg(long)]
    pub out: Option<PathBuf>,
}

#[derive(Debug, Clone, Args)]
pub struct ListsArgs {
    #[command(flatten)]
    pub lists: ListSelection,

    /// Write the merged list as a fixed-width table.
    #[arg(long)]
    pub write: Option<PathBuf>,
}

impl MatchArgs {
    pub fn to_config(&self) -> Result<MatchConfig, AppError> {
        let start_window = match (self.wv_min, self.wv_max, self.wv_cen, self.npix) {
            (Some(lo), Some(hi), None, _) => {
                if !(lo < hi) {
                    return Err(AppError::Usage(format!(
                        "--wv-min ({lo}) must be below --wv-max ({hi})"
                    )));
                }
                StartWindow::Range([lo, hi])
            }
            (None, None, Some(wv_cen), Some(npix)) => StartWindow::Central { wv_cen, npix },
            _ => {
                return Err(AppError::Usage(
                    "give either --wv-min/--wv-max or --wv-cen/--npix".to_string(),
                ));
            }
        };
        if self.max_skip > MAX_SKIP_LIMIT {
            return Err(AppError::Usage(format!(
                "--max-skip ({}) must be at most {MAX_SKIP_LIMIT}",
                self.max_skip
            )));
        }

        Ok(MatchConfig {
            data: DataPaths::new(&self.lists.data_dir),
            request: self.lists.request(),
            centroids: self.centroids.clone(),
            search: SearchParams {
                dwv_guess: self.dwv,
                start_window,
                quad: QuadParams {
                    tol: self.tol,
                    dwv_uncertainty: self.dwv_uncertainty,
                },
                max_skip: self.max_skip,
            },
            out_dir: self.out.clone(),
        })
    }
}

#[cfg(test)]
#[path = "../tests/src_inline/cli.rs"]
mod tests;
