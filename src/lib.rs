//! `arclines`: reference arc line lists and quad pattern identification.
//!
//! The core lives in [`patterns`]: [`patterns::match_quad_to_list`] finds
//! reference-line quads reproducing the spacing of four observed centroids,
//! and [`patterns::score_quad_matches`] grades the evidence collected per
//! centroid. [`lists`] and [`input`] read the reference data and observed
//! centroids; [`pipeline`] strings everything together for the CLI.

pub mod cli;
pub mod error;
pub mod input;
pub mod lists;
pub mod logging;
pub mod model;
pub mod patterns;
pub mod pipeline;
pub mod report;
