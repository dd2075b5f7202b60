use tracing::info;

use crate::patterns::PatternError;
use crate::patterns::search::{SearchOutcome, SearchParams, search_quads};
use crate::pipeline::stage1_lists::Stage1Output;

pub fn run_stage2(
    pixels: &[f64],
    stage1: &Stage1Output,
    params: &SearchParams,
) -> Result<SearchOutcome, PatternError> {
    let outcome = search_quads(pixels, &stage1.waves, params)?;
    info!(
        quads = outcome.n_quads,
        matches = outcome.n_matches,
        skipped = outcome.n_skipped,
        "quad search complete"
    );
    Ok(outcome)
}
