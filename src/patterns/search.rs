use std::collections::BTreeMap;

use tracing::debug;

use crate::model::score::ScoreLabel;
use crate::patterns::accumulator::MatchAccumulator;
use crate::patterns::quad_match::{QuadParams, match_quad_to_list};
use crate::patterns::score::score_quad_matches;
use crate::patterns::PatternError;

/// Where the first wavelength of each quad may fall.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StartWindow {
    /// Same open interval for every quad.
    Range([f64; 2]),
    /// Derived per quad from a central wavelength at pixel `npix / 2`.
    Central { wv_cen: f64, npix: f64 },
}

#[derive(Debug, Clone, PartialEq)]
pub struct SearchParams {
    pub dwv_guess: f64,
    pub start_window: StartWindow,
    pub quad: QuadParams,
    /// Extra centroids a quad may step over (0 = consecutive only).
    pub max_skip: usize,
}

#[derive(Debug, Clone)]
pub struct SearchOutcome {
    /// Keyed by centroid index; every centroid is present.
    pub accumulator: MatchAccumulator<usize>,
    pub labels: Vec<ScoreLabel>,
    /// Most frequently matched reference index per centroid.
    pub best: Vec<Option<usize>>,
    pub n_quads: usize,
    pub n_matches: usize,
    pub n_skipped: usize,
}

/// Centroid index quads drawn from windows of `4..=4 + max_skip` lines; the
/// window ends are always part of the quad. Windows never exceed the number
/// of centroids, whatever `max_skip` is.
pub fn form_quads(n_lines: usize, max_skip: usize) -> Vec<[usize; 4]> {
    let max_width = 3usize
        .saturating_add(max_skip)
        .min(n_lines.saturating_sub(1));
    let mut quads = Vec::new();
    for a in 0..n_lines {
        for width in 3..=max_width {
            let b = a + width;
            if b >= n_lines {
                break;
            }
            for i in a + 1..b {
                for j in i + 1..b {
                    quads.push([a, i, j, b]);
                }
            }
        }
    }
    quads
}

pub fn start_window(window: &StartWindow, p0: f64, dwv_guess: f64, uncertainty: f64) -> [f64; 2] {
    match *window {
        StartWindow::Range(range) => range,
        StartWindow::Central { wv_cen, npix } => {
            let offset = (p0 - npix / 2.0) * dwv_guess;
            let a = wv_cen + offset * (1.0 - uncertainty);
            let b = wv_cen + offset * (1.0 + uncertainty);
            if a <= b { [a, b] } else { [b, a] }
        }
    }
}

/// Match every quad of `pixels` against `line_list` and grade each centroid.
///
/// `pixels` must be sorted ascending. Quads the matcher rejects as malformed
/// (e.g. coincident centroids) are skipped and counted.
pub fn search_quads(
    pixels: &[f64],
    line_list: &[f64],
    params: &SearchParams,
) -> Result<SearchOutcome, PatternError> {
    if !(params.dwv_guess.is_finite() && params.dwv_guess > 0.0) {
        return Err(PatternError::InvalidInput(format!(
            "dispersion guess must be positive, got {}",
            params.dwv_guess
        )));
    }
    params.quad.validate()?;
    if pixels.windows(2).any(|w| !(w[0] <= w[1])) {
        return Err(PatternError::InvalidInput(
            "centroids must be sorted ascending".to_string(),
        ));
    }

    let mut accumulator = MatchAccumulator::new();
    for idx in 0..pixels.len() {
        accumulator.ensure(idx);
    }

    let quads = form_quads(pixels.len(), params.max_skip);
    let mut n_matches = 0usize;
    let mut n_skipped = 0usize;
    for &quad in &quads {
        let spec_lines = quad.map(|i| pixels[i]);
        let wv_guess = start_window(
            &params.start_window,
            spec_lines[0],
            params.dwv_guess,
            params.quad.dwv_uncertainty,
        );
        let matches = match match_quad_to_list(
            &spec_lines,
            line_list,
            wv_guess,
            params.dwv_guess,
            &params.quad,
        ) {
            Ok(matches) => matches,
            Err(err) => {
                debug!(?quad, %err, "skipping quad");
                n_skipped += 1;
                continue;
            }
        };
        n_matches += matches.len();
        for m in &matches {
            for (feature, line_index) in quad.iter().zip(m.indices()) {
                accumulator.record(*feature, line_index);
            }
        }
    }

    let labels = score_quad_matches(&accumulator);
    let best = accumulator
        .iter()
        .map(|(_, record)| modal_index(&record.matches))
        .collect();

    debug!(
        quads = quads.len(),
        matches = n_matches,
        skipped = n_skipped,
        "quad search finished"
    );

    Ok(SearchOutcome {
        accumulator,
        labels,
        best,
        n_quads: quads.len(),
        n_matches,
        n_skipped,
    })
}

/// Most common value; ties go to the value seen first.
pub fn modal_index(matches: &[usize]) -> Option<usize> {
    let mut counts: BTreeMap<usize, (usize, usize)> = BTreeMap::new();
    for (pos, &idx) in matches.iter().enumerate() {
        let entry = counts.entry(idx).or_insert((0, pos));
        entry.0 += 1;
    }
    counts
        .into_iter()
        .max_by(|(_, (ca, fa)), (_, (cb, fb))| ca.cmp(cb).then(fb.cmp(fa)))
        .map(|(idx, _)| idx)
}

#[cfg(test)]
#[path = "../../tests/src_inline/patterns/search.rs"]
mod tests;
