use crate::model::quad::{ObservedQuad, QuadMatch};
use crate::patterns::PatternError;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadParams {
    /// Matching tolerance in pixels.
    pub tol: f64,
    /// Fractional uncertainty on the dispersion guess.
    pub dwv_uncertainty: f64,
}

impl Default for QuadParams {
    fn default() -> Self {
        Self {
            tol: 2.0,
            dwv_uncertainty: 0.2,
        }
    }
}

impl QuadParams {
    pub fn validate(&self) -> Result<(), PatternError> {
        if !(self.tol.is_finite() && self.tol > 0.0) {
            return Err(PatternError::InvalidInput(format!(
                "tolerance must be positive, got {}",
                self.tol
            )));
        }
        if !(self.dwv_uncertainty.is_finite()
            && self.dwv_uncertainty >= 0.0
            && self.dwv_uncertainty <= 1.0)
        {
            return Err(PatternError::InvalidInput(format!(
                "dispersion uncertainty must lie in [0, 1], got {}",
                self.dwv_uncertainty
            )));
        }
        Ok(())
    }
}

/// Find every run of reference wavelengths whose relative spacing reproduces
/// the observed quad.
///
/// `spec_lines` are four increasing pixel positions, `line_list` ascending
/// wavelengths, `wv_guess` the open interval the first line must fall in and
/// `dwv_guess` the expected wavelength per pixel. Results are ordered by
/// start index, then end index.
pub fn match_quad_to_list(
    spec_lines: &[f64],
    line_list: &[f64],
    wv_guess: [f64; 2],
    dwv_guess: f64,
    params: &QuadParams,
) -> Result<Vec<QuadMatch>, PatternError> {
    let quad = ObservedQuad::new(spec_lines)?;
    if !(dwv_guess.is_finite() && dwv_guess > 0.0) {
        return Err(PatternError::InvalidInput(format!(
            "dispersion guess must be positive, got {dwv_guess}"
        )));
    }
    params.validate()?;
    if line_list.windows(2).any(|w| !(w[0] <= w[1])) {
        return Err(PatternError::InvalidInput(
            "reference line list must be sorted ascending".to_string(),
        ));
    }

    let npix = quad.span();
    let spec_values = quad.normalized_interior();
    let ftol = params.tol / npix;
    let reach = npix * dwv_guess;

    let starts = open_range(line_list, wv_guess[0], wv_guess[1]);
    let mut matches = Vec::new();
    for start in starts {
        let w_start = line_list[start];
        let ends = open_range(
            line_list,
            w_start + reach * (1.0 - params.dwv_uncertainty),
            w_start + reach * (1.0 + params.dwv_uncertainty),
        );
        for end in ends {
            if end <= start {
                continue;
            }
            if let Some((i0, i1)) = match_interior(line_list, start, end, &spec_values, ftol) {
                matches.push(QuadMatch { start, i0, i1, end });
            }
        }
    }
    Ok(matches)
}

/// Indices `i` with `lo < line_list[i] < hi` on a sorted list.
fn open_range(line_list: &[f64], lo: f64, hi: f64) -> std::ops::Range<usize> {
    let first = line_list.partition_point(|&w| w <= lo);
    let last = line_list.partition_point(|&w| w < hi);
    first..last.max(first)
}

fn match_interior(
    line_list: &[f64],
    start: usize,
    end: usize,
    spec_values: &[f64; 2],
    ftol: f64,
) -> Option<(usize, usize)> {
    let w_start = line_list[start];
    let width = line_list[end] - w_start;
    if !(width > 0.0) {
        return None;
    }

    // (index, |diff|) of the closest interior line per observed position.
    let mut best: [Option<(usize, f64)>; 2] = [None, None];
    for (j, &w) in line_list.iter().enumerate().take(end).skip(start + 1) {
        let value = (w - w_start) / width;
        for (k, target) in spec_values.iter().enumerate() {
            let diff = (value - target).abs();
            if best[k].is_none_or(|(_, d)| diff < d) {
                best[k] = Some((j, diff));
            }
        }
    }

    match best {
        [Some((i0, d0)), Some((i1, d1))] if d0 < ftol && d1 < ftol => Some((i0, i1)),
        _ => None,
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/patterns/quad_match.rs"]
mod tests;
