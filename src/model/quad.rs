use serde::Serialize;

use crate::patterns::PatternError;

/// Four observed pixel centroids, strictly increasing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObservedQuad {
    pixels: [f64; 4],
}

impl ObservedQuad {
    pub fn new(pixels: &[f64]) -> Result<Self, PatternError> {
        let pixels: [f64; 4] = pixels.try_into().map_err(|_| {
            PatternError::InvalidInput(format!(
                "quad must have exactly 4 pixel positions, got {}",
                pixels.len()
            ))
        })?;
        if pixels.iter().any(|p| !p.is_finite()) {
            return Err(PatternError::InvalidInput(
                "quad pixel positions must be finite".to_string(),
            ));
        }
        if pixels.windows(2).any(|w| w[1] <= w[0]) {
            return Err(PatternError::InvalidInput(format!(
                "quad pixel positions must be strictly increasing: {:?}",
                pixels
            )));
        }
        Ok(Self { pixels })
    }

    pub fn pixels(&self) -> &[f64; 4] {
        &self.pixels
    }

    /// Pixel distance between the outer two features.
    pub fn span(&self) -> f64 {
        self.pixels[3] - self.pixels[0]
    }

    /// Interior positions normalized to [0, 1] over the span.
    pub fn normalized_interior(&self) -> [f64; 2] {
        let span = self.span();
        [
            (self.pixels[1] - self.pixels[0]) / span,
            (self.pixels[2] - self.pixels[0]) / span,
        ]
    }
}

/// Indices into a reference line list explaining one observed quad.
///
/// `i0` and `i1` are the closest interior lines for the two interior pixels,
/// picked independently, so they may coincide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct QuadMatch {
    pub start: usize,
    pub i0: usize,
    pub i1: usize,
    pub end: usize,
}

impl QuadMatch {
    pub fn indices(&self) -> [usize; 4] {
        [self.start, self.i0, self.i1, self.end]
    }
}
