use std::path::Path;

use tracing::warn;

use crate::input::{InputError, read_first_column};

/// Observed line centroids in pixels, returned sorted ascending.
pub fn load_centroids(path: &Path) -> Result<Vec<f64>, InputError> {
    let mut pixels = read_first_column(path)?;
    if let Some(bad) = pixels.iter().find(|p| !p.is_finite()) {
        return Err(InputError::InvalidInput(format!(
            "non-finite centroid {bad} in {}",
            path.display()
        )));
    }
    if pixels.windows(2).any(|w| w[1] < w[0]) {
        warn!(path = %path.display(), "centroids were not sorted; sorting");
        pixels.sort_by(f64::total_cmp);
    }
    if let Some(w) = pixels.windows(2).find(|w| w[1] == w[0]) {
        return Err(InputError::InvalidInput(format!(
            "duplicate centroid {} in {}",
            w[0],
            path.display()
        )));
    }
    Ok(pixels)
}
