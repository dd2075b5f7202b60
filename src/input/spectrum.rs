use std::io::Read;
use std::path::Path;

use serde_json::Value;
use tracing::info;

use crate::input::{InputError, data_extension, open_maybe_gz, read_first_column};

/// Load a 1-D arc spectrum (intensity per pixel).
///
/// Supported: single-column text tables (`.ascii`, `.txt`, `.dat`) and JSON
/// with either a top-level `spec` array or an `arcs` array whose entry
/// `index` holds `spec`. Any of these may be gzipped. FITS and HDF5 are
/// rejected as unsupported.
pub fn load_spectrum(path: &Path, index: usize) -> Result<Vec<f64>, InputError> {
    let ext = data_extension(path);
    match ext.as_str() {
        "ascii" | "txt" | "dat" => read_first_column(path),
        "json" => load_json_spectrum(path, index),
        other => Err(InputError::Unsupported(format!(
            "spectrum format .{other} ({})",
            path.display()
        ))),
    }
}

fn load_json_spectrum(path: &Path, index: usize) -> Result<Vec<f64>, InputError> {
    let mut text = String::new();
    open_maybe_gz(path)?.read_to_string(&mut text)?;
    let root: Value = serde_json::from_str(&text)?;

    let spec = if let Some(spec) = root.get("spec") {
        spec
    } else if let Some(arcs) = root.get("arcs") {
        info!(index, "taking arc from multi-arc file");
        arcs.get(index)
            .and_then(|arc| arc.get("spec"))
            .ok_or_else(|| InputError::InvalidInput(format!("no arc {index} in {}", path.display())))?
    } else {
        return Err(InputError::InvalidInput(format!(
            "spec not in {}",
            path.display()
        )));
    };

    let values = spec.as_array().ok_or_else(|| {
        InputError::InvalidInput(format!("spec in {} is not an array", path.display()))
    })?;
    values
        .iter()
        .enumerate()
        .map(|(i, v)| {
            v.as_f64().ok_or_else(|| {
                InputError::InvalidInput(format!("spec[{i}] in {} is not a number", path.display()))
            })
        })
        .collect()
}
