use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use flate2::read::MultiGzDecoder;

pub mod centroids;
pub mod spectrum;

#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("parse error in {} line {line}: {msg}", .path.display())]
    Parse {
        path: PathBuf,
        line: usize,
        msg: String,
    },
    #[error("unsupported input: {0}")]
    Unsupported(String),
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Open a text file, transparently decompressing `.gz`.
pub fn open_maybe_gz(path: &Path) -> std::io::Result<Box<dyn BufRead>> {
    let file = File::open(path)?;
    if path.extension().is_some_and(|ext| ext == "gz") {
        Ok(Box::new(BufReader::new(MultiGzDecoder::new(file))))
    } else {
        Ok(Box::new(BufReader::new(file)))
    }
}

/// Lowercase extension, looking through a trailing `.gz`.
pub fn data_extension(path: &Path) -> String {
    let inner = if path.extension().is_some_and(|ext| ext == "gz") {
        path.file_stem().map(Path::new).unwrap_or(path)
    } else {
        path
    };
    inner
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase()
}

/// First whitespace-separated column of a numeric table.
///
/// Blank lines and `#` comments are skipped; a non-numeric first row is
/// treated as a header.
pub(crate) fn read_first_column(path: &Path) -> Result<Vec<f64>, InputError> {
    let reader = open_maybe_gz(path)?;
    let mut values = Vec::new();
    let mut seen_row = false;
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let Some(first) = trimmed.split_whitespace().next() else {
            continue;
        };
        match first.parse::<f64>() {
            Ok(v) => values.push(v),
            Err(_) if !seen_row => {}
            Err(e) => {
                return Err(InputError::Parse {
                    path: path.to_path_buf(),
                    line: idx + 1,
                    msg: format!("{first:?}: {e}"),
                });
            }
        }
        seen_row = true;
    }
    Ok(values)
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/tests.rs"]
mod tests;
