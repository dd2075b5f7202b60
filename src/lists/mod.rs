use std::collections::BTreeSet;
use std::path::PathBuf;

use serde::Serialize;
use tracing::warn;

pub mod defs;
pub mod fixed_width;
pub mod load;
pub mod paths;
pub mod sources;
pub mod write;

pub use paths::DataPaths;

/// Wavelengths closer than this for the same ion are one line.
pub const DUPLICATE_WAVE_TOL: f64 = 1e-4;

#[derive(Debug, thiserror::Error)]
pub enum ListError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("line list {ion} is not available: {}", .path.display())]
    MissingList { ion: String, path: PathBuf },
    #[error("missing column {column} in {}", .path.display())]
    MissingColumn { column: String, path: PathBuf },
    #[error("parse error in {} line {line}: {msg}", .path.display())]
    Parse {
        path: PathBuf,
        line: usize,
        msg: String,
    },
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// One reference arc line with its provenance.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArcLine {
    pub ion: String,
    /// Vacuum wavelength in Angstroms.
    pub wave: f64,
    /// 1 when the wavelength is a NIST value.
    pub nist: i32,
    /// Bit flags of instruments the line was seen with (see `defs`).
    pub instr: u32,
    pub amplitude: f64,
    pub source: String,
    /// Candidate ion flags, only set for unidentified lines.
    pub line_flag: Option<u32>,
}

/// Reference lines sorted by wavelength, without duplicates.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LineList {
    lines: Vec<ArcLine>,
}

impl LineList {
    pub fn from_lines(mut lines: Vec<ArcLine>) -> Self {
        lines.sort_by(|a, b| a.wave.total_cmp(&b.wave));
        let before = lines.len();
        let mut kept: Vec<ArcLine> = Vec::with_capacity(before);
        for line in lines {
            let duplicate = kept
                .iter()
                .rev()
                .take_while(|k| line.wave - k.wave < DUPLICATE_WAVE_TOL)
                .any(|k| k.ion == line.ion);
            if !duplicate {
                kept.push(line);
            }
        }
        if kept.len() < before {
            warn!(dropped = before - kept.len(), "dropped duplicate reference lines");
        }
        Self { lines: kept }
    }

    pub fn lines(&self) -> &[ArcLine] {
        &self.lines
    }

    pub fn get(&self, idx: usize) -> Option<&ArcLine> {
        self.lines.get(idx)
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn waves(&self) -> Vec<f64> {
        self.lines.iter().map(|l| l.wave).collect()
    }

    /// Lines with `lo <= wave <= hi`.
    pub fn window(&self, lo: f64, hi: f64) -> LineList {
        let first = self.lines.partition_point(|l| l.wave < lo);
        let last = self.lines.partition_point(|l| l.wave <= hi);
        LineList {
            lines: self.lines[first..last.max(first)].to_vec(),
        }
    }

    pub fn ions(&self) -> BTreeSet<&str> {
        self.lines.iter().map(|l| l.ion.as_str()).collect()
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/lists/tests.rs"]
mod tests;
