use std::path::Path;

use tracing::{debug, info, warn};

use crate::lists::defs::{UNKNOWN_ION, has_flag, instrument_flag, ion_flag};
use crate::lists::fixed_width::Table;
use crate::lists::{ArcLine, DataPaths, LineList, ListError};

/// Which ion lists to load.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineListRequest {
    pub ions: Vec<String>,
    /// Load every ion list found in the data directory; `ions` is ignored.
    pub all: bool,
    /// Ignore ions without a list instead of failing.
    pub skip: bool,
    /// Append unidentified lines flagged as possibly belonging to the ions.
    pub unknown: bool,
}

impl LineListRequest {
    pub fn ions(ions: &[&str]) -> Self {
        Self {
            ions: ions.iter().map(|s| s.to_string()).collect(),
            ..Self::default()
        }
    }
}

/// Read one `<ion>_lines.dat` style table.
pub fn load_line_list(path: &Path) -> Result<Vec<ArcLine>, ListError> {
    let table = Table::read(path)?;
    let c_ion = table.require_column("ion")?;
    let c_wave = table.require_column("wave")?;
    let c_nist = table.column("NIST");
    let c_instr = table.column("Instr");
    let c_amp = table.column("amplitude");
    let c_source = table.column("Source");
    let c_flag = table.column("line_flag");

    let mut lines = Vec::with_capacity(table.rows.len());
    for row in &table.rows {
        lines.push(ArcLine {
            ion: row.cells[c_ion].clone(),
            wave: table.parse_cell(row, c_wave)?,
            nist: table.parse_or(row, c_nist, 0)?,
            instr: table.parse_or(row, c_instr, 0)?,
            amplitude: table.parse_or(row, c_amp, 0.0)?,
            source: c_source
                .map(|c| row.cells[c].clone())
                .unwrap_or_default(),
            line_flag: match c_flag {
                Some(c) if !row.cells[c].is_empty() => Some(table.parse_cell(row, c)?),
                _ => None,
            },
        });
    }
    debug!(path = %path.display(), n = lines.len(), "loaded line list");
    Ok(lines)
}

/// Ions with a `<ion>_lines.dat` file, excluding the unidentified list.
pub fn available_ions(paths: &DataPaths) -> Result<Vec<String>, ListError> {
    let mut ions = Vec::new();
    for entry in std::fs::read_dir(paths.lists_dir())? {
        let name = entry?.file_name();
        let name = name.to_string_lossy();
        if let Some(ion) = name.strip_suffix("_lines.dat") {
            if !ion.is_empty() && ion != UNKNOWN_ION {
                ions.push(ion.to_string());
            }
        }
    }
    ions.sort();
    Ok(ions)
}

/// Load, merge, sort and deduplicate the requested ion lists.
///
/// An ion without a list fails with `MissingList` unless `skip` is set.
/// Nothing found at all yields an empty list, without unknown lines.
pub fn load_line_lists(paths: &DataPaths, request: &LineListRequest) -> Result<LineList, ListError> {
    let ions = if request.all {
        available_ions(paths)?
    } else {
        request.ions.clone()
    };

    let mut lines = Vec::new();
    let mut loaded: Vec<&str> = Vec::new();
    for ion in &ions {
        let path = paths.line_file(ion);
        if !path.is_file() {
            if request.skip {
                warn!(ion = %ion, path = %path.display(), "line list missing; skipping");
                continue;
            }
            return Err(ListError::MissingList {
                ion: ion.clone(),
                path,
            });
        }
        lines.extend(load_line_list(&path)?);
        loaded.push(ion);
    }
    if loaded.is_empty() {
        return Ok(LineList::default());
    }

    // Unknown lines are always cut on the loaded ions, `all` included.
    if request.unknown {
        let unknown = load_unknown_list(paths, &loaded, false)?;
        info!(n = unknown.len(), "appending unidentified lines");
        lines.extend(unknown);
    }

    Ok(LineList::from_lines(lines))
}

/// Unidentified lines whose `line_flag` marks any of `ions`; `all` keeps
/// every line.
pub fn load_unknown_list(
    paths: &DataPaths,
    ions: &[&str],
    all: bool,
) -> Result<Vec<ArcLine>, ListError> {
    let path = paths.unknown_file();
    if !path.is_file() {
        return Err(ListError::MissingList {
            ion: UNKNOWN_ION.to_string(),
            path,
        });
    }
    let lines = load_line_list(&path)?;
    if all {
        return Ok(lines);
    }

    let mut flags = Vec::with_capacity(ions.len());
    for ion in ions {
        let flag = ion_flag(ion)
            .ok_or_else(|| ListError::InvalidInput(format!("no line flag for ion {ion}")))?;
        flags.push(flag);
    }
    Ok(lines
        .into_iter()
        .filter(|l| {
            l.line_flag
                .is_some_and(|lf| flags.iter().any(|&f| has_flag(lf, f)))
        })
        .collect())
}

/// Parse a NIST vacuum wavelength table for `ion`.
///
/// Rows without an observed wavelength are dropped, repeated wavelengths keep
/// their first row, and the relative intensity becomes the amplitude.
pub fn load_nist(paths: &DataPaths, ion: &str) -> Result<Vec<ArcLine>, ListError> {
    let path = paths.nist_file(ion);
    if !path.is_file() {
        return Err(ListError::MissingList {
            ion: ion.to_string(),
            path,
        });
    }
    let table = Table::read(&path)?;
    let c_obs = table.require_column("Observed")?;
    let c_rel = table.column("Rel.");

    let mut lines: Vec<ArcLine> = Vec::new();
    for row in &table.rows {
        let wave: f64 = table.parse_or(row, Some(c_obs), 0.0)?;
        if !(wave > 0.0) {
            continue;
        }
        let amplitude = c_rel.map_or(0.0, |c| parse_rel_intensity(&row.cells[c]));
        lines.push(ArcLine {
            ion: ion.to_string(),
            wave,
            nist: 1,
            instr: 0,
            amplitude,
            source: "NIST".to_string(),
            line_flag: None,
        });
    }
    lines.sort_by(|a, b| a.wave.total_cmp(&b.wave));
    lines.dedup_by(|b, a| a.wave == b.wave);
    Ok(lines)
}

/// NIST relative intensities sometimes carry a trailing qualifier (`500h`).
pub fn parse_rel_intensity(raw: &str) -> f64 {
    let raw = raw.trim();
    if let Ok(v) = raw.parse::<f64>() {
        return v;
    }
    let mut chars = raw.chars();
    chars.next_back();
    chars.as_str().parse::<f64>().unwrap_or(0.0)
}

/// Lines identified by hand, with instrument names mapped to flags.
pub fn load_by_hand(paths: &DataPaths) -> Result<Vec<ArcLine>, ListError> {
    let path = paths.by_hand_file();
    let table = Table::read(&path)?;
    let c_ion = table.require_column("ion")?;
    let c_wave = table.require_column("wave")?;
    let c_amp = table.column("amplitude");
    let c_instr = table.require_column("sInstr")?;
    let c_source = table.require_column("sSource")?;

    let mut lines = Vec::with_capacity(table.rows.len());
    for row in &table.rows {
        let instr_name = row.cells[c_instr].as_str();
        let instr = instrument_flag(instr_name).ok_or_else(|| {
            ListError::InvalidInput(format!(
                "unknown instrument {instr_name} in {} line {}",
                path.display(),
                row.line_no
            ))
        })?;
        lines.push(ArcLine {
            ion: row.cells[c_ion].clone(),
            wave: table.parse_cell(row, c_wave)?,
            nist: 1,
            instr,
            amplitude: table.parse_or(row, c_amp, 0.0)?,
            source: row.cells[c_source].clone(),
            line_flag: None,
        });
    }
    Ok(lines)
}
