use std::collections::BTreeMap;

use crate::lists::fixed_width::Table;
use crate::lists::{DataPaths, ListError};

/// One published arc spectrum that line lists were built from.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceEntry {
    pub file: String,
    pub format: String,
    pub instr: String,
    /// Remaining columns by name.
    pub extra: BTreeMap<String, String>,
}

pub fn load_source_table(paths: &DataPaths) -> Result<Vec<SourceEntry>, ListError> {
    let table = Table::read(&paths.source_table_file())?;
    let c_file = table.require_column("File")?;
    let c_format = table.require_column("Format")?;
    let c_instr = table.require_column("Instr")?;

    Ok(table
        .rows
        .iter()
        .map(|row| {
            let extra = table
                .columns
                .iter()
                .enumerate()
                .filter(|(i, _)| ![c_file, c_format, c_instr].contains(i))
                .map(|(i, name)| (name.clone(), row.cells[i].clone()))
                .collect();
            SourceEntry {
                file: row.cells[c_file].clone(),
                format: row.cells[c_format].clone(),
                instr: row.cells[c_instr].clone(),
                extra,
            }
        })
        .collect())
}
