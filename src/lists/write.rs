use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::lists::defs::{ION_STR_LEN, SOURCE_STR_LEN};
use crate::lists::fixed_width::write_table;
use crate::lists::{ArcLine, ListError};

/// Write lines as a fixed-width table headed by the creation date.
pub fn write_line_list(lines: &[ArcLine], path: &Path) -> Result<(), ListError> {
    for line in lines {
        if line.ion.len() > ION_STR_LEN || line.source.len() > SOURCE_STR_LEN {
            return Err(ListError::InvalidInput(format!(
                "ion/source too long for table: {} / {}",
                line.ion, line.source
            )));
        }
    }

    let with_flag = lines.iter().any(|l| l.line_flag.is_some());
    let mut columns = vec!["ion", "wave", "NIST", "Instr", "amplitude", "Source"];
    if with_flag {
        columns.push("line_flag");
    }
    let rows: Vec<Vec<String>> = lines
        .iter()
        .map(|l| {
            let mut row = vec![
                l.ion.clone(),
                format!("{:10.4}", l.wave),
                l.nist.to_string(),
                l.instr.to_string(),
                format_amplitude(l.amplitude),
                l.source.clone(),
            ];
            if with_flag {
                row.push(l.line_flag.map(|f| f.to_string()).unwrap_or_default());
            }
            row
        })
        .collect();

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut out = BufWriter::new(File::create(path)?);
    writeln!(
        out,
        "# Creation Date: {}",
        chrono::Local::now().format("%Y-%b-%d")
    )?;
    write_table(&mut out, &columns, &rows)?;
    out.flush()?;
    Ok(())
}

fn format_amplitude(v: f64) -> String {
    if v.fract() == 0.0 && v.abs() < 1e15 {
        format!("{}", v as i64)
    } else {
        v.to_string()
    }
}
