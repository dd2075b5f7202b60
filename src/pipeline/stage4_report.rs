use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::info;

use crate::report::json::render_summary_json;
use crate::report::text::render_report_text;
use crate::report::{Identification, ReportError, SummaryData, format_f64_4};

pub const IDENTIFICATIONS_FILE: &str = "identifications.tsv";
pub const SUMMARY_FILE: &str = "summary.json";
pub const REPORT_FILE: &str = "report.txt";

pub fn write_reports(
    summary: &SummaryData,
    ids: &[Identification],
    out_dir: &Path,
) -> Result<(), ReportError> {
    fs::create_dir_all(out_dir)?;

    write_identifications_tsv(ids, &out_dir.join(IDENTIFICATIONS_FILE))?;
    fs::write(out_dir.join(SUMMARY_FILE), render_summary_json(summary)?)?;
    fs::write(out_dir.join(REPORT_FILE), render_report_text(summary, ids))?;

    info!(out = %out_dir.display(), "reports written");
    Ok(())
}

fn write_identifications_tsv(ids: &[Identification], path: &Path) -> Result<(), ReportError> {
    let mut out = BufWriter::new(File::create(path)?);
    writeln!(out, "feature\tpixel\tscore\tnmatch\tline_index\twave\tion")?;
    for id in ids {
        writeln!(
            out,
            "{}\t{}\t{}\t{}\t{}\t{}\t{}",
            id.feature,
            format_f64_4(id.pixel),
            id.label,
            id.nmatch,
            id.line_index.map(|i| i.to_string()).unwrap_or_default(),
            id.wave.map(format_f64_4).unwrap_or_default(),
            id.ion.as_deref().unwrap_or("")
        )?;
    }
    out.flush()?;
    Ok(())
}
