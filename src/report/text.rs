use crate::report::{Identification, SummaryData, format_f64_4};

pub fn render_report_text(data: &SummaryData, ids: &[Identification]) -> String {
    let mut out = String::new();

    out.push_str("Arc Line Identification Report\n");
    out.push_str("==============================\n\n");

    out.push_str("1. Inputs\n");
    out.push_str(&format!("Ions: {}\n", data.ions.join(", ")));
    out.push_str(&format!("Reference lines: {}\n", data.n_reference_lines));
    out.push_str(&format!("Observed centroids: {}\n\n", data.n_centroids));

    out.push_str("2. Search\n");
    out.push_str(&format!(
        "Dispersion guess: {} +/- {}%\n",
        format_f64_4(data.settings.dwv_guess),
        format_f64_4(data.settings.dwv_uncertainty * 100.0)
    ));
    out.push_str(&format!("Start window: {}\n", data.settings.start_window));
    out.push_str(&format!(
        "Tolerance: {} px, max skip: {}\n",
        format_f64_4(data.settings.tol),
        data.settings.max_skip
    ));
    out.push_str(&format!(
        "Quads tried: {} (skipped {}), matches: {}\n\n",
        data.n_quads, data.n_skipped, data.n_matches
    ));

    out.push_str("3. Scores\n");
    for lc in &data.labels {
        out.push_str(&format!(
            "{:<5} {:>5}  {}\n",
            lc.label.as_str(),
            lc.count,
            format_f64_4(lc.fraction)
        ));
    }
    out.push_str(&format!(
        "Confident (Perf/Good/OK): {}\n\n",
        format_f64_4(data.confident_fraction)
    ));

    out.push_str("4. Identifications\n");
    if ids.is_empty() {
        out.push_str("(no centroids)\n");
    }
    for id in ids {
        let wave = id.wave.map(format_f64_4).unwrap_or_else(|| "-".to_string());
        let ion = id.ion.as_deref().unwrap_or("-");
        out.push_str(&format!(
            "{:>10}  {:<5} {:>3}  {:>10}  {}\n",
            format_f64_4(id.pixel),
            id.label.as_str(),
            id.nmatch,
            wave,
            ion
        ));
    }

    out
}
