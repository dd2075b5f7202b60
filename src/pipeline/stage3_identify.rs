use crate::patterns::search::SearchOutcome;
use crate::pipeline::stage1_lists::Stage1Output;
use crate::report::Identification;

/// Attach the modal reference line to every centroid.
pub fn run_stage3(pixels: &[f64], stage1: &Stage1Output, outcome: &SearchOutcome) -> Vec<Identification> {
    outcome
        .accumulator
        .iter()
        .zip(outcome.labels.iter().zip(&outcome.best))
        .map(|((&feature, record), (&label, &best))| {
            let line = best.and_then(|idx| stage1.list.get(idx));
            Identification {
                feature,
                pixel: pixels[feature],
                label,
                nmatch: record.matches.len(),
                line_index: best,
                wave: line.map(|l| l.wave),
                ion: line.map(|l| l.ion.clone()),
            }
        })
        .collect()
}
