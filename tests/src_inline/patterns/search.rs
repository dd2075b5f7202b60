use super::*;

const WAVES: [f64; 8] = [5000.0, 5040.0, 5060.0, 5120.0, 5150.0, 5210.0, 5230.0, 5300.0];

fn pixels_for(waves: &[f64]) -> Vec<f64> {
    waves.iter().map(|w| w - 4900.0).collect()
}

fn range_params() -> SearchParams {
    SearchParams {
        dwv_guess: 1.0,
        start_window: StartWindow::Range([4950.0, 5350.0]),
        quad: QuadParams::default(),
        max_skip: 0,
    }
}

#[test]
fn test_form_quads_consecutive() {
    assert_eq!(form_quads(5, 0), vec![[0, 1, 2, 3], [1, 2, 3, 4]]);
    assert!(form_quads(3, 0).is_empty());
    assert!(form_quads(0, 2).is_empty());
}

#[test]
fn test_form_quads_with_skip() {
    assert_eq!(
        form_quads(5, 1),
        vec![
            [0, 1, 2, 3],
            [0, 1, 2, 4],
            [0, 1, 3, 4],
            [0, 2, 3, 4],
            [1, 2, 3, 4]
        ]
    );
}

#[test]
fn test_form_quads_skip_clamped_to_centroids() {
    assert_eq!(form_quads(5, usize::MAX), form_quads(5, 1));
    assert_eq!(form_quads(6, 1000).len(), form_quads(6, 2).len());
    assert!(form_quads(3, usize::MAX).is_empty());
}

#[test]
fn test_search_huge_max_skip() {
    let pixels = pixels_for(&WAVES);
    let params = SearchParams {
        max_skip: usize::MAX,
        ..range_params()
    };
    let outcome = search_quads(&pixels, &WAVES, &params).unwrap();
    let unbounded = SearchParams {
        max_skip: WAVES.len(),
        ..range_params()
    };
    let reference = search_quads(&pixels, &WAVES, &unbounded).unwrap();
    assert_eq!(outcome.n_quads, reference.n_quads);
    assert_eq!(outcome.labels, reference.labels);
    assert_eq!(outcome.labels.len(), WAVES.len());
}

#[test]
fn test_start_window_central() {
    let window = StartWindow::Central {
        wv_cen: 5000.0,
        npix: 1000.0,
    };
    assert_eq!(start_window(&window, 500.0, 1.0, 0.2), [5000.0, 5000.0]);
    let [lo, hi] = start_window(&window, 0.0, 1.0, 0.2);
    assert!((lo - 4400.0).abs() < 1e-9);
    assert!((hi - 4600.0).abs() < 1e-9);
    let [lo, hi] = start_window(&window, 1000.0, 1.0, 0.2);
    assert!((lo - 5400.0).abs() < 1e-9);
    assert!((hi - 5600.0).abs() < 1e-9);
}

#[test]
fn test_start_window_range_passthrough() {
    let window = StartWindow::Range([1.0, 2.0]);
    assert_eq!(start_window(&window, 123.0, 5.0, 0.5), [1.0, 2.0]);
}

#[test]
fn test_search_recovers_identities() {
    let pixels = pixels_for(&WAVES);
    let out = search_quads(&pixels, &WAVES, &range_params()).unwrap();

    assert_eq!(out.n_quads, 5);
    assert_eq!(out.n_matches, 5);
    assert_eq!(out.n_skipped, 0);
    assert_eq!(out.accumulator.keys(), &[0, 1, 2, 3, 4, 5, 6, 7]);
    let expected_best: Vec<Option<usize>> = (0..8).map(Some).collect();
    assert_eq!(out.best, expected_best);
    assert_eq!(
        out.labels,
        vec![
            ScoreLabel::Amb,
            ScoreLabel::Risk,
            ScoreLabel::Good,
            ScoreLabel::Perf,
            ScoreLabel::Perf,
            ScoreLabel::Good,
            ScoreLabel::Risk,
            ScoreLabel::Amb
        ]
    );
}

#[test]
fn test_search_without_reference_lines() {
    let pixels = pixels_for(&WAVES);
    let out = search_quads(&pixels, &[], &range_params()).unwrap();
    assert_eq!(out.n_matches, 0);
    assert!(out.labels.iter().all(|l| *l == ScoreLabel::None));
    assert!(out.best.iter().all(Option::is_none));
}

#[test]
fn test_search_skips_degenerate_quads() {
    let pixels = vec![100.0, 100.0, 140.0, 160.0, 220.0];
    let out = search_quads(&pixels, &WAVES, &range_params()).unwrap();
    assert_eq!(out.n_quads, 2);
    assert_eq!(out.n_skipped, 1);
    assert_eq!(out.labels.len(), 5);
}

#[test]
fn test_search_rejects_unsorted_centroids() {
    let err = search_quads(&[5.0, 1.0, 9.0, 12.0], &WAVES, &range_params()).unwrap_err();
    assert!(matches!(err, PatternError::InvalidInput(_)));
}

#[test]
fn test_search_rejects_bad_dispersion() {
    let mut params = range_params();
    params.dwv_guess = 0.0;
    assert!(search_quads(&pixels_for(&WAVES), &WAVES, &params).is_err());
}

#[test]
fn test_modal_index_ties_prefer_first_seen() {
    assert_eq!(modal_index(&[]), None);
    assert_eq!(modal_index(&[4, 2, 2, 4, 9]), Some(4));
    assert_eq!(modal_index(&[9, 1, 1]), Some(1));
}

#[test]
fn test_end_to_end_risk() {
    let list = vec![4900.0, 5000.0, 5040.0, 5060.0, 5120.0, 5200.0];
    let matches = match_quad_to_list(
        &[100.0, 140.0, 160.0, 220.0],
        &list,
        [4990.0, 5010.0],
        1.0,
        &QuadParams::default(),
    )
    .unwrap();
    assert_eq!(matches.len(), 1);

    let mut acc = MatchAccumulator::new();
    acc.record("line_140", matches[0].i0);
    acc.record("line_140", matches[0].i0);
    assert_eq!(score_quad_matches(&acc), vec![ScoreLabel::Risk]);
}
