use super::*;

fn synthetic_list() -> Vec<f64> {
    (0..200)
        .map(|i| 4000.0 + i as f64 * 7.3 + ((i * i) % 11) as f64 * 0.9)
        .collect()
}

#[test]
fn test_exact_pattern_found() {
    let list = vec![4900.0, 5000.0, 5040.0, 5060.0, 5120.0, 5200.0, 5300.0];
    let out = match_quad_to_list(
        &[100.0, 140.0, 160.0, 220.0],
        &list,
        [4990.0, 5010.0],
        1.0,
        &QuadParams::default(),
    )
    .unwrap();
    assert_eq!(
        out,
        vec![QuadMatch {
            start: 1,
            i0: 2,
            i1: 3,
            end: 4
        }]
    );
}

#[test]
fn test_wv_guess_excludes_everything() {
    let list = vec![4900.0, 5000.0, 5040.0, 5060.0, 5120.0];
    let out = match_quad_to_list(
        &[100.0, 140.0, 160.0, 220.0],
        &list,
        [6000.0, 7000.0],
        1.0,
        &QuadParams::default(),
    )
    .unwrap();
    assert!(out.is_empty());
}

#[test]
fn test_wv_guess_bounds_are_strict() {
    let list = vec![5000.0, 5040.0, 5060.0, 5120.0];
    let out = match_quad_to_list(
        &[100.0, 140.0, 160.0, 220.0],
        &list,
        [5000.0, 5010.0],
        1.0,
        &QuadParams::default(),
    )
    .unwrap();
    assert!(out.is_empty());
}

#[test]
fn test_empty_list_is_not_an_error() {
    let out = match_quad_to_list(
        &[100.0, 140.0, 160.0, 220.0],
        &[],
        [4000.0, 6000.0],
        1.0,
        &QuadParams::default(),
    )
    .unwrap();
    assert!(out.is_empty());
}

#[test]
fn test_end_outside_dispersion_band() {
    // Span of 120 px at 1 A/px with 20% uncertainty allows ends in (5096, 5144).
    let list = vec![5000.0, 5060.0, 5090.0, 5180.0];
    let out = match_quad_to_list(
        &[100.0, 140.0, 160.0, 220.0],
        &list,
        [4990.0, 5010.0],
        1.0,
        &QuadParams::default(),
    )
    .unwrap();
    assert!(out.is_empty());
}

#[test]
fn test_interior_indices_may_coincide() {
    let list = vec![1000.0, 1050.0, 1100.0];
    let out = match_quad_to_list(
        &[0.0, 49.0, 51.0, 100.0],
        &list,
        [990.0, 1010.0],
        1.0,
        &QuadParams::default(),
    )
    .unwrap();
    assert_eq!(
        out,
        vec![QuadMatch {
            start: 0,
            i0: 1,
            i1: 1,
            end: 2
        }]
    );
}

#[test]
fn test_closest_interior_line_wins() {
    let list = vec![1000.0, 1032.0, 1034.0, 1050.0, 1100.0];
    let out = match_quad_to_list(
        &[0.0, 33.5, 50.0, 100.0],
        &list,
        [990.0, 1010.0],
        1.0,
        &QuadParams::default(),
    )
    .unwrap();
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].i0, 2);
    assert_eq!(out[0].i1, 3);
}

#[test]
fn test_both_interior_positions_required() {
    // Only the 1/3 position has a counterpart.
    let list = vec![1000.0, 1033.0, 1080.0, 1100.0];
    let out = match_quad_to_list(
        &[0.0, 33.0, 50.0, 100.0],
        &list,
        [990.0, 1010.0],
        1.0,
        &QuadParams::default(),
    )
    .unwrap();
    assert!(out.is_empty());
}

#[test]
fn test_tuple_bounds_hold() {
    let list = synthetic_list();
    let params = QuadParams {
        tol: 4.0,
        dwv_uncertainty: 0.3,
    };
    let out =
        match_quad_to_list(&[0.0, 30.0, 55.0, 100.0], &list, [4000.0, 5000.0], 1.0, &params)
            .unwrap();
    assert!(!out.is_empty());
    for m in &out {
        assert!(m.start < m.end);
        assert!(m.end < list.len());
        assert!(m.start < m.i0 && m.i0 < m.end);
        assert!(m.start < m.i1 && m.i1 < m.end);
    }
}

#[test]
fn test_deterministic_and_ordered() {
    let list = synthetic_list();
    let params = QuadParams {
        tol: 4.0,
        dwv_uncertainty: 0.3,
    };
    let a = match_quad_to_list(&[0.0, 30.0, 55.0, 100.0], &list, [4000.0, 5000.0], 1.0, &params)
        .unwrap();
    let b = match_quad_to_list(&[0.0, 30.0, 55.0, 100.0], &list, [4000.0, 5000.0], 1.0, &params)
        .unwrap();
    assert_eq!(a, b);
    for pair in a.windows(2) {
        assert!((pair[0].start, pair[0].end) < (pair[1].start, pair[1].end));
    }
}

#[test]
fn test_shrinking_tol_never_adds_matches() {
    let list = synthetic_list();
    let mut previous = usize::MAX;
    for tol in [8.0, 4.0, 2.0, 1.0, 0.5, 0.1, 0.01] {
        let params = QuadParams {
            tol,
            dwv_uncertainty: 0.3,
        };
        let n = match_quad_to_list(
            &[0.0, 30.0, 55.0, 100.0],
            &list,
            [4000.0, 5000.0],
            1.0,
            &params,
        )
        .unwrap()
        .len();
        assert!(n <= previous, "tol {tol} gave {n} > {previous}");
        previous = n;
    }
}

#[test]
fn test_invalid_inputs_rejected() {
    let list = vec![5000.0, 5040.0, 5060.0, 5120.0];
    let quad = [100.0, 140.0, 160.0, 220.0];
    let defaults = QuadParams::default();

    assert!(match_quad_to_list(&quad[..3], &list, [4990.0, 5010.0], 1.0, &defaults).is_err());
    assert!(
        match_quad_to_list(&[1.0, 1.0, 1.0, 1.0], &list, [4990.0, 5010.0], 1.0, &defaults)
            .is_err()
    );
    assert!(match_quad_to_list(&quad, &list, [4990.0, 5010.0], 0.0, &defaults).is_err());
    assert!(match_quad_to_list(&quad, &list, [4990.0, 5010.0], -1.0, &defaults).is_err());

    let zero_tol = QuadParams {
        tol: 0.0,
        ..defaults
    };
    assert!(match_quad_to_list(&quad, &list, [4990.0, 5010.0], 1.0, &zero_tol).is_err());

    let too_wide = QuadParams {
        dwv_uncertainty: 1.5,
        ..defaults
    };
    assert!(match_quad_to_list(&quad, &list, [4990.0, 5010.0], 1.0, &too_wide).is_err());

    let unsorted = vec![5060.0, 5000.0, 5120.0, 5040.0];
    let err = match_quad_to_list(&quad, &unsorted, [4990.0, 5010.0], 1.0, &defaults).unwrap_err();
    assert!(matches!(err, PatternError::InvalidInput(_)));
}

#[test]
fn test_full_dispersion_uncertainty() {
    // Ends may lie anywhere in (start, start + 2 * span * dwv); the start
    // itself stays excluded.
    let list = vec![5000.0, 5040.0, 5060.0, 5120.0];
    let quad = [100.0, 140.0, 160.0, 220.0];
    let params = QuadParams {
        dwv_uncertainty: 1.0,
        ..QuadParams::default()
    };
    let out = match_quad_to_list(&quad, &list, [4990.0, 5010.0], 1.0, &params).unwrap();
    assert_eq!(
        out,
        vec![QuadMatch {
            start: 0,
            i0: 1,
            i1: 2,
            end: 3
        }]
    );
}
