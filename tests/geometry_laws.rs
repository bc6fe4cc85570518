use ndarray::{Array3, s};
use proptest::prelude::*;

use tomopad::{
    Error, PadSpec, ReconGeometry, match_shape, pad, pad_projections, trim, unpad,
    unpad_reconstruction,
};

fn stack(max_dim: usize) -> impl Strategy<Value = Array3<f32>> {
    (1..=max_dim, 1..=max_dim, 1..=max_dim).prop_flat_map(|(a, b, c)| {
        prop::collection::vec(-4.0f32..4.0, a * b * c)
            .prop_map(move |v| Array3::from_shape_vec((a, b, c), v).unwrap())
    })
}

/// Sparse stack: mostly zeros with at least one non-zero sample.
fn sparse_stack(max_dim: usize) -> impl Strategy<Value = Array3<f32>> {
    (1..=max_dim, 1..=max_dim, 1..=max_dim).prop_flat_map(|(a, b, c)| {
        (
            prop::collection::vec(prop::bool::weighted(0.2), a * b * c),
            0..a * b * c,
        )
            .prop_map(move |(mask, forced)| {
                let values: Vec<f32> = mask
                    .iter()
                    .enumerate()
                    .map(|(i, &m)| if m || i == forced { 1.0 + i as f32 } else { 0.0 })
                    .collect();
                Array3::from_shape_vec((a, b, c), values).unwrap()
            })
    })
}

proptest! {
    #[test]
    fn pad_shape_and_content(s in stack(6), pad_x in 0usize..5, pad_y in 0usize..5) {
        let (n, rows, cols) = s.dim();
        let padded = pad(&s, pad_x as i64, pad_y as i64).unwrap();
        prop_assert_eq!(padded.dim(), (n, rows + 2 * pad_y, cols + 2 * pad_x));

        let centre = padded.slice(s![.., pad_y..pad_y + rows, pad_x..pad_x + cols]);
        prop_assert_eq!(centre, s.view());

        let mut border = padded.clone();
        border.slice_mut(s![.., pad_y..pad_y + rows, pad_x..pad_x + cols]).fill(0.0);
        prop_assert!(border.iter().all(|&v| v == 0.0));
    }

    #[test]
    fn pad_unpad_round_trip(s in stack(6), pad_x in 0usize..5, pad_y in 0usize..5) {
        let pad_spec = PadSpec::new(pad_x, pad_y);
        let padded = pad_projections(&s, pad_spec);
        let (_, rows, cols) = padded.dim();
        let volume = Array3::<f32>::ones((rows, cols, cols));
        let restored = unpad_reconstruction(&volume, pad_spec).unwrap();

        let (_, orig_rows, orig_cols) = s.dim();
        prop_assert_eq!(restored.dim(), (orig_rows, orig_cols, orig_cols));
        let g = ReconGeometry::new([s.dim().0, orig_rows, orig_cols], pad_spec);
        prop_assert_eq!([restored.dim().0, restored.dim().1, restored.dim().2], g.unpadded_volume_dim);
    }

    #[test]
    fn trim_is_idempotent(s in sparse_stack(6)) {
        let once = trim(&s, 1e-7).unwrap();
        let twice = trim(&once, 1e-7).unwrap();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn trim_recovers_padded_content(s in sparse_stack(5), pad_x in 0usize..4, pad_y in 0usize..4) {
        let padded = pad_projections(&s, PadSpec::new(pad_x, pad_y));
        prop_assert_eq!(trim(&padded, 1e-7).unwrap(), trim(&s, 1e-7).unwrap());
    }

    #[test]
    fn match_shape_reaches_reference(
        s in stack(5),
        extra in (0usize..4, 0usize..4, 0usize..4),
    ) {
        let (a, b, c) = s.dim();
        let reference = Array3::<f32>::zeros((a + extra.0, b + extra.1, c + extra.2));
        let out = match_shape(&s, &reference).unwrap();
        prop_assert_eq!(out.dim(), reference.dim());

        let (o0, o1, o2) = (extra.0 / 2, extra.1 / 2, extra.2 / 2);
        prop_assert_eq!(out.slice(s![o0..o0 + a, o1..o1 + b, o2..o2 + c]), s.view());
    }
}

#[test]
fn concrete_pad_example() {
    let padded = pad(&Array3::<f32>::zeros((1, 4, 4)), 1, 2).unwrap();
    assert_eq!(padded.dim(), (1, 8, 6));
    assert!(padded.iter().all(|&v| v == 0.0));
}

#[test]
fn trim_of_zeros_fails_with_empty_result() {
    let err = trim(&Array3::<f32>::zeros((3, 3, 3)), 1e-7).unwrap_err();
    assert!(matches!(err, Error::EmptyResult { .. }));
}

#[test]
fn shape_match_odd_split_and_rejection() {
    let target = Array3::<f32>::from_elem((2, 2, 2), 3.0);
    let reference = Array3::<f32>::zeros((3, 2, 2));
    let out = match_shape(&target, &reference).unwrap();
    assert_eq!(out.dim(), (3, 2, 2));
    assert_eq!(out.slice(s![0..2, .., ..]), target);
    assert!(out.slice(s![2, .., ..]).iter().all(|&v| v == 0.0));

    let err = match_shape(&reference, &target).unwrap_err();
    assert!(matches!(err, Error::InvalidArgument { .. }));
}

#[test]
fn negative_pads_fail_fast() {
    let s = Array3::<f32>::ones((1, 3, 3));
    assert!(matches!(pad(&s, -1, 1), Err(Error::InvalidArgument { .. })));
    assert!(matches!(unpad(&s, 1, -1), Err(Error::InvalidArgument { .. })));
}
