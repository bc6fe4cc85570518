use ndarray::{Array3, ArrayBase, ArrayView2, Axis, Data, Ix3, s};
use rayon::prelude::*;
use tracing::{debug, warn};

use crate::core::processing::ops::{dim3, par_to_owned};
use crate::error::{Error, Result};
use crate::types::BoundingBox;

/// Magnitude at or below which a sample counts as padding.
pub const DEFAULT_THRESHOLD: f32 = 1e-7;

/// Row/column bounds of the samples of one slice with `|v| > threshold`.
fn slice_bounds(slice: ArrayView2<'_, f32>, threshold: f32) -> Option<[(usize, usize); 2]> {
    let mut bounds: Option<[(usize, usize); 2]> = None;
    for ((r, c), &v) in slice.indexed_iter() {
        if v.abs() > threshold {
            let b = bounds.get_or_insert([(r, r), (c, c)]);
            b[0] = (b[0].0.min(r), b[0].1.max(r));
            b[1] = (b[1].0.min(c), b[1].1.max(c));
        }
    }
    bounds
}

/// Smallest inclusive box holding every element with `|v| > threshold`.
///
/// Slices along axis 0 are scanned in parallel. Fails with `EmptyResult` when no
/// element exceeds the threshold.
pub fn bounding_box<S>(stack: &ArrayBase<S, Ix3>, threshold: f32) -> Result<BoundingBox>
where
    S: Data<Elem = f32>,
{
    if threshold.is_nan() {
        return Err(Error::invalid("trim", "threshold is NaN"));
    }
    let view = stack.view();
    let n = view.len_of(Axis(0));

    let found = (0..n)
        .into_par_iter()
        .filter_map(|i| {
            slice_bounds(view.index_axis(Axis(0), i), threshold).map(|[rows, cols]| BoundingBox {
                ranges: [(i, i), rows, cols],
            })
        })
        .reduce_with(|a, b| a.union(&b));

    found.ok_or_else(|| {
        let shape = dim3(stack);
        warn!(
            "No element of stack {:?} exceeds threshold {:e}",
            shape, threshold
        );
        Error::EmptyResult {
            op: "trim",
            threshold,
            shape,
        }
    })
}

/// Crops `stack` to the [`bounding_box`] of its above-threshold elements, both
/// endpoints included on every axis.
pub fn trim<S>(stack: &ArrayBase<S, Ix3>, threshold: f32) -> Result<Array3<f32>>
where
    S: Data<Elem = f32>,
{
    let bbox = bounding_box(stack, threshold)?;
    let [(z0, z1), (y0, y1), (x0, x1)] = bbox.ranges;
    debug!(
        "Trimming stack {:?} to box {:?} (extent {:?})",
        dim3(stack),
        bbox.ranges,
        bbox.extent()
    );
    Ok(par_to_owned(stack.slice(s![z0..=z1, y0..=y1, x0..=x1])))
}

/// [`trim`] with [`DEFAULT_THRESHOLD`].
pub fn trim_padding<S>(stack: &ArrayBase<S, Ix3>) -> Result<Array3<f32>>
where
    S: Data<Elem = f32>,
{
    trim(stack, DEFAULT_THRESHOLD)
}
