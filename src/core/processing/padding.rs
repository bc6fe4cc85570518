use ndarray::{Array3, ArrayBase, ArrayView3, Data, Ix3, s};
use tracing::{debug, info};

use crate::core::processing::ops::{dim3, par_copy_into, par_to_owned};
use crate::error::{Error, Result};
use crate::types::{PadPlan, PadSpec, ShapeDelta};

/// Zero-pads `stack` according to `plan`, copying the original into the interior.
pub fn pad_with_plan(stack: ArrayView3<'_, f32>, plan: &PadPlan) -> Array3<f32> {
    let dim = dim3(&stack);
    let out_dim = plan.apply_to(dim);
    let [(b0, _), (b1, _), (b2, _)] = plan.0;

    let mut padded = Array3::<f32>::zeros(out_dim);
    let interior = padded.slice_mut(s![b0..b0 + dim[0], b1..b1 + dim[1], b2..b2 + dim[2]]);
    par_copy_into(interior, stack);
    padded
}

/// Pads a projection stack `(sequence, row, column)` with zeros: `pad.y` on both
/// ends of the row axis, `pad.x` on both ends of the column axis.
pub fn pad_projections<S>(stack: &ArrayBase<S, Ix3>, pad: PadSpec) -> Array3<f32>
where
    S: Data<Elem = f32>,
{
    let dim = dim3(stack);
    info!(
        "Padding projections: shape={:?}, pad_x={}, pad_y={}",
        dim, pad.x, pad.y
    );
    if pad.is_zero() {
        return par_to_owned(stack.view());
    }
    let padded = pad_with_plan(stack.view(), &PadPlan::from(pad));
    debug!("Padded projection shape: {:?}", padded.dim());
    padded
}

/// Signed entry point for [`pad_projections`]; negative amounts are rejected.
pub fn pad<S>(stack: &ArrayBase<S, Ix3>, pad_x: i64, pad_y: i64) -> Result<Array3<f32>>
where
    S: Data<Elem = f32>,
{
    let pad = PadSpec::try_new(pad_x, pad_y)?;
    Ok(pad_projections(stack, pad))
}

/// Strips the pad a reconstruction inherited from its padded projections.
///
/// The volume is ordered `(row, column, column)`: `pad.y` is removed from both ends
/// of axis 0, `pad.x` from both ends of axes 1 and 2. A zero amount leaves its axes
/// at full extent.
pub fn unpad_reconstruction<S>(volume: &ArrayBase<S, Ix3>, pad: PadSpec) -> Result<Array3<f32>>
where
    S: Data<Elem = f32>,
{
    let dim = dim3(volume);
    let pads = pad.volume_pads();
    for (axis, (&(before, after), &extent)) in pads.iter().zip(dim.iter()).enumerate() {
        if before + after > extent {
            return Err(Error::invalid(
                "unpad",
                format!(
                    "cannot remove {before}+{after} elements from axis {axis} of volume with shape {dim:?}"
                ),
            ));
        }
    }

    let [(p0, _), (p1, _), (p2, _)] = pads;
    let inner = volume.slice(s![
        p0..dim[0] - p0,
        p1..dim[1] - p1,
        p2..dim[2] - p2
    ]);
    debug!(
        "Unpadding volume: shape={:?} -> {:?} ({})",
        dim,
        inner.dim(),
        pad
    );
    Ok(par_to_owned(inner))
}

/// Signed entry point for [`unpad_reconstruction`]; negative amounts are rejected.
pub fn unpad<S>(volume: &ArrayBase<S, Ix3>, pad_x: i64, pad_y: i64) -> Result<Array3<f32>>
where
    S: Data<Elem = f32>,
{
    let pad = PadSpec::try_new(pad_x, pad_y)?;
    unpad_reconstruction(volume, pad)
}

/// Padding plan that grows shape `target` into shape `reference`.
pub fn plan_shape_match(target: [usize; 3], reference: [usize; 3]) -> Result<PadPlan> {
    ShapeDelta::between(target, reference).plan()
}

/// Zero-pads `target` so that its shape equals `reference`'s, splitting each axis's
/// difference evenly with any odd unit on the trailing side.
pub fn match_shape<S1, S2>(
    target: &ArrayBase<S1, Ix3>,
    reference: &ArrayBase<S2, Ix3>,
) -> Result<Array3<f32>>
where
    S1: Data<Elem = f32>,
    S2: Data,
{
    let target_dim = dim3(target);
    let reference_dim = dim3(reference);
    let plan = plan_shape_match(target_dim, reference_dim)?;
    debug!(
        "Matching shape {:?} -> {:?} with plan {:?}",
        target_dim, reference_dim, plan.0
    );
    Ok(pad_with_plan(target.view(), &plan))
}
