//! High-level library API: the `Reconstructor` seam for external reconstruction
//! engines, and `reconstruct_padded`, which runs pad → reconstruct → unpad with
//! consistent geometry. Prefer these entrypoints over the low-level processing
//! modules when driving a reconstruction.
use ndarray::{Array3, ArrayBase, ArrayView3, Data, Ix3};
use tracing::{debug, info};

use crate::core::geometry::{ReconGeometry, padded_center};
use crate::core::params::ReconParams;
use crate::core::processing::ops::dim3;
use crate::core::processing::padding::{pad_projections, unpad_reconstruction};
use crate::error::{Error, Result};

/// An external reconstruction engine (SIRT, gridrec, FBP, ...).
///
/// Given projections `(sequence, row, column)`, one angle in radians per
/// projection, an optional center of rotation in detector columns and an iteration
/// count, returns a volume of shape `(row, column, column)`.
pub trait Reconstructor: Sync {
    fn name(&self) -> &str;

    fn reconstruct(
        &self,
        projections: ArrayView3<'_, f32>,
        angles: &[f32],
        center: Option<f64>,
        num_iter: usize,
    ) -> Result<Array3<f32>>;
}

/// Pads `projections` by `params.pad`, reconstructs them with `engine`, and strips
/// the inherited pad from the resulting volume.
///
/// The center of rotation, if given, is in unpadded columns and is shifted by
/// `pad.x` before reaching the engine.
pub fn reconstruct_padded<R, S>(
    engine: &R,
    projections: &ArrayBase<S, Ix3>,
    angles: &[f32],
    params: &ReconParams,
) -> Result<Array3<f32>>
where
    R: Reconstructor + ?Sized,
    S: Data<Elem = f32>,
{
    params.validate()?;
    let projection_dim = dim3(projections);
    if angles.len() != projection_dim[0] {
        return Err(Error::invalid(
            "reconstruct",
            format!(
                "{} angles given for {} projections",
                angles.len(),
                projection_dim[0]
            ),
        ));
    }

    let geometry = ReconGeometry::new(projection_dim, params.pad);
    let center = params.center.map(|c| padded_center(c, params.pad));
    info!(
        "Reconstructing with {}: projections={:?}, pad=({}), center={:?}, num_iter={}",
        engine.name(),
        projection_dim,
        params.pad,
        center,
        params.num_iter
    );

    let padded = pad_projections(projections, params.pad);
    let volume = engine.reconstruct(padded.view(), angles, center, params.num_iter)?;

    let actual = dim3(&volume);
    if actual != geometry.volume_dim {
        return Err(Error::ShapeMismatch {
            op: "reconstruct",
            expected: geometry.volume_dim,
            actual,
        });
    }

    let unpadded = unpad_reconstruction(&volume, params.pad)?;
    debug!(
        "Reconstruction finished: volume={:?} -> {:?}",
        actual,
        unpadded.dim()
    );
    Ok(unpadded)
}
