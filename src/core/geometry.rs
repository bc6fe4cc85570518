//! Shape and center-of-rotation arithmetic for padded parallel-beam reconstruction.
use serde::{Deserialize, Serialize};

use crate::types::{PadPlan, PadSpec};

/// Volume reconstructed from a projection stack `(sequence, rows, cols)`: one
/// `cols x cols` plane per detector row.
pub fn volume_dim(projection_dim: [usize; 3]) -> [usize; 3] {
    let [_, rows, cols] = projection_dim;
    [rows, cols, cols]
}

/// Center of rotation expressed in padded detector columns.
pub fn padded_center(center: f64, pad: PadSpec) -> f64 {
    center + pad.x as f64
}

/// Offset of the rotation axis from the detector midpoint, signed the way
/// parallel-beam geometries expect it for post-alignment.
pub fn center_shift(center: f64, num_x: usize) -> f64 {
    -(center - num_x as f64 / 2.0)
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CenterPlan {
    pub center: f64,
    pub padded_center: f64,
    pub center_shift: f64,
}

/// Shapes involved in one pad → reconstruct → unpad run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReconGeometry {
    pub pad: PadSpec,
    pub projection_dim: [usize; 3],
    pub padded_projection_dim: [usize; 3],
    /// Shape the engine returns for the padded projections
    pub volume_dim: [usize; 3],
    /// Shape after unpadding
    pub unpadded_volume_dim: [usize; 3],
}

impl ReconGeometry {
    pub fn new(projection_dim: [usize; 3], pad: PadSpec) -> Self {
        let padded_projection_dim = PadPlan::from(pad).apply_to(projection_dim);
        Self {
            pad,
            projection_dim,
            padded_projection_dim,
            volume_dim: volume_dim(padded_projection_dim),
            unpadded_volume_dim: volume_dim(projection_dim),
        }
    }

    pub fn center_plan(&self, center: f64) -> CenterPlan {
        let padded = padded_center(center, self.pad);
        CenterPlan {
            center,
            padded_center: padded,
            center_shift: center_shift(padded, self.padded_projection_dim[2]),
        }
    }
}
