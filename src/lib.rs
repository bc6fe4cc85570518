#![doc = r#"
tomopad — padding and cropping geometry for tomographic reconstruction.

This crate provides the array-geometry layer that sits around a reconstruction
engine: zero-padding projection stacks before reconstruction, stripping the
inherited pad from the reconstructed volume afterwards, trimming stacks to the
bounding box of their significant samples, and padding one stack to the shape of
another. The reconstruction itself (SIRT, gridrec, FBP, ...) stays external and is
plugged in through the [`Reconstructor`] trait.

Axis conventions
----------------
- Projection stacks are `(sequence, row, column)`.
- Reconstructed volumes are `(row, column, column)`.

`pad_x` pads the projection column axis and therefore both in-plane axes of the
volume; `pad_y` pads the projection row axis and therefore volume axis 0.

Pad, then unpad
---------------
```rust
use ndarray::Array3;
use tomopad::{pad, unpad};

fn main() -> tomopad::Result<()> {
    let projections = Array3::<f32>::ones((180, 64, 100));
    let padded = pad(&projections, 10, 4)?;
    assert_eq!(padded.dim(), (180, 72, 120));

    // a reconstruction of `padded` has shape (rows, cols, cols)
    let volume = Array3::<f32>::zeros((72, 120, 120));
    let volume = unpad(&volume, 10, 4)?;
    assert_eq!(volume.dim(), (64, 100, 100));
    Ok(())
}
```

Trim and match shapes
---------------------
```rust
use ndarray::Array3;
use tomopad::{match_shape, trim, Error};

let mut stack = Array3::<f32>::zeros((4, 4, 4));
stack[[1, 2, 3]] = 5.0;
let cropped = trim(&stack, 1e-7).unwrap();
assert_eq!(cropped.dim(), (1, 1, 1));

let grown = match_shape(&cropped, &stack).unwrap();
assert_eq!(grown.dim(), (4, 4, 4));

assert!(matches!(
    trim(&Array3::<f32>::zeros((2, 2, 2)), 1e-7),
    Err(Error::EmptyResult { .. })
));
```

Driving an engine
-----------------
```rust
use ndarray::{Array3, ArrayView3};
use tomopad::{reconstruct_padded, PadSpec, ReconParams, Reconstructor};

struct Engine;

impl Reconstructor for Engine {
    fn name(&self) -> &str {
        "zeros"
    }

    fn reconstruct(
        &self,
        projections: ArrayView3<'_, f32>,
        _angles: &[f32],
        _center: Option<f64>,
        _num_iter: usize,
    ) -> tomopad::Result<Array3<f32>> {
        let (_, rows, cols) = projections.dim();
        Ok(Array3::zeros((rows, cols, cols)))
    }
}

fn main() -> tomopad::Result<()> {
    let params = ReconParams::default()
        .with_pad(PadSpec::new(8, 2))
        .with_center(Some(31.5));
    let projections = Array3::<f32>::zeros((3, 16, 64));
    let volume = reconstruct_padded(&Engine, &projections, &[0.0, 1.0, 2.0], &params)?;
    assert_eq!(volume.dim(), (16, 64, 64));
    Ok(())
}
```

Error handling
--------------
All fallible functions return `tomopad::Result<T>`. Caller mistakes surface as
`Error::InvalidArgument`; a trim that finds nothing above its threshold surfaces as
`Error::EmptyResult`.

Useful modules
--------------
- [`api`] — the `Reconstructor` seam and `reconstruct_padded`.
- [`core`] — run parameters, geometry and the padding/trimming primitives.
- [`types`] — `PadSpec`, `BoundingBox`, `ShapeDelta`, `PadPlan`.
- [`error`] — crate-level `Error` and `Result`.
"#]

pub mod api;
pub mod core;
pub mod error;
pub mod types;

// Curated public API surface
pub use crate::core::geometry::{CenterPlan, ReconGeometry, center_shift, padded_center, volume_dim};
pub use crate::core::params::ReconParams;
pub use crate::core::processing::padding::{
    match_shape, pad, pad_projections, pad_with_plan, plan_shape_match, unpad,
    unpad_reconstruction,
};
pub use crate::core::processing::trim::{DEFAULT_THRESHOLD, bounding_box, trim, trim_padding};
pub use error::{Error, Result};
pub use types::{AxisPads, BoundingBox, ImageStack, PadPlan, PadSpec, ShapeDelta};

pub use api::{Reconstructor, reconstruct_padded};
