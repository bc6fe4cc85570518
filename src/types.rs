//! Shared value types used across tomopad.
//! Includes the `ImageStack` alias, `PadSpec` (projection-space pad amounts and
//! their mapping onto volume axes), `BoundingBox`, `ShapeDelta` and `PadPlan`.
use ndarray::Array3;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A 3-D stack of `f32` samples.
///
/// Projection stacks are ordered `(sequence, row, column)`. Reconstructed volumes
/// are ordered `(row, column, column)`: one slice per detector row, each slice a
/// square reconstruction plane.
pub type ImageStack = Array3<f32>;

/// Per-axis `(before, after)` pad amounts for a 3-D array.
pub type AxisPads = [(usize, usize); 3];

/// Symmetric pad amounts applied to a projection stack before reconstruction.
///
/// `x` pads both ends of the column axis, `y` pads both ends of the row axis.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PadSpec {
    pub x: usize,
    pub y: usize,
}

impl PadSpec {
    pub const NONE: PadSpec = PadSpec { x: 0, y: 0 };

    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Builds a `PadSpec` from signed amounts, rejecting negative values.
    pub fn try_new(x: i64, y: i64) -> Result<Self> {
        let x = usize::try_from(x)
            .map_err(|_| Error::invalid("pad", format!("pad_x must be >= 0, got {x}")))?;
        let y = usize::try_from(y)
            .map_err(|_| Error::invalid("pad", format!("pad_y must be >= 0, got {y}")))?;
        Ok(Self { x, y })
    }

    pub fn is_zero(&self) -> bool {
        self.x == 0 && self.y == 0
    }

    /// Pads for a projection stack `(sequence, row, column)`.
    /// The sequence axis is never padded.
    pub fn projection_pads(&self) -> AxisPads {
        [(0, 0), (self.y, self.y), (self.x, self.x)]
    }

    /// Pads carried by a volume reconstructed from a stack padded with `self`.
    ///
    /// Volume axis 0 comes from the detector rows, so it inherits `y`. Axes 1 and 2
    /// span the reconstruction plane, whose width is the padded detector width, so
    /// both inherit `x`.
    pub fn volume_pads(&self) -> AxisPads {
        [(self.y, self.y), (self.x, self.x), (self.x, self.x)]
    }
}

impl std::fmt::Display for PadSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "x={}, y={}", self.x, self.y)
    }
}

/// Inclusive `(min, max)` index range on each of the three axes.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct BoundingBox {
    pub ranges: [(usize, usize); 3],
}

impl BoundingBox {
    /// Box covering a single index.
    pub fn point(index: [usize; 3]) -> Self {
        Self {
            ranges: [
                (index[0], index[0]),
                (index[1], index[1]),
                (index[2], index[2]),
            ],
        }
    }

    /// Smallest box containing both `self` and `other`.
    pub fn union(&self, other: &BoundingBox) -> Self {
        let mut ranges = self.ranges;
        for (r, o) in ranges.iter_mut().zip(other.ranges.iter()) {
            r.0 = r.0.min(o.0);
            r.1 = r.1.max(o.1);
        }
        Self { ranges }
    }

    /// Number of elements covered on each axis.
    pub fn extent(&self) -> [usize; 3] {
        self.ranges.map(|(min, max)| max - min + 1)
    }

    pub fn contains(&self, index: [usize; 3]) -> bool {
        self.ranges
            .iter()
            .zip(index.iter())
            .all(|(&(min, max), &i)| min <= i && i <= max)
    }
}

/// Per-axis difference `reference - target` between two shapes.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct ShapeDelta(pub [i64; 3]);

impl ShapeDelta {
    pub fn between(target: [usize; 3], reference: [usize; 3]) -> Self {
        let mut delta = [0i64; 3];
        for axis in 0..3 {
            delta[axis] = reference[axis] as i64 - target[axis] as i64;
        }
        Self(delta)
    }

    /// Splits each delta across the two sides of its axis; an odd unit goes to the
    /// trailing side. Fails if any delta is negative.
    pub fn plan(&self) -> Result<PadPlan> {
        let mut pads: AxisPads = [(0, 0); 3];
        for (axis, &d) in self.0.iter().enumerate() {
            if d < 0 {
                return Err(Error::invalid(
                    "match_shape",
                    format!("axis {axis} has negative delta {d}: target is larger than reference"),
                ));
            }
            let d = d as usize;
            let before = d / 2;
            pads[axis] = (before, d - before);
        }
        Ok(PadPlan(pads))
    }
}

/// Concrete `(before, after)` zero-padding for each axis.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub struct PadPlan(pub AxisPads);

impl PadPlan {
    /// Shape obtained by applying this plan to an array of shape `dim`.
    pub fn apply_to(&self, dim: [usize; 3]) -> [usize; 3] {
        let mut out = dim;
        for (o, (before, after)) in out.iter_mut().zip(self.0.iter()) {
            *o += before + after;
        }
        out
    }
}

impl From<PadSpec> for PadPlan {
    fn from(pad: PadSpec) -> Self {
        PadPlan(pad.projection_pads())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn pad_spec_rejects_negative_amounts() {
        assert!(matches!(
            PadSpec::try_new(-1, 0),
            Err(Error::InvalidArgument { op: "pad", .. })
        ));
        assert!(matches!(
            PadSpec::try_new(0, -3),
            Err(Error::InvalidArgument { op: "pad", .. })
        ));
        assert_eq!(PadSpec::try_new(4, 2).unwrap(), PadSpec::new(4, 2));
    }

    #[test]
    fn volume_pads_map_y_to_depth_and_x_to_plane() {
        let pad = PadSpec::new(3, 5);
        assert_eq!(pad.projection_pads(), [(0, 0), (5, 5), (3, 3)]);
        assert_eq!(pad.volume_pads(), [(5, 5), (3, 3), (3, 3)]);
    }

    #[rstest]
    #[case([2, 2, 2], [3, 2, 2], [(0, 1), (0, 0), (0, 0)])]
    #[case([2, 2, 2], [4, 2, 2], [(1, 1), (0, 0), (0, 0)])]
    #[case([1, 3, 5], [4, 4, 10], [(1, 2), (0, 1), (2, 3)])]
    #[case([7, 7, 7], [7, 7, 7], [(0, 0), (0, 0), (0, 0)])]
    fn shape_delta_splits_odd_units_to_trailing_side(
        #[case] target: [usize; 3],
        #[case] reference: [usize; 3],
        #[case] expected: AxisPads,
    ) {
        let plan = ShapeDelta::between(target, reference).plan().unwrap();
        assert_eq!(plan.0, expected);
        assert_eq!(plan.apply_to(target), reference);
    }

    #[test]
    fn shape_delta_rejects_negative_axis() {
        let err = ShapeDelta::between([3, 2, 2], [2, 2, 2]).plan().unwrap_err();
        match err {
            Error::InvalidArgument { op, reason } => {
                assert_eq!(op, "match_shape");
                assert!(reason.contains("axis 0"), "{reason}");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn bounding_box_union_and_extent() {
        let a = BoundingBox::point([1, 4, 2]);
        let b = BoundingBox::point([3, 0, 2]);
        let u = a.union(&b);
        assert_eq!(u.ranges, [(1, 3), (0, 4), (2, 2)]);
        assert_eq!(u.extent(), [3, 5, 1]);
        assert!(u.contains([2, 2, 2]));
        assert!(!u.contains([0, 2, 2]));
    }
}
