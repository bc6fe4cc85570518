//! Array-geometry primitives on 3-D stacks: zero padding and shape matching
//! (`padding`), threshold trimming (`trim`) and the parallel element-wise
//! helpers they share (`ops`).
pub mod ops;
pub mod padding;
pub mod trim;
