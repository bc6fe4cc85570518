//! Core building blocks: run parameters, padded reconstruction geometry, and the
//! padding/trimming primitives. These are consumed by the high-level `api` module.
pub mod geometry;
pub mod params;
pub mod processing;
