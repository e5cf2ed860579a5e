//! Dynamic water surface simulation.

pub mod field;

pub use field::{Vertex, WaterField, WaveSample};
