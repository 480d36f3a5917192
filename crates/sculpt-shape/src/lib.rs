//! Connectivity analysis and shape validation for voxel grids.
#![forbid(unsafe_code)]

pub mod adjacency;
pub mod components;
pub mod validate;

pub use adjacency::{Adjacency, CORNER_OFFSETS, EDGE_OFFSETS, FACE_OFFSETS, ParseAdjacencyError};
pub use components::{Component, find_components_with, find_connected_components, is_connected};
pub use validate::{EMPTY_SHAPE_ERROR, ValidationDetails, ValidationResult, validate};

#[cfg(test)]
mod tests;
