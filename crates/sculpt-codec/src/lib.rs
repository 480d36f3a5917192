//! Binary-string wire format for voxel shapes.
#![forbid(unsafe_code)]

pub mod binary;
pub mod error;
pub mod format;
pub mod payload;

pub use binary::{
    detect_grid_size, exact_cube_root, from_binary_string, grid_from_binary_string,
    to_binary_string,
};
pub use error::FormatError;
pub use format::{
    DIFFICULTY_RANGE, FormatReport, MAX_MOVES_RANGE, metadata_errors, validate_format,
};
pub use payload::{
    DEFAULT_DIFFICULTY, DEFAULT_MAX_MOVES, DecodedShape, ResizedShape, ShapeMetadata,
    ShapePayload, decode, decode_with_resize, encode,
};
