use sculpt_grid::{VoxelGrid, resample};
use serde::{Deserialize, Serialize};

use crate::binary::{grid_from_binary_string, to_binary_string};
use crate::error::FormatError;

pub const DEFAULT_DIFFICULTY: i64 = 5;
pub const DEFAULT_MAX_MOVES: i64 = 50;

/// Wire object consumed by the game engine.
///
/// The grid size is never stored; it is recovered from the string length.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShapePayload {
    pub voxel_data_string: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_moves: Option<i64>,
}

/// Level attributes carried next to the grid, passed through uninterpreted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ShapeMetadata {
    pub difficulty: i64,
    pub max_moves: i64,
}

impl Default for ShapeMetadata {
    fn default() -> Self {
        Self {
            difficulty: DEFAULT_DIFFICULTY,
            max_moves: DEFAULT_MAX_MOVES,
        }
    }
}

impl ShapeMetadata {
    #[inline]
    pub const fn new(difficulty: i64, max_moves: i64) -> Self {
        Self {
            difficulty,
            max_moves,
        }
    }

    /// Absent and zero values both fall back to the defaults.
    pub fn coalesce(difficulty: Option<i64>, max_moves: Option<i64>) -> Self {
        fn pick(v: Option<i64>, default: i64) -> i64 {
            match v {
                Some(v) if v != 0 => v,
                _ => default,
            }
        }
        Self {
            difficulty: pick(difficulty, DEFAULT_DIFFICULTY),
            max_moves: pick(max_moves, DEFAULT_MAX_MOVES),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecodedShape {
    pub grid: VoxelGrid,
    pub metadata: ShapeMetadata,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResizedShape {
    pub grid: VoxelGrid,
    pub metadata: ShapeMetadata,
    /// Size detected from the payload before any resampling.
    pub original_size: usize,
    pub was_converted: bool,
}

pub fn encode(grid: &VoxelGrid, metadata: &ShapeMetadata) -> ShapePayload {
    let meta = ShapeMetadata::coalesce(Some(metadata.difficulty), Some(metadata.max_moves));
    ShapePayload {
        voxel_data_string: to_binary_string(grid),
        difficulty: Some(meta.difficulty),
        max_moves: Some(meta.max_moves),
    }
}

pub fn decode(payload: &ShapePayload) -> Result<DecodedShape, FormatError> {
    let grid = grid_from_binary_string(&payload.voxel_data_string)?;
    Ok(DecodedShape {
        grid,
        metadata: ShapeMetadata::coalesce(payload.difficulty, payload.max_moves),
    })
}

/// Decodes and, when the stored size differs from `target`, resamples.
pub fn decode_with_resize(payload: &ShapePayload, target: usize) -> Result<ResizedShape, FormatError> {
    let DecodedShape { grid, metadata } = decode(payload)?;
    let original_size = grid.size();
    if original_size == target {
        return Ok(ResizedShape {
            grid,
            metadata,
            original_size,
            was_converted: false,
        });
    }
    Ok(ResizedShape {
        grid: resample(&grid, target)?,
        metadata,
        original_size,
        was_converted: true,
    })
}
