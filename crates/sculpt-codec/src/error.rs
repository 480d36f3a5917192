use sculpt_grid::GridError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("voxel data is empty")]
    Empty,
    #[error("voxel data length {len} is not a perfect cube")]
    NotPerfectCube { len: usize },
    #[error(transparent)]
    Grid(#[from] GridError),
}
