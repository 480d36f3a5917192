//! One character per cell, `'1'` occupied, in ascending linear-index order.

use sculpt_grid::VoxelGrid;

use crate::error::FormatError;

/// Exact integer cube root, if `len` is a perfect cube.
///
/// The float root is rounded, not truncated: `cbrt(1000.0)` can land just
/// under 10.
pub fn exact_cube_root(len: usize) -> Option<usize> {
    let n = (len as f64).cbrt().round() as usize;
    let cubed = n.checked_mul(n).and_then(|sq| sq.checked_mul(n))?;
    (cubed == len).then_some(n)
}

/// Recovers the grid size from the string length.
pub fn detect_grid_size(data: &str) -> Result<usize, FormatError> {
    let len = data.chars().count();
    if len == 0 {
        return Err(FormatError::Empty);
    }
    exact_cube_root(len).ok_or(FormatError::NotPerfectCube { len })
}

pub fn to_binary_string(grid: &VoxelGrid) -> String {
    grid.cells()
        .iter()
        .map(|c| if *c { '1' } else { '0' })
        .collect()
}

/// Lenient inverse of [`to_binary_string`]: anything other than `'1'` is clear.
pub fn from_binary_string(data: &str) -> Vec<bool> {
    data.chars().map(|c| c == '1').collect()
}

pub fn grid_from_binary_string(data: &str) -> Result<VoxelGrid, FormatError> {
    let size = detect_grid_size(data)?;
    Ok(VoxelGrid::from_cells(size, from_binary_string(data))?)
}
