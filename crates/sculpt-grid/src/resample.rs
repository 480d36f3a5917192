//! Centered crop/pad between cubic grid sizes.

use crate::{GridError, VoxelGrid};

/// Resamples `grid` into a `target`-sized grid, keeping the shape centered.
///
/// Growing pads by `floor((T - S) / 2)` on the low side. Shrinking reads a
/// centered `T³` window starting at `floor((S - T) / 2)`; occupied cells
/// outside that window are dropped without error.
pub fn resample(grid: &VoxelGrid, target: usize) -> Result<VoxelGrid, GridError> {
    let source = grid.size();
    if source == target {
        return Ok(grid.clone());
    }
    let mut out = VoxelGrid::new(target)?;
    if source < target {
        let offset = (target - source) / 2;
        for pos in grid.occupied_positions() {
            let i = out.idx(pos.x + offset, pos.y + offset, pos.z + offset);
            out.cells[i] = true;
        }
    } else {
        let offset = (source - target) / 2;
        for z in 0..target {
            for y in 0..target {
                for x in 0..target {
                    if grid.is_occupied(x + offset, y + offset, z + offset) {
                        let i = out.idx(x, y, z);
                        out.cells[i] = true;
                    }
                }
            }
        }
    }
    Ok(out)
}

/// Occupied cells present in `before` but missing from `after`.
#[inline]
pub fn lost_voxels(before: &VoxelGrid, after: &VoxelGrid) -> usize {
    before
        .occupied_count()
        .saturating_sub(after.occupied_count())
}
