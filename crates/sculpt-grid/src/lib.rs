//! Cubic voxel grid storage and centered resampling.
#![forbid(unsafe_code)]

mod pos;
pub mod resample;

pub use pos::VoxelPos;
pub use resample::{lost_voxels, resample};

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("grid size must be at least 1")]
    ZeroSize,
    #[error("grid size {size} overflows the cell count")]
    TooLarge { size: usize },
    #[error("expected {expected} cells for the grid, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },
    #[error("voxel ({x}, {y}, {z}) is outside a grid of size {size}")]
    OutOfBounds {
        x: usize,
        y: usize,
        z: usize,
        size: usize,
    },
}

/// Linear index of `(x, y, z)` in a grid of side `n`. Callers range-check first.
#[inline]
pub const fn index(x: usize, y: usize, z: usize, n: usize) -> usize {
    x + y * n + z * n * n
}

fn cell_count_for(size: usize) -> Result<usize, GridError> {
    if size == 0 {
        return Err(GridError::ZeroSize);
    }
    size.checked_mul(size)
        .and_then(|sq| sq.checked_mul(size))
        .ok_or(GridError::TooLarge { size })
}

/// Flat boolean field over an `N x N x N` lattice.
///
/// The backing vector always holds exactly `N³` cells and `N >= 1`; every
/// constructor enforces both.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VoxelGrid {
    size: usize,
    cells: Vec<bool>,
}

impl VoxelGrid {
    /// Empty grid (every cell clear).
    pub fn new(size: usize) -> Result<Self, GridError> {
        Self::with_value(size, false)
    }

    /// Fully occupied grid.
    pub fn filled(size: usize) -> Result<Self, GridError> {
        Self::with_value(size, true)
    }

    pub fn with_value(size: usize, value: bool) -> Result<Self, GridError> {
        let len = cell_count_for(size)?;
        Ok(Self {
            size,
            cells: vec![value; len],
        })
    }

    /// Empty grid with one occupied cell at `(N/2, N/2, N/2)`.
    pub fn single_center(size: usize) -> Result<Self, GridError> {
        let mut grid = Self::new(size)?;
        let c = size / 2;
        let i = grid.idx(c, c, c);
        grid.cells[i] = true;
        Ok(grid)
    }

    pub fn from_cells(size: usize, cells: Vec<bool>) -> Result<Self, GridError> {
        let expected = cell_count_for(size)?;
        if cells.len() != expected {
            return Err(GridError::LengthMismatch {
                expected,
                actual: cells.len(),
            });
        }
        Ok(Self { size, cells })
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Total number of cells, always `size³`.
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    pub fn into_cells(self) -> Vec<bool> {
        self.cells
    }

    #[inline]
    pub fn idx(&self, x: usize, y: usize, z: usize) -> usize {
        index(x, y, z, self.size)
    }

    #[inline]
    pub fn contains(&self, x: usize, y: usize, z: usize) -> bool {
        x < self.size && y < self.size && z < self.size
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize, z: usize) -> Option<bool> {
        if !self.contains(x, y, z) {
            return None;
        }
        Some(self.cells[self.idx(x, y, z)])
    }

    /// Out-of-range coordinates read as unoccupied.
    #[inline]
    pub fn is_occupied(&self, x: usize, y: usize, z: usize) -> bool {
        self.get(x, y, z).unwrap_or(false)
    }

    #[inline]
    pub fn is_occupied_at(&self, pos: VoxelPos) -> bool {
        self.is_occupied(pos.x, pos.y, pos.z)
    }

    /// Writes one cell and returns its previous value.
    pub fn set(&mut self, x: usize, y: usize, z: usize, value: bool) -> Result<bool, GridError> {
        if !self.contains(x, y, z) {
            return Err(GridError::OutOfBounds {
                x,
                y,
                z,
                size: self.size,
            });
        }
        let i = self.idx(x, y, z);
        Ok(std::mem::replace(&mut self.cells[i], value))
    }

    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| **c).count()
    }

    #[inline]
    pub fn has_voxels(&self) -> bool {
        self.cells.iter().any(|c| *c)
    }

    /// Coordinate of a linear index.
    #[inline]
    pub fn pos_of(&self, i: usize) -> VoxelPos {
        let n = self.size;
        VoxelPos::new(i % n, (i / n) % n, i / (n * n))
    }

    /// Bounds-checked neighbor of `pos` along a signed offset.
    #[inline]
    pub fn neighbor(&self, pos: VoxelPos, (dx, dy, dz): (i32, i32, i32)) -> Option<VoxelPos> {
        pos.offset(dx, dy, dz, self.size)
    }

    /// Every coordinate in scan order: x outermost, then y, z innermost.
    pub fn positions(&self) -> impl Iterator<Item = VoxelPos> + use<> {
        let n = self.size;
        (0..n).flat_map(move |x| {
            (0..n).flat_map(move |y| (0..n).map(move |z| VoxelPos::new(x, y, z)))
        })
    }

    /// Occupied coordinates in scan order.
    pub fn occupied_positions(&self) -> impl Iterator<Item = VoxelPos> + '_ {
        self.positions().filter(|p| self.is_occupied_at(*p))
    }
}
