use sculpt_codec::{
    FormatError, ShapeMetadata, ShapePayload, decode_with_resize, encode, metadata_errors,
};
use sculpt_grid::{GridError, VoxelGrid, lost_voxels, resample};
use sculpt_shape::{ValidationResult, validate};
use thiserror::Error;

use crate::config::EditorConfig;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditError {
    #[error("cannot remove the last remaining voxel")]
    LastVoxel,
    #[error("grid size {size} is outside the allowed range {min}..={max}")]
    SizeOutOfRange { size: usize, min: usize, max: usize },
    #[error("shape is not valid: {}", .0.join("; "))]
    InvalidShape(Vec<String>),
    #[error("level metadata is not valid: {}", .0.join("; "))]
    InvalidMetadata(Vec<String>),
    #[error(transparent)]
    Grid(#[from] GridError),
    #[error(transparent)]
    Format(#[from] FormatError),
}

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditorStats {
    pub grid_size: usize,
    pub voxel_count: usize,
    pub rev: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImportReport {
    pub original_size: usize,
    pub was_converted: bool,
    /// Occupied cells cropped away while fitting the active grid.
    pub lost_voxels: usize,
}

/// Owns the grid being sculpted plus its level metadata.
///
/// Every change that alters a cell bumps `rev`, so callers can tell when
/// derived state (meshes, validation badges) is stale.
pub struct ShapeEditor {
    config: EditorConfig,
    grid: VoxelGrid,
    metadata: ShapeMetadata,
    rev: u64,
}

impl ShapeEditor {
    /// Starts with a single voxel in the middle of a default-sized grid.
    pub fn new(config: EditorConfig) -> Result<Self, EditError> {
        let size = config.default_grid_size;
        if !config.size_allowed(size) {
            return Err(EditError::SizeOutOfRange {
                size,
                min: config.min_grid_size,
                max: config.max_grid_size,
            });
        }
        let grid = VoxelGrid::single_center(size)?;
        let metadata = config.default_metadata();
        Ok(Self {
            config,
            grid,
            metadata,
            rev: 0,
        })
    }

    #[inline]
    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    #[inline]
    pub fn grid(&self) -> &VoxelGrid {
        &self.grid
    }

    #[inline]
    pub fn metadata(&self) -> ShapeMetadata {
        self.metadata
    }

    pub fn set_metadata(&mut self, metadata: ShapeMetadata) {
        self.metadata = metadata;
    }

    #[inline]
    pub fn rev(&self) -> u64 {
        self.rev
    }

    pub fn stats(&self) -> EditorStats {
        EditorStats {
            grid_size: self.grid.size(),
            voxel_count: self.grid.occupied_count(),
            rev: self.rev,
        }
    }

    fn bump_rev(&mut self) {
        self.rev = self.rev.wrapping_add(1).max(1);
    }

    fn check_size(&self, size: usize) -> Result<(), EditError> {
        if self.config.size_allowed(size) {
            return Ok(());
        }
        Err(EditError::SizeOutOfRange {
            size,
            min: self.config.min_grid_size,
            max: self.config.max_grid_size,
        })
    }

    fn replace_grid(&mut self, grid: VoxelGrid) {
        self.grid = grid;
        self.bump_rev();
        log::info!(
            target: "edit",
            "grid replaced size={} voxels={} rev={}",
            self.grid.size(),
            self.grid.occupied_count(),
            self.rev
        );
    }

    /// Sets or clears one cell. Returns whether the cell changed.
    ///
    /// Clearing the only occupied cell is refused.
    pub fn set_voxel(&mut self, x: usize, y: usize, z: usize, occupied: bool) -> Result<bool, EditError> {
        if !occupied && self.grid.is_occupied(x, y, z) && self.grid.occupied_count() == 1 {
            return Err(EditError::LastVoxel);
        }
        let prev = self.grid.set(x, y, z, occupied)?;
        let changed = prev != occupied;
        if changed {
            self.bump_rev();
            log::debug!(
                target: "edit",
                "voxel ({},{},{}) {} rev={}",
                x,
                y,
                z,
                if occupied { "placed" } else { "removed" },
                self.rev
            );
        }
        Ok(changed)
    }

    /// New empty grid of `size`.
    pub fn reset_empty(&mut self, size: usize) -> Result<(), EditError> {
        self.check_size(size)?;
        self.replace_grid(VoxelGrid::new(size)?);
        Ok(())
    }

    /// New fully occupied grid of `size`.
    pub fn fill(&mut self, size: usize) -> Result<(), EditError> {
        self.check_size(size)?;
        self.replace_grid(VoxelGrid::filled(size)?);
        Ok(())
    }

    /// Keeps the current size and leaves a single centered voxel.
    pub fn clear_to_center(&mut self) -> Result<(), EditError> {
        let grid = VoxelGrid::single_center(self.grid.size())?;
        self.replace_grid(grid);
        Ok(())
    }

    /// Resamples the current shape to `target`. Returns the number of voxels cropped away.
    pub fn set_grid_size(&mut self, target: usize) -> Result<usize, EditError> {
        self.check_size(target)?;
        if target == self.grid.size() {
            return Ok(0);
        }
        let resized = resample(&self.grid, target)?;
        let lost = lost_voxels(&self.grid, &resized);
        if lost > 0 {
            log::warn!(
                target: "edit",
                "shrinking {} -> {} dropped {} voxel(s)",
                self.grid.size(),
                target,
                lost
            );
        }
        self.replace_grid(resized);
        Ok(lost)
    }

    pub fn validate(&self) -> ValidationResult {
        validate(&self.grid, self.config.adjacency)
    }

    /// Encodes the shape, refusing invalid shapes and out-of-range metadata.
    pub fn export(&self) -> Result<ShapePayload, EditError> {
        let result = self.validate();
        if !result.is_valid() {
            log::warn!(target: "edit", "export blocked: {}", result.errors.join("; "));
            return Err(EditError::InvalidShape(result.errors));
        }
        let errors = metadata_errors(&self.metadata);
        if !errors.is_empty() {
            log::warn!(target: "edit", "export blocked: {}", errors.join("; "));
            return Err(EditError::InvalidMetadata(errors));
        }
        Ok(encode(&self.grid, &self.metadata))
    }

    /// Loads a payload into the active grid size, resampling when sizes differ.
    pub fn import(&mut self, payload: &ShapePayload) -> Result<ImportReport, EditError> {
        let target = self.grid.size();
        let shape = decode_with_resize(payload, target)?;
        let stored = payload
            .voxel_data_string
            .chars()
            .filter(|c| *c == '1')
            .count();
        let lost = stored.saturating_sub(shape.grid.occupied_count());
        if shape.was_converted {
            log::info!(
                target: "edit",
                "converted imported shape {} -> {}",
                shape.original_size,
                target
            );
        }
        if lost > 0 {
            log::warn!(target: "edit", "import cropped {} voxel(s)", lost);
        }
        self.metadata = shape.metadata;
        self.replace_grid(shape.grid);
        Ok(ImportReport {
            original_size: shape.original_size,
            was_converted: shape.was_converted,
            lost_voxels: lost,
        })
    }
}
