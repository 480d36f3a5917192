use sculpt_grid::{VoxelGrid, VoxelPos};

use crate::adjacency::Adjacency;
use crate::components::{Component, find_connected_components, is_connected};

pub const EMPTY_SHAPE_ERROR: &str = "Shape must have at least one voxel";

/// Face-rule breakdown of the occupied cells.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ValidationDetails {
    pub component_count: usize,
    pub components: Vec<Component>,
    /// Cells outside the first-discovered component.
    pub floating_voxels: Vec<VoxelPos>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidationResult {
    pub rule: Adjacency,
    pub has_voxels: bool,
    pub is_connected: bool,
    pub voxel_count: usize,
    /// Empty exactly when the shape is valid.
    pub errors: Vec<String>,
    pub details: ValidationDetails,
}

impl ValidationResult {
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.has_voxels && self.is_connected
    }

    /// A shape is uniform iff it is connected.
    #[inline]
    pub fn is_uniform(&self) -> bool {
        self.is_connected
    }
}

fn plural(count: usize) -> &'static str {
    if count == 1 { "" } else { "s" }
}

/// Decides whether `grid` may be persisted.
///
/// Diagnostics always use face adjacency while the verdict uses `rule`, so a
/// shape joined only by edges is valid under [`Adjacency::Edge`] yet still
/// reports several face components in `details`.
pub fn validate(grid: &VoxelGrid, rule: Adjacency) -> ValidationResult {
    let voxel_count = grid.occupied_count();
    if voxel_count == 0 {
        return ValidationResult {
            rule,
            has_voxels: false,
            is_connected: false,
            voxel_count,
            errors: vec![EMPTY_SHAPE_ERROR.to_string()],
            details: ValidationDetails::default(),
        };
    }

    let components = find_connected_components(grid);
    let floating_voxels: Vec<VoxelPos> = components.iter().skip(1).flatten().copied().collect();
    let connected = is_connected(grid, rule);

    let mut errors = Vec::new();
    if !connected {
        let parts = components.len();
        if parts > 1 {
            errors.push(format!(
                "All voxels must be connected {}: found {} separate part{}",
                rule.description(),
                parts,
                plural(parts)
            ));
            let extra = parts - 1;
            errors.push(format!(
                "{} floating voxel{} in {} extra group{}",
                floating_voxels.len(),
                plural(floating_voxels.len()),
                extra,
                plural(extra)
            ));
        } else {
            errors.push(format!(
                "All voxels must be connected {} (no floating parts found)",
                rule.description()
            ));
        }
    }

    ValidationResult {
        rule,
        has_voxels: true,
        is_connected: connected,
        voxel_count,
        errors,
        details: ValidationDetails {
            component_count: components.len(),
            components,
            floating_voxels,
        },
    }
}
