//! Flood-fill component discovery over occupied cells.

use hashbrown::HashSet;
use sculpt_grid::{VoxelGrid, VoxelPos};
use std::collections::VecDeque;

use crate::adjacency::{Adjacency, FACE_OFFSETS, Offset};

/// Occupied cells reachable from one seed, in breadth-first visitation order.
pub type Component = Vec<VoxelPos>;

// Visited keys are packed linear indices. A cell is marked when enqueued.
// Visitation order is recorded only when `order` is given.
fn flood(
    grid: &VoxelGrid,
    seed: VoxelPos,
    offsets: &[Offset],
    visited: &mut HashSet<usize>,
    mut order: Option<&mut Component>,
) {
    let n = grid.size();
    let mut queue = VecDeque::new();
    visited.insert(seed.index(n));
    queue.push_back(seed);
    while let Some(p) = queue.pop_front() {
        if let Some(out) = order.as_deref_mut() {
            out.push(p);
        }
        for &off in offsets {
            let Some(q) = grid.neighbor(p, off) else {
                continue;
            };
            if grid.is_occupied_at(q) && visited.insert(q.index(n)) {
                queue.push_back(q);
            }
        }
    }
}

/// Face-adjacent components, ordered by the scan position of their seed.
pub fn find_connected_components(grid: &VoxelGrid) -> Vec<Component> {
    collect_components(grid, &FACE_OFFSETS)
}

/// Same partition as [`find_connected_components`] under an arbitrary rule.
pub fn find_components_with(grid: &VoxelGrid, rule: Adjacency) -> Vec<Component> {
    collect_components(grid, rule.offsets())
}

fn collect_components(grid: &VoxelGrid, offsets: &[Offset]) -> Vec<Component> {
    let n = grid.size();
    let mut visited = HashSet::new();
    let mut components = Vec::new();
    for pos in grid.occupied_positions() {
        if visited.contains(&pos.index(n)) {
            continue;
        }
        let mut component = Vec::new();
        flood(grid, pos, offsets, &mut visited, Some(&mut component));
        components.push(component);
    }
    components
}

/// True when every occupied cell is reachable from the first one under `rule`.
///
/// An empty grid is not connected; a single voxel always is.
pub fn is_connected(grid: &VoxelGrid, rule: Adjacency) -> bool {
    let total = grid.occupied_count();
    match total {
        0 => false,
        1 => true,
        _ => {
            let Some(seed) = grid.occupied_positions().next() else {
                return false;
            };
            let mut visited = HashSet::with_capacity(total);
            flood(grid, seed, rule.offsets(), &mut visited, None);
            visited.len() == total
        }
    }
}
