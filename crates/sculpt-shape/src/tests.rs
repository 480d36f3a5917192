use super::*;
use sculpt_grid::{VoxelGrid, VoxelPos};

fn grid_with(size: usize, cells: &[(usize, usize, usize)]) -> VoxelGrid {
    let mut g = VoxelGrid::new(size).unwrap();
    for &(x, y, z) in cells {
        g.set(x, y, z, true).unwrap();
    }
    g
}

fn plus_shape() -> VoxelGrid {
    grid_with(3, &[(1, 1, 1), (0, 1, 1), (2, 1, 1), (1, 0, 1), (1, 2, 1)])
}

#[test]
fn diagonal_pair_depends_on_rule() {
    let g = grid_with(2, &[(0, 0, 0), (1, 1, 1)]);
    assert!(!is_connected(&g, Adjacency::Face));
    assert!(!is_connected(&g, Adjacency::Edge));
    assert!(is_connected(&g, Adjacency::Corner));
}

#[test]
fn edge_pair_connects_under_edge_rule() {
    let g = grid_with(3, &[(0, 0, 0), (1, 1, 0)]);
    assert!(!is_connected(&g, Adjacency::Face));
    assert!(is_connected(&g, Adjacency::Edge));
    assert!(is_connected(&g, Adjacency::Corner));
}

#[test]
fn empty_and_single_voxel_cases() {
    let empty = VoxelGrid::new(4).unwrap();
    let single = VoxelGrid::single_center(4).unwrap();
    for rule in Adjacency::ALL {
        assert!(!is_connected(&empty, rule));
        assert!(is_connected(&single, rule));
    }
    assert!(find_connected_components(&empty).is_empty());
    assert_eq!(find_connected_components(&single), vec![vec![VoxelPos::new(2, 2, 2)]]);
}

#[test]
fn components_ordered_by_seed_scan_position() {
    // x is the outermost scan axis, so the x=0 column is discovered first
    let g = grid_with(4, &[(3, 0, 0), (0, 3, 3), (0, 3, 2)]);
    let comps = find_connected_components(&g);
    assert_eq!(comps.len(), 2);
    assert_eq!(comps[0], vec![VoxelPos::new(0, 3, 2), VoxelPos::new(0, 3, 3)]);
    assert_eq!(comps[1], vec![VoxelPos::new(3, 0, 0)]);
}

#[test]
fn component_lists_breadth_first_order() {
    // straight line along z, seeded at z=0
    let g = grid_with(4, &[(1, 1, 0), (1, 1, 1), (1, 1, 2), (1, 1, 3)]);
    let comps = find_connected_components(&g);
    assert_eq!(comps.len(), 1);
    let zs: Vec<usize> = comps[0].iter().map(|p| p.z).collect();
    assert_eq!(zs, vec![0, 1, 2, 3]);
}

#[test]
fn diagnostics_stay_face_based() {
    let g = grid_with(3, &[(0, 0, 0), (1, 1, 0)]);
    assert_eq!(find_connected_components(&g).len(), 2);
    assert_eq!(find_components_with(&g, Adjacency::Edge).len(), 1);
}

#[test]
fn plus_shape_is_valid() {
    let res = validate(&plus_shape(), Adjacency::Face);
    assert!(res.is_valid());
    assert!(res.is_uniform());
    assert!(res.errors.is_empty());
    assert_eq!(res.voxel_count, 5);
    assert_eq!(res.details.component_count, 1);
    assert!(res.details.floating_voxels.is_empty());
}

#[test]
fn empty_shape_short_circuits() {
    let res = validate(&VoxelGrid::new(3).unwrap(), Adjacency::Face);
    assert!(!res.has_voxels);
    assert!(!res.is_connected);
    assert!(!res.is_valid());
    assert_eq!(res.errors, vec![EMPTY_SHAPE_ERROR.to_string()]);
    assert_eq!(res.details.component_count, 0);
}

#[test]
fn disconnected_shape_reports_parts_and_floaters() {
    let g = grid_with(4, &[(0, 0, 0), (0, 0, 1), (3, 3, 3), (2, 0, 3), (3, 0, 3)]);
    let res = validate(&g, Adjacency::Face);
    assert!(!res.is_valid());
    assert_eq!(res.details.component_count, 3);
    assert_eq!(res.details.floating_voxels.len(), 3);
    assert_eq!(
        res.errors,
        vec![
            "All voxels must be connected by faces: found 3 separate parts".to_string(),
            "3 floating voxels in 2 extra groups".to_string(),
        ]
    );
}

#[test]
fn singular_phrasing_for_one_floater() {
    let g = grid_with(3, &[(0, 0, 0), (0, 0, 1), (2, 2, 2)]);
    let res = validate(&g, Adjacency::Corner);
    assert_eq!(
        res.errors,
        vec![
            "All voxels must be connected by faces, edges and corners: found 2 separate parts"
                .to_string(),
            "1 floating voxel in 1 extra group".to_string(),
        ]
    );
    assert_eq!(res.details.floating_voxels, vec![VoxelPos::new(2, 2, 2)]);
}

#[test]
fn edge_rule_accepts_edge_joined_shape_but_keeps_face_details() {
    let g = grid_with(3, &[(0, 0, 0), (1, 1, 0)]);
    let res = validate(&g, Adjacency::Edge);
    assert!(res.is_valid());
    assert!(res.errors.is_empty());
    assert_eq!(res.details.component_count, 2);
    assert_eq!(res.details.floating_voxels, vec![VoxelPos::new(1, 1, 0)]);
}

#[test]
fn filled_grid_is_valid_under_every_rule() {
    let g = VoxelGrid::filled(4).unwrap();
    for rule in Adjacency::ALL {
        let res = validate(&g, rule);
        assert!(res.is_valid(), "{rule}");
        assert_eq!(res.voxel_count, 64);
    }
}

#[test]
fn connectivity_check_matches_component_walk() {
    // hollow 6³ shell: one face component, interior never visited
    let n = 6;
    let mut shell = VoxelGrid::new(n).unwrap();
    for p in VoxelGrid::new(n).unwrap().positions() {
        let on_face = [p.x, p.y, p.z].iter().any(|&c| c == 0 || c == n - 1);
        shell.set(p.x, p.y, p.z, on_face).unwrap();
    }
    assert!(is_connected(&shell, Adjacency::Face));
    let parts = find_connected_components(&shell);
    assert_eq!(parts.len(), 1);
    assert_eq!(parts[0].len(), shell.occupied_count());

    // a lone interior voxel forms a second part
    shell.set(2, 2, 2, true).unwrap();
    assert!(!is_connected(&shell, Adjacency::Face));
    let parts = find_connected_components(&shell);
    assert_eq!(parts.len(), 2);
    assert_eq!(parts[1], vec![VoxelPos::new(2, 2, 2)]);
}
