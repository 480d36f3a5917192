use hashbrown::HashSet;
use proptest::prelude::*;
use sculpt_grid::{VoxelGrid, VoxelPos};
use sculpt_shape::{Adjacency, find_components_with, find_connected_components, is_connected, validate};

fn arb_grid() -> impl Strategy<Value = VoxelGrid> {
    (1usize..=5)
        .prop_flat_map(|n| {
            (
                Just(n),
                proptest::collection::vec(prop::bool::weighted(0.4), n * n * n),
            )
        })
        .prop_map(|(n, cells)| VoxelGrid::from_cells(n, cells).unwrap())
}

fn arb_rule() -> impl Strategy<Value = Adjacency> {
    prop::sample::select(Adjacency::ALL.to_vec())
}

// Rebuilds a grid containing only the given cells.
fn grid_of(size: usize, cells: &[VoxelPos]) -> VoxelGrid {
    let mut g = VoxelGrid::new(size).unwrap();
    for p in cells {
        g.set(p.x, p.y, p.z, true).unwrap();
    }
    g
}

proptest! {
    // components partition the occupied set with no duplicates
    #[test]
    fn components_partition_occupied_cells(g in arb_grid()) {
        let comps = find_connected_components(&g);
        let mut seen = HashSet::new();
        for c in &comps {
            prop_assert!(!c.is_empty());
            for p in c {
                prop_assert!(g.is_occupied_at(*p));
                prop_assert!(seen.insert(*p));
            }
        }
        let occupied: HashSet<VoxelPos> = g.occupied_positions().collect();
        prop_assert_eq!(seen, occupied);
    }

    // each component is itself face-connected
    #[test]
    fn each_component_is_connected(g in arb_grid()) {
        for c in find_connected_components(&g) {
            prop_assert!(is_connected(&grid_of(g.size(), &c), Adjacency::Face));
        }
    }

    // seeds appear in scan order
    #[test]
    fn components_ordered_by_seed(g in arb_grid()) {
        let seeds: Vec<VoxelPos> = find_connected_components(&g).iter().map(|c| c[0]).collect();
        prop_assert!(seeds.windows(2).all(|w| w[0] < w[1]));
    }

    // connected under a weaker rule implies connected under every stronger one
    #[test]
    fn connectivity_is_monotonic_in_rule(g in arb_grid()) {
        let face = is_connected(&g, Adjacency::Face);
        let edge = is_connected(&g, Adjacency::Edge);
        let corner = is_connected(&g, Adjacency::Corner);
        prop_assert!(!face || edge);
        prop_assert!(!edge || corner);
    }

    // is_connected agrees with the component count under the same rule
    #[test]
    fn is_connected_matches_component_count(g in arb_grid(), rule in arb_rule()) {
        let comps = find_components_with(&g, rule);
        prop_assert_eq!(is_connected(&g, rule), comps.len() == 1);
    }

    // errors are empty exactly when the shape is valid
    #[test]
    fn validation_errors_track_verdict(g in arb_grid(), rule in arb_rule()) {
        let res = validate(&g, rule);
        prop_assert_eq!(res.errors.is_empty(), res.is_valid());
        prop_assert_eq!(res.voxel_count, g.occupied_count());
        prop_assert_eq!(res.has_voxels, g.has_voxels());
        if res.has_voxels {
            let first = res.details.components.first().map(|c| c.len()).unwrap_or(0);
            prop_assert_eq!(res.details.floating_voxels.len(), res.voxel_count - first);
        }
    }
}
