//! Validates the structural properties of complete generation runs: wall
//! symmetry, region merging, connectivity, determinism and dead-end
//! resolution behavior.

use std::collections::{BTreeMap, VecDeque};

use dungen::algorithm::connections::connect_regions;
use dungen::algorithm::corridors::carve_corridors;
use dungen::algorithm::deadends::resolve_dead_ends;
use dungen::algorithm::rooms::place_rooms;
use dungen::spatial::TileGrid;
use dungen::spatial::coords::{Coords, Direction};
use dungen::{DungeonConfig, GenerationError, generate};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn base_config() -> DungeonConfig {
    DungeonConfig {
        width: 24,
        height: 16,
        room_density: 12,
        min_room_width: 3,
        max_room_width: 6,
        min_room_height: 3,
        max_room_height: 5,
        windiness: 0.4,
        undo_open_chance: 0.3,
        remove_pillars: true,
        seed: 7,
    }
}

fn assert_wall_symmetry(grid: &TileGrid) {
    for (coords, tile) in grid.tiles() {
        for direction in Direction::ALL {
            if let Some(neighbor) = grid.get(coords.step(direction)) {
                assert_eq!(
                    tile.has_wall(direction),
                    neighbor.has_wall(direction.opposite()),
                    "asymmetric wall at {coords:?} towards {direction:?}"
                );
            }
        }
    }
}

// Breadth-first search over open walls only
fn reachable_tiles(grid: &TileGrid, start: Coords) -> usize {
    let mut seen = std::collections::HashSet::new();
    let mut queue = VecDeque::from([start]);
    seen.insert(start);
    while let Some(coords) = queue.pop_front() {
        let Some(tile) = grid.get(coords) else {
            continue;
        };
        for direction in Direction::ALL {
            let next = coords.step(direction);
            if !tile.has_wall(direction) && grid.contains(next) && seen.insert(next) {
                queue.push_back(next);
            }
        }
    }
    seen.len()
}

fn snapshot(grid: &TileGrid) -> BTreeMap<(i32, i32), (u8, u8)> {
    grid.tiles()
        .map(|(coords, tile)| ((coords.x, coords.y), (tile.walls, tile.corners)))
        .collect()
}

#[test]
fn test_walls_are_symmetric_after_generation() {
    let grid = generate(&base_config()).unwrap();
    assert!(grid.tile_count() > 0);
    assert_wall_symmetry(&grid);
}

#[test]
fn test_all_tiles_share_one_region() {
    let grid = generate(&base_config()).unwrap();
    let mut regions: Vec<usize> = grid.tiles().map(|(_, tile)| tile.region).collect();
    regions.sort_unstable();
    regions.dedup();
    assert_eq!(regions.len(), 1);
}

#[test]
fn test_every_tile_is_reachable_over_open_walls() {
    let grid = generate(&base_config()).unwrap();
    let start = grid
        .tiles()
        .map(|(coords, _)| coords)
        .min()
        .expect("generated grid has tiles");
    assert_eq!(reachable_tiles(&grid, start), grid.tile_count());
}

#[test]
fn test_identical_seed_reproduces_identical_grid() {
    let config = base_config();
    let first = generate(&config).unwrap();
    let second = generate(&config).unwrap();
    assert_eq!(snapshot(&first), snapshot(&second));
}

#[test]
fn test_different_seeds_usually_differ() {
    let config = base_config();
    let other = DungeonConfig {
        seed: config.seed + 1,
        ..config
    };
    let first = generate(&config).unwrap();
    let second = generate(&other).unwrap();
    assert_ne!(snapshot(&first), snapshot(&second));
}

#[test]
fn test_accepted_rooms_never_overlap() {
    let mut grid = TileGrid::new(32, 24);
    let mut rng = StdRng::seed_from_u64(11);
    let config = DungeonConfig {
        width: 32,
        height: 24,
        room_density: 60,
        ..base_config()
    };

    let rooms = place_rooms(&mut grid, &mut rng, &config);

    assert!(rooms.len() > 1, "expected several accepted rooms");
    for (index, room) in rooms.iter().enumerate() {
        for other in rooms.iter().skip(index + 1) {
            assert!(
                !room.overlaps(other.coords, other.top_right()),
                "rooms {room:?} and {other:?} overlap"
            );
        }
    }
}

// Corridor-only grid with no winding: one region covers every cell and the
// walk keeps straight runs until a boundary or a visited cell forces a turn.
// Full undo chance turns both walk endpoints into loop junctions, so no
// tile is trimmed away afterwards.
#[test]
fn test_corridor_only_grid_is_one_serpentine_region() {
    let config = DungeonConfig {
        width: 5,
        height: 5,
        room_density: 0,
        windiness: 0.0,
        undo_open_chance: 1.0,
        seed: 42,
        ..base_config()
    };
    let grid = generate(&config).unwrap();

    assert_eq!(grid.tile_count(), 25);
    assert_wall_symmetry(&grid);
    let start = grid.tiles().map(|(coords, _)| coords).min().unwrap();
    assert_eq!(reachable_tiles(&grid, start), 25);

    let mut regions: Vec<usize> = grid.tiles().map(|(_, tile)| tile.region).collect();
    regions.sort_unstable();
    regions.dedup();
    assert_eq!(regions.len(), 1);

    // Straight-corridor bias: most cells continue the previous heading, so
    // pass-through tiles (two opposite openings) dominate over corners.
    let straight = grid
        .tiles()
        .filter(|(_, tile)| {
            let north_south = !tile.has_wall(Direction::North) && !tile.has_wall(Direction::South);
            let east_west = !tile.has_wall(Direction::East) && !tile.has_wall(Direction::West);
            tile.open_side_count() == 2 && (north_south || east_west)
        })
        .count();
    assert!(straight >= 10, "expected long straight runs, got {straight}");
}

#[test]
fn test_full_undo_chance_eliminates_simple_dead_ends() {
    let mut grid = TileGrid::new(9, 9);
    let mut rng = StdRng::seed_from_u64(3);

    let dead_ends = carve_corridors(&mut grid, &mut rng, 0.5);
    connect_regions(&mut grid, &mut rng).unwrap();

    let single_before = grid
        .tiles()
        .filter(|(_, tile)| tile.open_side_count() == 1)
        .count();
    assert!(single_before > 0, "tree-shaped corridor needs dead ends");

    resolve_dead_ends(&mut grid, &mut rng, &dead_ends, 1.0, true).unwrap();

    let single_after = grid
        .tiles()
        .filter(|(_, tile)| tile.open_side_count() == 1)
        .count();
    let isolated_after = grid
        .tiles()
        .filter(|(_, tile)| tile.open_side_count() == 0)
        .count();

    assert!(single_after < single_before);
    assert_eq!(isolated_after, 0);
    assert_wall_symmetry(&grid);
}

// With pillar removal enabled, a corner bit must be set exactly when one of
// the up-to-four wall segments meeting at the point is closed.
#[test]
fn test_corner_bits_match_incident_walls() {
    let config = DungeonConfig {
        undo_open_chance: 0.6,
        seed: 11,
        ..base_config()
    };
    let grid = generate(&config).unwrap();

    // Sharers of each corner point, rotating so sharer k owns the point as
    // its corner (i + k) % 4.
    let sharers: [[(i32, i32); 4]; 4] = [
        [(0, 0), (0, 1), (1, 1), (1, 0)],
        [(0, 0), (1, 0), (1, -1), (0, -1)],
        [(0, 0), (0, -1), (-1, -1), (-1, 0)],
        [(0, 0), (-1, 0), (-1, 1), (0, 1)],
    ];

    for (coords, tile) in grid.tiles() {
        for (corner, offsets) in sharers.iter().enumerate() {
            let necessary = offsets.iter().enumerate().any(|(slot, &(dx, dy))| {
                let point_corner = (corner + slot) % 4;
                let incident = (1u8 << point_corner) | (1u8 << ((point_corner + 1) % 4));
                grid.get(coords.offset(dx, dy))
                    .is_some_and(|sharer| sharer.walls & incident != 0)
            });
            assert_eq!(
                tile.corners & (1 << corner) != 0,
                necessary,
                "corner {corner} mismatch at {coords:?}"
            );
        }
    }
}

#[test]
fn test_configuration_violations_fail_before_generation() {
    let too_small = DungeonConfig {
        width: 1,
        ..base_config()
    };
    assert!(matches!(
        generate(&too_small),
        Err(GenerationError::InvalidParameter { parameter: "width", .. })
    ));

    let inverted = DungeonConfig {
        min_room_height: 9,
        max_room_height: 3,
        ..base_config()
    };
    assert!(generate(&inverted).is_err());

    let out_of_range = DungeonConfig {
        undo_open_chance: -0.1,
        ..base_config()
    };
    assert!(generate(&out_of_range).is_err());
}

#[test]
fn test_oversized_room_bounds_degenerate_to_corridors() {
    // Rooms can never fit, so every attempt is skipped and the grid fills
    // with corridors alone.
    let config = DungeonConfig {
        width: 4,
        height: 4,
        room_density: 10,
        min_room_width: 8,
        max_room_width: 9,
        min_room_height: 8,
        max_room_height: 9,
        ..base_config()
    };
    let grid = generate(&config).unwrap();
    assert!(grid.tile_count() > 0);
    let start = grid.tiles().map(|(coords, _)| coords).min().unwrap();
    assert_eq!(reachable_tiles(&grid, start), grid.tile_count());
}
