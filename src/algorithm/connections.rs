//! Candidate connection discovery and randomized region merging
//!
//! A candidate connection is a closed wall between two existing tiles in
//! different regions. Connections are grouped per source region; the merge
//! loop repeatedly opens one randomly-chosen connection and folds the two
//! regions into one, until no region has an outgoing candidate left. The
//! outcome is equivalent to a randomized spanning structure over the
//! region-adjacency multigraph.

use rand::{Rng, rngs::StdRng};

use crate::algorithm::choose;
use crate::io::error::{GenerationError, Result};
use crate::spatial::TileGrid;
use crate::spatial::coords::{Coords, Direction};

/// A removable wall between two tiles in different regions
///
/// Ephemeral; generated and consumed entirely within this stage. The region
/// ids are snapshots that get rewritten as merges progress.
#[derive(Clone, Copy, Debug)]
pub struct Connection {
    /// Tile on the near side of the wall
    pub source: Coords,
    /// Tile on the far side of the wall
    pub target: Coords,
    /// Direction from source to target
    pub direction: Direction,
    /// Current region of the source tile
    pub source_region: usize,
    /// Current region of the target tile
    pub target_region: usize,
}

/// Merge all regions into one by opening randomly-chosen candidate walls
///
/// # Errors
///
/// Returns [`GenerationError::UnreachableRegions`] when the candidate set is
/// exhausted while more than one region still owns tiles, or when the merge
/// loop fails to converge within the region count. Either indicates a sealed
/// region, which would leave the dungeon disconnected.
pub fn connect_regions(grid: &mut TileGrid, rng: &mut StdRng) -> Result<()> {
    let region_count = grid.region_count();
    let mut candidates = find_candidates(grid);

    let mut active: Vec<usize> = (0..region_count)
        .filter(|&region| {
            candidates
                .get(region)
                .is_some_and(|list| !list.is_empty())
        })
        .collect();

    let mut merges = 0usize;
    while let Some(region) = choose(rng, &active) {
        let Some(connection) = candidates.get(region).and_then(|list| choose(rng, list)) else {
            break;
        };

        grid.open_wall(connection.source, connection.direction);

        let near = connection.source_region;
        let far = connection.target_region;
        let winner = if rng.random_range(0..2) == 0 { near } else { far };
        let loser = if winner == near { far } else { near };

        grid.merge_regions(winner, loser);

        // Rewriting endpoint ids also drops every remaining direct
        // candidate between the two merged regions.
        for list in &mut candidates {
            list.retain_mut(|candidate| {
                if candidate.source_region == near || candidate.source_region == far {
                    candidate.source_region = winner;
                }
                if candidate.target_region == near || candidate.target_region == far {
                    candidate.target_region = winner;
                }
                candidate.source_region != candidate.target_region
            });
        }

        let moved = candidates
            .get_mut(loser)
            .map(std::mem::take)
            .unwrap_or_default();
        if let Some(list) = candidates.get_mut(winner) {
            list.extend(moved);
        }

        active.retain(|&id| candidates.get(id).is_some_and(|list| !list.is_empty()));

        merges += 1;
        if merges > region_count {
            return Err(GenerationError::UnreachableRegions {
                remaining: grid.populated_region_count(),
            });
        }
    }

    let remaining = grid.populated_region_count();
    if remaining > 1 {
        return Err(GenerationError::UnreachableRegions { remaining });
    }

    Ok(())
}

// Walk every region's tile list in order and record, per tile and side, the
// closed walls whose far tile exists in a different region.
fn find_candidates(grid: &TileGrid) -> Vec<Vec<Connection>> {
    let region_count = grid.region_count();
    let mut candidates: Vec<Vec<Connection>> = vec![Vec::new(); region_count];

    for region in 0..region_count {
        for &coords in grid.region_tiles(region) {
            let Some(tile) = grid.get(coords) else {
                continue;
            };
            for direction in Direction::ALL {
                if !tile.has_wall(direction) {
                    continue;
                }
                let target = coords.step(direction);
                let Some(neighbor) = grid.get(target) else {
                    continue;
                };
                if neighbor.region == tile.region {
                    continue;
                }
                if let Some(list) = candidates.get_mut(tile.region) {
                    list.push(Connection {
                        source: coords,
                        target,
                        direction,
                        source_region: tile.region,
                        target_region: neighbor.region,
                    });
                }
            }
        }
    }

    candidates
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spatial::tiles::{CORNER_ALL, Tile, WALL_ALL};
    use rand::SeedableRng;

    // Two fully-walled blocks separated by an empty column have no candidate
    // walls at all; the connector must flag the construction gap instead of
    // returning a disconnected grid.
    #[test]
    fn test_sealed_regions_are_an_error() {
        let mut grid = TileGrid::new(7, 3);
        for base_x in [0, 4] {
            let region = grid.allocate_region();
            for x in base_x..base_x + 3 {
                for y in 0..3 {
                    grid.place_tile(Coords::new(x, y), Tile::new(region, WALL_ALL, CORNER_ALL));
                }
            }
        }

        let mut rng = StdRng::seed_from_u64(1);
        let result = connect_regions(&mut grid, &mut rng);

        assert!(matches!(
            result,
            Err(GenerationError::UnreachableRegions { remaining: 2 })
        ));
    }

    #[test]
    fn test_adjacent_regions_merge_through_shared_wall() {
        let mut grid = TileGrid::new(2, 1);
        let left = grid.allocate_region();
        let right = grid.allocate_region();
        grid.place_tile(Coords::new(0, 0), Tile::new(left, WALL_ALL, CORNER_ALL));
        grid.place_tile(Coords::new(1, 0), Tile::new(right, WALL_ALL, CORNER_ALL));

        let mut rng = StdRng::seed_from_u64(5);
        connect_regions(&mut grid, &mut rng).unwrap();

        assert_eq!(grid.populated_region_count(), 1);
        let first = grid.get(Coords::new(0, 0)).unwrap();
        let second = grid.get(Coords::new(1, 0)).unwrap();
        assert_eq!(first.region, second.region);
        assert!(!first.has_wall(Direction::East));
        assert!(!second.has_wall(Direction::West));
    }

    #[test]
    fn test_single_region_is_a_valid_terminal_case() {
        let mut grid = TileGrid::new(1, 1);
        let region = grid.allocate_region();
        grid.place_tile(Coords::new(0, 0), Tile::new(region, WALL_ALL, CORNER_ALL));

        let mut rng = StdRng::seed_from_u64(2);
        assert!(connect_regions(&mut grid, &mut rng).is_ok());
    }
}
