//! Dead-end loop-opening, stub trimming and corner recomputation
//!
//! Every coordinate recorded as a dead end during carving gets a resolution
//! pass: optionally punch an extra opening through to any existing neighbor
//! (regions are already merged, so this creates loops and shortcuts), then
//! either keep the tile as a junction or delete it as a dangling stub and
//! cascade onto the neighbor it hung from.

use rand::{Rng, rngs::StdRng};

use crate::algorithm::choose;
use crate::io::error::{GenerationError, Result};
use crate::spatial::TileGrid;
use crate::spatial::coords::{Coords, Direction};

// Offsets of the up-to-four tiles sharing each corner point, starting at the
// owning tile and rotating around the point. Sharer `k` of corner `i` holds
// the point as its own corner `(i + k) % 4`.
const CORNER_SHARERS: [[(i32, i32); 4]; 4] = [
    [(0, 0), (0, 1), (1, 1), (1, 0)],    // north-east point
    [(0, 0), (1, 0), (1, -1), (0, -1)],  // south-east point
    [(0, 0), (0, -1), (-1, -1), (-1, 0)], // south-west point
    [(0, 0), (-1, 0), (-1, 1), (0, 1)],  // north-west point
];

/// Resolve every recorded dead end
///
/// Duplicate entries and coordinates already deleted from the grid are
/// silently skipped. When `remove_pillars` is set, every loop-opening
/// recomputes corner necessity for the two posts adjacent to the opened
/// wall.
///
/// # Errors
///
/// Returns [`GenerationError::ResolutionOverflow`] if a resolution cascade
/// runs longer than the grid has tiles, which can only happen on a
/// corrupted grid.
pub fn resolve_dead_ends(
    grid: &mut TileGrid,
    rng: &mut StdRng,
    dead_ends: &[Coords],
    undo_open_chance: f64,
    remove_pillars: bool,
) -> Result<()> {
    for &start in dead_ends {
        if !grid.contains(start) {
            continue;
        }
        resolve_one(grid, rng, start, undo_open_chance, remove_pillars)?;
    }
    Ok(())
}

// Each iteration either stops (the tile has become a junction) or deletes
// exactly one tile, so the loop is bounded by the live tile count.
fn resolve_one(
    grid: &mut TileGrid,
    rng: &mut StdRng,
    start: Coords,
    undo_open_chance: f64,
    remove_pillars: bool,
) -> Result<()> {
    let limit = grid.tile_count() + 1;
    let mut current = start;

    for _ in 0..limit {
        if rng.random::<f64>() < undo_open_chance {
            try_open(grid, rng, current, remove_pillars);
        }

        let Some(tile) = grid.get(current) else {
            return Ok(());
        };
        if tile.open_side_count() >= 2 {
            return Ok(());
        }

        let exit = Direction::ALL
            .iter()
            .copied()
            .find(|&direction| !tile.has_wall(direction));

        // A tile with a single connection can be removed without
        // disconnecting anything else; zero connections is an isolated
        // artifact and simply disappears.
        grid.remove(current);

        let Some(direction) = exit else {
            return Ok(());
        };
        let next = current.step(direction);
        let Some(neighbor) = grid.get_mut(next) else {
            return Ok(());
        };
        neighbor.walls |= direction.opposite().wall_bit();
        current = next;
    }

    Err(GenerationError::ResolutionOverflow {
        position: (current.x, current.y),
        limit,
    })
}

// Attempt one loop-opening from the tile: pick uniformly among the closed
// walls that have an existing tile on the far side. No-op when none qualify.
fn try_open(grid: &mut TileGrid, rng: &mut StdRng, coords: Coords, remove_pillars: bool) {
    let Some(tile) = grid.get(coords) else {
        return;
    };

    let mut openable: Vec<Direction> = Vec::with_capacity(4);
    for direction in Direction::ALL {
        if tile.has_wall(direction) && grid.contains(coords.step(direction)) {
            openable.push(direction);
        }
    }

    if let Some(direction) = choose(rng, &openable) {
        grid.open_wall(coords, direction);
        if remove_pillars {
            update_corners(grid, coords, direction.corner_bits());
        }
    }
}

/// Recompute corner necessity for the requested corners of a tile
///
/// A corner post is necessary iff at least one of the up-to-four wall
/// segments meeting at that point is closed. Missing sharers count as no
/// wall. The shared bit is set or cleared on every tile that shares the
/// point, keeping all sharers consistent.
pub fn update_corners(grid: &mut TileGrid, coords: Coords, corner_mask: u8) {
    if !grid.contains(coords) {
        return;
    }

    for (corner, offsets) in CORNER_SHARERS.iter().enumerate() {
        if corner_mask & (1 << corner) == 0 {
            continue;
        }

        let mut necessary = false;
        for (slot, &(dx, dy)) in offsets.iter().enumerate() {
            let point_corner = (corner + slot) % 4;
            // The two walls of this sharer incident to the point
            let incident = (1u8 << point_corner) | (1u8 << ((point_corner + 1) % 4));
            if let Some(sharer) = grid.get(coords.offset(dx, dy)) {
                if sharer.walls & incident != 0 {
                    necessary = true;
                    break;
                }
            }
        }

        for (slot, &(dx, dy)) in offsets.iter().enumerate() {
            let point_bit = 1u8 << ((corner + slot) % 4);
            if let Some(sharer) = grid.get_mut(coords.offset(dx, dy)) {
                if necessary {
                    sharer.corners |= point_bit;
                } else {
                    sharer.corners &= !point_bit;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spatial::tiles::{
        CORNER_ALL, CORNER_NORTH_EAST, CORNER_NORTH_WEST, CORNER_SOUTH_EAST, CORNER_SOUTH_WEST,
        Tile, WALL_ALL,
    };
    use rand::SeedableRng;

    // A 2x2 block with every interior wall open has nothing left to justify
    // the shared center post.
    #[test]
    fn test_fully_open_center_point_clears_shared_corner() {
        let mut grid = TileGrid::new(2, 2);
        let region = grid.allocate_region();
        for x in 0..2 {
            for y in 0..2 {
                grid.place_tile(Coords::new(x, y), Tile::new(region, WALL_ALL, CORNER_ALL));
            }
        }
        grid.open_wall(Coords::new(0, 0), Direction::North);
        grid.open_wall(Coords::new(0, 0), Direction::East);
        grid.open_wall(Coords::new(0, 1), Direction::East);
        grid.open_wall(Coords::new(1, 0), Direction::North);

        update_corners(&mut grid, Coords::new(0, 0), CORNER_NORTH_EAST);

        assert!(!grid.get(Coords::new(0, 0)).unwrap().has_corner(CORNER_NORTH_EAST));
        assert!(!grid.get(Coords::new(0, 1)).unwrap().has_corner(CORNER_SOUTH_EAST));
        assert!(!grid.get(Coords::new(1, 1)).unwrap().has_corner(CORNER_SOUTH_WEST));
        assert!(!grid.get(Coords::new(1, 0)).unwrap().has_corner(CORNER_NORTH_WEST));
    }

    #[test]
    fn test_one_closed_segment_keeps_the_post() {
        let mut grid = TileGrid::new(2, 2);
        let region = grid.allocate_region();
        for x in 0..2 {
            for y in 0..2 {
                grid.place_tile(Coords::new(x, y), Tile::new(region, WALL_ALL, CORNER_ALL));
            }
        }
        // Leave the wall between (1,0) and (1,1) closed
        grid.open_wall(Coords::new(0, 0), Direction::North);
        grid.open_wall(Coords::new(0, 0), Direction::East);
        grid.open_wall(Coords::new(0, 1), Direction::East);

        update_corners(&mut grid, Coords::new(0, 0), CORNER_NORTH_EAST);

        assert!(grid.get(Coords::new(0, 0)).unwrap().has_corner(CORNER_NORTH_EAST));
        assert!(grid.get(Coords::new(1, 1)).unwrap().has_corner(CORNER_SOUTH_WEST));
    }

    // A two-tile stub hanging off a junction collapses tile by tile when no
    // opening is ever attempted.
    #[test]
    fn test_stub_cascade_deletes_until_junction() {
        let mut grid = TileGrid::new(3, 3);
        let region = grid.allocate_region();
        for x in 0..3 {
            grid.place_tile(Coords::new(x, 0), Tile::new(region, WALL_ALL, CORNER_ALL));
        }
        grid.place_tile(Coords::new(1, 1), Tile::new(region, WALL_ALL, CORNER_ALL));
        grid.place_tile(Coords::new(1, 2), Tile::new(region, WALL_ALL, CORNER_ALL));
        grid.open_wall(Coords::new(0, 0), Direction::East);
        grid.open_wall(Coords::new(1, 0), Direction::East);
        grid.open_wall(Coords::new(1, 0), Direction::North);
        grid.open_wall(Coords::new(1, 1), Direction::North);

        let mut rng = StdRng::seed_from_u64(0);
        resolve_dead_ends(&mut grid, &mut rng, &[Coords::new(1, 2)], 0.0, false).unwrap();

        assert!(!grid.contains(Coords::new(1, 2)));
        assert!(!grid.contains(Coords::new(1, 1)));
        // (1,0) keeps its east and west openings and survives as a corridor
        assert!(grid.contains(Coords::new(1, 0)));
        let junction = grid.get(Coords::new(1, 0)).unwrap();
        assert!(junction.has_wall(Direction::North));
        assert_eq!(junction.open_side_count(), 2);
    }
}
