//! Self-avoiding randomized-walk corridor growth
//!
//! Every cell left empty after room placement seeds a depth-first walk that
//! floods the reachable empty space around it. A walk prefers to keep its
//! previous heading (straight-corridor bias controlled by `windiness`) and
//! records the coordinates where growth stalled as dead ends for the
//! resolver stage.

use rand::{Rng, rngs::StdRng};

use crate::algorithm::choose;
use crate::spatial::TileGrid;
use crate::spatial::coords::{Coords, Direction};
use crate::spatial::tiles::{CORNER_ALL, Tile, WALL_ALL};

/// Fill all empty cells with corridor regions
///
/// Cells are scanned in fixed column-major order; each still-empty cell
/// starts a new region and a new walk. Returns every recorded dead end, in
/// discovery order. The list may contain duplicates.
pub fn carve_corridors(grid: &mut TileGrid, rng: &mut StdRng, windiness: f64) -> Vec<Coords> {
    let mut dead_ends = Vec::new();

    for x in 0..grid.width() {
        for y in 0..grid.height() {
            let seed = Coords::new(x, y);
            if !grid.contains(seed) {
                let region = grid.allocate_region();
                walk(grid, rng, windiness, seed, region, &mut dead_ends);
            }
        }
    }

    dead_ends
}

// One complete depth-first walk from a seed cell. The seed starts fully
// walled and all four of its corner posts marked; every growth step opens
// the shared wall between the current tile and the new one.
fn walk(
    grid: &mut TileGrid,
    rng: &mut StdRng,
    windiness: f64,
    seed: Coords,
    region: usize,
    dead_ends: &mut Vec<Coords>,
) {
    grid.place_tile(seed, Tile::new(region, WALL_ALL, CORNER_ALL));

    let mut stack = vec![seed];
    // The start of a walk is always a dead end
    dead_ends.push(seed);

    let mut previous: Option<Direction> = None;
    let mut grew = false;

    while let Some(&current) = stack.last() {
        let mut candidates: Vec<Direction> = Vec::with_capacity(4);
        for direction in Direction::ALL {
            let next = current.step(direction);
            if grid.in_bounds(next) && !grid.contains(next) {
                candidates.push(direction);
            }
        }

        if candidates.is_empty() {
            // Only the tip of a growth run counts; cells revisited while
            // backtracking are not dead ends.
            if grew {
                dead_ends.push(current);
            }
            grew = false;
            stack.pop();
            continue;
        }

        let picked = match previous {
            Some(kept) if candidates.contains(&kept) && rng.random::<f64>() >= windiness => {
                Some(kept)
            }
            _ => choose(rng, &candidates),
        };
        let Some(direction) = picked else {
            continue;
        };

        let next = current.step(direction);
        grid.place_tile(next, Tile::new(region, WALL_ALL, CORNER_ALL));
        grid.open_wall(current, direction);
        stack.push(next);
        previous = Some(direction);
        grew = true;
    }
}
