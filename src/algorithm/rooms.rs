//! Rectangular room placement with overlap rejection
//!
//! A configured number of placement attempts each draw a random extent and
//! position; attempts that do not fit the dungeon or that intersect an
//! accepted room are discarded. Each accepted room becomes its own region of
//! fully-walled boundary tiles.

use rand::{Rng, rngs::StdRng};

use crate::algorithm::executor::DungeonConfig;
use crate::spatial::TileGrid;
use crate::spatial::coords::{Coords, Direction};
use crate::spatial::tiles::Tile;

/// An accepted room rectangle
///
/// Immutable once placed; consulted only for overlap testing against later
/// attempts. Tiles carry all the state that matters afterwards.
#[derive(Clone, Copy, Debug)]
pub struct Room {
    /// Bottom-left tile of the rectangle
    pub coords: Coords,
    /// Extent in tiles as `(width, height)`
    pub dimensions: (i32, i32),
    /// Region id owning the room's tiles
    pub region: usize,
}

impl Room {
    /// Top-right tile of the rectangle (inclusive)
    pub const fn top_right(&self) -> Coords {
        Coords::new(
            self.coords.x + self.dimensions.0 - 1,
            self.coords.y + self.dimensions.1 - 1,
        )
    }

    /// Strict axis-aligned intersection against another inclusive rectangle
    ///
    /// Touching edges do not count as overlap; rooms may sit flush against
    /// each other.
    pub const fn overlaps(&self, bottom_left: Coords, top_right: Coords) -> bool {
        let own_top_right = self.top_right();
        !(bottom_left.y > own_top_right.y
            || self.coords.y > top_right.y
            || bottom_left.x > own_top_right.x
            || self.coords.x > top_right.x)
    }
}

/// Place rooms for the configured number of attempts
///
/// Returns the accepted rooms. Attempts whose drawn extent exceeds the
/// dungeon are silently skipped before any position is drawn; rejected
/// attempts consume no region id.
pub fn place_rooms(grid: &mut TileGrid, rng: &mut StdRng, config: &DungeonConfig) -> Vec<Room> {
    let mut rooms: Vec<Room> = Vec::new();

    for _ in 0..config.room_density {
        let width = rng.random_range(config.min_room_width..=config.max_room_width);
        let height = rng.random_range(config.min_room_height..=config.max_room_height);

        if width > grid.width() || height > grid.height() {
            continue;
        }

        let bottom_left = Coords::new(
            rng.random_range(0..=grid.width() - width),
            rng.random_range(0..=grid.height() - height),
        );
        let top_right = Coords::new(bottom_left.x + width - 1, bottom_left.y + height - 1);

        if rooms
            .iter()
            .any(|room| room.overlaps(bottom_left, top_right))
        {
            continue;
        }

        let region = grid.allocate_region();
        let room = Room {
            coords: bottom_left,
            dimensions: (width, height),
            region,
        };
        fill_room(grid, &room);
        rooms.push(room);
    }

    rooms
}

// Each boundary side is tested independently so a 1-wide or 1-tall extent
// closes both opposing sides of the same tile.
fn fill_room(grid: &mut TileGrid, room: &Room) {
    let top_right = room.top_right();
    for x in room.coords.x..=top_right.x {
        for y in room.coords.y..=top_right.y {
            let mut walls = 0u8;
            let mut corners = 0u8;

            if x == room.coords.x {
                walls |= Direction::West.wall_bit();
                corners |= Direction::West.corner_bits();
            }
            if x == top_right.x {
                walls |= Direction::East.wall_bit();
                corners |= Direction::East.corner_bits();
            }
            if y == room.coords.y {
                walls |= Direction::South.wall_bit();
                corners |= Direction::South.corner_bits();
            }
            if y == top_right.y {
                walls |= Direction::North.wall_bit();
                corners |= Direction::North.corner_bits();
            }

            grid.place_tile(Coords::new(x, y), Tile::new(room.region, walls, corners));
        }
    }
}
