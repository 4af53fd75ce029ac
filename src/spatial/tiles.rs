//! Tile records and the wall/corner bitmask encoding
//!
//! Both masks are 4-bit fields stored in a byte. Wall bits run clockwise
//! from north (`bit0 = north`, `bit1 = east`, `bit2 = south`, `bit3 = west`);
//! corner bits run clockwise from the north-east post (`bit0 = north-east`,
//! `bit1 = south-east`, `bit2 = south-west`, `bit3 = north-west`). Downstream
//! renderers depend on these numeric values.

use crate::spatial::coords::Direction;

/// Wall bit for the north side of a tile
pub const WALL_NORTH: u8 = 1;
/// Wall bit for the east side of a tile
pub const WALL_EAST: u8 = 2;
/// Wall bit for the south side of a tile
pub const WALL_SOUTH: u8 = 4;
/// Wall bit for the west side of a tile
pub const WALL_WEST: u8 = 8;
/// All four walls closed
pub const WALL_ALL: u8 = WALL_NORTH | WALL_EAST | WALL_SOUTH | WALL_WEST;

/// Corner bit for the north-east post of a tile
pub const CORNER_NORTH_EAST: u8 = 1;
/// Corner bit for the south-east post of a tile
pub const CORNER_SOUTH_EAST: u8 = 2;
/// Corner bit for the south-west post of a tile
pub const CORNER_SOUTH_WEST: u8 = 4;
/// Corner bit for the north-west post of a tile
pub const CORNER_NORTH_WEST: u8 = 8;
/// All four corner posts required
pub const CORNER_ALL: u8 =
    CORNER_NORTH_EAST | CORNER_SOUTH_EAST | CORNER_SOUTH_WEST | CORNER_NORTH_WEST;

/// A single occupied grid cell
///
/// Created by the room placer or the corridor carver, mutated by every later
/// stage, and possibly deleted again by the dead-end resolver. The `region`
/// id is only meaningful while the tile is present in the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tile {
    /// Closed-wall bitmask, one bit per side
    pub walls: u8,
    /// Required corner-post bitmask, one bit per corner
    pub corners: u8,
    /// Connectivity region this tile currently belongs to
    pub region: usize,
}

impl Tile {
    /// Create a tile in the given region with explicit wall and corner masks
    pub const fn new(region: usize, walls: u8, corners: u8) -> Self {
        Self {
            walls,
            corners,
            region,
        }
    }

    /// Whether the wall on the given side is closed
    pub const fn has_wall(self, direction: Direction) -> bool {
        self.walls & direction.wall_bit() != 0
    }

    /// Whether the given corner post is required
    pub const fn has_corner(self, corner_bit: u8) -> bool {
        self.corners & corner_bit != 0
    }

    /// Number of open sides
    pub const fn open_side_count(self) -> u32 {
        (WALL_ALL & !self.walls).count_ones()
    }
}
