//! Integer grid coordinates and the four cardinal directions
//!
//! Directions carry the numeric wall-bit convention the rest of the crate
//! depends on: bit 0 is north, then east, south and west clockwise. The
//! corner bits follow the same rotation starting at the north-east corner.

use crate::spatial::tiles::{
    CORNER_NORTH_EAST, CORNER_NORTH_WEST, CORNER_SOUTH_EAST, CORNER_SOUTH_WEST, WALL_EAST,
    WALL_NORTH, WALL_SOUTH, WALL_WEST,
};

/// A tile position on the dungeon grid
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coords {
    /// Column, increasing eastwards
    pub x: i32,
    /// Row, increasing northwards
    pub y: i32,
}

impl Coords {
    /// Create coordinates from column and row
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The adjacent coordinates one step in the given direction
    pub const fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.offset();
        Self::new(self.x + dx, self.y + dy)
    }

    /// The adjacent coordinates given a raw offset
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

/// One of the four axis directions on the grid
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    /// Towards positive y
    North,
    /// Towards positive x
    East,
    /// Towards negative y
    South,
    /// Towards negative x
    West,
}

impl Direction {
    /// All directions in wall-bit order
    pub const ALL: [Self; 4] = [Self::North, Self::East, Self::South, Self::West];

    /// The wall bit guarding this side of a tile
    pub const fn wall_bit(self) -> u8 {
        match self {
            Self::North => WALL_NORTH,
            Self::East => WALL_EAST,
            Self::South => WALL_SOUTH,
            Self::West => WALL_WEST,
        }
    }

    /// The two corner bits adjacent to this side of a tile
    ///
    /// A wall along one side touches exactly two of the tile's corner
    /// points; these are the posts that become candidates for removal when
    /// the wall is opened.
    pub const fn corner_bits(self) -> u8 {
        match self {
            Self::North => CORNER_NORTH_EAST | CORNER_NORTH_WEST,
            Self::East => CORNER_NORTH_EAST | CORNER_SOUTH_EAST,
            Self::South => CORNER_SOUTH_EAST | CORNER_SOUTH_WEST,
            Self::West => CORNER_SOUTH_WEST | CORNER_NORTH_WEST,
        }
    }

    /// The direction pointing back at this one
    pub const fn opposite(self) -> Self {
        match self {
            Self::North => Self::South,
            Self::East => Self::West,
            Self::South => Self::North,
            Self::West => Self::East,
        }
    }

    /// Unit offset of this direction as `(dx, dy)`
    pub const fn offset(self) -> (i32, i32) {
        match self {
            Self::North => (0, 1),
            Self::East => (1, 0),
            Self::South => (0, -1),
            Self::West => (-1, 0),
        }
    }
}
