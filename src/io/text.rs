//! ASCII rendering of finished layouts
//!
//! A layout maps onto a `(2*height + 1) x (2*width + 1)` character lattice:
//! tile centers at odd/odd positions, wall segments between them, corner
//! posts at even/even lattice points. Useful for quick terminal inspection
//! and for tests that want a human-readable diff.

use crate::spatial::TileGrid;
use crate::spatial::coords::Direction;
use crate::spatial::tiles::{
    CORNER_NORTH_EAST, CORNER_NORTH_WEST, CORNER_SOUTH_EAST, CORNER_SOUTH_WEST,
};

/// Character for unexcavated space
pub const CHAR_VOID: char = ' ';
/// Character for floors and open passages
pub const CHAR_FLOOR: char = '.';
/// Character for a closed wall segment
pub const CHAR_WALL: char = '#';
/// Character for a required corner post
pub const CHAR_CORNER: char = '+';

/// Render a layout as newline-terminated ASCII rows, north row first
pub fn render_ascii(grid: &TileGrid) -> String {
    let rows = 2 * grid.height() as usize + 1;
    let cols = 2 * grid.width() as usize + 1;
    let mut lattice = vec![vec![CHAR_VOID; cols]; rows];

    for (coords, tile) in grid.tiles() {
        let center_row = 2 * (grid.height() - 1 - coords.y) as usize + 1;
        let center_col = 2 * coords.x as usize + 1;

        set(&mut lattice, center_row, center_col, CHAR_FLOOR);

        for (direction, row, col) in [
            (Direction::North, center_row - 1, center_col),
            (Direction::East, center_row, center_col + 1),
            (Direction::South, center_row + 1, center_col),
            (Direction::West, center_row, center_col - 1),
        ] {
            let glyph = if tile.has_wall(direction) {
                CHAR_WALL
            } else {
                CHAR_FLOOR
            };
            set(&mut lattice, row, col, glyph);
        }

        for (corner_bit, row, col) in [
            (CORNER_NORTH_WEST, center_row - 1, center_col - 1),
            (CORNER_NORTH_EAST, center_row - 1, center_col + 1),
            (CORNER_SOUTH_EAST, center_row + 1, center_col + 1),
            (CORNER_SOUTH_WEST, center_row + 1, center_col - 1),
        ] {
            if tile.has_corner(corner_bit) {
                set(&mut lattice, row, col, CHAR_CORNER);
            } else {
                // A post claimed by any sharing tile stays rendered
                set_if_void(&mut lattice, row, col, CHAR_FLOOR);
            }
        }
    }

    let mut output = String::with_capacity(rows * (cols + 1));
    for row in lattice {
        output.extend(row);
        output.push('\n');
    }
    output
}

fn set(lattice: &mut [Vec<char>], row: usize, col: usize, glyph: char) {
    if let Some(cell) = lattice.get_mut(row).and_then(|line| line.get_mut(col)) {
        *cell = glyph;
    }
}

fn set_if_void(lattice: &mut [Vec<char>], row: usize, col: usize, glyph: char) {
    if let Some(cell) = lattice.get_mut(row).and_then(|line| line.get_mut(col)) {
        if *cell == CHAR_VOID {
            *cell = glyph;
        }
    }
}
