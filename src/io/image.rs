//! PNG rendering of finished layouts
//!
//! A layout is rasterized onto a dense cell-code buffer first (void, floor,
//! wall, corner post) and then mapped through a fixed color table into an
//! RGBA image. Tiles span `TILE_PIXELS` pixels; wall lines and corner posts
//! are one pixel wide and shared between adjacent tiles, which works because
//! wall bits are mutually consistent across every shared edge.

use std::path::Path;

use image::{ImageBuffer, Rgba};
use ndarray::Array2;

use crate::io::configuration::TILE_PIXELS;
use crate::io::error::{GenerationError, Result};
use crate::spatial::TileGrid;
use crate::spatial::coords::Direction;
use crate::spatial::tiles::{
    CORNER_NORTH_EAST, CORNER_NORTH_WEST, CORNER_SOUTH_EAST, CORNER_SOUTH_WEST,
};

/// Cell code for unexcavated space
pub const CELL_VOID: u8 = 0;
/// Cell code for walkable floor
pub const CELL_FLOOR: u8 = 1;
/// Cell code for a wall line
pub const CELL_WALL: u8 = 2;
/// Cell code for a corner post
pub const CELL_CORNER: u8 = 3;

// RGBA per cell code: void, floor, wall, corner
const COLOR_TABLE: [[u8; 4]; 4] = [
    [0, 0, 0, 0],
    [198, 198, 198, 255],
    [46, 46, 46, 255],
    [10, 10, 10, 255],
];

/// Rasterize a layout onto a cell-code buffer
///
/// The buffer has `height * TILE_PIXELS + 1` rows and
/// `width * TILE_PIXELS + 1` columns; row 0 is the dungeon's north edge.
/// Floors are painted first, then wall lines, then corner posts, so shared
/// pixels resolve the same way regardless of tile iteration order.
pub fn rasterize(grid: &TileGrid) -> Array2<u8> {
    let pitch = TILE_PIXELS as usize;
    let rows = grid.height() as usize * pitch + 1;
    let cols = grid.width() as usize * pitch + 1;
    let mut raster = Array2::from_elem((rows, cols), CELL_VOID);

    for (coords, _) in grid.tiles() {
        let (row0, col0) = block_origin(grid, coords.x, coords.y, pitch);
        paint_rect(&mut raster, row0, col0, pitch + 1, pitch + 1, CELL_FLOOR);
    }

    for (coords, tile) in grid.tiles() {
        let (row0, col0) = block_origin(grid, coords.x, coords.y, pitch);
        if tile.has_wall(Direction::North) {
            paint_rect(&mut raster, row0, col0, 1, pitch + 1, CELL_WALL);
        }
        if tile.has_wall(Direction::South) {
            paint_rect(&mut raster, row0 + pitch, col0, 1, pitch + 1, CELL_WALL);
        }
        if tile.has_wall(Direction::West) {
            paint_rect(&mut raster, row0, col0, pitch + 1, 1, CELL_WALL);
        }
        if tile.has_wall(Direction::East) {
            paint_rect(&mut raster, row0, col0 + pitch, pitch + 1, 1, CELL_WALL);
        }
    }

    for (coords, tile) in grid.tiles() {
        let (row0, col0) = block_origin(grid, coords.x, coords.y, pitch);
        for (corner_bit, row, col) in [
            (CORNER_NORTH_WEST, row0, col0),
            (CORNER_NORTH_EAST, row0, col0 + pitch),
            (CORNER_SOUTH_EAST, row0 + pitch, col0 + pitch),
            (CORNER_SOUTH_WEST, row0 + pitch, col0),
        ] {
            if tile.has_corner(corner_bit) {
                paint_rect(&mut raster, row, col, 1, 1, CELL_CORNER);
            }
        }
    }

    raster
}

/// Export a layout as an RGBA PNG
///
/// # Errors
///
/// Returns [`GenerationError::FileSystem`] when the parent directory cannot
/// be created and [`GenerationError::ImageExport`] when encoding or writing
/// the image fails.
pub fn export_grid_as_png(grid: &TileGrid, output_path: &Path) -> Result<()> {
    let raster = rasterize(grid);
    let (rows, cols) = raster.dim();

    let image = ImageBuffer::from_fn(cols as u32, rows as u32, |x, y| {
        let code = raster.get((y as usize, x as usize)).copied().unwrap_or(CELL_VOID);
        Rgba(
            COLOR_TABLE
                .get(code as usize)
                .copied()
                .unwrap_or([0, 0, 0, 0]),
        )
    });

    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|source| GenerationError::FileSystem {
                path: parent.to_path_buf(),
                operation: "create output directory",
                source,
            })?;
        }
    }

    image
        .save(output_path)
        .map_err(|source| GenerationError::ImageExport {
            path: output_path.to_path_buf(),
            source,
        })
}

// Raster origin of a tile's block; grid y grows north, raster rows grow
// south.
const fn block_origin(grid: &TileGrid, x: i32, y: i32, pitch: usize) -> (usize, usize) {
    let row0 = (grid.height() - 1 - y) as usize * pitch;
    let col0 = x as usize * pitch;
    (row0, col0)
}

fn paint_rect(
    raster: &mut Array2<u8>,
    row0: usize,
    col0: usize,
    rows: usize,
    cols: usize,
    code: u8,
) {
    for row in row0..row0 + rows {
        for col in col0..col0 + cols {
            if let Some(cell) = raster.get_mut((row, col)) {
                *cell = code;
            }
        }
    }
}
