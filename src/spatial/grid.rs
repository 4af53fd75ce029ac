//! Sparse tile grid with per-region membership lists
//!
//! The grid maps integer coordinates to tile records and keeps an ordered
//! list of member coordinates per region. Region ids are allocated by the
//! room placer and the corridor carver and shrink to a single populated
//! region during connection. Wall mutations always go through helpers that
//! update both sides of a shared wall, keeping adjacent tiles consistent.

use std::collections::HashMap;

use crate::spatial::coords::{Coords, Direction};
use crate::spatial::tiles::Tile;

/// The dungeon layout under construction and the generator's final output
///
/// For every in-bounds coordinate the grid holds either nothing (solid rock)
/// or a tile with resolved wall and corner bitmasks. Renderers consume the
/// finished grid read-only; boundary tiles always carry closed outer walls
/// by construction, so no tile ever references space outside the extent.
#[derive(Clone, Debug)]
pub struct TileGrid {
    width: i32,
    height: i32,
    tiles: HashMap<Coords, Tile>,
    region_tiles: Vec<Vec<Coords>>,
}

impl TileGrid {
    /// Create an empty grid with the given extent
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            tiles: HashMap::new(),
            region_tiles: Vec::new(),
        }
    }

    /// Grid width in tiles
    pub const fn width(&self) -> i32 {
        self.width
    }

    /// Grid height in tiles
    pub const fn height(&self) -> i32 {
        self.height
    }

    /// Whether coordinates lie within the grid extent
    pub const fn in_bounds(&self, coords: Coords) -> bool {
        coords.x >= 0 && coords.x < self.width && coords.y >= 0 && coords.y < self.height
    }

    /// Whether a tile exists at the given coordinates
    pub fn contains(&self, coords: Coords) -> bool {
        self.tiles.contains_key(&coords)
    }

    /// The tile at the given coordinates, if any
    pub fn get(&self, coords: Coords) -> Option<&Tile> {
        self.tiles.get(&coords)
    }

    /// Mutable access to the tile at the given coordinates, if any
    pub fn get_mut(&mut self, coords: Coords) -> Option<&mut Tile> {
        self.tiles.get_mut(&coords)
    }

    /// Insert a tile and register it in its region's member list
    ///
    /// The tile's region id must have been allocated beforehand.
    pub fn place_tile(&mut self, coords: Coords, tile: Tile) {
        let region = tile.region;
        self.tiles.insert(coords, tile);
        if let Some(members) = self.region_tiles.get_mut(region) {
            members.push(coords);
        }
    }

    /// Delete the tile at the given coordinates
    ///
    /// Region member lists are not purged; once dead-end resolution starts
    /// deleting tiles the lists are no longer consulted and stale entries
    /// are skipped by their consumers.
    pub fn remove(&mut self, coords: Coords) -> Option<Tile> {
        self.tiles.remove(&coords)
    }

    /// Number of tiles currently present
    pub fn tile_count(&self) -> usize {
        self.tiles.len()
    }

    /// Iterate over all present tiles in unspecified order
    pub fn tiles(&self) -> impl Iterator<Item = (Coords, &Tile)> {
        self.tiles.iter().map(|(&coords, tile)| (coords, tile))
    }

    /// Allocate a fresh region id with an empty member list
    pub fn allocate_region(&mut self) -> usize {
        self.region_tiles.push(Vec::new());
        self.region_tiles.len() - 1
    }

    /// Number of region ids allocated so far
    pub fn region_count(&self) -> usize {
        self.region_tiles.len()
    }

    /// Ordered member coordinates of a region
    pub fn region_tiles(&self, region: usize) -> &[Coords] {
        self.region_tiles.get(region).map_or(&[], Vec::as_slice)
    }

    /// Number of regions that still own at least one tile
    pub fn populated_region_count(&self) -> usize {
        self.region_tiles
            .iter()
            .filter(|members| !members.is_empty())
            .count()
    }

    /// Merge the losing region into the winning one
    ///
    /// Rewrites the `region` id of every tile in the losing region and moves
    /// its member list onto the winner's, leaving the loser empty.
    pub fn merge_regions(&mut self, winner: usize, loser: usize) {
        if winner == loser {
            return;
        }
        let Some(members) = self.region_tiles.get_mut(loser) else {
            return;
        };
        let moved = std::mem::take(members);
        for &coords in &moved {
            if let Some(tile) = self.tiles.get_mut(&coords) {
                tile.region = winner;
            }
        }
        if let Some(members) = self.region_tiles.get_mut(winner) {
            members.extend(moved);
        }
    }

    /// Open the wall between a tile and its neighbor in the given direction
    ///
    /// Clears the facing wall bit on both tiles so the shared wall stays
    /// mutually consistent. Missing tiles on either side are left untouched.
    pub fn open_wall(&mut self, coords: Coords, direction: Direction) {
        if let Some(tile) = self.tiles.get_mut(&coords) {
            tile.walls &= !direction.wall_bit();
        }
        let other = coords.step(direction);
        if let Some(tile) = self.tiles.get_mut(&other) {
            tile.walls &= !direction.opposite().wall_bit();
        }
    }
}
