//! Spatial data structures for the dungeon layout
//!
//! This module contains the grid-level building blocks:
//! - Integer coordinates and the four cardinal directions
//! - Tile records with wall and corner bitmasks
//! - The sparse tile grid with per-region membership lists

/// Integer coordinates and cardinal directions
pub mod coords;
/// Sparse tile grid and region bookkeeping
pub mod grid;
/// Tile records and wall/corner bitmask constants
pub mod tiles;

pub use grid::TileGrid;
