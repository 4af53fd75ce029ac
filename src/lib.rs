//! Procedural generation of tile-based dungeon layouts
//!
//! The generator places rectangular rooms, floods the remaining space with
//! randomized self-avoiding corridors, merges every region into one
//! navigable graph and finally resolves dead ends into loops or trims them
//! away. The output is a per-tile wall/corner bitmask grid from which any
//! renderer (3D mesh, 2D tilemap, ASCII) can materialize geometry.

#![forbid(unsafe_code)]

/// Generation stages: rooms, corridors, connections, dead ends
pub mod algorithm;
/// Input/output operations and error handling
pub mod io;
/// Grid, tile and coordinate data structures
pub mod spatial;

pub use algorithm::executor::{DungeonConfig, generate};
pub use io::error::{GenerationError, Result};
