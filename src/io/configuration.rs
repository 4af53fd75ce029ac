//! Defaults and tuning constants

// Default values for configurable parameters
/// Fixed seed for reproducible generation
pub const DEFAULT_SEED: u64 = 42;

/// Default grid width in tiles
pub const DEFAULT_WIDTH: i32 = 48;
/// Default grid height in tiles
pub const DEFAULT_HEIGHT: i32 = 32;

/// Default number of room-placement attempts
pub const DEFAULT_ROOM_DENSITY: usize = 30;

/// Default smallest room width
pub const DEFAULT_MIN_ROOM_WIDTH: i32 = 3;
/// Default largest room width
pub const DEFAULT_MAX_ROOM_WIDTH: i32 = 7;
/// Default smallest room height
pub const DEFAULT_MIN_ROOM_HEIGHT: i32 = 3;
/// Default largest room height
pub const DEFAULT_MAX_ROOM_HEIGHT: i32 = 6;

/// Default probability of abandoning the previous corridor heading
pub const DEFAULT_WINDINESS: f64 = 0.35;
/// Default probability of attempting a loop-opening per dead-end step
pub const DEFAULT_UNDO_OPEN_CHANCE: f64 = 0.2;

// Safety limit to prevent excessive memory allocation
/// Maximum allowed grid dimension
pub const MAX_GRID_DIMENSION: i32 = 10_000;

// Output settings
/// Pixel pitch of one tile in PNG renderings (wall lines are one pixel)
pub const TILE_PIXELS: u32 = 8;
