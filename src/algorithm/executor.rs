//! Configuration, validation and the generation entry point
//!
//! Generation is a single synchronous call: validate the configuration,
//! seed one explicit random source, then run the four stages in sequence
//! over a freshly-created grid. Nothing is shared between runs, so a fixed
//! configuration and seed reproduce an identical grid bit for bit.

use rand::{SeedableRng, rngs::StdRng};

use crate::algorithm::connections::connect_regions;
use crate::algorithm::corridors::carve_corridors;
use crate::algorithm::deadends::resolve_dead_ends;
use crate::algorithm::rooms::place_rooms;
use crate::io::configuration::{
    DEFAULT_HEIGHT, DEFAULT_MAX_ROOM_HEIGHT, DEFAULT_MAX_ROOM_WIDTH, DEFAULT_MIN_ROOM_HEIGHT,
    DEFAULT_MIN_ROOM_WIDTH, DEFAULT_ROOM_DENSITY, DEFAULT_SEED, DEFAULT_UNDO_OPEN_CHANCE,
    DEFAULT_WIDTH, DEFAULT_WINDINESS, MAX_GRID_DIMENSION,
};
use crate::io::error::{Result, invalid_parameter};
use crate::spatial::TileGrid;

/// Parameters for one generation run
///
/// Consumed once at the start of a run and never mutated.
#[derive(Clone, Copy, Debug)]
pub struct DungeonConfig {
    /// Grid extent in tiles, west to east
    pub width: i32,
    /// Grid extent in tiles, south to north
    pub height: i32,
    /// Number of room-placement attempts; 0 yields a corridor-only dungeon
    pub room_density: usize,
    /// Smallest room width drawn (inclusive)
    pub min_room_width: i32,
    /// Largest room width drawn (inclusive)
    pub max_room_width: i32,
    /// Smallest room height drawn (inclusive)
    pub min_room_height: i32,
    /// Largest room height drawn (inclusive)
    pub max_room_height: i32,
    /// Probability of abandoning the previous corridor heading per step
    pub windiness: f64,
    /// Probability of attempting a loop-opening per dead-end step
    pub undo_open_chance: f64,
    /// Recompute corner necessity when loop-openings occur
    pub remove_pillars: bool,
    /// Seed for the run's random source
    pub seed: u64,
}

impl Default for DungeonConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            room_density: DEFAULT_ROOM_DENSITY,
            min_room_width: DEFAULT_MIN_ROOM_WIDTH,
            max_room_width: DEFAULT_MAX_ROOM_WIDTH,
            min_room_height: DEFAULT_MIN_ROOM_HEIGHT,
            max_room_height: DEFAULT_MAX_ROOM_HEIGHT,
            windiness: DEFAULT_WINDINESS,
            undo_open_chance: DEFAULT_UNDO_OPEN_CHANCE,
            remove_pillars: true,
            seed: DEFAULT_SEED,
        }
    }
}

impl DungeonConfig {
    /// Check every parameter before generation starts
    ///
    /// # Errors
    ///
    /// Returns [`crate::GenerationError::InvalidParameter`] for the first
    /// violated constraint: extents below 2 or above the safety maximum,
    /// room bounds below 2 or inverted, probabilities outside `[0, 1]`.
    pub fn validate(&self) -> Result<()> {
        for (parameter, value) in [("width", self.width), ("height", self.height)] {
            if value < 2 {
                return Err(invalid_parameter(parameter, &value, &"must be at least 2"));
            }
            if value > MAX_GRID_DIMENSION {
                return Err(invalid_parameter(
                    parameter,
                    &value,
                    &format!("must be at most {MAX_GRID_DIMENSION}"),
                ));
            }
        }

        for (parameter, value) in [
            ("min_room_width", self.min_room_width),
            ("max_room_width", self.max_room_width),
            ("min_room_height", self.min_room_height),
            ("max_room_height", self.max_room_height),
        ] {
            if value < 2 {
                return Err(invalid_parameter(parameter, &value, &"must be at least 2"));
            }
        }
        if self.min_room_width > self.max_room_width {
            return Err(invalid_parameter(
                "min_room_width",
                &self.min_room_width,
                &"must not exceed max_room_width",
            ));
        }
        if self.min_room_height > self.max_room_height {
            return Err(invalid_parameter(
                "min_room_height",
                &self.min_room_height,
                &"must not exceed max_room_height",
            ));
        }

        for (parameter, value) in [
            ("windiness", self.windiness),
            ("undo_open_chance", self.undo_open_chance),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(invalid_parameter(
                    parameter,
                    &value,
                    &"must lie within [0, 1]",
                ));
            }
        }

        Ok(())
    }
}

/// Generate a complete dungeon layout
///
/// Runs room placement, corridor carving, region connection and dead-end
/// resolution in sequence and returns the finished grid. The grid is fully
/// resolved: every present tile carries its final wall and corner bitmasks
/// and all tiles share one region.
///
/// # Errors
///
/// Returns [`crate::GenerationError::InvalidParameter`] for a configuration
/// violation, and propagates the connection and resolution invariant errors
/// described in [`connect_regions`] and [`resolve_dead_ends`].
pub fn generate(config: &DungeonConfig) -> Result<TileGrid> {
    config.validate()?;

    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut grid = TileGrid::new(config.width, config.height);

    place_rooms(&mut grid, &mut rng, config);
    let dead_ends = carve_corridors(&mut grid, &mut rng, config.windiness);
    connect_regions(&mut grid, &mut rng)?;
    resolve_dead_ends(
        &mut grid,
        &mut rng,
        &dead_ends,
        config.undo_open_chance,
        config.remove_pillars,
    )?;

    Ok(grid)
}
