//! Command-line interface and batch dungeon processing

use crate::algorithm::executor::{DungeonConfig, generate};
use crate::io::configuration::{
    DEFAULT_HEIGHT, DEFAULT_MAX_ROOM_HEIGHT, DEFAULT_MAX_ROOM_WIDTH, DEFAULT_MIN_ROOM_HEIGHT,
    DEFAULT_MIN_ROOM_WIDTH, DEFAULT_ROOM_DENSITY, DEFAULT_SEED, DEFAULT_UNDO_OPEN_CHANCE,
    DEFAULT_WIDTH, DEFAULT_WINDINESS,
};
use crate::io::error::{GenerationError, Result};
use crate::io::image::export_grid_as_png;
use crate::io::progress::ProgressManager;
use crate::io::text::render_ascii;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "dungen")]
#[command(author, version, about = "Generate tile-based dungeon layouts")]
/// Command-line arguments for the dungeon generation tool
pub struct Cli {
    /// Output PNG path; additional dungeons get a numeric suffix
    #[arg(value_name = "OUTPUT", default_value = "dungeon.png")]
    pub output: PathBuf,

    /// Grid width in tiles
    #[arg(short = 'w', long, default_value_t = DEFAULT_WIDTH)]
    pub width: i32,

    /// Grid height in tiles
    #[arg(short = 'H', long, default_value_t = DEFAULT_HEIGHT)]
    pub height: i32,

    /// Random seed for reproducible generation
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Number of dungeons to generate from consecutive seeds
    #[arg(short = 'n', long, default_value_t = 1)]
    pub count: u64,

    /// Number of room-placement attempts (0 for corridors only)
    #[arg(short, long, default_value_t = DEFAULT_ROOM_DENSITY)]
    pub rooms: usize,

    /// Smallest room width
    #[arg(long, default_value_t = DEFAULT_MIN_ROOM_WIDTH)]
    pub min_room_width: i32,

    /// Largest room width
    #[arg(long, default_value_t = DEFAULT_MAX_ROOM_WIDTH)]
    pub max_room_width: i32,

    /// Smallest room height
    #[arg(long, default_value_t = DEFAULT_MIN_ROOM_HEIGHT)]
    pub min_room_height: i32,

    /// Largest room height
    #[arg(long, default_value_t = DEFAULT_MAX_ROOM_HEIGHT)]
    pub max_room_height: i32,

    /// Probability of abandoning the previous corridor heading per step
    #[arg(long, default_value_t = DEFAULT_WINDINESS)]
    pub windiness: f64,

    /// Probability of attempting a loop-opening per dead-end step
    #[arg(long, default_value_t = DEFAULT_UNDO_OPEN_CHANCE)]
    pub undo_open_chance: f64,

    /// Keep every corner post even when no adjacent wall remains
    #[arg(long)]
    pub keep_pillars: bool,

    /// Also write an ASCII rendering next to each PNG
    #[arg(short, long)]
    pub text: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Build the generation configuration for one seed
    pub const fn config_for_seed(&self, seed: u64) -> DungeonConfig {
        DungeonConfig {
            width: self.width,
            height: self.height,
            room_density: self.rooms,
            min_room_width: self.min_room_width,
            max_room_width: self.max_room_width,
            min_room_height: self.min_room_height,
            max_room_height: self.max_room_height,
            windiness: self.windiness,
            undo_open_chance: self.undo_open_chance,
            remove_pillars: !self.keep_pillars,
            seed,
        }
    }
}

/// Orchestrates batch generation with progress tracking
pub struct DungeonProcessor {
    cli: Cli,
    progress: Option<ProgressManager>,
}

impl DungeonProcessor {
    /// Create a new processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress = cli.should_show_progress().then(ProgressManager::new);
        Self { cli, progress }
    }

    /// Generate and export dungeons according to CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration validation, generation or any
    /// export step fails; the batch stops at the first failure.
    pub fn process(&mut self) -> Result<()> {
        if let Some(progress) = &mut self.progress {
            progress.initialize(self.cli.count);
        }

        for index in 0..self.cli.count {
            let seed = self.cli.seed.wrapping_add(index);
            if let Some(progress) = &self.progress {
                progress.start_dungeon(seed);
            }

            let config = self.cli.config_for_seed(seed);
            let grid = generate(&config)?;

            let png_path = self.output_path(index);
            export_grid_as_png(&grid, &png_path)?;

            if self.cli.text {
                let text_path = png_path.with_extension("txt");
                std::fs::write(&text_path, render_ascii(&grid)).map_err(|source| {
                    GenerationError::FileSystem {
                        path: text_path,
                        operation: "write ASCII rendering",
                        source,
                    }
                })?;
            }

            if let Some(progress) = &self.progress {
                progress.complete_dungeon();
            }
        }

        if let Some(progress) = &mut self.progress {
            progress.finish();
        }

        Ok(())
    }

    // First dungeon keeps the requested path; later ones get _NNN before
    // the extension.
    fn output_path(&self, index: u64) -> PathBuf {
        if index == 0 {
            return self.cli.output.clone();
        }
        let stem = self
            .cli
            .output
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| String::from("dungeon"));
        let extension = self
            .cli
            .output
            .extension()
            .map(|ext| ext.to_string_lossy().into_owned())
            .unwrap_or_else(|| String::from("png"));
        let name = format!("{stem}_{index:03}.{extension}");
        self.cli
            .output
            .parent()
            .map_or_else(|| PathBuf::from(&name), |parent| parent.join(&name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_minimal_args() {
        let cli = Cli::parse_from(["dungen"]);
        assert_eq!(cli.output, PathBuf::from("dungeon.png"));
        assert_eq!(cli.seed, DEFAULT_SEED);
        assert_eq!(cli.width, DEFAULT_WIDTH);
        assert_eq!(cli.count, 1);
        assert!(!cli.quiet);
        assert!(cli.config_for_seed(cli.seed).remove_pillars);
    }

    #[test]
    fn test_cli_parse_all_args() {
        let cli = Cli::parse_from([
            "dungen",
            "out/level.png",
            "--width",
            "20",
            "--height",
            "12",
            "--seed",
            "123",
            "--count",
            "3",
            "--rooms",
            "5",
            "--windiness",
            "0.5",
            "--keep-pillars",
            "--text",
            "--quiet",
        ]);
        assert_eq!(cli.output, PathBuf::from("out/level.png"));
        assert_eq!(cli.width, 20);
        assert_eq!(cli.height, 12);
        assert_eq!(cli.seed, 123);
        assert_eq!(cli.count, 3);
        assert_eq!(cli.rooms, 5);
        assert!(cli.text);
        assert!(!cli.should_show_progress());
        assert!(!cli.config_for_seed(cli.seed).remove_pillars);
    }

    #[test]
    fn test_output_path_suffixes_later_dungeons() {
        let cli = Cli::parse_from(["dungen", "maps/level.png"]);
        let processor = DungeonProcessor::new(cli);
        assert_eq!(processor.output_path(0), PathBuf::from("maps/level.png"));
        assert_eq!(
            processor.output_path(2),
            PathBuf::from("maps/level_002.png")
        );
    }
}
