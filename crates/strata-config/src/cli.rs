//! Command-line argument parsing for the strata driver.

use std::path::PathBuf;

use clap::Parser;

use crate::Config;

/// strata command-line arguments.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug)]
#[command(name = "strata", about = "Geometry clipmap terrain driver")]
pub struct CliArgs {
    /// Grid cells along one edge of a ring tile (2-255).
    #[arg(long)]
    pub tile_dim: Option<u32>,

    /// Number of clipmap levels (1-12).
    #[arg(long)]
    pub levels: Option<u32>,

    /// Emit seam meshes between levels.
    #[arg(long)]
    pub seams: Option<bool>,

    /// Number of frames to compose.
    #[arg(long)]
    pub frames: Option<u32>,

    /// Viewer speed in world units per second.
    #[arg(long)]
    pub speed: Option<f32>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    ///
    /// Range checks happen when the clipmap section is next validated.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(dim) = args.tile_dim {
            self.clipmap.tile_dim = dim;
        }
        if let Some(levels) = args.levels {
            self.clipmap.num_levels = levels;
        }
        if let Some(seams) = args.seams {
            self.clipmap.seams_enabled = seams;
        }
        if let Some(frames) = args.frames {
            self.viewer.frames = frames;
        }
        if let Some(speed) = args.speed {
            self.viewer.speed = speed;
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}
