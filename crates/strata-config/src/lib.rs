//! Configuration system for the strata terrain clipmap.
//!
//! Provides the validated [`ClipmapConfig`] that drives mesh and placement
//! rebuilds, plus the surrounding settings persisted to disk as RON files.
//! Supports CLI overrides via clap, hot-reload detection, and forward/backward
//! compatible serialization.

mod cli;
mod clipmap;
mod config;
mod error;

pub use cli::CliArgs;
pub use clipmap::{ClipmapConfig, LEVEL_COUNT_RANGE, TILE_DIM_RANGE};
pub use config::{Config, DebugConfig, ViewerConfig};
pub use error::ConfigError;
