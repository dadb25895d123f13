//! Headless driver that flies a viewer across the ground plane and composes a
//! clipmap frame each step, logging what a renderer would be asked to draw.
//!
//! Configuration is loaded from `config.ron` and can be overridden via CLI flags.
//! Run with `cargo run -p strata-demo` for the default flight.
//! Run with `cargo run -p strata-demo -- --tile-dim 16 --levels 8 --frames 120` to override.
//! Edits to `config.ron` made while the driver runs are picked up periodically.

use std::path::{Path, PathBuf};

use clap::Parser;
use glam::Vec2;
use strata_config::{CliArgs, ClipmapConfig, Config, ConfigError};
use strata_lod::{
    ClipmapResources, ConfigChange, DrawInstruction, DrawUniform, FrameStats, ViewerState,
    snap_to_grid,
};
use strata_mesh::{ClipmapMeshes, MeshRole};
use tracing::{debug, error, info, warn};

struct DemoState {
    config_dir: PathBuf,
    args: CliArgs,
    /// `config.ron` as last read from disk, before CLI overrides.
    file_config: Config,
    /// The running configuration: file values with CLI overrides applied.
    config: Config,
    resources: ClipmapResources,
    viewer: ViewerState,
    velocity: Vec2,
    instructions: Vec<DrawInstruction>,
    uniforms: Vec<DrawUniform>,
    last_snapped: Vec<Vec2>,
}

impl DemoState {
    fn new(config_dir: PathBuf, file_config: Config, args: CliArgs) -> Result<Self, ConfigError> {
        let mut config = with_overrides(&file_config, &args);
        let resources = match ClipmapResources::new(config.clipmap) {
            Ok(resources) => resources,
            Err(e) => {
                error!("Invalid clipmap config: {e}, using defaults");
                config.clipmap = ClipmapConfig::default();
                ClipmapResources::new(config.clipmap)?
            }
        };
        log_mesh_upload(resources.meshes());

        let viewer = ViewerState::new(Vec2::from(config.viewer.start));
        let velocity = heading_velocity(config.viewer.heading_deg, config.viewer.speed);

        Ok(Self {
            config_dir,
            args,
            file_config,
            config,
            resources,
            viewer,
            velocity,
            instructions: Vec::new(),
            uniforms: Vec::new(),
            last_snapped: Vec::new(),
        })
    }

    fn update(&mut self, frame: u32) {
        self.viewer.advance(self.velocity, self.config.viewer.frame_time);

        let interval = self.config.debug.reload_interval_frames;
        if interval > 0 && frame > 0 && frame % interval == 0 {
            self.hot_reload();
        }

        self.resources.compose_into(&self.viewer, &mut self.instructions);

        let level_colors = self.config.debug.level_colors;
        self.uniforms.clear();
        self.uniforms
            .extend(self.instructions.iter().map(|i| i.uniform(level_colors)));

        let snapped: Vec<Vec2> = (0..self.resources.config().num_levels)
            .map(|level| snap_to_grid(self.viewer.position, (1u32 << level) as f32))
            .collect();

        if snapped != self.last_snapped {
            let moved = snapped
                .iter()
                .zip(&self.last_snapped)
                .filter(|(a, b)| a != b)
                .count();
            let stats = FrameStats::from_instructions(&self.instructions, self.resources.meshes());
            info!(
                "Frame {frame}: viewer ({:.2}, {:.2}), {moved} level(s) moved, {} draws, {} triangles",
                self.viewer.position.x,
                self.viewer.position.y,
                stats.draw_calls(),
                stats.triangles
            );
            debug!(
                "Per role: tile={}, filler={}, cross={}, trim={}, seam={}, uniform bytes={}",
                stats.count(MeshRole::Tile),
                stats.count(MeshRole::Filler),
                stats.count(MeshRole::Cross),
                stats.count(MeshRole::Trim),
                stats.count(MeshRole::Seam),
                bytemuck::cast_slice::<DrawUniform, u8>(&self.uniforms).len()
            );
            self.last_snapped = snapped;
        }
    }

    fn hot_reload(&mut self) {
        match self.file_config.reload(&self.config_dir) {
            Ok(Some(file_config)) => {
                let new_config = with_overrides(&file_config, &self.args);
                self.file_config = file_config;
                match self.resources.apply_config(new_config.clipmap) {
                    Ok(ConfigChange::Updated { meshes_rebuilt, .. }) => {
                        info!("Clipmap config applied: {:?}", new_config.clipmap);
                        if meshes_rebuilt {
                            log_mesh_upload(self.resources.meshes());
                        }
                        self.last_snapped.clear();
                    }
                    Ok(ConfigChange::Unchanged) => {}
                    Err(e) => warn!("Keeping previous clipmap config: {e}"),
                }
                let clipmap = *self.resources.config();
                self.config = Config {
                    clipmap,
                    ..new_config
                };
                self.velocity =
                    heading_velocity(self.config.viewer.heading_deg, self.config.viewer.speed);
            }
            Ok(None) => {}
            Err(e) => warn!("Config reload failed: {e}"),
        }
    }
}

/// `file_config` with the command-line overrides applied on top.
fn with_overrides(file_config: &Config, args: &CliArgs) -> Config {
    let mut config = file_config.clone();
    config.apply_cli_overrides(args);
    config
}

/// Ground-plane velocity for a heading measured from +x towards +z.
fn heading_velocity(heading_deg: f32, speed: f32) -> Vec2 {
    Vec2::from_angle(heading_deg.to_radians()) * speed
}

fn log_mesh_upload(meshes: &ClipmapMeshes) {
    for mesh in meshes.iter() {
        debug!(
            "{} mesh: {} vertices, {} triangles",
            mesh.role(),
            mesh.vertex_count(),
            mesh.triangle_count()
        );
    }
    info!(
        "Mesh upload for tile_dim {}: {} vertex bytes, {} index bytes",
        meshes.tile_dim().get(),
        meshes.total_vertex_bytes(),
        meshes.total_index_bytes()
    );
}

fn resolve_config_dir(args: &CliArgs) -> PathBuf {
    args.config
        .clone()
        .or_else(Config::default_dir)
        .unwrap_or_else(|| Path::new(".").join("strata"))
}

fn main() {
    let args = CliArgs::parse();

    let config_dir = resolve_config_dir(&args);

    // Load or create config, then apply CLI overrides
    let file_config = Config::load_or_create(&config_dir).unwrap_or_else(|e| {
        eprintln!("Failed to load config: {e}, using defaults");
        Config::default()
    });
    let config = with_overrides(&file_config, &args);

    let log_dir = config_dir.join("logs");
    strata_log::init_logging(Some(&log_dir), cfg!(debug_assertions), Some(&config));

    info!(
        "strata v{} starting: tile_dim={}, levels={}, seams={}",
        env!("CARGO_PKG_VERSION"),
        config.clipmap.tile_dim,
        config.clipmap.num_levels,
        config.clipmap.seams_enabled
    );

    let frames = config.viewer.frames;
    let mut state = match DemoState::new(config_dir, file_config, args) {
        Ok(state) => state,
        Err(e) => {
            error!("Failed to build clipmap resources: {e}");
            std::process::exit(1);
        }
    };
    for frame in 0..frames {
        state.update(frame);
    }

    info!(
        "Finished {frames} frames at ({:.2}, {:.2})",
        state.viewer.position.x, state.viewer.position.y
    );
}
