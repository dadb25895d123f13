//! Geometry clipmap composition: per-level snapping, ring placement, trim
//! orientation, and the per-frame draw instruction list.

mod composer;
mod instruction;
mod level;
mod orientation;
mod placement;
mod resources;
mod viewer;

pub use composer::ClipmapComposer;
pub use instruction::{DrawInstruction, DrawUniform, FrameStats, level_debug_color};
pub use level::{LevelDescriptor, level_scale, snap_to_grid};
pub use orientation::{Orientation, TRIM_ROTATIONS, select_trim_orientation};
pub use placement::{
    PlacementOffsetTable, RING_TILE_CELLS, RING_TILE_COUNT, compute_placement_table,
    inner_tile_offsets, tile_column_starts,
};
pub use resources::{ClipmapResources, ConfigChange};
pub use viewer::ViewerState;
