//! Isometric grid math for the office scene.
//!
//! - `iso`: grid <-> screen projection and per-cell geometry
//! - `depth`: painter's-order depth keys for drawables sharing one canvas
//! - `arena`: generational storage addressed by [`DrawHandle`]
//!
//! Coordinates here are `f64`. Renderers narrow to `f32` logical pixels at the
//! boundary.

pub mod arena;
pub mod depth;
pub mod iso;

pub use arena::{Arena, DrawHandle};
pub use depth::{
    depth_key, DepthError, DepthSorter, DepthTarget, DrawableEntry, MissingEntryPolicy,
    SorterConfig, DEFAULT_CELL_STRIDE,
};
pub use iso::{
    diamond_path, manhattan_distance, BoxFaces, Facing, GridBounds, GridPos, IsoProjection,
    ScreenPoint, TileCorners, TileSize,
};
