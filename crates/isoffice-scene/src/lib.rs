//! Isometric office scene.
//!
//! `config` describes the room, `geometry` turns it into shapes, `node` and
//! `office` place those shapes in a depth-sorted draw list, and `app` drives
//! it all from a window. `texture` bakes the floor tiles into PNG sprites.

pub mod app;
pub mod camera;
pub mod config;
pub mod geometry;
pub mod node;
pub mod office;
pub mod palette;
pub mod session;
pub mod texture;

pub use app::Application;
pub use camera::Camera;
pub use config::{
    CameraConfig, ChairPlacement, ConfigError, DepthLayers, Footprint, OfficeConfig, Palette,
    RoomConfig,
};
pub use node::{NodeStore, SceneNode};
pub use office::{OfficeScene, SceneError, WorkerInfo};
pub use session::OfficeSession;
pub use texture::export_tile_textures;
