//! Coordinate types shared by the scene, the camera and the renderer.
//!
//! Canonical CPU space:
//! - Logical pixels (DPI-aware)
//! - Origin top-left of the window for screen space; world space is the
//!   projected isometric plane before the camera transform
//! - +X right, +Y down
//!
//! The renderer converts to NDC in the vertex shader using a view uniform.

mod vec2;
mod viewport;

pub use vec2::Vec2;
pub use viewport::Viewport;
