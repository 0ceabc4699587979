//! GPU rendering subsystem.
//!
//! The renderer consumes `scene` draw streams and issues GPU commands via wgpu.
//! It owns its GPU resources (pipeline, buffers).
//!
//! Convention:
//! - CPU geometry is in world pixels (top-left origin, +Y down).
//! - `View2D` maps world pixels to logical window pixels (pan + zoom).
//! - Vertex shader converts to NDC using a viewport uniform.

mod ctx;
mod mesh;
mod tessellate;
mod view;

pub use ctx::{RenderCtx, RenderTarget};
pub use mesh::MeshRenderer;
pub use tessellate::{tessellate, Mesh, MeshVertex};
pub use view::View2D;
