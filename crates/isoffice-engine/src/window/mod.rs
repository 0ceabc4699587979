//! Single-window runtime on winit's `ApplicationHandler`.
//!
//! The window and the `Gpu` borrowing it live in one self-referencing entry,
//! created on `resumed` and dropped GPU-first on shutdown.

mod runtime;

pub use runtime::{Runtime, RuntimeConfig, RuntimeCtx};
pub use winit::window::CursorIcon;
