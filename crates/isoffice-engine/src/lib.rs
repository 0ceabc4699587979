//! isoffice engine crate.
//!
//! Owns the platform + GPU runtime used by the office scene: window loop,
//! input translation, frame timing, the renderer-agnostic draw list and the
//! mesh renderer that paints it.

pub mod device;
pub mod window;
pub mod input;
pub mod time;
pub mod core;

pub mod logging;
pub mod coords;
pub mod render;
pub mod paint;
pub mod scene;
