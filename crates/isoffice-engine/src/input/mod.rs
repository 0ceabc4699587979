//! Keyboard, pointer and wheel input.
//!
//! `InputState` tracks what is held down, `InputFrame` what changed since the
//! last frame. Only `platform::winit` knows about winit.

mod frame;
mod state;
mod types;

pub mod platform;

pub use frame::InputFrame;
pub use state::InputState;
pub use types::{
    InputEvent, Key, KeyState, Modifiers, MouseButton, MouseButtonState, MouseWheelDelta,
    PointerButtonEvent, PointerMoveEvent,
};
