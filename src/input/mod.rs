//! Input handling: event types and the gesture state machine that turns raw
//! pointer/touch streams into device-independent camera deltas.

/// Platform-agnostic input events.
pub mod event;
/// Pointer/touch state machine producing gesture deltas.
pub mod gesture;

pub use event::{InputEvent, MouseButton, Viewport};
pub use gesture::{GestureAdapter, GestureDelta, GestureState};
