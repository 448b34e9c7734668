use glam::Vec2;

/// Platform-agnostic pointer, touch and wheel events.
///
/// These are fed into a [`GestureAdapter`](super::GestureAdapter) together
/// with the current [`Viewport`], which turns them into
/// [`GestureDelta`](super::GestureDelta) values for the camera.
///
/// # Example
///
/// ```ignore
/// let delta = adapter.handle_event(
///     &InputEvent::PointerMove { x: 100.0, y: 200.0 },
///     viewport,
///     camera.options(),
/// );
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Pointer button pressed.
    PointerDown {
        /// Horizontal position in pixels.
        x: f32,
        /// Vertical position in pixels.
        y: f32,
        /// Which button went down.
        button: MouseButton,
    },
    /// Pointer moved to an absolute screen position.
    PointerMove {
        /// Horizontal position in pixels.
        x: f32,
        /// Vertical position in pixels.
        y: f32,
    },
    /// Pointer button released.
    PointerUp {
        /// Which button was released.
        button: MouseButton,
    },
    /// One or more fingers landed. `touches` lists every active contact.
    TouchStart {
        /// All current touch points in pixels.
        touches: Vec<Vec2>,
    },
    /// Active fingers moved.
    TouchMove {
        /// All current touch points in pixels.
        touches: Vec<Vec2>,
    },
    /// One or more fingers lifted. `touches` lists the contacts that remain.
    TouchEnd {
        /// Remaining touch points in pixels.
        touches: Vec<Vec2>,
    },
    /// Scroll wheel (negative = scroll up).
    Wheel {
        /// Vertical scroll amount.
        delta_y: f32,
    },
}

/// Platform-agnostic mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Primary (left) mouse button.
    Left,
    /// Secondary (right) mouse button.
    Right,
    /// Middle mouse button (wheel click).
    Middle,
}

/// Render surface size used to normalize screen-space motion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Width in pixels.
    pub width: f32,
    /// Height in pixels.
    pub height: f32,
}

impl Viewport {
    /// Viewport of the given size.
    #[must_use]
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Size as a vector, with each axis floored at one pixel.
    #[must_use]
    pub fn extent(&self) -> Vec2 {
        Vec2::new(self.width, self.height).max(Vec2::ONE)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(800.0, 600.0)
    }
}

#[cfg(feature = "viewer")]
impl From<winit::event::MouseButton> for MouseButton {
    fn from(button: winit::event::MouseButton) -> Self {
        match button {
            winit::event::MouseButton::Right => Self::Right,
            winit::event::MouseButton::Middle => Self::Middle,
            _ => Self::Left,
        }
    }
}

#[cfg(feature = "viewer")]
impl From<winit::dpi::PhysicalSize<u32>> for Viewport {
    fn from(size: winit::dpi::PhysicalSize<u32>) -> Self {
        Self::new(size.width as f32, size.height as f32)
    }
}
