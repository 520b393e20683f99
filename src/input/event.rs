/// Platform-agnostic pointer events.
///
/// These are fed into a [`TrackballCamera`](crate::camera::TrackballCamera),
/// usually through [`Viewer::handle_event`](crate::viewer::Viewer::handle_event).
/// Coordinates are canvas pixels with the origin in the top-left corner.
///
/// # Example
///
/// ```
/// use trackball_viewer::{InputEvent, MouseButton};
///
/// let down = InputEvent::PointerDown {
///     x: 320.0,
///     y: 240.0,
///     button: MouseButton::Primary,
/// };
/// assert_eq!(down.position(), Some((320.0, 240.0)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// A mouse button was pressed over the canvas.
    PointerDown {
        /// Horizontal position in pixels.
        x: f32,
        /// Vertical position in pixels.
        y: f32,
        /// Which button was pressed.
        button: MouseButton,
    },
    /// The pointer moved over the canvas.
    PointerMove {
        /// Horizontal position in pixels.
        x: f32,
        /// Vertical position in pixels.
        y: f32,
    },
    /// A mouse button was released over the canvas.
    PointerUp {
        /// Horizontal position in pixels.
        x: f32,
        /// Vertical position in pixels.
        y: f32,
        /// Which button was released.
        button: MouseButton,
    },
    /// Scroll wheel, in legacy `wheelDelta` units (one notch ≈ 120,
    /// positive = zoom in).
    Wheel {
        /// Signed scroll amount.
        delta: f32,
    },
}

impl InputEvent {
    /// Pixel position carried by the event, if any.
    #[must_use]
    pub fn position(&self) -> Option<(f32, f32)> {
        match *self {
            Self::PointerDown { x, y, .. }
            | Self::PointerMove { x, y }
            | Self::PointerUp { x, y, .. } => Some((x, y)),
            Self::Wheel { .. } => None,
        }
    }
}

/// Platform-agnostic mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Primary (left) mouse button. Drags rotate.
    Primary,
    /// Middle mouse button (wheel click). Drags do nothing.
    Middle,
    /// Secondary (right) mouse button. Drags pan.
    Secondary,
    /// Any other button (back/forward). Drags do nothing.
    Other(i16),
}

impl MouseButton {
    /// Map a DOM `MouseEvent.button` code.
    #[must_use]
    pub fn from_dom_button(code: i16) -> Self {
        match code {
            0 => Self::Primary,
            1 => Self::Middle,
            2 => Self::Secondary,
            other => Self::Other(other),
        }
    }
}
