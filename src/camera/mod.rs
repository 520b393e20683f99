//! Camera system for 3D scene viewing.
//!
//! Provides a trackball camera with arcball rotation, panning and zoom,
//! driven by pointer gestures and polled once per frame.

/// Camera snapshot and GPU uniform types.
pub mod core;
/// Gesture lifecycle and the pending-operation slot.
pub mod gesture;
/// Trackball state machine and rotate/pan/zoom math.
pub mod trackball;
/// Surface size and screen/arcball projection.
pub mod viewport;

pub use self::core::{Camera, CameraUniform};
pub use gesture::{GestureState, PendingOp};
pub use trackball::{Click, TrackballCamera};
pub use viewport::Viewport;
