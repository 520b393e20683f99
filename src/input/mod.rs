//! Input handling: platform-agnostic pointer events and, with the `web`
//! feature, their conversion from DOM events.

/// Platform-agnostic input events.
pub mod event;
/// DOM event conversion and canvas listener registration.
#[cfg(feature = "web")]
pub mod web;

pub use event::{InputEvent, MouseButton};
