// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Trackball camera and scene description for a small 3D viewer.
//!
//! The viewer shows a handful of colored cubes and spheres and lets the user
//! orbit (left drag), pan (right drag) and zoom (wheel) around them. GPU
//! upload and draw submission are left to the host; this crate produces the
//! matrices and colors the host needs, and only when the view changed.
//!
//! # Key entry points
//!
//! - [`camera::TrackballCamera`] - gesture state machine and arcball math
//! - [`viewer::Viewer`] - owns camera, scene and options; polled once per
//!   frame
//! - [`input::InputEvent`] - platform-agnostic pointer events
//! - [`options::Options`] - tunables with TOML preset support
//!
//! # Frame loop
//!
//! Pointer events only record what happened. [`viewer::Viewer::frame`] runs
//! at most one camera operation per call and returns `None` when nothing
//! changed, so the host can skip the redraw.

pub mod camera;
pub mod error;
pub mod input;
pub mod options;
pub mod scene;
pub mod viewer;

pub use camera::TrackballCamera;
pub use error::ViewerError;
pub use input::{InputEvent, MouseButton};
pub use options::Options;
pub use viewer::{Frame, Viewer};
