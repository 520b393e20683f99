//! Pointer gesture lifecycle and the single pending camera operation.

use web_time::{Duration, Instant};

/// Where the current pointer gesture is in its `up → down → drag → up`
/// cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureState {
    /// No button held.
    Up,
    /// Button held, not yet moved past the drag threshold.
    Down {
        /// When the button went down; drives the hold-to-drag deadline.
        since: Instant,
    },
    /// Button held and dragging.
    Drag,
}

impl GestureState {
    /// Whether a held gesture has outlived `timeout` without moving.
    #[must_use]
    pub fn hold_expired(&self, now: Instant, timeout: Duration) -> bool {
        match self {
            Self::Down { since } => now.saturating_duration_since(*since) >= timeout,
            Self::Up | Self::Drag => false,
        }
    }
}

/// The one incremental camera operation owed to the next frame.
///
/// Requests merge by priority (`Rotate` > `Zoom` > `Pan`): a request never
/// displaces a higher-priority one, and zoom factors multiply together.
/// Dropped rotate/pan requests lose nothing because their anchor is only
/// advanced when the operation runs.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum PendingOp {
    /// Nothing to do; the view is unchanged.
    #[default]
    None,
    /// Rotate toward the current pointer position.
    Rotate,
    /// Scale the eye distance by the contained factor.
    Zoom(f32),
    /// Pan toward the current pointer position.
    Pan,
}

impl PendingOp {
    const fn priority(self) -> u8 {
        match self {
            Self::None => 0,
            Self::Pan => 1,
            Self::Zoom(_) => 2,
            Self::Rotate => 3,
        }
    }

    /// Merge `request` into the slot.
    pub fn request(&mut self, request: Self) {
        *self = match (*self, request) {
            (Self::Zoom(a), Self::Zoom(b)) => Self::Zoom(a * b),
            (current, request) if request.priority() > current.priority() => {
                request
            }
            (current, _) => current,
        };
    }

    /// Take the pending operation, leaving `None`.
    pub fn take(&mut self) -> Self {
        std::mem::take(self)
    }

    /// Whether nothing is pending.
    #[must_use]
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}
