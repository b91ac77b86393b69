#![warn(missing_docs)]
//! Core primitives shared across the workspace.

pub mod config;

use serde::{Deserialize, Serialize};

// Re-export commonly used types
pub use config::{ConfigError, InteractionConfig};

/// Monotonic frame counter supplied by the external frame driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct FrameTick(pub u64);

impl FrameTick {
    /// First frame in any timeline.
    pub const ZERO: Self = Self(0);

    /// Advance by `delta` frames.
    pub fn advance(self, delta: u64) -> Self {
        Self(self.0 + delta)
    }
}

/// Sanitise a frame delta: negative or non-finite values count as no time passing.
pub fn sanitize_dt(dt: f32) -> f32 {
    if dt.is_finite() && dt > 0.0 {
        dt
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_tick_advances() {
        assert_eq!(FrameTick::ZERO.advance(3), FrameTick(3));
    }

    #[test]
    fn negative_and_nan_dt_are_zero() {
        assert_eq!(sanitize_dt(-0.5), 0.0);
        assert_eq!(sanitize_dt(f32::NAN), 0.0);
        assert_eq!(sanitize_dt(f32::INFINITY), 0.0);
        assert_eq!(sanitize_dt(0.25), 0.25);
    }
}
