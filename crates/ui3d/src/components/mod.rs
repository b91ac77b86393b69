//! 3D UI Components
//!
//! World-space pieces of the gaze interface: the cursor with its clock face,
//! and panels that animate into focus when selected.

pub mod clock_face;
pub mod cursor;
pub mod panel;

pub use clock_face::{ClockFace, TickColors, TickMark, SEGMENT_COUNT};
pub use cursor::Cursor3D;
pub use panel::Panel3D;

use glam::Vec3;

/// Base trait for all 3D UI components
pub trait UIComponent {
    /// Get the world position of this component
    fn position(&self) -> Vec3;

    /// Set the world position of this component
    fn set_position(&mut self, position: Vec3);

    /// Check if this component is visible
    fn is_visible(&self) -> bool;

    /// Set visibility
    fn set_visible(&mut self, visible: bool);
}
