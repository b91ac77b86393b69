//! Gaze interaction UI for gazeselect
//!
//! World-space UI driven by where the viewer is looking. A ray cast from the
//! viewer's gaze each frame feeds dwell selectors; a selector that stays gazed
//! at long enough fires a selection which the router forwards to panels, and
//! each triggered panel slides to its focus pose, holds, and returns.
//!
//! # Example
//!
//! ```rust,no_run
//! use gazeselect_camera::ViewerPose;
//! use gazeselect_core::InteractionConfig;
//! use gazeselect_physics::ColliderSet;
//! use gazeselect_ui3d::{InteractionManager, Panel3D};
//! use glam::Vec3;
//!
//! let config = InteractionConfig::default();
//! let mut scene = ColliderSet::new();
//! let panel = Panel3D::new(Vec3::new(0.0, 1.6, 5.0), Vec3::new(0.0, 1.6, 2.0), (2.0, 1.0), &config);
//! let collider = scene.insert(panel.bounds());
//!
//! let mut manager = InteractionManager::new(config)?;
//! manager.add_selectable_panel(panel.with_collider(collider))?;
//! manager.enable_cursor();
//!
//! // Once per display frame:
//! let report = manager.frame(1.0 / 60.0, &ViewerPose::default(), &scene);
//! manager.sync_colliders(&mut scene);
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod components;
pub mod interaction;
pub mod manager;

// Re-export commonly used types
pub use components::{ClockFace, Cursor3D, Panel3D, TickColors, TickMark, UIComponent, SEGMENT_COUNT};
pub use interaction::{
    DwellSelector, DwellState, DwellTransition, FocusAnimator, FocusState, GazeHit, GazeProbe,
    PosePair, ProbeMode, SelectionRouter,
};
pub use manager::{FrameReport, HitFilter, InteractionManager, SelectionEvent, UIElementHandle};

