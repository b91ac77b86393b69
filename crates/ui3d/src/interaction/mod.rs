//! Gaze interaction: raycasting, dwell selection, focus animation, routing.

pub mod dwell;
pub mod focus;
pub mod raycaster;
pub mod router;

pub use dwell::{DwellSelector, DwellState, DwellTransition};
pub use focus::{FocusAnimator, FocusState, PosePair};
pub use raycaster::{GazeHit, GazeProbe, ProbeMode, DEFAULT_MAX_DISTANCE};
pub use router::SelectionRouter;
