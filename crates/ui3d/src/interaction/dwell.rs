//! Dwell selection - turn a per-frame gaze hit flag into a selection decision.

use crate::components::{ClockFace, TickColors};
use gazeselect_core::{sanitize_dt, InteractionConfig};
use serde::Serialize;
use tracing::debug;

/// Selection state of a dwell target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DwellState {
    /// Nothing selected; the timer fills while gazed at.
    Idle,
    /// Selected; the timer drains once the gaze leaves.
    Selected,
}

/// Edge reported by [`DwellSelector::update`] on the frame a state changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DwellTransition {
    /// `Idle -> Selected`
    Selected,
    /// `Selected -> Idle`
    Deselected,
}

/// Fill/drain dwell timer with a 12-segment progress indicator.
///
/// While idle the timer fills with gaze and snaps to zero without it. Once
/// selected it is pinned full while gazed at and drains gradually otherwise.
/// The timer is clamped to `[0, selection_time]`, so
/// [`fraction_complete`](Self::fraction_complete) is always in `[0, 1]`.
#[derive(Debug, Clone)]
pub struct DwellSelector {
    selection_time: f32,
    state: DwellState,
    timer: f32,
    just_selected: bool,
    visible: bool,
    clock_face: ClockFace,
}

impl DwellSelector {
    /// Create an idle selector using `config.selection_time` as the threshold.
    pub fn new(config: &InteractionConfig) -> Self {
        Self::with_selection_time(config.selection_time)
    }

    /// Create an idle selector with an explicit threshold in seconds.
    ///
    /// Negative or non-finite thresholds are treated as zero. A zero threshold
    /// selects on the first gazed frame and deselects on the first frame
    /// without gaze.
    pub fn with_selection_time(selection_time: f32) -> Self {
        Self {
            selection_time: sanitize_dt(selection_time),
            state: DwellState::Idle,
            timer: 0.0,
            just_selected: false,
            visible: true,
            clock_face: ClockFace::default(),
        }
    }

    /// Builder: Set clock face colors
    pub fn with_tick_colors(mut self, colors: TickColors) -> Self {
        self.clock_face = self.clock_face.with_colors(colors);
        self
    }

    /// Return to the initial state: idle, empty timer, empty clock face.
    /// Visibility is left alone.
    pub fn reset(&mut self) {
        self.state = DwellState::Idle;
        self.timer = 0.0;
        self.just_selected = false;
        self.clock_face.update(0.0);
    }

    /// Advance one frame.
    ///
    /// Runs regardless of visibility. Returns the transition taken this frame,
    /// if any.
    pub fn update(&mut self, hitting: bool, dt: f32) -> Option<DwellTransition> {
        let dt = sanitize_dt(dt);
        self.just_selected = false;

        let transition = match self.state {
            DwellState::Idle => {
                self.timer = if hitting {
                    (self.timer + dt).min(self.selection_time)
                } else {
                    0.0
                };
                (hitting && self.timer >= self.selection_time).then(|| {
                    self.state = DwellState::Selected;
                    self.just_selected = true;
                    DwellTransition::Selected
                })
            }
            DwellState::Selected => {
                self.timer = if hitting {
                    self.selection_time
                } else {
                    (self.timer - dt).max(0.0)
                };
                (!hitting && self.timer <= 0.0).then(|| {
                    self.state = DwellState::Idle;
                    DwellTransition::Deselected
                })
            }
        };

        if let Some(transition) = transition {
            debug!(?transition, timer = self.timer, "dwell state changed");
        }

        self.clock_face.update(self.fraction_complete());
        transition
    }

    /// Current state.
    pub fn state(&self) -> DwellState {
        self.state
    }

    /// Raw timer value in seconds.
    pub fn timer(&self) -> f32 {
        self.timer
    }

    /// Dwell threshold in seconds.
    pub fn selection_time(&self) -> f32 {
        self.selection_time
    }

    /// Normalized timer progress in `[0, 1]`.
    pub fn fraction_complete(&self) -> f32 {
        if self.selection_time > 0.0 {
            (self.timer / self.selection_time).clamp(0.0, 1.0)
        } else if self.state == DwellState::Selected {
            1.0
        } else {
            0.0
        }
    }

    /// True only during the frame the selector entered `Selected`.
    pub fn just_selected(&self) -> bool {
        self.just_selected
    }

    /// Show or hide the indicator. Updates keep running while hidden.
    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    /// Whether the indicator is rendered.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Progress indicator recomputed every frame.
    pub fn clock_face(&self) -> &ClockFace {
        &self.clock_face
    }
}

impl Default for DwellSelector {
    fn default() -> Self {
        Self::new(&InteractionConfig::default())
    }
}
