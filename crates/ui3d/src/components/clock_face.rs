//! Clock-face progress indicator
//!
//! Twelve tick marks arranged like the hours on a clock. Tick `i` (1-based)
//! shows its filled visual once progress reaches `i / 12`, otherwise its empty
//! visual. Exactly one of the two visuals is shown per tick.

use serde::{Deserialize, Serialize};

/// Number of tick marks on the face.
pub const SEGMENT_COUNT: usize = 12;

/// Visual state of one tick mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TickMark {
    /// Empty visual shown.
    Empty,
    /// Filled visual shown.
    Filled,
}

/// Colors for the two tick visuals
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct TickColors {
    /// Empty tick color
    pub empty: [f32; 4],
    /// Filled tick color
    pub filled: [f32; 4],
}

impl Default for TickColors {
    fn default() -> Self {
        Self {
            empty: [1.0, 1.0, 1.0, 1.0],  // White
            filled: [1.0, 0.0, 0.0, 1.0], // Red
        }
    }
}

/// Twelve-segment radial progress indicator.
#[derive(Debug, Clone, PartialEq)]
pub struct ClockFace {
    ticks: [TickMark; SEGMENT_COUNT],
    /// Color scheme
    pub colors: TickColors,
}

impl Default for ClockFace {
    fn default() -> Self {
        Self {
            ticks: [TickMark::Empty; SEGMENT_COUNT],
            colors: TickColors::default(),
        }
    }
}

impl ClockFace {
    /// Builder: Set color scheme
    pub fn with_colors(mut self, colors: TickColors) -> Self {
        self.colors = colors;
        self
    }

    /// Recompute every tick from a progress fraction.
    pub fn update(&mut self, fraction: f32) {
        for (index, tick) in self.ticks.iter_mut().enumerate() {
            *tick = tick_for(fraction, index + 1);
        }
    }

    /// All ticks, clockwise from one o'clock.
    pub fn ticks(&self) -> &[TickMark; SEGMENT_COUNT] {
        &self.ticks
    }

    /// Tick at 1-based `segment`, or `None` outside `1..=12`.
    pub fn tick(&self, segment: usize) -> Option<TickMark> {
        segment
            .checked_sub(1)
            .and_then(|index| self.ticks.get(index))
            .copied()
    }

    /// Whether 1-based `segment` is filled.
    pub fn is_filled(&self, segment: usize) -> bool {
        self.tick(segment) == Some(TickMark::Filled)
    }

    /// Number of filled ticks.
    pub fn filled_count(&self) -> usize {
        self.ticks.iter().filter(|t| **t == TickMark::Filled).count()
    }

    /// Color currently shown for 1-based `segment`.
    pub fn color(&self, segment: usize) -> Option<[f32; 4]> {
        self.tick(segment).map(|tick| match tick {
            TickMark::Empty => self.colors.empty,
            TickMark::Filled => self.colors.filled,
        })
    }
}

/// Visual for 1-based `segment` at progress `fraction`.
pub fn tick_for(fraction: f32, segment: usize) -> TickMark {
    if fraction >= segment as f32 / SEGMENT_COUNT as f32 {
        TickMark::Filled
    } else {
        TickMark::Empty
    }
}
