use glam::Vec3;
use serde::Deserialize;
use std::{fs, path::Path};

#[derive(Debug, Deserialize)]
struct ScriptedGazeFile {
    steps: Vec<GazeStep>,
}

/// Hold the gaze on one point for `duration` seconds.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq)]
pub struct GazeStep {
    pub duration: f32,
    pub look_at: [f32; 3],
}

/// Replays a list of gaze targets against frame time.
pub struct ScriptedGazePlayer {
    steps: Vec<GazeStep>,
    index: usize,
    time_in_step: f32,
    finished: bool,
}

impl ScriptedGazePlayer {
    pub fn new(steps: Vec<GazeStep>) -> anyhow::Result<Self> {
        if steps.is_empty() {
            anyhow::bail!("gaze script contains no steps");
        }
        Ok(Self {
            steps,
            index: 0,
            time_in_step: 0.0,
            finished: false,
        })
    }

    pub fn from_path(path: &Path) -> anyhow::Result<Self> {
        let contents = fs::read_to_string(path)?;
        let file: ScriptedGazeFile = serde_json::from_str(&contents)?;
        Self::new(file.steps)
    }

    /// Dwell on each target in turn, then look at `away` for the same time.
    pub fn tour(targets: &[Vec3], dwell: f32, away: Vec3) -> anyhow::Result<Self> {
        if targets.is_empty() {
            return Self::new(vec![GazeStep {
                duration: dwell,
                look_at: away.to_array(),
            }]);
        }
        let steps = targets
            .iter()
            .flat_map(|target| {
                [
                    GazeStep {
                        duration: dwell,
                        look_at: target.to_array(),
                    },
                    GazeStep {
                        duration: dwell,
                        look_at: away.to_array(),
                    },
                ]
            })
            .collect();
        Self::new(steps)
    }

    /// Advance by `dt` and return the point to look at this frame.
    pub fn advance(&mut self, dt: f32) -> Vec3 {
        self.time_in_step += dt;
        while self.index < self.steps.len() && self.time_in_step >= self.steps[self.index].duration
        {
            self.time_in_step -= self.steps[self.index].duration;
            if self.index + 1 < self.steps.len() {
                self.index += 1;
            } else {
                self.time_in_step = 0.0;
                self.finished = true;
                break;
            }
        }

        Vec3::from_array(self.steps[self.index].look_at)
    }

    /// True once the last step has run its full duration.
    pub fn is_finished(&self) -> bool {
        self.finished
    }
}
