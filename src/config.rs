use anyhow::Result;
use gazeselect_core::InteractionConfig;
use gazeselect_ui3d::{Cursor3D, TickColors};
use glam::Vec3;
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};
use tracing::warn;

const DEFAULT_SCENE_PATH: &str = "config/scene.toml";

/// A gaze-selectable panel placed in the scene.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct PanelSpec {
    /// Rest position (the panel's initial transform).
    pub position: [f32; 3],
    /// Where the panel moves when selected.
    pub focus_marker: [f32; 3],
    /// Width and height in world units.
    #[serde(default = "default_panel_size")]
    pub size: [f32; 2],
}

fn default_panel_size() -> [f32; 2] {
    [2.0, 1.0]
}

/// How the gaze cursor sits in the scene and colors its clock face.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct CursorStyle {
    /// Distance along the gaze to park the cursor when nothing is hit.
    pub rest_distance: f32,
    /// Pull-back toward the viewer from the hit surface.
    pub surface_offset: f32,
    pub ticks: TickColors,
}

impl Default for CursorStyle {
    fn default() -> Self {
        Self {
            rest_distance: 2.0,
            surface_offset: 0.01,
            ticks: TickColors::default(),
        }
    }
}

impl CursorStyle {
    pub fn build(&self, config: &InteractionConfig) -> Cursor3D {
        Cursor3D::new(config)
            .with_rest_distance(self.rest_distance)
            .with_surface_offset(self.surface_offset)
            .with_tick_colors(self.ticks)
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct SceneConfig {
    pub interaction: InteractionConfig,
    /// Install the gaze cursor. Its progress is logged but not routed.
    pub cursor: bool,
    pub cursor_style: CursorStyle,
    /// Eye position.
    pub viewer: [f32; 3],
    pub panels: Vec<PanelSpec>,
}

impl Default for SceneConfig {
    fn default() -> Self {
        let focus_marker = [0.0, 1.6, 2.0];
        Self {
            interaction: InteractionConfig::default(),
            cursor: true,
            cursor_style: CursorStyle::default(),
            viewer: [0.0, 1.6, 0.0],
            panels: [-2.5, 0.0, 2.5]
                .into_iter()
                .map(|x| PanelSpec {
                    position: [x, 1.6, 5.0],
                    focus_marker,
                    size: default_panel_size(),
                })
                .collect(),
        }
    }
}

impl SceneConfig {
    /// Load the scene from the default path.
    pub fn load() -> Self {
        Self::load_from_path(Path::new(DEFAULT_SCENE_PATH))
    }

    /// Load a scene from an explicit path, falling back to defaults on errors.
    pub fn load_from_path(path: &Path) -> Self {
        let mut scene = match fs::read_to_string(path) {
            Ok(contents) => match toml::from_str::<SceneConfig>(&contents) {
                Ok(cfg) => cfg,
                Err(err) => {
                    warn!("Failed to parse {}: {err}. Using defaults", path.display());
                    SceneConfig::default()
                }
            },
            Err(err) => {
                if path != Path::new(DEFAULT_SCENE_PATH)
                    || err.kind() != std::io::ErrorKind::NotFound
                {
                    warn!("Failed to read {}: {err}. Using defaults", path.display());
                }
                SceneConfig::default()
            }
        };

        if let Err(err) = scene.interaction.validate() {
            warn!("Invalid interaction settings in {}: {err}. Using defaults", path.display());
            scene.interaction = InteractionConfig::default();
        }
        scene
    }

    /// Save the scene to an explicit path.
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        let toml = toml::to_string_pretty(self)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml)?;
        Ok(())
    }

    pub fn viewer_position(&self) -> Vec3 {
        Vec3::from_array(self.viewer)
    }
}
