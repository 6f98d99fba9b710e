//! Maze and session settings
//!
//! Defaults reproduce the classic 14x10 board. Any subset of fields may be
//! supplied in a JSON file; the rest fall back to defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{Result, SettingsError};
use crate::maze::Dimensions;

/// Game settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Maze ===
    /// Number of cell rows
    pub rows: usize,
    /// Number of cell columns
    pub columns: usize,
    /// RNG seed; drawn at random when absent
    pub seed: Option<u64>,

    // === Viewport ===
    pub width: f32,
    pub height: f32,

    // === Geometry ===
    /// Thickness of interior walls
    pub wall_thickness: f32,
    /// Thickness of the viewport frame
    pub border_thickness: f32,
    /// Goal size as a fraction of one cell
    pub goal_scale: f32,
    /// Ball radius = min(cell width, cell height) / divisor
    pub ball_radius_divisor: f32,

    // === Session ===
    /// Velocity change per key press
    pub velocity_step: f32,
    /// Downward gravity applied once the goal is reached
    pub win_gravity: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            rows: CELLS_VERTICAL,
            columns: CELLS_HORIZONTAL,
            seed: None,

            width: VIEWPORT_WIDTH,
            height: VIEWPORT_HEIGHT,

            wall_thickness: WALL_THICKNESS,
            border_thickness: BORDER_THICKNESS,
            goal_scale: GOAL_SCALE,
            ball_radius_divisor: BALL_RADIUS_DIVISOR,

            velocity_step: VELOCITY_STEP,
            win_gravity: WIN_GRAVITY,
        }
    }
}

impl Settings {
    /// Parse settings from JSON and validate them
    pub fn from_json(json: &str) -> std::result::Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> std::result::Result<Self, SettingsError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    pub fn to_json(&self) -> std::result::Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject values no maze or session can be built from
    pub fn validate(&self) -> std::result::Result<(), SettingsError> {
        if let Err(e) = self.dimensions() {
            return Err(SettingsError::Invalid {
                reason: e.to_string(),
            });
        }
        let positive = [
            ("width", self.width),
            ("height", self.height),
            ("wall_thickness", self.wall_thickness),
            ("border_thickness", self.border_thickness),
            ("goal_scale", self.goal_scale),
            ("ball_radius_divisor", self.ball_radius_divisor),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(SettingsError::Invalid {
                    reason: format!("{name} must be positive, got {value}"),
                });
            }
        }
        Ok(())
    }

    /// Grid size in cells
    pub fn dimensions(&self) -> Result<Dimensions> {
        Dimensions::new(self.rows, self.columns)
    }

    /// Configured seed, or a fresh random one
    pub fn seed_or_random(&self) -> u64 {
        self.seed.unwrap_or_else(rand::random)
    }
}
