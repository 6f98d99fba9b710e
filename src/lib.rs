//! Maze Ball - roll a ball through a randomly carved maze
//!
//! Core modules:
//! - `maze`: Grid model and deterministic spanning-tree generation
//! - `world`: Maze-to-body mapping and the game session on top of a physics engine
//! - `settings`: Data-driven board and session configuration
//! - `error`: Error types

pub mod error;
pub mod maze;
pub mod settings;
pub mod world;

pub use error::{MazeError, SettingsError};
pub use maze::{Cell, Dimensions, Maze};
pub use settings::Settings;
pub use world::{BodyStore, PhysicsWorld, Session};

/// Game configuration constants
pub mod consts {
    /// Default board size (cells)
    pub const CELLS_HORIZONTAL: usize = 14;
    pub const CELLS_VERTICAL: usize = 10;

    /// Default viewport size
    pub const VIEWPORT_WIDTH: f32 = 1280.0;
    pub const VIEWPORT_HEIGHT: f32 = 720.0;

    /// Interior wall thickness
    pub const WALL_THICKNESS: f32 = 5.0;
    /// Viewport frame thickness
    pub const BORDER_THICKNESS: f32 = 2.0;

    /// Goal size relative to one cell
    pub const GOAL_SCALE: f32 = 0.7;
    /// Ball radius = smaller cell side / 4
    pub const BALL_RADIUS_DIVISOR: f32 = 4.0;

    /// Velocity change per key press
    pub const VELOCITY_STEP: f32 = 5.0;
    /// Downward gravity once the goal is reached
    pub const WIN_GRAVITY: f32 = 1.0;

    /// Key codes for steering
    pub const KEY_W: u32 = 87;
    pub const KEY_A: u32 = 65;
    pub const KEY_S: u32 = 83;
    pub const KEY_D: u32 = 68;
}
