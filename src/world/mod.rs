//! Physics-world side of the game
//!
//! - `geometry`: maze passages to wall/goal/ball bodies (pure)
//! - `physics`: the engine boundary trait and an in-memory stand-in
//! - `session`: input and collision handling for one playthrough

pub mod geometry;
pub mod physics;
pub mod session;

pub use geometry::{
    BodyLabel, BodySpec, Fill, GeometryParams, MazeGeometry, Shape, UnitSize, map_maze,
};
pub use physics::{Body, BodyId, BodyStore, CollisionPair, PhysicsWorld};
pub use session::{Session, SessionPhase, is_ball_goal_contact, key_direction, velocity_delta};
