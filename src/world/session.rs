//! Game session: registers the maze with the engine and reacts to events
//!
//! Handlers run on the engine's update thread, so each one is a short,
//! non-blocking pass over the event data.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geometry::{BodyLabel, GeometryParams, MazeGeometry, UnitSize, map_maze};
use super::physics::{BodyId, CollisionPair, PhysicsWorld};
use crate::consts::*;
use crate::error::SettingsError;
use crate::maze::{Direction, Maze};
use crate::settings::Settings;

/// Where the player stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionPhase {
    /// Steering the ball toward the goal
    Navigating,
    /// Ball touched the goal; walls are collapsing
    Won,
}

/// Map a key-up code to a steering direction (W/A/S/D)
pub fn key_direction(code: u32) -> Option<Direction> {
    match code {
        KEY_W => Some(Direction::Up),
        KEY_D => Some(Direction::Right),
        KEY_S => Some(Direction::Down),
        KEY_A => Some(Direction::Left),
        _ => None,
    }
}

/// Velocity change for one key press; screen y grows downward
pub fn velocity_delta(direction: Direction, step: f32) -> Vec2 {
    match direction {
        Direction::Up => Vec2::new(0.0, -step),
        Direction::Right => Vec2::new(step, 0.0),
        Direction::Down => Vec2::new(0.0, step),
        Direction::Left => Vec2::new(-step, 0.0),
    }
}

/// True when the pair is exactly {ball, goal} in either order
pub fn is_ball_goal_contact<W: PhysicsWorld + ?Sized>(world: &W, pair: &CollisionPair) -> bool {
    matches!(
        (world.label(pair.body_a), world.label(pair.body_b)),
        (Some(BodyLabel::Ball), Some(BodyLabel::Goal))
            | (Some(BodyLabel::Goal), Some(BodyLabel::Ball))
    )
}

/// One playthrough of one maze
pub struct Session<W: PhysicsWorld> {
    world: W,
    ball: BodyId,
    goal: BodyId,
    phase: SessionPhase,
    /// Cleared by the first key press (the intro overlay hides then)
    intro_pending: bool,
    velocity_step: f32,
    win_gravity: f32,
}

impl<W: PhysicsWorld> Session<W> {
    /// Register every body with the engine and switch gravity off
    pub fn new(mut world: W, geometry: &MazeGeometry, settings: &Settings) -> Self {
        world.set_gravity(Vec2::ZERO);

        for body in geometry.borders.iter().chain(&geometry.walls) {
            world.add_body(body.clone());
        }
        let goal = world.add_body(geometry.goal.clone());
        let ball = world.add_body(geometry.ball.clone());

        for body in [&geometry.goal, &geometry.ball] {
            log::debug!(
                "Registered {} at {:?} ({})",
                body.label.map_or("frame", |l| l.as_str()),
                body.position,
                body.fill.css().unwrap_or("default")
            );
        }

        log::info!(
            "Session ready: {} walls, ball {:?}, goal {:?}",
            geometry.walls.len(),
            ball,
            goal
        );

        Self {
            world,
            ball,
            goal,
            phase: SessionPhase::Navigating,
            intro_pending: true,
            velocity_step: settings.velocity_step,
            win_gravity: settings.win_gravity,
        }
    }

    /// Validate `settings`, generate a maze from them and start a session on it
    pub fn from_settings(
        world: W,
        settings: &Settings,
    ) -> Result<(Self, Maze), SettingsError> {
        settings.validate()?;
        let dims = settings.dimensions()?;
        let seed = settings.seed_or_random();
        log::info!(
            "Generating {}x{} maze with seed: {}",
            dims.rows(),
            dims.columns(),
            seed
        );

        let maze = Maze::from_seed(dims, seed, None)?;
        let unit = UnitSize::from_viewport(settings.width, settings.height, dims);
        let geometry = map_maze(&maze, unit, &GeometryParams::from(settings));
        Ok((Self::new(world, &geometry, settings), maze))
    }

    /// Steer the ball; returns the direction applied, if the key is bound
    pub fn handle_key_up(&mut self, code: u32) -> Option<Direction> {
        self.intro_pending = false;

        let direction = key_direction(code)?;
        let delta = velocity_delta(direction, self.velocity_step);
        let velocity = self.world.velocity(self.ball) + delta;
        self.world.set_velocity(self.ball, velocity);
        log::trace!("Key {} -> {:?}, velocity {:?}", code, direction, velocity);
        Some(direction)
    }

    /// Process one tick's collision starts; returns true if the goal was touched
    pub fn handle_collisions(&mut self, pairs: &[CollisionPair]) -> bool {
        let mut reached = false;
        for pair in pairs {
            if is_ball_goal_contact(&self.world, pair) {
                self.release_walls();
                reached = true;
            }
        }
        reached
    }

    /// Win effect; safe to repeat while the ball keeps touching the goal
    fn release_walls(&mut self) {
        if self.phase != SessionPhase::Won {
            log::info!("Goal reached!");
        }
        self.phase = SessionPhase::Won;
        self.world.set_gravity(Vec2::new(0.0, self.win_gravity));

        for id in self.world.body_ids() {
            if self.world.label(id) == Some(BodyLabel::Wall) {
                self.world.set_static(id, false);
            }
        }
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn intro_pending(&self) -> bool {
        self.intro_pending
    }

    pub fn ball(&self) -> BodyId {
        self.ball
    }

    pub fn goal(&self) -> BodyId {
        self.goal
    }

    pub fn world(&self) -> &W {
        &self.world
    }

    /// Engine access for the update loop
    pub fn world_mut(&mut self) -> &mut W {
        &mut self.world
    }

    pub fn into_world(self) -> W {
        self.world
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maze::Dimensions;
    use crate::maze::testing::FixedOrder;
    use crate::world::physics::BodyStore;

    fn session() -> Session<BodyStore> {
        // 2x2 maze with a single wall
        let mut rng = FixedOrder::clockwise_from_right();
        let maze = Maze::generate(Dimensions::new(2, 2).unwrap(), &mut rng, None).unwrap();
        let geometry = map_maze(
            &maze,
            UnitSize { x: 50.0, y: 50.0 },
            &GeometryParams::default(),
        );
        Session::new(BodyStore::new(), &geometry, &Settings::default())
    }

    fn wall_id(session: &Session<BodyStore>) -> BodyId {
        session.world().with_label(BodyLabel::Wall).next().unwrap().id
    }

    #[test]
    fn test_new_registers_bodies_without_gravity() {
        let session = session();
        let world = session.world();
        // 4 borders + 1 wall + goal + ball
        assert_eq!(world.len(), 7);
        assert_eq!(world.gravity(), Vec2::ZERO);
        assert_eq!(world.label(session.ball()), Some(BodyLabel::Ball));
        assert_eq!(world.label(session.goal()), Some(BodyLabel::Goal));
        assert_eq!(session.phase(), SessionPhase::Navigating);
        assert!(session.intro_pending());
    }

    #[test]
    fn test_up_key_adds_negative_y() {
        let mut session = session();
        let ball = session.ball();
        session.world_mut().set_velocity(ball, Vec2::new(2.0, 1.0));

        assert_eq!(session.handle_key_up(KEY_W), Some(Direction::Up));
        assert_eq!(session.world().velocity(ball), Vec2::new(2.0, -4.0));
        assert!(!session.intro_pending());
    }

    #[test]
    fn test_each_key_moves_one_axis() {
        let start = Vec2::new(-3.0, 7.0);
        let cases = [
            (KEY_D, Direction::Right, Vec2::new(2.0, 7.0)),
            (KEY_S, Direction::Down, Vec2::new(-3.0, 12.0)),
            (KEY_A, Direction::Left, Vec2::new(-8.0, 7.0)),
        ];
        for (code, direction, expected) in cases {
            let mut session = session();
            let ball = session.ball();
            session.world_mut().set_velocity(ball, start);

            assert_eq!(session.handle_key_up(code), Some(direction));
            assert_eq!(session.world().velocity(ball), expected);
        }
    }

    #[test]
    fn test_presses_accumulate() {
        let mut session = session();
        session.handle_key_up(KEY_D);
        session.handle_key_up(KEY_D);
        session.handle_key_up(KEY_W);
        assert_eq!(session.world().velocity(session.ball()), Vec2::new(10.0, -5.0));
    }

    #[test]
    fn test_unbound_keys_are_ignored() {
        let mut session = session();
        assert_eq!(session.handle_key_up(32), None);
        assert_eq!(session.handle_key_up(38), None);
        assert_eq!(session.world().velocity(session.ball()), Vec2::ZERO);
        // Any key still dismisses the intro
        assert!(!session.intro_pending());
    }

    #[test]
    fn test_ball_goal_collision_wins() {
        let mut session = session();
        let wall = wall_id(&session);
        assert!(session.world().is_static(wall));

        let pair = CollisionPair::new(session.goal(), session.ball());
        assert!(session.handle_collisions(&[pair]));

        assert_eq!(session.phase(), SessionPhase::Won);
        assert_eq!(session.world().gravity(), Vec2::new(0.0, WIN_GRAVITY));
        assert!(!session.world().is_static(wall));
        // Goal and frame stay put
        assert!(session.world().is_static(session.goal()));
        assert!(session.world().is_static(BodyId(0)));
    }

    #[test]
    fn test_wall_ball_collision_does_not_win() {
        let mut session = session();
        let wall = wall_id(&session);

        let pairs = [
            CollisionPair::new(wall, session.ball()),
            CollisionPair::new(session.ball(), BodyId(0)),
            CollisionPair::new(session.goal(), session.goal()),
        ];
        assert!(!session.handle_collisions(&pairs));
        assert_eq!(session.phase(), SessionPhase::Navigating);
        assert_eq!(session.world().gravity(), Vec2::ZERO);
        assert!(session.world().is_static(wall));
    }

    #[test]
    fn test_repeated_goal_contact_is_idempotent() {
        let mut session = session();
        let pair = CollisionPair::new(session.ball(), session.goal());
        assert!(session.handle_collisions(&[pair]));
        let after_first = session.world().clone();

        assert!(session.handle_collisions(&[pair, pair]));
        assert_eq!(session.phase(), SessionPhase::Won);
        assert_eq!(session.world().gravity(), after_first.gravity());
        for id in after_first.body_ids() {
            assert_eq!(session.world().is_static(id), after_first.is_static(id));
        }
    }

    #[test]
    fn test_from_settings_uses_seed() {
        let settings = Settings {
            rows: 4,
            columns: 5,
            seed: Some(2024),
            ..Default::default()
        };
        let (a, maze_a) = Session::from_settings(BodyStore::new(), &settings).unwrap();
        let (_, maze_b) = Session::from_settings(BodyStore::new(), &settings).unwrap();
        assert_eq!(maze_a, maze_b);
        assert_eq!(
            a.world().with_label(BodyLabel::Wall).count(),
            maze_a.wall_count()
        );
    }

    #[test]
    fn test_from_settings_rejects_degenerate_viewport() {
        let settings = Settings {
            width: 0.0,
            ball_radius_divisor: 0.0,
            seed: Some(1),
            ..Default::default()
        };
        let err = Session::from_settings(BodyStore::new(), &settings).err().unwrap();
        assert!(matches!(err, SettingsError::Invalid { .. }));
        assert!(err.to_string().contains("width"));
    }

    #[test]
    fn test_from_settings_rejects_zero_rows() {
        let settings = Settings {
            rows: 0,
            ..Default::default()
        };
        assert!(Session::from_settings(BodyStore::new(), &settings).is_err());
    }
}
