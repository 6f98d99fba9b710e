//! Maze-to-geometry mapping
//!
//! Turns passage matrices into axis-aligned wall rectangles in viewport
//! coordinates (origin top-left, y down), plus the goal and the ball.
//! Pure: no randomness, no physics.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::maze::{Dimensions, Maze};
use crate::settings::Settings;

/// Tag the session uses to recognize bodies in collision events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BodyLabel {
    Wall,
    Goal,
    Ball,
}

impl BodyLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            BodyLabel::Wall => "wall",
            BodyLabel::Goal => "goal",
            BodyLabel::Ball => "ball",
        }
    }
}

/// Visual fill handed to the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Fill {
    Teal,
    Green,
    LightBlue,
    /// Renderer's default body color
    Plain,
}

impl Fill {
    /// CSS color name
    pub fn css(&self) -> Option<&'static str> {
        match self {
            Fill::Teal => Some("teal"),
            Fill::Green => Some("green"),
            Fill::LightBlue => Some("lightblue"),
            Fill::Plain => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Shape {
    /// Axis-aligned rectangle of the given full size
    Rect { size: Vec2 },
    Circle { radius: f32 },
}

/// Everything the physics world needs to create one body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodySpec {
    /// None for the viewport frame, which never reacts to game events
    pub label: Option<BodyLabel>,
    /// Center position
    pub position: Vec2,
    pub shape: Shape,
    pub is_static: bool,
    pub fill: Fill,
}

impl BodySpec {
    fn rect(label: Option<BodyLabel>, position: Vec2, size: Vec2, fill: Fill) -> Self {
        Self {
            label,
            position,
            shape: Shape::Rect { size },
            is_static: true,
            fill,
        }
    }
}

/// Size of one cell in viewport units
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UnitSize {
    pub x: f32,
    pub y: f32,
}

impl UnitSize {
    pub fn from_viewport(width: f32, height: f32, dims: Dimensions) -> Self {
        Self {
            x: width / dims.columns() as f32,
            y: height / dims.rows() as f32,
        }
    }

    #[inline]
    pub fn as_vec2(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

/// Fixed proportions of the generated bodies
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeometryParams {
    pub wall_thickness: f32,
    pub border_thickness: f32,
    pub goal_scale: f32,
    pub ball_radius_divisor: f32,
}

impl From<&Settings> for GeometryParams {
    fn from(settings: &Settings) -> Self {
        Self {
            wall_thickness: settings.wall_thickness,
            border_thickness: settings.border_thickness,
            goal_scale: settings.goal_scale,
            ball_radius_divisor: settings.ball_radius_divisor,
        }
    }
}

impl Default for GeometryParams {
    fn default() -> Self {
        Self::from(&Settings::default())
    }
}

/// Static layout of one maze
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MazeGeometry {
    pub unit: UnitSize,
    /// Full playfield size (unit * dimensions)
    pub viewport: Vec2,
    /// Frame around the viewport: top, bottom, left, right
    pub borders: Vec<BodySpec>,
    /// One rectangle per closed passage: horizontals first, then verticals
    pub walls: Vec<BodySpec>,
    pub goal: BodySpec,
    pub ball: BodySpec,
}

impl MazeGeometry {
    /// All bodies in registration order
    pub fn bodies(&self) -> impl Iterator<Item = &BodySpec> {
        self.borders
            .iter()
            .chain(&self.walls)
            .chain(std::iter::once(&self.goal))
            .chain(std::iter::once(&self.ball))
    }
}

/// Lay out walls, goal and ball for a finished maze
pub fn map_maze(maze: &Maze, unit: UnitSize, params: &GeometryParams) -> MazeGeometry {
    let dims = maze.dimensions();
    let viewport = Vec2::new(
        unit.x * dims.columns() as f32,
        unit.y * dims.rows() as f32,
    );

    let mut walls = Vec::with_capacity(maze.wall_count());

    // Wall along the bottom edge of (row, column)
    for (row, column, open) in maze.horizontals().iter() {
        if open {
            continue;
        }
        walls.push(BodySpec::rect(
            Some(BodyLabel::Wall),
            Vec2::new(
                column as f32 * unit.x + unit.x / 2.0,
                row as f32 * unit.y + unit.y,
            ),
            Vec2::new(unit.x, params.wall_thickness),
            Fill::Teal,
        ));
    }

    // Wall along the right edge of (row, column)
    for (row, column, open) in maze.verticals().iter() {
        if open {
            continue;
        }
        walls.push(BodySpec::rect(
            Some(BodyLabel::Wall),
            Vec2::new(
                column as f32 * unit.x + unit.x,
                row as f32 * unit.y + unit.y / 2.0,
            ),
            Vec2::new(params.wall_thickness, unit.y),
            Fill::Teal,
        ));
    }

    let goal = BodySpec::rect(
        Some(BodyLabel::Goal),
        viewport - unit.as_vec2() / 2.0,
        unit.as_vec2() * params.goal_scale,
        Fill::Green,
    );

    let ball = BodySpec {
        label: Some(BodyLabel::Ball),
        position: unit.as_vec2() / 2.0,
        shape: Shape::Circle {
            radius: unit.x.min(unit.y) / params.ball_radius_divisor,
        },
        is_static: false,
        fill: Fill::LightBlue,
    };

    log::debug!(
        "Mapped {}x{} maze to {} walls (cell {:.1}x{:.1})",
        dims.rows(),
        dims.columns(),
        walls.len(),
        unit.x,
        unit.y
    );

    MazeGeometry {
        unit,
        viewport,
        borders: border_walls(viewport, params.border_thickness),
        walls,
        goal,
        ball,
    }
}

/// Thin frame centered on each viewport edge
fn border_walls(viewport: Vec2, thickness: f32) -> Vec<BodySpec> {
    let Vec2 { x: w, y: h } = viewport;
    [
        (Vec2::new(w / 2.0, 0.0), Vec2::new(w, thickness)),
        (Vec2::new(w / 2.0, h), Vec2::new(w, thickness)),
        (Vec2::new(0.0, h / 2.0), Vec2::new(thickness, h)),
        (Vec2::new(w, h / 2.0), Vec2::new(thickness, h)),
    ]
    .into_iter()
    .map(|(position, size)| BodySpec::rect(None, position, size, Fill::Plain))
    .collect()
}
