//! Maze generation module
//!
//! Pure and deterministic given its randomness source:
//! - No rendering or physics dependencies
//! - Grids are owned by one generation pass and frozen afterwards

pub mod generator;
pub mod grid;
pub mod render;
#[cfg(test)]
pub(crate) mod testing;

pub use generator::{Generator, Maze, Randomness};
pub use grid::{Cell, Dimensions, Direction, Grid, PassageMatrix};
