//! Randomized depth-first maze carving (recursive backtracker)
//!
//! The walk runs on an explicit stack so large grids cannot exhaust the call
//! stack. Each frame keeps the shuffled neighbor order for its cell and a
//! cursor into it, which reproduces the recursive visitation order exactly:
//! a cell's permutation is drawn the moment the cell is entered.

use std::collections::VecDeque;

use rand::Rng;
use rand::seq::SliceRandom;
use rand_pcg::Pcg32;
use serde::Serialize;

use super::grid::{Cell, Dimensions, Direction, Grid, PassageMatrix, passage_open};
use crate::error::Result;

/// Source of uniform randomness for carving
pub trait Randomness {
    /// Reorder the four candidates into a uniformly random permutation
    fn shuffle_directions(&mut self, directions: &mut [Direction; 4]);

    /// Uniform index in `0..upper`
    fn pick_index(&mut self, upper: usize) -> usize;
}

impl Randomness for Pcg32 {
    fn shuffle_directions(&mut self, directions: &mut [Direction; 4]) {
        directions.shuffle(self);
    }

    fn pick_index(&mut self, upper: usize) -> usize {
        self.random_range(0..upper)
    }
}

/// One cell on the carving stack
#[derive(Debug)]
struct Frame {
    cell: Cell,
    order: [Direction; 4],
    next: usize,
}

/// Owns the grid for a single generation pass
pub struct Generator<'r, R: Randomness + ?Sized> {
    grid: Grid,
    rng: &'r mut R,
    stack: Vec<Frame>,
}

impl<'r, R: Randomness + ?Sized> Generator<'r, R> {
    pub fn new(dims: Dimensions, rng: &'r mut R) -> Self {
        Self {
            grid: Grid::new(dims),
            rng,
            stack: Vec::with_capacity(dims.cell_count()),
        }
    }

    /// Carve the whole maze, starting at `start` or at a random cell
    pub fn generate(mut self, start: Option<Cell>) -> Result<Maze> {
        let dims = self.grid.dimensions();
        let start = match start {
            Some(cell) => {
                dims.check(cell)?;
                cell
            }
            None => {
                let row = self.rng.pick_index(dims.rows());
                let column = self.rng.pick_index(dims.columns());
                Cell::new(row, column)
            }
        };

        self.enter(start)?;

        while let Some(frame) = self.stack.last_mut() {
            let Some(&direction) = frame.order.get(frame.next) else {
                // Every candidate tried: backtrack
                self.stack.pop();
                continue;
            };
            frame.next += 1;
            let current = frame.cell;

            let Some(neighbor) = current.step(direction, dims) else {
                continue;
            };
            if self.grid.is_visited(neighbor)? {
                continue;
            }

            self.grid.open_passage(current, neighbor)?;
            self.enter(neighbor)?;
        }

        log::debug!(
            "Carved {}x{} maze from {:?} with {} passages",
            dims.rows(),
            dims.columns(),
            start,
            self.grid.open_passage_count()
        );

        let (verticals, horizontals) = self.grid.into_passages();
        Ok(Maze {
            dims,
            start,
            verticals,
            horizontals,
        })
    }

    fn enter(&mut self, cell: Cell) -> Result<()> {
        self.grid.mark_visited(cell)?;
        let mut order = Direction::ALL;
        self.rng.shuffle_directions(&mut order);
        self.stack.push(Frame {
            cell,
            order,
            next: 0,
        });
        Ok(())
    }
}

/// A finished maze; immutable once generated
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Maze {
    dims: Dimensions,
    start: Cell,
    verticals: PassageMatrix,
    horizontals: PassageMatrix,
}

impl Maze {
    /// Generate a maze; see [`Generator`]
    pub fn generate<R: Randomness + ?Sized>(
        dims: Dimensions,
        rng: &mut R,
        start: Option<Cell>,
    ) -> Result<Self> {
        Generator::new(dims, rng).generate(start)
    }

    /// Generate from a seed with the default PCG stream
    pub fn from_seed(dims: Dimensions, seed: u64, start: Option<Cell>) -> Result<Self> {
        use rand::SeedableRng;
        let mut rng = Pcg32::seed_from_u64(seed);
        Self::generate(dims, &mut rng, start)
    }

    #[inline]
    pub fn dimensions(&self) -> Dimensions {
        self.dims
    }

    /// Cell the carving walk started from
    #[inline]
    pub fn start(&self) -> Cell {
        self.start
    }

    pub fn verticals(&self) -> &PassageMatrix {
        &self.verticals
    }

    pub fn horizontals(&self) -> &PassageMatrix {
        &self.horizontals
    }

    pub fn is_open(&self, a: Cell, b: Cell) -> Result<bool> {
        self.dims.check(a)?;
        self.dims.check(b)?;
        passage_open(&self.verticals, &self.horizontals, a, b)
    }

    pub fn open_passage_count(&self) -> usize {
        self.verticals.count_open() + self.horizontals.count_open()
    }

    /// Number of walls between cells (excludes the outer boundary)
    pub fn wall_count(&self) -> usize {
        self.verticals.count_closed() + self.horizontals.count_closed()
    }

    /// Cells joined to `cell` by an open passage
    pub fn open_neighbors(&self, cell: Cell) -> Result<Vec<Cell>> {
        self.dims.check(cell)?;
        let mut neighbors = Vec::with_capacity(4);
        for direction in Direction::ALL {
            if let Some(next) = cell.step(direction, self.dims) {
                if passage_open(&self.verticals, &self.horizontals, cell, next)? {
                    neighbors.push(next);
                }
            }
        }
        Ok(neighbors)
    }

    /// Breadth-first count of cells reachable from `from` through open passages
    pub fn reachable_from(&self, from: Cell) -> Result<usize> {
        self.dims.check(from)?;
        let columns = self.dims.columns();
        let mut seen = vec![false; self.dims.cell_count()];
        let mut queue = VecDeque::from([from]);
        seen[from.row * columns + from.column] = true;
        let mut count = 0;

        while let Some(cell) = queue.pop_front() {
            count += 1;
            for next in self.open_neighbors(cell)? {
                let index = next.row * columns + next.column;
                if !seen[index] {
                    seen[index] = true;
                    queue.push_back(next);
                }
            }
        }

        Ok(count)
    }
}
