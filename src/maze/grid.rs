//! Grid model: visited cells and the passages between them
//!
//! Passages are stored as two matrices:
//! - verticals: rows x (columns - 1), `true` = no wall between (r, c) and (r, c + 1)
//! - horizontals: (rows - 1) x columns, `true` = no wall between (r, c) and (r + 1, c)

use serde::{Deserialize, Serialize};

use crate::error::{MazeError, Result};

/// Maze size in cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Dimensions {
    rows: usize,
    columns: usize,
}

impl Dimensions {
    pub fn new(rows: usize, columns: usize) -> Result<Self> {
        if rows == 0 || columns == 0 {
            return Err(MazeError::InvalidDimensions { rows, columns });
        }
        Ok(Self { rows, columns })
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Total number of cells
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.rows * self.columns
    }

    #[inline]
    pub fn contains(&self, cell: Cell) -> bool {
        cell.row < self.rows && cell.column < self.columns
    }

    /// Returns `OutOfRange` unless the cell lies inside the grid
    pub fn check(&self, cell: Cell) -> Result<()> {
        if self.contains(cell) {
            Ok(())
        } else {
            Err(MazeError::OutOfRange {
                row: cell.row,
                column: cell.column,
                rows: self.rows,
                columns: self.columns,
            })
        }
    }

    /// Every cell in row-major order
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.rows)
            .flat_map(move |row| (0..self.columns).map(move |column| Cell::new(row, column)))
    }

    /// The bottom-right cell
    pub fn last_cell(&self) -> Cell {
        Cell::new(self.rows - 1, self.columns - 1)
    }
}

/// A (row, column) grid address
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub row: usize,
    pub column: usize,
}

impl Cell {
    pub const fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }

    /// The adjacent cell in `direction`, or None if it falls off the grid
    pub fn step(self, direction: Direction, dims: Dimensions) -> Option<Cell> {
        let next = match direction {
            Direction::Up => Cell::new(self.row.checked_sub(1)?, self.column),
            Direction::Right => Cell::new(self.row, self.column + 1),
            Direction::Down => Cell::new(self.row + 1, self.column),
            Direction::Left => Cell::new(self.row, self.column.checked_sub(1)?),
        };
        dims.contains(next).then_some(next)
    }

    /// Direction from `self` to `other` if the two share an edge
    pub fn direction_to(self, other: Cell) -> Option<Direction> {
        match (
            other.row as isize - self.row as isize,
            other.column as isize - self.column as isize,
        ) {
            (-1, 0) => Some(Direction::Up),
            (0, 1) => Some(Direction::Right),
            (1, 0) => Some(Direction::Down),
            (0, -1) => Some(Direction::Left),
            _ => None,
        }
    }
}

/// One of the four grid moves
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    /// Candidate order before shuffling
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];
}

/// Row-major boolean matrix; either dimension may be zero
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawPassageMatrix")]
pub struct PassageMatrix {
    rows: usize,
    columns: usize,
    cells: Vec<bool>,
}

/// Unchecked wire form of [`PassageMatrix`]
#[derive(Deserialize)]
struct RawPassageMatrix {
    rows: usize,
    columns: usize,
    cells: Vec<bool>,
}

impl TryFrom<RawPassageMatrix> for PassageMatrix {
    type Error = String;

    fn try_from(raw: RawPassageMatrix) -> std::result::Result<Self, Self::Error> {
        let expected = raw.rows.checked_mul(raw.columns);
        if expected != Some(raw.cells.len()) {
            return Err(format!(
                "{}x{} passage matrix needs {} cells, got {}",
                raw.rows,
                raw.columns,
                raw.rows.saturating_mul(raw.columns),
                raw.cells.len()
            ));
        }
        Ok(Self {
            rows: raw.rows,
            columns: raw.columns,
            cells: raw.cells,
        })
    }
}

impl PassageMatrix {
    pub fn new(rows: usize, columns: usize) -> Self {
        Self {
            rows,
            columns,
            cells: vec![false; rows * columns],
        }
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Entry at (row, column); out-of-range reads are closed
    pub fn get(&self, row: usize, column: usize) -> bool {
        row < self.rows && column < self.columns && self.cells[row * self.columns + column]
    }

    fn set(&mut self, row: usize, column: usize) {
        debug_assert!(row < self.rows && column < self.columns);
        self.cells[row * self.columns + column] = true;
    }

    /// Number of open entries
    pub fn count_open(&self) -> usize {
        self.cells.iter().filter(|&&open| open).count()
    }

    /// Number of closed entries (walls)
    pub fn count_closed(&self) -> usize {
        self.cells.len() - self.count_open()
    }

    /// Iterate `(row, column, open)` in row-major order
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, bool)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &open)| (i / self.columns, i % self.columns, open))
    }

    /// Rows as nested vectors, for fixtures and debugging
    pub fn to_rows(&self) -> Vec<Vec<bool>> {
        if self.columns == 0 {
            return vec![Vec::new(); self.rows];
        }
        self.cells.chunks(self.columns).map(<[bool]>::to_vec).collect()
    }
}

/// Mutable generation state: visited flags plus both passage matrices
#[derive(Debug, Clone)]
pub struct Grid {
    dims: Dimensions,
    visited: Vec<bool>,
    verticals: PassageMatrix,
    horizontals: PassageMatrix,
}

impl Grid {
    /// Fresh grid with every cell unvisited and every wall standing
    pub fn new(dims: Dimensions) -> Self {
        Self {
            dims,
            visited: vec![false; dims.cell_count()],
            verticals: PassageMatrix::new(dims.rows(), dims.columns() - 1),
            horizontals: PassageMatrix::new(dims.rows() - 1, dims.columns()),
        }
    }

    #[inline]
    pub fn dimensions(&self) -> Dimensions {
        self.dims
    }

    pub fn is_visited(&self, cell: Cell) -> Result<bool> {
        self.dims.check(cell)?;
        Ok(self.visited[cell.row * self.dims.columns() + cell.column])
    }

    pub fn mark_visited(&mut self, cell: Cell) -> Result<()> {
        self.dims.check(cell)?;
        self.visited[cell.row * self.dims.columns() + cell.column] = true;
        Ok(())
    }

    /// Remove the wall between two edge-sharing cells
    pub fn open_passage(&mut self, a: Cell, b: Cell) -> Result<()> {
        self.dims.check(a)?;
        self.dims.check(b)?;
        match a.direction_to(b) {
            Some(Direction::Right) => self.verticals.set(a.row, a.column),
            Some(Direction::Left) => self.verticals.set(a.row, b.column),
            Some(Direction::Down) => self.horizontals.set(a.row, a.column),
            Some(Direction::Up) => self.horizontals.set(b.row, a.column),
            None => return Err(MazeError::InvalidAdjacency { from: a, to: b }),
        }
        Ok(())
    }

    /// Whether a passage joins two edge-sharing cells
    pub fn is_open(&self, a: Cell, b: Cell) -> Result<bool> {
        self.dims.check(a)?;
        self.dims.check(b)?;
        passage_open(&self.verticals, &self.horizontals, a, b)
    }

    pub fn open_passage_count(&self) -> usize {
        self.verticals.count_open() + self.horizontals.count_open()
    }

    pub fn verticals(&self) -> &PassageMatrix {
        &self.verticals
    }

    pub fn horizontals(&self) -> &PassageMatrix {
        &self.horizontals
    }

    /// Hand the passage matrices over once generation is done
    pub(crate) fn into_passages(self) -> (PassageMatrix, PassageMatrix) {
        (self.verticals, self.horizontals)
    }
}

/// Shared lookup for `Grid` and the frozen `Maze`; cells must already be in range
pub(crate) fn passage_open(
    verticals: &PassageMatrix,
    horizontals: &PassageMatrix,
    a: Cell,
    b: Cell,
) -> Result<bool> {
    match a.direction_to(b) {
        Some(Direction::Right) => Ok(verticals.get(a.row, a.column)),
        Some(Direction::Left) => Ok(verticals.get(a.row, b.column)),
        Some(Direction::Down) => Ok(horizontals.get(a.row, a.column)),
        Some(Direction::Up) => Ok(horizontals.get(b.row, a.column)),
        None => Err(MazeError::InvalidAdjacency { from: a, to: b }),
    }
}
