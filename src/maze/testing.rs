//! Randomness stand-ins for tests

use super::{Direction, Randomness};

/// Always yields the same neighbor order and picks index 0
pub(crate) struct FixedOrder(pub [Direction; 4]);

impl FixedOrder {
    /// right, down, left, up
    pub(crate) fn clockwise_from_right() -> Self {
        Self([
            Direction::Right,
            Direction::Down,
            Direction::Left,
            Direction::Up,
        ])
    }
}

impl Randomness for FixedOrder {
    fn shuffle_directions(&mut self, directions: &mut [Direction; 4]) {
        *directions = self.0;
    }

    fn pick_index(&mut self, _upper: usize) -> usize {
        0
    }
}
