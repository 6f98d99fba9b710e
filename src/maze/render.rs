//! Plain-text maze drawing for logs and the headless binary

use std::fmt;

use super::generator::Maze;
use super::grid::Cell;

impl Maze {
    /// Draw the maze with the ball cell as `o` and the goal cell as `X`
    pub fn to_ascii(&self) -> String {
        let dims = self.dimensions();
        let ball = Cell::new(0, 0);
        let goal = dims.last_cell();
        let mut out = String::new();

        out.push('+');
        for _ in 0..dims.columns() {
            out.push_str("---+");
        }
        out.push('\n');

        for row in 0..dims.rows() {
            out.push('|');
            for column in 0..dims.columns() {
                let cell = Cell::new(row, column);
                out.push_str(if cell == ball {
                    " o "
                } else if cell == goal {
                    " X "
                } else {
                    "   "
                });
                let open = column + 1 < dims.columns() && self.verticals().get(row, column);
                out.push(if open { ' ' } else { '|' });
            }
            out.push('\n');

            out.push('+');
            for column in 0..dims.columns() {
                let open = row + 1 < dims.rows() && self.horizontals().get(row, column);
                out.push_str(if open { "   +" } else { "---+" });
            }
            out.push('\n');
        }

        out
    }
}

impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_ascii())
    }
}

#[cfg(test)]
mod tests {
    use crate::maze::testing::FixedOrder;
    use crate::maze::{Dimensions, Maze};

    #[test]
    fn test_two_by_two_drawing() {
        let dims = Dimensions::new(2, 2).unwrap();
        let mut rng = FixedOrder::clockwise_from_right();
        let maze = Maze::generate(dims, &mut rng, None).unwrap();
        let expected = "\
+---+---+
| o     |
+---+   +
|     X |
+---+---+
";
        assert_eq!(maze.to_string(), expected);
    }

    #[test]
    fn test_single_cell_drawing() {
        let maze = Maze::from_seed(Dimensions::new(1, 1).unwrap(), 0, None).unwrap();
        // Ball and goal share the only cell; the ball wins the label
        assert_eq!(maze.to_ascii(), "+---+\n| o |\n+---+\n");
    }
}
