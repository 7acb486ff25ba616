use std::fmt;

/// The two directions a word can be played in.
///
/// A direction is a unit step on the board: `Horizontal` advances the
/// column, `Vertical` advances the row. All coordinate arithmetic used by
/// the board lives here, so callers never juggle row/column deltas
/// themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Horizontal,
    Vertical,
}

/// All known directions, in the order they are searched.
pub const DIRECTIONS: [Direction; 2] = [Direction::Horizontal, Direction::Vertical];

impl Direction {
    /// The (row, column) delta of one step in this direction.
    pub fn deltas(self) -> (isize, isize) {
        match self {
            Direction::Horizontal => (0, 1),
            Direction::Vertical => (1, 0),
        }
    }

    /// Step `distance` squares forward from (`row`, `col`).
    pub fn step(self, row: isize, col: isize, distance: isize) -> (isize, isize) {
        let (dr, dc) = self.deltas();
        (row + dr * distance, col + dc * distance)
    }

    /// Step `distance` squares backward from (`row`, `col`).
    pub fn back(self, row: isize, col: isize, distance: isize) -> (isize, isize) {
        self.step(row, col, -distance)
    }

    /// Given horizontal, returns vertical and vice versa.
    pub fn perpendicular(self) -> Direction {
        match self {
            Direction::Horizontal => Direction::Vertical,
            Direction::Vertical => Direction::Horizontal,
        }
    }

    /// Absolute (row, col) of the square at `offset` along the `line`'th
    /// row or column running in this direction.
    pub fn absolute(self, offset: usize, line: usize) -> (usize, usize) {
        match self {
            Direction::Horizontal => (line, offset),
            Direction::Vertical => (offset, line),
        }
    }

    /// The square `along` steps in this direction and `aside` steps
    /// perpendicular to it, relative to (`row`, `col`).
    pub fn relative(self, row: isize, col: isize, along: isize, aside: isize) -> (isize, isize) {
        let (dr, dc) = self.deltas();
        (row + dr * along + dc * aside, col + dc * along + dr * aside)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Direction::Horizontal => write!(f, "H"),
            Direction::Vertical => write!(f, "V"),
        }
    }
}
