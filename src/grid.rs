use crate::Error;
use lazy_static::lazy_static;
use std::fmt;
use std::ops::Deref;
use std::str::FromStr;

const N: usize = 15;
const Q: usize = 1 + N / 2;

// Standard scrabble premium layout, upper left quarter. The full board is
// this quarter mirrored horizontally and vertically, with the double word
// square at the center.
// http://en.wikipedia.org/wiki/Scrabble#Scoring
const QUARTER_BOARD: [&str; Q] = [
    "3w -- -- 2l -- -- -- 3w",
    "-- 2w -- -- -- 3l -- --",
    "-- -- 2w -- -- -- 2l --",
    "2l -- -- 2w -- -- -- 2l",
    "-- -- -- -- 2w -- -- --",
    "-- 3l -- -- -- 3l -- --",
    "-- -- 2l -- -- -- 2l --",
    "3w -- -- 2l -- -- -- 2w",
];

/// The premium value of one board square.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Premium {
    Normal,
    LetterBonus(u32),
    WordBonus(u32),
}

use Premium::{LetterBonus, Normal, WordBonus};

impl Premium {
    /// The multiplier applied to a letter placed on this square.
    pub fn letter_multiplier(self) -> u32 {
        match self {
            LetterBonus(n) => n,
            _ => 1,
        }
    }

    /// The multiplier applied to a whole word crossing this square.
    pub fn word_multiplier(self) -> u32 {
        match self {
            WordBonus(n) => n,
            _ => 1,
        }
    }
}

impl fmt::Display for Premium {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Normal => write!(f, "--"),
            LetterBonus(n) => write!(f, "{}l", n),
            WordBonus(n) => write!(f, "{}w", n),
        }
    }
}

impl FromStr for Premium {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "--" => Ok(Normal),
            "2l" => Ok(LetterBonus(2)),
            "3l" => Ok(LetterBonus(3)),
            "2w" => Ok(WordBonus(2)),
            "3w" => Ok(WordBonus(3)),
            _ => Err(Error::InvalidPremium(String::from(s))),
        }
    }
}

type Inner = [[Premium; N]; N];

/// The premium layout of a scrabble board: 15x15 squares with possible
/// letter/word bonus. The layout is fixed for the whole game; the standard
/// board is built once and shared through [`premiums`](crate::premiums).
#[derive(Debug, Clone, PartialEq)]
pub struct Grid(Inner);

impl Deref for Grid {
    type Target = Inner;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_strings().join("\n"))
    }
}

lazy_static! {
    static ref STANDARD: Grid = Grid::expand_quarter_board(&QUARTER_BOARD);
}

/// The standard scrabble premium layout.
pub fn premiums() -> &'static Grid {
    &STANDARD
}

impl Grid {
    /// Create a new empty grid of 15x15 cells with no bonus.
    fn empty() -> Grid {
        Grid([[Normal; N]; N])
    }

    /// Create a symmetrical board by mirroring a quarter board
    /// horizontally and vertically.
    fn expand_quarter_board(qb: &[&str; Q]) -> Grid {
        let mut grid = Grid::empty();
        for (i, row) in qb.iter().enumerate() {
            let row = row.split(' ').collect::<Vec<&str>>();
            assert!(row.len() == Q);
            for (j, c) in row.iter().enumerate() {
                let val = c.parse().unwrap();
                grid.0[i][j] = val;
                grid.0[N - i - 1][j] = val;
                grid.0[i][N - j - 1] = val;
                grid.0[N - i - 1][N - j - 1] = val;
            }
        }
        grid
    }

    /// The letter multiplier at (`row`, `col`).
    pub fn letter_multiplier(&self, row: usize, col: usize) -> u32 {
        self.0[row][col].letter_multiplier()
    }

    /// The word multiplier at (`row`, `col`).
    pub fn word_multiplier(&self, row: usize, col: usize) -> u32 {
        self.0[row][col].word_multiplier()
    }

    /// Get the grid as a vec of 15 strings.
    pub fn to_strings(&self) -> Vec<String> {
        self.0
            .iter()
            .map(|row| {
                row.iter()
                    .map(Premium::to_string)
                    .collect::<Vec<String>>()
                    .join(" ")
            })
            .collect::<Vec<_>>()
    }

    /// Create a `Grid` from strings.
    /// Parameter `grid` must have 15 rows, each row consisting of 15
    /// premium cells joined by spaces.
    ///
    /// ## Errors
    /// If `grid` has wrong dimensions, or elements can not be parsed as a
    /// [`Premium`].
    pub fn from_strings<S: AsRef<str>>(grid: &[S]) -> Result<Grid, Error> {
        if grid.len() != N {
            return Err(Error::InvalidRowCount(grid.len()));
        }
        let mut result = Grid::empty();
        for (i, row) in grid.iter().enumerate() {
            let row: Vec<&str> = row.as_ref().split(' ').collect();
            if row.len() != N {
                return Err(Error::InvalidRowLength(row.join(" "), row.len()));
            }
            for (j, &cell) in row.iter().enumerate() {
                result.0[i][j] = cell.parse()?;
            }
        }
        Ok(result)
    }
}
