//! A scrabble move finder library for Rust.
//! <br>
//! Given a board and a rack of tiles, this crate enumerates every word
//! placement that physically fits, scores each one under the official
//! scrabble rules (premium squares, blank tiles, crossing words, the
//! 50 point bonus for playing all 7 tiles), and picks the highest scoring
//! legal move. The dictionary is indexed by letter set, so candidate words
//! are found by subset lookup instead of scanning the whole word list,
//! including racks with one or two blank tiles.
//!
//! # How to use `scrabble_solver`
//! Build a [`Dictionary`] from a word list, create a [`Board`], and hand
//! [`Board::generate_solutions`] a [`Rack`]. The returned candidates are
//! scored and filtered by [`Board::find_best_solution`]; the winning
//! [`Solution`] can then be played with [`Board::add_solution`].
//!
//! # Basic usage
//! ```
//! # use scrabble_solver::{Board, Dictionary, Rack, Error};
//! let dictionary = Dictionary::from_words(&["HELLO", "HELL"]);
//! let rack: Rack = "HELLOXX".parse()?;
//! let mut board = Board::new();
//! let solutions = board.generate_solutions(&rack, &dictionary)?;
//! let best = board.find_best_solution(&solutions, &dictionary)?.unwrap();
//! assert_eq!(best.word, "HELLO");
//! board.add_solution(&best)?;
//! println!("{}", board);
//! # Ok::<(), Error>(())
//! ```
mod bag;
mod board;
mod dictionary;
mod direction;
mod error;
mod grid;
mod letterset;
mod rack;
mod solution;

pub use crate::bag::Bag;
pub use crate::board::{Board, Fit, PlacedTile, N};
pub use crate::dictionary::Dictionary;
pub use crate::direction::{Direction, DIRECTIONS};
pub use crate::error::Error;
pub use crate::grid::{premiums, Grid, Premium};
pub use crate::letterset::LetterSet;
pub use crate::rack::{Rack, BLANK, RACK_CAPACITY};
pub use crate::solution::{letter_score, Solution, TileIndices, BINGO_BONUS};
