use crate::direction::{Direction, DIRECTIONS};
use crate::rack::{Rack, BLANK, RACK_CAPACITY};
use crate::solution::{Solution, TileIndices};
use crate::{Dictionary, Error};
use log::{debug, info};
#[cfg(feature = "rayon")]
use rayon::prelude::*;
use std::fmt;
use std::time::Instant;
use tinyvec::ArrayVec;

/// Number of squares on a side of the board.
pub const N: usize = 15;

/// The center (starting) square. The first word must cross it.
pub(crate) const MID: usize = N / 2;

const CELL_COUNT: usize = N * N;

/// One square of the board: an optional letter, plus whether the tile
/// played there was a blank. Letters are never removed once played.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
struct Cell {
    letter: Option<u8>,
    blank: bool,
}

impl Cell {
    const EMPTY: Cell = Cell {
        letter: None,
        blank: false,
    };
}

/// One tile written by [`Board::add_word`]: where it went, and whether the
/// square was empty before. Only new tiles earn premium multipliers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PlacedTile {
    pub word_index: usize,
    pub row: usize,
    pub col: usize,
    pub is_new: bool,
}

/// How a word physically fits at a position: which positions in the word
/// were covered by a blank, and which rack positions were consumed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fit {
    pub word_blank_indices: TileIndices,
    pub rack_indices: TileIndices,
}

impl Fit {
    /// The number of rack tiles this fit consumes.
    pub fn tiles_used(&self) -> usize {
        self.rack_indices.len()
    }
}

/// Stores the board during a game: a 15x15 grid of played tiles.
///
/// The board is mutated only by playing validated words; speculative
/// placement works on a [`Clone`] of the board, which shares no data with
/// the original.
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    cells: [Cell; CELL_COUNT],
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

/// Display the board as 15 lines of 15 squares. Empty squares show as ".",
/// blank tiles as lower case letters.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in 0..N {
            for col in 0..N {
                let cell = self.cells[Self::index(row, col)];
                let ch = match cell.letter {
                    None => '.',
                    Some(letter) if cell.blank => letter.to_ascii_lowercase() as char,
                    Some(letter) => letter as char,
                };
                write!(f, "{}", ch)?;
            }
            if row < N - 1 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

impl Board {
    /// Create a new empty board.
    pub fn new() -> Board {
        Board {
            cells: [Cell::EMPTY; CELL_COUNT],
        }
    }

    /// Set up a board from 15 rows of 15 characters each. Upper case
    /// letters are normal tiles, lower case letters are blank tiles, any
    /// other character is an empty square. This is the inverse of the
    /// [`Display`](std::fmt::Display) format.
    ///
    /// ## Errors
    /// If the rows have the wrong dimensions.
    pub fn with_rows<S: AsRef<str>>(rows: &[S]) -> Result<Board, Error> {
        if rows.len() != N {
            return Err(Error::InvalidRowCount(rows.len()));
        }
        let mut board = Board::new();
        for (row, line) in rows.iter().enumerate() {
            let line = line.as_ref();
            let chars: Vec<char> = line.chars().collect();
            if chars.len() != N {
                return Err(Error::InvalidRowLength(line.to_string(), chars.len()));
            }
            for (col, &ch) in chars.iter().enumerate() {
                if ch.is_ascii_alphabetic() {
                    board.cells[Self::index(row, col)] = Cell {
                        letter: Some(ch.to_ascii_uppercase() as u8),
                        blank: ch.is_ascii_lowercase(),
                    };
                }
            }
        }
        Ok(board)
    }

    /// Given the row and column of a square, the index into the cells.
    fn index(row: usize, col: usize) -> usize {
        row * N + col
    }

    fn cell(&self, row: isize, col: isize) -> Option<Cell> {
        if row < 0 || col < 0 || row >= N as isize || col >= N as isize {
            return None;
        }
        Some(self.cells[Self::index(row as usize, col as usize)])
    }

    fn filled(&self, row: isize, col: isize) -> bool {
        self.cell(row, col).map_or(false, |cell| cell.letter.is_some())
    }

    /// Whether the whole board is empty. Only the center square needs
    /// checking, since the first word must cross it.
    pub fn is_empty(&self) -> bool {
        self.cells[Self::index(MID, MID)].letter.is_none()
    }

    /// Whether the square at (`row`, `col`) holds a tile.
    pub fn is_occupied(&self, row: usize, col: usize) -> bool {
        self.filled(row as isize, col as isize)
    }

    /// The letter at (`row`, `col`), or None if the square is empty or
    /// outside the board.
    pub fn tile_at(&self, row: usize, col: usize) -> Option<char> {
        self.cell(row as isize, col as isize)?
            .letter
            .map(|letter| letter as char)
    }

    /// Whether the tile at (`row`, `col`) was played as a blank.
    pub fn is_blank_at(&self, row: usize, col: usize) -> bool {
        self.cell(row as isize, col as isize)
            .map_or(false, |cell| cell.blank)
    }

    /// Add a word at the location and direction, marking the positions in
    /// `blank_positions` as blank tiles. Returns one [`PlacedTile`] per
    /// letter, recording whether its square was empty before.
    ///
    /// ## Errors
    /// - If the word runs outside the board.
    /// - If a square already holds a different letter. A square holding
    ///   the *same* letter is a legal crossing, not a conflict.
    pub fn add_word(
        &mut self,
        word: &str,
        row: usize,
        col: usize,
        direction: Direction,
        blank_positions: &[u8],
    ) -> Result<Vec<PlacedTile>, Error> {
        let mut placed = Vec::with_capacity(word.len());
        let (mut row, mut col) = (row, col);
        for (word_index, &letter) in word.as_bytes().iter().enumerate() {
            if row >= N || col >= N {
                return Err(Error::OutsideBoard { row, col });
            }
            let index = Self::index(row, col);
            match self.cells[index].letter {
                Some(existing) if existing != letter => {
                    return Err(Error::LetterMismatch { row, col });
                }
                _ => {}
            }
            placed.push(PlacedTile {
                word_index,
                row,
                col,
                is_new: self.cells[index].letter.is_none(),
            });
            self.cells[index].letter = Some(letter);
            if blank_positions.contains(&(word_index as u8)) {
                self.cells[index].blank = true;
            }
            let (r, c) = direction.step(row as isize, col as isize, 1);
            row = r as usize;
            col = c as usize;
        }
        Ok(placed)
    }

    /// Add a solution to the board. See [`add_word`](Board::add_word) for
    /// the returned value.
    pub fn add_solution(&mut self, solution: &Solution) -> Result<Vec<PlacedTile>, Error> {
        self.add_word(
            &solution.word,
            solution.row,
            solution.col,
            solution.direction,
            &solution.word_blank_indices,
        )
    }

    /// Whether a word can physically fit at the given location with the
    /// given rack. Squares already holding the right letter are reused;
    /// empty squares must be covered by a rack tile with the exact letter,
    /// or failing that by a blank. Returns `None` when the word does not
    /// fit. The rack itself is never modified.
    pub fn try_word(
        &self,
        word: &str,
        rack: &Rack,
        row: usize,
        col: usize,
        direction: Direction,
    ) -> Option<Fit> {
        let mut scratch: ArrayVec<[u8; RACK_CAPACITY]> = rack.tiles().iter().copied().collect();
        let mut fit = Fit::default();
        let (mut row, mut col) = (row, col);
        for (word_index, &letter) in word.as_bytes().iter().enumerate() {
            if row >= N || col >= N {
                return None;
            }
            let cell = self.cells[Self::index(row, col)];
            match cell.letter {
                None => {
                    // the rack must supply this letter, or a blank
                    let position = match scratch.iter().position(|&tile| tile == letter) {
                        Some(position) => position,
                        None => {
                            let position = scratch.iter().position(|&tile| tile == BLANK)?;
                            fit.word_blank_indices.push(word_index as u8);
                            position
                        }
                    };
                    scratch[position] = 0;
                    fit.rack_indices.push(position as u8);
                }
                Some(existing) if existing != letter => return None,
                Some(_) => {}
            }
            let (r, c) = direction.step(row as isize, col as isize, 1);
            row = r as usize;
            col = c as usize;
        }
        Some(fit)
    }

    /// Start at (`row`, `col`) and walk in `direction` and its opposite to
    /// the edges of the contiguous run of tiles through that square.
    /// Returns the run's starting square and its length.
    pub fn find_edges(&self, row: usize, col: usize, direction: Direction) -> (usize, usize, usize) {
        let (mut row, mut col) = (row as isize, col as isize);
        loop {
            let (r, c) = direction.back(row, col, 1);
            if !self.filled(r, c) {
                break;
            }
            row = r;
            col = c;
        }
        let mut length = 0;
        let (mut r, mut c) = (row, col);
        while self.filled(r, c) {
            length += 1;
            let (nr, nc) = direction.step(r, c, 1);
            r = nr;
            c = nc;
        }
        (row as usize, col as usize, length)
    }

    /// Read back the word of `length` tiles at the location and direction.
    /// Squares in the range are expected to be occupied; empty ones are
    /// skipped.
    pub fn word_at(&self, row: usize, col: usize, length: usize, direction: Direction) -> String {
        let mut word = String::with_capacity(length);
        let (mut row, mut col) = (row as isize, col as isize);
        for _ in 0..length {
            if let Some(cell) = self.cell(row, col) {
                if let Some(letter) = cell.letter {
                    word.push(letter as char);
                }
            }
            let (r, c) = direction.step(row, col, 1);
            row = r;
            col = c;
        }
        word
    }

    /// Whether any square directly beside the run of `length` squares from
    /// (`row`, `col`) in `direction` is occupied.
    pub fn has_neighboring_cell(
        &self,
        row: usize,
        col: usize,
        direction: Direction,
        length: usize,
    ) -> bool {
        (0..length as isize).any(|along| {
            let (r1, c1) = direction.relative(row as isize, col as isize, along, 1);
            let (r2, c2) = direction.relative(row as isize, col as isize, along, -1);
            self.filled(r1, c1) || self.filled(r2, c2)
        })
    }

    /// Whether a word of `length` squares starting at (`row`, `col`)
    /// covers the center square.
    fn covers_center(row: usize, col: usize, direction: Direction, length: usize) -> bool {
        let (last_row, last_col) = direction.step(row as isize, col as isize, length as isize - 1);
        row <= MID && col <= MID && last_row >= MID as isize && last_col >= MID as isize
    }

    /// Generate candidate solutions for the given rack. The candidates are
    /// guaranteed to fit physically but are not yet validated against the
    /// dictionary; that happens when they are scored.
    ///
    /// Candidates are produced in a fixed order: direction, then line,
    /// then word, then position along the line.
    ///
    /// ## Errors
    /// If the rack holds more than two blank tiles.
    pub fn generate_solutions(
        &self,
        rack: &Rack,
        dictionary: &Dictionary,
    ) -> Result<Vec<Solution>, Error> {
        let before = Instant::now();
        let mut solutions = Vec::new();
        for &direction in DIRECTIONS.iter() {
            for line in 0..N {
                self.solutions_in_line(rack, dictionary, line, direction, &mut solutions)?;
            }
        }
        info!(
            "generated {} candidate solutions in {:?}",
            solutions.len(),
            before.elapsed()
        );
        Ok(solutions)
    }

    /// Add the candidate solutions along one line (row or column) to the
    /// list. Candidates are only guaranteed to fit.
    fn solutions_in_line(
        &self,
        rack: &Rack,
        dictionary: &Dictionary,
        line: usize,
        direction: Direction,
        solutions: &mut Vec<Solution>,
    ) -> Result<(), Error> {
        // the letters we can use: the rack (blanks aside) plus every
        // letter already on this line
        let mut available = rack.letter_set();
        for offset in 0..N {
            let (row, col) = direction.absolute(offset, line);
            if let Some(letter) = self.cells[Self::index(row, col)].letter {
                available.insert(letter);
            }
        }

        let words = dictionary.words_for(available, rack.blank_count())?;
        debug!(
            "line {} {}: {:?} ({} words)",
            line,
            direction,
            available,
            words.len()
        );

        for word in words {
            for offset in 0..=(N - word.len()) {
                let (row, col) = direction.absolute(offset, line);
                let fit = match self.try_word(word, rack, row, col, direction) {
                    Some(fit) => fit,
                    None => continue,
                };
                let valid = if self.is_empty() {
                    // the first play uses only rack tiles and must cross
                    // the center square
                    fit.tiles_used() == word.len()
                        && Self::covers_center(row, col, direction, word.len())
                } else if fit.tiles_used() == word.len() {
                    // a word built entirely from the rack must lie next to
                    // a tile already on the board; extending the run at
                    // either end is generated separately as a longer word
                    self.has_neighboring_cell(row, col, direction, word.len())
                } else {
                    // reusing board tiles is fine as long as we play
                    // something ourselves
                    fit.tiles_used() > 0
                };
                if !valid {
                    continue;
                }
                solutions.push(Solution::new(
                    row,
                    col,
                    direction,
                    word,
                    fit.word_blank_indices.clone(),
                    fit.rack_indices.clone(),
                ));
                // when a blank stands in for a letter that occurs more
                // than once, the alternate positions score differently
                // where the word crosses others; emit those too
                for (i, &blank_index) in fit.word_blank_indices.iter().enumerate() {
                    let blank_letter = word.as_bytes()[blank_index as usize];
                    for (alternate, &letter) in word.as_bytes().iter().enumerate() {
                        if letter == blank_letter && alternate as u8 != blank_index {
                            let mut reassigned = fit.word_blank_indices.clone();
                            reassigned[i] = alternate as u8;
                            solutions.push(Solution::new(
                                row,
                                col,
                                direction,
                                word,
                                reassigned,
                                fit.rack_indices.clone(),
                            ));
                        }
                    }
                }
            }
        }
        Ok(())
    }

    /// Score the given candidates and return the best legal one, or `None`
    /// if no candidate forms only dictionary words. Candidates that tie on
    /// score keep the first one in the list; together with the fixed
    /// generation order this makes the choice deterministic.
    ///
    /// ## Errors
    /// If a candidate does not fit the board, which does not happen for
    /// candidates from [`generate_solutions`](Board::generate_solutions).
    #[cfg(feature = "rayon")]
    pub fn find_best_solution(
        &self,
        solutions: &[Solution],
        dictionary: &Dictionary,
    ) -> Result<Option<Solution>, Error> {
        let scored = solutions
            .par_iter()
            .map(|solution| {
                let mut solution = solution.clone();
                solution.determine_score(self, dictionary)?;
                Ok(solution)
            })
            .collect::<Result<Vec<Solution>, Error>>()?;
        Ok(Self::pick_best(scored))
    }

    #[cfg(not(feature = "rayon"))]
    pub fn find_best_solution(
        &self,
        solutions: &[Solution],
        dictionary: &Dictionary,
    ) -> Result<Option<Solution>, Error> {
        let scored = solutions
            .iter()
            .map(|solution| {
                let mut solution = solution.clone();
                solution.determine_score(self, dictionary)?;
                Ok(solution)
            })
            .collect::<Result<Vec<Solution>, Error>>()?;
        Ok(Self::pick_best(scored))
    }

    fn pick_best(scored: Vec<Solution>) -> Option<Solution> {
        let mut best: Option<Solution> = None;
        let mut best_score = 0;
        for solution in scored {
            if let Some(score) = solution.score {
                if score > best_score {
                    best_score = score;
                    best = Some(solution);
                }
            }
        }
        best
    }
}
