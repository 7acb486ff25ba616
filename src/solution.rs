use crate::board::{Board, N};
use crate::direction::Direction;
use crate::grid::premiums;
use crate::rack::{Rack, RACK_CAPACITY};
use crate::{Dictionary, Error};
use std::fmt;
use tinyvec::ArrayVec;

/// How much each letter is worth, `A` through `Z`. Blank tiles are always
/// worth zero points, whatever letter they stand in for.
/// http://en.wikipedia.org/wiki/Scrabble_letter_distributions#English
const LETTER_SCORES: [u32; 26] = [
    1, 3, 3, 2, 1, 4, 2, 4, 1, 8, 5, 1, 3, 1, 1, 3, 10, 1, 1, 1, 1, 4, 4, 8, 4, 10,
];

/// The bonus for playing all 7 rack tiles in one turn.
pub const BINGO_BONUS: u32 = 50;

/// The point value of a letter tile.
pub fn letter_score(letter: u8) -> u32 {
    LETTER_SCORES[(letter.to_ascii_uppercase() - b'A') as usize]
}

/// A list of tile positions, indexing either into a word or into a rack.
pub type TileIndices = ArrayVec<[u8; RACK_CAPACITY]>;

/// A candidate move: a word at a position and direction, plus how it uses
/// the rack.
///
/// `word_blank_indices` lists the positions in `word` where a blank tile
/// stands in for the letter; `rack_indices` lists the rack positions that
/// were consumed. The generator leaves `score` unset; it is filled in by
/// [`determine_score`](Solution::determine_score), and stays `None` when
/// the placement creates a word that is not in the dictionary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    pub row: usize,
    pub col: usize,
    pub direction: Direction,
    pub word: String,
    pub word_blank_indices: TileIndices,
    pub rack_indices: TileIndices,
    pub score: Option<u32>,
}

impl Solution {
    pub fn new(
        row: usize,
        col: usize,
        direction: Direction,
        word: impl Into<String>,
        word_blank_indices: TileIndices,
        rack_indices: TileIndices,
    ) -> Solution {
        Solution {
            row,
            col,
            direction,
            word: word.into(),
            word_blank_indices,
            rack_indices,
            score: None,
        }
    }

    /// Score this solution against `board`, without modifying it.
    ///
    /// The word is placed on a copy of the board. The complete word through
    /// the placement (which may be longer than `word` when it abuts
    /// existing tiles) and every perpendicular word touched by a new tile
    /// are validated against the dictionary and scored. On success `score`
    /// is the total points including the bingo bonus; if any resulting word
    /// is not in the dictionary `score` is set to `None`.
    ///
    /// ## Errors
    /// If the word does not fit on the board, or conflicts with a tile
    /// already played.
    pub fn determine_score(
        &mut self,
        board: &Board,
        dictionary: &Dictionary,
    ) -> Result<(), Error> {
        let mut played = board.clone();
        let placed = played.add_solution(self)?;

        // the squares where we added a tile: only those earn multipliers
        let mut new_cells: ArrayVec<[(usize, usize); N]> = ArrayVec::new();
        for tile in placed.iter().filter(|tile| tile.is_new) {
            new_cells.push((tile.row, tile.col));
        }

        let mut total = 0;

        // the word we put down or extended
        let (row, col, length) = played.find_edges(self.row, self.col, self.direction);
        let main_word = played.word_at(row, col, length, self.direction);
        if !dictionary.has_word(&main_word) {
            self.score = None;
            return Ok(());
        }
        total += run_score(&played, &new_cells, &main_word, row, col, self.direction);

        // any perpendicular word formed or extended by a new tile
        let perpendicular = self.direction.perpendicular();
        for along in 0..self.word.len() {
            let (r, c) = self
                .direction
                .step(self.row as isize, self.col as isize, along as isize);
            let (r, c) = (r as usize, c as usize);
            if !new_cells.contains(&(r, c)) {
                continue;
            }
            let (row, col, length) = played.find_edges(r, c, perpendicular);
            if length <= 1 {
                continue;
            }
            let cross_word = played.word_at(row, col, length, perpendicular);
            if !dictionary.has_word(&cross_word) {
                self.score = None;
                return Ok(());
            }
            total += run_score(&played, &new_cells, &cross_word, row, col, perpendicular);
        }

        if self.rack_indices.len() == RACK_CAPACITY {
            total += BINGO_BONUS;
        }
        self.score = Some(total);
        Ok(())
    }

    /// The rack left over after this solution consumed its tiles.
    pub fn new_rack(&self, rack: &Rack) -> Rack {
        rack.without(&self.rack_indices)
    }
}

/// Score one complete word on the played board. Letter and word multipliers
/// only count for squares in `new_cells`; blank tiles score zero.
fn run_score(
    played: &Board,
    new_cells: &[(usize, usize)],
    word: &str,
    row: usize,
    col: usize,
    direction: Direction,
) -> u32 {
    let grid = premiums();
    let mut word_multiplier = 1;
    let mut points = 0;
    let (mut row, mut col) = (row, col);
    for &letter in word.as_bytes() {
        let mut letter_points = letter_score(letter);
        if played.is_blank_at(row, col) {
            letter_points = 0;
        }
        if new_cells.contains(&(row, col)) {
            letter_points *= grid.letter_multiplier(row, col);
            word_multiplier *= grid.word_multiplier(row, col);
        }
        points += letter_points;
        let (r, c) = direction.step(row as isize, col as isize, 1);
        row = r as usize;
        col = c as usize;
    }
    points * word_multiplier
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (i, letter) in self.word.chars().enumerate() {
            if self.word_blank_indices.contains(&(i as u8)) {
                write!(f, "{}", letter.to_ascii_lowercase())?;
            } else {
                write!(f, "{}", letter)?;
            }
        }
        write!(f, " ({},{},{})", self.row, self.col, self.direction)?;
        if let Some(score) = self.score {
            write!(f, " = {}", score)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::MID;
    use crate::Direction::{Horizontal, Vertical};

    fn test_dictionary() -> Dictionary {
        Dictionary::from_words(&["HELLO", "COMPUTER", "MILO", "DOG", "DOGS", "MILOS", "PROSAIC"])
    }

    fn indices(list: &[u8]) -> TileIndices {
        list.iter().copied().collect()
    }

    #[test]
    fn test_letter_score() {
        assert_eq!(letter_score(b'A'), 1);
        assert_eq!(letter_score(b'q'), 10);
        assert_eq!(letter_score(b'Z'), 10);
    }

    #[test]
    fn test_double_letter_triple_word() -> Result<(), Error> {
        let dictionary = test_dictionary();
        let board = Board::new();
        let mut solution = Solution::new(
            0,
            0,
            Horizontal,
            "HELLO",
            TileIndices::new(),
            TileIndices::new(),
        );
        solution.determine_score(&board, &dictionary)?;
        // (H4 + E1 + L1 + 2xL1 + O1) x 3
        assert_eq!(solution.score, Some(27));
        // scoring leaves the real board untouched and is repeatable
        assert!(board.is_empty());
        solution.determine_score(&board, &dictionary)?;
        assert_eq!(solution.score, Some(27));
        Ok(())
    }

    #[test]
    fn test_triple_word_twice() -> Result<(), Error> {
        let dictionary = test_dictionary();
        let board = Board::new();
        let mut solution = Solution::new(
            14,
            0,
            Horizontal,
            "COMPUTER",
            TileIndices::new(),
            TileIndices::new(),
        );
        solution.determine_score(&board, &dictionary)?;
        // (C3 + O1 + M3 + 2xP3 + U1 + T1 + E1 + R1) x 3 x 3
        assert_eq!(solution.score, Some(153));
        Ok(())
    }

    #[test]
    fn test_intersecting_word() -> Result<(), Error> {
        let dictionary = test_dictionary();
        let mut board = Board::new();
        board.add_word("MILO", MID, MID - 1, Horizontal, &[])?;
        let mut solution = Solution::new(
            MID - 1,
            MID + 2,
            Vertical,
            "DOG",
            TileIndices::new(),
            TileIndices::new(),
        );
        solution.determine_score(&board, &dictionary)?;
        // reuses the O of MILO, no premium squares involved
        assert_eq!(solution.score, Some(5));
        Ok(())
    }

    #[test]
    fn test_extending_perpendicular_word() -> Result<(), Error> {
        let dictionary = test_dictionary();
        let mut board = Board::new();
        board.add_word("MILO", MID, MID - 1, Horizontal, &[])?;
        let mut solution = Solution::new(
            MID - 3,
            MID + 3,
            Vertical,
            "DOGS",
            TileIndices::new(),
            TileIndices::new(),
        );
        solution.determine_score(&board, &dictionary)?;
        // DOGS6 x 2 plus the pluralized MILOS7
        assert_eq!(solution.score, Some(19));
        Ok(())
    }

    #[test]
    fn test_pluralizing() -> Result<(), Error> {
        let dictionary = test_dictionary();
        let mut board = Board::new();
        let mut solution = Solution::new(
            MID,
            MID - 1,
            Horizontal,
            "DOG",
            TileIndices::new(),
            TileIndices::new(),
        );
        solution.determine_score(&board, &dictionary)?;
        assert_eq!(solution.score, Some(10));
        board.add_solution(&solution)?;

        // a later turn crosses the same squares; only the S is new
        let mut solution = Solution::new(
            MID,
            MID - 1,
            Horizontal,
            "DOGS",
            TileIndices::new(),
            TileIndices::new(),
        );
        solution.determine_score(&board, &dictionary)?;
        assert_eq!(solution.score, Some(6));
        Ok(())
    }

    #[test]
    fn test_illegal_word_scores_none() -> Result<(), Error> {
        let dictionary = test_dictionary();
        let mut board = Board::new();
        board.add_word("MILO", MID, MID - 1, Horizontal, &[])?;
        // DOG placed so the G lands after the O, forming MILOG
        let mut solution = Solution::new(
            MID - 2,
            MID + 3,
            Vertical,
            "DOG",
            TileIndices::new(),
            TileIndices::new(),
        );
        solution.determine_score(&board, &dictionary)?;
        assert_eq!(solution.score, None);
        Ok(())
    }

    #[test]
    fn test_bingo_bonus() -> Result<(), Error> {
        let dictionary = test_dictionary();
        let board = Board::new();
        let mut all_seven = Solution::new(
            MID,
            1,
            Horizontal,
            "PROSAIC",
            TileIndices::new(),
            indices(&[0, 1, 2, 3, 4, 5, 6]),
        );
        all_seven.determine_score(&board, &dictionary)?;
        let mut fewer = Solution::new(
            MID,
            1,
            Horizontal,
            "PROSAIC",
            TileIndices::new(),
            indices(&[0, 1, 2, 3, 4, 5]),
        );
        fewer.determine_score(&board, &dictionary)?;
        assert_eq!(all_seven.score, Some(74));
        assert_eq!(fewer.score, Some(24));
        Ok(())
    }

    #[test]
    fn test_blank_tiles_score_zero() -> Result<(), Error> {
        let dictionary = test_dictionary();
        let board = Board::new();
        let mut solution = Solution::new(
            MID,
            3,
            Horizontal,
            "HELLO",
            indices(&[3]),
            indices(&[0, 1, 2, 3, 4]),
        );
        solution.determine_score(&board, &dictionary)?;
        // (2xH4 + E1 + L1 + blank + O1) x 2
        assert_eq!(solution.score, Some(22));
        assert_eq!(solution.to_string(), "HELlO (7,3,H) = 22");
        Ok(())
    }

    #[test]
    fn test_new_rack() -> Result<(), Error> {
        let rack: Rack = "HELLOXX".parse()?;
        let solution = Solution::new(
            MID,
            3,
            Horizontal,
            "HELLO",
            TileIndices::new(),
            indices(&[0, 1, 2, 3, 4]),
        );
        assert_eq!(solution.new_rack(&rack).to_string(), "XX");
        Ok(())
    }
}
