use crate::letterset::LetterSet;
use crate::Error;
use std::fmt;
use std::str::FromStr;
use tinyvec::ArrayVec;

/// The blank (wildcard) tile symbol.
pub const BLANK: u8 = b'?';

/// A rack holds at most 7 tiles.
pub const RACK_CAPACITY: usize = 7;

/// A player's current tiles: up to 7 letters, where [`BLANK`] denotes a
/// wildcard. The solver never mutates a rack; it reports the consumed tile
/// positions on the [`Solution`](crate::Solution) instead, and
/// [`Solution::new_rack`](crate::Solution::new_rack) produces the leftover.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Rack(ArrayVec<[u8; RACK_CAPACITY]>);

impl Rack {
    /// An empty rack.
    pub fn new() -> Rack {
        Rack::default()
    }

    pub(crate) fn from_tiles(tiles: &[u8]) -> Rack {
        Rack(tiles.iter().copied().collect())
    }

    /// Add a tile to the rack.
    ///
    /// ## Errors
    /// If the rack is already full.
    pub fn push(&mut self, tile: u8) -> Result<(), Error> {
        if self.0.len() == RACK_CAPACITY {
            return Err(Error::RackOverflow(RACK_CAPACITY + 1));
        }
        self.0.push(tile);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.0.len() == RACK_CAPACITY
    }

    /// The tiles on the rack, in order.
    pub fn tiles(&self) -> &[u8] {
        &self.0
    }

    /// The number of blank tiles on the rack.
    pub fn blank_count(&self) -> usize {
        self.0.iter().filter(|&&tile| tile == BLANK).count()
    }

    /// The set of letters on the rack, blanks excluded.
    pub fn letter_set(&self) -> LetterSet {
        self.0
            .iter()
            .copied()
            .filter(|&tile| tile != BLANK)
            .collect()
    }

    /// This rack with the tiles at `used` positions removed.
    pub fn without(&self, used: &[u8]) -> Rack {
        Rack(
            self.0
                .iter()
                .enumerate()
                .filter(|(i, _)| !used.contains(&(*i as u8)))
                .map(|(_, &tile)| tile)
                .collect(),
        )
    }
}

impl FromStr for Rack {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() > RACK_CAPACITY {
            return Err(Error::RackOverflow(s.len()));
        }
        let mut tiles = ArrayVec::new();
        for ch in s.chars() {
            let tile = ch.to_ascii_uppercase();
            if !tile.is_ascii_uppercase() && tile != BLANK as char {
                return Err(Error::InvalidRackTile(ch));
            }
            tiles.push(tile as u8);
        }
        Ok(Rack(tiles))
    }
}

impl fmt::Display for Rack {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for &tile in self.0.iter() {
            write!(f, "{}", tile as char)?;
        }
        Ok(())
    }
}
