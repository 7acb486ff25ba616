use crate::rack::{Rack, BLANK, RACK_CAPACITY};
use multiset::HashMultiSet;
use rand::seq::IteratorRandom;
use rand::Rng;
use std::ops::Deref;

/// letter, count
type TileCount = (u8, usize);

/// The standard english tile distribution: 98 letters plus 2 blanks.
/// http://en.wikipedia.org/wiki/Scrabble_letter_distributions#English
const TILE_DISTRIBUTION: [TileCount; 27] = [
    (b'A', 9),
    (b'B', 2),
    (b'C', 2),
    (b'D', 4),
    (b'E', 12),
    (b'F', 2),
    (b'G', 3),
    (b'H', 2),
    (b'I', 9),
    (b'J', 1),
    (b'K', 1),
    (b'L', 4),
    (b'M', 2),
    (b'N', 6),
    (b'O', 8),
    (b'P', 2),
    (b'Q', 1),
    (b'R', 6),
    (b'S', 4),
    (b'T', 6),
    (b'U', 4),
    (b'V', 2),
    (b'W', 2),
    (b'X', 1),
    (b'Y', 2),
    (b'Z', 1),
    (BLANK, 2),
];

/// Keeps track of the tiles not yet drawn in a game.
#[derive(Debug, Clone)]
pub struct Bag(HashMultiSet<u8>);

impl Deref for Bag {
    type Target = HashMultiSet<u8>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Default for Bag {
    fn default() -> Self {
        Bag::full()
    }
}

impl Bag {
    /// A fresh bag with the full english tile distribution.
    pub fn full() -> Bag {
        let mut bag = HashMultiSet::new();
        for &(letter, count) in TILE_DISTRIBUTION.iter() {
            bag.insert_times(letter, count);
        }
        Bag(bag)
    }

    /// Draw up to `n` random tiles from the bag, removing them.
    pub fn draw<R: Rng>(&mut self, rng: &mut R, n: usize) -> Vec<u8> {
        let drawn: Vec<u8> = self.0.iter().copied().choose_multiple(rng, n);
        for &tile in &drawn {
            self.0.remove(&tile);
        }
        drawn
    }

    /// Top `rack` up to 7 tiles with random draws from the bag. The given
    /// rack is not modified; the refilled rack is returned.
    pub fn refill<R: Rng>(&mut self, rack: &Rack, rng: &mut R) -> Rack {
        let mut tiles = rack.tiles().to_vec();
        tiles.extend(self.draw(rng, RACK_CAPACITY - rack.len()));
        Rack::from_tiles(&tiles)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_full_bag() {
        let bag = Bag::full();
        assert_eq!(bag.len(), 100);
        assert_eq!(bag.count_of(&b'E'), 12);
        assert_eq!(bag.count_of(&b'Q'), 1);
        assert_eq!(bag.count_of(&BLANK), 2);
    }

    #[test]
    fn test_draw() {
        let mut bag = Bag::full();
        let mut rng = StdRng::seed_from_u64(1);
        let drawn = bag.draw(&mut rng, 7);
        assert_eq!(drawn.len(), 7);
        assert_eq!(bag.len(), 93);
        // an exhausted bag hands out what it has left
        let rest = bag.draw(&mut rng, 200);
        assert_eq!(rest.len(), 93);
        assert!(bag.is_empty());
    }

    #[test]
    fn test_refill() {
        let mut bag = Bag::full();
        let mut rng = StdRng::seed_from_u64(1);
        let rack: Rack = "AB".parse().unwrap();
        let refilled = bag.refill(&rack, &mut rng);
        assert_eq!(refilled.len(), 7);
        assert_eq!(&refilled.tiles()[..2], b"AB");
        assert_eq!(bag.len(), 95);
        // the caller's rack is untouched
        assert_eq!(rack.len(), 2);
    }
}
