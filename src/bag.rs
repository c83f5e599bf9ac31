use crate::{tiles, Tile};
use log::trace;
use rand::seq::SliceRandom;
use rand::Rng;

/// This is a bag of all the [tiles](Tile) that haven't been drawn yet. It is filled once
/// with every [tile](Tile) in the [distribution](crate::LETTER_DISTRIBUTION), shuffled,
/// and only ever shrinks.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Bag {
    tiles: Vec<Tile>,
}

impl Bag {
    /// Creates a full bag of [`TILE_COUNT`](crate::TILE_COUNT) [tiles](Tile) shuffled with `rng`.
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Bag {
        let mut tiles = tiles();
        tiles.shuffle(rng);
        Bag { tiles }
    }

    /// Creates a full bag of [`TILE_COUNT`](crate::TILE_COUNT) [tiles](Tile) shuffled with the thread-local rng.
    pub fn new_random() -> Bag {
        Bag::new(&mut rand::thread_rng())
    }

    /// Removes one [tile](Tile) from the bag.
    ///
    /// # Returns
    ///
    /// The drawn [tile](Tile) or [None] when the bag is empty.
    pub fn draw(&mut self) -> Option<Tile> {
        let tile = self.tiles.pop();
        if let Some(tile) = tile {
            trace!("drew {:?}, {} tiles remaining", tile, self.tiles.len());
        }
        tile
    }

    /// The number of [tiles](Tile) left in the bag.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.tiles.len()
    }

    /// Whether every [tile](Tile) has been drawn.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }
}

#[cfg(test)]
impl Bag {
    /// Generates an empty bag.
    pub fn empty_bag() -> Bag {
        Bag {
            tiles: Vec::with_capacity(crate::TILE_COUNT),
        }
    }

    /// A mutable reference to `self.tiles`. The last [tile](Tile) is drawn first.
    pub fn mut_tiles(&mut self) -> &mut Vec<Tile> {
        &mut self.tiles
    }
}
