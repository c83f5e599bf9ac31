use crate::{Bag, MoveError, NeededTiles, Tile, Tiles, RACK_CAPACITY, WILDCARD};
use log::trace;

/// Describes which [tile](Tile) a fresh placement takes from the rack.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum NeededTile {
    /// A [tile](Tile) showing exactly this letter.
    Letter(char),
    /// A [wildcard](WILDCARD) [tile](Tile) which will represent this letter.
    Wildcard(char),
}

impl NeededTile {
    /// The letter which will be shown on the board.
    #[inline]
    pub fn letter(self) -> char {
        match self {
            NeededTile::Letter(letter) | NeededTile::Wildcard(letter) => letter,
        }
    }
}

/// The [tiles](Tile) held by one player. A rack is replenished up to [`RACK_CAPACITY`]
/// and only holds fewer [tiles](Tile) once the [bag](Bag) is empty.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct Rack {
    tiles: Tiles,
}

impl Rack {
    /// # Returns
    ///
    /// An empty rack.
    pub fn new() -> Rack {
        Rack {
            tiles: Tiles::new(),
        }
    }

    /// # Returns
    ///
    /// A rack [replenished](Rack::replenish) from `bag`.
    pub fn filled(bag: &mut Bag) -> Rack {
        let mut rack = Rack::new();
        rack.replenish(bag);
        rack
    }

    /// The [tiles](Tile) in the rack in the order they were drawn.
    #[inline]
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// The number of [tiles](Tile) in the rack.
    #[inline]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Whether the rack holds no [tiles](Tile).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// The letters of the rack joined by `", "`, for example `"A, #, T"`.
    pub fn letters(&self) -> String {
        itertools::join(self.tiles.iter().map(Tile::letter), ", ")
    }

    /// The number of [tiles](Tile) showing `letter`. Passing [`WILDCARD`] counts wildcards.
    pub fn count(&self, letter: char) -> usize {
        let letter = letter.to_ascii_uppercase();
        self.tiles
            .iter()
            .filter(|tile| tile.letter() == letter)
            .count()
    }

    /// Adds `tile` unless the rack already holds [`RACK_CAPACITY`] [tiles](Tile).
    ///
    /// # Errors
    ///
    /// Returns `tile` back when the rack is full.
    pub fn add(&mut self, tile: Tile) -> Result<(), Tile> {
        if self.tiles.len() >= RACK_CAPACITY {
            return Err(tile);
        }
        self.tiles.push(tile);
        Ok(())
    }

    /// Removes the first [tile](Tile) showing `letter`. Passing [`WILDCARD`] removes
    /// an unplayed wildcard.
    ///
    /// # Returns
    ///
    /// The removed [tile](Tile), or [None] if no [tile](Tile) shows `letter`.
    pub fn remove(&mut self, letter: char) -> Option<Tile> {
        let letter = letter.to_ascii_uppercase();
        let index = self.tiles.iter().position(|tile| tile.letter() == letter)?;
        Some(self.tiles.remove(index))
    }

    /// Removes the [tile](Tile) described by `needed`.
    ///
    /// # Returns
    ///
    /// The [tile](Tile) as it will appear on the board, with wildcards resolved to their
    /// letter, or [None] if the rack does not hold it.
    pub fn take(&mut self, needed: NeededTile) -> Option<Tile> {
        match needed {
            NeededTile::Letter(letter) => self.remove(letter),
            NeededTile::Wildcard(letter) => self
                .remove(WILDCARD)
                .map(|wildcard| wildcard.resolve(letter)),
        }
    }

    /// Draws from `bag` until the rack holds [`RACK_CAPACITY`] [tiles](Tile) or
    /// the bag is empty.
    ///
    /// # Returns
    ///
    /// The number of [tiles](Tile) drawn.
    pub fn replenish(&mut self, bag: &mut Bag) -> usize {
        let mut drawn = 0;
        while self.tiles.len() < RACK_CAPACITY {
            let Some(tile) = bag.draw() else {
                break;
            };
            self.tiles.push(tile);
            drawn += 1;
        }
        trace!("replenished rack with {} tiles: {}", drawn, self.letters());
        drawn
    }

    /// Decides which [tiles](Tile) pay for `letters`, the letters of every fresh placement
    /// in run order paired with whether the player marked it as a [wildcard](WILDCARD).
    /// Marked letters always take a wildcard. Other letters take a [tile](Tile) showing
    /// the same letter while one is left and otherwise take a remaining wildcard.
    ///
    /// # Errors
    ///
    /// * [MoveError::InsufficientTiles] The rack cannot pay for every letter.
    ///
    /// # Returns
    ///
    /// One [needed tile](NeededTile) per letter in the same order.
    pub fn allocate(&self, letters: &[(char, bool)]) -> Result<NeededTiles, MoveError> {
        let mut wildcards = self.count(WILDCARD);
        let marked = letters.iter().filter(|&&(_, marked)| marked).count();
        if marked > wildcards {
            return Err(MoveError::InsufficientTiles);
        }
        wildcards -= marked;

        let mut available = self.tiles.clone();
        let mut needed = NeededTiles::with_capacity(letters.len());
        for &(letter, marked) in letters {
            if marked {
                needed.push(NeededTile::Wildcard(letter));
            } else if let Some(index) = available.iter().position(|tile| tile.letter() == letter) {
                available.remove(index);
                needed.push(NeededTile::Letter(letter));
            } else if wildcards > 0 {
                wildcards -= 1;
                needed.push(NeededTile::Wildcard(letter));
            } else {
                return Err(MoveError::InsufficientTiles);
            }
        }

        Ok(needed)
    }
}

#[cfg(test)]
impl Rack {
    /// Generates a rack holding one [tile](Tile) per character of `letters`.
    pub fn from_letters(letters: &str) -> Rack {
        Rack {
            tiles: letters.chars().map(Tile::new).collect(),
        }
    }
}
