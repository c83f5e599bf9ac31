use crate::TILE_COUNT;

/// The letter printed on a wildcard [`Tile`] before it is played. `#`.
pub const WILDCARD: char = '#';

/// The number of distinct [`Tile`] kinds. 26 letters and the [wildcard](WILDCARD).
pub const TILE_KINDS_LEN: usize = 27;

/// The letter, number of copies in the bag, and point value of every [`Tile`] kind in
/// alphabetical order followed by the [wildcard](WILDCARD).
///
/// # See Also
///
/// * [TILE_COUNT]
/// * [Bag::new](crate::Bag::new)
/// * [letter_value]
pub const LETTER_DISTRIBUTION: [(char, usize, u32); TILE_KINDS_LEN] = [
    ('A', 9, 1),
    ('B', 2, 3),
    ('C', 2, 3),
    ('D', 4, 2),
    ('E', 12, 1),
    ('F', 2, 4),
    ('G', 3, 2),
    ('H', 2, 4),
    ('I', 9, 1),
    ('J', 1, 8),
    ('K', 1, 5),
    ('L', 4, 1),
    ('M', 2, 3),
    ('N', 6, 1),
    ('O', 8, 1),
    ('P', 2, 3),
    ('Q', 1, 10),
    ('R', 6, 1),
    ('S', 4, 1),
    ('T', 6, 1),
    ('U', 4, 1),
    ('V', 2, 4),
    ('W', 2, 4),
    ('X', 1, 8),
    ('Y', 2, 4),
    ('Z', 1, 10),
    (WILDCARD, 2, 0),
];

const fn distribution_len() -> usize {
    let mut len = 0;
    let mut index = 0;
    while index < TILE_KINDS_LEN {
        len += LETTER_DISTRIBUTION[index].1;
        index += 1;
    }
    len
}
const _: () = assert!(distribution_len() == TILE_COUNT);

/// Looks up the point value of `letter`, ignoring case. Letters outside `A`-`Z`,
/// including the [wildcard](WILDCARD), are worth `0`.
#[inline]
pub fn letter_value(letter: char) -> u32 {
    let letter = letter.to_ascii_uppercase();
    if letter.is_ascii_uppercase() {
        LETTER_DISTRIBUTION[(letter as u8 - b'A') as usize].2
    } else {
        0
    }
}

/// Describes a tile with the letter printed on it and its point value.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Tile {
    letter: char,
    value: u32,
}

impl Tile {
    /// # Returns
    ///
    /// A [`Tile`] showing the uppercase `letter` and worth its [letter value](letter_value).
    pub fn new(letter: char) -> Tile {
        let letter = letter.to_ascii_uppercase();
        Tile {
            letter,
            value: letter_value(letter),
        }
    }

    /// # Returns
    ///
    /// An unplayed [wildcard](WILDCARD) [`Tile`].
    pub fn wildcard() -> Tile {
        Tile::new(WILDCARD)
    }

    /// The letter shown on the tile.
    #[inline]
    pub fn letter(&self) -> char {
        self.letter
    }

    /// The points the tile is worth before multipliers.
    #[inline]
    pub fn value(&self) -> u32 {
        self.value
    }

    /// Whether the tile is an unplayed [wildcard](WILDCARD).
    #[inline]
    pub fn is_wildcard(&self) -> bool {
        self.letter == WILDCARD
    }

    /// Fixes the letter a wildcard represents once it is played. The value stays `0`.
    ///
    /// # Returns
    ///
    /// A [`Tile`] showing the uppercase `letter` and worth `0` points.
    pub fn resolve(self, letter: char) -> Tile {
        Tile {
            letter: letter.to_ascii_uppercase(),
            value: 0,
        }
    }
}

/// # Returns
///
/// A vector of all [`TILE_COUNT`] tiles in [distribution](LETTER_DISTRIBUTION) order.
pub fn tiles() -> Vec<Tile> {
    LETTER_DISTRIBUTION
        .iter()
        .flat_map(|&(letter, count, _)| vec![Tile::new(letter); count])
        .collect()
}
