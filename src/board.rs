use crate::{
    in_bounds, run_coordinates, Bag, Coordinate, Direction, LegalMove, MoveError, Rack, Run,
    Tile, BOARD_LEN, CENTER,
};
use log::debug;

/// Describes the score multiplier printed on a premium square.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Premium {
    /// Doubles the value of the letter freshly placed on it.
    DoubleLetter,
    /// Triples the value of the letter freshly placed on it.
    TripleLetter,
    /// Doubles the value of the word freshly placed on it.
    DoubleWord,
    /// Triples the value of the word freshly placed on it.
    TripleWord,
}

impl Premium {
    /// The multiplier applied to a single letter. `1` for word premiums.
    #[inline]
    pub fn letter_multiplier(self) -> u32 {
        match self {
            Premium::DoubleLetter => 2,
            Premium::TripleLetter => 3,
            Premium::DoubleWord | Premium::TripleWord => 1,
        }
    }

    /// The multiplier applied to the whole word. `1` for letter premiums.
    #[inline]
    pub fn word_multiplier(self) -> u32 {
        match self {
            Premium::DoubleWord => 2,
            Premium::TripleWord => 3,
            Premium::DoubleLetter | Premium::TripleLetter => 1,
        }
    }
}

const TRIPLE_WORD: [Coordinate; 8] = [
    (0, 0),
    (0, 7),
    (0, 14),
    (7, 0),
    (7, 14),
    (14, 0),
    (14, 7),
    (14, 14),
];
const DOUBLE_WORD: [Coordinate; 16] = [
    (1, 1),
    (2, 2),
    (3, 3),
    (4, 4),
    (1, 13),
    (2, 12),
    (3, 11),
    (4, 10),
    (13, 1),
    (12, 2),
    (11, 3),
    (10, 4),
    (13, 13),
    (12, 12),
    (11, 11),
    (10, 10),
];
const TRIPLE_LETTER: [Coordinate; 12] = [
    (1, 5),
    (1, 9),
    (5, 1),
    (5, 5),
    (5, 9),
    (5, 13),
    (9, 1),
    (9, 5),
    (9, 9),
    (9, 13),
    (13, 5),
    (13, 9),
];
const DOUBLE_LETTER: [Coordinate; 24] = [
    (0, 3),
    (0, 11),
    (2, 6),
    (2, 8),
    (3, 0),
    (3, 7),
    (3, 14),
    (6, 2),
    (6, 6),
    (6, 8),
    (6, 12),
    (7, 3),
    (7, 11),
    (8, 2),
    (8, 6),
    (8, 8),
    (8, 12),
    (11, 0),
    (11, 7),
    (11, 14),
    (12, 6),
    (12, 8),
    (14, 3),
    (14, 11),
];

type PremiumLayout = [[Option<Premium>; BOARD_LEN]; BOARD_LEN];

const fn premium_layout() -> PremiumLayout {
    const fn mark(
        mut layout: PremiumLayout,
        coordinates: &[Coordinate],
        premium: Premium,
    ) -> PremiumLayout {
        let mut index = 0;
        while index < coordinates.len() {
            let (row, col) = coordinates[index];
            layout[row as usize][col as usize] = Some(premium);
            index += 1;
        }
        layout
    }

    let layout = [[None; BOARD_LEN]; BOARD_LEN];
    let layout = mark(layout, &TRIPLE_WORD, Premium::TripleWord);
    let layout = mark(layout, &DOUBLE_WORD, Premium::DoubleWord);
    let layout = mark(layout, &TRIPLE_LETTER, Premium::TripleLetter);
    mark(layout, &DOUBLE_LETTER, Premium::DoubleLetter)
}

/// The premium square at every [coordinate](Coordinate), built once at compile time.
const PREMIUMS: PremiumLayout = premium_layout();

/// Looks up the premium printed on the board at `coordinate`, whether or not a letter
/// has since covered it.
///
/// # Returns
///
/// The [premium](Premium) at `coordinate`, or [None] for plain squares, the center,
/// and [coordinates](Coordinate) off the board.
pub fn premium_at(coordinate: Coordinate) -> Option<Premium> {
    if !in_bounds(coordinate) {
        return None;
    }
    PREMIUMS[coordinate.0 as usize][coordinate.1 as usize]
}

/// Describes what a single square on the board currently shows.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Cell {
    /// A plain square with no letter.
    Empty,
    /// A premium square with no letter.
    Premium(Premium),
    /// The center square with no letter.
    Center,
    /// A square covered by a played [tile](Tile).
    Letter(Tile),
}

impl Cell {
    /// The letter on the square, or [None] when the square is blank.
    #[inline]
    pub fn letter(self) -> Option<char> {
        self.tile().map(|tile| tile.letter())
    }

    /// The [tile](Tile) on the square, or [None] when the square is blank.
    #[inline]
    pub fn tile(self) -> Option<Tile> {
        match self {
            Cell::Letter(tile) => Some(tile),
            _ => None,
        }
    }

    /// The uncovered [premium](Premium) on the square. Covered premiums are spent.
    #[inline]
    pub fn premium(self) -> Option<Premium> {
        match self {
            Cell::Premium(premium) => Some(premium),
            _ => None,
        }
    }

    /// Whether no letter covers the square.
    #[inline]
    pub fn is_blank(self) -> bool {
        !matches!(self, Cell::Letter(_))
    }
}

/// A single square covered by a placed word.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct PlacedCell {
    /// Where the letter was placed.
    pub coordinate: Coordinate,
    /// The [tile](Tile) now on the square.
    pub tile: Tile,
    /// What the square showed before the word was placed.
    pub previous: Cell,
}

impl PlacedCell {
    /// Whether the [tile](Tile) came from the rack during this placement instead of
    /// already being on the board.
    #[inline]
    pub fn is_fresh(&self) -> bool {
        self.previous.is_blank()
    }
}

/// What a [placement](Board::place) changed, enough to [score](fn@crate::score) it.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Placement {
    /// The placed word with every wildcard resolved.
    pub word: String,
    /// Every square of the run in order from the anchor.
    pub cells: Vec<PlacedCell>,
    /// The number of [tiles](Tile) drawn from the [bag](Bag) to replenish the rack.
    pub drawn: usize,
}

impl Placement {
    /// The number of [tiles](Tile) that came from the rack.
    pub fn fresh_len(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_fresh()).count()
    }
}

/// A 15 by 15 grid of [cells](Cell) indexed by (row, column). Premium squares and the
/// center are fixed when the board is created. A square changes at most once, when
/// a letter covers it, and is never cleared.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Board {
    cells: [[Cell; BOARD_LEN]; BOARD_LEN],
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

impl Board {
    /// # Returns
    ///
    /// An empty board with every premium square and the center marked.
    pub fn new() -> Board {
        let mut cells = [[Cell::Empty; BOARD_LEN]; BOARD_LEN];
        for (row, premiums) in PREMIUMS.iter().enumerate() {
            for (col, premium) in premiums.iter().enumerate() {
                if let Some(premium) = premium {
                    cells[row][col] = Cell::Premium(*premium);
                }
            }
        }
        cells[CENTER.0 as usize][CENTER.1 as usize] = Cell::Center;
        Board { cells }
    }

    /// # Returns
    ///
    /// The [cell](Cell) at `coordinate`, or [None] when `coordinate` is off the board.
    #[inline]
    pub fn get(&self, coordinate: Coordinate) -> Option<Cell> {
        if !in_bounds(coordinate) {
            return None;
        }
        Some(self.cells[coordinate.0 as usize][coordinate.1 as usize])
    }

    /// Every row of [cells](Cell) from top to bottom.
    #[inline]
    pub fn rows(&self) -> &[[Cell; BOARD_LEN]; BOARD_LEN] {
        &self.cells
    }

    /// The number of squares covered by a letter.
    pub fn letter_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| !cell.is_blank())
            .count()
    }

    /// Whether no letter has been placed yet.
    pub fn is_empty(&self) -> bool {
        self.cells.iter().flatten().all(|cell| cell.is_blank())
    }

    /// Reads the `len` [cells](Cell) starting at `anchor` and advancing in `direction`
    /// without changing the board.
    ///
    /// # Errors
    ///
    /// * [MoveError::OutOfBounds] When any cell of the run would be off the board.
    ///
    /// # Returns
    ///
    /// Each [coordinate](Coordinate) of the run with its current [cell](Cell).
    pub fn read_run(
        &self,
        anchor: Coordinate,
        direction: Direction,
        len: usize,
    ) -> Result<Run, MoveError> {
        Ok(run_coordinates(anchor, direction, len)?
            .into_iter()
            .map(|(row, col)| ((row, col), self.cells[row as usize][col as usize]))
            .collect())
    }

    /// Writes the word of `legal_move` onto the board, takes a [tile](Tile) from `rack`
    /// for every square which was blank, and then [replenishes](Rack::replenish) `rack`
    /// from `bag`. Nothing changes unless the whole placement succeeds.
    ///
    /// # Errors
    ///
    /// * [MoveError::OutOfBounds] The run leaves the board.
    /// * [MoveError::OverlapMismatch] The board no longer matches `legal_move`.
    /// * [MoveError::InsufficientTiles] `rack` does not hold a needed [tile](Tile).
    ///
    /// # Returns
    ///
    /// The [placement](Placement) describing every covered square.
    pub fn place(
        &mut self,
        legal_move: &LegalMove,
        rack: &mut Rack,
        bag: &mut Bag,
    ) -> Result<Placement, MoveError> {
        let word = legal_move.word();
        let run = self.read_run(
            legal_move.anchor(),
            legal_move.direction(),
            word.chars().count(),
        )?;

        let mut remaining_rack = rack.clone();
        let mut needed = legal_move.needed().iter().copied();
        let mut cells = Vec::with_capacity(run.len());
        for ((coordinate, previous), letter) in run.into_iter().zip(word.chars()) {
            let tile = match previous {
                Cell::Letter(tile) if tile.letter() == letter => tile,
                Cell::Letter(_) => return Err(MoveError::OverlapMismatch),
                _ => {
                    let needed = needed.next().ok_or(MoveError::OverlapMismatch)?;
                    if needed.letter() != letter {
                        return Err(MoveError::OverlapMismatch);
                    }
                    remaining_rack
                        .take(needed)
                        .ok_or(MoveError::InsufficientTiles)?
                }
            };
            cells.push(PlacedCell {
                coordinate,
                tile,
                previous,
            });
        }
        if needed.next().is_some() {
            return Err(MoveError::OverlapMismatch);
        }

        for cell in &cells {
            let (row, col) = cell.coordinate;
            self.cells[row as usize][col as usize] = Cell::Letter(cell.tile);
        }
        *rack = remaining_rack;
        let drawn = rack.replenish(bag);
        debug!(
            "placed {} at {:?} {:?}, drew {} tiles",
            word,
            legal_move.anchor(),
            legal_move.direction(),
            drawn
        );

        Ok(Placement {
            word: word.to_owned(),
            cells,
            drawn,
        })
    }
}

#[cfg(test)]
impl Board {
    /// Writes `word` starting at `anchor` without touching any rack. Squares keep
    /// their letters if `word` does not fit.
    pub fn write_word(&mut self, word: &str, anchor: Coordinate, direction: Direction) {
        let coordinates = run_coordinates(anchor, direction, word.chars().count())
            .expect("write_word should only be called with runs on the board");
        for ((row, col), letter) in coordinates.into_iter().zip(word.chars()) {
            self.cells[row as usize][col as usize] = Cell::Letter(Tile::new(letter));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{NeededTile, RACK_CAPACITY, TILE_COUNT};
    use smallvec::smallvec;

    #[test]
    fn new_marks_premiums_and_center() {
        let board = Board::new();

        assert_eq!(Some(Cell::Center), board.get(CENTER));
        assert_eq!(Some(Cell::Premium(Premium::TripleWord)), board.get((0, 0)));
        assert_eq!(Some(Cell::Premium(Premium::DoubleWord)), board.get((1, 1)));
        assert_eq!(Some(Cell::Premium(Premium::TripleLetter)), board.get((5, 5)));
        assert_eq!(Some(Cell::Premium(Premium::DoubleLetter)), board.get((0, 3)));
        assert_eq!(Some(Cell::Empty), board.get((0, 1)));
        assert_eq!(None, board.get((15, 0)));
        assert_eq!(None, board.get((0, -1)));
        assert!(board.is_empty());
        assert_eq!(0, board.letter_count());
    }

    #[test]
    fn premium_counts() {
        let board = Board::new();
        let premiums: Vec<Premium> = board
            .rows()
            .iter()
            .flatten()
            .filter_map(|cell| cell.premium())
            .collect();

        let count = |kind| premiums.iter().filter(|&&premium| premium == kind).count();
        assert_eq!(8, count(Premium::TripleWord));
        assert_eq!(16, count(Premium::DoubleWord));
        assert_eq!(12, count(Premium::TripleLetter));
        assert_eq!(24, count(Premium::DoubleLetter));
    }

    #[test]
    fn premium_layout_is_symmetric() {
        let last = BOARD_LEN as isize - 1;
        for row in 0..BOARD_LEN as isize {
            for col in 0..BOARD_LEN as isize {
                assert_eq!(premium_at((row, col)), premium_at((col, row)));
                assert_eq!(premium_at((row, col)), premium_at((last - row, col)));
            }
        }
    }

    #[test]
    fn read_run_reports_letters_and_blanks() {
        let mut board = Board::new();
        board.write_word("CAT", CENTER, Direction::Across);

        let run = board
            .read_run((6, 8), Direction::Down, 3)
            .expect("read_run should return Ok");

        let letters: Vec<Option<char>> = run.iter().map(|(_, cell)| cell.letter()).collect();
        assert_eq!(vec![None, Some('A'), None], letters);
        assert_eq!(Cell::Premium(Premium::DoubleLetter), run[0].1);
        assert_eq!(Cell::Premium(Premium::DoubleLetter), run[2].1);
    }

    #[test]
    fn read_run_out_of_bounds() {
        let board = Board::new();

        assert_eq!(
            Err(MoveError::OutOfBounds),
            board.read_run((14, 13), Direction::Across, 3)
        );
        assert_eq!(
            Err(MoveError::OutOfBounds),
            board.read_run((-1, 0), Direction::Down, 1)
        );
    }

    #[test]
    fn place_fresh_word() {
        let mut board = Board::new();
        let mut bag = Bag::new_random();
        let mut rack = Rack::from_letters("CATXYZE");
        let legal_move = LegalMove::unchecked(
            "CAT",
            CENTER,
            Direction::Across,
            smallvec![
                NeededTile::Letter('C'),
                NeededTile::Letter('A'),
                NeededTile::Letter('T'),
            ],
        );

        let placement = board
            .place(&legal_move, &mut rack, &mut bag)
            .expect("place should return Ok");

        assert_eq!("CAT", placement.word);
        assert_eq!(3, placement.fresh_len());
        assert_eq!(3, placement.drawn);
        assert_eq!(Cell::Center, placement.cells[0].previous);
        assert_eq!(Some('C'), board.get(CENTER).and_then(Cell::letter));
        assert_eq!(Some('T'), board.get((7, 9)).and_then(Cell::letter));
        assert_eq!(3, board.letter_count());
        assert_eq!(RACK_CAPACITY, rack.len());
        assert_eq!(TILE_COUNT - 3, bag.remaining());
    }

    #[test]
    fn place_over_existing_letter() {
        let mut board = Board::new();
        board.write_word("CAT", CENTER, Direction::Across);
        let mut bag = Bag::empty_bag();
        let mut rack = Rack::from_letters("R#T");
        let legal_move = LegalMove::unchecked(
            "RAT",
            (6, 8),
            Direction::Down,
            smallvec![NeededTile::Wildcard('R'), NeededTile::Letter('T')],
        );

        let placement = board
            .place(&legal_move, &mut rack, &mut bag)
            .expect("place should return Ok");

        assert_eq!(2, placement.fresh_len());
        assert_eq!(0, placement.drawn);
        assert!(!placement.cells[1].is_fresh());
        assert_eq!(0, placement.cells[0].tile.value());
        assert_eq!(Some('R'), board.get((6, 8)).and_then(Cell::letter));
        assert_eq!("R", rack.letters());
        assert_eq!(5, board.letter_count());
    }

    #[test]
    fn place_mismatch_changes_nothing() {
        let mut board = Board::new();
        board.write_word("CAT", CENTER, Direction::Across);
        let mut bag = Bag::new_random();
        let mut rack = Rack::from_letters("DOG");
        let legal_move = LegalMove::unchecked(
            "DOG",
            (6, 8),
            Direction::Down,
            smallvec![NeededTile::Letter('D'), NeededTile::Letter('G')],
        );
        let (before_board, before_rack, before_bag) = (board.clone(), rack.clone(), bag.clone());

        assert_eq!(
            Err(MoveError::OverlapMismatch),
            board.place(&legal_move, &mut rack, &mut bag)
        );
        assert_eq!(before_board, board);
        assert_eq!(before_rack, rack);
        assert_eq!(before_bag, bag);
    }

    #[test]
    fn place_missing_tile_changes_nothing() {
        let mut board = Board::new();
        let mut bag = Bag::new_random();
        let mut rack = Rack::from_letters("CA");
        let legal_move = LegalMove::unchecked(
            "CAT",
            CENTER,
            Direction::Across,
            smallvec![
                NeededTile::Letter('C'),
                NeededTile::Letter('A'),
                NeededTile::Letter('T'),
            ],
        );
        let before_rack = rack.clone();

        assert_eq!(
            Err(MoveError::InsufficientTiles),
            board.place(&legal_move, &mut rack, &mut bag)
        );
        assert!(board.is_empty());
        assert_eq!(before_rack, rack);
        assert_eq!(TILE_COUNT, bag.remaining());
    }
}
