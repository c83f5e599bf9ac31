use crate::{MoveError, BOARD_LEN};
use std::str::FromStr;

/// A tuple with two integer components for the row and column position on the board.
/// Components are signed so that [coordinates](Coordinate) off the board can be
/// represented and rejected.
///
/// # See Also
///
/// * [Board](crate::Board)
/// * [TurnInput](crate::TurnInput)
pub type Coordinate = (isize, isize);

/// Describes which way a word runs from its anchor.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Direction {
    /// Each following letter is placed one column to the right.
    Across,
    /// Each following letter is placed one row below.
    Down,
}

impl Direction {
    /// # Returns
    ///
    /// The (row, column) offset between two consecutive cells of a run.
    #[inline]
    pub fn step(self) -> Coordinate {
        match self {
            Direction::Across => (0, 1),
            Direction::Down => (1, 0),
        }
    }
}

impl FromStr for Direction {
    type Err = MoveError;

    /// Parses `across`, `right`, `a`, or `r` as [Direction::Across] and `down` or `d`
    /// as [Direction::Down], ignoring case and surrounding whitespace.
    ///
    /// # Errors
    ///
    /// * [MoveError::InvalidDirection] For anything else.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "across" | "right" | "a" | "r" => Ok(Direction::Across),
            "down" | "d" => Ok(Direction::Down),
            _ => Err(MoveError::InvalidDirection),
        }
    }
}

/// # Returns
///
/// Whether both components of `coordinate` are in the range `0..BOARD_LEN`.
#[inline]
pub fn in_bounds((row, col): Coordinate) -> bool {
    let range = 0..BOARD_LEN as isize;
    range.contains(&row) && range.contains(&col)
}

/// Finds every [coordinate](Coordinate) of a run of `len` cells starting at `anchor` and
/// advancing in `direction`.
///
/// # Errors
///
/// * [MoveError::OutOfBounds] When `len` is `0`, `anchor` is off the board, or the last
/// cell of the run would be off the board.
///
/// # Returns
///
/// The [coordinates](Coordinate) of the run in order from the anchor.
pub fn run_coordinates(
    anchor: Coordinate,
    direction: Direction,
    len: usize,
) -> Result<Vec<Coordinate>, MoveError> {
    if len == 0 || !in_bounds(anchor) {
        return Err(MoveError::OutOfBounds);
    }
    // len is bounded before any arithmetic so the last offset cannot overflow
    let Some(last_offset) = isize::try_from(len)
        .ok()
        .filter(|&len| len <= BOARD_LEN as isize)
        .map(|len| len - 1)
    else {
        return Err(MoveError::OutOfBounds);
    };

    let (row_step, col_step) = direction.step();
    let last = (anchor.0 + row_step * last_offset, anchor.1 + col_step * last_offset);
    if !in_bounds(last) {
        return Err(MoveError::OutOfBounds);
    }

    Ok((0..=last_offset)
        .map(|offset| (anchor.0 + row_step * offset, anchor.1 + col_step * offset))
        .collect())
}
