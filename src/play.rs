use crate::{Coordinate, Direction, NeededTiles, Run, WILDCARD};
use thiserror::Error;

/// Describes the reason why a [turn](TurnInput) could not be executed. Every reason is
/// recoverable and leaves the game exactly as it was before the attempt.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Error)]
pub enum MoveError {
    /// Attempting to place a word with some letter off the board.
    #[error("location out of bounds")]
    OutOfBounds,
    /// Attempting to place a word in a direction other than across or down.
    #[error("direction must be across or down")]
    InvalidDirection,
    /// Attempting to place a letter over a different letter already on the board.
    #[error("the letters do not overlap correctly")]
    OverlapMismatch,
    /// Attempting to place a word not in the [dictionary](crate::Dictionary).
    #[error("not a valid dictionary word")]
    NotAWord,
    /// Attempting to place a word touching no letter already on the board.
    #[error("the word must connect to a previously played letter")]
    Disconnected,
    /// Attempting to place the first word of the game away from the
    /// [center](crate::CENTER).
    #[error("the first word must begin at the center (7, 7)")]
    MustStartAtCenter,
    /// Attempting to place a word needing [tiles](crate::Tile) not in the rack.
    #[error("not enough tiles in the rack for this word")]
    InsufficientTiles,
    /// Answering a skip confirmation with something other than yes or no.
    #[error("answer yes or no to skip the turn")]
    InvalidSkipResponse,
    /// Attempting to place a [wildcard](WILDCARD) without the letter it represents.
    #[error("every wildcard needs a letter")]
    UnresolvedWildcard,
}

/// Everything the acting player supplies for one turn, already parsed but not yet
/// checked. An empty `word` asks to skip the turn.
///
/// # See Also
///
/// * [GameState::validate](crate::GameState::validate)
/// * [GameState::play](crate::GameState::play)
#[derive(Debug, Clone, Default, Eq, PartialEq, Hash)]
pub struct TurnInput {
    /// The word to place. Each [wildcard](WILDCARD) is replaced by the next letter
    /// of `blanks`.
    pub word: String,
    /// The (row, column) [coordinate](Coordinate) of the first letter.
    pub anchor: Coordinate,
    /// Either across or down, parsed into a [Direction].
    pub direction: String,
    /// The letters represented by each [wildcard](WILDCARD) in `word`, in order.
    pub blanks: Vec<char>,
}

impl TurnInput {
    /// # Returns
    ///
    /// A [`TurnInput`] placing `word` without any [wildcards](WILDCARD) resolved.
    pub fn new(word: impl Into<String>, anchor: Coordinate, direction: impl Into<String>) -> Self {
        TurnInput {
            word: word.into(),
            anchor,
            direction: direction.into(),
            blanks: Vec::new(),
        }
    }

    /// # Returns
    ///
    /// A [`TurnInput`] asking to skip the turn.
    pub fn skip() -> Self {
        TurnInput::default()
    }

    /// # Returns
    ///
    /// The same [`TurnInput`] with `blanks` resolving its [wildcards](WILDCARD).
    pub fn with_blanks(mut self, blanks: impl IntoIterator<Item = char>) -> Self {
        self.blanks = blanks.into_iter().collect();
        self
    }

    /// Whether the input asks to skip the turn.
    #[inline]
    pub fn is_skip(&self) -> bool {
        self.word.is_empty()
    }
}

/// Uppercases `word` and replaces each [wildcard](WILDCARD) by the next letter of `blanks`.
/// Letters left over in `blanks` are ignored.
///
/// # Errors
///
/// * [MoveError::UnresolvedWildcard] When `blanks` runs out or a resolution is not
/// an ASCII letter.
///
/// # Returns
///
/// The resolved word and, for every letter, whether it was a [wildcard](WILDCARD).
pub fn resolve_wildcards(word: &str, blanks: &[char]) -> Result<(String, Vec<bool>), MoveError> {
    let mut blanks = blanks.iter();
    let mut resolved = String::with_capacity(word.len());
    let mut marked = Vec::with_capacity(word.len());

    for letter in word.chars().map(|letter| letter.to_ascii_uppercase()) {
        if letter == WILDCARD {
            let blank = blanks
                .next()
                .filter(|blank| blank.is_ascii_alphabetic())
                .ok_or(MoveError::UnresolvedWildcard)?;
            resolved.push(blank.to_ascii_uppercase());
            marked.push(true);
        } else {
            resolved.push(letter);
            marked.push(false);
        }
    }

    Ok((resolved, marked))
}

/// Parses a driver's answer to "skip this turn?". Accepts `y`, `yes`, `n`, and `no`,
/// ignoring case and surrounding whitespace.
///
/// # Errors
///
/// * [MoveError::InvalidSkipResponse] For anything else.
///
/// # Returns
///
/// Whether the player confirmed the skip.
pub fn confirm_skip(response: &str) -> Result<bool, MoveError> {
    match response.trim().to_ascii_lowercase().as_str() {
        "y" | "yes" => Ok(true),
        "n" | "no" => Ok(false),
        _ => Err(MoveError::InvalidSkipResponse),
    }
}

/// Describes a checked [turn](TurnInput) which can be applied.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub enum Verdict {
    /// The player skips the turn.
    Skip,
    /// The player places a legal word.
    Play(LegalMove),
}

/// A word placement which passed every check, with everything needed to apply it.
/// Created by [GameState::validate](crate::GameState::validate).
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct LegalMove {
    word: String,
    anchor: Coordinate,
    direction: Direction,
    run: Run,
    needed: NeededTiles,
}

impl LegalMove {
    pub(crate) fn new(
        word: String,
        anchor: Coordinate,
        direction: Direction,
        run: Run,
        needed: NeededTiles,
    ) -> LegalMove {
        LegalMove {
            word,
            anchor,
            direction,
            run,
            needed,
        }
    }

    /// The uppercase word with every [wildcard](WILDCARD) resolved.
    #[inline]
    pub fn word(&self) -> &str {
        &self.word
    }

    /// The [coordinate](Coordinate) of the first letter.
    #[inline]
    pub fn anchor(&self) -> Coordinate {
        self.anchor
    }

    /// Which way the word runs from the anchor.
    #[inline]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Every [coordinate](Coordinate) of the run with what the square showed when
    /// the move was checked.
    #[inline]
    pub fn run(&self) -> &Run {
        &self.run
    }

    /// The [tiles](crate::Tile) taken from the rack, one per fresh placement in run order.
    #[inline]
    pub fn needed(&self) -> &NeededTiles {
        &self.needed
    }
}

#[cfg(test)]
impl LegalMove {
    /// Generates a [`LegalMove`] without checking it against any game, with an empty run.
    pub fn unchecked(
        word: &str,
        anchor: Coordinate,
        direction: Direction,
        needed: NeededTiles,
    ) -> LegalMove {
        LegalMove::new(word.to_owned(), anchor, direction, Run::new(), needed)
    }
}
