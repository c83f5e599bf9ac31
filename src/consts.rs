use crate::Coordinate;
use konst::primitive::parse_usize;
use konst::{option, result};

/// The number of rows and the number of columns on the board. `15` cells per side.
///
/// # See Also
///
/// * [Board](crate::Board)
/// * [CENTER]
pub const BOARD_LEN: usize = 15;
/// The [coordinate](Coordinate) of the center cell where the first word of the game
/// must be anchored. `(7, 7)`.
///
/// # See Also
///
/// * [MoveError::MustStartAtCenter](crate::MoveError::MustStartAtCenter)
pub const CENTER: Coordinate = (7, 7);
/// The number of [tiles](crate::Tile) a rack is replenished up to after every applied move.
/// `7` tiles per rack.
///
/// # See Also
///
/// * [Rack::replenish](crate::Rack::replenish)
pub const RACK_CAPACITY: usize = 7;
/// The total number of [tiles](crate::Tile) in the game. The sum of tiles in every rack,
/// in the bag, and on the board always equals `TILE_COUNT`. `100` tiles.
///
/// # See Also
///
/// * [LETTER_DISTRIBUTION](crate::LETTER_DISTRIBUTION)
/// * [Bag](crate::Bag)
pub const TILE_COUNT: usize = 100;
/// The minimum number of players needed [to start](crate::GameState::new) a game. `2` players.
pub const MIN_PLAYERS: usize = 2;
/// The maximum number of players allowed [to start](crate::GameState::new) a game.
/// All small, dynamically allocated structs which store player data are stored on the stack
/// up to this many players. If the environment variable named `PLAYER_CAPACITY` is present
/// at compile time and is able to be parsed into a `usize`, set to the value of the
/// environment variable. Otherwise, it is set to `4`.
///
/// # Panics
///
/// * When the given value is less than [MIN_PLAYERS]
/// * When there are not enough [tiles](crate::Tile) to fill every rack
///
/// # See Also
///
/// * [GameState](crate::GameState)
/// * [LastState](crate::LastState)
pub const PLAYER_CAPACITY: usize = option::unwrap_or!(
    option::and_then!(option_env!("PLAYER_CAPACITY"), |str| result::ok!(
        parse_usize(str)
    )),
    4
);
const _: () = assert!(PLAYER_CAPACITY >= MIN_PLAYERS);
const _: () = assert!(PLAYER_CAPACITY * RACK_CAPACITY <= TILE_COUNT);
/// The number of consecutive skipped turns which ends the game, regardless of the number
/// of players. If the environment variable named `SKIP_LIMIT` is present at compile time
/// and is able to be parsed into a `usize`, set to the value of the environment variable.
/// Otherwise, it is set to `6`.
///
/// # Panics
///
/// * When the given value is `0`
///
/// # See Also
///
/// * [GameState::play](crate::GameState::play)
/// * [GameOverReason::Skipped](crate::GameOverReason::Skipped)
pub const SKIP_LIMIT: usize = option::unwrap_or!(
    option::and_then!(option_env!("SKIP_LIMIT"), |str| result::ok!(parse_usize(
        str
    ))),
    6
);
const _: () = assert!(SKIP_LIMIT > 0);
