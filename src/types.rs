use crate::{Cell, Coordinate, NeededTile, Player, Tile, PLAYER_CAPACITY, RACK_CAPACITY};
use smallvec::SmallVec;

/// A vector of [tiles](Tile) held by one player.
///
/// # See Also
///
/// * [Rack](crate::Rack)
/// * [RACK_CAPACITY]
pub type Tiles = SmallVec<[Tile; RACK_CAPACITY]>;
/// A vector of every [player](Player) in turn order.
///
/// # See Also
///
/// * [PLAYER_CAPACITY]
/// * [GameState](crate::GameState)
/// * [LastState](crate::LastState)
pub type Players = SmallVec<[Player; PLAYER_CAPACITY]>;
/// A vector of scores for each player in turn order.
///
/// # See Also
///
/// * [PLAYER_CAPACITY]
/// * [GameView](crate::GameView)
/// * [LastView](crate::LastView)
pub type Scores = SmallVec<[u32; PLAYER_CAPACITY]>;
/// A vector of the number of [tiles](Tile) in each rack in turn order.
///
/// # See Also
///
/// * [PLAYER_CAPACITY]
/// * [GameView](crate::GameView)
pub type RackLens = SmallVec<[usize; PLAYER_CAPACITY]>;
/// The [tiles](Tile) a [legal move](crate::LegalMove) takes from the acting player's rack,
/// one for each fresh placement in run order.
///
/// # See Also
///
/// * [NeededTile]
/// * [GameState::validate](crate::GameState::validate)
pub type NeededTiles = SmallVec<[NeededTile; RACK_CAPACITY]>;
/// The [coordinates](Coordinate) of a run paired with what each [cell](Cell) held
/// before the word was placed.
///
/// # See Also
///
/// * [Board::read_run](crate::Board::read_run)
/// * [LegalMove](crate::LegalMove)
pub type Run = Vec<(Coordinate, Cell)>;
/// A vector of player names in turn order.
///
/// # See Also
///
/// * [PLAYER_CAPACITY]
/// * [GameView](crate::GameView)
/// * [LastView](crate::LastView)
pub type Names<'a> = SmallVec<[&'a str; PLAYER_CAPACITY]>;
/// A vector of indexes into the [players](Players) of a game.
///
/// # See Also
///
/// * [LastState::winners](crate::LastState::winners)
/// * [LastState::standings](crate::LastState::standings)
pub type PlayerIndexes = SmallVec<[usize; PLAYER_CAPACITY]>;
