use crate::{Bag, Board, Player, Players, Rack, MIN_PLAYERS, PLAYER_CAPACITY};
use log::info;
use rand::Rng;
use std::collections::HashSet;
use thiserror::Error;

pub use game_view::*;

mod game_play;
mod game_validate;
mod game_view;
#[cfg(test)]
mod test_setup;

/// Owns the state of a game in progress and implements methods. Created from
/// [GameState::new] and advanced by [GameState::play].
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct GameState {
    /// The grid of [cells](crate::Cell) with every letter played so far.
    board: Board,
    /// This is a bag of all the [tiles](crate::Tile) that haven't been drawn yet.
    bag: Bag,
    /// Every [player](Player) in the fixed turn order.
    players: Players,
    /// The round number, starting at `1` and incremented whenever the turn wraps back
    /// to the first player.
    round: usize,
    /// The number of consecutive skipped turns.
    skips: usize,
    /// The index of the player whose turn it is.
    current_player: usize,
}

/// Describes the reason why [GameState] could not be created.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Error)]
pub enum NewError {
    /// Attempting [to start](GameState::new) with fewer than [MIN_PLAYERS] players.
    #[error("a game needs at least {min} players", min = MIN_PLAYERS)]
    TooFewPlayers,
    /// Attempting [to start](GameState::new) with more than [PLAYER_CAPACITY] players.
    #[error("a game allows at most {max} players", max = PLAYER_CAPACITY)]
    TooManyPlayers,
    /// Attempting [to start](GameState::new) with a player whose name is blank.
    #[error("every player needs a name")]
    EmptyName,
}

impl GameState {
    /// Checks the names, then fills a [bag](Bag) shuffled with `rng` and draws a full
    /// [rack](Rack) for each player in turn order. The first player named goes first
    /// in round `1`.
    ///
    /// # Arguments
    ///
    /// * `names`: The name of every player in turn order.
    /// * `rng`: Shuffles the [bag](Bag).
    ///
    /// # Errors
    ///
    /// * [NewError::TooFewPlayers] Attempting [to start](GameState::new) with fewer than
    /// [MIN_PLAYERS] players.
    /// * [NewError::TooManyPlayers] Attempting [to start](GameState::new) with more than
    /// [PLAYER_CAPACITY] players.
    /// * [NewError::EmptyName] Attempting [to start](GameState::new) with a blank name.
    ///
    /// # See Also
    ///
    /// * [GameState::new_random]
    pub fn new<I, S, R>(names: I, rng: &mut R) -> Result<GameState, HashSet<NewError>>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
        R: Rng + ?Sized,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        GameState::check(&names)?;

        let mut bag = Bag::new(rng);
        let players: Players = names
            .into_iter()
            .map(|name| {
                let rack = Rack::filled(&mut bag);
                Player::new(name, rack)
            })
            .collect();
        info!(
            "started a game with {} players, {} tiles left in the bag",
            players.len(),
            bag.remaining()
        );

        Ok(GameState {
            board: Board::new(),
            bag,
            players,
            round: 1,
            skips: 0,
            current_player: 0,
        })
    }

    /// Same as [GameState::new] with the bag shuffled by the thread-local rng.
    ///
    /// # Errors
    ///
    /// See [GameState::new].
    pub fn new_random<I, S>(names: I) -> Result<GameState, HashSet<NewError>>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        GameState::new(names, &mut rand::thread_rng())
    }

    /// Checks the number of players and that every name is non-blank. All applicable
    /// errors are reported together.
    fn check(names: &[String]) -> Result<(), HashSet<NewError>> {
        let mut errors = HashSet::with_capacity(2);
        if names.len() < MIN_PLAYERS {
            errors.insert(NewError::TooFewPlayers);
        }
        if names.len() > PLAYER_CAPACITY {
            errors.insert(NewError::TooManyPlayers);
        }
        if names.iter().any(|name| name.trim().is_empty()) {
            errors.insert(NewError::EmptyName);
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(())
    }

    /// # Returns
    ///
    /// The index of the player whose turn it is.
    #[inline]
    pub fn current_player(&self) -> usize {
        self.current_player
    }

    /// # Returns
    ///
    /// The round number, starting at `1`.
    #[inline]
    pub fn round(&self) -> usize {
        self.round
    }

    /// # Returns
    ///
    /// The number of consecutive skipped turns.
    #[inline]
    pub fn skips(&self) -> usize {
        self.skips
    }

    /// # Returns
    ///
    /// Every [player](Player) in turn order.
    #[inline]
    pub fn players(&self) -> &Players {
        &self.players
    }

    /// # Returns
    ///
    /// The [rack](Rack) of the player whose turn it is.
    #[inline]
    pub fn current_rack(&self) -> &Rack {
        self.players[self.current_player].rack()
    }

    /// # Returns
    ///
    /// Whether this is the opening turn of the game, the first player's turn in round `1`.
    /// Only the opening turn may place a word on an empty board. If the first player skips
    /// it, the board stays empty and every later word is rejected as
    /// [Disconnected](crate::MoveError::Disconnected).
    #[inline]
    pub fn is_first_turn(&self) -> bool {
        self.round == 1 && self.current_player == 0
    }

    /// Passes the turn to the next player in rotation, starting a new round after the
    /// last player.
    fn advance(&mut self) {
        self.current_player = (self.current_player + 1) % self.players.len();
        if self.current_player == 0 {
            self.round += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{RACK_CAPACITY, TILE_COUNT};
    use map_macro::hash_set;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn new_deals_full_racks() {
        let game_state = GameState::new(["Ada", "Brian", "Cleo"], &mut rand::thread_rng())
            .expect("new should return Ok");

        assert_eq!(3, game_state.players.len());
        for player in &game_state.players {
            assert_eq!(RACK_CAPACITY, player.rack().len());
            assert_eq!(0, player.score());
        }
        assert_eq!(TILE_COUNT - 3 * RACK_CAPACITY, game_state.bag.remaining());
        assert_eq!("Brian", game_state.players[1].name());
        assert!(game_state.board.is_empty());
        assert_eq!(1, game_state.round());
        assert_eq!(0, game_state.skips());
        assert_eq!(0, game_state.current_player());
        assert!(game_state.is_first_turn());
        assert_eq!(TILE_COUNT, game_state.tile_count());
    }

    #[test]
    fn new_seeded_is_deterministic() {
        let game_state1 =
            GameState::new(["Ada", "Brian"], &mut StdRng::seed_from_u64(7)).expect("new should return Ok");
        let game_state2 =
            GameState::new(["Ada", "Brian"], &mut StdRng::seed_from_u64(7)).expect("new should return Ok");

        assert_eq!(game_state1, game_state2);
    }

    #[test]
    fn new_too_few_players() {
        assert_eq!(
            Err(hash_set! {NewError::TooFewPlayers}),
            GameState::new_random(["Ada"])
        );
    }

    #[test]
    fn new_too_many_players() {
        let names = vec!["Ada"; PLAYER_CAPACITY + 1];

        assert_eq!(
            Err(hash_set! {NewError::TooManyPlayers}),
            GameState::new_random(names)
        );
    }

    #[test]
    fn new_reports_every_error() {
        assert_eq!(
            Err(hash_set! {NewError::TooFewPlayers, NewError::EmptyName}),
            GameState::new_random(["  "])
        );
        assert_eq!(
            Err(hash_set! {NewError::TooFewPlayers}),
            GameState::new_random(Vec::<String>::new())
        );
    }

    #[test]
    fn advance_wraps_into_next_round() {
        let mut game_state =
            GameState::new_random(["Ada", "Brian", "Cleo"]).expect("new should return Ok");

        game_state.advance();
        assert_eq!((1, 1), (game_state.round(), game_state.current_player()));
        assert!(!game_state.is_first_turn());
        game_state.advance();
        game_state.advance();
        assert_eq!((2, 0), (game_state.round(), game_state.current_player()));
        assert!(!game_state.is_first_turn());
    }

    #[test]
    fn new_error_messages() {
        assert_eq!(
            format!("a game needs at least {} players", MIN_PLAYERS),
            NewError::TooFewPlayers.to_string()
        );
        assert_eq!("every player needs a name", NewError::EmptyName.to_string());
    }
}
