use crate::{random_scores, Bag, Board, GameState, Player, Players, Rack, PLAYER_CAPACITY};
use rand::Rng;

impl GameState {
    /// Generates an empty [GameState] with no players.
    ///
    /// # Returns
    ///
    /// A [GameState] struct with the properties set to the following:
    /// * `board`: An empty board.
    /// * `bag`: An empty bag.
    /// * `players`: An empty players vector.
    /// * `round`: `1`.
    /// * `skips`: `0`.
    /// * `current_player`: `0`.
    pub fn empty_game_state() -> GameState {
        GameState {
            board: Board::new(),
            bag: Bag::empty_bag(),
            players: Players::with_capacity(PLAYER_CAPACITY),
            round: 1,
            skips: 0,
            current_player: 0,
        }
    }

    /// Generates a [GameState] on the first turn with one player per rack in `racks`,
    /// each holding exactly the letters given. The bag holds every other
    /// [tile](crate::Tile) in random order, so the total stays at
    /// [TILE_COUNT](crate::TILE_COUNT) as long as the racks fit the distribution.
    pub fn scripted(racks: &[&str]) -> GameState {
        let mut game_state = GameState::empty_game_state();
        game_state.bag = Bag::new_random();
        for (index, letters) in racks.iter().enumerate() {
            for letter in letters.chars() {
                let tiles = game_state.bag.mut_tiles();
                if let Some(position) = tiles.iter().position(|tile| tile.letter() == letter) {
                    tiles.remove(position);
                }
            }
            game_state.players.push(Player::new(
                format!("Player {index}"),
                Rack::from_letters(letters),
            ));
        }

        game_state
    }

    /// The number of [tiles](crate::Tile) in every rack, in the bag, and on the board.
    pub fn tile_count(&self) -> usize {
        self.players
            .iter()
            .map(|player| player.rack().len())
            .sum::<usize>()
            + self.bag.remaining()
            + self.board.letter_count()
    }

    /// A mutable reference to `self.board`.
    pub fn mut_board(&mut self) -> &mut Board {
        &mut self.board
    }

    /// A mutable reference to `self.bag`.
    pub fn mut_bag(&mut self) -> &mut Bag {
        &mut self.bag
    }

    /// A mutable reference to `self.players`.
    pub fn mut_players(&mut self) -> &mut Players {
        &mut self.players
    }

    /// A mutable reference to `self.round`.
    pub fn mut_round(&mut self) -> &mut usize {
        &mut self.round
    }

    /// A mutable reference to `self.skips`.
    pub fn mut_skips(&mut self) -> &mut usize {
        &mut self.skips
    }

    /// A mutable reference to `self.current_player`.
    pub fn mut_current_player(&mut self) -> &mut usize {
        &mut self.current_player
    }

    /// Adds a random, medium, non-zero number of points to each player's score.
    pub fn random_scores<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        random_scores(rng, &mut self.players)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TILE_COUNT;

    #[test]
    fn empty_game_state() {
        let game_state = GameState::empty_game_state();

        assert_eq!(Board::new(), game_state.board);
        assert!(game_state.bag.is_empty());
        assert_eq!(Players::new(), game_state.players);
        assert_eq!(1, game_state.round);
        assert_eq!(0, game_state.skips);
        assert_eq!(0, game_state.current_player);
    }

    #[test]
    fn scripted_conserves_tiles() {
        let game_state = GameState::scripted(&["CATXYZE", "#QRS"]);

        assert_eq!(2, game_state.players.len());
        assert_eq!("C, A, T, X, Y, Z, E", game_state.players[0].rack().letters());
        assert_eq!(4, game_state.players[1].rack().len());
        assert_eq!(TILE_COUNT, game_state.tile_count());
    }
}
