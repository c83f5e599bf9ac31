use crate::{
    random_names, random_scores, Bag, Board, GameOverReason, LastState, Player, Players, Rack,
    PLAYER_CAPACITY,
};
use rand::Rng;

impl LastState {
    /// Generates an empty [LastState] with no players.
    ///
    /// # Returns
    ///
    /// A [LastState] struct with the properties set to the following:
    /// * `board`: An empty board.
    /// * `bag`: An empty bag.
    /// * `players`: An empty players vector.
    /// * `round`: `1`.
    /// * `reason`: [GameOverReason::Skipped].
    pub fn empty_last_state() -> LastState {
        LastState {
            board: Board::new(),
            bag: Bag::empty_bag(),
            players: Players::with_capacity(PLAYER_CAPACITY),
            round: 1,
            reason: GameOverReason::Skipped,
        }
    }

    /// Generates a last state with a random, small number of players, each holding an empty
    /// rack and a random, medium, non-zero score, ended by a random reason.
    pub fn random_last_state<R: Rng + ?Sized>(rng: &mut R) -> LastState {
        let mut last_state = LastState::empty_last_state();
        last_state.players = random_names(rng)
            .into_iter()
            .map(|name| Player::new(name, Rack::new()))
            .collect();
        random_scores(rng, &mut last_state.players);
        last_state.round = rng.gen_range(1..20);
        last_state.reason = if rng.gen() {
            GameOverReason::Skipped
        } else {
            GameOverReason::OutOfTiles
        };

        last_state
    }

    /// A mutable reference to `self.players`.
    pub fn mut_players(&mut self) -> &mut Players {
        &mut self.players
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_last_state() {
        let last_state: LastState = LastState::empty_last_state();

        assert_eq!(Board::new(), last_state.board);
        assert!(last_state.bag.is_empty());
        assert_eq!(Players::new(), last_state.players);
    }
}
