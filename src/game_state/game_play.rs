use crate::{
    score, Dictionary, GameOverReason, GameState, LastState, MoveError, TurnInput, Verdict,
    SKIP_LIMIT,
};
use either::Either;
use log::{debug, info};

impl GameState {
    /// [Validates](GameState::validate) the [turn](TurnInput) and applies it.
    ///
    /// * A skip adds one to the consecutive skips without touching the board or any rack.
    /// * A word is [placed](crate::Board::place), the current player's rack is
    /// [replenished](crate::Rack::replenish), the [score](fn@score) of the placement is added to the
    /// current player, and the consecutive skips are reset to `0`.
    ///
    /// The game ends when the consecutive skips reach [SKIP_LIMIT], or when the
    /// current player's rack and the bag are both empty after placing a word. Otherwise
    /// the turn passes to the next player, starting a new round after the last player.
    ///
    /// # Arguments
    ///
    /// * `input`: The word, anchor, direction, and wildcard letters of the turn.
    /// * `dictionary`: Decides which words are valid.
    ///
    /// # Errors
    ///
    /// Any [MoveError] returned by [GameState::validate] or [Board::place](crate::Board::place),
    /// alongside the unchanged game state.
    ///
    /// # Returns
    ///
    /// Either the [game state](GameState) for the next turn or the [last state](LastState)
    /// of the game.
    pub fn play<D>(
        mut self,
        input: &TurnInput,
        dictionary: &D,
    ) -> Result<Either<GameState, LastState>, (GameState, MoveError)>
    where
        D: Dictionary + ?Sized,
    {
        let verdict = match self.validate(input, dictionary) {
            Ok(verdict) => verdict,
            Err(error) => {
                debug!(
                    "rejected {:?} from player {}: {}",
                    input.word, self.current_player, error
                );
                return Err((self, error));
            }
        };

        match verdict {
            Verdict::Skip => {
                self.skips += 1;
                info!(
                    "player {} skipped, {} consecutive skips",
                    self.current_player, self.skips
                );
                if self.skips >= SKIP_LIMIT {
                    return Ok(Either::Right(self.end(GameOverReason::Skipped)));
                }
            }
            Verdict::Play(legal_move) => {
                let rack = self.players[self.current_player].mut_rack();
                let placement = match self.board.place(&legal_move, rack, &mut self.bag) {
                    Ok(placement) => placement,
                    Err(error) => {
                        debug!(
                            "rejected {:?} from player {}: {}",
                            input.word, self.current_player, error
                        );
                        return Err((self, error));
                    }
                };

                let points = score(&placement);
                let player = &mut self.players[self.current_player];
                player.increase_score(points);
                self.skips = 0;
                info!(
                    "player {} placed {} for {} points, {} total",
                    self.current_player,
                    placement.word,
                    points,
                    player.score()
                );

                if self.bag.is_empty() && player.rack().is_empty() {
                    return Ok(Either::Right(self.end(GameOverReason::OutOfTiles)));
                }
            }
        }

        self.advance();
        Ok(Either::Left(self))
    }

    /// Same as [GameState::play] with an empty word.
    ///
    /// # Errors
    ///
    /// Never, since skipping is always allowed.
    ///
    /// # Returns
    ///
    /// Either the [game state](GameState) for the next turn or the [last state](LastState)
    /// of the game.
    pub fn skip(self) -> Result<Either<GameState, LastState>, (GameState, MoveError)> {
        self.play(&TurnInput::skip(), &|_: &str| false)
    }

    /// Moves everything into the [last state](LastState).
    fn end(self, reason: GameOverReason) -> LastState {
        info!("game over after round {}: {:?}", self.round, reason);
        LastState::new(self.board, self.bag, self.players, self.round, reason)
    }
}
