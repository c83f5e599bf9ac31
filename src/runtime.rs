//! Drives a game to its end by exchanging turns and views with one [Participant] per
//! player.

use crate::{Dictionary, GameState, GameView, LastState, LastView, MoveError, Rack, TurnInput};
use async_trait::async_trait;
use either::Either;
pub use game_runtime::*;
pub use last_runtime::*;
use thiserror::Error;

mod game_runtime;
mod last_runtime;

/// Defines the input and output methods the runtime needs from each participant.
///
/// `get_turn` and `confirm_skip` block execution until getting input.
/// `update_move_error` blocks execution until updating output.
/// `update_view` and `last_update_view` may execute in parallel with other participants.
///
/// # Errors
///
/// The implementor of [`Participant`] is responsible for returning an error to prevent the
/// runtime from running indefinitely whether from no response or repeated invalid inputs.
/// When a method call fails, the runtime is stopped, and the error is returned and propagated
/// out of the runtime and back to the calling client code.
#[async_trait]
pub trait Participant<E> {
    /// Gets the next [turn](TurnInput) from the current player. An empty word asks to skip.
    fn get_turn(&self) -> Result<TurnInput, E>;

    /// After the current player asks to skip, gets their answer to whether they really
    /// want to skip. The answer is parsed by [confirm_skip](crate::confirm_skip).
    fn confirm_skip(&self) -> Result<String, E>;

    /// When a [turn](TurnInput) or a skip confirmation is rejected, updates the current
    /// player with the state of the game, their rack, their input, and the reason why it
    /// could not be executed.
    fn update_move_error(
        &self,
        game_view: &GameView<'_>,
        rack: &Rack,
        input: TurnInput,
        error: MoveError,
    ) -> Result<(), E>;

    /// Before every turn, updates each player with the state of the game and their rack.
    async fn update_view(&self, game_view: &GameView<'_>, rack: &Rack) -> Result<(), E>;

    /// Once the game has ended, updates each player with the final state of the game.
    async fn last_update_view(&self, last_view: &LastView<'_>) -> Result<(), E>;
}

/// Describes why the [runtime](run) stopped before the game ended.
#[derive(Debug, Clone, Eq, PartialEq, Error)]
pub enum RuntimeError<E> {
    /// The number of participants differs from the number of players in the game.
    #[error("expected {expected} participants but got {actual}")]
    ParticipantCount {
        /// The number of players in the game.
        expected: usize,
        /// The number of participants given.
        actual: usize,
    },
    /// The current player failed to send input or receive an error update.
    #[error("participant failed to exchange input")]
    Input(E),
    /// Some participants failed to receive a view update.
    #[error("{} participants failed to receive an update", .0.len())]
    Updates(Vec<E>),
}

/// Drives the game from `game_state` until it ends. Before every turn, sends every
/// participant the [view](GameView) of the game and their rack, then asks the current
/// player for turns until one is accepted. After the last turn, sends every participant
/// the [last view](LastView).
///
/// # Arguments
///
/// * `participants`: One participant per player in turn order.
/// * `game_state`: The state of the game to resume from.
/// * `dictionary`: Decides which words are valid.
///
/// # Errors
///
/// * [RuntimeError::ParticipantCount] The participants do not match the players.
/// * [RuntimeError::Input] The current player failed to send input or receive an
/// error update.
/// * [RuntimeError::Updates] Some participants failed to receive a view update.
///
/// # Returns
///
/// The [last state](LastState) of the game.
pub async fn run<P, E, D>(
    participants: &[P],
    mut game_state: GameState,
    dictionary: &D,
) -> Result<LastState, RuntimeError<E>>
where
    P: Participant<E>,
    D: Dictionary + ?Sized,
{
    let expected = game_state.players().len();
    if participants.len() != expected {
        return Err(RuntimeError::ParticipantCount {
            expected,
            actual: participants.len(),
        });
    }

    loop {
        game_send_updates(participants, &game_state)
            .await
            .map_err(RuntimeError::Updates)?;
        match game_process_input(participants, game_state, dictionary)? {
            Either::Left(next_game_state) => game_state = next_game_state,
            Either::Right(last_state) => {
                last_send_updates(participants, &last_state)
                    .await
                    .map_err(RuntimeError::Updates)?;
                return Ok(last_state);
            }
        }
    }
}
