use crate::runtime::{Participant, RuntimeError};
use crate::{confirm_skip, Dictionary, GameState, LastState, TurnInput};
use either::Either;
use futures::future;
use itertools::Itertools;

/// It repeatedly asks the current player for a turn, and if the turn is invalid, it tells
/// the player about the error and asks again. If the turn is valid, stops asking and
/// produces the next state of the game.
///
/// Calls [`Participant::get_turn`] for an input. An empty word is confirmed with
/// [`Participant::confirm_skip`] first, and a declined skip asks for a new turn.
/// Attempts [`GameState::play`], and if the input is invalid, calls
/// [`Participant::update_move_error`].
///
/// # Arguments
///
/// * `participants`: One participant per player in turn order.
/// * `game_state`: The current state of the game.
/// * `dictionary`: Decides which words are valid.
///
/// # Errors
///
/// * [RuntimeError::ParticipantCount] No participant stands for the current player.
/// * [RuntimeError::Input] The current player failed to send input or receive an error
/// update.
///
/// # Returns
///
/// Either the next state of the game or the last state of the game.
pub fn game_process_input<P, E, D>(
    participants: &[P],
    mut game_state: GameState,
    dictionary: &D,
) -> Result<Either<GameState, LastState>, RuntimeError<E>>
where
    P: Participant<E>,
    D: Dictionary + ?Sized,
{
    let participant = participants.get(game_state.current_player()).ok_or(
        RuntimeError::ParticipantCount {
            expected: game_state.players().len(),
            actual: participants.len(),
        },
    )?;

    loop {
        let input = participant.get_turn().map_err(RuntimeError::Input)?;
        if input.is_skip()
            && !game_confirm_skip(participant, &game_state).map_err(RuntimeError::Input)?
        {
            continue;
        }
        match game_state.play(&input, dictionary) {
            Ok(next_or_last_state) => return Ok(next_or_last_state),
            Err((same_game_state, error)) => {
                game_state = same_game_state;
                participant
                    .update_move_error(
                        &game_state.game_view(),
                        game_state.current_rack(),
                        input,
                        error,
                    )
                    .map_err(RuntimeError::Input)?;
            }
        }
    }
}

/// Asks `participant` whether they really want to skip until they answer yes or no.
/// Every other answer is reported with [`Participant::update_move_error`].
///
/// # Errors
///
/// When `participant` fails to send an answer or receive an error update.
///
/// # Returns
///
/// Whether the skip was confirmed.
fn game_confirm_skip<P, E>(participant: &P, game_state: &GameState) -> Result<bool, E>
where
    P: Participant<E>,
{
    loop {
        let response = participant.confirm_skip()?;
        match confirm_skip(&response) {
            Ok(confirmed) => return Ok(confirmed),
            Err(error) => participant.update_move_error(
                &game_state.game_view(),
                game_state.current_rack(),
                TurnInput::skip(),
                error,
            )?,
        }
    }
}

/// Asynchronously sends the current state of the game to every [`Participant`] with
/// their own rack.
///
/// # Arguments
///
/// * `participants`: One participant per player in turn order.
/// * `game_state`: The current state of the game.
///
/// # Errors
///
/// Accumulates all errors from [`Participant::update_view`] into a vector.
pub async fn game_send_updates<P, E>(participants: &[P], game_state: &GameState) -> Result<(), Vec<E>>
where
    P: Participant<E>,
{
    let game_view = game_state.game_view();
    let update_tasks = participants
        .iter()
        .zip(game_state.players())
        .map(|(participant, player)| participant.update_view(&game_view, player.rack()));

    let errors = future::join_all(update_tasks)
        .await
        .into_iter()
        .filter_map(Result::err)
        .collect_vec();
    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(())
}
