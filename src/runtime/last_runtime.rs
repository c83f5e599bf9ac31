use crate::runtime::Participant;
use crate::LastState;
use futures::future;
use itertools::Itertools;

/// Asynchronously sends the final state of the game to every [`Participant`].
///
/// # Arguments
///
/// * `participants`: One participant per player in turn order.
/// * `last_state`: The final state of the game.
///
/// # Errors
///
/// Accumulates all errors from [`Participant::last_update_view`] into a vector.
///
/// # Returns
///
/// An empty tuple if there are no errors; otherwise, a vector of errors.
pub async fn last_send_updates<P, E>(participants: &[P], last_state: &LastState) -> Result<(), Vec<E>>
where
    P: Participant<E>,
{
    let last_view = last_state.last_view();
    let update_tasks = participants
        .iter()
        .map(|participant| participant.last_update_view(&last_view));

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
