use crate::{Bag, Board, PlayerIndexes, Players};
pub use last_view::*;

mod last_view;
#[cfg(test)]
mod test_setup;

/// Describes why the game ended.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum GameOverReason {
    /// The consecutive skipped turns reached [SKIP_LIMIT](crate::SKIP_LIMIT).
    Skipped,
    /// A player emptied their rack while the bag was empty.
    OutOfTiles,
}

/// Owns game state after the last turn and implements methods. Created from
/// [`GameState::play`](crate::GameState::play).
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct LastState {
    /// The grid of [cells](crate::Cell) with every letter played.
    board: Board,
    /// This is a bag of all the [tiles](crate::Tile) that were never drawn.
    bag: Bag,
    /// Every [player](crate::Player) in the fixed turn order.
    players: Players,
    /// The round in which the game ended.
    round: usize,
    /// Why the game ended.
    reason: GameOverReason,
}

impl LastState {
    /// # Arguments
    ///
    /// * `board`: The grid of [cells](crate::Cell) with every letter played.
    /// * `bag`: This is a bag of all the [tiles](crate::Tile) that were never drawn.
    /// * `players`: Every [player](crate::Player) in the fixed turn order.
    /// * `round`: The round in which the game ended.
    /// * `reason`: Why the game ended.
    ///
    /// # Returns
    ///
    /// A [`LastState`] struct with properties owned from arguments.
    pub(crate) fn new(
        board: Board,
        bag: Bag,
        players: Players,
        round: usize,
        reason: GameOverReason,
    ) -> LastState {
        LastState {
            board,
            bag,
            players,
            round,
            reason,
        }
    }

    /// # Returns
    ///
    /// Why the game ended.
    #[inline]
    pub fn reason(&self) -> GameOverReason {
        self.reason
    }

    /// # Returns
    ///
    /// The round in which the game ended.
    #[inline]
    pub fn round(&self) -> usize {
        self.round
    }

    /// Finds every player sharing the highest score. Ties are shared wins.
    ///
    /// # Returns
    ///
    /// The indexes of the winning players in turn order.
    pub fn winners(&self) -> PlayerIndexes {
        let Some(max) = self.players.iter().map(|player| player.score()).max() else {
            return PlayerIndexes::new();
        };
        self.players
            .iter()
            .enumerate()
            .filter(|(_, player)| player.score() == max)
            .map(|(index, _)| index)
            .collect()
    }

    /// Orders the players from highest to lowest score. Players with the same score keep
    /// their turn order.
    ///
    /// # Returns
    ///
    /// The indexes of every player from first to last place.
    pub fn standings(&self) -> PlayerIndexes {
        let mut standings: PlayerIndexes = (0..self.players.len()).collect();
        standings.sort_by_key(|&index| std::cmp::Reverse(self.players[index].score()));
        standings
    }
}
