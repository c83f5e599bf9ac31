use crate::{Board, GameOverReason, LastState, Names, PlayerIndexes, Players, Scores};

/// Immutably borrows properties from [`LastState`].
#[derive(Debug)]
pub struct LastView<'a> {
    /// The round in which the game ended.
    pub round: usize,
    /// The number of [tiles](crate::Tile) that were never drawn.
    pub bag_len: usize,
    /// The grid of [cells](crate::Cell) with every letter played.
    pub board: &'a Board,
    /// Every [player](crate::Player) with their final [rack](crate::Rack) in turn order.
    pub players: &'a Players,
    /// The name of each player in turn order.
    pub names: Names<'a>,
    /// The final score of each player in turn order.
    pub scores: Scores,
    /// The indexes of every player sharing the highest score.
    pub winners: PlayerIndexes,
    /// Why the game ended.
    pub reason: GameOverReason,
}

impl LastState {
    /// # Returns
    ///
    /// A new [`LastView`] struct, which immutably borrows properties from [`LastState`], but
    /// with `bag` replaced by the number of [tiles](crate::Tile) left in it.
    pub fn last_view(&self) -> LastView<'_> {
        LastView {
            round: self.round,
            bag_len: self.bag.remaining(),
            board: &self.board,
            players: &self.players,
            names: self.players.iter().map(|player| player.name()).collect(),
            scores: self.players.iter().map(|player| player.score()).collect(),
            winners: self.winners(),
            reason: self.reason,
        }
    }
}
