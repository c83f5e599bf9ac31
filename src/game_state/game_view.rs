use crate::{Board, GameState, Names, Rack, RackLens, Scores};

/// Immutably borrows properties from [`GameState`].
#[derive(Debug)]
pub struct GameView<'a> {
    /// The round number, starting at `1`.
    pub round: usize,
    /// The number of [tiles](crate::Tile) that haven't been drawn yet.
    pub bag_len: usize,
    /// The grid of [cells](crate::Cell) with every letter played so far.
    pub board: &'a Board,
    /// The name of each player in turn order.
    pub names: Names<'a>,
    /// The score of each player in turn order.
    pub scores: Scores,
    /// The number of [tiles](crate::Tile) in each rack in turn order.
    pub rack_lens: RackLens,
    /// The index of the player whose turn it is.
    pub current_player: usize,
    /// The number of consecutive skipped turns.
    pub skips: usize,
}

impl GameState {
    /// # Returns
    ///
    /// A new [`GameView`] struct, which immutably borrows properties from [`GameState`], but
    /// with `bag` replaced by the number of [tiles](crate::Tile) left in it and each rack
    /// replaced by its number of [tiles](crate::Tile).
    pub fn game_view(&self) -> GameView<'_> {
        GameView {
            round: self.round,
            bag_len: self.bag.remaining(),
            board: &self.board,
            names: self.players.iter().map(|player| player.name()).collect(),
            scores: self.players.iter().map(|player| player.score()).collect(),
            rack_lens: self.players.iter().map(|player| player.rack().len()).collect(),
            current_player: self.current_player,
            skips: self.skips,
        }
    }

    /// # Returns
    ///
    /// The [rack](Rack) held by the requesting player or `None` if out of bounds.
    pub fn get_rack(&self, index: usize) -> Option<&Rack> {
        self.players.get(index).map(|player| player.rack())
    }
}
