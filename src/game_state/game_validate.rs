use crate::{
    resolve_wildcards, Dictionary, Direction, GameState, LegalMove, MoveError, TurnInput, Verdict,
    CENTER,
};

impl GameState {
    /// Decides whether the current player may make the [turn](TurnInput) without changing
    /// anything. Checks run in a fixed order and the first failure is returned:
    ///
    /// 1. An empty word is a skip.
    /// 2. Every [wildcard](crate::WILDCARD) in the uppercased word is resolved from
    /// `input.blanks`.
    /// 3. The direction parses and the whole run fits on the board.
    /// 4. Every letter already on the run matches the word. A wildcard never lands on
    /// a letter already on the board.
    /// 5. Every letter is from `A` to `Z` and the word is in `dictionary`.
    /// 6. On the [first turn](GameState::is_first_turn) the word starts at [CENTER].
    /// On any other turn the run covers at least one letter already on the board.
    /// 7. The current player's [rack](crate::Rack) can pay for every fresh placement.
    ///
    /// # Arguments
    ///
    /// * `input`: The word, anchor, direction, and wildcard letters of the turn.
    /// * `dictionary`: Decides which words are valid.
    ///
    /// # Errors
    ///
    /// * [MoveError::UnresolvedWildcard] Attempting to place a wildcard without its letter.
    /// * [MoveError::InvalidDirection] Attempting to place a word neither across nor down.
    /// * [MoveError::OutOfBounds] Attempting to place a word with some letter off the board.
    /// * [MoveError::OverlapMismatch] Attempting to place a letter over a different letter,
    /// or a wildcard over any letter.
    /// * [MoveError::NotAWord] Attempting to place a word not in `dictionary` or holding
    /// anything but letters.
    /// * [MoveError::MustStartAtCenter] Attempting to open the game away from [CENTER].
    /// * [MoveError::Disconnected] Attempting to place a word touching no letter on the board.
    /// * [MoveError::InsufficientTiles] Attempting to place a word needing
    /// [tiles](crate::Tile) not in the rack.
    ///
    /// # Returns
    ///
    /// Either [Verdict::Skip] or [Verdict::Play] with everything needed to apply the move.
    pub fn validate<D>(&self, input: &TurnInput, dictionary: &D) -> Result<Verdict, MoveError>
    where
        D: Dictionary + ?Sized,
    {
        if input.is_skip() {
            return Ok(Verdict::Skip);
        }

        let (word, marked) = resolve_wildcards(&input.word, &input.blanks)?;
        let direction: Direction = input.direction.parse()?;
        let run = self
            .board
            .read_run(input.anchor, direction, word.chars().count())?;

        let mut fresh = Vec::with_capacity(run.len());
        for (&(_, cell), (letter, marked)) in run.iter().zip(word.chars().zip(marked)) {
            match cell.letter() {
                Some(existing) if existing == letter && !marked => {}
                Some(_) => return Err(MoveError::OverlapMismatch),
                None => fresh.push((letter, marked)),
            }
        }

        if !word.chars().all(|letter| letter.is_ascii_uppercase()) || !dictionary.contains(&word)
        {
            return Err(MoveError::NotAWord);
        }

        if self.is_first_turn() {
            if input.anchor != CENTER {
                return Err(MoveError::MustStartAtCenter);
            }
        } else if fresh.len() == run.len() {
            return Err(MoveError::Disconnected);
        }

        let needed = self.players[self.current_player].rack().allocate(&fresh)?;

        Ok(Verdict::Play(LegalMove::new(
            word,
            input.anchor,
            direction,
            run,
            needed,
        )))
    }
}
