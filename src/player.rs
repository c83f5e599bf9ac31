use crate::Rack;

/// A named participant in turn order with their [rack](Rack) and score.
/// The score never decreases.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Player {
    name: String,
    rack: Rack,
    score: u32,
}

impl Player {
    /// # Arguments
    ///
    /// * `name`: What the player is called.
    /// * `rack`: The [tiles](crate::Tile) the player starts with.
    ///
    /// # Returns
    ///
    /// A [`Player`] with a score of `0`.
    pub fn new(name: impl Into<String>, rack: Rack) -> Player {
        Player {
            name: name.into(),
            rack,
            score: 0,
        }
    }

    /// What the player is called.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The [tiles](crate::Tile) the player holds.
    #[inline]
    pub fn rack(&self) -> &Rack {
        &self.rack
    }

    /// The points earned so far.
    #[inline]
    pub fn score(&self) -> u32 {
        self.score
    }

    pub(crate) fn mut_rack(&mut self) -> &mut Rack {
        &mut self.rack
    }

    pub(crate) fn increase_score(&mut self, points: u32) {
        self.score += points;
    }
}

#[cfg(test)]
impl Player {
    /// A mutable reference to `self.score`.
    pub fn mut_score(&mut self) -> &mut u32 {
        &mut self.score
    }
}
