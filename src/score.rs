use crate::Placement;

/// Calculates the points earned by a [placement](Placement).
///
/// Every letter of the word counts its [tile](crate::Tile) value, which is `0` for a
/// played wildcard. A fresh letter on a double or triple letter square multiplies its own
/// value. The sum is then multiplied by every double or triple word square covered by a
/// fresh letter. Letters that were already on the board count their value but no
/// multiplier, since their square was spent when it was first covered. The center
/// square carries no multiplier.
///
/// # Returns
///
/// The points earned, always the same for the same `placement`.
///
/// # See Also
///
/// * [Premium](crate::Premium)
/// * [Board::place](crate::Board::place)
pub fn score(placement: &Placement) -> u32 {
    let (sum, word_multiplier) =
        placement
            .cells
            .iter()
            .fold((0, 1), |(sum, word_multiplier), cell| {
                let premium = if cell.is_fresh() {
                    cell.previous.premium()
                } else {
                    None
                };
                let letter_multiplier = premium.map_or(1, |premium| premium.letter_multiplier());
                let cell_word_multiplier = premium.map_or(1, |premium| premium.word_multiplier());
                (
                    sum + cell.tile.value() * letter_multiplier,
                    word_multiplier * cell_word_multiplier,
                )
            });

    sum * word_multiplier
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Cell, PlacedCell, Premium, Tile};

    fn placement(cells: &[(char, Cell)]) -> Placement {
        Placement {
            word: cells.iter().map(|(letter, _)| letter).collect(),
            cells: cells
                .iter()
                .enumerate()
                .map(|(col, &(letter, previous))| PlacedCell {
                    coordinate: (7, col as isize),
                    tile: Tile::new(letter),
                    previous,
                })
                .collect(),
            drawn: 0,
        }
    }

    #[test]
    fn cat_on_center() {
        let placement = placement(&[('C', Cell::Center), ('A', Cell::Empty), ('T', Cell::Empty)]);

        assert_eq!(5, score(&placement));
    }

    #[test]
    fn triple_letter() {
        let placement = placement(&[('A', Cell::Premium(Premium::TripleLetter))]);

        assert_eq!(3, score(&placement));
    }

    #[test]
    fn letter_multipliers_apply_before_word_multipliers() {
        let placement = placement(&[
            ('Q', Cell::Premium(Premium::DoubleLetter)),
            ('I', Cell::Empty),
            ('S', Cell::Premium(Premium::DoubleWord)),
        ]);

        assert_eq!((20 + 1 + 1) * 2, score(&placement));
    }

    #[test]
    fn word_multipliers_compound() {
        let placement = placement(&[
            ('D', Cell::Premium(Premium::TripleWord)),
            ('O', Cell::Empty),
            ('G', Cell::Premium(Premium::DoubleWord)),
        ]);

        assert_eq!((2 + 1 + 2) * 3 * 2, score(&placement));
    }

    #[test]
    fn overlapped_letter_has_no_multiplier() {
        let mut placement = placement(&[('A', Cell::Empty), ('X', Cell::Empty)]);
        placement.cells[1].previous = Cell::Letter(Tile::new('X'));

        assert_eq!(1 + 8, score(&placement));
    }

    #[test]
    fn wildcard_is_worth_nothing() {
        let mut placement = placement(&[
            ('Z', Cell::Premium(Premium::TripleLetter)),
            ('A', Cell::Premium(Premium::DoubleWord)),
        ]);
        placement.cells[0].tile = Tile::wildcard().resolve('Z');

        assert_eq!(2, score(&placement));
    }

    #[test]
    fn score_is_pure() {
        let placement = placement(&[
            ('J', Cell::Premium(Premium::DoubleLetter)),
            ('O', Cell::Premium(Premium::TripleWord)),
        ]);
        let before = placement.clone();

        let first = score(&placement);
        let second = score(&placement);

        assert_eq!(first, second);
        assert_eq!(before, placement);
    }
}
