use crate::{Players, MIN_PLAYERS, PLAYER_CAPACITY};
use rand::Rng;

/// Generates a random, small number of distinct player names, between [MIN_PLAYERS]
/// and [PLAYER_CAPACITY] inclusive.
pub fn random_names<R: Rng + ?Sized>(rng: &mut R) -> Vec<String> {
    let players = rng.gen_range(MIN_PLAYERS..=PLAYER_CAPACITY);
    (0..players).map(|player| format!("Player {player}")).collect()
}

/// Adds a random, medium, non-zero number of points to each player's score.
pub fn random_scores<R: Rng + ?Sized>(rng: &mut R, players: &mut Players) {
    for player in players.iter_mut() {
        player.increase_score(rng.gen_range(1..100));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Player, Rack};

    #[test]
    fn random_names_in_range() {
        let mut rng = rand::thread_rng();

        let names = random_names(&mut rng);

        assert!((MIN_PLAYERS..=PLAYER_CAPACITY).contains(&names.len()));
        assert_eq!("Player 0", names[0]);
    }

    #[test]
    fn random_scores_non_zero() {
        let mut rng = rand::thread_rng();
        let mut players: Players = (0..PLAYER_CAPACITY)
            .map(|player| Player::new(format!("Player {player}"), Rack::new()))
            .collect();

        random_scores(&mut rng, &mut players);

        assert!(players.iter().all(|player| (1..100).contains(&player.score())));
    }
}
