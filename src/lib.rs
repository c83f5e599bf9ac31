//! Concrete structs to represent and protect the state of a word placement board game with
//! methods to validate, apply, and score each turn until the game ends.
//!
//! ## Summary
//!
//! Players take turns placing words on a 15 by 15 [board](Board) with [tiles](Tile) drawn
//! from a shared [bag](Bag) into their own [rack](Rack). Each turn either places a word
//! across or down from an anchor [coordinate](Coordinate) or skips. A placed word must be
//! in the [dictionary](Dictionary), must fit on the board, must agree with every letter it
//! crosses, and must be paid for with [tiles](Tile) from the current player's rack, where a
//! [wildcard](WILDCARD) can stand in for any letter. Players earn points for every word they
//! place, boosted by the [premium squares](Premium) the word freshly covers. The game ends
//! when too many turns in a row are skipped or when some player runs out of
//! [tiles](Tile) with nothing left in the bag. The players with the most points win.
//!
//! ## What are the phases of the game?
//!
//! * `Game`: Every turn before the game ends. The first turn must cover the
//! [center](CENTER) and every later word must cross a letter already on the board.
//! Represented by [GameState](GameState).
//! * `Last`: The game has ended. Represented by [LastState](LastState).
//!
//! ## How is the game created?
//!
//! [GameState::new] and [GameState::new_random] check the player names, fill and shuffle
//! the [bag](Bag), and draw a full [rack](Rack) of [RACK_CAPACITY] [tiles](Tile) for every
//! player.
//!
//! ## How is the game advanced?
//!
//! The current player [plays](GameState::play) a [turn](TurnInput), which is first
//! [validated](GameState::validate) without changing anything. A rejected turn hands the
//! unchanged game state back with the [reason](MoveError). A skip only counts towards
//! [SKIP_LIMIT]. A placed word is written on the board, the rack is
//! [replenished](Rack::replenish) from the bag, and the [score](fn@score) is added to the player.
//! The turn then passes to the next player in a fixed rotation, and a new round starts
//! whenever the rotation wraps back to the first player.
//!
//! ## How are points calculated?
//!
//! Every letter of a placed word counts its [tile](Tile) value, with played wildcards worth
//! nothing. A letter freshly placed on a double or triple letter square counts two or three
//! times. The total is then doubled or tripled for every double or triple word square the
//! word freshly covers. Squares covered in earlier turns carry no multiplier.
//!
//! ## How is the game viewed?
//!
//! [GameState::game_view] and [LastState::last_view] borrow an immutable representation of
//! the game visible to all players. [GameState::get_rack] shares the private
//! [rack](Rack) of each individual player.
//!
//! ## How is the game driven?
//!
//! The [runtime] module drives a game to its end with one [Participant](runtime::Participant)
//! per player, asking the current player again whenever a turn is rejected.
//!
//! ## How are game states tested when properties are private?
//!
//! The `test` build configuration adds many required methods for testing. Each state struct
//! implements methods to get mutable references to their properties, helper methods to add
//! random data to specific properties, and methods to set properties for common scenarios.

// Document!
#![forbid(
    rustdoc::broken_intra_doc_links,
    rustdoc::private_intra_doc_links,
    missing_docs,
    rustdoc::missing_crate_level_docs,
    rustdoc::invalid_codeblock_attributes,
    rustdoc::invalid_html_tags,
    rustdoc::bare_urls
)]
// Don't leave a build in a half finished state!
#![deny(
    future_incompatible,
    nonstandard_style,
    rust_2018_compatibility,
    rust_2018_idioms,
    rust_2021_compatibility,
    single_use_lifetimes,
    unreachable_pub,
    missing_debug_implementations,
    unsafe_code
)]

pub use bag::*;
pub use board::*;
pub use consts::*;
pub use coordinate::*;
pub use dictionary::*;
pub use game_state::*;
pub use last_state::*;
pub use play::*;
pub use player::*;
pub use rack::*;
#[cfg(test)]
pub use random::*;
pub use score::*;
pub use tile::*;
pub use types::*;

mod bag;
mod board;
mod consts;
mod coordinate;
mod dictionary;
mod game_state;
mod last_state;
mod play;
mod player;
mod rack;
#[cfg(test)]
mod random;
pub mod runtime;
mod score;
mod tile;
mod types;
