//! A blackjack table engine with optional `no_std` support.
//!
//! The crate models the shoe, the discard pile, player and dealer hands, and
//! the [`Game`] that moves cards between them: dealing, hitting, standing,
//! splitting, doubling down, settling and recycling the discard pile.
//!
//! # Example
//!
//! ```
//! use bjtable::{Game, GameOptions, Player};
//!
//! let players = vec![Player::new("p1", "Ann", 100)];
//! let mut game = Game::new(GameOptions::default(), players, 42);
//! game.shuffle_deck();
//!
//! game.bet(0, 0, 10).unwrap();
//! game.deal().unwrap();
//! game.stand_player(0, 0).unwrap();
//! game.play_dealer().unwrap();
//! let _result = game.payout();
//!
//! game.discard_all();
//! game.refill();
//! assert_eq!(game.deck().len(), 52);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod dealer;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod player;
pub mod result;
mod sync;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use dealer::Dealer;
pub use deck::Deck;
pub use error::{ActionError, BetError, DeckError};
pub use game::{Game, RoundPhase, SharedGame};
pub use hand::{Hand, HandOutcome};
pub use options::GameOptions;
pub use player::Player;
pub use result::{HandResult, PlayerResult, RoundResult, Settlement};
