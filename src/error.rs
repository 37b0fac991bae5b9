//! Error types for table operations.

use thiserror::Error;

/// Errors that can occur when placing a bet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BetError {
    /// Player not found.
    #[error("player not found")]
    PlayerNotFound,
    /// Hand not found.
    #[error("hand not found")]
    HandNotFound,
    /// Bet exceeds the player's money.
    #[error("insufficient funds")]
    InsufficientFunds,
    /// Bet amount is odd and cannot be split or doubled in whole units.
    #[error("bet amount must be even")]
    OddAmount,
}

/// Errors raised by a [`Deck`](crate::Deck).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// Drew from a deck with no cards left.
    #[error("no cards left in the deck")]
    Empty,
}

/// Errors that can occur during player and dealer actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Player not found.
    #[error("player not found")]
    PlayerNotFound,
    /// Hand not found.
    #[error("hand not found")]
    HandNotFound,
    /// Card index is outside the hand.
    #[error("card not found")]
    CardNotFound,
    /// The first hand is not a splittable pair.
    #[error("cannot split this hand")]
    CannotSplit,
    /// The player already holds the maximum number of hands.
    #[error("maximum hands reached")]
    MaxHandsReached,
    /// The bet attached to the action was rejected.
    #[error(transparent)]
    Bet(#[from] BetError),
    /// The shoe could not supply the cards the action needs.
    #[error(transparent)]
    Deck(#[from] DeckError),
}
