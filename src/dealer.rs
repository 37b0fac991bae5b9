//! The dealer's seat.

extern crate alloc;

use alloc::vec::Vec;
use core::fmt;

use crate::card::Card;
use crate::error::ActionError;
use crate::hand::Hand;

/// The dealer: one hand, no money and no bets.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dealer {
    hand: Hand,
}

impl Dealer {
    /// Creates a dealer with an empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { hand: Hand::new() }
    }

    /// Deals a card to the dealer, face down if `hidden`.
    pub fn deal(&mut self, card: Card, hidden: bool) {
        self.hand.add_card(card, hidden);
    }

    /// Turns the card at `index` face down.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::CardNotFound`] if `index` is out of range.
    pub fn hide_card(&mut self, index: usize) -> Result<(), ActionError> {
        self.hand.hide_card(index)
    }

    /// Turns the card at `index` face up.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::CardNotFound`] if `index` is out of range.
    pub fn show_card(&mut self, index: usize) -> Result<(), ActionError> {
        self.hand.show_card(index)
    }

    /// Turns every face-down card face up.
    pub fn reveal_hole(&mut self) {
        self.hand.show_all();
    }

    /// Stands on the dealer's hand.
    pub fn stand(&mut self) {
        self.hand.stand();
    }

    /// Clears the hand and returns its cards.
    #[must_use = "discarded cards must be moved to a deck"]
    pub fn discard(&mut self) -> Vec<Card> {
        self.hand.discard()
    }

    /// Returns the dealer's hand.
    #[must_use]
    pub const fn hand(&self) -> &Hand {
        &self.hand
    }

    /// Returns the first face-up card.
    #[must_use]
    pub fn up_card(&self) -> Option<&Card> {
        self.hand.cards().iter().find(|card| !card.is_hidden())
    }
}

impl fmt::Display for Dealer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Dealer: {}", self.hand)
    }
}
