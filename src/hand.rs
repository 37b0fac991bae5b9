//! Hand bookkeeping: points, soft aces and outcome.

extern crate alloc;

use alloc::vec::Vec;
use core::fmt;

use crate::card::{Card, Rank};
use crate::error::ActionError;

/// Classified state of a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HandOutcome {
    /// Still in play.
    #[default]
    None,
    /// Over 21 with no soft ace left to lower.
    Bust,
    /// The owner stood.
    Stand,
    /// Exactly 21.
    Blackjack,
}

impl HandOutcome {
    /// Returns whether the outcome can no longer change.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Bust | Self::Blackjack)
    }
}

/// A hand of cards tied to one bet.
///
/// `points` is kept in step with the visible cards as they are added,
/// removed, shown or hidden; it is never recomputed from the whole hand.
/// At most one ace is counted as 11 at any time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
    bet: usize,
    points: u32,
    /// Visible aces, soft or hard.
    aces: u32,
    has_soft_ace: bool,
    outcome: HandOutcome,
}

impl Hand {
    /// Creates a new empty hand with no bet.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cards: Vec::new(),
            bet: 0,
            points: 0,
            aces: 0,
            has_soft_ace: false,
            outcome: HandOutcome::None,
        }
    }

    /// Adds a card to the hand, face down if `hidden`.
    ///
    /// A hidden card does not count towards the points until it is shown.
    pub fn add_card(&mut self, mut card: Card, hidden: bool) {
        if hidden {
            card.hide();
        } else {
            card.show();
            self.fold(card.rank());
        }
        self.cards.push(card);
    }

    /// Detaches and returns the card at `index`, taking back its points.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::CardNotFound`] if `index` is out of range.
    pub fn remove_card(&mut self, index: usize) -> Result<Card, ActionError> {
        if index >= self.cards.len() {
            return Err(ActionError::CardNotFound);
        }

        let card = self.cards.remove(index);
        if !card.is_hidden() {
            self.unfold(card.rank());
        }
        Ok(card)
    }

    /// Turns the card at `index` face up and counts it.
    ///
    /// Showing a card that is already face up does nothing.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::CardNotFound`] if `index` is out of range.
    pub fn show_card(&mut self, index: usize) -> Result<(), ActionError> {
        let card = self.cards.get_mut(index).ok_or(ActionError::CardNotFound)?;
        if !card.is_hidden() {
            return Ok(());
        }

        card.show();
        let rank = card.rank();
        self.fold(rank);
        Ok(())
    }

    /// Turns the card at `index` face down and stops counting it.
    ///
    /// Hiding a card that is already face down does nothing.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::CardNotFound`] if `index` is out of range.
    pub fn hide_card(&mut self, index: usize) -> Result<(), ActionError> {
        let card = self.cards.get_mut(index).ok_or(ActionError::CardNotFound)?;
        if card.is_hidden() {
            return Ok(());
        }

        card.hide();
        let rank = card.rank();
        self.unfold(rank);
        Ok(())
    }

    /// Turns every face-down card face up and counts it.
    pub fn show_all(&mut self) {
        for index in 0..self.cards.len() {
            let card = &mut self.cards[index];
            if card.is_hidden() {
                card.show();
                let rank = card.rank();
                self.fold(rank);
            }
        }
    }

    /// Stands on the hand unless it is already bust or a blackjack.
    pub fn stand(&mut self) {
        if !self.outcome.is_terminal() {
            self.outcome = HandOutcome::Stand;
        }
    }

    /// Adds `amount` to the bet on this hand.
    pub const fn make_bet(&mut self, amount: usize) {
        self.bet += amount;
    }

    /// Empties the hand and returns the cards it held.
    ///
    /// The hand goes back to its initial state: no cards, no bet, zero points
    /// and no outcome.
    #[must_use = "discarded cards must be moved to a deck"]
    pub fn discard(&mut self) -> Vec<Card> {
        core::mem::take(self).cards
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the card at `index`.
    #[must_use]
    pub fn card(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    /// Returns the bet on this hand.
    #[must_use]
    pub const fn bet(&self) -> usize {
        self.bet
    }

    /// Returns the points of the visible cards.
    #[must_use]
    pub const fn points(&self) -> u32 {
        self.points
    }

    /// Returns whether an ace is currently counted as 11.
    #[must_use]
    pub const fn has_soft_ace(&self) -> bool {
        self.has_soft_ace
    }

    /// Returns whether any card in the hand is face down.
    #[must_use]
    pub fn has_hidden_card(&self) -> bool {
        self.cards.iter().any(Card::is_hidden)
    }

    /// Returns the outcome of the hand.
    #[must_use]
    pub const fn outcome(&self) -> HandOutcome {
        self.outcome
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand has no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    fn fold(&mut self, rank: Rank) {
        self.points += u32::from(rank.value());

        if rank == Rank::Ace {
            self.aces += 1;
            if self.has_soft_ace {
                // Two soft aces always exceed 21; the new one counts as 1.
                self.points -= 10;
            } else {
                self.has_soft_ace = true;
            }
        }

        if self.points > 21 && self.has_soft_ace {
            self.points -= 10;
            self.has_soft_ace = false;
        }

        if self.outcome.is_terminal() {
            return;
        }
        if self.points == 21 {
            self.outcome = HandOutcome::Blackjack;
        } else if self.points > 21 {
            self.outcome = HandOutcome::Bust;
        }
    }

    fn unfold(&mut self, rank: Rank) {
        if rank == Rank::Ace {
            self.aces -= 1;
            if self.has_soft_ace {
                self.points -= 11;
                self.has_soft_ace = false;
            } else {
                self.points -= 1;
            }
        } else {
            self.points -= u32::from(rank.value());
        }

        // A hard ace may fit as 11 again once the total drops.
        if !self.has_soft_ace && self.aces > 0 && self.points + 10 <= 21 {
            self.points += 10;
            self.has_soft_ace = true;
        }
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, card) in self.cards.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{card}")?;
        }
        Ok(())
    }
}
