//! Players: money, bets and (possibly split) hands.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::card::Card;
use crate::error::{ActionError, BetError};
use crate::hand::Hand;

#[cfg(feature = "std")]
fn round_amount(amount: f64) -> usize {
    amount.round() as usize
}

#[cfg(all(not(feature = "std"), feature = "alloc"))]
fn round_amount(amount: f64) -> usize {
    libm::round(amount) as usize
}

/// A player seated at the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    id: String,
    name: String,
    money: usize,
    total_bet: usize,
    hands: Vec<Hand>,
    split: bool,
}

impl Player {
    /// Creates a player with one empty hand.
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>, money: usize) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            money,
            total_bet: 0,
            hands: alloc::vec![Hand::new()],
            split: false,
        }
    }

    /// Places a bet on the hand at `hand_index`.
    ///
    /// This is the only way money leaves a player. Nothing changes when the bet
    /// is rejected.
    ///
    /// # Errors
    ///
    /// Returns an error if the hand does not exist, the amount exceeds the
    /// player's money, or the amount is odd.
    pub fn make_bet(&mut self, hand_index: usize, amount: usize) -> Result<(), BetError> {
        let hand = self
            .hands
            .get_mut(hand_index)
            .ok_or(BetError::HandNotFound)?;

        if amount > self.money {
            return Err(BetError::InsufficientFunds);
        }
        if amount % 2 != 0 {
            return Err(BetError::OddAmount);
        }

        hand.make_bet(amount);
        self.money -= amount;
        self.total_bet += amount;

        Ok(())
    }

    /// Recomputes whether the first hand is a splittable pair.
    ///
    /// The first two cards must have the same value; a hand with fewer than
    /// two cards cannot be split.
    pub fn check_split(&mut self) {
        let first = &self.hands[0];
        self.split = match (first.card(0), first.card(1)) {
            (Some(a), Some(b)) => a.value() == b.value(),
            _ => false,
        };
    }

    /// Moves the second card of the first hand into a new hand.
    ///
    /// The new hand is appended with no bet; placing its bet and dealing the
    /// replacement cards is up to the caller.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::CannotSplit`] if the first hand does not hold
    /// exactly two cards.
    pub fn split_hand(&mut self) -> Result<(), ActionError> {
        if self.hands[0].len() != 2 {
            return Err(ActionError::CannotSplit);
        }

        let card = self.hands[0].remove_card(1)?;
        let mut hand = Hand::new();
        hand.add_card(card, false);
        self.hands.push(hand);

        Ok(())
    }

    /// Deals a card into the hand at `hand_index`.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::HandNotFound`] if the hand does not exist. The
    /// card is dropped in that case, so check the index before drawing.
    pub fn deal_card(
        &mut self,
        card: Card,
        hand_index: usize,
        hidden: bool,
    ) -> Result<(), ActionError> {
        let hand = self
            .hands
            .get_mut(hand_index)
            .ok_or(ActionError::HandNotFound)?;
        hand.add_card(card, hidden);
        Ok(())
    }

    /// Stands on the hand at `hand_index`.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::HandNotFound`] if the hand does not exist.
    pub fn stand(&mut self, hand_index: usize) -> Result<(), ActionError> {
        self.hand_mut(hand_index)
            .ok_or(ActionError::HandNotFound)?
            .stand();
        Ok(())
    }

    /// Turns card `card_index` of the hand at `hand_index` face down.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::HandNotFound`] or [`ActionError::CardNotFound`]
    /// if either index is out of range.
    pub fn hide_card(
        &mut self,
        hand_index: usize,
        card_index: usize,
    ) -> Result<(), ActionError> {
        self.hand_mut(hand_index)
            .ok_or(ActionError::HandNotFound)?
            .hide_card(card_index)
    }

    /// Turns card `card_index` of the hand at `hand_index` face up.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::HandNotFound`] or [`ActionError::CardNotFound`]
    /// if either index is out of range.
    pub fn show_card(
        &mut self,
        hand_index: usize,
        card_index: usize,
    ) -> Result<(), ActionError> {
        self.hand_mut(hand_index)
            .ok_or(ActionError::HandNotFound)?
            .show_card(card_index)
    }

    /// Credits `round(bet × multiplier)` for the hand at `hand_index` and
    /// returns the credited amount.
    ///
    /// The multiplier is chosen by settlement, e.g. 2.0 for a win, 1.0 for a
    /// push and 0.0 for a loss.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::HandNotFound`] if the hand does not exist.
    pub fn payout_hand(
        &mut self,
        hand_index: usize,
        multiplier: f64,
    ) -> Result<usize, ActionError> {
        let bet = self
            .hands
            .get(hand_index)
            .ok_or(ActionError::HandNotFound)?
            .bet();

        Ok(self.credit(bet, multiplier))
    }

    pub(crate) fn credit(&mut self, bet: usize, multiplier: f64) -> usize {
        #[expect(
            clippy::cast_precision_loss,
            reason = "f64 has sufficient precision for monetary values"
        )]
        let payout = round_amount(bet as f64 * multiplier);
        self.money += payout;
        payout
    }

    /// Clears every hand and returns the cards they held.
    ///
    /// Afterwards the player has a single empty hand, no outstanding bet and
    /// the split flag is cleared.
    #[must_use = "discarded cards must be moved to a deck"]
    pub fn discard(&mut self) -> Vec<Card> {
        let mut cards = Vec::new();
        for hand in &mut self.hands {
            cards.append(&mut hand.discard());
        }

        self.total_bet = 0;
        self.hands.clear();
        self.hands.push(Hand::new());
        self.split = false;

        cards
    }

    /// Returns the player ID.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the player's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the money not currently staked.
    #[must_use]
    pub const fn money(&self) -> usize {
        self.money
    }

    /// Returns the total staked this round across all hands.
    #[must_use]
    pub const fn total_bet(&self) -> usize {
        self.total_bet
    }

    /// Returns whether the first hand is currently a splittable pair.
    #[must_use]
    pub const fn can_split(&self) -> bool {
        self.split
    }

    /// Returns the player's hands.
    #[must_use]
    pub fn hands(&self) -> &[Hand] {
        &self.hands
    }

    /// Returns the hand at `index`.
    #[must_use]
    pub fn hand(&self, index: usize) -> Option<&Hand> {
        self.hands.get(index)
    }

    pub(crate) fn hand_mut(&mut self, index: usize) -> Option<&mut Hand> {
        self.hands.get_mut(index)
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Player: {}", self.name)?;
        writeln!(f, "Money: {}", self.money)?;
        writeln!(f, "Total Bet: {}", self.total_bet)?;
        writeln!(f, "Hands: {}", self.hands.len())?;
        write!(f, "Split: {}", self.split)?;
        for (index, hand) in self.hands.iter().enumerate() {
            write!(f, "\nHand {index}: {hand}")?;
        }
        Ok(())
    }
}
