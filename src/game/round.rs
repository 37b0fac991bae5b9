use crate::error::{ActionError, DeckError};

use super::{Game, RoundPhase};

impl Game {
    /// Deals the opening cards.
    ///
    /// Two passes: each pass gives one card to every player's first hand and
    /// then one to the dealer. The dealer's first card is dealt face down.
    /// Afterwards every player's split flag is recomputed.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::Empty`] without dealing anything if the deck holds
    /// fewer cards than the deal needs.
    pub fn deal(&mut self) -> Result<(), ActionError> {
        let cards_needed = (self.players.len() + 1) * 2;
        if self.deck.len() < cards_needed {
            return Err(DeckError::Empty.into());
        }

        for pass in 0..2 {
            for player in &mut self.players {
                let card = self.deck.draw()?;
                player.deal_card(card, 0, false)?;
            }

            let card = self.deck.draw()?;
            self.dealer.deal(card, pass == 0);
        }

        for player in &mut self.players {
            player.check_split();
        }

        self.phase = RoundPhase::PlayerTurns;
        log::debug!(
            "dealt opening cards to {} players, {} left in deck",
            self.players.len(),
            self.deck.len()
        );

        Ok(())
    }

    /// Moves every card from every hand at the table onto the discard pile and
    /// resets the hands.
    pub fn discard_all(&mut self) {
        for player in &mut self.players {
            Self::bury(&mut self.discard, player.discard());
        }
        Self::bury(&mut self.discard, self.dealer.discard());

        self.phase = RoundPhase::Discard;
        log::debug!("discard pile holds {} cards", self.discard.len());
    }

    /// Moves the cards of one player onto the discard pile and resets their
    /// hands.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::PlayerNotFound`] if `player` is not seated.
    pub fn discard_player(&mut self, player: usize) -> Result<(), ActionError> {
        let player = self
            .players
            .get_mut(player)
            .ok_or(ActionError::PlayerNotFound)?;
        Self::bury(&mut self.discard, player.discard());
        Ok(())
    }

    /// Moves the dealer's cards onto the discard pile and resets their hand.
    pub fn discard_dealer(&mut self) {
        Self::bury(&mut self.discard, self.dealer.discard());
    }

    /// Moves the discard pile to the bottom of the live deck.
    ///
    /// The deck is not shuffled; call [`shuffle_deck`](Self::shuffle_deck) for
    /// that.
    pub fn refill(&mut self) {
        let returned = self.discard.len();
        self.deck.append(&mut self.discard);
        self.discard.clear();

        self.phase = RoundPhase::Betting;
        log::debug!(
            "refilled {returned} cards, deck holds {}",
            self.deck.len()
        );
    }
}
