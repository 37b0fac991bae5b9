use crate::error::{ActionError, BetError, DeckError};
use crate::hand::HandOutcome;

use super::{Game, RoundPhase};

impl Game {
    /// Places a bet for `player` on the hand at `hand_index`.
    ///
    /// # Errors
    ///
    /// Returns an error if the player or hand cannot be found, the player
    /// lacks funds, or the amount is odd. Nothing changes on error.
    pub fn bet(
        &mut self,
        player: usize,
        hand_index: usize,
        amount: usize,
    ) -> Result<(), BetError> {
        self.players
            .get_mut(player)
            .ok_or(BetError::PlayerNotFound)?
            .make_bet(hand_index, amount)
    }

    /// Player action: Hit (draw a card).
    ///
    /// Returns the hand's outcome after the card.
    ///
    /// # Errors
    ///
    /// Returns an error if the player or hand cannot be found or the deck is
    /// empty.
    pub fn hit_player(
        &mut self,
        player: usize,
        hand_index: usize,
    ) -> Result<HandOutcome, ActionError> {
        let hand = self
            .players
            .get_mut(player)
            .ok_or(ActionError::PlayerNotFound)?
            .hand_mut(hand_index)
            .ok_or(ActionError::HandNotFound)?;

        let card = self.deck.draw()?;
        log::trace!("player {player} hand {hand_index} draws {card}");
        hand.add_card(card, false);

        Ok(hand.outcome())
    }

    /// Player action: Stand (keep current hand).
    ///
    /// # Errors
    ///
    /// Returns an error if the player or hand cannot be found.
    pub fn stand_player(&mut self, player: usize, hand_index: usize) -> Result<(), ActionError> {
        self.players
            .get_mut(player)
            .ok_or(ActionError::PlayerNotFound)?
            .stand(hand_index)
    }

    /// Player action: Double down (match the bet, receive one card, then
    /// stand).
    ///
    /// A hand that busts or reaches 21 on the extra card keeps that outcome.
    /// Returns the hand's outcome after the card.
    ///
    /// # Errors
    ///
    /// Returns an error if the player or hand cannot be found, the matching
    /// bet is rejected, or the deck is empty. Nothing changes on error.
    pub fn double_down(
        &mut self,
        player: usize,
        hand_index: usize,
    ) -> Result<HandOutcome, ActionError> {
        let seat = self
            .players
            .get_mut(player)
            .ok_or(ActionError::PlayerNotFound)?;
        let bet = seat
            .hand(hand_index)
            .ok_or(ActionError::HandNotFound)?
            .bet();

        if self.deck.is_empty() {
            return Err(DeckError::Empty.into());
        }
        seat.make_bet(hand_index, bet)?;

        let card = self.deck.draw()?;
        log::trace!("player {player} hand {hand_index} doubles on {card}");
        let hand = seat
            .hand_mut(hand_index)
            .ok_or(ActionError::HandNotFound)?;
        hand.add_card(card, false);
        hand.stand();

        Ok(hand.outcome())
    }

    /// Player action: Split (split the first hand's pair into two hands).
    ///
    /// The second card moves to a new hand, the new hand gets a bet equal to
    /// the first hand's bet, and each hand receives one fresh card.
    ///
    /// # Errors
    ///
    /// Returns an error if the player cannot be found, the first hand is not a
    /// two-card pair, the player already holds the maximum number of hands,
    /// the player cannot cover the matching bet, or the deck holds fewer than
    /// two cards. Nothing changes on error.
    pub fn split(&mut self, player: usize) -> Result<(), ActionError> {
        let seat = self
            .players
            .get_mut(player)
            .ok_or(ActionError::PlayerNotFound)?;

        let first = &seat.hands()[0];
        if !seat.can_split() || first.len() != 2 {
            return Err(ActionError::CannotSplit);
        }
        if seat.hands().len() >= self.options.max_hands {
            return Err(ActionError::MaxHandsReached);
        }
        let bet = first.bet();
        if bet > seat.money() {
            return Err(BetError::InsufficientFunds.into());
        }
        if self.deck.len() < 2 {
            return Err(DeckError::Empty.into());
        }

        seat.split_hand()?;
        let new_index = seat.hands().len() - 1;
        seat.make_bet(new_index, bet)?;

        let card = self.deck.draw()?;
        seat.deal_card(card, 0, false)?;
        let card = self.deck.draw()?;
        seat.deal_card(card, new_index, false)?;
        seat.check_split();

        log::debug!("player {player} split into {} hands", seat.hands().len());

        Ok(())
    }

    /// Dealer action: Hit (draw a card).
    ///
    /// Returns the dealer hand's outcome after the card.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::Empty`] if the deck is empty.
    pub fn hit_dealer(&mut self) -> Result<HandOutcome, DeckError> {
        let card = self.deck.draw()?;
        log::trace!("dealer draws {card}");
        self.dealer.deal(card, false);
        self.phase = RoundPhase::DealerTurn;

        Ok(self.dealer.hand().outcome())
    }

    /// Dealer action: Stand.
    pub fn stand_dealer(&mut self) {
        self.dealer.stand();
        self.phase = RoundPhase::DealerTurn;
    }
}
