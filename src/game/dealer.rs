use alloc::vec::Vec;

use crate::error::DeckError;
use crate::hand::HandOutcome;
use crate::result::{HandResult, PlayerResult, RoundResult, Settlement};

use super::{Game, RoundPhase};

impl Game {
    /// Dealer plays their hand according to the table rules.
    ///
    /// The dealer reveals the hole card and draws while below
    /// [`dealer_stands_on`](crate::GameOptions::dealer_stands_on) points,
    /// then stands. Returns the dealer hand's final outcome.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::Empty`] if the deck runs out while the dealer must
    /// draw. Cards drawn before that stay in the dealer's hand.
    pub fn play_dealer(&mut self) -> Result<HandOutcome, DeckError> {
        self.phase = RoundPhase::DealerTurn;
        self.dealer.reveal_hole();

        loop {
            let hand = self.dealer.hand();
            if hand.outcome().is_terminal() || hand.points() >= self.options.dealer_stands_on {
                break;
            }
            self.hit_dealer()?;
        }

        self.dealer.stand();
        log::debug!(
            "dealer finishes on {} ({:?})",
            self.dealer.hand().points(),
            self.dealer.hand().outcome()
        );

        Ok(self.dealer.hand().outcome())
    }

    /// Settles every player hand against the dealer and pays it out.
    ///
    /// Each hand is classified with [`Settlement::of`] and credited
    /// `round(bet × multiplier)` through the player's payout. Call this once
    /// the dealer has finished and before the hands are discarded.
    pub fn payout(&mut self) -> RoundResult {
        let dealer = self.dealer.hand();
        let dealer_points = dealer.points();
        let dealer_bust = dealer.outcome() == HandOutcome::Bust;
        let dealer_blackjack = dealer.outcome() == HandOutcome::Blackjack;

        let mut players = Vec::with_capacity(self.players.len());

        for player in &mut self.players {
            let mut hands = Vec::with_capacity(player.hands().len());
            let mut total_payout: usize = 0;

            for (hand_index, hand) in player.hands().iter().enumerate() {
                let settlement = Settlement::of(hand, dealer);
                hands.push(HandResult {
                    hand_index,
                    settlement,
                    bet: hand.bet(),
                    multiplier: settlement.multiplier(&self.options),
                    payout: 0,
                    points: hand.points(),
                });
            }

            for result in &mut hands {
                result.payout = player.credit(result.bet, result.multiplier);
                total_payout += result.payout;
            }

            #[expect(clippy::cast_possible_wrap, reason = "payout values fit in isize")]
            let net = total_payout as isize - player.total_bet() as isize;

            players.push(PlayerResult {
                player_id: player.id().into(),
                hands,
                total_payout,
                net,
            });
        }

        self.phase = RoundPhase::Payout;

        RoundResult {
            players,
            dealer_points,
            dealer_bust,
            dealer_blackjack,
        }
    }
}
