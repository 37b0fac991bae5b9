//! Settlement results.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use crate::hand::{Hand, HandOutcome};
use crate::options::GameOptions;

/// How a player hand fared against the dealer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Settlement {
    /// Player wins (dealer busts or player has more points).
    Win,
    /// Player loses (player busts or dealer has more points).
    Lose,
    /// Tie; the stake is returned.
    Push,
    /// Player has 21 and the dealer does not.
    Blackjack,
}

impl Settlement {
    /// Settles `hand` against the dealer's `dealer` hand.
    #[must_use]
    pub fn of(hand: &Hand, dealer: &Hand) -> Self {
        let dealer_blackjack = dealer.outcome() == HandOutcome::Blackjack;
        let dealer_bust = dealer.outcome() == HandOutcome::Bust;

        match hand.outcome() {
            HandOutcome::Bust => Self::Lose,
            HandOutcome::Blackjack if dealer_blackjack => Self::Push,
            HandOutcome::Blackjack => Self::Blackjack,
            HandOutcome::Stand | HandOutcome::None => {
                if dealer_bust || hand.points() > dealer.points() {
                    Self::Win
                } else if hand.points() < dealer.points() {
                    Self::Lose
                } else {
                    Self::Push
                }
            }
        }
    }

    /// Returns the payout multiplier the table pays for this settlement.
    #[must_use]
    pub const fn multiplier(self, options: &GameOptions) -> f64 {
        match self {
            Self::Win => options.win_pays,
            Self::Lose => 0.0,
            Self::Push => options.push_pays,
            Self::Blackjack => options.blackjack_pays,
        }
    }
}

/// Result for a single hand.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandResult {
    /// The hand index (for split hands).
    pub hand_index: usize,
    /// How the hand settled.
    pub settlement: Settlement,
    /// The bet on the hand.
    pub bet: usize,
    /// The multiplier applied to the bet.
    pub multiplier: f64,
    /// The amount credited back to the player.
    pub payout: usize,
    /// The hand's points.
    pub points: u32,
}

/// Result for a single player.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerResult {
    /// The player ID.
    pub player_id: String,
    /// Results for each hand (multiple if split).
    pub hands: Vec<HandResult>,
    /// Total credited across all hands.
    pub total_payout: usize,
    /// Net result (positive = profit, negative = loss).
    pub net: isize,
}

/// Result of the whole round.
#[derive(Debug, Clone, PartialEq)]
pub struct RoundResult {
    /// Results for each player, in seat order.
    pub players: Vec<PlayerResult>,
    /// The dealer's final points.
    pub dealer_points: u32,
    /// Whether the dealer busted.
    pub dealer_bust: bool,
    /// Whether the dealer reached 21.
    pub dealer_blackjack: bool,
}
