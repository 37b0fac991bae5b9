//! Table orchestration: the shoe, the discard pile, the dealer and the players.

use alloc::vec::Vec;
use core::fmt;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE};
use crate::dealer::Dealer;
use crate::deck::Deck;
use crate::options::GameOptions;
use crate::player::Player;

mod actions;
mod dealer;
mod round;
pub mod shared;
pub mod state;

pub use shared::SharedGame;
pub use state::RoundPhase;

/// A blackjack table that owns the shoe, the discard pile, the dealer and the
/// seated players.
///
/// Every card at the table sits in exactly one place: the live deck, the
/// discard pile, or a hand. Operations move cards between those places and
/// never copy them. The game does not police the order of calls; callers run
/// a round as bet, [`deal`](Self::deal), player actions, dealer actions,
/// [`payout`](Self::payout), [`discard_all`](Self::discard_all) and
/// [`refill`](Self::refill).
pub struct Game {
    /// Game options.
    pub options: GameOptions,
    /// Live draw pile.
    deck: Deck,
    /// Cards collected at the end of each round.
    discard: Deck,
    dealer: Dealer,
    players: Vec<Player>,
    phase: RoundPhase,
    /// Random number generator used for shuffling.
    rng: ChaCha8Rng,
}

impl Game {
    /// Creates a table with the given players and a fresh, unshuffled shoe.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::{Game, GameOptions, Player};
    ///
    /// let players = vec![Player::new("42324", "Thotu", 100)];
    /// let mut game = Game::new(GameOptions::default(), players, 42);
    /// game.shuffle_deck();
    /// assert_eq!(game.deck().len(), 52);
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, players: Vec<Player>, seed: u64) -> Self {
        let deck = Deck::new(options.decks);

        Self {
            deck,
            discard: Deck::empty(),
            dealer: Dealer::new(),
            players,
            phase: RoundPhase::Betting,
            rng: ChaCha8Rng::seed_from_u64(seed),
            options,
        }
    }

    /// Shuffles the live deck.
    pub fn shuffle_deck(&mut self) {
        self.deck.shuffle(&mut self.rng);
        log::debug!("shuffled {} cards", self.deck.len());
    }

    /// Returns whether enough of the shoe has been dealt out that the discard
    /// pile should be refilled into the deck.
    ///
    /// Always `false` when penetration is 0.
    #[must_use]
    pub fn needs_refill(&self) -> bool {
        if self.options.penetration == 0.0 {
            return false;
        }

        let total_cards = self.options.decks as usize * DECK_SIZE;
        if total_cards == 0 {
            return false;
        }
        let remaining = self.deck.len();
        #[expect(
            clippy::cast_precision_loss,
            reason = "f64 has sufficient precision for card counts"
        )]
        let used_ratio = 1.0 - (remaining as f64 / total_cards as f64);

        used_ratio >= self.options.penetration
    }

    /// Returns the live deck.
    #[must_use]
    pub const fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Returns the live deck mutably, e.g. to stack the shoe in simulations.
    pub const fn deck_mut(&mut self) -> &mut Deck {
        &mut self.deck
    }

    /// Returns the discard pile.
    #[must_use]
    pub const fn discard_pile(&self) -> &Deck {
        &self.discard
    }

    /// Returns the dealer.
    #[must_use]
    pub const fn dealer(&self) -> &Dealer {
        &self.dealer
    }

    /// Returns the dealer mutably, e.g. to reveal the hole card.
    pub const fn dealer_mut(&mut self) -> &mut Dealer {
        &mut self.dealer
    }

    /// Returns the seated players.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Returns the player at `index`.
    #[must_use]
    pub fn player(&self, index: usize) -> Option<&Player> {
        self.players.get(index)
    }

    /// Returns the current round phase.
    #[must_use]
    pub const fn phase(&self) -> RoundPhase {
        self.phase
    }

    /// Returns the number of cards at the table: deck, discard pile and every
    /// hand.
    #[must_use]
    pub fn shoe_size(&self) -> usize {
        let in_hands: usize = self
            .players
            .iter()
            .flat_map(Player::hands)
            .map(crate::hand::Hand::len)
            .sum();

        self.deck.len() + self.discard.len() + in_hands + self.dealer.hand().len()
    }

    /// Moves cards taken out of a hand onto the discard pile, face up.
    fn bury(discard: &mut Deck, cards: Vec<Card>) {
        for mut card in cards {
            card.show();
            discard.add(card);
        }
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.deck)?;
        writeln!(f, "Discard pile: {} cards", self.discard.len())?;
        write!(f, "{}", self.dealer)?;
        for player in &self.players {
            write!(f, "\n{player}")?;
        }
        Ok(())
    }
}
