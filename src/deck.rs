//! The shoe and the discard pile.

extern crate alloc;

use alloc::collections::VecDeque;
use alloc::vec::Vec;
use core::fmt;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::DeckError;

/// An ordered pile of cards.
///
/// The front of the deck is the top: [`Deck::draw`] takes from the front and
/// [`Deck::add`] puts cards at the back. The same type serves as the live shoe
/// and as the discard pile.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Deck {
    cards: VecDeque<Card>,
}

impl Deck {
    /// Creates a deck holding `decks` full 52-card sets in canonical order.
    #[must_use]
    pub fn new(decks: u8) -> Self {
        let mut deck = Self::empty();
        deck.reset(decks);
        deck
    }

    /// Creates an empty deck.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            cards: VecDeque::new(),
        }
    }

    /// Creates a deck from cards in draw order (first element is drawn first).
    #[must_use]
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self {
            cards: cards.into(),
        }
    }

    /// Replaces the contents with `decks` full sets, suit-major and
    /// rank-minor.
    pub fn reset(&mut self, decks: u8) {
        self.cards.clear();
        self.cards.reserve(decks as usize * DECK_SIZE);

        for _ in 0..decks {
            for suit in Suit::ALL {
                for rank in Rank::ALL {
                    self.cards.push_back(Card::new(suit, rank));
                }
            }
        }
    }

    /// Shuffles the deck in place.
    ///
    /// Fisher–Yates: walks from the last index down to 1 and swaps each slot
    /// with a uniformly chosen index in `[0, i]`, drawing every index from the
    /// same generator.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.make_contiguous().shuffle(rng);
    }

    /// Removes and returns the top card.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::Empty`] if the deck has no cards.
    pub fn draw(&mut self) -> Result<Card, DeckError> {
        self.cards.pop_front().ok_or(DeckError::Empty)
    }

    /// Puts a card at the bottom of the deck.
    pub fn add(&mut self, card: Card) {
        self.cards.push_back(card);
    }

    /// Moves every card of `other` to the bottom of this deck, leaving `other`
    /// empty.
    pub fn append(&mut self, other: &mut Self) {
        self.cards.append(&mut other.cards);
    }

    /// Removes every card.
    pub fn clear(&mut self) {
        self.cards.clear();
    }

    /// Returns the number of cards in the deck.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterates over the cards from top to bottom.
    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }
}

/// One card per line under a `Deck:` header.
impl fmt::Display for Deck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Deck:")?;
        for card in &self.cards {
            write!(f, "\n{card}")?;
        }
        Ok(())
    }
}
