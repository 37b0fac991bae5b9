//! Shoe and discard pile tests.

use std::collections::HashMap;

use bjtable::{Card, DECK_SIZE, Deck, DeckError, Rank, Suit};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rstest::rstest;

fn sorted_faces(deck: &Deck) -> Vec<(Suit, Rank)> {
    let mut faces: Vec<_> = deck.cards().map(|c| (c.suit(), c.rank())).collect();
    faces.sort_unstable();
    faces
}

#[rstest]
#[case(1)]
#[case(2)]
#[case(6)]
fn reset_builds_full_sets(#[case] decks: u8) {
    let deck = Deck::new(decks);
    assert_eq!(deck.len(), DECK_SIZE * decks as usize);

    let mut counts: HashMap<(Suit, Rank), usize> = HashMap::new();
    for card in deck.cards() {
        *counts.entry((card.suit(), card.rank())).or_default() += 1;
    }
    assert_eq!(counts.len(), DECK_SIZE);
    assert!(counts.values().all(|&n| n == decks as usize));
}

#[test]
fn reset_is_suit_major_rank_minor() {
    let deck = Deck::new(1);
    let cards: Vec<&Card> = deck.cards().collect();

    assert_eq!(cards[0], &Card::new(Suit::Spades, Rank::Ace));
    assert_eq!(cards[12], &Card::new(Suit::Spades, Rank::King));
    assert_eq!(cards[13], &Card::new(Suit::Hearts, Rank::Ace));
    assert_eq!(cards[51], &Card::new(Suit::Clubs, Rank::King));
}

#[test]
fn reset_replaces_previous_contents() {
    let mut deck = Deck::from_cards(vec![Card::new(Suit::Hearts, Rank::Two); 3]);
    deck.reset(2);
    assert_eq!(deck.len(), 2 * DECK_SIZE);

    deck.reset(0);
    assert!(deck.is_empty());
}

#[test]
fn shuffle_preserves_cards() {
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let mut deck = Deck::new(2);
    let before = sorted_faces(&deck);

    deck.shuffle(&mut rng);

    assert_eq!(deck.len(), 2 * DECK_SIZE);
    assert_eq!(sorted_faces(&deck), before);
    assert_ne!(deck, Deck::new(2));
}

#[test]
fn shuffle_is_close_to_uniform() {
    const TRIALS: usize = 6000;

    let mut rng = ChaCha8Rng::seed_from_u64(2024);
    let mut counts: HashMap<Vec<Rank>, usize> = HashMap::new();

    for _ in 0..TRIALS {
        let mut deck = Deck::from_cards(vec![
            Card::new(Suit::Spades, Rank::Ace),
            Card::new(Suit::Spades, Rank::Two),
            Card::new(Suit::Spades, Rank::Three),
        ]);
        deck.shuffle(&mut rng);
        *counts
            .entry(deck.cards().map(Card::rank).collect())
            .or_default() += 1;
    }

    // 3! orderings, each expected TRIALS / 6 = 1000 times.
    assert_eq!(counts.len(), 6);
    for (order, count) in counts {
        assert!(
            (850..=1150).contains(&count),
            "ordering {order:?} seen {count} times"
        );
    }
}

#[test]
fn draw_takes_from_the_front() {
    let mut deck = Deck::new(1);

    let card = deck.draw().unwrap();
    assert_eq!(card, Card::new(Suit::Spades, Rank::Ace));
    assert_eq!(deck.len(), DECK_SIZE - 1);
    assert_eq!(
        deck.cards().next(),
        Some(&Card::new(Suit::Spades, Rank::Two))
    );
}

#[test]
fn draw_from_empty_deck_fails() {
    let mut deck = Deck::empty();
    assert_eq!(deck.draw().unwrap_err(), DeckError::Empty);
    assert_eq!(deck.len(), 0);
}

#[test]
fn add_append_and_clear() {
    let mut deck = Deck::empty();
    deck.add(Card::new(Suit::Hearts, Rank::Queen));
    assert_eq!(deck.len(), 1);

    let mut other = Deck::new(1);
    deck.append(&mut other);
    assert!(other.is_empty());
    assert_eq!(deck.len(), DECK_SIZE + 1);
    assert_eq!(
        deck.cards().next(),
        Some(&Card::new(Suit::Hearts, Rank::Queen))
    );

    deck.clear();
    assert!(deck.is_empty());
}

#[test]
fn renders_one_card_per_line() {
    assert_eq!(Deck::empty().to_string(), "Deck:");

    let deck = Deck::from_cards(vec![
        Card::new(Suit::Spades, Rank::Ace),
        Card::new(Suit::Hearts, Rank::King),
    ]);
    assert_eq!(deck.to_string(), "Deck:\nA ♠\nK ♥");
}
