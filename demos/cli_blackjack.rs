//! Single-seat blackjack table in the terminal.
//!
//! Run with `RUST_LOG=debug` to follow the shoe.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use bjtable::{Card, Dealer, Game, GameOptions, Hand, HandOutcome, Player, Settlement, Suit};

const SEAT: usize = 0;

fn main() {
    env_logger::init();
    println!("Blackjack CLI example (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let players = vec![Player::new("you", "You", 500)];
    let mut game = Game::new(GameOptions::default().with_decks(2), players, seed);
    game.shuffle_deck();

    loop {
        let money = game.player(SEAT).map_or(0, Player::money);
        if money == 0 {
            println!("You are out of money. Game over.");
            break;
        }

        let Some(bet) = prompt_usize(&format!("Bet amount (even, 2-{money}, 0 to quit): ")) else {
            break;
        };
        if bet == 0 {
            println!("Goodbye.");
            break;
        }
        if let Err(err) = game.bet(SEAT, 0, bet) {
            println!("Bet error: {err}");
            continue;
        }

        if let Err(err) = game.deal() {
            println!("Deal error: {err}");
            game.discard_all();
            game.refill();
            game.shuffle_deck();
            continue;
        }

        if !play_seat(&mut game) {
            return;
        }

        match game.play_dealer() {
            Ok(outcome) => println!("Dealer finishes: {outcome:?}"),
            Err(err) => println!("Dealer error: {err}"),
        }

        let result = game.payout();
        print_table(&game, None);
        for player in &result.players {
            for hand in &player.hands {
                println!(
                    "Hand {}: {} ({} points) pays {}",
                    hand.hand_index,
                    describe(hand.settlement),
                    hand.points,
                    hand.payout
                );
            }
            println!("Net {}", player.net);
        }

        game.discard_all();
        if game.needs_refill() {
            game.refill();
            game.shuffle_deck();
            println!("Shoe reshuffled.");
        }
    }
}

/// Runs the player's turn over every hand. Returns `false` if the user quit.
fn play_seat(game: &mut Game) -> bool {
    let mut hand_index = 0;

    while let Some(hand) = game.player(SEAT).and_then(|p| p.hand(hand_index)) {
        if hand.outcome() != HandOutcome::None {
            hand_index += 1;
            continue;
        }

        print_table(game, Some(hand_index));
        let action = prompt_line("Action ([h]it [s]tand [d]ouble s[p]lit): ");

        let result = match action.as_str() {
            "h" | "hit" => game.hit_player(SEAT, hand_index).map(|_| ()),
            "s" | "stand" => game.stand_player(SEAT, hand_index),
            "d" | "double" => game.double_down(SEAT, hand_index).map(|_| ()),
            "p" | "split" => game.split(SEAT),
            "q" | "quit" => return false,
            _ => {
                println!("Unknown action.");
                continue;
            }
        };

        if let Err(err) = result {
            println!("Action error: {err}");
        }
    }

    true
}

fn print_table(game: &Game, current: Option<usize>) {
    println!("\nShoe: {} cards remaining", game.deck().len());
    println!(
        "Dealer: {} (value {})",
        format_dealer(game.dealer()),
        game.dealer().hand().points()
    );

    let Some(player) = game.player(SEAT) else {
        return;
    };
    for (index, hand) in player.hands().iter().enumerate() {
        let marker = if current == Some(index) { "*" } else { " " };
        println!(
            "{marker} Hand {index}: {} | value {} | bet {} | {:?}",
            format_hand(hand),
            hand.points(),
            hand.bet(),
            hand.outcome()
        );
    }
    println!("Money: {}\n", player.money());
}

const fn describe(settlement: Settlement) -> &'static str {
    match settlement {
        Settlement::Win => "win",
        Settlement::Lose => "lose",
        Settlement::Push => "push",
        Settlement::Blackjack => "blackjack",
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_lowercase()
}

fn prompt_usize(prompt: &str) -> Option<usize> {
    loop {
        let input = prompt_line(prompt);
        if input == "q" || input == "quit" {
            return None;
        }
        match input.parse::<usize>() {
            Ok(value) => return Some(value),
            Err(_) => println!("Please enter a number."),
        }
    }
}

fn format_dealer(dealer: &Dealer) -> String {
    if dealer.hand().is_empty() {
        return "(no cards)".to_string();
    }
    dealer
        .hand()
        .cards()
        .iter()
        .map(|card| {
            if card.is_hidden() {
                "??".to_string()
            } else {
                format_card(card)
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn format_hand(hand: &Hand) -> String {
    if hand.is_empty() {
        return "(empty)".to_string();
    }
    hand.cards()
        .iter()
        .map(format_card)
        .collect::<Vec<_>>()
        .join(" ")
}

fn format_card(card: &Card) -> String {
    let color_code = match card.suit() {
        Suit::Hearts | Suit::Diamonds => "31",
        Suit::Clubs | Suit::Spades => "34",
    };
    format!("\u{1b}[{color_code}m{card}\u{1b}[0m")
}
