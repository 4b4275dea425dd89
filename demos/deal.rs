//! Deals a few hands from a shuffled deck.

use std::time::{SystemTime, UNIX_EPOCH};

use deckrs::{Card, Deck, Rank, Suit};

fn format_cards(cards: &[Card]) -> String {
    cards
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

fn main() {
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut deck = Deck::with_seed(seed);
    deck.shuffle();

    println!("Dealing with seed {seed}");
    for player in 1..=4 {
        match deck.draw_many(5) {
            Ok(hand) => println!("Player {player}: {}", format_cards(&hand)),
            Err(err) => {
                println!("Cannot deal to player {player}: {err}");
                break;
            }
        }
    }
    println!("{} cards left", deck.remaining_count());

    let ace_of_spades = Card::new(Suit::Spades, Rank::Ace);
    deck.insert_top(ace_of_spades);
    if let Ok(top) = deck.peek_top() {
        println!("Top card after insert: {top}");
    }

    while deck.draw().is_ok() {}
    if let Err(err) = deck.draw() {
        println!("Drawing from an exhausted deck: {err}");
    }

    deck.reset();
    if let Ok(top) = deck.peek_top() {
        println!("After reset: {} cards, top card {top}", deck.remaining_count());
    }
}
