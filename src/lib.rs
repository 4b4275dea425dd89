//! A compact playing-card model and deck container with optional `no_std`
//! support.
//!
//! A [`Card`] packs its suit and rank into one byte (`suit * 13 + rank`).
//! A [`Deck`] is an ordered stack of cards that can be drawn from, peeked at,
//! refilled from either end, shuffled, and reset to the canonical 52 cards.
//!
//! # Example
//!
//! ```
//! use deckrs::{Card, Deck, Rank, Suit};
//!
//! let mut deck = Deck::with_seed(42);
//! deck.shuffle();
//! let hand = deck.draw_many(5).unwrap();
//! assert_eq!(hand.len(), 5);
//! assert_eq!(deck.remaining_count(), 47);
//!
//! let ace = Card::new(Suit::Spades, Rank::Ace);
//! deck.insert_top(ace);
//! assert_eq!(deck.peek_top(), Ok(ace));
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod options;

// Re-export main types
pub use card::{Card, DECK_SIZE, RANKS_PER_SUIT, Rank, Suit};
pub use deck::Deck;
pub use error::{EmptyDeckError, InsufficientCardsError, InvalidCardError, ParseCardError};
pub use options::DeckOptions;
