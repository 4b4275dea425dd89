//! Error types for card and deck operations.

use thiserror::Error;

/// Returned by [`Deck::draw`](crate::Deck::draw) and
/// [`Deck::peek_top`](crate::Deck::peek_top) when the deck has no cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no cards left in deck")]
pub struct EmptyDeckError;

/// Returned by [`Deck::draw_many`](crate::Deck::draw_many) when more cards are
/// requested than remain. The deck is left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("not enough cards in deck: requested {requested}, remaining {remaining}")]
pub struct InsufficientCardsError {
    /// Number of cards requested.
    pub requested: usize,
    /// Number of cards in the deck at the time of the request.
    pub remaining: usize,
}

/// Returned when converting an identity outside `0..52` into a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid card identity: {0}")]
pub struct InvalidCardError(pub u8);

/// Errors that can occur while parsing a card from text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseCardError {
    /// Input is empty.
    #[error("empty card string")]
    Empty,
    /// Rank label is not recognised.
    #[error("invalid rank")]
    InvalidRank,
    /// Suit symbol or letter is not recognised.
    #[error("invalid suit")]
    InvalidSuit,
}
