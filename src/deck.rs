//! An ordered deck of cards with draw, insert and shuffle operations.

use alloc::vec::Vec;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE};
use crate::error::{EmptyDeckError, InsufficientCardsError};
use crate::options::DeckOptions;

/// A deck of cards with a top (next card drawn) and a bottom.
///
/// A fresh or [reset](Deck::reset) deck holds the 52 valid cards in ascending
/// identity order, top first. After that the deck holds whatever was drawn
/// and inserted: duplicates, invalid identities and more than 52 cards are
/// all allowed.
///
/// Each deck owns its random number generator, so decks built with the same
/// seed shuffle identically.
#[derive(Debug, Clone)]
pub struct Deck {
    /// Cards in the deck, bottom first. The top card is the last element.
    cards: Vec<Card>,
    /// Deck options.
    options: DeckOptions,
    /// Random number generator.
    rng: ChaCha8Rng,
}

impl Deck {
    /// Creates a deck in canonical order, seeding its generator from the
    /// operating system.
    ///
    /// ```
    /// use deckrs::Deck;
    ///
    /// let deck = Deck::new();
    /// assert_eq!(deck.remaining_count(), 52);
    /// ```
    #[cfg(feature = "std")]
    #[cfg_attr(docsrs, doc(cfg(feature = "std")))]
    #[must_use]
    pub fn new() -> Self {
        Self::from_rng(DeckOptions::default(), ChaCha8Rng::from_os_rng())
    }

    /// Creates a deck in canonical order with the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::{Card, Deck};
    ///
    /// let mut deck = Deck::with_seed(42);
    /// assert_eq!(deck.draw(), Ok(Card::from_index(0)));
    /// ```
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self::with_options(DeckOptions::default(), seed)
    }

    /// Creates a deck with the given options and seed.
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::{Deck, DeckOptions};
    ///
    /// let a = Deck::with_options(DeckOptions::default().with_shuffled(true), 7);
    /// let b = Deck::with_options(DeckOptions::default().with_shuffled(true), 7);
    /// assert!(a.iter().eq(b.iter()));
    /// ```
    #[must_use]
    pub fn with_options(options: DeckOptions, seed: u64) -> Self {
        Self::from_rng(options, ChaCha8Rng::seed_from_u64(seed))
    }

    fn from_rng(options: DeckOptions, rng: ChaCha8Rng) -> Self {
        let mut deck = Self {
            cards: Vec::with_capacity(DECK_SIZE),
            options,
            rng,
        };
        deck.reset();
        deck
    }

    /// Returns the deck options.
    #[must_use]
    pub const fn options(&self) -> DeckOptions {
        self.options
    }

    /// Restores the 52 valid cards, discarding the current contents.
    ///
    /// The cards come back in ascending identity order, or shuffled when
    /// [`DeckOptions::shuffled`] is set.
    pub fn reset(&mut self) {
        self.cards.clear();
        self.cards.extend(Card::all().rev());
        log::trace!("deck reset to {} cards", self.cards.len());

        if self.options.shuffled {
            self.shuffle();
        }
    }

    /// Removes and returns the top card.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyDeckError`] if the deck has no cards.
    pub fn draw(&mut self) -> Result<Card, EmptyDeckError> {
        self.cards.pop().ok_or_else(|| {
            log::debug!("draw from empty deck");
            EmptyDeckError
        })
    }

    /// Removes and returns the top `n` cards, in the order they are drawn.
    ///
    /// # Errors
    ///
    /// Returns [`InsufficientCardsError`] if fewer than `n` cards remain. No
    /// cards are removed in that case.
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::{Card, Deck};
    ///
    /// let mut deck = Deck::with_seed(0);
    /// let hand = deck.draw_many(2).unwrap();
    /// assert_eq!(hand, [Card::from_index(0), Card::from_index(1)]);
    /// assert_eq!(deck.remaining_count(), 50);
    /// assert!(deck.draw_many(51).is_err());
    /// assert_eq!(deck.remaining_count(), 50);
    /// ```
    pub fn draw_many(&mut self, n: usize) -> Result<Vec<Card>, InsufficientCardsError> {
        let remaining = self.cards.len();
        if n > remaining {
            log::debug!("draw of {n} cards with {remaining} remaining");
            return Err(InsufficientCardsError {
                requested: n,
                remaining,
            });
        }

        let mut drawn = self.cards.split_off(remaining - n);
        drawn.reverse();
        Ok(drawn)
    }

    /// Returns the top card without removing it.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyDeckError`] if the deck has no cards.
    pub fn peek_top(&self) -> Result<Card, EmptyDeckError> {
        self.cards.last().copied().ok_or_else(|| {
            log::debug!("peek at empty deck");
            EmptyDeckError
        })
    }

    /// Puts a card on top of the deck. The card is not validated.
    pub fn insert_top(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Puts a card at the bottom of the deck. The card is not validated.
    pub fn insert_bottom(&mut self, card: Card) {
        self.cards.insert(0, card);
    }

    /// Shuffles the deck in place with the deck's own generator.
    pub fn shuffle(&mut self) {
        self.cards.shuffle(&mut self.rng);
        log::trace!("shuffled {} cards", self.cards.len());
    }

    /// Shuffles the deck in place with a caller-supplied generator.
    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
        log::trace!("shuffled {} cards", self.cards.len());
    }

    /// Returns the number of cards in the deck.
    #[must_use]
    pub fn remaining_count(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck has no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterates over the cards from top to bottom.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = Card> + ExactSizeIterator + '_ {
        self.cards.iter().rev().copied()
    }
}

#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

/// Extending a deck inserts each card at the bottom, in iteration order.
impl Extend<Card> for Deck {
    fn extend<I: IntoIterator<Item = Card>>(&mut self, iter: I) {
        let added: Vec<Card> = iter.into_iter().collect();
        self.cards.splice(0..0, added.into_iter().rev());
    }
}
