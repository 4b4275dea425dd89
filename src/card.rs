//! Card types and deck utilities.
//!
//! A [`Card`] is a single byte holding its identity in `0..52`. The identity
//! packs the suit and rank as `suit * 13 + rank`, so the suit and rank are
//! always derived, never stored.

use core::fmt;
use core::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{InvalidCardError, ParseCardError};

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;

/// Number of ranks in each suit.
pub const RANKS_PER_SUIT: u8 = 13;

/// Card suit.
///
/// The discriminant is the suit index used in a card identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(u8)]
pub enum Suit {
    /// Spades.
    Spades = 0,
    /// Hearts.
    Hearts,
    /// Diamonds.
    Diamonds,
    /// Clubs.
    Clubs,
}

impl Suit {
    /// All suits in index order.
    pub const ALL: [Self; 4] = [Self::Spades, Self::Hearts, Self::Diamonds, Self::Clubs];

    /// Returns the suit for a suit index, or `None` if the index is out of range.
    #[must_use]
    pub const fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(Self::Spades),
            1 => Some(Self::Hearts),
            2 => Some(Self::Diamonds),
            3 => Some(Self::Clubs),
            _ => None,
        }
    }

    /// Returns the suit index (`0..4`).
    #[must_use]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Returns the suit symbol.
    ///
    /// ```
    /// use deckrs::Suit;
    ///
    /// assert_eq!(Suit::Hearts.symbol(), '♥');
    /// ```
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Spades => '♠',
            Self::Hearts => '♥',
            Self::Diamonds => '♦',
            Self::Clubs => '♣',
        }
    }

    const fn from_char(c: char) -> Option<Self> {
        match c {
            '♠' | 's' | 'S' => Some(Self::Spades),
            '♥' | 'h' | 'H' => Some(Self::Hearts),
            '♦' | 'd' | 'D' => Some(Self::Diamonds),
            '♣' | 'c' | 'C' => Some(Self::Clubs),
            _ => None,
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Card rank.
///
/// Ranks run from [`Rank::Two`] (index 0) up to [`Rank::Ace`] (index 12), so
/// the ace carries the highest rank index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(u8)]
pub enum Rank {
    /// Two.
    Two = 0,
    /// Three.
    Three,
    /// Four.
    Four,
    /// Five.
    Five,
    /// Six.
    Six,
    /// Seven.
    Seven,
    /// Eight.
    Eight,
    /// Nine.
    Nine,
    /// Ten.
    Ten,
    /// Jack.
    Jack,
    /// Queen.
    Queen,
    /// King.
    King,
    /// Ace.
    Ace,
}

impl Rank {
    /// All ranks in index order.
    pub const ALL: [Self; 13] = [
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
        Self::Ace,
    ];

    /// Returns the rank for a rank index, or `None` if the index is out of range.
    #[must_use]
    pub const fn from_index(index: u8) -> Option<Self> {
        if index < RANKS_PER_SUIT {
            Some(Self::ALL[index as usize])
        } else {
            None
        }
    }

    /// Returns the rank index (`0..13`).
    #[must_use]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Returns the short label used when rendering a card.
    ///
    /// ```
    /// use deckrs::Rank;
    ///
    /// assert_eq!(Rank::Ten.label(), "10");
    /// assert_eq!(Rank::Ace.label(), "A");
    /// ```
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Two => "2",
            Self::Three => "3",
            Self::Four => "4",
            Self::Five => "5",
            Self::Six => "6",
            Self::Seven => "7",
            Self::Eight => "8",
            Self::Nine => "9",
            Self::Ten => "10",
            Self::Jack => "J",
            Self::Queen => "Q",
            Self::King => "K",
            Self::Ace => "A",
        }
    }

    fn from_label(label: &str) -> Option<Self> {
        let rank = match label {
            "2" => Self::Two,
            "3" => Self::Three,
            "4" => Self::Four,
            "5" => Self::Five,
            "6" => Self::Six,
            "7" => Self::Seven,
            "8" => Self::Eight,
            "9" => Self::Nine,
            "10" | "T" | "t" => Self::Ten,
            "J" | "j" => Self::Jack,
            "Q" | "q" => Self::Queen,
            "K" | "k" => Self::King,
            "A" | "a" => Self::Ace,
            _ => return None,
        };
        Some(rank)
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A playing card, stored as its identity.
///
/// Any byte can be wrapped with [`Card::from_index`]; only identities in
/// `0..52` are [valid](Card::is_valid). Decks accept invalid cards as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
pub struct Card(u8);

impl Card {
    /// Creates a card from a suit and rank.
    ///
    /// ```
    /// use deckrs::{Card, Rank, Suit};
    ///
    /// let card = Card::new(Suit::Spades, Rank::Ace);
    /// assert_eq!(card.index(), 12);
    /// assert_eq!(card.to_string(), "A♠");
    /// ```
    #[must_use]
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self(suit.index() * RANKS_PER_SUIT + rank.index())
    }

    /// Wraps a raw identity without checking it.
    ///
    /// Use [`Card::try_from`] to reject identities outside `0..52`.
    #[must_use]
    pub const fn from_index(index: u8) -> Self {
        Self(index)
    }

    /// Returns the card identity.
    #[must_use]
    pub const fn index(self) -> u8 {
        self.0
    }

    /// Returns the raw suit index, `identity / 13`.
    ///
    /// This is only a valid [`Suit`] index when the card is valid.
    #[must_use]
    pub const fn suit_index(self) -> u8 {
        self.0 / RANKS_PER_SUIT
    }

    /// Returns the suit of the card, or `None` for identities of 52 and above.
    #[must_use]
    pub const fn suit(self) -> Option<Suit> {
        Suit::from_index(self.suit_index())
    }

    /// Returns the rank of the card.
    #[must_use]
    pub const fn rank(self) -> Rank {
        Rank::ALL[(self.0 % RANKS_PER_SUIT) as usize]
    }

    /// Returns whether the identity is in `0..52`.
    #[must_use]
    pub const fn is_valid(self) -> bool {
        (self.0 as usize) < DECK_SIZE
    }

    /// Iterates over the 52 valid cards in ascending identity order.
    ///
    /// ```
    /// use deckrs::{Card, DECK_SIZE};
    ///
    /// assert_eq!(Card::all().count(), DECK_SIZE);
    /// assert!(Card::all().all(Card::is_valid));
    /// ```
    pub fn all() -> impl DoubleEndedIterator<Item = Self> + ExactSizeIterator {
        (0..DECK_SIZE as u8).map(Self)
    }
}

impl From<Card> for u8 {
    fn from(card: Card) -> Self {
        card.0
    }
}

impl TryFrom<u8> for Card {
    type Error = InvalidCardError;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        let card = Self(index);
        if card.is_valid() {
            Ok(card)
        } else {
            Err(InvalidCardError(index))
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.suit() {
            Some(suit) => write!(f, "{}{}", self.rank(), suit),
            None => write!(f, "#{}", self.0),
        }
    }
}

impl FromStr for Card {
    type Err = ParseCardError;

    /// Parses `"A♠"`, `"10♣"` or the ASCII forms `"As"`, `"Tc"`, `"10c"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let mut chars = s.chars();
        let suit_char = chars.next_back().ok_or(ParseCardError::Empty)?;
        let rank_label = chars.as_str();
        if rank_label.is_empty() {
            return Err(ParseCardError::InvalidRank);
        }

        let suit = Suit::from_char(suit_char).ok_or(ParseCardError::InvalidSuit)?;
        let rank = Rank::from_label(rank_label).ok_or(ParseCardError::InvalidRank)?;
        Ok(Self::new(suit, rank))
    }
}
