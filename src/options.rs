//! Deck configuration options.

/// Configuration options for a [`Deck`](crate::Deck).
///
/// Use the builder pattern to customize options:
///
/// ```
/// use deckrs::DeckOptions;
///
/// let options = DeckOptions::default().with_shuffled(true);
/// assert!(options.shuffled);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DeckOptions {
    /// Whether the deck is shuffled on construction and after every reset.
    ///
    /// When `false` the deck starts, and resets to, ascending identity order.
    pub shuffled: bool,
}

impl DeckOptions {
    /// Sets whether the deck is shuffled on construction and reset.
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::DeckOptions;
    ///
    /// let options = DeckOptions::default().with_shuffled(true);
    /// assert_eq!(options.shuffled, true);
    /// ```
    #[must_use]
    pub const fn with_shuffled(mut self, shuffled: bool) -> Self {
        self.shuffled = shuffled;
        self
    }
}
