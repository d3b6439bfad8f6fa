//! Deck construction options.

/// Options controlling how a [`Deck`](crate::Deck) is built.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use deckrs::DeckOptions;
///
/// let options = DeckOptions::default().with_seed(7).with_shuffle(true);
/// assert_eq!(options.seed, 7);
/// assert!(options.shuffle);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DeckOptions {
    /// Seed for the shuffle random source.
    pub seed: u64,
    /// Whether the deck is shuffled after it is built.
    /// When false the deck stays in canonical order and `seed` is unused.
    pub shuffle: bool,
}

impl DeckOptions {
    /// Sets the shuffle seed.
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Sets whether the deck is shuffled on construction.
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::{Deck, DeckOptions};
    ///
    /// let deck = Deck::with_options(&DeckOptions::default().with_shuffle(false));
    /// assert_eq!(deck, Deck::new());
    /// ```
    #[must_use]
    pub const fn with_shuffle(mut self, shuffle: bool) -> Self {
        self.shuffle = shuffle;
        self
    }
}
