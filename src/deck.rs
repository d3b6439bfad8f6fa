//! The deck and its shuffle and removal operations.

use alloc::collections::VecDeque;
use core::fmt;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, trace, warn};

use crate::card::{Card, DECK_SIZE, MAX_RANK, MIN_RANK, Suit};
use crate::error::DeckError;
use crate::options::DeckOptions;

/// An ordered deck of playing cards.
///
/// Cards are removed from the front of the sequence, so a fresh deck hands
/// out the Ace of Hearts first. The deck never grows after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: VecDeque<Card>,
}

impl Deck {
    /// Creates a deck holding all 52 cards in canonical order.
    ///
    /// Suits follow [`Suit::ALL`]; within a suit ranks ascend from Ace to King.
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::{Deck, DECK_SIZE};
    ///
    /// let deck = Deck::new();
    /// assert_eq!(deck.len(), DECK_SIZE);
    /// assert_eq!(deck.iter().next().unwrap().to_string(), "Ace of HEARTS");
    /// ```
    #[must_use]
    pub fn new() -> Self {
        let mut cards = VecDeque::with_capacity(DECK_SIZE);

        for suit in Suit::ALL {
            for rank in MIN_RANK..=MAX_RANK {
                cards.push_back(Card::from_valid(rank, suit));
            }
        }

        trace!(cards = cards.len(), "built deck");
        Self { cards }
    }

    /// Creates a deck according to `options`.
    ///
    /// When `options.shuffle` is set the canonical deck is shuffled with a
    /// [`ChaCha8Rng`] seeded from `options.seed`.
    #[must_use]
    pub fn with_options(options: &DeckOptions) -> Self {
        let mut deck = Self::new();
        if options.shuffle {
            deck.shuffle_seeded(options.seed);
        }
        deck
    }

    /// Shuffles the deck in place using `rng`.
    ///
    /// Runs the inside-out Fisher-Yates pass: for each index `i` from the
    /// front, a position `j` in `0..=i` is drawn and the cards at `i` and
    /// `j` are swapped.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for i in 0..self.cards.len() {
            let j = rng.random_range(0..=i);
            self.cards.swap(i, j);
        }
        debug!(cards = self.cards.len(), "shuffled deck");
    }

    /// Shuffles the deck with a [`ChaCha8Rng`] seeded from `seed`.
    ///
    /// The same seed always yields the same order for the same starting deck.
    pub fn shuffle_seeded(&mut self, seed: u64) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        self.shuffle(&mut rng);
    }

    /// Removes and returns the card at the front of the deck.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::EmptyDeck`] if no cards remain. The deck is left
    /// unchanged.
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::{Deck, DeckError};
    ///
    /// let mut deck = Deck::new();
    /// for _ in 0..52 {
    ///     deck.remove_top().unwrap();
    /// }
    /// assert_eq!(deck.remove_top(), Err(DeckError::EmptyDeck));
    /// ```
    pub fn remove_top(&mut self) -> Result<Card, DeckError> {
        let Some(card) = self.cards.pop_front() else {
            warn!("removal attempted on empty deck");
            return Err(DeckError::EmptyDeck);
        };
        debug!(%card, remaining = self.cards.len(), "removed card");
        Ok(card)
    }

    /// Returns the number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns an iterator over the remaining cards, front to back.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// Returns the display names of the remaining cards, one per line.
    #[must_use]
    pub fn display_text(&self) -> alloc::string::String {
        alloc::format!("{self}")
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Deck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for card in &self.cards {
            writeln!(f, "{card}")?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a Deck {
    type Item = &'a Card;
    type IntoIter = alloc::collections::vec_deque::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}
