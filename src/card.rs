//! Card types and rank utilities.

use core::fmt;

use crate::error::CardError;

/// Card suit.
///
/// The declaration order is the order suits appear in a freshly built deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Suit {
    /// Hearts.
    Hearts,
    /// Spades.
    Spades,
    /// Clubs.
    Clubs,
    /// Diamonds.
    Diamonds,
}

impl Suit {
    /// All suits in deck construction order.
    pub const ALL: [Self; 4] = [Self::Hearts, Self::Spades, Self::Clubs, Self::Diamonds];

    /// Returns the upper-case name of the suit, e.g. `"HEARTS"`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Hearts => "HEARTS",
            Self::Spades => "SPADES",
            Self::Clubs => "CLUBS",
            Self::Diamonds => "DIAMONDS",
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Lowest valid rank (Ace).
pub const MIN_RANK: u8 = 1;

/// Highest valid rank (King).
pub const MAX_RANK: u8 = 13;

/// Number of cards per deck.
pub const DECK_SIZE: usize = Suit::ALL.len() * MAX_RANK as usize;

// Index 0 is unused so the table can be indexed by rank directly.
const RANK_NAMES: [&str; MAX_RANK as usize + 1] = [
    "", "Ace", "2", "3", "4", "5", "6", "7", "8", "9", "10", "Jack", "Queen", "King",
];

/// A playing card.
///
/// Rank and suit are fixed at construction. The only way to obtain a card
/// from outside the crate is [`Card::new`], which rejects ranks outside
/// `MIN_RANK..=MAX_RANK`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    suit: Suit,
    rank: u8,
}

impl Card {
    /// Creates a new card.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::InvalidRank`] if `rank` is not in `1..=13`.
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::{Card, CardError, Suit};
    ///
    /// let card = Card::new(12, Suit::Spades).unwrap();
    /// assert_eq!(card.to_string(), "Queen of SPADES");
    /// assert_eq!(Card::new(14, Suit::Spades), Err(CardError::InvalidRank(14)));
    /// ```
    pub const fn new(rank: u8, suit: Suit) -> Result<Self, CardError> {
        if rank < MIN_RANK || rank > MAX_RANK {
            return Err(CardError::InvalidRank(rank));
        }
        Ok(Self { suit, rank })
    }

    /// Builds a card from a rank already known to be in range.
    pub(crate) const fn from_valid(rank: u8, suit: Suit) -> Self {
        debug_assert!(rank >= MIN_RANK && rank <= MAX_RANK);
        Self { suit, rank }
    }

    /// Returns the rank (1 = Ace, 11 = Jack, 12 = Queen, 13 = King).
    #[must_use]
    pub const fn rank(&self) -> u8 {
        self.rank
    }

    /// Returns the suit.
    #[must_use]
    pub const fn suit(&self) -> Suit {
        self.suit
    }

    /// Returns the name of the rank, e.g. `"Ace"`, `"7"` or `"King"`.
    #[must_use]
    pub const fn rank_name(&self) -> &'static str {
        RANK_NAMES[self.rank as usize]
    }

    /// Returns the display name, e.g. `"Ace of HEARTS"`.
    #[must_use]
    pub fn display_name(&self) -> alloc::string::String {
        alloc::format!("{self}")
    }

    /// Returns the lowest valid rank.
    #[must_use]
    pub const fn min_rank() -> u8 {
        MIN_RANK
    }

    /// Returns the highest valid rank.
    #[must_use]
    pub const fn max_rank() -> u8 {
        MAX_RANK
    }

    /// Returns all suits in deck construction order.
    #[must_use]
    pub const fn suits() -> [Suit; 4] {
        Suit::ALL
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {}", self.rank_name(), self.suit)
    }
}
