//! Error types for card and deck operations.

use thiserror::Error;

/// Errors that can occur when constructing a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CardError {
    /// Rank is outside `1..=13`.
    #[error("invalid rank {0}, must be between 1 and 13")]
    InvalidRank(u8),
}

/// Errors that can occur when removing cards from a deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// The deck has no cards left.
    #[error("cannot remove more cards")]
    EmptyDeck,
}
