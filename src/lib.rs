//! A standard 52-card playing deck with optional `no_std` support.
//!
//! The crate provides validated [`Card`] values and a [`Deck`] that is built
//! in canonical order, shuffled with an injectable random source, and drained
//! card by card from the front.
//!
//! # Example
//!
//! ```
//! use deckrs::{Deck, DeckError};
//!
//! let mut deck = Deck::new();
//! deck.shuffle_seeded(42);
//! let first = deck.remove_top().unwrap();
//! assert_eq!(deck.len(), 51);
//! let _ = first;
//!
//! let mut empty = Deck::new();
//! while empty.remove_top().is_ok() {}
//! assert_eq!(empty.remove_top(), Err(DeckError::EmptyDeck));
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
pub use card::{Card, DECK_SIZE, MAX_RANK, MIN_RANK, Suit};
pub use deck::Deck;
pub use error::{CardError, DeckError};
pub use options::DeckOptions;
