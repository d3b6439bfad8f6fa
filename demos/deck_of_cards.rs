//! Deck of cards walkthrough: build, shuffle, and drain a deck.
//!
//! Pass a seed as the first argument for a repeatable shuffle. Set
//! `RUST_LOG=deckrs=debug` to see each removal logged.

use std::time::{SystemTime, UNIX_EPOCH};

use deckrs::{Deck, DeckError};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse::<u64>().ok())
        .unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .unwrap_or_default()
                .as_secs()
        });
    tracing::info!(seed, "starting");

    println!("Deck of Cards");
    let mut deck = Deck::new();

    println!("The Sorted Deck of Cards:");
    println!("{deck}");

    println!("The Shuffled Deck of Cards:");
    deck.shuffle_seeded(seed);
    println!("{deck}");

    println!("Removing 3 cards...");
    for _ in 0..3 {
        match deck.remove_top() {
            Ok(card) => println!("{card}"),
            Err(err) => println!("{err}"),
        }
    }

    println!("Removing 49 more cards...");
    for _ in 0..49 {
        if let Err(err) = deck.remove_top() {
            println!("{err}");
            break;
        }
    }
    println!();

    println!("Removing 53rd card...");
    match deck.remove_top() {
        Err(err @ DeckError::EmptyDeck) => println!("{err}"),
        Ok(card) => println!("unexpected card left in deck: {card}"),
    }
}
