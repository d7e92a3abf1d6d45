//! Composable playing-card deck construction with optional `no_std` support.
//!
//! A deck starts as the 52 standard cards in suit-major, rank-minor order and
//! is then passed through any number of options, applied in the order given.
//! Options add jokers or extra decks, filter cards out, sort, or shuffle.
//!
//! # Example
//!
//! ```
//! use deckrs::{Card, DeckBuilder, Rank, Suit};
//!
//! let cards = DeckBuilder::new()
//!     .with_jokers(2)
//!     .with_seeded_shuffle(42)
//!     .with_default_sort()
//!     .build();
//!
//! assert_eq!(cards.len(), 54);
//! assert_eq!(cards[0], Card::new(Suit::Spade, Rank::Ace));
//! assert_eq!(cards[53].to_string(), "Joker");
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
pub use card::{Card, DECK_SIZE, Rank, SUIT_SIZE, Suit};
pub use deck::DeckBuilder;
pub use error::{ParseCardError, ParseRankError, ParseSuitError};
pub use options::{DeckOption, Transform};
