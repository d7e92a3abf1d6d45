//! Error types for parsing cards.

use thiserror::Error;

/// Errors that can occur when parsing a rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid rank")]
pub struct ParseRankError;

/// Errors that can occur when parsing a suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid suit")]
pub struct ParseSuitError;

/// Errors that can occur when parsing a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseCardError {
    /// Input is not of the form `"<Rank> of <Suit>s"` or `"Joker"`.
    #[error("expected \"<rank> of <suit>s\" or \"Joker\"")]
    Malformed,
    /// The rank part is not a known rank.
    #[error(transparent)]
    Rank(#[from] ParseRankError),
    /// The suit part is not a standard suit.
    #[error(transparent)]
    Suit(#[from] ParseSuitError),
}
