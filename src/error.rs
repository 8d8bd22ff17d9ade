//! Error types for dealing and ranking.

use thiserror::Error;

/// Errors that can occur while dealing a deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// The distribution does not account for exactly the cards in the deck.
    #[error("distribution deals {expected} cards but the deck holds {actual}")]
    SizeMismatch {
        /// Number of cards the distribution hands out.
        expected: usize,
        /// Number of cards in the deck.
        actual: usize,
    },
    /// The distribution has no seats or refers to a seat it does not list.
    #[error("invalid distribution schema")]
    InvalidSchema,
}

/// Errors that can occur when ranking a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PowerError {
    /// The suit and rank combination is not part of the variant's ranking.
    #[error("card is not part of the variant's ranking")]
    UnknownCard,
}
