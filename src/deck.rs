//! Deck generation.

use alloc::vec::Vec;
use log::trace;

use crate::card::{Alphabet, Card};

/// A card game variant with its own suit and rank alphabets.
pub trait Variant {
    /// Suit alphabet.
    type Suit: Alphabet;
    /// Rank alphabet.
    type Rank: Alphabet;

    /// Human readable name, used in log output.
    const NAME: &'static str;

    /// Number of cards in one full deck of this variant.
    const DECK_SIZE: usize;

    /// Enumerates the full deck in its deterministic order.
    ///
    /// Every call hands out cards with fresh ids.
    fn deck() -> Vec<Card<Self::Suit, Self::Rank>>;
}

/// Generates the unshuffled deck of a variant.
///
/// # Example
///
/// ```
/// use trickdeck::{Bridge, generate_deck};
///
/// let deck = generate_deck::<Bridge>();
/// assert_eq!(deck.len(), 52);
/// ```
#[must_use]
pub fn generate_deck<V: Variant>() -> Vec<Card<V::Suit, V::Rank>> {
    let deck = V::deck();
    trace!("generated {} deck of {} cards", V::NAME, deck.len());
    deck
}

/// Enumerates `copies` decks, copy-major then suit-major then rank-minor,
/// following the alphabets' `ALL` order.
#[must_use]
pub fn suit_major_deck<S: Alphabet, R: Alphabet>(copies: usize) -> Vec<Card<S, R>> {
    let mut cards = Vec::with_capacity(copies * S::ALL.len() * R::ALL.len());

    for _ in 0..copies {
        for &suit in S::ALL {
            for &rank in R::ALL {
                cards.push(Card::new(suit, rank));
            }
        }
    }

    cards
}
