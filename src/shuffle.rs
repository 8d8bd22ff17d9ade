//! Deck shuffling.

use alloc::vec::Vec;
use log::debug;
use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::Card;
use crate::deck::{Variant, generate_deck};

/// Returns a uniformly shuffled copy of `cards`.
///
/// The input is left untouched so the same source deck can be shuffled
/// repeatedly. Pass a seeded generator for reproducible deals.
///
/// # Example
///
/// ```
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
/// use trickdeck::{Bridge, generate_deck, shuffle};
///
/// let deck = generate_deck::<Bridge>();
/// let mut rng = ChaCha8Rng::seed_from_u64(7);
/// let shuffled = shuffle(&deck, &mut rng);
/// assert_eq!(shuffled.len(), deck.len());
/// ```
pub fn shuffle<T: Clone, G: Rng + ?Sized>(cards: &[T], rng: &mut G) -> Vec<T> {
    let mut shuffled = cards.to_vec();
    shuffled.shuffle(rng);
    debug!("shuffled {} cards", shuffled.len());
    shuffled
}

/// Generates a fresh deck for the variant and shuffles it.
pub fn shuffled_deck<V: Variant, G: Rng + ?Sized>(rng: &mut G) -> Vec<Card<V::Suit, V::Rank>> {
    let mut deck = generate_deck::<V>();
    deck.shuffle(rng);
    debug!("shuffled fresh {} deck", V::NAME);
    deck
}
