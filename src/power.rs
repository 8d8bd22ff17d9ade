//! Trick-power ranking shared by every variant.

use core::cmp::Reverse;

use crate::card::{Card, SuitLists};
use crate::deck::Variant;
use crate::error::PowerError;

/// A variant with a total order over its cards for winning tricks.
///
/// Higher values beat lower values when cards of the same suit are compared.
pub trait TrickPower: Variant {
    /// Trick power of `card`.
    ///
    /// # Errors
    ///
    /// Returns [`PowerError::UnknownCard`] if the suit and rank combination is
    /// not part of the variant's ranking.
    fn trick_power(card: &Card<Self::Suit, Self::Rank>) -> Result<u32, PowerError>;
}

/// Sorts `cards` by descending power. Cards of equal power keep their order.
pub fn sort_by_power<S, R, F>(cards: &mut [Card<S, R>], power: F)
where
    F: Fn(&Card<S, R>) -> u32,
{
    cards.sort_by_key(|card| Reverse(power(card)));
}

/// Groups `hand` by suit with every suit sorted strongest first.
///
/// # Errors
///
/// Fails with [`PowerError::UnknownCard`] if any card cannot be ranked.
pub fn sorted_by_power<V: TrickPower>(
    hand: &[Card<V::Suit, V::Rank>],
) -> Result<SuitLists<V::Suit, V::Rank>, PowerError> {
    for card in hand {
        V::trick_power(card)?;
    }

    let mut lists = SuitLists::from_cards(hand);
    lists.sort_by_power(|card| V::trick_power(card).unwrap_or_default());
    Ok(lists)
}
