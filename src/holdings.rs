//! Per-seat named card stacks.

use core::hash::Hash;

use alloc::vec::Vec;
#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashMap;
#[cfg(feature = "std")]
use std::collections::HashMap;

use crate::card::Card;

/// Common holding names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Pile {
    /// Playable cards.
    Hand,
    /// Tricks won so far.
    Tricks,
    /// Undealt cards (talon).
    Stock,
    /// Turned-up trump indicator.
    Trump,
    /// Cards laid aside during the deal, not part of any hand.
    Skat,
}

/// Cards held by every seat, keyed by seat and then by holding name.
///
/// Lookups of a seat or holding that does not exist yield an empty slice.
#[derive(Debug, Clone)]
pub struct Holdings<P, Q, S, R> {
    seats: HashMap<P, HashMap<Q, Vec<Card<S, R>>>>,
}

impl<P, Q, S, R> Holdings<P, Q, S, R>
where
    P: Copy + Eq + Hash,
    Q: Copy + Eq + Hash,
    S: Copy,
    R: Copy,
{
    /// Creates empty holdings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            seats: HashMap::new(),
        }
    }

    /// Makes sure `seat` has a (possibly empty) `holding`.
    pub fn ensure(&mut self, seat: P, holding: Q) {
        self.seats
            .entry(seat)
            .or_default()
            .entry(holding)
            .or_default();
    }

    /// Appends a card to a seat's holding, creating it if needed.
    pub fn append(&mut self, seat: P, holding: Q, card: Card<S, R>) {
        self.seats
            .entry(seat)
            .or_default()
            .entry(holding)
            .or_default()
            .push(card);
    }

    /// Returns the cards of a seat's holding.
    #[must_use]
    pub fn get(&self, seat: P, holding: Q) -> &[Card<S, R>] {
        self.seats
            .get(&seat)
            .and_then(|holdings| holdings.get(&holding))
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Removes and returns a seat's holding, leaving it empty.
    pub fn take(&mut self, seat: P, holding: Q) -> Vec<Card<S, R>> {
        self.seats
            .get_mut(&seat)
            .and_then(|holdings| holdings.get_mut(&holding))
            .map(core::mem::take)
            .unwrap_or_default()
    }

    /// Iterates the seats that have at least one holding.
    pub fn seats(&self) -> impl Iterator<Item = P> + '_ {
        self.seats.keys().copied()
    }

    /// Iterates the holdings of a seat.
    pub fn holdings_of(&self, seat: P) -> impl Iterator<Item = (Q, &[Card<S, R>])> {
        self.seats
            .get(&seat)
            .into_iter()
            .flatten()
            .map(|(holding, cards)| (*holding, cards.as_slice()))
    }

    /// Iterates every card across all seats and holdings.
    pub fn cards(&self) -> impl Iterator<Item = &Card<S, R>> {
        self.seats.values().flat_map(HashMap::values).flatten()
    }

    /// Total number of cards across all seats and holdings.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.seats
            .values()
            .flat_map(HashMap::values)
            .map(Vec::len)
            .sum()
    }
}

impl<P, Q, S, R> Default for Holdings<P, Q, S, R>
where
    P: Copy + Eq + Hash,
    Q: Copy + Eq + Hash,
    S: Copy,
    R: Copy,
{
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_levels_read_as_empty() {
        let holdings: Holdings<u8, Pile, char, u8> = Holdings::new();
        assert!(holdings.get(0, Pile::Hand).is_empty());
        assert_eq!(holdings.total_cards(), 0);
    }

    #[test]
    fn append_creates_and_take_drains() {
        let mut holdings = Holdings::new();
        holdings.append(1_u8, Pile::Hand, Card::new('S', 14_u8));
        holdings.append(1, Pile::Hand, Card::new('H', 2));
        holdings.ensure(2, Pile::Tricks);

        assert_eq!(holdings.get(1, Pile::Hand).len(), 2);
        assert_eq!(holdings.seats().count(), 2);
        assert_eq!(holdings.holdings_of(2).count(), 1);
        assert_eq!(holdings.cards().count(), 2);

        let hand = holdings.take(1, Pile::Hand);
        assert_eq!(hand.len(), 2);
        assert!(holdings.get(1, Pile::Hand).is_empty());
        assert!(holdings.take(3, Pile::Skat).is_empty());
    }
}
