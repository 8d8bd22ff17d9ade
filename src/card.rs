//! Card types and suit-keyed card containers.

use core::fmt;
use core::hash::{Hash, Hasher};
use core::sync::atomic::{AtomicU64, Ordering};

use alloc::vec::Vec;
#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::{HashMap, HashSet};
#[cfg(feature = "std")]
use std::collections::{HashMap, HashSet};

use crate::power::sort_by_power;

static NEXT_CARD_ID: AtomicU64 = AtomicU64::new(0);

/// Process-unique card identifier.
///
/// Ids are handed out by a global counter and never reused, so two physical
/// copies of the same suit and rank (for example in a Pinochle deck) are
/// still distinct cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CardId(u64);

impl CardId {
    fn next() -> Self {
        Self(NEXT_CARD_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// Returns the numeric value of the id.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "c{}", self.0)
    }
}

/// A closed, per-variant enumeration of suits or ranks.
pub trait Alphabet: Copy + Eq + Hash + fmt::Debug + 'static {
    /// Every member in the variant's enumeration order.
    const ALL: &'static [Self];

    /// Textual label of the member (e.g. `"A"`, `"T"`, `"SKIZ"`).
    fn symbol(self) -> &'static str;
}

/// A playing card of some variant.
///
/// Equality and hashing only look at the card id.
#[derive(Debug, Clone, Copy)]
pub struct Card<S, R> {
    id: CardId,
    suit: S,
    rank: R,
}

impl<S: Copy, R: Copy> Card<S, R> {
    /// Creates a new card with a fresh id.
    #[must_use]
    pub fn new(suit: S, rank: R) -> Self {
        Self {
            id: CardId::next(),
            suit,
            rank,
        }
    }

    /// Returns the card id.
    #[must_use]
    pub const fn id(&self) -> CardId {
        self.id
    }

    /// Returns the suit of the card.
    #[must_use]
    pub const fn suit(&self) -> S {
        self.suit
    }

    /// Returns the rank of the card.
    #[must_use]
    pub const fn rank(&self) -> R {
        self.rank
    }
}

impl<S, R> PartialEq for Card<S, R> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<S, R> Eq for Card<S, R> {}

impl<S, R> Hash for Card<S, R> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl<S: Alphabet, R: Alphabet> fmt::Display for Card<S, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank.symbol(), self.suit.symbol())
    }
}

/// Cards grouped by suit as sets.
///
/// Used when only membership matters, e.g. "does this hand hold the king of
/// hearts".
#[derive(Debug, Clone)]
pub struct SuitSets<S, R> {
    suits: HashMap<S, HashSet<Card<S, R>>>,
}

impl<S: Copy + Eq + Hash, R: Copy + Eq> SuitSets<S, R> {
    /// Creates an empty container.
    #[must_use]
    pub fn new() -> Self {
        Self {
            suits: HashMap::new(),
        }
    }

    /// Groups the given cards by suit.
    #[must_use]
    pub fn from_cards(cards: &[Card<S, R>]) -> Self {
        let mut sets = Self::new();
        for card in cards {
            sets.insert(*card);
        }
        sets
    }

    /// Inserts a card, returning `false` if it was already present.
    pub fn insert(&mut self, card: Card<S, R>) -> bool {
        self.suits.entry(card.suit()).or_default().insert(card)
    }

    /// Returns whether this exact card is present.
    #[must_use]
    pub fn contains(&self, card: &Card<S, R>) -> bool {
        self.suits
            .get(&card.suit())
            .is_some_and(|set| set.contains(card))
    }

    /// Returns whether any card of `rank` is held in `suit`.
    #[must_use]
    pub fn has_rank(&self, suit: S, rank: R) -> bool {
        self.iter_suit(suit).any(|card| card.rank() == rank)
    }

    /// Iterates the cards of a suit; a suit that is not held yields nothing.
    pub fn iter_suit(&self, suit: S) -> impl Iterator<Item = &Card<S, R>> {
        self.suits.get(&suit).into_iter().flatten()
    }

    /// Number of cards held in a suit.
    #[must_use]
    pub fn suit_len(&self, suit: S) -> usize {
        self.suits.get(&suit).map_or(0, HashSet::len)
    }

    /// Iterates the suits with at least one card.
    pub fn suits(&self) -> impl Iterator<Item = S> + '_ {
        self.suits
            .iter()
            .filter(|(_, set)| !set.is_empty())
            .map(|(suit, _)| *suit)
    }

    /// Total number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.suits.values().map(HashSet::len).sum()
    }

    /// Returns whether no cards are held.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<S: Copy + Eq + Hash, R: Copy + Eq> Default for SuitSets<S, R> {
    fn default() -> Self {
        Self::new()
    }
}

/// Cards grouped by suit as ordered lists.
///
/// Append order is preserved until [`SuitLists::sort_by_power`] is called.
#[derive(Debug, Clone)]
pub struct SuitLists<S, R> {
    suits: HashMap<S, Vec<Card<S, R>>>,
}

impl<S: Copy + Eq + Hash, R: Copy> SuitLists<S, R> {
    /// Creates an empty container.
    #[must_use]
    pub fn new() -> Self {
        Self {
            suits: HashMap::new(),
        }
    }

    /// Groups the given cards by suit, keeping their relative order.
    #[must_use]
    pub fn from_cards(cards: &[Card<S, R>]) -> Self {
        let mut lists = Self::new();
        for card in cards {
            lists.push(*card);
        }
        lists
    }

    /// Appends a card to the end of its suit.
    pub fn push(&mut self, card: Card<S, R>) {
        self.suits.entry(card.suit()).or_default().push(card);
    }

    /// Returns the cards of a suit, or an empty slice for a suit not held.
    #[must_use]
    pub fn get(&self, suit: S) -> &[Card<S, R>] {
        self.suits
            .get(&suit)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Number of suits with an entry.
    #[must_use]
    pub fn suit_count(&self) -> usize {
        self.suits.len()
    }

    /// Iterates `(suit, cards)` pairs in unspecified suit order.
    pub fn iter(&self) -> impl Iterator<Item = (S, &[Card<S, R>])> {
        self.suits
            .iter()
            .map(|(suit, cards)| (*suit, cards.as_slice()))
    }

    /// Sorts every suit by descending power. Equal powers keep their order.
    pub fn sort_by_power<F>(&mut self, power: F)
    where
        F: Fn(&Card<S, R>) -> u32,
    {
        for cards in self.suits.values_mut() {
            sort_by_power(cards, &power);
        }
    }

    /// Total number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.suits.values().map(Vec::len).sum()
    }

    /// Returns whether no cards are held.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<S: Copy + Eq + Hash, R: Copy> Default for SuitLists<S, R> {
    fn default() -> Self {
        Self::new()
    }
}
