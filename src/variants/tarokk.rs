//! Hungarian Tarokk: 22 trumps plus 20 suit cards.
//!
//! Inside a suit the face cards always outrank the single counted numeral,
//! which is the ace in the red suits and the ten in the black suits.

use core::iter;

use alloc::vec::Vec;
#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashMap;
#[cfg(feature = "std")]
use std::collections::HashMap;

use crate::card::{Alphabet, Card};
use crate::deck::Variant;
use crate::error::PowerError;
use crate::power::TrickPower;
use crate::sync::Lazy;

/// Number of trump cards; the last one is the Skíz.
pub const TRUMPS: u8 = 22;

const TRUMP_LABELS: [&str; TRUMPS as usize] = [
    "I", "II", "III", "IV", "V", "VI", "VII", "VIII", "IX", "X", "XI", "XII", "XIII", "XIV", "XV",
    "XVI", "XVII", "XVIII", "XIX", "XX", "XXI", "SKIZ",
];

/// Suit colour, which decides the numeral kept in a suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SuitColor {
    /// Hearts and diamonds, keep the ace.
    Red,
    /// Clubs and spades, keep the ten.
    Black,
}

/// Tarokk suit. `Tarokk` is the trump suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TarokkSuit {
    /// Hearts.
    Hearts,
    /// Spades.
    Spades,
    /// Clubs.
    Clubs,
    /// Diamonds.
    Diamonds,
    /// Trumps.
    Tarokk,
}

impl TarokkSuit {
    /// The red suits.
    pub const RED: [Self; 2] = [Self::Diamonds, Self::Hearts];
    /// The black suits.
    pub const BLACK: [Self; 2] = [Self::Clubs, Self::Spades];

    /// Colour of a standard suit; `None` for trumps.
    #[must_use]
    pub const fn color(self) -> Option<SuitColor> {
        match self {
            Self::Hearts | Self::Diamonds => Some(SuitColor::Red),
            Self::Clubs | Self::Spades => Some(SuitColor::Black),
            Self::Tarokk => None,
        }
    }
}

impl Alphabet for TarokkSuit {
    const ALL: &'static [Self] = &[
        Self::Hearts,
        Self::Spades,
        Self::Clubs,
        Self::Diamonds,
        Self::Tarokk,
    ];

    fn symbol(self) -> &'static str {
        match self {
            Self::Hearts => "H",
            Self::Spades => "S",
            Self::Clubs => "C",
            Self::Diamonds => "D",
            Self::Tarokk => "T",
        }
    }
}

/// Tarokk rank: a numbered trump or a suit card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TarokkRank {
    /// Trump numbered `1..=22`; 22 is the Skíz.
    Trump(u8),
    /// Ace, counted only in red suits.
    Ace,
    /// Ten, counted only in black suits.
    Ten,
    /// Jack.
    Jack,
    /// Rider.
    Rider,
    /// Queen.
    Queen,
    /// King.
    King,
}

impl TarokkRank {
    /// Face cards, lowest first.
    pub const FACES: [Self; 4] = [Self::Jack, Self::Rider, Self::Queen, Self::King];

    /// The numeral kept in suits of `color`.
    #[must_use]
    pub const fn numeral(color: SuitColor) -> Self {
        match color {
            SuitColor::Red => Self::Ace,
            SuitColor::Black => Self::Ten,
        }
    }
}

impl Alphabet for TarokkRank {
    const ALL: &'static [Self] = &[
        Self::Trump(1),
        Self::Trump(2),
        Self::Trump(3),
        Self::Trump(4),
        Self::Trump(5),
        Self::Trump(6),
        Self::Trump(7),
        Self::Trump(8),
        Self::Trump(9),
        Self::Trump(10),
        Self::Trump(11),
        Self::Trump(12),
        Self::Trump(13),
        Self::Trump(14),
        Self::Trump(15),
        Self::Trump(16),
        Self::Trump(17),
        Self::Trump(18),
        Self::Trump(19),
        Self::Trump(20),
        Self::Trump(21),
        Self::Trump(22),
        Self::Ace,
        Self::Ten,
        Self::Jack,
        Self::Rider,
        Self::Queen,
        Self::King,
    ];

    /// Trumps are labelled in roman numerals, except the Skíz. An out of
    /// range trump number renders as `"?"`.
    fn symbol(self) -> &'static str {
        match self {
            Self::Trump(number) => number
                .checked_sub(1)
                .and_then(|index| TRUMP_LABELS.get(usize::from(index)))
                .copied()
                .unwrap_or("?"),
            Self::Ace => "A",
            Self::Ten => "T",
            Self::Jack => "J",
            Self::Rider => "R",
            Self::Queen => "Q",
            Self::King => "K",
        }
    }
}

/// A Tarokk card.
pub type TarokkCard = Card<TarokkSuit, TarokkRank>;

static TRICK_POWER: Lazy<HashMap<(TarokkSuit, TarokkRank), u32>> = Lazy::new(|| {
    let mut table = HashMap::new();

    for number in 1..=TRUMPS {
        table.insert(
            (TarokkSuit::Tarokk, TarokkRank::Trump(number)),
            u32::from(number),
        );
    }

    for suit in TarokkSuit::RED.into_iter().chain(TarokkSuit::BLACK) {
        let Some(color) = suit.color() else { continue };
        let order = iter::once(TarokkRank::numeral(color)).chain(TarokkRank::FACES);
        for (strength, rank) in (1..).zip(order) {
            table.insert((suit, rank), strength);
        }
    }

    table
});

/// Hungarian Tarokk.
#[derive(Debug, Clone, Copy, Default)]
pub struct Tarokk;

impl Tarokk {
    fn trumps() -> impl Iterator<Item = TarokkCard> {
        (1..=TRUMPS).map(|number| Card::new(TarokkSuit::Tarokk, TarokkRank::Trump(number)))
    }

    fn faces() -> impl Iterator<Item = TarokkCard> {
        TarokkRank::FACES.into_iter().flat_map(|rank| {
            TarokkSuit::RED
                .into_iter()
                .chain(TarokkSuit::BLACK)
                .map(move |suit| Card::new(suit, rank))
        })
    }

    fn numerals() -> impl Iterator<Item = TarokkCard> {
        TarokkSuit::RED
            .into_iter()
            .chain(TarokkSuit::BLACK)
            .filter_map(|suit| suit.color().map(|color| Card::new(suit, TarokkRank::numeral(color))))
    }
}

impl Variant for Tarokk {
    type Suit = TarokkSuit;
    type Rank = TarokkRank;

    const NAME: &'static str = "tarokk";
    const DECK_SIZE: usize = 42;

    /// Trumps, then face cards, then the red aces and black tens.
    fn deck() -> Vec<TarokkCard> {
        Self::trumps()
            .chain(Self::faces())
            .chain(Self::numerals())
            .collect()
    }
}

impl TrickPower for Tarokk {
    fn trick_power(card: &TarokkCard) -> Result<u32, PowerError> {
        TRICK_POWER
            .get(&(card.suit(), card.rank()))
            .copied()
            .ok_or(PowerError::UnknownCard)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trump_labels() {
        assert_eq!(TarokkRank::Trump(1).symbol(), "I");
        assert_eq!(TarokkRank::Trump(21).symbol(), "XXI");
        assert_eq!(TarokkRank::Trump(22).symbol(), "SKIZ");
        assert_eq!(TarokkRank::Trump(0).symbol(), "?");
        assert_eq!(TarokkRank::Trump(23).symbol(), "?");
    }

    #[test]
    fn colours() {
        assert_eq!(TarokkSuit::Hearts.color(), Some(SuitColor::Red));
        assert_eq!(TarokkSuit::Spades.color(), Some(SuitColor::Black));
        assert_eq!(TarokkSuit::Tarokk.color(), None);
    }

    #[test]
    fn deck_sections_in_order() {
        let deck = Tarokk::deck();
        assert_eq!(deck.len(), Tarokk::DECK_SIZE);
        assert!(deck[..22].iter().all(|card| card.suit() == TarokkSuit::Tarokk));
        assert!(
            deck[22..38]
                .iter()
                .all(|card| TarokkRank::FACES.contains(&card.rank()))
        );
        assert!(
            deck[38..]
                .iter()
                .all(|card| matches!(card.rank(), TarokkRank::Ace | TarokkRank::Ten))
        );
    }
}
