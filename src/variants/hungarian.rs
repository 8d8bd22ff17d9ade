//! The 32 card Hungarian (German-suited) deck used for Felsős and similar
//! games.

use alloc::vec::Vec;

use crate::card::{Alphabet, Card};
use crate::deck::{Variant, suit_major_deck};

/// German suits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HungarianSuit {
    /// Acorns.
    Eichel,
    /// Leaves.
    Blau,
    /// Bells.
    Schell,
    /// Hearts.
    Herz,
}

impl Alphabet for HungarianSuit {
    const ALL: &'static [Self] = &[Self::Eichel, Self::Blau, Self::Schell, Self::Herz];

    fn symbol(self) -> &'static str {
        match self {
            Self::Eichel => "E",
            Self::Blau => "B",
            Self::Schell => "S",
            Self::Herz => "H",
        }
    }
}

/// German ranks, lowest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HungarianRank {
    /// Seven.
    Sieben,
    /// Eight.
    Acht,
    /// Nine.
    Neun,
    /// Ten.
    Zehn,
    /// Under knave.
    Unter,
    /// Over knave.
    Ober,
    /// King.
    Koenig,
    /// Ace.
    Ass,
}

impl Alphabet for HungarianRank {
    const ALL: &'static [Self] = &[
        Self::Sieben,
        Self::Acht,
        Self::Neun,
        Self::Zehn,
        Self::Unter,
        Self::Ober,
        Self::Koenig,
        Self::Ass,
    ];

    fn symbol(self) -> &'static str {
        match self {
            Self::Sieben => "7",
            Self::Acht => "8",
            Self::Neun => "9",
            Self::Zehn => "Z",
            Self::Unter => "U",
            Self::Ober => "O",
            Self::Koenig => "K",
            Self::Ass => "A",
        }
    }
}

/// A Hungarian card.
pub type HungarianCard = Card<HungarianSuit, HungarianRank>;

/// The Hungarian 32 card deck.
#[derive(Debug, Clone, Copy, Default)]
pub struct Hungarian;

impl Variant for Hungarian {
    type Suit = HungarianSuit;
    type Rank = HungarianRank;

    const NAME: &'static str = "hungarian";
    const DECK_SIZE: usize = 32;

    fn deck() -> Vec<HungarianCard> {
        suit_major_deck(1)
    }
}
