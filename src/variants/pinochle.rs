//! Pinochle: a 48 card double deck, four seats of twelve.

use alloc::vec::Vec;

use crate::card::{Alphabet, Card};
use crate::deal::{Dealt, Distribution};
use crate::deck::{Variant, suit_major_deck};
use crate::error::PowerError;
use crate::holdings::Pile;
use crate::power::TrickPower;
use crate::variants::bridge::Seat;

/// Pinochle suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PinochleSuit {
    /// Hearts.
    Heart,
    /// Clubs.
    Club,
    /// Diamonds.
    Diamond,
    /// Spades.
    Spade,
}

impl Alphabet for PinochleSuit {
    const ALL: &'static [Self] = &[Self::Heart, Self::Club, Self::Diamond, Self::Spade];

    fn symbol(self) -> &'static str {
        match self {
            Self::Heart => "H",
            Self::Club => "C",
            Self::Diamond => "D",
            Self::Spade => "S",
        }
    }
}

/// Pinochle rank, nine low; the ten sits between the king and the ace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PinochleRank {
    /// Nine.
    Nine,
    /// Jack.
    Jack,
    /// Queen.
    Queen,
    /// King.
    King,
    /// Ten.
    Ten,
    /// Ace.
    Ace,
}

impl PinochleRank {
    /// Trick strength, nine 1 up to ace 6.
    #[must_use]
    pub const fn trick_strength(self) -> u32 {
        match self {
            Self::Nine => 1,
            Self::Jack => 2,
            Self::Queen => 3,
            Self::King => 4,
            Self::Ten => 5,
            Self::Ace => 6,
        }
    }
}

impl Alphabet for PinochleRank {
    const ALL: &'static [Self] = &[
        Self::Nine,
        Self::Jack,
        Self::Queen,
        Self::King,
        Self::Ten,
        Self::Ace,
    ];

    fn symbol(self) -> &'static str {
        match self {
            Self::Nine => "9",
            Self::Jack => "J",
            Self::Queen => "Q",
            Self::King => "K",
            Self::Ten => "T",
            Self::Ace => "A",
        }
    }
}

/// A Pinochle card.
pub type PinochleCard = Card<PinochleSuit, PinochleRank>;

/// Pinochle.
#[derive(Debug, Clone, Copy, Default)]
pub struct Pinochle;

impl Variant for Pinochle {
    type Suit = PinochleSuit;
    type Rank = PinochleRank;

    const NAME: &'static str = "pinochle";
    const DECK_SIZE: usize = 48;

    fn deck() -> Vec<PinochleCard> {
        suit_major_deck(2)
    }
}

impl Dealt for Pinochle {
    type Seat = Seat;
    type Holding = Pile;

    fn distribution() -> Distribution<Seat, Pile> {
        Distribution::RoundRobin {
            seats: Seat::ALL.to_vec(),
            holding: Pile::Hand,
            hand_size: 12,
        }
    }
}

impl TrickPower for Pinochle {
    fn trick_power(card: &PinochleCard) -> Result<u32, PowerError> {
        Ok(card.rank().trick_strength())
    }
}
