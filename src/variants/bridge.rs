//! Contract bridge: 52 cards, four seats of 13.

use alloc::vec;
use alloc::vec::Vec;

use crate::card::{Alphabet, Card};
use crate::deal::{Dealt, Distribution};
use crate::deck::{Variant, suit_major_deck};
use crate::error::PowerError;
use crate::holdings::Pile;
use crate::power::TrickPower;

/// Bridge suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BridgeSuit {
    /// Hearts.
    Heart,
    /// Clubs.
    Club,
    /// Diamonds.
    Diamond,
    /// Spades.
    Spade,
}

impl BridgeSuit {
    /// Order in which suits are shown in a hand diagram.
    pub const DISPLAY_ORDER: [Self; 4] = [Self::Spade, Self::Heart, Self::Diamond, Self::Club];
}

impl Alphabet for BridgeSuit {
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

/// Bridge rank, ace high.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BridgeRank {
    /// Ace.
    Ace,
    /// King.
    King,
    /// Queen.
    Queen,
    /// Jack.
    Jack,
    /// Ten.
    Ten,
    /// Nine.
    Nine,
    /// Eight.
    Eight,
    /// Seven.
    Seven,
    /// Six.
    Six,
    /// Five.
    Five,
    /// Four.
    Four,
    /// Three.
    Three,
    /// Two.
    Two,
}

impl BridgeRank {
    /// Trick strength, ace 13 down to two 1.
    #[must_use]
    pub const fn trick_strength(self) -> u32 {
        match self {
            Self::Ace => 13,
            Self::King => 12,
            Self::Queen => 11,
            Self::Jack => 10,
            Self::Ten => 9,
            Self::Nine => 8,
            Self::Eight => 7,
            Self::Seven => 6,
            Self::Six => 5,
            Self::Five => 4,
            Self::Four => 3,
            Self::Three => 2,
            Self::Two => 1,
        }
    }

    /// High card points (Goren scale): A=4, K=3, Q=2, J=1.
    #[must_use]
    pub const fn hcp(self) -> u32 {
        match self {
            Self::Ace => 4,
            Self::King => 3,
            Self::Queen => 2,
            Self::Jack => 1,
            _ => 0,
        }
    }
}

impl Alphabet for BridgeRank {
    const ALL: &'static [Self] = &[
        Self::Ace,
        Self::King,
        Self::Queen,
        Self::Jack,
        Self::Ten,
        Self::Nine,
        Self::Eight,
        Self::Seven,
        Self::Six,
        Self::Five,
        Self::Four,
        Self::Three,
        Self::Two,
    ];

    fn symbol(self) -> &'static str {
        match self {
            Self::Ace => "A",
            Self::King => "K",
            Self::Queen => "Q",
            Self::Jack => "J",
            Self::Ten => "T",
            Self::Nine => "9",
            Self::Eight => "8",
            Self::Seven => "7",
            Self::Six => "6",
            Self::Five => "5",
            Self::Four => "4",
            Self::Three => "3",
            Self::Two => "2",
        }
    }
}

/// The four positions at a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Seat {
    /// North.
    North,
    /// East.
    East,
    /// South.
    South,
    /// West.
    West,
}

impl Seat {
    /// All seats clockwise from North.
    pub const ALL: [Self; 4] = [Self::North, Self::East, Self::South, Self::West];

    /// Partner across the table.
    #[must_use]
    pub const fn partner(self) -> Self {
        match self {
            Self::North => Self::South,
            Self::South => Self::North,
            Self::East => Self::West,
            Self::West => Self::East,
        }
    }
}

/// A bridge card.
pub type BridgeCard = Card<BridgeSuit, BridgeRank>;

/// Contract bridge.
#[derive(Debug, Clone, Copy, Default)]
pub struct Bridge;

impl Variant for Bridge {
    type Suit = BridgeSuit;
    type Rank = BridgeRank;

    const NAME: &'static str = "bridge";
    const DECK_SIZE: usize = 52;

    fn deck() -> Vec<BridgeCard> {
        suit_major_deck(1)
    }
}

impl Dealt for Bridge {
    type Seat = Seat;
    type Holding = Pile;

    fn distribution() -> Distribution<Seat, Pile> {
        Distribution::RoundRobin {
            seats: vec![Seat::North, Seat::East, Seat::South, Seat::West],
            holding: Pile::Hand,
            hand_size: 13,
        }
    }
}

impl TrickPower for Bridge {
    fn trick_power(card: &BridgeCard) -> Result<u32, PowerError> {
        Ok(card.rank().trick_strength())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strengths_are_a_bijection() {
        let mut strengths: Vec<u32> = BridgeRank::ALL
            .iter()
            .map(|rank| rank.trick_strength())
            .collect();
        strengths.dedup();
        assert_eq!(strengths, (1..=13).rev().collect::<Vec<_>>());
    }

    #[test]
    fn deck_points_total_forty() {
        let total: u32 = Bridge::deck().iter().map(|card| card.rank().hcp()).sum();
        assert_eq!(total, 40);
    }

    #[test]
    fn partners() {
        for seat in Seat::ALL {
            assert_eq!(seat.partner().partner(), seat);
            assert_ne!(seat.partner(), seat);
        }
    }
}
