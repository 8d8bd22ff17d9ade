//! Skat: 32 cards, three players of ten and a two card skat.

use alloc::vec;
use alloc::vec::Vec;

use crate::card::{Alphabet, Card, SuitLists};
use crate::deal::{Block, Dealt, Distribution};
use crate::deck::{Variant, suit_major_deck};
use crate::error::PowerError;
use crate::holdings::Pile;
use crate::power::TrickPower;

/// Skat suit, strongest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SkatSuit {
    /// Clubs.
    Kreuz,
    /// Spades.
    Pik,
    /// Hearts.
    Herz,
    /// Diamonds.
    Karo,
}

impl SkatSuit {
    /// Rank of the suit among the Buben: Karo 0 up to Kreuz 3.
    #[must_use]
    pub const fn power(self) -> u32 {
        match self {
            Self::Karo => 0,
            Self::Herz => 1,
            Self::Pik => 2,
            Self::Kreuz => 3,
        }
    }
}

impl Alphabet for SkatSuit {
    const ALL: &'static [Self] = &[Self::Kreuz, Self::Pik, Self::Herz, Self::Karo];

    fn symbol(self) -> &'static str {
        match self {
            Self::Kreuz => "KREUZ",
            Self::Pik => "PIK",
            Self::Herz => "HERZ",
            Self::Karo => "KARO",
        }
    }
}

/// Skat rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SkatRank {
    /// Ace.
    Ass,
    /// Ten.
    Zehn,
    /// King.
    Koenig,
    /// Queen.
    Dame,
    /// Nine.
    Neun,
    /// Eight.
    Acht,
    /// Seven.
    Sieben,
    /// Jack, always trump.
    Bube,
}

impl SkatRank {
    /// Order within a plain suit: Ass 7 down to Sieben 1. Buben have no
    /// place in a plain suit and rank 0 here.
    #[must_use]
    pub const fn suit_order(self) -> u32 {
        match self {
            Self::Ass => 7,
            Self::Zehn => 6,
            Self::Koenig => 5,
            Self::Dame => 4,
            Self::Neun => 3,
            Self::Acht => 2,
            Self::Sieben => 1,
            Self::Bube => 0,
        }
    }

    /// Card points (Augen). A full deck holds 120.
    #[must_use]
    pub const fn card_points(self) -> u32 {
        match self {
            Self::Ass => 11,
            Self::Zehn => 10,
            Self::Koenig => 4,
            Self::Dame => 3,
            Self::Bube => 2,
            Self::Neun | Self::Acht | Self::Sieben => 0,
        }
    }
}

impl Alphabet for SkatRank {
    const ALL: &'static [Self] = &[
        Self::Ass,
        Self::Zehn,
        Self::Koenig,
        Self::Dame,
        Self::Neun,
        Self::Acht,
        Self::Sieben,
        Self::Bube,
    ];

    fn symbol(self) -> &'static str {
        match self {
            Self::Ass => "A",
            Self::Zehn => "Z",
            Self::Koenig => "K",
            Self::Dame => "D",
            Self::Neun => "9",
            Self::Acht => "8",
            Self::Sieben => "7",
            Self::Bube => "B",
        }
    }
}

/// Skat seats. `Spiel` owns the skat and is not a player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SkatSeat {
    /// Forehand, leads the first trick.
    Vorhand,
    /// Middlehand.
    Mittelhand,
    /// Rearhand, the dealer.
    Hinterhand,
    /// The game itself.
    Spiel,
}

/// A Skat card.
pub type SkatCard = Card<SkatSuit, SkatRank>;

/// Skat.
#[derive(Debug, Clone, Copy, Default)]
pub struct Skat;

impl Variant for Skat {
    type Suit = SkatSuit;
    type Rank = SkatRank;

    const NAME: &'static str = "skat";
    const DECK_SIZE: usize = 32;

    fn deck() -> Vec<SkatCard> {
        suit_major_deck(1)
    }
}

impl Dealt for Skat {
    type Seat = SkatSeat;
    type Holding = Pile;

    /// Three each, two to the skat, four each, then three each.
    fn distribution() -> Distribution<SkatSeat, Pile> {
        let mut blocks = Vec::with_capacity(10);
        blocks.extend((0..3).map(|player| Block::player(player, Pile::Hand, 3)));
        blocks.push(Block::fixed(SkatSeat::Spiel, Pile::Skat, 2));
        blocks.extend((0..3).map(|player| Block::player(player, Pile::Hand, 4)));
        blocks.extend((0..3).map(|player| Block::player(player, Pile::Hand, 3)));

        Distribution::Blocks {
            seats: vec![
                SkatSeat::Vorhand,
                SkatSeat::Mittelhand,
                SkatSeat::Hinterhand,
            ],
            blocks,
        }
    }
}

impl TrickPower for Skat {
    /// Ranking of a game without a trump suit (Buben still trump).
    fn trick_power(card: &SkatCard) -> Result<u32, PowerError> {
        Ok(trick_strength(card, None))
    }
}

/// Trick strength of a card when `trump` is the trump suit.
///
/// Buben beat everything (Kreuz highest), then the trump suit, then plain
/// suit cards.
#[must_use]
pub fn trick_strength(card: &SkatCard, trump: Option<SkatSuit>) -> u32 {
    let rank = card.rank();
    if matches!(rank, SkatRank::Bube) {
        return 1000 + card.suit().power();
    }
    match trump {
        Some(suit) if suit == card.suit() => 100 + rank.suit_order(),
        _ => rank.suit_order(),
    }
}

/// Hand evaluation method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Estimate {
    /// Van Stegen count for suit games.
    VanStegen,
}

/// Result of a hand evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HandEstimate {
    /// Method used.
    pub method: Estimate,
    /// Estimated strength.
    pub score: u32,
}

/// Van Stegen count: two per Bube, one per Ass or Zehn, the length of the
/// longest suit without Buben, and one for sitting in forehand.
#[must_use]
pub fn van_stegen(hand: &[SkatCard], is_forehand: bool) -> HandEstimate {
    let buben = hand
        .iter()
        .filter(|card| card.rank() == SkatRank::Bube)
        .count();
    let fulls = hand
        .iter()
        .filter(|card| matches!(card.rank(), SkatRank::Ass | SkatRank::Zehn))
        .count();

    let plain: Vec<SkatCard> = hand
        .iter()
        .filter(|card| card.rank() != SkatRank::Bube)
        .copied()
        .collect();
    let suits = SuitLists::from_cards(&plain);
    let longest = SkatSuit::ALL
        .iter()
        .map(|&suit| suits.get(suit).len())
        .max()
        .unwrap_or(0);

    let score = 2 * buben + fulls + longest + usize::from(is_forehand);
    HandEstimate {
        method: Estimate::VanStegen,
        score: score as u32,
    }
}
