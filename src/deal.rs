//! Distribution of a shuffled deck into per-seat holdings.

use core::fmt::Debug;
use core::hash::Hash;

use alloc::vec::Vec;
use log::{debug, warn};

use crate::card::Card;
use crate::deck::Variant;
use crate::error::DealError;
use crate::holdings::Holdings;

/// Receiver of a block of cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target<P> {
    /// Index into the distribution's seats, rotated by the dealer offset.
    Player(usize),
    /// A fixed seat that does not rotate, such as the owner of the skat.
    Fixed(P),
}

/// A contiguous run of cards handed to one holding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Block<P, Q> {
    /// Who receives the cards.
    pub target: Target<P>,
    /// Holding the cards go to.
    pub holding: Q,
    /// Number of consecutive deck positions in the block.
    pub len: usize,
}

impl<P, Q> Block<P, Q> {
    /// Block dealt to the player at `index`.
    #[must_use]
    pub const fn player(index: usize, holding: Q, len: usize) -> Self {
        Self {
            target: Target::Player(index),
            holding,
            len,
        }
    }

    /// Block dealt to a fixed seat.
    #[must_use]
    pub const fn fixed(seat: P, holding: Q, len: usize) -> Self {
        Self {
            target: Target::Fixed(seat),
            holding,
            len,
        }
    }
}

/// How a deck is split into holdings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Distribution<P, Q> {
    /// `hand_size` rounds over equally sized hands. In round `i` the seat at
    /// rotated index `j` receives the card at position `i + j * hand_size`.
    RoundRobin {
        /// Seats in dealing order.
        seats: Vec<P>,
        /// Holding every seat is dealt into.
        holding: Q,
        /// Cards per seat.
        hand_size: usize,
    },
    /// Contiguous blocks consumed from the top of the deck in order.
    Blocks {
        /// Seats addressed by [`Target::Player`].
        seats: Vec<P>,
        /// Blocks in dealing order.
        blocks: Vec<Block<P, Q>>,
    },
}

impl<P: Copy, Q: Copy> Distribution<P, Q> {
    /// Number of cards the distribution hands out, or `None` if it does not
    /// fit in a `usize`.
    #[must_use]
    pub fn total(&self) -> Option<usize> {
        match self {
            Self::RoundRobin {
                seats, hand_size, ..
            } => seats.len().checked_mul(*hand_size),
            Self::Blocks { blocks, .. } => blocks
                .iter()
                .try_fold(0_usize, |total, block| total.checked_add(block.len)),
        }
    }

    /// Number of rotating seats.
    #[must_use]
    pub fn seat_count(&self) -> usize {
        match self {
            Self::RoundRobin { seats, .. } | Self::Blocks { seats, .. } => seats.len(),
        }
    }

    fn validate(&self, deck_len: usize) -> Result<(), DealError> {
        let seats = self.seat_count();
        if seats == 0 {
            return Err(DealError::InvalidSchema);
        }

        if let Self::Blocks { blocks, .. } = self {
            let out_of_range = blocks
                .iter()
                .any(|block| matches!(block.target, Target::Player(index) if index >= seats));
            if out_of_range {
                return Err(DealError::InvalidSchema);
            }
        }

        let Some(expected) = self.total() else {
            return Err(DealError::InvalidSchema);
        };
        if expected != deck_len {
            return Err(DealError::SizeMismatch {
                expected,
                actual: deck_len,
            });
        }

        Ok(())
    }
}

/// A variant that knows how its deck is dealt.
pub trait Dealt: Variant {
    /// Seat type.
    type Seat: Copy + Eq + Hash + Debug;
    /// Holding name type.
    type Holding: Copy + Eq + Hash + Debug;

    /// The variant's distribution schema.
    fn distribution() -> Distribution<Self::Seat, Self::Holding>;
}

/// Holdings produced by dealing a variant.
pub type DealtHoldings<V> = Holdings<
    <V as Dealt>::Seat,
    <V as Dealt>::Holding,
    <V as Variant>::Suit,
    <V as Variant>::Rank,
>;

/// Deals `deck` according to `distribution`.
///
/// `dealer_offset` rotates which seat receives the first block; it is taken
/// modulo the number of seats.
///
/// # Errors
///
/// Returns [`DealError::SizeMismatch`] if the distribution does not hand out
/// exactly `deck.len()` cards and [`DealError::InvalidSchema`] if it has no
/// seats, addresses a seat it does not list, or hands out more cards than a
/// `usize` can count.
pub fn deal<P, Q, S, R>(
    distribution: &Distribution<P, Q>,
    deck: &[Card<S, R>],
    dealer_offset: usize,
) -> Result<Holdings<P, Q, S, R>, DealError>
where
    P: Copy + Eq + Hash,
    Q: Copy + Eq + Hash,
    S: Copy,
    R: Copy,
{
    if let Err(err) = distribution.validate(deck.len()) {
        warn!("rejected distribution for {} cards: {err}", deck.len());
        return Err(err);
    }

    let mut holdings = Holdings::new();

    match distribution {
        Distribution::RoundRobin {
            seats,
            holding,
            hand_size,
        } => {
            let rotated = |j: usize| seats[(j + dealer_offset) % seats.len()];

            for j in 0..seats.len() {
                holdings.ensure(rotated(j), *holding);
            }
            for round in 0..*hand_size {
                for j in 0..seats.len() {
                    holdings.append(rotated(j), *holding, deck[round + j * hand_size]);
                }
            }
        }
        Distribution::Blocks { seats, blocks } => {
            let resolve = |target: Target<P>| match target {
                Target::Player(index) => seats[(index + dealer_offset) % seats.len()],
                Target::Fixed(seat) => seat,
            };

            for block in blocks {
                match block.target {
                    Target::Player(_) => {
                        for &seat in seats {
                            holdings.ensure(seat, block.holding);
                        }
                    }
                    Target::Fixed(seat) => holdings.ensure(seat, block.holding),
                }
            }

            let mut position = 0;
            for block in blocks {
                let seat = resolve(block.target);
                for card in &deck[position..position + block.len] {
                    holdings.append(seat, block.holding, *card);
                }
                position += block.len;
            }
        }
    }

    debug!(
        "dealt {} cards to {} seats, dealer offset {dealer_offset}",
        deck.len(),
        distribution.seat_count()
    );

    Ok(holdings)
}

/// Deals `deck` with the variant's own distribution.
///
/// # Errors
///
/// See [`deal`].
pub fn deal_variant<V: Dealt>(
    deck: &[Card<V::Suit, V::Rank>],
    dealer_offset: usize,
) -> Result<DealtHoldings<V>, DealError> {
    deal(&V::distribution(), deck, dealer_offset)
}
