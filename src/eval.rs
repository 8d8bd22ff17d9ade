//! Bridge hand evaluation.
//!
//! Every function accepts any slice of cards, including an empty one, and
//! returns the identity value for it (0 points, 0 losers, 0 quick tricks).

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use crate::card::{Alphabet, SuitLists, SuitSets};
use crate::options::DisplayStyle;
use crate::variants::bridge::{BridgeCard, BridgeRank, BridgeSuit};

/// Number of top cards per suit inspected by [`loser_count`].
const LOSER_DEPTH: usize = 3;

/// High card points: A=4, K=3, Q=2, J=1.
///
/// # Example
///
/// ```
/// use trickdeck::eval::high_card_points;
/// use trickdeck::{BridgeRank, BridgeSuit, Card};
///
/// let hand = [
///     Card::new(BridgeSuit::Club, BridgeRank::Ace),
///     Card::new(BridgeSuit::Club, BridgeRank::King),
///     Card::new(BridgeSuit::Heart, BridgeRank::Queen),
/// ];
/// assert_eq!(high_card_points(&hand), 9);
/// assert_eq!(high_card_points(&[]), 0);
/// ```
#[must_use]
pub fn high_card_points(hand: &[BridgeCard]) -> u32 {
    hand.iter().map(|card| card.rank().hcp()).sum()
}

/// Groups the hand by suit, each suit sorted from ace down to two.
///
/// Suits not held read as empty through [`SuitLists::get`].
#[must_use]
pub fn hand_sorted_by_power(hand: &[BridgeCard]) -> SuitLists<BridgeSuit, BridgeRank> {
    let mut lists = SuitLists::from_cards(hand);
    lists.sort_by_power(|card| card.rank().trick_strength());
    lists
}

/// Losing trick count.
///
/// For every suit, counts the cards below the queen among the (up to) three
/// highest. Short suits are not adjusted further.
#[must_use]
pub fn loser_count(hand: &[BridgeCard]) -> u32 {
    let sorted = hand_sorted_by_power(hand);
    let queen = BridgeRank::Queen.trick_strength();

    BridgeSuit::ALL
        .iter()
        .map(|&suit| {
            sorted
                .get(suit)
                .iter()
                .take(LOSER_DEPTH)
                .filter(|card| card.rank().trick_strength() < queen)
                .count() as u32
        })
        .sum()
}

/// Quick tricks in `suit` counted in half tricks.
fn half_quick_tricks(holding: &SuitSets<BridgeSuit, BridgeRank>, suit: BridgeSuit) -> u32 {
    let ace = holding.has_rank(suit, BridgeRank::Ace);
    let king = holding.has_rank(suit, BridgeRank::King);
    let queen = holding.has_rank(suit, BridgeRank::Queen);

    match (ace, king, queen) {
        (true, true, _) => 4,
        (true, false, true) => 3,
        (false, true, _) if holding.suit_len(suit) > 1 => 1,
        _ => 0,
    }
}

/// Quick tricks held in one suit.
///
/// Ace-king is 2, ace-queen 1.5, a guarded king without the ace 0.5;
/// anything else is 0.
#[must_use]
pub fn quick_tricks_in_suit(holding: &SuitSets<BridgeSuit, BridgeRank>, suit: BridgeSuit) -> f64 {
    f64::from(half_quick_tricks(holding, suit)) / 2.0
}

/// Quick tricks of the whole hand, in steps of 0.5 and at most 8.
#[must_use]
pub fn quick_tricks(hand: &[BridgeCard]) -> f64 {
    let holding = SuitSets::from_cards(hand);
    let halves: u32 = BridgeSuit::ALL
        .iter()
        .map(|&suit| half_quick_tricks(&holding, suit))
        .sum();
    f64::from(halves) / 2.0
}

/// Renders the hand as spade, heart, diamond and club segments.
///
/// # Example
///
/// ```
/// use trickdeck::eval::display_hand;
/// use trickdeck::{BridgeRank, BridgeSuit, Card, DisplayStyle};
///
/// let hand = [
///     Card::new(BridgeSuit::Club, BridgeRank::Ace),
///     Card::new(BridgeSuit::Club, BridgeRank::King),
///     Card::new(BridgeSuit::Heart, BridgeRank::Queen),
///     Card::new(BridgeSuit::Spade, BridgeRank::Jack),
/// ];
/// assert_eq!(display_hand(&hand, &DisplayStyle::dotted()), "J.Q..AK");
/// assert_eq!(display_hand(&hand, &DisplayStyle::compact()), "JQ-AK");
/// ```
#[must_use]
pub fn display_hand(hand: &[BridgeCard], style: &DisplayStyle) -> String {
    let sorted = hand_sorted_by_power(hand);

    let segments: Vec<String> = BridgeSuit::DISPLAY_ORDER
        .iter()
        .map(|&suit| {
            let cards = sorted.get(suit);
            if cards.is_empty() {
                style.void_symbol.clone()
            } else {
                cards.iter().map(|card| card.rank().symbol()).collect()
            }
        })
        .collect();

    segments.join(style.separator.as_str())
}

/// Suit lengths in spade, heart, diamond, club order.
#[must_use]
pub fn suit_lengths(hand: &[BridgeCard]) -> [usize; 4] {
    BridgeSuit::DISPLAY_ORDER.map(|suit| hand.iter().filter(|card| card.suit() == suit).count())
}

/// Distribution pattern longest first, e.g. `"5-4-3-1"`.
#[must_use]
pub fn shape(hand: &[BridgeCard]) -> String {
    let mut lengths = suit_lengths(hand);
    lengths.sort_unstable_by(|a, b| b.cmp(a));
    format!("{}-{}-{}-{}", lengths[0], lengths[1], lengths[2], lengths[3])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::Card;

    fn suit(suit: BridgeSuit, ranks: &[BridgeRank]) -> Vec<BridgeCard> {
        ranks.iter().map(|&rank| Card::new(suit, rank)).collect()
    }

    #[test]
    fn quick_trick_classes() {
        use BridgeRank::{Ace, Jack, King, Queen, Two};

        let cases: [(&[BridgeRank], f64); 7] = [
            (&[Ace, King], 2.0),
            (&[Ace, King, Queen], 2.0),
            (&[Ace, Queen], 1.5),
            (&[King, Two], 0.5),
            (&[King], 0.0),
            (&[King, Queen], 0.5),
            (&[Ace, Jack], 0.0),
        ];

        for (ranks, expected) in cases {
            let holding = SuitSets::from_cards(&suit(BridgeSuit::Spade, ranks));
            assert_eq!(
                quick_tricks_in_suit(&holding, BridgeSuit::Spade),
                expected,
                "{ranks:?}"
            );
        }
    }

    #[test]
    fn shape_sorts_longest_first() {
        let mut hand = suit(BridgeSuit::Club, &[BridgeRank::Two, BridgeRank::Three]);
        hand.extend(suit(
            BridgeSuit::Heart,
            &[BridgeRank::Ace, BridgeRank::Four, BridgeRank::Five],
        ));
        hand.push(Card::new(BridgeSuit::Spade, BridgeRank::Six));

        assert_eq!(suit_lengths(&hand), [1, 3, 0, 2]);
        assert_eq!(shape(&hand), "3-2-1-0");
    }
}
