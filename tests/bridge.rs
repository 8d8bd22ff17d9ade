//! Bridge deal and hand evaluation tests.

#![allow(clippy::float_cmp)]

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use trickdeck::eval::{
    display_hand, hand_sorted_by_power, high_card_points, loser_count, quick_tricks,
};
use trickdeck::{
    Alphabet, Bridge, BridgeCard, BridgeRank, BridgeSuit, Card, DisplayStyle, Pile, Seat, Table,
    TableOptions, deal_variant, generate_deck, shuffle,
};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn card(suit: BridgeSuit, rank: BridgeRank) -> BridgeCard {
    Card::new(suit, rank)
}

fn nine_point_hand() -> Vec<BridgeCard> {
    vec![
        card(BridgeSuit::Club, BridgeRank::Ace),
        card(BridgeSuit::Club, BridgeRank::King),
        card(BridgeSuit::Heart, BridgeRank::Queen),
    ]
}

fn sample_full_hand() -> Vec<BridgeCard> {
    use BridgeRank::{Ace, Jack, King, Nine, Queen, Seven, Six, Ten};
    use BridgeSuit::{Club, Diamond, Heart, Spade};

    vec![
        card(Club, Ace),
        card(Club, King),
        card(Club, Jack),
        card(Club, Ten),
        card(Diamond, Queen),
        card(Diamond, Ace),
        card(Diamond, Six),
        card(Spade, Ten),
        card(Spade, Nine),
        card(Spade, Seven),
        card(Heart, King),
        card(Heart, Queen),
    ]
}

#[test]
fn high_card_points_of_small_hands() {
    assert_eq!(high_card_points(&[]), 0);
    assert_eq!(high_card_points(&nine_point_hand()), 9);
    assert_eq!(high_card_points(&sample_full_hand()), 19);
}

#[test]
fn sorting_by_power() {
    let sorted = hand_sorted_by_power(&nine_point_hand());
    let clubs = sorted.get(BridgeSuit::Club);

    assert_eq!(clubs.len(), 2);
    assert_eq!(clubs[0].rank(), BridgeRank::Ace);
    assert_eq!(clubs[1].rank(), BridgeRank::King);
    assert_eq!(sorted.get(BridgeSuit::Heart).len(), 1);
    assert!(sorted.get(BridgeSuit::Spade).is_empty());
}

#[test]
fn sorting_is_strictly_descending_and_stable() {
    let mut rng = ChaCha8Rng::seed_from_u64(11);
    let deck = shuffle(&generate_deck::<Bridge>(), &mut rng);
    let hand = &deck[..13];

    let first = hand_sorted_by_power(hand);
    let second = hand_sorted_by_power(hand);
    for &suit in BridgeSuit::ALL {
        let cards = first.get(suit);
        assert!(
            cards
                .windows(2)
                .all(|pair| pair[0].rank().trick_strength() > pair[1].rank().trick_strength())
        );
        assert_eq!(cards, second.get(suit));
    }
}

#[test]
fn loser_count_of_sample_hand() {
    assert_eq!(loser_count(&sample_full_hand()), 5);
    assert_eq!(loser_count(&[]), 0);
}

#[test]
fn quick_tricks_examples() {
    assert_eq!(quick_tricks(&nine_point_hand()), 2.0);
    assert_eq!(quick_tricks(&[]), 0.0);

    let no_honours = [
        card(BridgeSuit::Club, BridgeRank::Two),
        card(BridgeSuit::Heart, BridgeRank::Three),
        card(BridgeSuit::Diamond, BridgeRank::Four),
    ];
    assert_eq!(quick_tricks(&no_honours), 0.0);

    // clubs AK 2, diamonds AQ 1.5, hearts KQ 0.5
    assert_eq!(quick_tricks(&sample_full_hand()), 4.0);
}

#[test]
fn quick_tricks_are_bounded() {
    let honours: Vec<BridgeCard> = BridgeSuit::ALL
        .iter()
        .flat_map(|&suit| {
            [BridgeRank::Ace, BridgeRank::King, BridgeRank::Queen]
                .map(|rank| card(suit, rank))
        })
        .collect();
    assert_eq!(quick_tricks(&honours), 8.0);
}

#[test]
fn display_styles() {
    let hand = [
        card(BridgeSuit::Club, BridgeRank::Ace),
        card(BridgeSuit::Club, BridgeRank::King),
        card(BridgeSuit::Heart, BridgeRank::Queen),
        card(BridgeSuit::Spade, BridgeRank::Jack),
    ];

    assert_eq!(display_hand(&hand, &DisplayStyle::dotted()), "J.Q..AK");
    assert_eq!(display_hand(&hand, &DisplayStyle::compact()), "JQ-AK");
    assert_eq!(
        display_hand(&hand, &DisplayStyle::dotted().with_separator("|")),
        "J|Q||AK"
    );
    assert_eq!(display_hand(&[], &DisplayStyle::default()), "...");
    assert_eq!(display_hand(&[], &DisplayStyle::compact()), "----");
}

#[test]
fn deal_preserves_the_deck() {
    init_logger();
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let deck = shuffle(&generate_deck::<Bridge>(), &mut rng);
    let holdings = deal_variant::<Bridge>(&deck, 0).unwrap();

    let mut dealt: Vec<u64> = holdings.cards().map(|card| card.id().value()).collect();
    let mut source: Vec<u64> = deck.iter().map(|card| card.id().value()).collect();
    dealt.sort_unstable();
    source.sort_unstable();
    assert_eq!(dealt, source);

    for seat in Seat::ALL {
        assert_eq!(holdings.get(seat, Pile::Hand).len(), 13);
    }
}

#[test]
fn every_deal_holds_forty_points() {
    init_logger();
    let mut table = Table::<Bridge>::new(TableOptions::default(), 2024);
    for _ in 0..20 {
        let holdings = table.deal().unwrap();
        let total: u32 = Seat::ALL
            .iter()
            .map(|&seat| high_card_points(holdings.get(seat, Pile::Hand)))
            .sum();
        assert_eq!(total, 40);
    }
    assert_eq!(table.deals(), 20);
}

#[test]
fn dealer_offset_rotates_seats() {
    init_logger();
    let deck = generate_deck::<Bridge>();
    let straight = deal_variant::<Bridge>(&deck, 0).unwrap();
    let rotated = deal_variant::<Bridge>(&deck, 1).unwrap();

    assert_eq!(
        straight.get(Seat::North, Pile::Hand),
        rotated.get(Seat::East, Pile::Hand)
    );
    assert_eq!(
        straight.get(Seat::West, Pile::Hand),
        rotated.get(Seat::North, Pile::Hand)
    );
}

#[test]
fn table_rotation_and_seeding() {
    init_logger();
    let options = TableOptions::default().with_dealer_offset(3);
    let mut table = Table::<Bridge>::new(options, 9);
    assert_eq!(table.dealer_offset(), 3);
    table.deal().unwrap();
    assert_eq!(table.dealer_offset(), 0);

    let fixed = TableOptions::default().with_rotate_dealer(false);
    let mut a = Table::<Bridge>::new(fixed, 5);
    let mut b = Table::<Bridge>::new(fixed, 5);
    let hand_a = display_hand(
        a.deal().unwrap().get(Seat::South, Pile::Hand),
        &DisplayStyle::default(),
    );
    let hand_b = display_hand(
        b.deal().unwrap().get(Seat::South, Pile::Hand),
        &DisplayStyle::default(),
    );
    assert_eq!(hand_a, hand_b);
    assert_eq!(a.dealer_offset(), 0);
}
