//! Decks, deals and hand evaluation for trick-taking card games, with
//! optional `no_std` support.
//!
//! Each game variant ([`Bridge`], [`Skat`], [`Pinochle`], [`Hungarian`],
//! [`Tarokk`]) brings its own suit and rank alphabets. Decks are generated in
//! a fixed order, shuffled with a caller-supplied random source, dealt into
//! [`Holdings`] and then evaluated.
//!
//! # Example
//!
//! ```
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//! use trickdeck::eval::high_card_points;
//! use trickdeck::{Bridge, Pile, Seat, deal_variant, generate_deck, shuffle};
//!
//! let mut rng = ChaCha8Rng::seed_from_u64(42);
//! let deck = shuffle(&generate_deck::<Bridge>(), &mut rng);
//! let holdings = deal_variant::<Bridge>(&deck, 0).unwrap();
//!
//! let points: u32 = Seat::ALL
//!     .iter()
//!     .map(|&seat| high_card_points(holdings.get(seat, Pile::Hand)))
//!     .sum();
//! assert_eq!(points, 40);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deal;
pub mod deck;
pub mod error;
pub mod eval;
pub mod holdings;
pub mod options;
pub mod power;
pub mod shuffle;
mod sync;
pub mod table;
pub mod variants;

// Re-export main types
pub use card::{Alphabet, Card, CardId, SuitLists, SuitSets};
pub use deal::{Block, Dealt, DealtHoldings, Distribution, Target, deal, deal_variant};
pub use deck::{Variant, generate_deck, suit_major_deck};
pub use error::{DealError, PowerError};
pub use holdings::{Holdings, Pile};
pub use options::{DisplayStyle, TableOptions};
pub use power::{TrickPower, sort_by_power, sorted_by_power};
pub use shuffle::{shuffle, shuffled_deck};
pub use table::Table;
pub use variants::{
    Bridge, BridgeCard, BridgeRank, BridgeSuit, Hungarian, Pinochle, Seat, Skat, SkatSeat,
    Tarokk, TarokkRank, TarokkSuit,
};
