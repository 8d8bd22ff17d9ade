//! Game variants: alphabets, decks, distributions and rankings.

pub mod bridge;
pub mod hungarian;
pub mod pinochle;
pub mod skat;
pub mod tarokk;

pub use bridge::{Bridge, BridgeCard, BridgeRank, BridgeSuit, Seat};
pub use hungarian::{Hungarian, HungarianCard, HungarianRank, HungarianSuit};
pub use pinochle::{Pinochle, PinochleCard, PinochleRank, PinochleSuit};
pub use skat::{Skat, SkatCard, SkatRank, SkatSeat, SkatSuit};
pub use tarokk::{SuitColor, Tarokk, TarokkCard, TarokkRank, TarokkSuit};
