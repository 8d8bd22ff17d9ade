//! Seeded dealing sessions.

use core::marker::PhantomData;

use log::debug;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::deal::{Dealt, DealtHoldings, deal_variant};
use crate::error::DealError;
use crate::options::TableOptions;
use crate::shuffle::shuffled_deck;

/// A table dealing one variant from a seeded random source.
///
/// Two tables created with the same options and seed produce the same
/// sequence of deals (card ids aside).
///
/// # Example
///
/// ```
/// use trickdeck::{Bridge, Pile, Seat, Table, TableOptions};
///
/// let mut table = Table::<Bridge>::new(TableOptions::default(), 42);
/// let holdings = table.deal().unwrap();
/// assert_eq!(holdings.get(Seat::North, Pile::Hand).len(), 13);
/// ```
#[derive(Debug, Clone)]
pub struct Table<V: Dealt> {
    options: TableOptions,
    dealer_offset: usize,
    deals: usize,
    rng: ChaCha8Rng,
    variant: PhantomData<V>,
}

impl<V: Dealt> Table<V> {
    /// Creates a table with the given seed.
    #[must_use]
    pub fn new(options: TableOptions, seed: u64) -> Self {
        Self {
            options,
            dealer_offset: options.dealer_offset,
            deals: 0,
            rng: ChaCha8Rng::seed_from_u64(seed),
            variant: PhantomData,
        }
    }

    /// Shuffles a fresh deck and deals it.
    ///
    /// When [`TableOptions::rotate_dealer`] is set, the next deal starts one
    /// seat further round the table.
    ///
    /// # Errors
    ///
    /// Returns an error if the variant's distribution does not fit its deck.
    pub fn deal(&mut self) -> Result<DealtHoldings<V>, DealError> {
        let deck = shuffled_deck::<V, _>(&mut self.rng);
        let holdings = deal_variant::<V>(&deck, self.dealer_offset)?;

        self.deals += 1;
        if self.options.rotate_dealer {
            let seats = V::distribution().seat_count().max(1);
            self.dealer_offset = (self.dealer_offset + 1) % seats;
        }
        debug!(
            "{} deal #{} done, next dealer offset {}",
            V::NAME,
            self.deals,
            self.dealer_offset
        );

        Ok(holdings)
    }

    /// Restarts the random source from a new seed.
    pub fn reseed(&mut self, seed: u64) {
        self.rng = ChaCha8Rng::seed_from_u64(seed);
    }

    /// Seat rotation the next deal will use.
    #[must_use]
    pub const fn dealer_offset(&self) -> usize {
        self.dealer_offset
    }

    /// Number of deals made so far.
    #[must_use]
    pub const fn deals(&self) -> usize {
        self.deals
    }

    /// Returns the table options.
    #[must_use]
    pub const fn options(&self) -> &TableOptions {
        &self.options
    }
}
