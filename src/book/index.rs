//! The three mutually-redundant indexes described in §3/§4.2: by-order-id,
//! by-ask-price ascending, by-bid-price descending (kept ascending and
//! walked in reverse, §9), plus the cached per-side share totals.

use crossbeam_skiplist::SkipMap;
use dashmap::DashMap;

use super::error::BookError;
use super::{Order, OrderId, PriceLevel, Side};
use crate::money::Cents;

/// The indexed book. Owns every live order and price level for one
/// instrument.
pub struct Book {
    /// Ask levels, keyed by price ascending — already in best-to-worst order.
    asks: SkipMap<Cents, PriceLevel>,
    /// Bid levels, keyed by price ascending; walked in reverse for
    /// best-to-worst (highest first).
    bids: SkipMap<Cents, PriceLevel>,
    /// By-order-id index, used by REDUCE to recover a side and price from
    /// an id alone.
    orders: DashMap<OrderId, Order>,
    total_bid_shares: u64,
    total_ask_shares: u64,
}

/// What changed as the result of applying a REDUCE to the indexed book.
pub struct ReduceOutcome {
    /// Side the reduced order rested on.
    pub side: Side,
    /// The amount actually subtracted, after clamping to the order's
    /// remaining size.
    pub amount: u64,
}

impl Book {
    /// An empty book.
    pub fn new() -> Self {
        Book {
            asks: SkipMap::new(),
            bids: SkipMap::new(),
            orders: DashMap::new(),
            total_bid_shares: 0,
            total_ask_shares: 0,
        }
    }

    /// Current cached total of live shares resting on `side`.
    pub fn total_shares(&self, side: Side) -> u64 {
        match side {
            Side::Bid => self.total_bid_shares,
            Side::Ask => self.total_ask_shares,
        }
    }

    fn levels(&self, side: Side) -> &SkipMap<Cents, PriceLevel> {
        match side {
            Side::Bid => &self.bids,
            Side::Ask => &self.asks,
        }
    }

    fn add_total(&mut self, side: Side, amount: u64) {
        match side {
            Side::Bid => self.total_bid_shares += amount,
            Side::Ask => self.total_ask_shares += amount,
        }
    }

    fn sub_total(&mut self, side: Side, amount: u64) {
        match side {
            Side::Bid => self.total_bid_shares -= amount,
            Side::Ask => self.total_ask_shares -= amount,
        }
    }

    /// Inserts a new order. Returns `false`, leaving every index and
    /// total untouched, if `order.id` already names a live order — the
    /// source's duplicate-id behavior, but applied as a full no-op
    /// rather than partially mutating the book (§9).
    pub fn insert_order(&mut self, order: Order) -> bool {
        if self.orders.contains_key(&order.id) {
            return false;
        }

        let side = order.side;
        let price = order.price;
        let size = order.size;

        self.levels(side)
            .get_or_insert(price, PriceLevel::new(price, 0))
            .value()
            .add(size);
        self.orders.insert(order.id.clone(), order);
        self.add_total(side, size);
        true
    }

    /// Looks up an order's side and price by id, for REDUCE's initial
    /// lookup step. Returns `None` if the id names no live order.
    pub fn lookup_order(&self, id: &OrderId) -> Option<(Side, Cents)> {
        self.orders.get(id).map(|o| (o.side, o.price))
    }

    /// Applies a REDUCE: clamps `amount` to the order's remaining size,
    /// decrements the order (deleting it if it reaches zero), decrements
    /// the corresponding level (deleting it if it reaches zero), and
    /// decrements the side total.
    ///
    /// Returns `Ok(None)` if `id` names no live order — the caller logs
    /// and skips, per the error taxonomy (§7). Returns `Err` if the
    /// level backing a known order has vanished or gone negative, which
    /// is a fatal invariant violation (§4.4).
    pub fn reduce_order(
        &mut self,
        id: &OrderId,
        amount: u64,
    ) -> Result<Option<ReduceOutcome>, BookError> {
        let (side, price, clamped, drained) = {
            let mut entry = match self.orders.get_mut(id) {
                Some(entry) => entry,
                None => return Ok(None),
            };
            let clamped = amount.min(entry.size);
            entry.size -= clamped;
            (entry.side, entry.price, clamped, entry.size == 0)
        };

        if drained {
            self.orders.remove(id);
        }

        self.reduce_level(side, price, clamped)?;
        self.sub_total(side, clamped);

        Ok(Some(ReduceOutcome { side, amount: clamped }))
    }

    /// Decrements the level at `(side, price)` by `amount`, removing it
    /// if the aggregate reaches zero. A negative result, or a missing
    /// level, is a fatal invariant violation.
    fn reduce_level(&mut self, side: Side, price: Cents, amount: u64) -> Result<(), BookError> {
        let levels = self.levels(side);
        let entry = levels
            .get(&price)
            .ok_or(BookError::MissingLevel { side, price })?;
        let new_size = entry.value().sub(amount).map_err(|()| BookError::NegativeLevel {
            side,
            price,
            amount,
        })?;
        if new_size == 0 {
            drop(entry);
            levels.remove(&price);
        }
        Ok(())
    }

    /// Yields price levels on `side` in the order a consumer of liquidity
    /// would sweep them: ascending on ASK, descending on BID.
    pub fn iterate_best_to_worst(&self, side: Side) -> Box<dyn Iterator<Item = (Cents, u64)> + '_> {
        match side {
            Side::Ask => Box::new(
                self.asks
                    .iter()
                    .map(|entry| (*entry.key(), entry.value().aggregate_size())),
            ),
            Side::Bid => Box::new(
                self.bids
                    .iter()
                    .rev()
                    .map(|entry| (*entry.key(), entry.value().aggregate_size())),
            ),
        }
    }
}

impl Default for Book {
    fn default() -> Self {
        Self::new()
    }
}
