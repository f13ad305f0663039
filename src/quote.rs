//! The quote engine (§4.4): the marginal-price sweep and the
//! output-suppression memo that decides when a new quote is actually worth
//! printing.

use crate::book::{Book, Side};
use crate::money::Cents;

/// Sweeps `side` from best to worst, accumulating shares until `target` is
/// reached, and returns the total cost of acquiring exactly `target`
/// shares at the levels crossed.
///
/// Returns `None` if the side does not currently hold at least `target`
/// shares in aggregate — the quote is unavailable, not zero.
pub fn marginal(book: &Book, side: Side, target: u64) -> Option<Cents> {
    if target == 0 || book.total_shares(side) < target {
        return None;
    }

    let mut remaining = target;
    let mut cost: u128 = 0;
    for (price, size) in book.iterate_best_to_worst(side) {
        let take = remaining.min(size);
        cost += price as u128 * take as u128;
        remaining -= take;
        if remaining == 0 {
            break;
        }
    }
    Some(cost as Cents)
}

/// Which output side letter a quote for a given book side is printed
/// under: liquidity consumed from the bid side prices a sell, and vice
/// versa (§4.4).
pub fn output_side(touched: Side) -> char {
    match touched {
        Side::Bid => 'S',
        Side::Ask => 'B',
    }
}

/// Tracks the last quote emitted for one side, so the engine only prints
/// when something has actually changed (§4.4, §7).
#[derive(Debug, Default)]
pub struct QuoteMemo {
    last_emitted: Option<Cents>,
}

impl QuoteMemo {
    /// A memo that has never emitted anything.
    pub fn new() -> Self {
        QuoteMemo { last_emitted: None }
    }

    /// Records the result of a fresh sweep and returns the price to print,
    /// or `None` if nothing changed since the last emission.
    ///
    /// A transition into or out of "unavailable" always counts as a
    /// change; two consecutive unavailable sweeps never re-emit.
    pub fn observe(&mut self, current: Option<Cents>) -> Option<Option<Cents>> {
        if current == self.last_emitted {
            return None;
        }
        self.last_emitted = current;
        Some(current)
    }
}
