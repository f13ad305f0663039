//! The indexed order book: the data model (§3) and the indexed-book
//! component (§4.2) of the pricer.

mod error;
mod index;

pub use error::BookError;
pub use index::Book;

use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::money::Cents;

/// Which side of the book an order or level belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// Resting buy interest.
    Bid,
    /// Resting sell interest.
    Ask,
}

impl FromStr for Side {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "B" => Ok(Side::Bid),
            "S" => Ok(Side::Ask),
            _ => Err(()),
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Bid => write!(f, "B"),
            Side::Ask => write!(f, "S"),
        }
    }
}

/// An opaque, short order identifier. Feeds may reuse one after the order
/// it named is fully reduced away.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OrderId(Box<str>);

impl OrderId {
    /// Wraps a feed token as an order id, without validating its shape —
    /// the feed format treats order ids as opaque.
    pub fn new(token: impl Into<Box<str>>) -> Self {
        OrderId(token.into())
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single resting order, the unit of liquidity added to the book.
#[derive(Debug, Clone)]
pub struct Order {
    /// Unique identifier among currently-live orders.
    pub id: OrderId,
    /// Fixed at insert.
    pub side: Side,
    /// Fixed at insert, in cents.
    pub price: Cents,
    /// Remaining share count; strictly positive while live.
    pub size: u64,
    /// Opaque token from the ADD that created this order, carried only
    /// for diagnostic tracing — never used in ordering.
    pub timestamp: Box<str>,
}

/// The aggregation of every live order at one `(side, price)` pair.
///
/// `aggregate_size` is an atomic because the indexed book hands out shared
/// references to levels (via the skip-list index, §4.2) rather than
/// exclusive ones; the pricer itself is single-threaded (§5), but the
/// level's own mutation API has to assume a shared handle.
#[derive(Debug)]
pub struct PriceLevel {
    price: Cents,
    aggregate_size: AtomicU64,
}

impl PriceLevel {
    fn new(price: Cents, initial_size: u64) -> Self {
        PriceLevel {
            price,
            aggregate_size: AtomicU64::new(initial_size),
        }
    }

    /// Price of this level, in cents.
    pub fn price(&self) -> Cents {
        self.price
    }

    /// Current aggregate size of all live orders resting at this level.
    pub fn aggregate_size(&self) -> u64 {
        self.aggregate_size.load(Ordering::Relaxed)
    }

    fn add(&self, amount: u64) {
        self.aggregate_size.fetch_add(amount, Ordering::Relaxed);
    }

    /// Subtracts `amount`, returning the new aggregate. A result that
    /// would be negative is a fatal invariant violation and is reported
    /// to the caller rather than wrapping.
    fn sub(&self, amount: u64) -> Result<u64, ()> {
        let prev = self.aggregate_size.load(Ordering::Relaxed);
        if amount > prev {
            return Err(());
        }
        let new = prev - amount;
        self.aggregate_size.store(new, Ordering::Relaxed);
        Ok(new)
    }
}
