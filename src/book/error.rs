//! Fatal invariant violations.
//!
//! Anything in this enum means the book's redundant indexes have gone out
//! of sync with each other — a bug in the mutator, not a malformed feed.
//! Per the error taxonomy, these are never recovered from: the caller logs
//! and aborts the process.

use thiserror::Error;

use super::Side;

/// A structural invariant of the indexed book was violated.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum BookError {
    /// A REDUCE clamped correctly but the level still went negative.
    #[error("price level {side} @ {price} went negative after reducing by {amount}")]
    NegativeLevel {
        /// Side of the level.
        side: Side,
        /// Price of the level, in cents.
        price: u64,
        /// Amount that was subtracted.
        amount: u64,
    },

    /// A live order's `(side, price)` pair has no corresponding level.
    #[error("a live order references price level {side} @ {price}, which does not exist")]
    MissingLevel {
        /// Side the order claims to be on.
        side: Side,
        /// Price the order claims to be at.
        price: u64,
    },
}
