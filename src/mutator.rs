//! The book mutator (§4.3): applies ADD and REDUCE commands to the
//! indexed book, keeping the cached side totals consistent.

use crate::book::{Book, BookError, Order, OrderId, Side};
use crate::money::Cents;

/// A single feed command, already validated and type-checked by the feed
/// adapter (§10.1). This is the mutator's only input.
#[derive(Debug, Clone)]
pub enum Command {
    /// Adds a new order to the book.
    Add {
        /// Echoed verbatim in any quote this command produces.
        timestamp: Box<str>,
        /// Must be unique among currently-live orders.
        order_id: OrderId,
        /// Side of the new order.
        side: Side,
        /// Limit price, in cents.
        price: Cents,
        /// Initial share count. Must be positive by construction at the
        /// feed boundary; the mutator does not re-validate it.
        size: u64,
    },
    /// Reduces (or fully cancels) an existing order.
    Reduce {
        /// Echoed verbatim in any quote this command produces.
        timestamp: Box<str>,
        /// The order to reduce.
        order_id: OrderId,
        /// The amount to reduce by; over-reduction is clamped, not an
        /// error (§4.3 step 2).
        amount: u64,
    },
}

impl Command {
    /// The timestamp token to echo in any quote this command produces.
    pub fn timestamp(&self) -> &str {
        match self {
            Command::Add { timestamp, .. } => timestamp,
            Command::Reduce { timestamp, .. } => timestamp,
        }
    }
}

/// The side a command touched — the quote engine (§4.4) re-sweeps this
/// side and compares the result against its own memo to decide what, if
/// anything, to emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Touch {
    /// The side whose total changed.
    pub side: Side,
}

/// Outcome of applying one command: either it touched a side (and the
/// quote engine should run), or it was a no-op that produces no output
/// (duplicate ADD, unknown REDUCE id — logged by the feed/main loop, not
/// here).
pub type ApplyOutcome = Result<Option<Touch>, BookError>;

/// Applies `cmd` to `book`, returning the side it touched so the quote
/// engine can react, or `None` if the command was a no-op.
///
/// When `warn_on_clamp` is set, a REDUCE that clamps to less than the
/// requested amount logs a diagnostic (§9 "over-reduction semantics").
pub fn apply(book: &mut Book, cmd: &Command, warn_on_clamp: bool) -> ApplyOutcome {
    match cmd {
        Command::Add {
            order_id,
            side,
            price,
            size,
            timestamp,
        } => Ok(apply_add(book, order_id, *side, *price, *size, timestamp)),
        Command::Reduce {
            order_id, amount, ..
        } => apply_reduce(book, order_id, *amount, warn_on_clamp),
    }
}

fn apply_add(
    book: &mut Book,
    order_id: &OrderId,
    side: Side,
    price: Cents,
    size: u64,
    timestamp: &str,
) -> Option<Touch> {
    let order = Order {
        id: order_id.clone(),
        side,
        price,
        size,
        timestamp: timestamp.into(),
    };
    if !book.insert_order(order) {
        return None; // duplicate id: full no-op, per §4.3 step 1.
    }
    Some(Touch { side })
}

fn apply_reduce(
    book: &mut Book,
    order_id: &OrderId,
    amount: u64,
    warn_on_clamp: bool,
) -> ApplyOutcome {
    let Some((side, _)) = book.lookup_order(order_id) else {
        return Ok(None); // unknown id: logged by caller, skipped here.
    };
    match book.reduce_order(order_id, amount)? {
        Some(outcome) => {
            if warn_on_clamp && outcome.amount < amount {
                tracing::warn!(
                    order_id = %order_id,
                    requested = amount,
                    applied = outcome.amount,
                    "REDUCE clamped to order's remaining size"
                );
            }
            Ok(Some(Touch { side }))
        }
        None => Ok(None),
    }
}
