//! A streaming limit-order-book pricer.
//!
//! Reads a feed of `ADD`/`REDUCE` commands for a single instrument and, on
//! every command that changes the touched side's liquidity, reports the
//! marginal cost of sweeping a fixed target share count — or `NA` if the
//! side does not currently hold enough shares to quote.
//!
//! The crate is organized the way the pricing pipeline itself is: money
//! arithmetic ([`money`]), the indexed book ([`book`]), the mutator that
//! applies commands to it ([`mutator`]), the quote engine that decides
//! what to print ([`quote`]), the line-oriented feed format ([`feed`]),
//! and [`pricer`], which ties all of the above into one value per
//! instrument.

pub mod book;
pub mod cli;
pub mod feed;
pub mod money;
pub mod mutator;
pub mod pricer;
pub mod quote;

pub use pricer::{LineOutcome, Pricer, PricerError};
