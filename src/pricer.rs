//! The top-level [`Pricer`]: owns the book, the per-side quote memos, and
//! the target size, and turns one feed line into zero or one output line
//! (§2, §9 "Global state").

use thiserror::Error;

use crate::book::{Book, BookError, Side};
use crate::feed::{self, FeedError};
use crate::money;
use crate::mutator::{self, Touch};
use crate::quote::{self, QuoteMemo};

/// A fatal error: a structural invariant of the book was violated.
/// Per the error taxonomy (§7), there is no recovery — the caller logs
/// this and aborts.
#[derive(Debug, Error)]
#[error(transparent)]
pub struct PricerError(#[from] BookError);

/// The pricer: one instrument's book, its two quote memos, and the
/// configured target share count `T`.
pub struct Pricer {
    book: Book,
    bid_memo: QuoteMemo,
    ask_memo: QuoteMemo,
    target: u64,
    warn_on_clamp: bool,
}

impl Pricer {
    /// Creates an empty pricer quoting the cost of sweeping `target`
    /// shares.
    pub fn new(target: u64) -> Self {
        Pricer {
            book: Book::new(),
            bid_memo: QuoteMemo::new(),
            ask_memo: QuoteMemo::new(),
            target,
            warn_on_clamp: false,
        }
    }

    /// Enables logging a diagnostic whenever a REDUCE clamps to less than
    /// the requested amount (§9 "over-reduction semantics").
    pub fn with_warn_on_clamp(mut self, warn_on_clamp: bool) -> Self {
        self.warn_on_clamp = warn_on_clamp;
        self
    }

    /// Parses and applies one feed line, returning the output line to
    /// print, if any.
    ///
    /// Malformed lines and unknown REDUCE ids are reported via the `Err`
    /// arm of the inner `Result` only for genuinely fatal conditions;
    /// feed-level problems are surfaced through the returned
    /// [`LineOutcome`] so the caller can log them at `warn` without
    /// aborting.
    pub fn process_line(&mut self, line: &str) -> Result<LineOutcome, PricerError> {
        let command = match feed::parse_line(line) {
            Ok(command) => command,
            Err(err) => return Ok(LineOutcome::Rejected(err)),
        };

        let timestamp = command.timestamp().to_string();
        let touch = mutator::apply(&mut self.book, &command, self.warn_on_clamp)?;

        let Some(touch) = touch else {
            return Ok(LineOutcome::NoOp);
        };

        match self.decide(&timestamp, touch) {
            Some(output) => Ok(LineOutcome::Output(output)),
            None => Ok(LineOutcome::NoOp),
        }
    }

    fn decide(&mut self, timestamp: &str, touch: Touch) -> Option<String> {
        let marginal = quote::marginal(&self.book, touch.side, self.target);
        let memo = match touch.side {
            Side::Bid => &mut self.bid_memo,
            Side::Ask => &mut self.ask_memo,
        };

        let emitted = memo.observe(marginal)?;
        let side_letter = quote::output_side(touch.side);
        let value = match emitted {
            Some(cents) => money::format_price(cents),
            None => "NA".to_string(),
        };
        Some(format!("{timestamp} {side_letter} {value}"))
    }
}

/// What happened to one input line.
#[derive(Debug)]
pub enum LineOutcome {
    /// The line produced a quote to print.
    Output(String),
    /// The line was applied but produced no quote (no touch, or touch
    /// without a change in the touched side's marginal price).
    NoOp,
    /// The line could not be parsed into a command. Carries the reason
    /// for the caller to log.
    Rejected(FeedError),
}
