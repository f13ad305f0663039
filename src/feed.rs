//! The feed adapter (§6, §10.1): tokenizes one input line into a
//! [`Command`], or reports why it couldn't.

use crate::book::{OrderId, Side};
use crate::money::{self, Cents};
use crate::mutator::Command;
use thiserror::Error;

/// A line that could not be turned into a command. Always non-fatal: the
/// caller logs this and moves on to the next line.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FeedError {
    /// The line had no tokens at all.
    #[error("empty line")]
    Empty,
    /// A required field was missing.
    #[error("missing field {0:?} in line {1:?}")]
    MissingField(&'static str, String),
    /// The operation letter was neither `A` nor `R`.
    #[error("unknown operation {0:?} in line {1:?}")]
    UnknownOperation(String, String),
    /// The side token was neither `B` nor `S`.
    #[error("invalid side {0:?} in line {1:?}")]
    InvalidSide(String, String),
    /// A numeric field did not parse.
    #[error("invalid number {0:?} in line {1:?}")]
    InvalidNumber(String, String),
}

/// Parses one whitespace-separated input line into a [`Command`].
pub fn parse_line(line: &str) -> Result<Command, FeedError> {
    let raw = line.to_string();
    let mut fields = line.split_whitespace();

    let timestamp = fields.next().ok_or(FeedError::Empty)?;
    let op = fields
        .next()
        .ok_or_else(|| FeedError::MissingField("operation", raw.clone()))?;
    let order_id = fields
        .next()
        .ok_or_else(|| FeedError::MissingField("order_id", raw.clone()))?;

    match op {
        "A" => {
            let side = fields
                .next()
                .ok_or_else(|| FeedError::MissingField("side", raw.clone()))?;
            let price = fields
                .next()
                .ok_or_else(|| FeedError::MissingField("price", raw.clone()))?;
            let size = fields
                .next()
                .ok_or_else(|| FeedError::MissingField("size", raw.clone()))?;

            let side: Side = side
                .parse()
                .map_err(|_| FeedError::InvalidSide(side.to_string(), raw.clone()))?;
            let price: Cents = money::parse_price(price)
                .map_err(|_| FeedError::InvalidNumber(price.to_string(), raw.clone()))?;
            let size: u64 = size
                .parse()
                .map_err(|_| FeedError::InvalidNumber(size.to_string(), raw.clone()))?;

            Ok(Command::Add {
                timestamp: timestamp.into(),
                order_id: OrderId::new(order_id),
                side,
                price,
                size,
            })
        }
        "R" => {
            let amount = fields
                .next()
                .ok_or_else(|| FeedError::MissingField("amount", raw.clone()))?;
            let amount: u64 = amount
                .parse()
                .map_err(|_| FeedError::InvalidNumber(amount.to_string(), raw.clone()))?;

            Ok(Command::Reduce {
                timestamp: timestamp.into(),
                order_id: OrderId::new(order_id),
                amount,
            })
        }
        other => Err(FeedError::UnknownOperation(other.to_string(), raw)),
    }
}
