//! Command-line surface (§6, §10.2): one positional target size, plus the
//! diagnostic and verbosity flags called for by the ambient stack (§10.5).

use clap::Parser;

/// Streaming limit-order-book pricer.
///
/// Reads ADD/REDUCE commands from standard input and prints a quote line
/// each time the marginal cost of sweeping `target` shares on the touched
/// side changes.
#[derive(Debug, Parser)]
#[command(version, about)]
pub struct Args {
    /// Target share count to quote the marginal cost of sweeping.
    #[arg(value_parser = clap::value_parser!(u64).range(1..))]
    pub target: u64,

    /// Log a diagnostic when a REDUCE clamps to a lower amount than
    /// requested (§7, §9 "over-reduction semantics").
    #[arg(long)]
    pub warn_on_clamp: bool,

    /// Increase log verbosity; repeatable (`-v`, `-vv`).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
