//! Command-line arguments for `sssp-query`.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use dial_sssp::WeightPolicy;

/// Shortest s-d distance in an undirected weighted graph.
///
/// Input format (whitespace separated): `N M S D` followed by `M` lines
/// `u v c`.
#[derive(Parser, Debug)]
#[command(name = "sssp-query")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Explicit log filter (e.g. `debug` or `dial_sssp=trace`)
    #[arg(long, global = true, env = "DIAL_SSSP_LOG")]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compute the distance with one algorithm and print it
    Solve(SolveArgs),

    /// Run every algorithm on the input and compare their answers
    Check(CheckArgs),
}

#[derive(Args, Debug)]
pub struct SolveArgs {
    /// Input file; `-` or omitted reads stdin
    pub input: Option<PathBuf>,

    #[arg(long, short, value_enum, default_value_t = Algorithm::BidirectionalDial)]
    pub algorithm: Algorithm,

    #[arg(long, short, value_enum, default_value_t = WeightMode::Round)]
    pub weights: WeightMode,

    /// Report solve time on stderr
    #[arg(long)]
    pub benchmark: bool,
}

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Input file; `-` or omitted reads stdin
    pub input: Option<PathBuf>,

    #[arg(long, short, value_enum, default_value_t = WeightMode::Round)]
    pub weights: WeightMode,

    /// Allowed relative deviation from the real-weighted Dijkstra answer
    #[arg(long, default_value_t = 0.01)]
    pub tolerance: f64,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum Algorithm {
    /// Binary-heap Dijkstra on real weights, stops at the destination
    Dijkstra,
    /// Dial-queue Dijkstra on integer weights, stops at the destination
    Dial,
    /// Bidirectional Dijkstra with binary heaps on real weights
    Bidirectional,
    /// Bidirectional Dijkstra with Dial queues on integer weights
    BidirectionalDial,
}

impl Algorithm {
    pub const ALL: [Algorithm; 4] = [
        Self::Dijkstra,
        Self::Dial,
        Self::Bidirectional,
        Self::BidirectionalDial,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Dijkstra => "dijkstra",
            Self::Dial => "dial",
            Self::Bidirectional => "bidirectional",
            Self::BidirectionalDial => "bidirectional-dial",
        }
    }
}

/// How fractional weights reach the integer (Dial) algorithms.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum WeightMode {
    /// Round to the nearest integer
    Round,
    /// Reject fractional weights
    Exact,
}

impl From<WeightMode> for WeightPolicy {
    fn from(mode: WeightMode) -> Self {
        match mode {
            WeightMode::Round => WeightPolicy::Round,
            WeightMode::Exact => WeightPolicy::Exact,
        }
    }
}
