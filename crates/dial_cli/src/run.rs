use std::fmt;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::Path;
use std::time::Instant;

use dial_sssp::{
    Instance, InputError, Weight, WeightPolicy, bidirectional_binary_heap, bidirectional_dial,
    shortest_distance_binary_heap, shortest_distance_dial,
};

use crate::cli::{Algorithm, CheckArgs, Cli, Command, SolveArgs};
use crate::error::CliError;

/// A computed distance in whichever domain the algorithm worked in.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Distance {
    Integer(u64),
    Real(f64),
}

impl Distance {
    pub fn is_unreachable(self) -> bool {
        match self {
            Self::Integer(d) => d.is_infinite(),
            Self::Real(d) => d.is_infinite(),
        }
    }

    pub fn as_f64(self) -> f64 {
        match self {
            Self::Integer(d) if d.is_infinite() => f64::INFINITY,
            Self::Integer(d) => d as f64,
            Self::Real(d) => d,
        }
    }
}

// Unreachable renders as `inf` in both domains.
impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_unreachable() {
            return f.write_str("inf");
        }
        match self {
            Self::Integer(d) => write!(f, "{d}"),
            Self::Real(d) => write!(f, "{d}"),
        }
    }
}

pub fn dispatch(cli: &Cli) -> Result<(), CliError> {
    match &cli.command {
        Command::Solve(args) => solve_command(args),
        Command::Check(args) => check_command(args),
    }
}

fn solve_command(args: &SolveArgs) -> Result<(), CliError> {
    let instance = read_instance(args.input.as_deref())?;

    let start = Instant::now();
    let distance = solve(&instance, args.algorithm, args.weights.into())?;
    let elapsed = start.elapsed();

    tracing::debug!(algorithm = args.algorithm.label(), elapsed = ?elapsed, "solve");
    if args.benchmark {
        eprintln!("Time = {:.6} ms", elapsed.as_secs_f64() * 1_000.0);
    }

    println!("{distance}");
    Ok(())
}

fn check_command(args: &CheckArgs) -> Result<(), CliError> {
    let instance = read_instance(args.input.as_deref())?;
    let policy = args.weights.into();

    let reference = solve(&instance, Algorithm::Dijkstra, policy)?;
    let mut failed = 0;
    for algorithm in Algorithm::ALL {
        let distance = solve(&instance, algorithm, policy)?;
        let ok = within_tolerance(distance, reference, args.tolerance);
        if !ok {
            failed += 1;
            tracing::warn!(
                algorithm = algorithm.label(),
                got = %distance,
                expected = %reference,
                "distance outside tolerance"
            );
        }
        println!(
            "{:<20} {:<24} {}",
            algorithm.label(),
            distance.to_string(),
            if ok { "ok" } else { "MISMATCH" }
        );
    }

    if failed > 0 {
        return Err(CliError::Disagreement {
            failed,
            total: Algorithm::ALL.len(),
        });
    }
    Ok(())
}

pub fn solve(
    instance: &Instance,
    algorithm: Algorithm,
    policy: WeightPolicy,
) -> Result<Distance, InputError> {
    let (s, d) = (instance.source(), instance.target());
    let distance = match algorithm {
        Algorithm::Dijkstra => {
            Distance::Real(shortest_distance_binary_heap(&instance.real_graph(), s, d))
        }
        Algorithm::Dial => {
            Distance::Integer(shortest_distance_dial(&instance.integer_graph(policy)?, s, d))
        }
        Algorithm::Bidirectional => {
            Distance::Real(bidirectional_binary_heap(&instance.real_graph(), s, d))
        }
        Algorithm::BidirectionalDial => {
            Distance::Integer(bidirectional_dial(&instance.integer_graph(policy)?, s, d))
        }
    };
    Ok(distance)
}

/// Relative comparison against `expected`; two unreachable results agree.
pub fn within_tolerance(got: Distance, expected: Distance, tolerance: f64) -> bool {
    match (got.is_unreachable(), expected.is_unreachable()) {
        (true, true) => true,
        (false, false) => {
            let (got, expected) = (got.as_f64(), expected.as_f64());
            (got - expected).abs() <= tolerance * expected.abs()
        }
        _ => false,
    }
}

fn read_instance(path: Option<&Path>) -> Result<Instance, CliError> {
    let instance = match path {
        None => Instance::read_from(io::stdin().lock())?,
        Some(p) if p.as_os_str() == "-" => Instance::read_from(io::stdin().lock())?,
        Some(p) => {
            let file = File::open(p).map_err(|source| CliError::Open {
                path: p.to_path_buf(),
                source,
            })?;
            Instance::read_from(BufReader::new(file))?
        }
    };
    Ok(instance)
}
