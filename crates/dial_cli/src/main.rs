//! `sssp-query`: shortest s-d distance with Dijkstra, Dial's bucket queue, or
//! their bidirectional variants.

mod cli;
mod error;
mod logging;
mod run;

use std::process::ExitCode;

use clap::Parser;

use cli::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref()) {
        eprintln!("warning: failed to initialize logging: {e}");
    }

    match run::dispatch(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(error = ?e, "command failed");
            eprintln!("error: {e}");
            ExitCode::from(e.exit_code())
        }
    }
}
