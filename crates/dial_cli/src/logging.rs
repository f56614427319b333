use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Initialize stderr logging from the CLI flags.
///
/// An explicit `--log-level` (or `DIAL_SSSP_LOG`) wins over `--verbose`. A bare
/// level applies to this binary and the library; anything containing `=` is
/// used as a full filter directive.
pub fn init_tracing(
    verbose: bool,
    log_level: Option<&str>,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let level = match (verbose, log_level) {
        (_, Some(level)) => level,
        (true, None) => "debug",
        (false, None) => "warn",
    };

    let filter = if level.contains('=') {
        EnvFilter::try_new(level)?
    } else {
        EnvFilter::try_new(format!("dial_sssp={level},sssp_query={level}"))?
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .compact()
                .with_target(false)
                .with_writer(std::io::stderr)
                .with_ansi(false),
        )
        .try_init()?;

    Ok(())
}
