use std::path::PathBuf;

use dial_sssp::InputError;
use thiserror::Error;

/// Exit codes:
/// - 1: `check` found algorithms that disagree
/// - 2: usage error (reported by clap)
/// - 3: unreadable or invalid input
#[derive(Debug, Error)]
pub enum CliError {
    #[error("cannot open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error(transparent)]
    Input(#[from] InputError),

    #[error("{failed} of {total} algorithms disagree with the reference distance")]
    Disagreement { failed: usize, total: usize },
}

impl CliError {
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Disagreement { .. } => 1,
            Self::Open { .. } | Self::Input(_) => 3,
        }
    }
}
