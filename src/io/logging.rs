//! Tracing subscriber setup for the command-line tool

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// How much diagnostic output to emit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    /// Warnings and errors only
    Quiet,
    /// Stage progress messages
    Normal,
    /// Per-tile decisions
    Verbose,
}

impl Verbosity {
    /// Select a verbosity from the command-line flags, `quiet` winning
    pub const fn from_flags(quiet: bool, verbose: bool) -> Self {
        if quiet {
            Self::Quiet
        } else if verbose {
            Self::Verbose
        } else {
            Self::Normal
        }
    }

    /// Filter directive applied when `RUST_LOG` is not set
    pub const fn default_directive(self) -> &'static str {
        match self {
            Self::Quiet => "photomosaic=warn",
            Self::Normal => "photomosaic=info",
            Self::Verbose => "photomosaic=debug",
        }
    }
}

/// Install the global subscriber, writing to stderr
///
/// `RUST_LOG` takes precedence over the verbosity level. Calling this more
/// than once leaves the first subscriber in place.
pub fn init_logging(verbosity: Verbosity) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(verbosity.default_directive()));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}
