//! Diagnostics for the `knight-paths` binary.
//!
//! The path or JSON report is the only thing written to stdout. Search milestones, the `--stats`
//! depth counts and errors all go to stderr.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Installs the stderr subscriber for one run of the binary.
///
/// `main` passes `"info"` when `--stats` is given, so the depth counts and search milestones are
/// shown, and `"warn"` otherwise. A valid `RUST_LOG` overrides that default, e.g.
/// `RUST_LOG=knight_paths=debug knight-paths A1 H8` adds one line per expanded square.
pub fn init(default_directive: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
