//! Prints a shortest knight path between two squares of an empty chessboard.

mod exit_codes;
mod logging;

use std::process::ExitCode;

use clap::{error::ErrorKind, Parser};
use knight_paths::{
    BoardBounds, BoardBoundsError, DepthCounts, InvalidSquare, KnightPath, NoCallback,
    SearchBuilder, SearchBuilderError, SearchCallback, SearchOutcome, Square,
};
use serde_derive::Serialize;
use thiserror::Error;

#[derive(Debug, Parser)]
#[command(
    name = "knight-paths",
    version,
    about = "Shortest sequence of knight moves between two squares",
    arg_required_else_help = true
)]
struct Cli {
    /// Square the knight starts on, e.g. `A1`.
    start: String,

    /// Square the knight has to reach, e.g. `H8`.
    end: String,

    /// Print a JSON report instead of the bare path.
    #[arg(long)]
    json: bool,

    /// Log how many squares were discovered at each depth.
    #[arg(long)]
    stats: bool,

    /// Number of files on the board (A, B, ...).
    #[arg(long, default_value_t = 8)]
    files: u8,

    /// Number of ranks on the board (1, 2, ...).
    #[arg(long, default_value_t = 8)]
    ranks: u8,
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Bounds(#[from] BoardBoundsError),

    #[error(transparent)]
    Square(#[from] InvalidSquare),

    #[error(transparent)]
    Search(#[from] SearchBuilderError),

    #[error("failed to encode report: {0}")]
    Report(#[from] serde_json::Error),
}

impl CliError {
    fn exit_code(&self) -> u8 {
        match self {
            Self::Bounds(_) => exit_codes::INVALID_BOUNDS,
            Self::Square(_) | Self::Search(_) => exit_codes::INVALID_SQUARE,
            Self::Report(_) => exit_codes::OUTPUT_FAILED,
        }
    }
}

#[derive(Debug, Serialize)]
struct Report<'a> {
    start: Square,
    end: Square,
    moves: Option<usize>,
    path: Option<&'a KnightPath>,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => return ExitCode::from(print_usage(&err)),
    };

    logging::init(if cli.stats { "info" } else { "warn" });

    match run(&cli) {
        Ok(output) => {
            println!("{output}");
            ExitCode::from(exit_codes::OK)
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::from(err.exit_code())
        }
    }
}

/// Prints help, version or usage text for a failed parse and picks the exit code.
///
/// A wrong number of squares only earns the usage text, while a malformed `--files` or `--ranks`
/// value is an invalid board.
fn print_usage(err: &clap::Error) -> u8 {
    if err.print().is_err() {
        return exit_codes::OUTPUT_FAILED;
    }

    usage_exit_code(err.kind())
}

fn usage_exit_code(kind: ErrorKind) -> u8 {
    match kind {
        ErrorKind::ValueValidation | ErrorKind::InvalidValue => exit_codes::INVALID_BOUNDS,
        _ => exit_codes::OK,
    }
}

fn run(cli: &Cli) -> Result<String, CliError> {
    let bounds = BoardBounds::new(cli.files, cli.ranks)?;
    let start = bounds.parse_square(&cli.start)?;
    let end = bounds.parse_square(&cli.end)?;

    let outcome = if cli.stats {
        let mut counts = DepthCounts::default();
        let outcome = search(bounds, start, end, &mut counts)?;

        for (depth, new) in counts.discovered.iter().enumerate() {
            tracing::info!("depth {depth} new {new}");
        }
        tracing::info!(
            "expanded {} squares, discovered {}",
            counts.expanded,
            counts.total_discovered(),
        );

        outcome
    } else {
        search(bounds, start, end, NoCallback)?
    };

    render(start, end, &outcome, cli.json)
}

fn search(
    bounds: BoardBounds,
    start: Square,
    end: Square,
    callback: impl SearchCallback,
) -> Result<SearchOutcome, SearchBuilderError> {
    SearchBuilder::new()
        .source(start)
        .destination(end)
        .bounds(bounds)
        .callback(callback)
        .run_no_defaults()
}

fn render(
    start: Square,
    end: Square,
    outcome: &SearchOutcome,
    json: bool,
) -> Result<String, CliError> {
    if json {
        let path = outcome.path();
        let report = Report {
            start,
            end,
            moves: path.map(KnightPath::moves),
            path,
        };
        return Ok(serde_json::to_string(&report)?);
    }

    Ok(match outcome {
        SearchOutcome::Found(path) => path.to_string(),
        SearchOutcome::Exhausted => format!("no path found from {start} to {end}"),
    })
}
