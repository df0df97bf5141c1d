use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use spiral::prelude::*;
use spiral::types::require_positive;
use tracing::{debug, info};

/// Puzzle input used by `solve` when no other input is given.
const PUZZLE_INPUT: i64 = 289_326;

#[derive(Parser, Debug)]
#[command(
    name = "spiral",
    version,
    about = "Coordinates and neighbour sums on the infinite square spiral"
)]
struct Cli {
    /// File holding the input integer; used when no value is given inline.
    #[arg(short, long, global = true, env = "SPIRAL_INPUT")]
    input: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Manhattan distance from the centre to a spiral index.
    Distance {
        /// 1-based spiral index.
        #[arg(allow_negative_numbers = true)]
        index: Option<i64>,
    },
    /// Lattice coordinate of a spiral index.
    Coord {
        /// 1-based spiral index.
        #[arg(allow_negative_numbers = true)]
        index: Option<i64>,
    },
    /// First neighbour-sum value strictly greater than a threshold.
    Stress {
        /// Threshold the value must exceed.
        #[arg(allow_negative_numbers = true)]
        threshold: Option<i64>,
        /// Give up after visiting this many cells.
        #[arg(long)]
        max_cells: Option<usize>,
    },
    /// Run both parts of the puzzle on one input.
    Solve,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    debug!(?cli, "parsed arguments");
    let output = execute(&cli)?;
    println!("{output}");
    Ok(())
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init();
}

fn execute(cli: &Cli) -> Result<String> {
    let input = cli.input.as_deref();
    match &cli.command {
        Command::Distance { index } => {
            let index = require_positive("index", resolve(*index, input)?)?;
            Ok(distance_from_origin(index)?.to_string())
        }
        Command::Coord { index } => {
            let index = require_positive("index", resolve(*index, input)?)?;
            Ok(coordinate_of(index)?.to_string())
        }
        Command::Stress {
            threshold,
            max_cells,
        } => {
            let threshold = require_positive("threshold", resolve(*threshold, input)?)?;
            let config = WalkConfig {
                threshold,
                max_cells: *max_cells,
            };
            let cell = run(&config)?;
            info!(index = cell.index, point = %cell.point, "threshold passed");
            Ok(cell.value.to_string())
        }
        Command::Solve => {
            let raw = match input {
                Some(path) => read_input(path)?,
                None => PUZZLE_INPUT,
            };
            let target = require_positive("input", raw)?;
            info!(input = target, "solving both parts");
            let distance = distance_from_origin(target)?;
            let value = first_value_exceeding(target)?;
            Ok(format!("Distance: {distance}\nStress test: {value}"))
        }
    }
}

/// Inline value if present, otherwise the contents of `--input`.
fn resolve(inline: Option<i64>, input: Option<&Path>) -> Result<i64> {
    match (inline, input) {
        (Some(v), _) => Ok(v),
        (None, Some(path)) => read_input(path),
        (None, None) => bail!("no input: pass a value or --input <FILE>"),
    }
}

fn read_input(path: &Path) -> Result<i64> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read input file {}", path.display()))?;
    parse_input(&text).with_context(|| format!("invalid input in {}", path.display()))
}

fn parse_input(text: &str) -> Result<i64> {
    let trimmed = text.trim();
    trimmed
        .parse::<i64>()
        .with_context(|| format!("expected an integer, got {trimmed:?}"))
}
