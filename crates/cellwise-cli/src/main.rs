//! Command-line driver: read a puzzle file, run the solve loop, render the
//! result.

use std::{fs, io, path::PathBuf, process::ExitCode};

use cellwise_core::ParseGridError;
use cellwise_solver::{Board, DEFAULT_STEP_LIMIT, SolverError};
use clap::Parser;

/// Solves a 9x9 Sudoku puzzle by constraint propagation.
///
/// The puzzle file holds 81 cells read left to right, top to bottom:
/// digits 1-9 are givens, `.`, `_`, or `0` mark unknown cells, and
/// whitespace is ignored.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Path to the puzzle file.
    file: PathBuf,
    /// Render each cell as a 3x3 block of remaining candidates.
    #[arg(short, long)]
    details: bool,
    /// Maximum number of propagation steps before giving up.
    #[arg(long, default_value_t = DEFAULT_STEP_LIMIT)]
    max_steps: usize,
}

#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
enum CliError {
    #[display("failed to read puzzle: {_0}")]
    Io(io::Error),
    #[display("invalid puzzle: {_0}")]
    Parse(ParseGridError),
    #[display("solve aborted: {_0}")]
    Solve(SolverError),
}

fn main() -> ExitCode {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();
    match run(&args) {
        Ok(true) => ExitCode::SUCCESS,
        // Stalled is a reportable outcome, not a failure of the program.
        Ok(false) => ExitCode::from(2),
        Err(err) => {
            log::error!("{err}");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<bool, CliError> {
    let text = fs::read_to_string(&args.file)?;
    let mut board: Board = text.parse()?;
    let report = board.start_with_limit(args.max_steps)?;

    if report.solved {
        println!("solved in {} steps ({} commits)", report.steps, board.commits().len());
    } else {
        println!("not solved by propagation alone (stopped after {} steps)", report.steps);
    }
    println!("{}", board.grid());
    if args.details || !report.solved {
        println!();
        print!("{}", board.render(args.details));
    }
    Ok(report.solved)
}
