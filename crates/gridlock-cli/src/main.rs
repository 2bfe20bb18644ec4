//! Command-line solver for 9x9 number-place puzzles.
//!
//! The program reads a puzzle as nine lines of nine whitespace-separated
//! integers, where `0` marks an empty cell, and prints the solution in the
//! same layout.
//!
//! # Usage
//!
//! ```sh
//! gridlock < puzzle.txt
//! ```
//!
//! Read from a file instead of standard input:
//!
//! ```sh
//! gridlock puzzle.txt
//! ```
//!
//! Pick the cell selection strategy and print search statistics:
//!
//! ```sh
//! gridlock --selection row-major --stats < puzzle.txt
//! ```
//!
//! The exit code distinguishes the three possible results: `0` when a
//! solution is printed, `1` when the puzzle has no solution, and `2` when
//! the input is rejected.

use std::{
    fs::File,
    io::{self, BufRead, BufReader},
    path::{Path, PathBuf},
    process,
};

use clap::{Parser, ValueEnum};
use gridlock_core::{DigitGrid, GridValueError};
use gridlock_solver::{BacktrackSolver, CellSelection, Outcome, SearchStats};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum SelectionArg {
    MinimumRemaining,
    RowMajor,
}

impl From<SelectionArg> for CellSelection {
    fn from(arg: SelectionArg) -> Self {
        match arg {
            SelectionArg::MinimumRemaining => Self::MinimumRemaining,
            SelectionArg::RowMajor => Self::RowMajor,
        }
    }
}

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Puzzle file to read. Reads standard input when omitted.
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Cell selection strategy for the search.
    #[arg(long, value_name = "STRATEGY", default_value = "minimum-remaining")]
    selection: SelectionArg,

    /// Print search statistics to standard error after solving.
    #[arg(long)]
    stats: bool,
}

/// Reasons the puzzle input can be rejected.
#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
enum InputError {
    #[display("{_0}")]
    Io(io::Error),
    #[display("{_0}")]
    Read(ReadGridError),
    #[display("{_0}")]
    Value(GridValueError),
}

/// Malformed puzzle text.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
enum ReadGridError {
    #[display("expected 9 puzzle lines, found {count}")]
    WrongLineCount { count: usize },
    #[display("line {line}: expected 9 values, found {count}")]
    WrongValueCount { line: usize, count: usize },
    #[display("line {line}: invalid cell value {token:?}")]
    InvalidValue { line: usize, token: String },
}

fn main() {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();

    let grid = match read_input(args.file.as_deref()) {
        Ok(grid) => grid,
        Err(err) => {
            eprintln!("Invalid puzzle input: {err}");
            process::exit(2);
        }
    };

    let solver = BacktrackSolver::with_selection(args.selection.into());
    log::debug!("solving with {:?} cell selection", solver.selection());

    let mut stats = SearchStats::new();
    let outcome = match solver.solve_with_stats(&grid, &mut stats) {
        Ok(outcome) => outcome,
        Err(err) => {
            eprintln!("Invalid puzzle: {err}");
            process::exit(2);
        }
    };

    if args.stats {
        print_stats(&stats);
    }

    match outcome {
        Outcome::Solved(solution) => print!("{}", format_grid(&solution)),
        Outcome::Unsolvable => {
            eprintln!("No solution exists.");
            process::exit(1);
        }
    }
}

fn read_input(file: Option<&Path>) -> Result<DigitGrid, InputError> {
    match file {
        Some(path) => {
            log::debug!("reading puzzle from {}", path.display());
            read_grid(BufReader::new(File::open(path)?))
        }
        None => read_grid(io::stdin().lock()),
    }
}

/// Reads nine lines of nine whitespace-separated integers. Blank lines are
/// skipped, so puzzles may be padded with empty lines.
fn read_grid(reader: impl BufRead) -> Result<DigitGrid, InputError> {
    let mut values = [[0_u8; 9]; 9];
    let mut count = 0;
    for line in reader.lines() {
        let line = line?;
        let text = line.trim();
        if text.is_empty() {
            continue;
        }
        if count < 9 {
            values[count] = parse_line(count + 1, text)?;
        }
        count += 1;
    }
    if count != 9 {
        return Err(ReadGridError::WrongLineCount { count }.into());
    }
    Ok(DigitGrid::try_from_values(&values)?)
}

fn parse_line(line: usize, text: &str) -> Result<[u8; 9], InputError> {
    let mut values = [0; 9];
    let mut count = 0;
    for token in text.split_whitespace() {
        if count < 9 {
            values[count] = token.parse().map_err(|_| ReadGridError::InvalidValue {
                line,
                token: token.to_owned(),
            })?;
        }
        count += 1;
    }
    if count != 9 {
        return Err(ReadGridError::WrongValueCount { line, count }.into());
    }
    Ok(values)
}

fn format_grid(grid: &DigitGrid) -> String {
    let mut out = String::new();
    for row in grid.to_values() {
        out.push_str(&row.map(|value| value.to_string()).join(" "));
        out.push('\n');
    }
    out
}

fn print_stats(stats: &SearchStats) {
    eprintln!("Stats:");
    eprintln!("  assignments: {}", stats.assignments());
    eprintln!("  backtracks: {}", stats.backtracks());
    eprintln!("  max depth: {}", stats.max_depth());
}
