use std::path::PathBuf;

use clap::Parser;
use tracing::level_filters::LevelFilter;

use mazegen::{generators::Generator, maze::Coord, solvers::Solver};

#[derive(Parser, Debug)]
#[command(name = "mazegen")]
#[command(about = "Generate a perfect maze and walk a path through it")]
pub struct Args {
    /// Grid size in characters; even sizes are rounded up to the next odd number
    #[arg(short, long, default_value_t = 7)]
    pub size: usize,

    /// Seed for reproducible generation
    #[arg(long)]
    pub seed: Option<u64>,

    /// How the backtracker picks directions
    #[arg(short, long, value_enum, default_value_t = Generator::Weighted)]
    pub generator: Generator,

    /// Search used to find the path
    #[arg(long, value_enum, default_value_t = Solver::Exhaustive)]
    pub solver: Solver,

    /// Finish cell as ROW,COL (defaults to the bottom-right cell)
    #[arg(long, value_name = "ROW,COL", value_parser = parse_cell)]
    pub finish: Option<Coord>,

    /// Pick the finish cell at random
    #[arg(long, conflicts_with = "finish")]
    pub random_finish: bool,

    /// Solve a maze saved to FILE instead of generating one
    #[arg(long, value_name = "FILE", conflicts_with_all = ["size", "generator", "save"])]
    pub load: Option<PathBuf>,

    /// Save the generated maze to FILE
    #[arg(long, value_name = "FILE")]
    pub save: Option<PathBuf>,

    /// Colour the printed maze
    #[arg(long)]
    pub color: bool,

    /// Sets the logger's verbosity level
    #[arg(short, long, value_name = "VERBOSITY", default_value_t = LevelFilter::WARN)]
    pub verbosity: LevelFilter,

    /// Write logs to FILE instead of stderr
    #[arg(long, value_name = "FILE")]
    pub log_file: Option<PathBuf>,
}

fn parse_cell(value: &str) -> Result<Coord, String> {
    let (row, col) = value
        .split_once(',')
        .ok_or_else(|| format!("expected ROW,COL, got {value:?}"))?;
    let parse = |s: &str| {
        s.trim()
            .parse::<usize>()
            .map_err(|e| format!("{s:?} is not a coordinate: {e}"))
    };
    Ok((parse(row)?, parse(col)?))
}
