mod cli;
mod logging;

use std::{io::Write, process::ExitCode};

use clap::Parser;
use rand::seq::IteratorRandom;

use mazegen::{
    MazeError,
    generators::{generate_maze, get_rng},
    maze::{Coord, Maze, load_maze, save_maze},
    solvers::solve_maze,
};

use crate::cli::Args;

/// Every maze is entered at its top-left cell.
const ENTRANCE: Coord = (1, 1);

fn main() -> ExitCode {
    let args = Args::parse();
    let _guard = match logging::init(args.verbosity, args.log_file.as_deref()) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    match run(&args, &mut std::io::stdout()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

/// Builds or loads a maze, prints it to `out`, then prints it again with the solution
/// overlaid.
fn run(args: &Args, out: &mut impl Write) -> Result<(), MazeError> {
    let mut maze = match &args.load {
        Some(path) => load_maze(path)?,
        None => {
            let mut maze = Maze::blank(args.size);
            if !maze.is_cell_position(ENTRANCE) {
                return Err(MazeError::TooSmall { size: args.size });
            }
            generate_maze(&mut maze, args.generator, ENTRANCE, args.seed);
            if let Some(path) = &args.save {
                save_maze(&maze, path)?;
            }
            maze
        }
    };

    let finish = pick_finish(&maze, args);
    for cell in [ENTRANCE, finish] {
        if !maze.is_cell_position(cell) {
            return Err(MazeError::InvalidCell {
                row: cell.0,
                col: cell.1,
            });
        }
    }
    tracing::info!(
        "[main] solving {}x{} maze from {:?} to {:?} with {}",
        maze.height(),
        maze.width(),
        ENTRANCE,
        finish,
        args.solver
    );

    maze.render(out, args.color)?;
    match solve_maze(&maze, args.solver, ENTRANCE, finish) {
        Some(path) => {
            maze.mark_route(&path);
            maze.render(out, args.color)?;
        }
        None => writeln!(out, "Unsolvable")?,
    }
    Ok(())
}

/// The requested finish, a random cell position, or the bottom-right cell position.
fn pick_finish(maze: &Maze, args: &Args) -> Coord {
    if let Some(finish) = args.finish {
        return finish;
    }
    let bottom_right = (
        maze.height().saturating_sub(2),
        maze.width().saturating_sub(2),
    );
    if args.random_finish {
        let mut rng = get_rng(args.seed);
        return maze
            .cell_positions()
            .choose(&mut rng)
            .unwrap_or(bottom_right);
    }
    bottom_right
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(argv: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("mazegen").chain(argv.iter().copied())).unwrap()
    }

    fn run_to_string(args: &Args) -> Result<String, MazeError> {
        let mut out = Vec::new();
        run(args, &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_prints_maze_then_route() {
        let output = run_to_string(&args(&["--seed", "1"])).unwrap();
        let grids = output.split("\n\n").filter(|g| !g.is_empty()).collect::<Vec<_>>();
        assert_eq!(grids.len(), 2);
        assert!(!grids[0].contains('.'));
        // (1,1) is the second symbol of the second line
        assert!(grids[1].lines().nth(1).unwrap().starts_with("# . "));
    }

    #[test]
    fn test_too_small() {
        for size in ["0", "1"] {
            let err = run_to_string(&args(&["--size", size])).unwrap_err();
            assert!(matches!(err, MazeError::TooSmall { .. }));
        }
    }

    #[test]
    fn test_even_finish_is_rejected() {
        let err = run_to_string(&args(&["--finish", "2,2"])).unwrap_err();
        assert!(matches!(err, MazeError::InvalidCell { row: 2, col: 2 }));

        let err = run_to_string(&args(&["--finish", "9,1"])).unwrap_err();
        assert!(matches!(err, MazeError::InvalidCell { row: 9, col: 1 }));
    }

    #[test]
    fn test_sealed_maze_is_unsolvable() {
        let path = std::env::temp_dir().join(format!("mazegen-main-{}.txt", std::process::id()));
        save_maze(&Maze::blank(7), &path).unwrap();
        let result = run_to_string(&args(&["--load", path.to_str().unwrap()]));
        std::fs::remove_file(&path).unwrap();
        let output = result.unwrap();
        assert!(output.ends_with("\n\nUnsolvable\n"));
    }

    #[test]
    fn test_pick_finish() {
        let maze = Maze::blank(9);
        assert_eq!(pick_finish(&maze, &args(&[])), (7, 7));
        assert_eq!(pick_finish(&maze, &args(&["--finish", "3,5"])), (3, 5));

        let random = pick_finish(&maze, &args(&["--random-finish", "--seed", "4"]));
        assert!(maze.is_cell_position(random));
        assert_eq!(
            random,
            pick_finish(&maze, &args(&["--random-finish", "--seed", "4"]))
        );
    }
}
