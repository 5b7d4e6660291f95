mod dfs;
mod exhaustive;

pub use dfs::solve_dfs;
pub use exhaustive::solve_exhaustive;

use crate::maze::{Coord, Maze, Path};

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Solver {
    Dfs,
    Exhaustive,
}

impl std::fmt::Display for Solver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Solver::Dfs => write!(f, "Depth-First Search (DFS)"),
            Solver::Exhaustive => write!(f, "Exhaustive Depth-First Search"),
        }
    }
}

/// Finds a path between two cell positions of a carved maze.
///
/// `start` and `finish` must be cell positions of `maze` (both coordinates odd and in
/// bounds). The maze itself is only read; each call scratches on its own copy.
/// Returns `None` if `finish` cannot be reached.
pub fn solve_maze(maze: &Maze, solver: Solver, start: Coord, finish: Coord) -> Option<Path> {
    let path = match solver {
        Solver::Dfs => solve_dfs(maze, start, finish),
        Solver::Exhaustive => solve_exhaustive(maze, start, finish),
    };
    match &path {
        Some(path) => tracing::debug!(
            "[solve] {} found {} cells from {:?} to {:?}",
            solver,
            path.len(),
            start,
            finish
        ),
        None => tracing::debug!("[solve] {} found no path to {:?}", solver, finish),
    }
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        generators::{Generator, generate_maze},
        maze::{Direction, GridCell},
    };

    fn generated(size: usize, seed: u64) -> Maze {
        let mut maze = Maze::blank(size);
        generate_maze(&mut maze, Generator::Weighted, (1, 1), Some(seed));
        maze
    }

    /// Direction from `a` to the cell two steps away, if they are lattice neighbors.
    fn direction_between(a: Coord, b: Coord) -> Option<Direction> {
        Direction::ALL.into_iter().find(|d| {
            let (row, col) = a;
            let fits = match d {
                Direction::West => col >= 2,
                Direction::North => row >= 2,
                _ => true,
            };
            fits && d.step(a) == b
        })
    }

    fn assert_valid_path(maze: &Maze, path: &[Coord], start: Coord, finish: Coord) {
        assert_eq!(path.first(), Some(&start));
        assert_eq!(path.last(), Some(&finish));
        for pair in path.windows(2) {
            let direction = direction_between(pair[0], pair[1])
                .unwrap_or_else(|| panic!("{:?} and {:?} are not adjacent", pair[0], pair[1]));
            assert!(maze.is_open(pair[0], direction), "wall between {pair:?}");
        }
    }

    #[test]
    fn test_both_solvers_on_generated_mazes() {
        for seed in 0..10 {
            let maze = generated(15, seed);
            let cells = maze.cell_positions().collect::<Vec<_>>();
            for &finish in cells.iter().step_by(5) {
                for solver in [Solver::Dfs, Solver::Exhaustive] {
                    let path = solve_maze(&maze, solver, (1, 1), finish).unwrap();
                    assert_valid_path(&maze, &path, (1, 1), finish);
                }
            }
        }
    }

    #[test]
    fn test_exhaustive_matches_single_path() {
        for seed in 0..10 {
            let maze = generated(13, seed);
            let cells = maze.cell_positions().collect::<Vec<_>>();
            for &start in cells.iter().step_by(7) {
                for &finish in cells.iter().step_by(3) {
                    let dfs = solve_maze(&maze, Solver::Dfs, start, finish).unwrap();
                    let exhaustive = solve_maze(&maze, Solver::Exhaustive, start, finish).unwrap();
                    assert_eq!(dfs.len(), exhaustive.len());
                    // A tree has exactly one simple path
                    assert_eq!(dfs, exhaustive);
                }
            }
        }
    }

    #[test]
    fn test_exhaustive_shortcuts_a_loop() {
        // (1,1) - (1,3)
        //   |       |
        // (3,1) - (3,3)
        let mut maze = Maze::blank(5);
        maze.carve((1, 1), Direction::East);
        maze.carve((1, 1), Direction::South);
        maze.carve((1, 3), Direction::South);
        maze.carve((3, 1), Direction::East);

        let dfs = solve_maze(&maze, Solver::Dfs, (1, 1), (3, 1)).unwrap();
        assert_eq!(dfs, vec![(1, 1), (1, 3), (3, 3), (3, 1)]);
        let exhaustive = solve_maze(&maze, Solver::Exhaustive, (1, 1), (3, 1)).unwrap();
        assert_eq!(exhaustive, vec![(1, 1), (3, 1)]);
        assert_valid_path(&maze, &exhaustive, (1, 1), (3, 1));
    }

    #[test]
    fn test_paths_are_simple() {
        let maze = generated(21, 99);
        let path = solve_maze(&maze, Solver::Exhaustive, (1, 1), (19, 19)).unwrap();
        let mut seen = path.clone();
        seen.sort_unstable();
        seen.dedup();
        assert_eq!(seen.len(), path.len());
    }

    #[test]
    fn test_unsolvable_is_none() {
        let maze = Maze::blank(7);
        for solver in [Solver::Dfs, Solver::Exhaustive] {
            assert_eq!(solve_maze(&maze, solver, (1, 1), (5, 5)), None);
        }
    }

    #[test]
    fn test_seven_by_seven_scenario() {
        let mut maze = generated(7, 2020);
        let path = solve_maze(&maze, Solver::Exhaustive, (1, 1), (5, 5)).unwrap();
        assert_valid_path(&maze, &path, (1, 1), (5, 5));

        // Carved steps along the route plus the starting cell
        let steps = path
            .windows(2)
            .filter(|pair| {
                direction_between(pair[0], pair[1]).is_some_and(|d| maze.is_open(pair[0], d))
            })
            .count();
        assert_eq!(path.len(), steps + 1);

        maze.mark_route(&path);
        let marked = maze
            .cell_positions()
            .filter(|&c| maze[c] == GridCell::ROUTE)
            .count();
        assert_eq!(marked, path.len());
        assert_eq!(maze[(1, 1)], GridCell::ROUTE);
        assert_eq!(maze[(5, 5)], GridCell::ROUTE);
    }
}
