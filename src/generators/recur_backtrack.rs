use rand::Rng;

use crate::{
    generators::DirectionWeights,
    maze::{Coord, Maze, get_unvisited_neighbors},
};

/// Randomized depth-first backtracker.
///
/// `maze` must be blank (see [`Maze::blank`]) and `start` one of its cell positions.
/// Each step marks the top of the stack visited, then either carves towards an
/// unvisited neighbor chosen with `weights` or backtracks. When the stack empties every
/// cell position is joined to `start` by exactly one path.
///
/// Returns the number of passages carved.
pub fn recursive_backtrack<R: Rng>(
    maze: &mut Maze,
    start: Coord,
    weights: DirectionWeights,
    rng: &mut R,
) -> usize {
    // Scratch copy: only cell positions get marked here, walls are carved into `maze`
    let mut visited = maze.clone();
    let mut cells = vec![start];
    let mut carved = 0;

    while let Some(&cell) = cells.last() {
        visited.mark_visited(cell);

        let neighbors = get_unvisited_neighbors(cell, &visited);
        if neighbors.contains(&true) {
            let direction = weights.pick(neighbors, rng);
            maze.carve(cell, direction);
            carved += 1;
            let next = direction.step(cell);
            tracing::trace!("[generate] {:?} -> {:?} ({:?})", cell, next, direction);
            cells.push(next);
        } else {
            // Dead end, backtrack
            cells.pop();
        }
    }

    carved
}
