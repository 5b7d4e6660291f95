use crate::maze::{Coord, Direction, Maze, Path, get_unvisited_neighbors};

/// Single-path depth-first search.
///
/// Moves are tried in the fixed order west, north, east, south and taken only through
/// carved passages to unvisited cells. Returns the stack the first time `finish` is on
/// top, which on a perfect maze is the unique path. `None` if the stack runs dry.
pub fn solve_dfs(maze: &Maze, start: Coord, finish: Coord) -> Option<Path> {
    let mut visited = maze.clone();
    let mut cells = vec![start];

    while let Some(&cell) = cells.last() {
        visited.mark_visited(cell);
        if cell == finish {
            return Some(cells);
        }

        let neighbors = get_unvisited_neighbors(cell, &visited);
        match Direction::ALL
            .into_iter()
            .find(|&d| neighbors[d as usize] && maze.is_open(cell, d))
        {
            Some(direction) => cells.push(direction.step(cell)),
            None => {
                cells.pop();
            }
        }
    }

    None
}
