use crate::maze::{Coord, Direction, Maze, Path, get_unvisited_neighbors};

/// One cell whose branches are being explored.
struct Branch {
    cell: Coord,
    /// Unvisited neighbors as seen on entering the cell, used for every branch
    neighbors: [bool; 4],
    /// Index into [`Direction::ALL`] of the next branch to try
    next: usize,
    /// Shortest path to the finish found below this cell so far
    best: Option<Path>,
}

impl Branch {
    /// `cell` must already be marked in `visited`.
    fn new(cell: Coord, visited: &Maze) -> Self {
        Branch {
            cell,
            neighbors: get_unvisited_neighbors(cell, visited),
            next: 0,
            best: None,
        }
    }
}

/// Replaces `best` only by a strictly shorter path, so earlier branches win ties.
fn keep_shorter(best: &mut Option<Path>, found: Path) {
    if best.as_ref().is_none_or(|b| found.len() < b.len()) {
        *best = Some(found);
    }
}

/// Exhaustive depth-first search.
///
/// Every branch of every cell is explored (west, north, east, south), and each cell
/// reports the shortest path to `finish` among its branches. There is no heuristic.
/// The branches a cell may take are fixed when the cell is entered, while the one
/// visitation grid is shared by all of them: deeper cells see what earlier siblings
/// claimed, but a later sibling may still step straight onto the finish and win with a
/// shorter path. On a perfect maze this yields the unique path.
///
/// The path lives in a single buffer grown on descent and shrunk on return; it is
/// cloned only when `finish` is reached.
pub fn solve_exhaustive(maze: &Maze, start: Coord, finish: Coord) -> Option<Path> {
    let mut visited = maze.clone();
    let mut path = vec![start];
    visited.mark_visited(start);
    if start == finish {
        return Some(path);
    }

    let mut branches = vec![Branch::new(start, &visited)];
    while let Some(branch) = branches.last_mut() {
        if let Some(&direction) = Direction::ALL.get(branch.next) {
            branch.next += 1;
            let cell = branch.cell;
            if !(branch.neighbors[direction as usize] && maze.is_open(cell, direction)) {
                continue;
            }

            let next = direction.step(cell);
            visited.mark_visited(next);
            path.push(next);
            if next == finish {
                tracing::trace!("[solve] reached {:?} in {} steps", finish, path.len() - 1);
                keep_shorter(&mut branch.best, path.clone());
                path.pop();
            } else {
                branches.push(Branch::new(next, &visited));
            }
        } else {
            let Some(done) = branches.pop() else {
                break;
            };
            path.pop();
            match branches.last_mut() {
                Some(parent) => {
                    if let Some(found) = done.best {
                        keep_shorter(&mut parent.best, found);
                    }
                }
                None => return done.best,
            }
        }
    }

    None
}
