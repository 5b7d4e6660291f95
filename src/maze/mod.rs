pub mod cell;
mod direction;
mod grid;
mod text;

use std::{fmt, io::Write};

use crossterm::{queue, style};

pub use cell::{GridCell, PathType};
pub use direction::Direction;
pub use grid::Grid;
pub use text::{load_maze, save_maze};

/// A `(row, col)` position in the grid.
pub type Coord = (usize, usize);

/// Cells from start to finish in traversal order.
pub type Path = Vec<Coord>;

/// A square-lattice maze.
///
/// Positions with at least one even coordinate form the wall lattice: `#` until carved
/// open. Positions with both coordinates odd are cell positions, the nodes of the maze.
/// The same type doubles as a visitation grid: a deep copy on which visited cell
/// positions are marked [`GridCell::VISITED`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Maze {
    grid: Grid,
}

impl Maze {
    /// Creates a blank maze: every lattice position is a wall, every cell position is open.
    /// An even `size` is promoted to the next odd number so the border lands on the lattice.
    pub fn blank(size: usize) -> Self {
        let size = if size % 2 == 0 { size + 1 } else { size };
        let mut grid = Grid::new(size, size, GridCell::WALL);
        (1..size).step_by(2).for_each(|row| {
            (1..size).step_by(2).for_each(|col| {
                grid[(row, col)] = GridCell::EMPTY;
            });
        });
        Maze { grid }
    }

    pub fn from_grid(grid: Grid) -> Self {
        Maze { grid }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.grid.height()
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.grid.width()
    }

    /// Checks if `coord` is an in-bounds position with both coordinates odd.
    pub fn is_cell_position(&self, coord: Coord) -> bool {
        let (row, col) = coord;
        row % 2 == 1 && col % 2 == 1 && row < self.height() && col < self.width()
    }

    /// All cell positions, row by row.
    pub fn cell_positions(&self) -> impl Iterator<Item = Coord> {
        let width = self.width();
        (1..self.height())
            .step_by(2)
            .flat_map(move |row| (1..width).step_by(2).map(move |col| (row, col)))
    }

    /// Opens the wall-lattice position between `cell` and its neighbor in `direction`.
    pub fn carve(&mut self, cell: Coord, direction: Direction) {
        self.grid[direction.between(cell)] = GridCell::EMPTY;
    }

    /// Checks that the lattice position between `cell` and its neighbor in `direction`
    /// is anything but a wall.
    pub fn is_open(&self, cell: Coord, direction: Direction) -> bool {
        self.grid[direction.between(cell)] != GridCell::WALL
    }

    /// Marks a cell position as claimed by the current traversal.
    pub fn mark_visited(&mut self, cell: Coord) {
        self.grid[cell] = GridCell::VISITED;
    }

    /// Overlays a solution path with [`GridCell::ROUTE`] markers for display.
    pub fn mark_route(&mut self, path: &[Coord]) {
        path.iter().for_each(|&cell| self.grid[cell] = GridCell::ROUTE);
    }

    /// Writes the maze in the display layout, optionally coloured.
    pub fn render(&self, out: &mut impl Write, colored: bool) -> std::io::Result<()> {
        if !colored {
            write!(out, "{}", self)?;
            return out.flush();
        }
        for row in self.grid.rows() {
            for cell in row {
                queue!(out, style::PrintStyledContent(cell.styled()), style::Print(' '))?;
            }
            queue!(out, style::Print('\n'))?;
        }
        queue!(out, style::Print('\n'))?;
        out.flush()
    }
}

impl std::ops::Index<Coord> for Maze {
    type Output = GridCell;

    fn index(&self, index: Coord) -> &Self::Output {
        &self.grid[index]
    }
}

impl std::ops::IndexMut<Coord> for Maze {
    fn index_mut(&mut self, index: Coord) -> &mut Self::Output {
        &mut self.grid[index]
    }
}

/// Every symbol followed by a space, one row per line, then a blank line.
impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.grid.rows() {
            for cell in row {
                write!(f, "{} ", cell)?;
            }
            writeln!(f)?;
        }
        writeln!(f)
    }
}

/// Reports, per [`Direction`] index, whether the cell position two steps away exists
/// and is still unvisited in `visited`.
///
/// Only visitation state is consulted, never walls. The neighbor itself must fit inside
/// the grid: a column move west needs `col > 2`, east needs `col < width - 2`, and the
/// same for rows.
pub fn get_unvisited_neighbors(cell: Coord, visited: &Maze) -> [bool; 4] {
    let (row, col) = cell;
    let is_unvisited = |coord: Coord| visited[coord] == GridCell::EMPTY;
    [
        col > 2 && is_unvisited((row, col - 2)),
        row > 2 && is_unvisited((row - 2, col)),
        col + 2 < visited.width() && is_unvisited((row, col + 2)),
        row + 2 < visited.height() && is_unvisited((row + 2, col)),
    ]
}
