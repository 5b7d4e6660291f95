use crossterm::style::{Color, StyledContent, Stylize};

use std::fmt;

/// Represents a position in the grid, which can be either a path or a wall.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridCell {
    Path(PathType),
    Wall,
}

impl GridCell {
    pub const EMPTY: GridCell = GridCell::Path(PathType::Empty);
    pub const WALL: GridCell = GridCell::Wall;
    pub const VISITED: GridCell = GridCell::Path(PathType::Visited);
    pub const ROUTE: GridCell = GridCell::Path(PathType::Route);

    /// The character this cell is stored as in the text format.
    pub fn symbol(&self) -> char {
        match self {
            GridCell::Wall => '#',
            GridCell::Path(PathType::Empty) => ' ',
            GridCell::Path(PathType::Visited) => '*',
            GridCell::Path(PathType::Route) => '.',
        }
    }

    /// The symbol with the terminal colour used by [`crate::maze::Maze::render`].
    pub fn styled(&self) -> StyledContent<char> {
        let symbol = self.symbol();
        match self {
            GridCell::Wall => symbol.with(Color::DarkGrey),
            GridCell::Path(PathType::Empty) => symbol.with(Color::Reset),
            GridCell::Path(PathType::Visited) => symbol.with(Color::Blue),
            GridCell::Path(PathType::Route) => symbol.with(Color::Yellow),
        }
    }
}

/// Represents different types of open cells in the maze.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathType {
    /// An open cell or a carved passage that no traversal has claimed.
    #[default]
    Empty,
    /// A cell position claimed by a generation or solve pass.
    Visited,
    /// A cell on a solution route, only used for display.
    Route,
}

impl TryFrom<char> for GridCell {
    type Error = char;

    fn try_from(symbol: char) -> Result<Self, Self::Error> {
        match symbol {
            '#' => Ok(GridCell::WALL),
            ' ' => Ok(GridCell::EMPTY),
            '*' => Ok(GridCell::VISITED),
            '.' => Ok(GridCell::ROUTE),
            other => Err(other),
        }
    }
}

impl fmt::Display for GridCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
