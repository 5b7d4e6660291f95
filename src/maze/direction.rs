use super::Coord;

/// The four cardinal moves between cell positions.
/// The discriminant is the index used by the neighbor arrays and the generator's weight table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    West = 0,
    North = 1,
    East = 2,
    South = 3,
}

impl Direction {
    /// All directions in their fixed priority order.
    pub const ALL: [Direction; 4] = [
        Direction::West,
        Direction::North,
        Direction::East,
        Direction::South,
    ];

    /// The cell position two steps away, skipping over the wall lattice.
    ///
    /// Callers must check the move with [`super::get_unvisited_neighbors`] first;
    /// stepping off the low edge underflows.
    pub fn step(self, (row, col): Coord) -> Coord {
        match self {
            Direction::West => (row, col - 2),
            Direction::North => (row - 2, col),
            Direction::East => (row, col + 2),
            Direction::South => (row + 2, col),
        }
    }

    /// The wall-lattice position between `cell` and its neighbor in this direction.
    pub fn between(self, (row, col): Coord) -> Coord {
        match self {
            Direction::West => (row, col - 1),
            Direction::North => (row - 1, col),
            Direction::East => (row, col + 1),
            Direction::South => (row + 1, col),
        }
    }
}
