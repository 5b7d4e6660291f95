use thiserror::Error;

/// Failures of the maze file collaborator and the driver's input checks.
/// The generation and solving algorithms never fail; an unsolvable maze is a `None` path.
#[derive(Debug, Error)]
pub enum MazeError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("row {row} has {found} symbols, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("unknown symbol {symbol:?} at row {row}, column {col}")]
    UnknownSymbol { row: usize, col: usize, symbol: char },

    #[error("({row}, {col}) is not a cell position of the maze")]
    InvalidCell { row: usize, col: usize },

    #[error("a maze of size {size} has no room for the entrance cell (1, 1)")]
    TooSmall { size: usize },
}
