use std::path::Path;

use super::{GridCell, Maze, grid::Grid};
use crate::error::MazeError;

impl Maze {
    /// Serializes the maze as one line of symbols per row, each line terminated by `\n`.
    pub fn to_text(&self) -> String {
        self.grid()
            .rows()
            .map(|row| {
                let mut line = row.iter().map(GridCell::symbol).collect::<String>();
                line.push('\n');
                line
            })
            .collect()
    }

    /// Parses the text format. Dimensions are inferred from the line count and length;
    /// neither squareness nor odd sizes are enforced.
    pub fn from_text(text: &str) -> Result<Self, MazeError> {
        let rows = text
            .lines()
            .enumerate()
            .map(|(row, line)| {
                line.chars()
                    .enumerate()
                    .map(|(col, symbol)| {
                        GridCell::try_from(symbol)
                            .map_err(|symbol| MazeError::UnknownSymbol { row, col, symbol })
                    })
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;

        if let Some(expected) = rows.first().map(Vec::len) {
            if let Some((row, found)) = rows
                .iter()
                .map(Vec::len)
                .enumerate()
                .find(|&(_, len)| len != expected)
            {
                return Err(MazeError::RaggedRow {
                    row,
                    expected,
                    found,
                });
            }
        }

        Ok(Maze::from_grid(Grid::from_rows(rows)))
    }
}

/// Writes the maze to `path`, replacing any existing file.
pub fn save_maze(maze: &Maze, path: impl AsRef<Path>) -> Result<(), MazeError> {
    std::fs::write(path.as_ref(), maze.to_text())?;
    tracing::debug!("[io] saved maze to {}", path.as_ref().display());
    Ok(())
}

/// Reads a maze saved by [`save_maze`].
pub fn load_maze(path: impl AsRef<Path>) -> Result<Maze, MazeError> {
    let text = std::fs::read_to_string(path.as_ref())?;
    let maze = Maze::from_text(&text)?;
    tracing::debug!(
        "[io] loaded {}x{} maze from {}",
        maze.height(),
        maze.width(),
        path.as_ref().display()
    );
    Ok(maze)
}
