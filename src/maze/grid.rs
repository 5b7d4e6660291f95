use super::cell::GridCell;

/// Row-major storage for the characters of a maze.
/// Coordinates are `(row, col)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    data: Box<[GridCell]>,
    width: usize,
    height: usize,
}

impl Grid {
    pub fn new(width: usize, height: usize, cell: GridCell) -> Self {
        let data = vec![cell; width * height].into_boxed_slice();
        Grid {
            data,
            width,
            height,
        }
    }

    /// Builds a grid from already-validated rows of equal length.
    pub fn from_rows(rows: Vec<Vec<GridCell>>) -> Self {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        debug_assert!(rows.iter().all(|r| r.len() == width));
        let data = rows.into_iter().flatten().collect::<Vec<_>>().into_boxed_slice();
        Grid {
            data,
            width,
            height,
        }
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Exactly `height` slices of `width` cells, even when `width` is zero.
    pub fn rows(&self) -> impl Iterator<Item = &[GridCell]> {
        (0..self.height).map(move |row| &self.data[row * self.width..(row + 1) * self.width])
    }

    fn ravel_index(&self, row: usize, col: usize) -> usize {
        debug_assert!(row < self.height && col < self.width);
        row * self.width + col
    }
}

impl std::ops::Index<(usize, usize)> for Grid {
    type Output = GridCell;

    fn index(&self, index: (usize, usize)) -> &Self::Output {
        &self.data[self.ravel_index(index.0, index.1)]
    }
}

impl std::ops::IndexMut<(usize, usize)> for Grid {
    fn index_mut(&mut self, index: (usize, usize)) -> &mut Self::Output {
        let idx = self.ravel_index(index.0, index.1);
        &mut self.data[idx]
    }
}
