use serde::{Deserialize, Serialize};
use crate::core::bounds::Bounds;
use crate::core::{Coordinate, MAX_DIMENSION};
use crate::error::GridError;

/// Lit/unlit cells stored row-major. Dimensions are fixed at construction and
/// there is no public way to change a cell; transitions produce a new grid.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<bool>>", into = "Vec<Vec<bool>>")]
pub struct Grid {
    bounds: Bounds,
    cells: Vec<bool>,
}

impl Grid {
    pub fn new_with_size(rows: usize, cols: usize, default: bool) -> Result<Self, GridError> {
        check_dimensions(rows, cols)?;
        let bounds = Bounds::new(rows, cols);
        Ok(Grid {
            bounds,
            cells: vec![default; bounds.area()],
        })
    }

    pub(crate) fn from_fn<F>(rows: usize, cols: usize, mut cell: F) -> Self
    where
        F: FnMut(Coordinate) -> bool,
    {
        debug_assert!(check_dimensions(rows, cols).is_ok(), "{}x{} grid", rows, cols);
        let bounds = Bounds::new(rows, cols);
        let mut cells = Vec::with_capacity(bounds.area());
        for row in 0..rows {
            for col in 0..cols {
                cells.push(cell(Coordinate::new(row as i32, col as i32)));
            }
        }
        Grid { bounds, cells }
    }

    pub fn from_rows(rows: Vec<Vec<bool>>) -> Result<Self, GridError> {
        let cols = rows.first().map(|row| row.len()).unwrap_or(0);
        check_dimensions(rows.len(), cols)?;
        if let Some((index, row)) = rows.iter().enumerate().find(|(_, row)| row.len() != cols) {
            return Err(GridError::Ragged {
                row: index,
                expected: cols,
                found: row.len(),
            });
        }
        Ok(Grid {
            bounds: Bounds::new(rows.len(), cols),
            cells: rows.into_iter().flatten().collect(),
        })
    }

    pub fn rows(&self) -> usize {
        self.bounds.rows
    }

    pub fn cols(&self) -> usize {
        self.bounds.cols
    }

    pub fn contains(&self, pos: &Coordinate) -> bool {
        self.bounds.contains(pos)
    }

    pub fn get(&self, pos: &Coordinate) -> Option<bool> {
        self.bounds.index_of(pos).map(|index| self.cells[index])
    }

    /// Out of range positions read as unlit
    pub fn is_lit(&self, pos: &Coordinate) -> bool {
        self.get(pos).unwrap_or(false)
    }

    pub fn iter_rows(&self) -> impl Iterator<Item = &[bool]> {
        self.cells.chunks(self.bounds.cols)
    }

    pub fn iter_lit(&self) -> impl Iterator<Item = Coordinate> + '_ {
        let cols = self.bounds.cols;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, lit)| **lit)
            .map(move |(index, _)| Coordinate::new((index / cols) as i32, (index % cols) as i32))
    }

    /// Inverts one cell in place. Only reachable from inside the core, on a
    /// grid that has just been copied.
    pub(crate) fn flip(&mut self, pos: &Coordinate) -> bool {
        match self.bounds.index_of(pos) {
            Some(index) => {
                self.cells[index] = !self.cells[index];
                true
            }
            None => false,
        }
    }
}

fn check_dimensions(rows: usize, cols: usize) -> Result<(), GridError> {
    if rows == 0 || cols == 0 {
        return Err(GridError::Empty);
    }
    if rows > MAX_DIMENSION || cols > MAX_DIMENSION {
        return Err(GridError::TooLarge {
            rows,
            cols,
            max: MAX_DIMENSION,
        });
    }
    Ok(())
}

impl std::ops::Index<&Coordinate> for Grid {
    type Output = bool;

    fn index(&self, index: &Coordinate) -> &Self::Output {
        let offset = self
            .bounds
            .index_of(index)
            .unwrap_or_else(|| panic!("coordinate {} outside {}x{} grid", index, self.rows(), self.cols()));
        &self.cells[offset]
    }
}

impl TryFrom<Vec<Vec<bool>>> for Grid {
    type Error = GridError;

    fn try_from(rows: Vec<Vec<bool>>) -> Result<Self, Self::Error> {
        Grid::from_rows(rows)
    }
}

impl From<Grid> for Vec<Vec<bool>> {
    fn from(grid: Grid) -> Self {
        grid.iter_rows().map(|row| row.to_vec()).collect()
    }
}
