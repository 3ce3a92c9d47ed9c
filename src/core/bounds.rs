use crate::core::Coordinate;

/// A bounding box with one corner fixed at 0,0 and assumed to have positive extent
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Bounds {
    pub rows: usize,
    pub cols: usize,
}

impl Bounds {
    pub fn new(rows: usize, cols: usize) -> Bounds {
        Bounds { rows, cols }
    }

    pub fn contains(&self, pos: &Coordinate) -> bool {
        self.index_of(pos).is_some()
    }

    pub fn area(&self) -> usize {
        self.rows * self.cols
    }

    /// Row-major offset of `pos`, or None when it lies outside the box
    pub fn index_of(&self, pos: &Coordinate) -> Option<usize> {
        let row = usize::try_from(pos.row).ok()?;
        let col = usize::try_from(pos.col).ok()?;
        if row >= self.rows || col >= self.cols {
            return None;
        }
        Some(row * self.cols + col)
    }
}
