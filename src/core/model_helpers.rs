use crate::core::{GameStatus, Grid};

impl Grid {
    pub fn has_won(&self) -> bool {
        self.iter_rows().all(|row| row.iter().all(|&lit| !lit))
    }

    pub fn lit_count(&self) -> usize {
        self.iter_lit().count()
    }
}

pub fn has_won(grid: &Grid) -> bool {
    grid.has_won()
}

impl GameStatus {
    pub fn of(grid: &Grid) -> GameStatus {
        if grid.has_won() {
            GameStatus::Won
        } else {
            GameStatus::Playing
        }
    }
}
