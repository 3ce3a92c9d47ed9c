use crate::core::{Coordinate, GameChangeType, GameUpdate, Grid, UserAction};

const PLUS_SHAPE: [(i32, i32); 5] = [(0, 0), (-1, 0), (1, 0), (0, -1), (0, 1)];

/// The in-range members of the plus shape centered on `at`
pub fn affected_cells(grid: &Grid, at: Coordinate) -> Vec<Coordinate> {
    PLUS_SHAPE
        .iter()
        .filter_map(|&(d_row, d_col)| at.offset(d_row, d_col))
        .filter(|pos| grid.contains(pos))
        .collect()
}

/// Returns a copy of `grid` with `at` and its four orthogonal neighbors
/// inverted. Positions off the board are skipped; `grid` itself is untouched.
pub fn toggle_around(grid: &Grid, at: Coordinate) -> Grid {
    let mut new_grid = grid.clone();
    for pos in affected_cells(grid, at) {
        new_grid.flip(&pos);
    }
    new_grid
}

pub fn step(grid: &Grid, action: UserAction) -> GameUpdate {
    let at = match action {
        UserAction::Toggle(at) => at,
    };

    if !grid.contains(&at) {
        return GameUpdate::Error("Cannot toggle outside the board".to_string());
    }

    let affected = affected_cells(grid, at).len();
    let new_grid = toggle_around(grid, at);
    let change = if new_grid.has_won() {
        GameChangeType::Won
    } else {
        GameChangeType::Toggled { affected }
    };
    GameUpdate::NextState(new_grid, change)
}
