use log::{debug, info, warn};
use crate::cell_view::CellView;
use crate::console_interface::ConsoleInput;
use crate::core::{
    affected_cells, step, Coordinate, GameChangeType, GameStatus, GameUpdate, Grid, UserAction,
};

pub struct GameRenderState {
    pub grid: Grid,
    pub status: GameStatus,
    pub cursor: Cursor,
    pub error: Option<String>,
    pub last_change: Option<GameChangeType>,
}

impl GameRenderState {
    pub fn new(grid: Grid) -> Self {
        GameRenderState {
            status: GameStatus::of(&grid),
            cursor: Cursor::default(),
            grid,
            error: None,
            last_change: None,
        }
    }

    /// Runs one action through `step`, swapping in the new grid as a whole on
    /// success and keeping the old one with an error message otherwise.
    pub fn apply(&mut self, action: UserAction) {
        match step(&self.grid, action) {
            GameUpdate::NextState(grid, change) => {
                debug!("{:?} -> {:?}, {} lit", action, change, grid.lit_count());
                self.grid = grid;
                self.status = GameStatus::of(&self.grid);
                self.error = None;
                self.last_change = Some(change);
                if self.status == GameStatus::Won {
                    info!("board cleared");
                }
            }
            GameUpdate::Error(err) => {
                warn!("{:?} rejected: {}", action, err);
                self.error = Some(err);
            }
        }
    }
}

/// What the interactive loop should do after an input was handled
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopControl {
    Redraw,
    Idle,
    NewGame,
    Quit,
}

impl GameRenderState {
    /// Once the board is dark only a new game or quitting is accepted;
    /// cell activations and cursor moves are dropped.
    pub fn handle(&mut self, input: ConsoleInput) -> LoopControl {
        match (self.status, input) {
            (_, ConsoleInput::Quit) => LoopControl::Quit,
            (_, ConsoleInput::NewGame) => LoopControl::NewGame,
            (_, ConsoleInput::Timeout) | (_, ConsoleInput::Unknown) => LoopControl::Idle,
            (GameStatus::Won, _) => LoopControl::Idle,
            (GameStatus::Playing, ConsoleInput::MoveCursor { d_row, d_col }) => {
                self.cursor = self.cursor.moved(d_row, d_col, &self.grid);
                LoopControl::Redraw
            }
            (GameStatus::Playing, ConsoleInput::ActivateSelected) => {
                self.activate(self.cursor.position);
                LoopControl::Redraw
            }
            (GameStatus::Playing, ConsoleInput::ActivateAt(at)) => {
                self.activate(at);
                LoopControl::Redraw
            }
        }
    }

    pub fn activate(&mut self, at: Coordinate) {
        let view = CellView::at(&self.grid, at);
        debug!(
            "cell {} activated (lit: {}), affects {:?}",
            view.id(),
            view.is_lit,
            affected_cells(&self.grid, at)
        );
        self.cursor.position = at;
        self.apply(view.on_activate());
    }
}

/// Keyboard selection; always kept on the board
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Cursor {
    pub position: Coordinate,
}

impl Cursor {
    pub fn moved(self, d_row: i32, d_col: i32, grid: &Grid) -> Cursor {
        let max_row = grid.rows() as i32 - 1;
        let max_col = grid.cols() as i32 - 1;
        let row = self.position.row.saturating_add(d_row).clamp(0, max_row);
        let col = self.position.col.saturating_add(d_col).clamp(0, max_col);
        Cursor {
            position: Coordinate::new(row, col),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn cursor_clamps_to_board() {
        let grid = Grid::new_with_size(2, 3, false).unwrap();
        let cursor = Cursor::default();

        assert_eq!(cursor.moved(-1, 0, &grid).position, Coordinate::new(0, 0));
        assert_eq!(cursor.moved(5, 5, &grid).position, Coordinate::new(1, 2));
        assert_eq!(cursor.moved(1, 1, &grid).position, Coordinate::new(1, 1));
    }

    #[test]
    fn apply_replaces_grid_and_clears_error() {
        let mut state = GameRenderState::new(Grid::new_with_size(3, 3, false).unwrap());
        state.error = Some("stale".to_string());

        state.apply(UserAction::Toggle(Coordinate::new(1, 1)));

        assert_eq!(state.grid.lit_count(), 5);
        assert_eq!(state.status, GameStatus::Playing);
        assert_eq!(state.error, None);
        assert_eq!(state.last_change, Some(GameChangeType::Toggled { affected: 5 }));
    }

    #[test]
    fn apply_keeps_grid_on_error() {
        let original = Grid::new_with_size(2, 2, true).unwrap();
        let mut state = GameRenderState::new(original.clone());

        state.apply(UserAction::Toggle(Coordinate::new(-1, 0)));

        assert_eq!(state.grid, original);
        assert!(state.error.is_some());
        assert_eq!(state.last_change, None);
    }

    #[test]
    fn won_board_ignores_activations() {
        let mut state = GameRenderState::new(Grid::new_with_size(2, 2, false).unwrap());
        assert_eq!(state.status, GameStatus::Won);

        for input in [
            ConsoleInput::ActivateAt(Coordinate::new(0, 0)),
            ConsoleInput::ActivateSelected,
            ConsoleInput::MoveCursor { d_row: 1, d_col: 0 },
        ] {
            assert_eq!(state.handle(input), LoopControl::Idle);
        }

        assert!(state.grid.has_won());
        assert_eq!(state.status, GameStatus::Won);
        assert_eq!(state.cursor, Cursor::default());
        assert_eq!(state.last_change, None);
    }

    #[test]
    fn won_board_accepts_new_game_and_quit() {
        let mut state = GameRenderState::new(Grid::new_with_size(1, 1, false).unwrap());

        assert_eq!(state.handle(ConsoleInput::NewGame), LoopControl::NewGame);
        assert_eq!(state.handle(ConsoleInput::Quit), LoopControl::Quit);
    }

    #[test]
    fn playing_board_forwards_activations() {
        let mut state = GameRenderState::new(Grid::new_with_size(3, 3, false).unwrap());
        state.status = GameStatus::Playing;

        let center = ConsoleInput::ActivateAt(Coordinate::new(1, 1));
        assert_eq!(state.handle(center), LoopControl::Redraw);
        assert_eq!(state.grid.lit_count(), 5);
        assert_eq!(state.cursor.position, Coordinate::new(1, 1));

        let up = ConsoleInput::MoveCursor { d_row: -1, d_col: 0 };
        assert_eq!(state.handle(up), LoopControl::Redraw);
        assert_eq!(state.handle(ConsoleInput::ActivateSelected), LoopControl::Redraw);
        assert_eq!(state.last_change, Some(GameChangeType::Toggled { affected: 4 }));
        assert_eq!(state.handle(ConsoleInput::Timeout), LoopControl::Idle);
    }

    #[test]
    fn winning_activation_switches_to_won() {
        let mut state = GameRenderState::new(Grid::new_with_size(1, 1, true).unwrap());

        assert_eq!(state.handle(ConsoleInput::ActivateSelected), LoopControl::Redraw);
        assert_eq!(state.status, GameStatus::Won);
        assert_eq!(state.handle(ConsoleInput::ActivateSelected), LoopControl::Idle);
        assert!(state.grid.has_won());
    }

    #[test]
    fn apply_reaches_won_status() {
        let mut state = GameRenderState::new(Grid::new_with_size(1, 1, true).unwrap());

        state.apply(UserAction::Toggle(Coordinate::new(0, 0)));

        assert_eq!(state.status, GameStatus::Won);
        assert_eq!(state.last_change, Some(GameChangeType::Won));
    }
}
