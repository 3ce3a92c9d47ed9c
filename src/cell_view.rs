use ratatui::style::{Color, Modifier, Style};
use crate::core::{Coordinate, Grid, UserAction};

pub const LIT_SYMBOL: &str = "██";
pub const UNLIT_SYMBOL: &str = "░░";

/// One board position as the player sees it. Holds no state beyond what the
/// grid says about its coordinate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellView {
    pub coordinate: Coordinate,
    pub is_lit: bool,
}

impl CellView {
    pub fn for_grid(grid: &Grid) -> Vec<Vec<CellView>> {
        grid.iter_rows()
            .enumerate()
            .map(|(row, cells)| {
                cells
                    .iter()
                    .enumerate()
                    .map(|(col, &is_lit)| CellView {
                        coordinate: Coordinate::new(row as i32, col as i32),
                        is_lit,
                    })
                    .collect()
            })
            .collect()
    }

    pub fn at(grid: &Grid, coordinate: Coordinate) -> CellView {
        CellView {
            coordinate,
            is_lit: grid.is_lit(&coordinate),
        }
    }

    pub fn id(&self) -> String {
        self.coordinate.to_string()
    }

    /// The only thing a cell does: ask for a toggle around its own coordinate
    pub fn on_activate(&self) -> UserAction {
        UserAction::Toggle(self.coordinate)
    }

    pub fn symbol(&self) -> &'static str {
        if self.is_lit { LIT_SYMBOL } else { UNLIT_SYMBOL }
    }

    pub fn style(&self, selected: bool) -> Style {
        let style = if self.is_lit {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        if selected {
            style.bg(Color::Blue).add_modifier(Modifier::BOLD)
        } else {
            style
        }
    }
}
