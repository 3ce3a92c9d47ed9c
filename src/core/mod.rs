mod bounds;
mod consts;
mod generate;
mod grid;
mod model_helpers;
mod models;
mod update;

pub use consts::*;
pub use generate::{generate, generate_unsolved};
pub use grid::Grid;
pub use model_helpers::has_won;
pub use models::{Coordinate, GameChangeType, GameStatus, GameUpdate, UserAction};
pub use update::{affected_cells, step};
#[cfg(test)]
pub use update::toggle_around;
