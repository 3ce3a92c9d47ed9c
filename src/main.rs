// Lights Out in the terminal.
// Controls: arrows/WASD move the selection, Space/Enter or a mouse click toggles
// the cell and its four neighbors, N starts a new game, Q quits.
// Clear every light to win.
// Modes: `interactive` (default) or `print`. `--board <file>` starts from a
// board drawn with 'O' (lit) and '.' (unlit), or from its JSON rows, instead of
// a random one.

mod cell_view;
mod config;
mod console_interface;
mod core;
mod error;
mod logging;
mod models;
#[cfg(test)]
mod test;

use crate::config::{BoardConfig, CliArgs, ConfigOverrides, RunMode};
use crate::console_interface::{
    cleanup_terminal, handle_input, parse_board, render_game, render_grid_to_string, setup_terminal,
};
use crate::core::{generate, generate_unsolved, has_won, Grid};
use crate::logging::{destination_for, init_logging, log_file_override};
use crate::models::{GameRenderState, LoopControl};
use log::info;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use serde::Serialize;
use std::io;
use std::path::Path;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CliArgs::parse(std::env::args().skip(1))?;
    let mode = cli.run_mode().unwrap_or_else(|unknown| {
        println!(
            "Unknown mode: {}. Use 'interactive' or 'print'. defaulting to interactive",
            unknown
        );
        RunMode::Interactive
    });

    let log_destination = destination_for(mode, log_file_override());
    init_logging(&log_destination)?;

    let config = cli.resolve_board(ConfigOverrides::from_env()?)?;
    info!(
        "starting {}x{} board, lit probability {}, seed {:?}, logging to {}",
        config.rows(),
        config.cols(),
        config.lit_probability(),
        cli.seed,
        log_destination
    );

    let mut rng: Box<dyn RngCore> = match cli.seed {
        Some(seed) => Box::new(StdRng::seed_from_u64(seed)),
        None => Box::new(rand::thread_rng()),
    };

    let starting_board = match &cli.board_path {
        Some(path) => Some(load_board(path)?),
        None => None,
    };

    match mode {
        RunMode::Print => {
            let grid = starting_board.unwrap_or_else(|| generate(&config, rng.as_mut()));
            print_board(&config, &grid, cli.json)?;
        }
        RunMode::Interactive => {
            let mut terminal = setup_terminal()?;
            let result = run_interactive(&config, starting_board, rng.as_mut(), &mut terminal);
            cleanup_terminal()?;
            result?;
        }
    }

    Ok(())
}

#[derive(Serialize)]
struct JsonBoard<'a> {
    config: &'a BoardConfig,
    grid: &'a Grid,
    won: bool,
}

fn load_board(path: &Path) -> Result<Grid, Box<dyn std::error::Error>> {
    let text = std::fs::read_to_string(path)?;
    let grid = parse_board(&text)?;
    info!(
        "loaded {}x{} board from {}",
        grid.rows(),
        grid.cols(),
        path.display()
    );
    Ok(grid)
}

fn print_board(
    config: &BoardConfig,
    grid: &Grid,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let won = has_won(grid);
    if json {
        let data = JsonBoard { config, grid, won };
        println!("{}", serde_json::to_string_pretty(&data)?);
    } else {
        print!("{}", render_grid_to_string(grid));
        if won {
            println!("You win!");
        } else {
            println!("Lit: {}", grid.lit_count());
        }
    }
    Ok(())
}

fn new_game(config: &BoardConfig, rng: &mut dyn RngCore) -> GameRenderState {
    let grid = generate_unsolved(config, rng);
    info!("new game with {} lit cells", grid.lit_count());
    GameRenderState::new(grid)
}

fn run_interactive(
    config: &BoardConfig,
    starting_board: Option<Grid>,
    rng: &mut dyn RngCore,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut state = match starting_board {
        Some(grid) => GameRenderState::new(grid),
        None => new_game(config, rng),
    };
    let mut board = render_game(terminal, &state)?;

    loop {
        let input = handle_input(board.as_ref())?;
        match state.handle(input) {
            LoopControl::Quit => break,
            LoopControl::NewGame => state = new_game(config, rng),
            LoopControl::Idle => continue,
            LoopControl::Redraw => {}
        }
        board = render_game(terminal, &state)?;
    }

    info!("quit");
    Ok(())
}
