use crate::cell_view::CellView;
use crate::core::{Coordinate, GameChangeType, GameStatus, Grid};
use crate::error::GridError;
use crate::models::GameRenderState;
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
    MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction as LayoutDirection, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph},
};
use std::io;

pub const LIT_CHAR: char = 'O';
pub const UNLIT_CHAR: char = '.';

/// Terminal columns taken by one cell: the two-column symbol plus a gap
const CELL_WIDTH: u16 = 3;

/// Parses a board drawn with `O` (lit) and `.` (unlit), one line per row.
/// Blank lines are ignored.
pub fn parse_grid(s: &str) -> Result<Grid, GridError> {
    let mut rows = Vec::new();
    for line in s.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let mut row = Vec::new();
        for (col, symbol) in line.chars().enumerate() {
            let lit = match symbol {
                LIT_CHAR => true,
                UNLIT_CHAR => false,
                _ => {
                    return Err(GridError::UnknownSymbol {
                        symbol,
                        row: rows.len(),
                        col,
                    });
                }
            };
            row.push(lit);
        }
        rows.push(row);
    }
    Grid::from_rows(rows)
}

/// A board file is either drawn with symbols or, when it opens with `[`, the
/// nested-rows JSON that `print --json` emits for its `grid` field.
pub fn parse_board(s: &str) -> Result<Grid, GridError> {
    if s.trim_start().starts_with('[') {
        serde_json::from_str::<Grid>(s).map_err(|e| GridError::Json(e.to_string()))
    } else {
        parse_grid(s)
    }
}

pub fn render_grid_to_string(grid: &Grid) -> String {
    let mut result = String::new();
    for row in grid.iter_rows() {
        for &lit in row {
            result.push(if lit { LIT_CHAR } else { UNLIT_CHAR });
        }
        result.push('\n');
    }
    result
}

pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>, Box<dyn std::error::Error>>
{
    crossterm::terminal::enable_raw_mode()?;
    crossterm::execute!(
        io::stdout(),
        crossterm::terminal::EnterAlternateScreen,
        EnableMouseCapture
    )?;
    let backend = CrosstermBackend::new(io::stdout());
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

pub fn cleanup_terminal() -> Result<(), Box<dyn std::error::Error>> {
    crossterm::terminal::disable_raw_mode()?;
    crossterm::execute!(
        io::stdout(),
        DisableMouseCapture,
        crossterm::terminal::LeaveAlternateScreen
    )?;
    Ok(())
}

/// Where the board was last drawn, used to turn mouse clicks into coordinates
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoardArea {
    pub area: Rect,
    pub rows: usize,
    pub cols: usize,
}

impl BoardArea {
    pub fn coordinate_at(&self, column: u16, row: u16) -> Option<Coordinate> {
        if column < self.area.x || row < self.area.y {
            return None;
        }
        let rel_col = column - self.area.x;
        let rel_row = (row - self.area.y) as usize;
        if rel_col % CELL_WIDTH == CELL_WIDTH - 1 {
            // the gap between two cells
            return None;
        }
        let col = (rel_col / CELL_WIDTH) as usize;
        if rel_row >= self.rows || col >= self.cols {
            return None;
        }
        Some(Coordinate::new(rel_row as i32, col as i32))
    }
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Terminal width and height the cells need, saturating rather than wrapping
fn board_extent(grid: &Grid) -> (u16, u16) {
    let cols = u16::try_from(grid.cols()).unwrap_or(u16::MAX);
    let rows = u16::try_from(grid.rows()).unwrap_or(u16::MAX);
    (cols.saturating_mul(CELL_WIDTH), rows)
}

fn board_text(state: &GameRenderState) -> Text<'static> {
    let lines: Vec<Line> = CellView::for_grid(&state.grid)
        .into_iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .iter()
                .flat_map(|view| {
                    let selected = view.coordinate == state.cursor.position;
                    [Span::styled(view.symbol(), view.style(selected)), Span::raw(" ")]
                })
                .collect();
            Line::from(spans)
        })
        .collect();
    Text::from(lines)
}

fn instructions_for(state: &GameRenderState) -> String {
    let instructions = match state.status {
        GameStatus::Won => "You win! Press N for a new game, Q to quit.".to_string(),
        GameStatus::Playing => format!(
            "Arrows/WASD move, Space/Enter or click toggles, N new game, Q quit | Lit: {}",
            state.grid.lit_count()
        ),
    };

    let instructions = if let Some(err) = &state.error {
        format!("{} | Error: {}", instructions, err)
    } else {
        instructions
    };

    match &state.last_change {
        Some(GameChangeType::Toggled { affected }) => {
            format!("{} | Last: toggled {} cells", instructions, affected)
        }
        Some(GameChangeType::Won) | None => instructions,
    }
}

/// Draws the board, or the win message once the board is dark. Returns where
/// the cells landed so clicks can be mapped back to coordinates.
pub fn render_game(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    state: &GameRenderState,
) -> Result<Option<BoardArea>, Box<dyn std::error::Error>> {
    let mut board_area = None;
    terminal.draw(|f| {
        let chunks = Layout::default()
            .direction(LayoutDirection::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(3)])
            .split(f.area());

        let block = Block::default().borders(Borders::ALL).title("Lights Out");
        let inner = block.inner(chunks[0]);
        f.render_widget(block, chunks[0]);

        match state.status {
            GameStatus::Won => {
                let message = Paragraph::new("You win!")
                    .style(Style::default().fg(Color::Green))
                    .alignment(Alignment::Center);
                f.render_widget(message, centered(inner, inner.width, 1));
            }
            GameStatus::Playing => {
                let (width, height) = board_extent(&state.grid);
                let area = centered(inner, width, height);
                f.render_widget(Paragraph::new(board_text(state)), area);
                board_area = Some(BoardArea {
                    area,
                    rows: state.grid.rows(),
                    cols: state.grid.cols(),
                });
            }
        }

        let instruction_paragraph = Paragraph::new(instructions_for(state))
            .block(Block::default().borders(Borders::ALL).title("Instructions"))
            .style(Style::default().fg(Color::Cyan))
            .alignment(Alignment::Center);
        f.render_widget(instruction_paragraph, chunks[1]);
    })?;
    Ok(board_area)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConsoleInput {
    MoveCursor { d_row: i32, d_col: i32 },
    ActivateSelected,
    ActivateAt(Coordinate),
    NewGame,
    Quit,
    Timeout,
    Unknown,
}

pub fn input_for_key(code: KeyCode) -> ConsoleInput {
    match code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => ConsoleInput::Quit,
        KeyCode::Char('n') | KeyCode::Char('N') => ConsoleInput::NewGame,
        KeyCode::Char(' ') | KeyCode::Enter => ConsoleInput::ActivateSelected,
        KeyCode::Char('w') | KeyCode::Char('W') | KeyCode::Up => {
            ConsoleInput::MoveCursor { d_row: -1, d_col: 0 }
        }
        KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Down => {
            ConsoleInput::MoveCursor { d_row: 1, d_col: 0 }
        }
        KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Left => {
            ConsoleInput::MoveCursor { d_row: 0, d_col: -1 }
        }
        KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Right => {
            ConsoleInput::MoveCursor { d_row: 0, d_col: 1 }
        }
        _ => ConsoleInput::Unknown,
    }
}

pub fn input_for_mouse(mouse: MouseEvent, board: Option<&BoardArea>) -> ConsoleInput {
    let MouseEventKind::Down(MouseButton::Left) = mouse.kind else {
        return ConsoleInput::Unknown;
    };
    board
        .and_then(|board| board.coordinate_at(mouse.column, mouse.row))
        .map(ConsoleInput::ActivateAt)
        .unwrap_or(ConsoleInput::Unknown)
}

pub fn handle_input(board: Option<&BoardArea>) -> Result<ConsoleInput, Box<dyn std::error::Error>> {
    if event::poll(std::time::Duration::from_millis(50))? {
        return Ok(match event::read()? {
            Event::Key(KeyEvent {
                code,
                kind: KeyEventKind::Press,
                ..
            }) => input_for_key(code),
            Event::Mouse(mouse) => input_for_mouse(mouse, board),
            _ => ConsoleInput::Unknown,
        });
    }
    Ok(ConsoleInput::Timeout)
}

#[cfg(test)]
mod test {
    use crossterm::event::KeyModifiers;
    use super::*;
    use crate::core::MAX_DIMENSION;

    fn board_at(x: u16, y: u16, rows: usize, cols: usize) -> BoardArea {
        BoardArea {
            area: Rect { x, y, width: cols as u16 * CELL_WIDTH, height: rows as u16 },
            rows,
            cols,
        }
    }

    fn left_click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn parse_grid_reads_lit_and_unlit() {
        let grid = parse_grid("
.O.
O..
").unwrap();

        assert_eq!(grid.rows(), 2);
        assert_eq!(grid.cols(), 3);
        assert!(grid.is_lit(&Coordinate::new(0, 1)));
        assert!(grid.is_lit(&Coordinate::new(1, 0)));
        assert_eq!(grid.lit_count(), 2);
    }

    #[test]
    fn parse_grid_rejects_unknown_symbols() {
        assert_eq!(
            parse_grid("..\n.#\n"),
            Err(GridError::UnknownSymbol { symbol: '#', row: 1, col: 1 })
        );
    }

    #[test]
    fn render_grid_matches_parse_input() {
        let text = "O..\n.O.\n";

        assert_eq!(render_grid_to_string(&parse_grid(text).unwrap()), text);
    }

    #[test]
    fn largest_board_fits_terminal_coordinates() {
        let grid = Grid::new_with_size(MAX_DIMENSION, MAX_DIMENSION, false).unwrap();

        let (width, height) = board_extent(&grid);
        assert_eq!(width as usize, MAX_DIMENSION * CELL_WIDTH as usize);
        assert_eq!(height as usize, MAX_DIMENSION);
    }

    #[test]
    fn click_maps_to_cell_under_cursor() {
        let board = board_at(10, 4, 2, 3);

        assert_eq!(board.coordinate_at(10, 4), Some(Coordinate::new(0, 0)));
        assert_eq!(board.coordinate_at(11, 4), Some(Coordinate::new(0, 0)));
        assert_eq!(board.coordinate_at(13, 5), Some(Coordinate::new(1, 1)));
        assert_eq!(board.coordinate_at(17, 5), Some(Coordinate::new(1, 2)));
    }

    #[test]
    fn click_outside_board_or_on_gap_maps_to_nothing() {
        let board = board_at(10, 4, 2, 3);

        assert_eq!(board.coordinate_at(9, 4), None);
        assert_eq!(board.coordinate_at(10, 3), None);
        assert_eq!(board.coordinate_at(12, 4), None);
        assert_eq!(board.coordinate_at(10, 6), None);
        assert_eq!(board.coordinate_at(19, 4), None);
    }

    #[test]
    fn mouse_clicks_activate_cells() {
        let board = board_at(0, 0, 3, 3);

        assert_eq!(
            input_for_mouse(left_click(3, 2), Some(&board)),
            ConsoleInput::ActivateAt(Coordinate::new(2, 1))
        );
        assert_eq!(input_for_mouse(left_click(3, 2), None), ConsoleInput::Unknown);

        let right_click = MouseEvent { kind: MouseEventKind::Down(MouseButton::Right), ..left_click(3, 2) };
        assert_eq!(input_for_mouse(right_click, Some(&board)), ConsoleInput::Unknown);
    }

    #[test]
    fn keys_map_to_inputs() {
        assert_eq!(input_for_key(KeyCode::Char('q')), ConsoleInput::Quit);
        assert_eq!(input_for_key(KeyCode::Esc), ConsoleInput::Quit);
        assert_eq!(input_for_key(KeyCode::Char('N')), ConsoleInput::NewGame);
        assert_eq!(input_for_key(KeyCode::Enter), ConsoleInput::ActivateSelected);
        assert_eq!(input_for_key(KeyCode::Char(' ')), ConsoleInput::ActivateSelected);
        assert_eq!(input_for_key(KeyCode::Up), ConsoleInput::MoveCursor { d_row: -1, d_col: 0 });
        assert_eq!(input_for_key(KeyCode::Char('d')), ConsoleInput::MoveCursor { d_row: 0, d_col: 1 });
        assert_eq!(input_for_key(KeyCode::Char('x')), ConsoleInput::Unknown);
    }

    #[test]
    fn instructions_mention_last_change_and_error() {
        let mut state = GameRenderState::new(Grid::new_with_size(2, 2, true).unwrap());
        state.error = Some("Cannot toggle outside the board".to_string());
        state.last_change = Some(GameChangeType::Toggled { affected: 3 });

        let text = instructions_for(&state);
        assert!(text.contains("Lit: 4"));
        assert!(text.contains("Error: Cannot toggle outside the board"));
        assert!(text.contains("toggled 3 cells"));
    }

    #[test]
    fn instructions_announce_win() {
        let state = GameRenderState::new(Grid::new_with_size(2, 2, false).unwrap());

        assert!(instructions_for(&state).starts_with("You win!"));
    }

    #[test]
    fn board_file_reads_json_rows() {
        let grid = parse_board("[[true, false], [false, true]]\n").unwrap();

        assert_eq!(grid, parse_grid("O.\n.O").unwrap());
    }

    #[test]
    fn board_file_reads_symbols() {
        let grid = parse_board("\n.O.\nOOO\n").unwrap();

        assert_eq!(grid.rows(), 2);
        assert_eq!(grid.lit_count(), 4);
    }

    #[test]
    fn board_file_rejects_bad_json() {
        assert!(matches!(
            parse_board("[[true, false], [true]]"),
            Err(GridError::Json(_))
        ));
        assert!(matches!(parse_board("[]"), Err(GridError::Json(_))));
        assert!(matches!(parse_board("[[1, 0]]"), Err(GridError::Json(_))));
    }
}
