use crate::core::{Board, MoveDirection, Orientation, Vec2, Vehicle};
use crate::models::GameRenderState;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction as LayoutDirection, Layout},
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
};
use std::io;
use std::str::SplitWhitespace;

/// Scenario wire format: the vehicle count, then one record per vehicle of
/// `length orientation row column`, whitespace separated. The first record
/// is the target vehicle.
pub fn parse_scenario(s: &str) -> Result<Board, String> {
    let mut tokens = s.split_whitespace();
    let count = next_number(&mut tokens, "vehicle count")?;
    if count < 0 {
        return Err(format!("invalid vehicle count {}", count));
    }

    let mut vehicles = Vec::with_capacity(count as usize);
    for index in 0..count {
        let record = format!("vehicle {}", index + 1);
        let length = next_number(&mut tokens, &record)?;
        let orientation = match tokens.next() {
            Some("H") | Some("h") => Orientation::Horizontal,
            Some("V") | Some("v") => Orientation::Vertical,
            Some(other) => return Err(format!("{}: unknown orientation '{}'", record, other)),
            None => return Err(format!("{}: missing orientation", record)),
        };
        let row = next_number(&mut tokens, &record)?;
        let column = next_number(&mut tokens, &record)?;
        vehicles.push(Vehicle {
            length,
            orientation,
            position: Vec2 { i: row, j: column },
        });
    }

    Board::from_vehicles(vehicles)
}

fn next_number(tokens: &mut SplitWhitespace, what: &str) -> Result<i32, String> {
    let token = tokens
        .next()
        .ok_or_else(|| format!("{}: unexpected end of scenario", what))?;
    token
        .parse()
        .map_err(|_| format!("{}: '{}' is not a number", what, token))
}

pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>, Box<dyn std::error::Error>>
{
    crossterm::terminal::enable_raw_mode()?;
    crossterm::execute!(io::stdout(), crossterm::terminal::EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(io::stdout());
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

pub fn cleanup_terminal() -> Result<(), Box<dyn std::error::Error>> {
    crossterm::terminal::disable_raw_mode()?;
    crossterm::execute!(io::stdout(), crossterm::terminal::LeaveAlternateScreen)?;
    Ok(())
}

pub fn render_game(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    state: &GameRenderState,
) -> Result<(), Box<dyn std::error::Error>> {
    terminal.draw(|f| {
        let chunks = Layout::default()
            .direction(LayoutDirection::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(3)])
            .split(f.area());

        // Board area
        let board_text = render_board_to_string(&state.board);
        let board_paragraph = Paragraph::new(board_text)
            .block(Block::default().borders(Borders::ALL).title("Gridlock"))
            .style(Style::default().fg(Color::White))
            .alignment(Alignment::Center);
        f.render_widget(board_paragraph, chunks[0]);

        // Instructions
        let instructions = if state.won {
            "The target vehicle is out! Press any key to quit.".to_string()
        } else {
            format!(
                "Selected: {} | Tab next vehicle, arrows/WASD slide, R scramble, Q quit",
                vehicle_char((state.selected + 1) as u8)
            )
        };

        let instructions = if let Some(err) = &state.error {
            format!("{} | Error: {}", instructions, err)
        } else {
            instructions
        };

        let instructions = if let Some(action) = &state.last_action {
            format!("{} | Last: {:?}", instructions, action)
        } else {
            instructions
        };

        let instruction_paragraph = Paragraph::new(instructions)
            .block(Block::default().borders(Borders::ALL).title("Instructions"))
            .style(Style::default().fg(Color::Cyan))
            .alignment(Alignment::Center);
        f.render_widget(instruction_paragraph, chunks[1]);
    })?;
    Ok(())
}

pub fn render_board_to_string(board: &Board) -> String {
    let mut result = String::new();
    for row in board.grid.iter() {
        for &cell in row.iter() {
            result.push(if cell == 0 { '.' } else { vehicle_char(cell) });
        }
        result.push('\n');
    }
    result
}

fn vehicle_char(id: u8) -> char {
    if id <= 9 {
        (b'0' + id) as char
    } else {
        (b'A' + id - 10) as char
    }
}

pub enum ConsoleInput {
    Slide(MoveDirection),
    SelectNext,
    Scramble,
    Quit,
    Timeout,
    Unknown,
}

pub fn handle_input() -> Result<ConsoleInput, Box<dyn std::error::Error>> {
    if event::poll(std::time::Duration::from_millis(50))? {
        if let Event::Key(KeyEvent {
            code,
            kind: KeyEventKind::Press,
            ..
        }) = event::read()?
        {
            return Ok(match code {
                KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => ConsoleInput::Quit,
                KeyCode::Tab | KeyCode::Char('n') | KeyCode::Char('N') => ConsoleInput::SelectNext,
                KeyCode::Char('r') | KeyCode::Char('R') => ConsoleInput::Scramble,
                KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Down => {
                    ConsoleInput::Slide(MoveDirection::Forward)
                }
                KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Right => {
                    ConsoleInput::Slide(MoveDirection::Forward)
                }
                KeyCode::Char('w') | KeyCode::Char('W') | KeyCode::Up => {
                    ConsoleInput::Slide(MoveDirection::Backward)
                }
                KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Left => {
                    ConsoleInput::Slide(MoveDirection::Backward)
                }
                _ => ConsoleInput::Unknown,
            });
        }
    }
    Ok(ConsoleInput::Timeout)
}
