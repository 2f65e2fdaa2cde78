// CLI for the sliding-vehicle solver.
// `solve [scenario-file] [move-limit]` runs the breadth-first search with a
// live progress view and prints the minimum move count.
// `interactive [scenario-file]` plays the scenario in the terminal.

use GridlockEngine::console_interface::ConsoleInput::*;
use GridlockEngine::console_interface::{
    cleanup_terminal, handle_input, parse_scenario, render_game, setup_terminal,
};
use GridlockEngine::core::{Board, MoveUpdate, TARGET_VEHICLE, UserAction, scramble, step};
use GridlockEngine::models::GameRenderState;
use GridlockEngine::search::{
    Outcome, SearchRenderState, SearchStep, SolveConfig, Solver, get_json_data, get_search_info,
    render_search,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use std::io;
use std::io::Write;

const SCRAMBLE_MOVES: usize = 25;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let switch = std::env::args().nth(1).unwrap_or("solve".to_string());

    // One truck and one car between the target and the right edge.
    let scenario = r#"
3
2 H 2 0
3 V 1 2
2 H 4 2
"#;
    let scenario = match std::env::args().nth(2) {
        Some(path) => std::fs::read_to_string(path)?,
        None => scenario.to_string(),
    };
    let move_limit = match std::env::args().nth(3) {
        Some(limit) => Some(limit.parse::<usize>()?),
        None => None,
    };

    let board = parse_scenario(&scenario)?;
    let mut terminal = setup_terminal()?;

    match switch.as_str() {
        "solve" => {
            run_solve(board, SolveConfig { move_limit }, &mut terminal)?;
        }
        "interactive" => {
            run_interactive(board, &mut terminal)?;
        }
        _ => {
            println!(
                "Unknown mode: {}. Use 'solve' or 'interactive'. defaulting to solve",
                switch
            );
            run_solve(board, SolveConfig { move_limit }, &mut terminal)?;
        }
    }

    Ok(())
}

fn run_solve(
    board: Board,
    config: SolveConfig,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut solver = Solver::new(board, config);

    let start_time = std::time::Instant::now();
    let mut last_render_time = start_time;
    let mut processed_since_last_render = 0;

    std::fs::create_dir_all("exports")?;
    let mut log_out = std::fs::OpenOptions::new()
        .write(true)
        .truncate(true)
        .create(true)
        .open("exports/solve_log.log")?;

    render_search(terminal, &mut log_out, SearchRenderState {
        solver: &solver,
        processed_since_last_render,
        start_time,
        last_render_time,
        current_time: last_render_time,
    })?;

    let outcome = 'outer: loop {
        let stop_time = std::time::Instant::now() + std::time::Duration::from_millis(1000);
        while std::time::Instant::now() < stop_time {
            match solver.step() {
                SearchStep::Solved(moves) => break 'outer Outcome::Solved(moves),
                SearchStep::Exhausted => break 'outer Outcome::Unsolvable,
                SearchStep::Expanded => processed_since_last_render += 1,
            }
        }

        let current_time = std::time::Instant::now();
        render_search(terminal, &mut log_out, SearchRenderState {
            solver: &solver,
            processed_since_last_render,
            start_time,
            last_render_time,
            current_time,
        })?;

        last_render_time = current_time;
        processed_since_last_render = 0;
    };

    cleanup_terminal()?;

    println!("{}", get_search_info(&solver));
    match outcome {
        Outcome::Solved(moves) => println!("requires {} moves", moves),
        Outcome::Unsolvable => println!("cannot be solved"),
    }

    let json_data = get_json_data(solver.graph());
    let mut f = std::fs::OpenOptions::new()
        .write(true)
        .truncate(true)
        .create(true)
        .open("exports/search_graph.json")?;
    f.write_all(json_data.as_bytes())?;
    println!("Search graph exported to exports/search_graph.json");

    Ok(())
}

fn run_interactive(
    board: Board,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut board = board;
    let mut selected = TARGET_VEHICLE;
    // Initial render
    let first_render = GameRenderState {
        board: board.clone(),
        selected,
        won: board.is_goal(),
        error: None,
        last_action: None,
    };
    render_game(terminal, &first_render)?;

    loop {
        match handle_input() {
            Ok(Quit) => break,
            Ok(SelectNext) => {
                selected = (selected + 1) % board.vehicles.len();
                let to_render = GameRenderState {
                    board: board.clone(),
                    selected,
                    won: board.is_goal(),
                    error: None,
                    last_action: None,
                };
                render_game(terminal, &to_render)?;
            }
            Ok(Scramble) => {
                board = scramble(&board, SCRAMBLE_MOVES, &mut rand::thread_rng());
                let to_render = GameRenderState {
                    board: board.clone(),
                    selected,
                    won: board.is_goal(),
                    error: None,
                    last_action: None,
                };
                render_game(terminal, &to_render)?;
            }
            Ok(Slide(direction)) => {
                let action = UserAction::Slide(selected, direction);
                let update = step(&board, action);
                let mut error = None;
                match update {
                    MoveUpdate::NextState(next) => board = next,
                    MoveUpdate::Error(err) => error = Some(err),
                }
                let to_render = GameRenderState {
                    board: board.clone(),
                    selected,
                    won: board.is_goal(),
                    error,
                    last_action: Some(action),
                };
                render_game(terminal, &to_render)?;

                if to_render.won {
                    // Keep showing the win screen until user inputs
                    loop {
                        match handle_input() {
                            Ok(Timeout) => {}
                            Ok(_) => break,
                            Err(_) => {
                                println!("error reading input");
                                break;
                            }
                        }
                    }
                    break;
                }
            }
            Ok(_) => {
                // No input, continue polling
            }
            Err(_) => {
                println!("error reading input");
                break;
            }
        }
    }

    cleanup_terminal()?;

    Ok(())
}
