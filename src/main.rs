// Vortarkivo – A themed word search game
// Copyright (C) 2025  Neil Roberts
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <http://www.gnu.org/licenses/>.

use std::fmt;
use std::path::PathBuf;
use std::process::ExitCode;
use std::str::FromStr;
use std::time::Duration;
use clap::Parser;
use vortarkivo::config::Config;
use vortarkivo::grid::{Grid, Position};
use vortarkivo::session::{Game, Level, SelectionOutcome};
use vortarkivo::snapshot::Snapshot;
use vortarkivo::theme::{self, Theme};

/// Plays the word search with commands read from stdin, one per
/// line: begin R C, extend R C, end, select R C R C, clear, next,
/// dismiss and show.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// JSON file with a list of themes [default: built-in themes]
    #[arg(long)]
    themes: Option<PathBuf>,

    /// Seed for the random number generator
    #[arg(long)]
    seed: Option<u64>,

    /// Width and height of the grid
    #[arg(long, default_value_t = vortarkivo::grid::DEFAULT_SIZE)]
    size: usize,

    /// Number of times to try placing the words before giving up
    #[arg(long, default_value_t = vortarkivo::config::DEFAULT_PLACEMENT_ATTEMPTS)]
    attempts: u32,

    /// Milliseconds that success and error messages stay visible
    #[arg(long, default_value_t = 2000)]
    message_timeout: u64,

    /// Level to start on, counting from 1
    #[arg(long, default_value_t = 1)]
    level: usize,

    /// Play a grid printed by generate-grid instead of making a new
    /// one. The grid must contain the words of the starting level.
    #[arg(long)]
    grid: Option<PathBuf>,

    /// Print a JSON snapshot of the game after every command
    #[arg(long, default_value_t = false)]
    json: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Begin(Position),
    Extend(Position),
    End,
    Select(Position, Position),
    Clear,
    Next,
    Dismiss,
    Show,
}

#[derive(Debug, PartialEq, Eq)]
enum CommandError {
    Empty,
    UnknownCommand(String),
    BadArgument(String),
    WrongArgumentCount(&'static str, usize),
}

fn parse_position(row: &str, col: &str) -> Result<Position, CommandError> {
    let parse = |s: &str| {
        s.parse::<usize>().map_err(|_| CommandError::BadArgument(s.to_string()))
    };

    Ok(Position::new(parse(row)?, parse(col)?))
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Command, CommandError> {
        let mut parts = s.split_whitespace();

        let Some(name) = parts.next()
        else {
            return Err(CommandError::Empty);
        };

        let args = parts.collect::<Vec<&str>>();

        let (command, n_args) = match name {
            "begin" | "b" => ("begin", 2),
            "extend" | "e" => ("extend", 2),
            "end" => ("end", 0),
            "select" | "s" => ("select", 4),
            "clear" => ("clear", 0),
            "next" => ("next", 0),
            "dismiss" => ("dismiss", 0),
            "show" => ("show", 0),
            _ => return Err(CommandError::UnknownCommand(name.to_string())),
        };

        if args.len() != n_args {
            return Err(CommandError::WrongArgumentCount(command, n_args));
        }

        Ok(match command {
            "begin" => Command::Begin(parse_position(args[0], args[1])?),
            "extend" => Command::Extend(parse_position(args[0], args[1])?),
            "end" => Command::End,
            "select" => Command::Select(
                parse_position(args[0], args[1])?,
                parse_position(args[2], args[3])?,
            ),
            "clear" => Command::Clear,
            "next" => Command::Next,
            "dismiss" => Command::Dismiss,
            _ => Command::Show,
        })
    }
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CommandError::Empty => write!(f, "empty command"),
            CommandError::UnknownCommand(name) => {
                write!(f, "unknown command: {}", name)
            },
            CommandError::BadArgument(arg) => {
                write!(f, "invalid number: {}", arg)
            },
            CommandError::WrongArgumentCount(command, n_args) => {
                write!(f, "{} takes {} arguments", command, n_args)
            },
        }
    }
}

// The cells a drag from `from` to `to` passes over. If the two cells
// aren’t on a line then only the two ends are visited.
fn drag_path(from: Position, to: Position) -> Vec<Position> {
    let row_diff = to.row as isize - from.row as isize;
    let col_diff = to.col as isize - from.col as isize;

    let aligned = row_diff == 0
        || col_diff == 0
        || row_diff.abs() == col_diff.abs();

    if !aligned {
        return vec![from, to];
    }

    let n_steps = row_diff.abs().max(col_diff.abs());

    (0..=n_steps).map(|i| {
        Position::new(
            (from.row as isize + row_diff.signum() * i) as usize,
            (from.col as isize + col_diff.signum() * i) as usize,
        )
    }).collect()
}

fn print_game(game: &Game) {
    if let Some(grid) = game.grid() {
        for (row_num, row) in grid.rows().enumerate() {
            for (col_num, &letter) in row.iter().enumerate() {
                let state = game.cell_state(Position::new(row_num, col_num));

                print!("{}", if state.selected { '>' } else { ' ' });

                // Letters of found words are shown in lowercase
                if state.found {
                    print!("{}", letter.to_lowercase());
                } else {
                    print!("{}", letter);
                }
            }

            println!();
        }

        let (n_found, n_words) = game.progress();

        println!(
            "Уровень {}/{}: {} ({}/{})",
            game.level_num() + 1,
            game.n_levels(),
            game.theme_name().unwrap_or(""),
            n_found,
            n_words,
        );

        let found_words = game.found_words();

        if !found_words.is_empty() {
            println!("{}", found_words.join(" "));
        }
    }

    if let Some(message) = game.message() {
        println!("[{:?}] {}", message.severity, message.text);
    }
}

fn print_snapshot(game: &Game) -> bool {
    match Snapshot::new(game).to_json() {
        Ok(json) => {
            println!("{}", json);
            true
        },
        Err(e) => {
            eprintln!("{}", e);
            false
        },
    }
}

fn log_outcome(outcome: Option<SelectionOutcome>) {
    if let Some(outcome) = outcome {
        log::debug!("selection outcome: {:?}", outcome);
    }
}

fn run_command(game: &mut Game, command: Command) -> Result<(), String> {
    match command {
        Command::Begin(position) => {
            game.begin_selection(position.row, position.col);
        },
        Command::Extend(position) => {
            game.extend_selection(position.row, position.col);
        },
        Command::End => log_outcome(game.end_selection()),
        Command::Select(from, to) => {
            let path = drag_path(from, to);

            game.begin_selection(from.row, from.col);

            for position in path.into_iter().skip(1) {
                game.extend_selection(position.row, position.col);
            }

            log_outcome(game.end_selection());
        },
        Command::Clear => game.clear_selection(),
        Command::Next => {
            game.advance_level().map_err(|e| e.to_string())?;
        },
        Command::Dismiss => {
            // Stands in for the timer that would hide the message
            if let Some(generation) = game.message().map(|m| m.generation) {
                game.dismiss_message(generation);
            }
        },
        Command::Show => (),
    }

    Ok(())
}

fn load_themes(args: &Args) -> Result<Vec<Theme>, ()> {
    match args.themes {
        Some(ref filename) => theme::load_themes(filename).map_err(|e| {
            eprintln!("{}: {}", filename.display(), e);
        }),
        None => Ok(theme::builtin_themes()),
    }
}

fn start_game(args: &Args, themes: Vec<Theme>) -> Result<Game, ()> {
    let config = Config {
        grid_size: args.size,
        message_timeout: Duration::from_millis(args.message_timeout),
        placement_attempts: args.attempts,
        seed: args.seed,
    };

    let level_num = args.level.saturating_sub(1);

    let Some(ref grid_filename) = args.grid
    else {
        return Game::new_at_level(themes, config, level_num).map_err(|e| {
            eprintln!("{}", e);
        });
    };

    let Some(theme) = themes.get(level_num)
    else {
        eprintln!("there is no level {}", args.level);
        return Err(());
    };

    let grid = match std::fs::read_to_string(grid_filename) {
        Ok(source) => match source.trim_end().parse::<Grid>() {
            Ok(grid) => grid,
            Err(e) => {
                eprintln!("{}: {}", grid_filename.display(), e);
                return Err(());
            },
        },
        Err(e) => {
            eprintln!("{}: {}", grid_filename.display(), e);
            return Err(());
        },
    };

    match Level::from_grid(theme, grid) {
        Ok(level) => Ok(Game::with_level(themes, config, level_num, level)),
        Err(e) => {
            eprintln!("{}: {}", grid_filename.display(), e);
            Err(())
        },
    }
}

fn main() -> ExitCode {
    env_logger::init();

    let args = Args::parse();

    let Ok(themes) = load_themes(&args)
    else {
        return ExitCode::FAILURE;
    };

    let Ok(mut game) = start_game(&args, themes)
    else {
        return ExitCode::FAILURE;
    };

    let show = |game: &Game| {
        if args.json {
            print_snapshot(game)
        } else {
            print_game(game);
            true
        }
    };

    if !show(&game) {
        return ExitCode::FAILURE;
    }

    for (line_num, line) in std::io::stdin().lines().enumerate() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                eprintln!("{}", e);
                return ExitCode::FAILURE;
            },
        };

        if line.trim().is_empty() {
            continue;
        }

        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(e) => {
                eprintln!("line {}: {}", line_num + 1, e);
                continue;
            },
        };

        if let Err(e) = run_command(&mut game, command) {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }

        if !show(&game) {
            return ExitCode::FAILURE;
        }
    }

    ExitCode::SUCCESS
}
