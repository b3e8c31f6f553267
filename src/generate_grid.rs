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

use std::path::PathBuf;
use std::process::ExitCode;
use clap::Parser;
use vortarkivo::config::Config;
use vortarkivo::grid::Orientation;
use vortarkivo::session::Level;
use vortarkivo::theme;

/// Generates the grid for one theme and prints it. The output can be
/// played with `vortarkivo --grid`.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// JSON file with a list of themes [default: built-in themes]
    #[arg(long)]
    themes: Option<PathBuf>,

    /// Theme to generate, counting from 1
    #[arg(long, default_value_t = 1)]
    theme: usize,

    #[arg(long)]
    seed: Option<u64>,

    #[arg(long, default_value_t = vortarkivo::grid::DEFAULT_SIZE)]
    size: usize,

    #[arg(long, default_value_t = vortarkivo::config::DEFAULT_PLACEMENT_ATTEMPTS)]
    attempts: u32,

    /// Also print where each word was placed
    #[arg(long, default_value_t = false)]
    placements: bool,
}

fn orientation_name(orientation: Orientation) -> &'static str {
    match orientation {
        Orientation::Horizontal => "horizontal",
        Orientation::Vertical => "vertical",
    }
}

fn print_placements(level: &Level) {
    for placement in level.placements().placements() {
        println!(
            "{} {} {}",
            level.words()[placement.word],
            placement.start,
            orientation_name(placement.orientation),
        );
    }
}

fn main() -> ExitCode {
    env_logger::init();

    let args = Args::parse();

    let themes = match args.themes {
        Some(ref filename) => match theme::load_themes(filename) {
            Ok(themes) => themes,
            Err(e) => {
                eprintln!("{}: {}", filename.display(), e);
                return ExitCode::FAILURE;
            },
        },
        None => theme::builtin_themes(),
    };

    let Some(theme) = args.theme.checked_sub(1).and_then(|i| themes.get(i))
    else {
        eprintln!(
            "theme must be between 1 and {}",
            themes.len(),
        );
        return ExitCode::FAILURE;
    };

    let config = Config {
        grid_size: args.size,
        placement_attempts: args.attempts,
        seed: args.seed,
        ..Config::default()
    };

    let mut rng = config.make_rng();

    let level = match Level::generate(theme, &config, &mut rng) {
        Ok(level) => level,
        Err(e) => {
            eprintln!("{}: {}", theme.name(), e);
            return ExitCode::FAILURE;
        },
    };

    println!("{}", level.grid());

    if args.placements {
        println!();
        print_placements(&level);
    }

    ExitCode::SUCCESS
}
