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

use std::collections::VecDeque;
use std::num::NonZeroUsize;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::{Arc, mpsc, Mutex};
use std::thread;
use clap::Parser;
use rand::{Rng, SeedableRng};
use rand::rngs::StdRng;
use vortarkivo::config::Config;
use vortarkivo::generator;
use vortarkivo::theme::{self, Theme};

/// Generates every theme’s grid many times and reports how often the
/// words can’t all be placed on the first try.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// JSON file with a list of themes [default: built-in themes]
    #[arg(long)]
    themes: Option<PathBuf>,

    /// Number of grids to generate for each theme
    #[arg(long, default_value_t = 1000)]
    runs: usize,

    /// Number of worker threads [default: available parallelism]
    #[arg(long)]
    threads: Option<NonZeroUsize>,

    #[arg(long, default_value_t = vortarkivo::grid::DEFAULT_SIZE)]
    size: usize,

    #[arg(long)]
    seed: Option<u64>,
}

struct Job {
    theme_num: usize,
    run: usize,
}

struct JobQueue {
    jobs: Mutex<VecDeque<Job>>,
}

struct RunResult {
    theme_num: usize,
    placed: bool,
}

impl JobQueue {
    fn new(n_themes: usize, runs: usize) -> JobQueue {
        let jobs = (0..n_themes).flat_map(|theme_num| {
            (0..runs).map(move |run| Job { theme_num, run })
        }).collect();

        JobQueue { jobs: Mutex::new(jobs) }
    }

    fn next(&self) -> Option<Job> {
        self.jobs.lock().unwrap().pop_front()
    }
}

fn check_themes(
    themes: &[Theme],
    size: usize,
    jobs: &JobQueue,
    mut rng: StdRng,
    tx: mpsc::Sender<RunResult>,
) -> Result<(), mpsc::SendError<RunResult>> {
    // Sorting the words is the same for every run
    let words = themes.iter().map(Theme::longest_first).collect::<Vec<_>>();

    while let Some(job) = jobs.next() {
        let placed = match generator::generate(
            &words[job.theme_num],
            size,
            &mut rng,
        ) {
            Ok(_) => true,
            Err(e) => {
                log::debug!(
                    "{} run {}: {}",
                    themes[job.theme_num].name(),
                    job.run + 1,
                    e,
                );
                false
            },
        };

        tx.send(RunResult { theme_num: job.theme_num, placed })?;
    }

    Ok(())
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

    if args.runs == 0 {
        eprintln!("runs must be at least 1");
        return ExitCode::FAILURE;
    }

    let themes = Arc::new(themes);
    let jobs = Arc::new(JobQueue::new(themes.len(), args.runs));

    let n_threads = Into::<usize>::into(
        args.threads.unwrap_or_else(|| {
            thread::available_parallelism().unwrap_or(NonZeroUsize::MIN)
        })
    ).min(themes.len() * args.runs);

    // Each thread gets its own generator seeded from this one so that a
    // fixed seed gives the same set of grids
    let mut seed_rng = Config { seed: args.seed, ..Config::default() }
        .make_rng();

    let (tx, rx) = mpsc::channel();

    let handles = (0..n_threads).map(|_| {
        let themes = Arc::clone(&themes);
        let jobs = Arc::clone(&jobs);
        let tx = tx.clone();
        let rng = StdRng::seed_from_u64(seed_rng.gen());
        let size = args.size;

        thread::spawn(move || check_themes(&themes, size, &jobs, rng, tx))
    }).collect::<Vec<_>>();

    std::mem::drop(tx);

    let mut failures = vec![0usize; themes.len()];

    for result in rx {
        if !result.placed {
            failures[result.theme_num] += 1;
        }
    }

    for handle in handles {
        match handle.join() {
            Ok(Ok(())) => (),
            Ok(Err(e)) => {
                eprintln!("{}", e);
                return ExitCode::FAILURE;
            },
            Err(e) => std::panic::resume_unwind(e),
        }
    }

    let mut result = ExitCode::SUCCESS;

    for (theme, &n_failures) in themes.iter().zip(failures.iter()) {
        println!(
            "{}: {}/{} failed on the first attempt ({:.1}%)",
            theme.name(),
            n_failures,
            args.runs,
            n_failures as f64 * 100.0 / args.runs as f64,
        );

        if n_failures >= args.runs {
            eprintln!("{}: the words never fit", theme.name());
            result = ExitCode::FAILURE;
        }
    }

    result
}
