//! Word Hunt CLI
//!
//! Prints every word that can be traced on a board, longest first.

use std::collections::BTreeSet;
use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;
use std::process;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;
use word_hunt::{load_words, Coord, Error, Grid, SolveConfig, WordHuntSolver, DEFAULT_MIN_LEN};

#[derive(Parser)]
#[command(
    name = "word-hunt",
    about = "Word Hunt / Boggle-style solver",
    after_help = "Grid input may be multiline rows (\"rnsm\\ntduo\\nrasa\\nethh\"), \
                  slash-separated rows (\"r n s m / t d u o / ...\") or compact (\"rnsmtduorasaethh\")."
)]
struct Cli {
    /// Grid letters (multiline, slash-separated or compact)
    #[arg(long, conflicts_with = "grid_file")]
    grid: Option<String>,

    /// Text file containing the grid
    #[arg(long)]
    grid_file: Option<PathBuf>,

    /// Grid size N for an NxN board
    #[arg(long, default_value_t = 4)]
    size: usize,

    /// Word list, one word per line
    #[arg(long = "dict", default_value = "wordlists/words.txt")]
    dict_path: PathBuf,

    /// Minimum word length
    #[arg(long, default_value_t = DEFAULT_MIN_LEN)]
    min_len: usize,

    /// Only allow up/down/left/right moves
    #[arg(long)]
    no_diagonal: bool,

    /// Show only the top N words (longest first). 0 = all
    #[arg(long, default_value_t = 0)]
    top: usize,

    /// Show one coordinate path for each word
    #[arg(long)]
    paths: bool,

    /// More log output on stderr (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

struct Spinner {
    running: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl Spinner {
    /// Spin on stderr, or do nothing when stderr is not a terminal.
    fn new(message: &'static str) -> Self {
        let running = Arc::new(AtomicBool::new(true));
        if !io::stderr().is_terminal() {
            return Self {
                running,
                handle: None,
            };
        }

        let running_clone = running.clone();
        let handle = thread::spawn(move || {
            let frames = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];
            let mut stderr = io::stderr();
            let mut i = 0;
            while running_clone.load(Ordering::Relaxed) {
                let _ = write!(stderr, "\r{} {}", frames[i % frames.len()], message);
                let _ = stderr.flush();
                thread::sleep(Duration::from_millis(80));
                i += 1;
            }
            let _ = write!(stderr, "\r{}\r", " ".repeat(message.len() + 3));
            let _ = stderr.flush();
        });
        Self {
            running,
            handle: Some(handle),
        }
    }

    fn stop(mut self) {
        self.running.store(false, Ordering::Relaxed);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for Spinner {
    fn drop(&mut self) {
        self.running.store(false, Ordering::Relaxed);
    }
}

fn init_tracing(verbose: u8) {
    let fallback = match verbose {
        0 => "word_hunt=warn",
        1 => "word_hunt=info",
        _ => "word_hunt=debug",
    };

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_target(true)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback)),
        )
        .init();
}

fn read_grid(cli: &Cli) -> Result<Grid, String> {
    let input = match (&cli.grid, &cli.grid_file) {
        (Some(grid), _) => grid.clone(),
        (None, Some(path)) => std::fs::read_to_string(path).map_err(|source| {
            Error::Io {
                path: path.clone(),
                source,
            }
            .to_string()
        })?,
        (None, None) => return Err("Provide either --grid or --grid-file".to_string()),
    };

    Grid::parse(&input, cli.size).map_err(|e| e.to_string())
}

fn format_path(path: &[Coord]) -> String {
    path.iter()
        .map(|(r, c)| format!("({},{})", r + 1, c + 1))
        .collect::<Vec<_>>()
        .join("->")
}

/// Longest first, then alphabetical
fn ranked(words: impl IntoIterator<Item = String>, top: usize) -> Vec<String> {
    let mut sorted: Vec<String> = words.into_iter().collect();
    sorted.sort_by(|a, b| {
        b.chars()
            .count()
            .cmp(&a.chars().count())
            .then_with(|| a.cmp(b))
    });
    if top > 0 {
        sorted.truncate(top);
    }
    sorted
}

fn run(cli: Cli) -> Result<(), String> {
    if !cli.dict_path.exists() {
        return Err(format!(
            "Dictionary file not found: {}\nAdd one at that path, or pass --dict /path/to/wordlist.txt",
            cli.dict_path.display()
        ));
    }

    let grid = read_grid(&cli)?;
    println!();
    println!("Board:");
    println!("{}", grid);
    println!();

    let config = SolveConfig::new(cli.min_len, !cli.no_diagonal);

    let spinner = Spinner::new("Solving...");
    let words = match load_words(&cli.dict_path, cli.min_len) {
        Ok(words) => words,
        Err(e) => {
            spinner.stop();
            return Err(e.to_string());
        }
    };
    let solver = WordHuntSolver::new(&words).with_config(config);
    info!(words = solver.word_count(), "dictionary ready");

    let found_paths = cli.paths.then(|| solver.solve_with_paths(&grid));
    let found_words: BTreeSet<String> = match &found_paths {
        Some(paths) => paths.keys().cloned().collect(),
        None => solver.solve(&grid),
    };
    spinner.stop();

    let total = found_words.len();
    for word in ranked(found_words, cli.top) {
        let len = word.chars().count();
        match found_paths.as_ref().and_then(|p| p.get(&word)) {
            Some(path) => println!("{}  ({})  {}", word, len, format_path(path)),
            None => println!("{}  ({})", word, len),
        }
    }

    println!();
    println!(
        "Found {} words (min_len={}, size={}).",
        total, cli.min_len, cli.size
    );
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("{}", e);
        process::exit(1);
    }
}
