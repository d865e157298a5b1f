use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use autocomplete_core::config::{self, Config, OutputFormat};
use autocomplete_core::learning::{normalize_fragment, LearningEngine};
use autocomplete_core::presentation::{self, NO_MATCH};
use autocomplete_core::{AutocompleteEngine, Candidate};
use clap::{Parser, Subcommand};
use crossterm::style::Stylize;

const MENU: &str = "Enter 1 to train, 2 to input, 3 to dump, 0 to exit: ";

#[derive(Parser)]
#[command(name = "autocomplete")]
#[command(about = "Learns words from text and suggests completions for a prefix")]
#[command(version)]
struct Cli {
    /// Path to a TOML config file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Train every line of a text file before starting (repeatable).
    #[arg(long = "train-file", action = clap::ArgAction::Append)]
    train_files: Vec<PathBuf>,

    /// Do not learn the empty tokens left by trailing or repeated separators.
    #[arg(long)]
    ignore_empty_tokens: bool,

    /// Print suggestions as JSON.
    #[arg(long)]
    json: bool,

    /// Maximum number of suggestions to print.
    #[arg(long)]
    limit: Option<usize>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a sample config file.
    NewConfig {
        /// Output path for config file.
        #[arg(short, long, default_value = "autocomplete.toml")]
        path: PathBuf,
    },
}

struct Session {
    engine: AutocompleteEngine,
    learner: LearningEngine,
    format: OutputFormat,
    limit: Option<usize>,
}

fn main() {
    init_logger();

    let cli = Cli::parse();

    if let Some(Commands::NewConfig { path }) = &cli.command {
        match config::generate_sample(path) {
            Ok(_) => log::info!("config file generated: {}", path.display()),
            Err(e) => {
                log::error!("error generating config: {}", e);
                std::process::exit(1);
            }
        }
        return;
    }

    let mut cfg = match &cli.config {
        Some(path) => config::load(path).unwrap_or_else(|e| {
            log::error!("error loading config {}: {}", path.display(), e);
            std::process::exit(1);
        }),
        None => Config::default(),
    };
    // Flags override the file.
    if cli.ignore_empty_tokens {
        cfg.training.ignore_empty_tokens = true;
    }
    if cli.json {
        cfg.display.format = OutputFormat::Json;
    }
    if let Some(limit) = cli.limit {
        cfg.display.max_suggestions = limit;
    }

    let mut session = Session {
        engine: AutocompleteEngine::new(),
        learner: LearningEngine::new(cfg.training_options()),
        format: cfg.display.format,
        limit: cfg.suggestion_limit(),
    };

    for path in &cli.train_files {
        if let Err(e) = session.train_file(path) {
            log::error!("error training from {}: {}", path.display(), e);
            std::process::exit(1);
        }
    }

    if let Err(e) = run(&mut session) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_env("RUST_LOG")
        .format(|buf, record| {
            let level = if record.level() != log::Level::Info {
                format!("[{}] ", record.level())
            } else {
                String::new()
            };
            writeln!(
                buf,
                "{}:{} {}{}",
                record.file().unwrap_or("unknown"),
                record.line().unwrap_or(0),
                level,
                record.args()
            )
        })
        .init();
}

impl Session {
    fn train_file(&mut self, path: &Path) -> autocomplete_core::Result<()> {
        let reader = BufReader::new(File::open(path)?);
        let report = self.learner.learn_reader(&mut self.engine, reader)?;
        log::info!(
            "trained {} token(s) from '{}' ({} empty skipped)",
            report.learned,
            path.display(),
            report.skipped_empty
        );
        Ok(())
    }

    fn render(&self, fragment: &str, ranked: &[Candidate]) -> autocomplete_core::Result<String> {
        match self.format {
            OutputFormat::Json => presentation::to_json(fragment, ranked),
            OutputFormat::Text => Ok(presentation::format_suggestions(fragment, ranked)),
        }
    }
}

fn run(session: &mut Session) -> autocomplete_core::Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut stdout = io::stdout();

    loop {
        let Some(choice) = prompt(&mut stdout, &mut lines, MENU)? else {
            break;
        };

        match choice.trim() {
            "0" => break,
            "1" => {
                let Some(passage) = prompt(&mut stdout, &mut lines, "Train: ")? else {
                    break;
                };
                session.learner.learn(&mut session.engine, &passage);
            }
            "2" => {
                let Some(input) = prompt(&mut stdout, &mut lines, "Input: ")? else {
                    break;
                };
                let fragment = normalize_fragment(&input);
                let ranked = session.engine.suggest(&fragment, session.limit);
                let out = session.render(&fragment, &ranked)?;
                if out == NO_MATCH {
                    writeln!(stdout, "{}", out.as_str().yellow())?;
                } else {
                    writeln!(stdout, "{}", out)?;
                }
            }
            "3" => {
                let ranked = session.engine.dump();
                let out = match session.format {
                    OutputFormat::Json => presentation::to_json("", &ranked)?,
                    OutputFormat::Text => presentation::format_candidates(&ranked),
                };
                writeln!(stdout, "{}", out)?;
            }
            other => log::warn!("unknown choice '{}'", other),
        }
    }

    log::info!("learned {} distinct word(s)", session.engine.len());
    Ok(())
}

/// Prints `label` and reads one line. `None` at end of input.
fn prompt<B: BufRead>(
    stdout: &mut io::Stdout,
    lines: &mut io::Lines<B>,
    label: &str,
) -> io::Result<Option<String>> {
    write!(stdout, "{}", label.bold().cyan())?;
    stdout.flush()?;
    lines.next().transpose()
}
