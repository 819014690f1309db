//! DICE CLI - questions and statements over a finite model.
//!
//! Single binary that provides:
//! - `dice` / `dice repl` - interactive dialogue
//! - `dice run <SCRIPT>` - feed a file through the dialogue
//! - `dice query <FORMULA>` - solve a lambda-notation formula

use std::fs::File;
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

use dice_session::{converse, Session, SessionConfig};

#[derive(Parser)]
#[command(name = "dice")]
#[command(about = "Ask questions about what you have told it", version)]
struct Cli {
    /// Session configuration (YAML)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Print the logical form of each question
    #[arg(long, global = true)]
    show_logic: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive dialogue on stdin
    Repl,

    /// Run each line of a script as a turn
    Run {
        /// Script file
        script: PathBuf,
    },

    /// Solve a formula such as '\x.duck(x)' against the preloaded model
    Query {
        formula: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr; responses own stdout
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    let mut config = load_config(cli.config.as_deref())?;
    if cli.show_logic {
        config.show_logic = true;
    }

    match cli.command {
        Some(Commands::Repl) | None => run_repl(config),
        Some(Commands::Run { script }) => run_script(config, &script),
        Some(Commands::Query { formula }) => run_query(config, &formula),
    }
}

fn load_config(path: Option<&Path>) -> Result<SessionConfig> {
    match path {
        Some(path) => SessionConfig::load(path),
        None => SessionConfig::load_or_default(Path::new("dice.yaml")),
    }
}

fn run_repl(config: SessionConfig) -> Result<()> {
    let mut session = Session::new(config);
    let stdin = io::stdin();
    converse(&mut session, stdin.lock(), io::stdout().lock(), false)
        .context("Dialogue I/O failed")?;
    Ok(())
}

fn run_script(config: SessionConfig, script: &Path) -> Result<()> {
    tracing::info!(script = %script.display(), "Running script");

    let file = File::open(script)
        .with_context(|| format!("Failed to open script {}", script.display()))?;
    let mut session = Session::new(config);
    converse(&mut session, BufReader::new(file), io::stdout().lock(), true)
        .with_context(|| format!("Failed to run script {}", script.display()))?;
    Ok(())
}

fn run_query(config: SessionConfig, formula: &str) -> Result<()> {
    let session = Session::new(config);
    let solutions = session
        .solve(formula)
        .with_context(|| format!("Failed to solve {}", formula))?;

    println!("{}", render_solutions(&solutions));
    Ok(())
}

/// One line for `query`: the satisfying entities, or `None`
fn render_solutions(solutions: &[String]) -> String {
    if solutions.is_empty() {
        "None".to_string()
    } else {
        solutions.join(" ")
    }
}
