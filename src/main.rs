use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use chess_rules::app::{self, OutputFormat};
use chess_rules::ui::BoardSnapshot;
use clap::Parser;

/// Play chess from the terminal: one command per line on stdin.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    /// Write events and views as JSON lines instead of text
    #[arg(long)]
    json: bool,

    /// Read commands from a file instead of stdin
    #[arg(long, value_name = "PATH")]
    script: Option<PathBuf>,

    /// Print the JSON Schema of the board snapshot and exit
    #[arg(long)]
    schema: bool,
}

fn main() {
    let args = Args::parse();

    let log_level = if args.debug { "debug" } else { "info" };
    let mut builder = env_logger::Builder::from_env(
        env_logger::Env::default().filter_or(env_logger::DEFAULT_FILTER_ENV, log_level),
    );
    builder
        .format(|buf, record| {
            writeln!(buf, "[{}] {}: {}", record.level(), record.target(), record.args())
        })
        .target(env_logger::Target::Stderr)
        .init();

    if let Err(e) = run(args) {
        log::error!("{e:#}");
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let stdout = io::stdout();

    if args.schema {
        let schema = schemars::schema_for!(BoardSnapshot);
        let text = serde_json::to_string_pretty(&schema).context("failed to serialize schema")?;
        writeln!(stdout.lock(), "{text}")?;
        return Ok(());
    }

    let format = if args.json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };

    match args.script {
        Some(path) => {
            let file = File::open(&path)
                .with_context(|| format!("failed to open script {}", path.display()))?;
            log::info!("running script {}", path.display());
            app::run(BufReader::new(file), stdout.lock(), format)?;
        }
        None => {
            app::run(io::stdin().lock(), stdout.lock(), format)?;
        }
    }
    Ok(())
}
