use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::Parser;
use cli::Menu;
use colored::Colorize;
use data_loader::MovieCollection;
use query_engine::QueryEngine;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

/// Movies - answer questions about a movie file
#[derive(Parser)]
#[command(name = "movies", version)]
#[command(about = "Load a movie file and query it interactively", long_about = None)]
struct Cli {
    /// Path to the movie file (title,year,[languages],rating per line)
    file: PathBuf,
}

fn main() -> ExitCode {
    // Initialize tracing; logs go to stderr so they never mix with the menu
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if err.kind() == ErrorKind::MissingRequiredArgument => {
            println!("You must provide the name of the file to process");
            println!("Example usage: movies movies_sample_1.csv");
            return ExitCode::FAILURE;
        }
        Err(err) => {
            // --help and --version also arrive here
            let _ = err.print();
            return if err.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            println!("{} {:#}", "error:".red().bold(), err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let start = Instant::now();
    let report = MovieCollection::load_from_file(&cli.file)
        .with_context(|| format!("Failed to load movie file {}", cli.file.display()))?;

    for skipped in &report.skipped {
        println!("{} {}", "Skipped:".yellow(), skipped);
    }
    println!(
        "{} Processed file {} and parsed data for {} movies in {:?}",
        "✓".green(),
        cli.file.display(),
        report.collection.len(),
        start.elapsed()
    );

    let engine = QueryEngine::new(&report.collection);
    let stdin = io::stdin();
    let mut menu = Menu::new(engine, stdin.lock(), io::stdout().lock());
    menu.run().context("Failed to read from the terminal")?;

    Ok(())
}
