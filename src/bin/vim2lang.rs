//! Command-line interface for vim2lang.
//!
//! Usage:
//!   vim2lang                              - convert uclid.vim into uclid.lang.gen
//!   vim2lang `<input>` -o `<output>`          - convert a specific file
//!   vim2lang -c `<config.yaml>` [--stdout]  - override settings from a config file

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use vim2lang::{ConverterConfig, Error};

#[derive(Debug, Parser)]
#[command(
    name = "vim2lang",
    version,
    about = "Convert a vim syntax file into a GtkSourceView language file"
)]
struct Cli {
    /// Vim syntax file to convert (defaults to the config's input)
    input: Option<PathBuf>,

    /// Language file to write (defaults to the config's output)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// YAML or JSON config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the document instead of writing the output file
    #[arg(long)]
    stdout: bool,

    /// Only log warnings and errors
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.quiet);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(quiet: bool) {
    let default_level = if quiet { "warn" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn run(cli: Cli) -> Result<(), Error> {
    let mut config = match &cli.config {
        Some(path) => ConverterConfig::load(path)?,
        None => ConverterConfig::default(),
    };
    if let Some(input) = cli.input {
        config.input = input;
    }
    if let Some(output) = cli.output {
        config.output = output;
    }

    if cli.stdout {
        let (document, _) = vim2lang::render_file(&config)?;
        print!("{document}");
        return Ok(());
    }

    let conversion = vim2lang::convert_file(&config)?;
    tracing::info!(
        "wrote {} ({} contexts, {} skipped)",
        conversion.output.display(),
        conversion.emission.contexts.len(),
        conversion.emission.skipped.len()
    );
    Ok(())
}
