//! stridecalc - Workout statistics calculator

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use tracing::Level;

use stridecalc::Locale;
use stridecalc::dispatch::WorkoutKind;
use stridecalc::packages::{ErrorPolicy, load_packages, process_batch_with, sample_packages};

#[derive(Parser)]
#[command(name = "stridecalc")]
#[command(author, version, about = "Distance, speed and calories for running, walking and swimming")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// JSON file with packages (embedded sample data if absent)
    #[arg(short, long, env = "STRIDECALC_INPUT")]
    input: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, env = "STRIDECALC_FORMAT", default_value = "text")]
    format: OutputFormat,

    /// Language of text output (en, ru)
    #[arg(short, long, env = "STRIDECALC_LANG", default_value = "en")]
    lang: Locale,

    /// Skip malformed records instead of aborting
    #[arg(short, long)]
    keep_going: bool,

    /// Debug logging to stderr
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List supported workout codes
    Kinds,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::WARN })
        .init();

    if let Some(Commands::Kinds) = cli.command {
        for kind in WorkoutKind::all() {
            println!("{} | {:13} | {}", kind.code(), kind.label(), kind.fields().join(", "));
        }
        return Ok(());
    }

    let packages = match &cli.input {
        Some(path) => load_packages(path)?,
        None => sample_packages(),
    };

    let policy = if cli.keep_going {
        ErrorPolicy::Skip
    } else {
        ErrorPolicy::Abort
    };

    // Text lines go out as each record is computed; JSON is one array, so it
    // is printed after the batch, including the records before an abort.
    let mut collected = Vec::new();
    let result = process_batch_with(&packages, policy, |summary| match cli.format {
        OutputFormat::Text => println!("{}", summary.message(cli.lang)),
        OutputFormat::Json => collected.push(summary.clone()),
    });
    if let OutputFormat::Json = cli.format {
        println!("{}", serde_json::to_string_pretty(&collected)?);
    }
    let report = result?;

    for failure in &report.failures {
        eprintln!(
            "Skipped record {} ({}): {}",
            failure.index, failure.package.workout_type, failure.error
        );
    }

    Ok(())
}
