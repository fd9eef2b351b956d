//! # sha256 CLI Entry Point
//!
//! Assembles subcommands, initializes logging, and prints handler reports.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

/// SHA-256 toolkit: hash, verify, and inspect messages.
#[derive(Parser, Debug)]
#[command(name = "sha256", version, about)]
struct Cli {
    /// Emit logs as JSON lines on stderr.
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Hash a string or file.
    Hash(sha256_cli::hash::HashArgs),
    /// Compare a digest against an expected hex value.
    Verify(sha256_cli::verify::VerifyArgs),
    /// Show padded blocks and message schedules in binary.
    Inspect(sha256_cli::inspect::InspectArgs),
}

fn init_tracing(json: bool) {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.log_json);

    match cli.command {
        Commands::Hash(args) => {
            let report = sha256_cli::hash::run_hash(&args)?;
            if args.json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print!("{}", report.render_text());
            }
        }
        Commands::Verify(args) => {
            let report = sha256_cli::verify::run_verify(&args)?;
            if args.json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print!("{}", report.render_text());
            }
            if !report.matches {
                return Ok(ExitCode::FAILURE);
            }
        }
        Commands::Inspect(args) => {
            let report = sha256_cli::inspect::run_inspect(&args)?;
            print!("{}", report.render_text());
        }
    }

    Ok(ExitCode::SUCCESS)
}
