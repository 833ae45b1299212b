// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! cj - run cron jobs from a TOML jobfile

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

mod commands;
mod completions;
mod error;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{check, force, hash_password, list, run};
use completions::CompletionsArgs;
use error::CliError;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "cj", version, about = "cj - cron jobs from a TOML jobfile")]
struct Cli {
    /// Jobfile to load
    #[arg(
        long,
        short = 'f',
        global = true,
        env = "CJ_JOBFILE",
        default_value = "cron.toml"
    )]
    jobfile: PathBuf,

    /// Log scheduler activity to stderr
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sweep the jobfile once, running every job due this minute
    Run(run::RunArgs),
    /// Run one job now, whatever its schedule
    Force(force::ForceArgs),
    /// List scheduled jobs
    List(list::ListArgs),
    /// Validate a cron expression and test it against a time
    Check(check::CheckArgs),
    /// Print the SHA-256 digest to use as password_hash
    HashPassword(hash_password::HashPasswordArgs),
    /// Generate shell completions
    Completions(CompletionsArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    match dispatch(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            match e.downcast_ref::<CliError>() {
                Some(err) => eprint!("{}", err),
                None => eprintln!("error: {:#}", e),
            }
            ExitCode::FAILURE
        }
    }
}

fn dispatch(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Run(args) => run::run(&cli.jobfile, args),
        Commands::Force(args) => force::force(&cli.jobfile, args),
        Commands::List(args) => list::list(&cli.jobfile, args),
        Commands::Check(args) => check::check(args),
        Commands::HashPassword(args) => {
            hash_password::hash_password(args);
            Ok(())
        }
        Commands::Completions(args) => {
            completions::generate_completions::<Cli>(args.shell);
            Ok(())
        }
    }
}

fn setup_logging(verbose: bool) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .init();
}
