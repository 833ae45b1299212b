// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! cj daemon (cjd)
//!
//! Background process that sweeps one jobfile at every minute boundary.

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

mod lifecycle;

use std::path::PathBuf;
use std::sync::Arc;

use cj_core::{Clock, SystemClock};
use tokio::signal::unix::{signal, SignalKind};
use tokio::task::JoinHandle;
use tracing::{error, info, warn};

use crate::lifecycle::{until_next_minute, Config, LifecycleError};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = std::env::args().collect();
    let jobfile = match args.get(1) {
        Some(path) => PathBuf::from(path),
        None => PathBuf::from("cron.toml"),
    };

    let config = Config::for_jobfile(&jobfile)?;

    // Write startup marker to log (before tracing setup)
    write_startup_marker(&config)?;

    let log_guard = setup_logging(&config)?;

    info!("Starting cjd for jobfile: {}", config.jobfile.display());

    let daemon = match lifecycle::startup(&config) {
        Ok(d) => d,
        Err(e) => {
            // Write error synchronously (tracing is non-blocking and may not flush in time)
            write_startup_error(&config, &e);
            error!("Failed to start daemon: {}", e);
            drop(log_guard);
            return Err(e.into());
        }
    };

    let mut sigterm = signal(SignalKind::terminate())?;
    let mut sigint = signal(SignalKind::interrupt())?;

    info!("Daemon ready, state in {}", config.state_dir.display());
    println!("READY");

    let mut in_flight: Option<JoinHandle<()>> = None;

    loop {
        let wait = until_next_minute(SystemClock.now());

        tokio::select! {
            _ = tokio::time::sleep(wait) => {
                if in_flight.as_ref().is_some_and(|h| !h.is_finished()) {
                    warn!("Previous sweep still running, skipping this minute");
                    continue;
                }
                let sweeper = Arc::clone(&daemon.sweeper);
                in_flight = Some(tokio::task::spawn_blocking(move || {
                    let mut sweeper = sweeper.lock().unwrap_or_else(|e| e.into_inner());
                    match sweeper.tick(&SystemClock) {
                        Ok(Some(report)) => info!(
                            total = report.total_jobs,
                            executed = report.executed_count,
                            failed = report.failed.len(),
                            "minute swept"
                        ),
                        Ok(None) => {}
                        Err(e) => error!("Sweep failed: {}", e),
                    }
                }));
            }

            _ = sigterm.recv() => {
                info!("Received SIGTERM, shutting down...");
                break;
            }

            _ = sigint.recv() => {
                info!("Received SIGINT, shutting down...");
                break;
            }
        }
    }

    // Let a running sweep finish its jobs
    if let Some(handle) = in_flight {
        if let Err(e) = handle.await {
            error!("Sweep task failed: {}", e);
        }
    }
    daemon.shutdown();

    info!("Daemon stopped");
    Ok(())
}

/// Startup marker prefix written to log before anything else.
/// Full format: "--- cjd: starting (pid: 12345) ---"
pub const STARTUP_MARKER_PREFIX: &str = "--- cjd: starting (pid: ";

/// Write startup marker to log file (appends to existing log)
fn write_startup_marker(config: &Config) -> Result<(), LifecycleError> {
    use std::io::Write;

    std::fs::create_dir_all(&config.state_dir)?;

    let mut file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&config.log_path)?;
    writeln!(file, "{}{}) ---", STARTUP_MARKER_PREFIX, std::process::id())?;

    Ok(())
}

/// Write startup error synchronously to log file.
fn write_startup_error(config: &Config, error: &LifecycleError) {
    use std::io::Write;

    let Ok(mut file) = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&config.log_path)
    else {
        return;
    };
    let _ = writeln!(file, "ERROR Failed to start daemon: {}", error);
}

fn setup_logging(
    config: &Config,
) -> Result<tracing_appender::non_blocking::WorkerGuard, LifecycleError> {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let file_appender = tracing_appender::rolling::never(
        &config.state_dir,
        config
            .log_path
            .file_name()
            .ok_or(LifecycleError::NoStateDir)?,
    );
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(non_blocking).with_ansi(false))
        .init();

    Ok(guard)
}
