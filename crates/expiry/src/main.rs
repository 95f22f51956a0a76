//! `expiry` - report password-expiration status for a system account.
//!
//! Thin pipeline over the platform account and aging databases: resolve the
//! named account, resolve its aging record, print the expiry report, and exit
//! with a status reflecting validity (0), lookup failure (1), usage error (2),
//! or expiry (3).

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

mod cli;
mod report;

use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use expiry_core::FileStore;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cli::Args;
use report::ExitStatus;

fn main() -> ExitCode {
    // Initialize logging; stdout carries the report, so log to stderr.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "expiry=warn,expiry_core=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let args = Args::parse();
    let store = FileStore::new();

    let mut out = io::stdout().lock();
    let mut err = io::stderr().lock();
    match report::run(&args, &store, &mut out, &mut err) {
        Ok(status) => status.into(),
        Err(error) => {
            let _ = writeln!(err, "expiry: {error:#}");
            ExitStatus::Failure.into()
        }
    }
}
