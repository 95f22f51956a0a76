//! The lookup/report pipeline and exit-status mapping.

use std::io::Write;

use anyhow::Result;
use chrono::Utc;
use expiry_core::{Aging, Error, ExpiryStatus, FileStore};
use tracing::debug;

use crate::cli::Args;

/// Process exit statuses produced by the reporter.
///
/// Usage errors exit with status 2 before the reporter runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitStatus {
    /// Password is still valid.
    Valid,
    /// A required lookup failed.
    Failure,
    /// Password has expired.
    Expired,
}

impl From<ExitStatus> for std::process::ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Valid => Self::SUCCESS,
            ExitStatus::Failure => Self::from(1),
            ExitStatus::Expired => Self::from(3),
        }
    }
}

/// Run the pipeline for `args.user`: account lookup, aging lookup, report.
///
/// Report lines go to `out`, diagnostics to `err`. The returned status is the
/// process exit status; `Err` is reserved for failures writing the streams
/// themselves.
///
/// # Errors
///
/// Returns an error if writing to `out` or `err` fails.
pub fn run(
    args: &Args,
    store: &FileStore,
    out: &mut impl Write,
    err: &mut impl Write,
) -> Result<ExitStatus> {
    let account = match store.account(&args.user) {
        Ok(account) => account,
        Err(Error::NotFound(_)) => {
            writeln!(err, "User {} does not exist", args.user)?;
            return Ok(ExitStatus::Failure);
        }
        Err(error) => {
            writeln!(
                err,
                "Cannot get password information for {}: {error}",
                args.user
            )?;
            return Ok(ExitStatus::Failure);
        }
    };

    if args.verbose {
        writeln!(out, "User name:\t{}", account.gecos)?;
    }

    let shadow = match store.aging(&args.user) {
        Ok(shadow) => shadow,
        Err(error) => {
            writeln!(
                err,
                "Cannot get shadow password information for {}: {error}",
                args.user
            )?;
            return Ok(ExitStatus::Failure);
        }
    };

    let aging = Aging::from(&shadow);
    let status = ExpiryStatus::compute(aging, Utc::now().timestamp());
    debug!(?aging, remaining_secs = status.remaining_secs, "computed expiry");

    print_status(out, args.verbose, aging, &status)
}

/// Print the aging report for an already-computed status.
fn print_status(
    out: &mut impl Write,
    verbose: bool,
    aging: Aging,
    status: &ExpiryStatus,
) -> Result<ExitStatus> {
    // Raw day count when the instant cannot be rendered on the calendar.
    match status.last_change_date() {
        Some(date) => writeln!(out, "Last password change:\t{date}")?,
        None => writeln!(out, "Last password change:\t{}", aging.last_change_day)?,
    }

    if verbose {
        writeln!(out, "Maximum password age:\t{} days", aging.max_age_days)?;
        writeln!(out, "Current password age:\t{} days", status.age_days())?;
    }

    if status.is_valid() {
        writeln!(out, "Password expires in:\t{} days", status.days_left())?;
        Ok(ExitStatus::Valid)
    } else {
        writeln!(out, "Password expired:\t{} days ago", status.days_overdue())?;
        Ok(ExitStatus::Expired)
    }
}
