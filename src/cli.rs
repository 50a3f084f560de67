//! Command-line glue around the window alert counter.
//!
//! One optional positional argument overrides the window length. Report lines
//! go to the supplied writer; a validation failure prints a diagnostic and
//! ends the run without a count.

use anyhow::{Context, Result};
use std::io::Write;
use tracing::{debug, info};

use crate::alerts::count_alerts;
use crate::config::AlertConfig;
use crate::error::AlertError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    Counted(usize),
    Rejected(AlertError),
}

/// Window-length override from `args` (program name first).
/// Only used when exactly one argument is given and it parses as an integer.
pub fn window_override<S: AsRef<str>>(args: &[S]) -> Option<i64> {
    match args {
        [_, arg] => {
            let raw = arg.as_ref();
            match raw.trim().parse::<i64>() {
                Ok(v) => Some(v),
                Err(e) => {
                    debug!(arg = raw, "window override not an integer: {e}");
                    None
                }
            }
        }
        _ => None,
    }
}

pub fn run<S: AsRef<str>, W: Write>(
    args: &[S],
    config: &AlertConfig,
    out: &mut W,
) -> Result<RunOutcome> {
    let mut window_length = config.window_length;
    writeln!(out, "window_length={window_length}").context("write report")?;

    if let Some(v) = window_override(args) {
        window_length = v;
        writeln!(out, "command line argument overrides window_length={v}")
            .context("write report")?;
    }

    match count_alerts(window_length, config.threshold, &config.samples) {
        Ok(n) => {
            info!(window_length, threshold = config.threshold, alerts = n, "alerts counted");
            writeln!(out, "Number of alerts: {n}").context("write report")?;
            Ok(RunOutcome::Counted(n))
        }
        Err(e) => {
            writeln!(out, "ERR: count_alerts(): {e}").context("write report")?;
            Ok(RunOutcome::Rejected(e))
        }
    }
}
