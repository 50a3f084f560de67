//! # Window alerts
//! Counts trailing windows of per-minute call volumes whose average meets
//! or exceeds an alert threshold.
//!
//! The window for end index `i` covers samples `[i - window_length, i)`.
//! End indices run from `window_length` up to (not including) the sequence
//! length, so a sequence of `n` samples yields `n - window_length` windows
//! at most and none when `window_length >= n`.

use tracing::{debug, trace};

use crate::error::{AlertError, AlertInput};

pub const MIN_WINDOW_LENGTH: i64 = 1;
pub const MAX_WINDOW_LENGTH: i64 = 105;
pub const MIN_THRESHOLD: i64 = 1;
pub const MAX_THRESHOLD: i64 = 105;
pub const MIN_SAMPLE: i64 = 0;
pub const MAX_SAMPLE: i64 = 105;
pub const MAX_SAMPLE_COUNT: usize = 105;

/// Validated window length + threshold pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowAlertCounter {
    window_length: usize,
    threshold: i64,
}

impl WindowAlertCounter {
    /// Checks the window length first, then the threshold.
    pub fn new(window_length: i64, threshold: i64) -> Result<Self, AlertError> {
        let window_length = check_window_length(window_length)?;
        check_range(AlertInput::Threshold, threshold, MIN_THRESHOLD, MAX_THRESHOLD)?;
        Ok(Self {
            window_length,
            threshold,
        })
    }

    pub fn window_length(&self) -> usize {
        self.window_length
    }

    pub fn threshold(&self) -> i64 {
        self.threshold
    }

    /// Number of windows whose average is `>= threshold`.
    pub fn count(&self, samples: &[i64]) -> Result<usize, AlertError> {
        check_samples(samples)?;

        let threshold = self.threshold as f64;
        let mut alerts = 0usize;
        let mut evaluated = 0usize;

        for (end, avg) in windows(self.window_length, samples) {
            evaluated += 1;
            if threshold <= avg {
                alerts += 1;
                trace!(end, avg, "window alert");
            }
        }

        debug!(
            window_length = self.window_length,
            threshold = self.threshold,
            samples = samples.len(),
            evaluated,
            alerts,
            "trailing window scan finished"
        );
        Ok(alerts)
    }
}

/// Validate all inputs, then count alerting windows.
pub fn count_alerts(
    window_length: i64,
    threshold: i64,
    samples: &[i64],
) -> Result<usize, AlertError> {
    WindowAlertCounter::new(window_length, threshold)?.count(samples)
}

/// Run only the validation pass, in the same order `count_alerts` uses.
pub fn validate(window_length: i64, threshold: i64, samples: &[i64]) -> Result<(), AlertError> {
    WindowAlertCounter::new(window_length, threshold)?;
    check_samples(samples)
}

/// Average of every evaluated window, ordered by end index.
pub fn trailing_averages(window_length: i64, samples: &[i64]) -> Result<Vec<f64>, AlertError> {
    let window_length = check_window_length(window_length)?;
    check_samples(samples)?;
    Ok(windows(window_length, samples).map(|(_, avg)| avg).collect())
}

/// Yields `(end_index, average)` for each fully contained trailing window.
fn windows(window_length: usize, samples: &[i64]) -> impl Iterator<Item = (usize, f64)> + '_ {
    (window_length..samples.len()).map(move |end| {
        let sum: i64 = samples[end - window_length..end].iter().sum();
        (end, sum as f64 / window_length as f64)
    })
}

fn check_window_length(window_length: i64) -> Result<usize, AlertError> {
    check_range(
        AlertInput::WindowLength,
        window_length,
        MIN_WINDOW_LENGTH,
        MAX_WINDOW_LENGTH,
    )?;
    // Bounded to 1..=105 above.
    Ok(window_length as usize)
}

/// Negative samples anywhere are reported before oversized ones.
fn check_samples(samples: &[i64]) -> Result<(), AlertError> {
    if let Some((i, &v)) = samples.iter().enumerate().find(|&(_, &v)| v < MIN_SAMPLE) {
        return Err(AlertError::too_small(
            AlertInput::Sample(i),
            v,
            MIN_SAMPLE,
            MAX_SAMPLE,
        ));
    }
    if let Some((i, &v)) = samples.iter().enumerate().find(|&(_, &v)| v > MAX_SAMPLE) {
        return Err(AlertError::too_large(
            AlertInput::Sample(i),
            v,
            MIN_SAMPLE,
            MAX_SAMPLE,
        ));
    }
    if samples.len() > MAX_SAMPLE_COUNT {
        return Err(AlertError::too_large(
            AlertInput::SampleCount,
            samples.len() as i64,
            0,
            MAX_SAMPLE_COUNT as i64,
        ));
    }
    Ok(())
}

fn check_range(input: AlertInput, value: i64, min: i64, max: i64) -> Result<(), AlertError> {
    if value < min {
        Err(AlertError::too_small(input, value, min, max))
    } else if value > max {
        Err(AlertError::too_large(input, value, min, max))
    } else {
        Ok(())
    }
}
