//! # Alert errors
//! A single error kind, `OutOfRange`, tagged with the offending input and
//! which side of its bound was crossed.

use std::fmt;
use thiserror::Error;

/// Which input violated its bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertInput {
    WindowLength,
    Threshold,
    /// Sample at the given minute index.
    Sample(usize),
    /// Length of the sample sequence.
    SampleCount,
}

impl fmt::Display for AlertInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlertInput::WindowLength => f.write_str("window_length"),
            AlertInput::Threshold => f.write_str("threshold"),
            AlertInput::Sample(i) => write!(f, "samples[{i}]"),
            AlertInput::SampleCount => f.write_str("sample count"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Violation {
    TooSmall,
    TooLarge,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::TooSmall => f.write_str("below minimum"),
            Violation::TooLarge => f.write_str("above maximum"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AlertError {
    #[error("{input} {violation}: got {value}, allowed {min}..={max}")]
    OutOfRange {
        input: AlertInput,
        violation: Violation,
        value: i64,
        min: i64,
        max: i64,
    },
}

impl AlertError {
    pub(crate) fn too_small(input: AlertInput, value: i64, min: i64, max: i64) -> Self {
        AlertError::OutOfRange {
            input,
            violation: Violation::TooSmall,
            value,
            min,
            max,
        }
    }

    pub(crate) fn too_large(input: AlertInput, value: i64, min: i64, max: i64) -> Self {
        AlertError::OutOfRange {
            input,
            violation: Violation::TooLarge,
            value,
            min,
            max,
        }
    }

    pub fn input(&self) -> AlertInput {
        match self {
            AlertError::OutOfRange { input, .. } => *input,
        }
    }

    pub fn violation(&self) -> Violation {
        match self {
            AlertError::OutOfRange { violation, .. } => *violation,
        }
    }

    /// Negative status code, one per validation step (-1..=-6).
    /// Sample values and the sample count share the same codes.
    pub fn code(&self) -> i32 {
        match (self.input(), self.violation()) {
            (AlertInput::WindowLength, Violation::TooSmall) => -1,
            (AlertInput::WindowLength, Violation::TooLarge) => -2,
            (AlertInput::Threshold, Violation::TooSmall) => -3,
            (AlertInput::Threshold, Violation::TooLarge) => -4,
            (AlertInput::Sample(_) | AlertInput::SampleCount, Violation::TooSmall) => -5,
            (AlertInput::Sample(_) | AlertInput::SampleCount, Violation::TooLarge) => -6,
        }
    }
}
