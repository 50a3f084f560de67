// src/lib.rs
// Public library surface for the binary and integration tests.

pub mod alerts;
pub mod cli;
pub mod config;
pub mod error;

// ---- Re-exports for stable public API ----
pub use crate::alerts::{count_alerts, trailing_averages, validate, WindowAlertCounter};
pub use crate::config::AlertConfig;
pub use crate::error::{AlertError, AlertInput, Violation};
