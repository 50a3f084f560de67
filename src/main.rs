//! Call Volume Alerts — Binary Entrypoint
//! Loads config, applies the optional window-length argument and prints the
//! number of trailing windows that meet the alert threshold.

use anyhow::Result;
use call_volume_alerts::{cli, AlertConfig};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Enable compact tracing logs on stderr when ALERTS_LOG=1.
fn enable_tracing() {
    let on = std::env::var("ALERTS_LOG")
        .ok()
        .is_some_and(|v| v == "1");
    if !on {
        return;
    }

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("call_volume_alerts=info,warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    // Load .env if present; no-op otherwise.
    let _ = dotenvy::dotenv();
    enable_tracing();

    let mut config = AlertConfig::load_default()?;
    config.apply_env_overrides();

    let args: Vec<String> = std::env::args().collect();
    let stdout = std::io::stdout();
    // Validation failures are reported on stdout and still exit 0.
    cli::run(&args, &config, &mut stdout.lock())?;
    Ok(())
}
