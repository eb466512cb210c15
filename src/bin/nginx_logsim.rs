//! nginx-logsim - nginx access/error log simulator
//!
//! Usage:
//!   nginx-logsim                      # 1 line/s into ./logs until Ctrl+C
//!   nginx-logsim -d 60 -i 0.1         # 10 lines/s for one minute
//!   nginx-logsim --log-dir /var/tmp/nginx --seed 42

use anyhow::{Context, Result};
use clap::Parser;
use nginx_logsim::{
    Args, Catalog, ConsoleReporter, LogGenerator, RngSource, SimConfig, SimulationEngine,
};
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let config = SimConfig::from(Args::parse());

    // stdout is the progress surface; diagnostics go to stderr.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let cancel = CancellationToken::new();
    tokio::spawn(cancel_on_ctrl_c(cancel.clone()));

    let generator = LogGenerator::new(Catalog::nginx(), RngSource::from_seed_option(config.seed));
    let mut engine = SimulationEngine::new(config, generator, ConsoleReporter::stdout());

    let summary = engine
        .run(&cancel)
        .await
        .context("log simulation aborted")?;

    info!(reason = ?summary.reason, "Goodbye.");
    Ok(())
}

async fn cancel_on_ctrl_c(cancel: CancellationToken) {
    match tokio::signal::ctrl_c().await {
        Ok(()) => {
            info!("Interrupt received, stopping after the current tick");
            cancel.cancel();
        }
        Err(e) => warn!(error = %e, "Failed to install Ctrl+C handler"),
    }
}
