//! Simulation Engine
//!
//! Timed loop that writes one access line per tick and, with a configured
//! probability, one error line after it.
//!
//! ```text
//!   RUNNING ──tick──▶ RUNNING ──duration elapsed──▶ STOPPED (Completed)
//!      │                                     ▲
//!      └──────── cancellation token ─────────┘        (Cancelled)
//! ```
//!
//! Cancellation is checked before every tick and raced against every sleep,
//! so it never lands in the middle of a write and never waits out a full
//! interval. An I/O failure ends the run immediately with no summary.

use crate::config::SimConfig;
use crate::error::SimError;
use crate::generator::LogGenerator;
use crate::report::Reporter;
use crate::sink::{LogKind, LogSink};
use crate::source::RandomSource;
use std::time::Duration;
use tokio::time::{Instant, sleep};
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info};

/// What a single tick wrote.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    AccessOnly,
    AccessAndError,
}

/// Why the loop reached STOPPED.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// The configured duration elapsed.
    Completed,
    /// The cancellation token fired.
    Cancelled,
}

/// Final tally of a run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunSummary {
    pub access_records: u64,
    pub error_records: u64,
    pub elapsed: Duration,
    pub reason: StopReason,
}

/// Counters owned by the loop for the duration of a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EngineStats {
    pub access_records: u64,
    pub error_records: u64,
}

pub struct SimulationEngine<S, R> {
    config: SimConfig,
    generator: LogGenerator<S>,
    sink: LogSink,
    reporter: R,
    stats: EngineStats,
}

impl<S: RandomSource, R: Reporter> SimulationEngine<S, R> {
    pub fn new(config: SimConfig, generator: LogGenerator<S>, reporter: R) -> Self {
        let sink = LogSink::new(config.log_dir.clone());
        Self {
            config,
            generator,
            sink,
            reporter,
            stats: EngineStats::default(),
        }
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn sink(&self) -> &LogSink {
        &self.sink
    }

    pub fn stats(&self) -> EngineStats {
        self.stats
    }

    pub fn reporter(&self) -> &R {
        &self.reporter
    }

    pub fn into_parts(self) -> (SimConfig, EngineStats, R) {
        (self.config, self.stats, self.reporter)
    }

    /// Run until the duration elapses or `cancel` fires.
    pub async fn run(&mut self, cancel: &CancellationToken) -> Result<RunSummary, SimError> {
        if self.sink.prepare()? {
            self.reporter.directory_created(self.sink.dir());
        }
        self.reporter.started(&self.config, &self.sink);
        info!(
            dir = %self.sink.dir().display(),
            interval_ms = self.config.interval.as_millis() as u64,
            duration_secs = ?self.config.duration.map(|d| d.as_secs()),
            "Simulation started"
        );

        let start = Instant::now();

        let reason = loop {
            if cancel.is_cancelled() {
                break StopReason::Cancelled;
            }

            let outcome = self.tick().inspect_err(|e| {
                error!(error = %e, path = %e.path().display(), "Log write failed, aborting run");
            })?;
            self.reporter.tick(self.stats.access_records, outcome);

            if let Some(limit) = self.config.duration {
                if start.elapsed() >= limit {
                    break StopReason::Completed;
                }
            }

            tokio::select! {
                biased;
                _ = cancel.cancelled() => break StopReason::Cancelled,
                _ = sleep(self.config.interval) => {}
            }
        };

        let summary = RunSummary {
            access_records: self.stats.access_records,
            error_records: self.stats.error_records,
            elapsed: start.elapsed(),
            reason,
        };
        info!(
            access = summary.access_records,
            errors = summary.error_records,
            elapsed_ms = summary.elapsed.as_millis() as u64,
            reason = ?summary.reason,
            "Simulation stopped"
        );
        self.reporter.finished(&summary);

        Ok(summary)
    }

    /// One RUNNING -> RUNNING step: access write first, then maybe an error write.
    fn tick(&mut self) -> Result<TickOutcome, SimError> {
        let access = self.generator.access_record();
        self.sink.append(LogKind::Access, &access.to_string())?;
        self.stats.access_records += 1;

        if !self.generator.roll(self.config.error_probability) {
            debug!(count = self.stats.access_records, "Tick wrote access line");
            return Ok(TickOutcome::AccessOnly);
        }

        let error = self.generator.error_record();
        self.sink.append(LogKind::Error, &error.to_string())?;
        self.stats.error_records += 1;

        debug!(
            count = self.stats.access_records,
            level = error.level,
            "Tick wrote access and error lines"
        );
        Ok(TickOutcome::AccessAndError)
    }
}
