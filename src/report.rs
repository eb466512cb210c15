//! Progress reporting
//!
//! The human-readable stdout surface of a run: start banner, one line per
//! tick and a final summary.

use crate::config::SimConfig;
use crate::engine::{RunSummary, StopReason, TickOutcome};
use crate::sink::{LogKind, LogSink};
use std::io::{self, Write};
use std::path::Path;

/// Observer of simulation progress.
pub trait Reporter {
    fn directory_created(&mut self, _dir: &Path) {}

    fn started(&mut self, _config: &SimConfig, _sink: &LogSink) {}

    fn tick(&mut self, count: u64, outcome: TickOutcome);

    fn finished(&mut self, summary: &RunSummary);
}

/// Writes progress lines to any `io::Write`, stdout by default.
///
/// Write errors on the progress stream are ignored; they must not end a run
/// whose log files are still healthy.
pub struct ConsoleReporter<W = io::Stdout> {
    out: W,
}

impl ConsoleReporter {
    pub fn stdout() -> Self {
        Self { out: io::stdout() }
    }
}

impl<W: Write> ConsoleReporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Reporter for ConsoleReporter<W> {
    fn directory_created(&mut self, dir: &Path) {
        let _ = writeln!(self.out, "Created directory: {}", dir.display());
    }

    fn started(&mut self, config: &SimConfig, sink: &LogSink) {
        let duration = match config.duration {
            Some(d) => format!("{}s", d.as_secs_f64()),
            None => "∞".to_string(),
        };
        let _ = writeln!(self.out, "Starting nginx log simulator...");
        let _ = writeln!(self.out, "Access logs: {}", sink.path(LogKind::Access).display());
        let _ = writeln!(self.out, "Error logs: {}", sink.path(LogKind::Error).display());
        let _ = writeln!(self.out, "Interval: {}s", config.interval.as_secs_f64());
        let _ = writeln!(self.out, "Duration: {}", duration);
        let _ = writeln!(self.out, "Press Ctrl+C to stop\n");
        let _ = self.out.flush();
    }

    fn tick(&mut self, count: u64, outcome: TickOutcome) {
        let what = match outcome {
            TickOutcome::AccessOnly => "access log",
            TickOutcome::AccessAndError => "access + error log",
        };
        let _ = writeln!(self.out, "[{}] Generated {}", count, what);
        let _ = self.out.flush();
    }

    fn finished(&mut self, summary: &RunSummary) {
        let lead = match summary.reason {
            StopReason::Completed => "\nCompleted!",
            StopReason::Cancelled => "\n\nStopped by user.",
        };
        let _ = writeln!(
            self.out,
            "{} Generated {} log entries in {:.1}s ({} error entries)",
            lead,
            summary.access_records,
            summary.elapsed.as_secs_f64(),
            summary.error_records
        );
        let _ = self.out.flush();
    }
}
