//! # nginx-logsim - Synthetic nginx Log Generator
//!
//! Appends realistic nginx access and error log lines to `access.log` and
//! `error.log` on a timer, for exercising log collectors (Fluent Bit, Vector,
//! file watchers) without a real web server.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                      SimulationEngine                        │
//! │                                                              │
//! │   ┌───────────────────────────┐      ┌───────────────────┐   │
//! │   │       LogGenerator        │      │      LogSink      │   │
//! │   │  Catalog + RandomSource   │─────▶│  open/append/sync │   │
//! │   │  AccessRecord/ErrorRecord │      │  per line         │   │
//! │   └───────────────────────────┘      └───────────────────┘   │
//! │                 │                                            │
//! │                 ▼                                            │
//! │          Reporter (stdout progress + summary)                │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use nginx_logsim::{
//!     Catalog, ConsoleReporter, LogGenerator, RngSource, SimConfig, SimulationEngine,
//! };
//! use tokio_util::sync::CancellationToken;
//!
//! # async fn demo() -> Result<(), nginx_logsim::SimError> {
//! let config = SimConfig::default();
//! let generator = LogGenerator::new(Catalog::nginx(), RngSource::from_entropy());
//! let mut engine = SimulationEngine::new(config, generator, ConsoleReporter::stdout());
//!
//! let summary = engine.run(&CancellationToken::new()).await?;
//! println!("{} access lines", summary.access_records);
//! # Ok(())
//! # }
//! ```

pub mod catalog;
pub mod config;
pub mod engine;
pub mod error;
pub mod generator;
pub mod record;
pub mod report;
pub mod sink;
pub mod source;

pub use catalog::Catalog;
pub use config::{Args, SimConfig};
pub use engine::{EngineStats, RunSummary, SimulationEngine, StopReason, TickOutcome};
pub use error::{ConfigError, SimError};
pub use generator::LogGenerator;
pub use record::{AccessRecord, ErrorRecord};
pub use report::{ConsoleReporter, Reporter};
pub use sink::{LogKind, LogSink};
pub use source::{RandomSource, RngSource};
