//! Log record types and their nginx text rendering.
//!
//! Records are built from one draw per field and rendered through
//! `Display`, without the trailing newline (the sink adds it).

use crate::catalog::{Catalog, pick};
use crate::source::RandomSource;
use chrono::{DateTime, FixedOffset};
use std::fmt;

/// Protocol written into every request line.
pub const PROTOCOL: &str = "HTTP/1.1";

/// `remote_user` is never known to the simulator.
pub const REMOTE_USER: &str = "-";

pub const BODY_BYTES_RANGE: (u32, u32) = (100, 50_000);
pub const REQUEST_LENGTH_RANGE: (u32, u32) = (200, 1_500);
pub const REQUEST_TIME_RANGE: (f64, f64) = (0.001, 2.5);

pub const PID_RANGE: (u32, u32) = (1_000, 9_999);
pub const TID_RANGE: (u32, u32) = (0, 99);
pub const CONNECTION_ID_RANGE: (u32, u32) = (100, 999);

/// Probability that an error line carries a `*<cid>` connection token.
pub const CONNECTION_ID_PROBABILITY: f64 = 0.7;

const ACCESS_TIME_FORMAT: &str = "%d/%b/%Y:%H:%M:%S %z";
const ERROR_TIME_FORMAT: &str = "%Y/%m/%d %H:%M:%S";

// ============================================================================
// Access log
// ============================================================================

/// One simulated request, in nginx `combined` format plus
/// `$request_length $request_time`.
#[derive(Debug, Clone, PartialEq)]
pub struct AccessRecord {
    pub remote_addr: &'static str,
    pub time_local: DateTime<FixedOffset>,
    pub method: &'static str,
    pub path: &'static str,
    pub status: u16,
    pub body_bytes_sent: u32,
    pub referer: &'static str,
    pub user_agent: &'static str,
    pub request_length: u32,
    /// Seconds, already rounded to milliseconds.
    pub request_time: f64,
}

impl AccessRecord {
    pub fn sample<S: RandomSource + ?Sized>(
        catalog: &Catalog,
        source: &mut S,
        time_local: DateTime<FixedOffset>,
    ) -> Self {
        let remote_addr = pick(source, catalog.remote_addrs);
        let method = pick(source, catalog.methods);
        let path = pick(source, catalog.endpoints);
        let status = pick(source, catalog.status_codes);
        let body_bytes_sent = source.int_inclusive(BODY_BYTES_RANGE.0, BODY_BYTES_RANGE.1);
        let referer = pick(source, catalog.referers);
        let user_agent = pick(source, catalog.user_agents);
        let request_length =
            source.int_inclusive(REQUEST_LENGTH_RANGE.0, REQUEST_LENGTH_RANGE.1);
        let raw_time = source.float_inclusive(REQUEST_TIME_RANGE.0, REQUEST_TIME_RANGE.1);

        Self {
            remote_addr,
            time_local,
            method,
            path,
            status,
            body_bytes_sent,
            referer,
            user_agent,
            request_length,
            request_time: round_millis(raw_time),
        }
    }

    /// `METHOD PATH HTTP/1.1`
    pub fn request_line(&self) -> String {
        format!("{} {} {}", self.method, self.path, PROTOCOL)
    }
}

impl fmt::Display for AccessRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} [{}] \"{} {} {}\" {} {} \"{}\" \"{}\" {} {:.3}",
            self.remote_addr,
            REMOTE_USER,
            self.time_local.format(ACCESS_TIME_FORMAT),
            self.method,
            self.path,
            PROTOCOL,
            self.status,
            self.body_bytes_sent,
            self.referer,
            self.user_agent,
            self.request_length,
            self.request_time,
        )
    }
}

fn round_millis(seconds: f64) -> f64 {
    let rounded = (seconds * 1000.0).round() / 1000.0;
    rounded.clamp(REQUEST_TIME_RANGE.0, REQUEST_TIME_RANGE.1)
}

// ============================================================================
// Error log
// ============================================================================

/// One simulated nginx `error_log` diagnostic.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorRecord {
    pub timestamp: DateTime<FixedOffset>,
    pub level: &'static str,
    pub pid: u32,
    pub tid: u32,
    pub connection_id: Option<u32>,
    pub message: &'static str,
}

impl ErrorRecord {
    pub fn sample<S: RandomSource + ?Sized>(
        catalog: &Catalog,
        source: &mut S,
        timestamp: DateTime<FixedOffset>,
    ) -> Self {
        let level = pick(source, catalog.error_levels);
        let pid = source.int_inclusive(PID_RANGE.0, PID_RANGE.1);
        let tid = source.int_inclusive(TID_RANGE.0, TID_RANGE.1);
        let connection_id = source
            .chance(CONNECTION_ID_PROBABILITY)
            .then(|| source.int_inclusive(CONNECTION_ID_RANGE.0, CONNECTION_ID_RANGE.1));
        let message = pick(source, catalog.error_messages);

        Self {
            timestamp,
            level,
            pid,
            tid,
            connection_id,
            message,
        }
    }
}

impl fmt::Display for ErrorRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} [{}] {}#{}: ",
            self.timestamp.format(ERROR_TIME_FORMAT),
            self.level,
            self.pid,
            self.tid
        )?;
        if let Some(cid) = self.connection_id {
            write!(f, "*{} ", cid)?;
        }
        f.write_str(self.message)
    }
}
