//! Run configuration and its command-line surface.

use crate::error::ConfigError;
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_LOG_DIR: &str = "logs";
pub const DEFAULT_INTERVAL_SECS: f64 = 1.0;

/// Share of ticks that also write an error line.
pub const DEFAULT_ERROR_PROBABILITY: f64 = 0.2;

#[derive(Debug, Clone, PartialEq)]
pub struct SimConfig {
    /// Stop after this much wall-clock time; `None` runs until cancelled.
    pub duration: Option<Duration>,
    /// Pause between ticks.
    pub interval: Duration,
    pub log_dir: PathBuf,
    pub error_probability: f64,
    /// Fixed RNG seed; `None` draws from OS entropy.
    pub seed: Option<u64>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            duration: None,
            interval: Duration::from_secs_f64(DEFAULT_INTERVAL_SECS),
            log_dir: PathBuf::from(DEFAULT_LOG_DIR),
            error_probability: DEFAULT_ERROR_PROBABILITY,
            seed: None,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "nginx-logsim")]
#[command(about = "Nginx access/error log simulator for log pipeline testing")]
pub struct Args {
    /// How long to run (seconds). Default: run forever
    #[arg(short, long)]
    pub duration: Option<u64>,

    /// Interval between log entries (seconds)
    #[arg(short, long, default_value = "1.0", value_parser = parse_interval)]
    pub interval: Duration,

    /// Directory receiving access.log and error.log
    #[arg(long, default_value = DEFAULT_LOG_DIR)]
    pub log_dir: PathBuf,

    /// Seed for reproducible field choices
    #[arg(long)]
    pub seed: Option<u64>,
}

impl From<Args> for SimConfig {
    fn from(args: Args) -> Self {
        Self {
            duration: args.duration.map(Duration::from_secs),
            interval: args.interval,
            log_dir: args.log_dir,
            seed: args.seed,
            ..Self::default()
        }
    }
}

/// Seconds as a float, finite and not negative.
pub fn parse_interval(s: &str) -> Result<Duration, ConfigError> {
    let secs: f64 = s
        .trim()
        .parse()
        .map_err(|_| ConfigError::IntervalNotANumber(s.to_string()))?;
    Duration::try_from_secs_f64(secs).map_err(|_| ConfigError::IntervalOutOfRange(secs))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SimConfig::from(Args::try_parse_from(["nginx-logsim"]).unwrap());
        assert_eq!(config, SimConfig::default());
        assert_eq!(config.interval, Duration::from_secs(1));
        assert_eq!(config.log_dir, PathBuf::from("logs"));
        assert!(config.duration.is_none());
    }

    #[test]
    fn test_short_and_long_flags() {
        let short = Args::try_parse_from(["nginx-logsim", "-d", "30", "-i", "0.25"]).unwrap();
        let long = Args::try_parse_from([
            "nginx-logsim",
            "--duration",
            "30",
            "--interval",
            "0.25",
            "--log-dir",
            "/tmp/sim",
            "--seed",
            "9",
        ])
        .unwrap();

        assert_eq!(short.duration, Some(30));
        assert_eq!(short.interval, Duration::from_millis(250));

        let config = SimConfig::from(long);
        assert_eq!(config.duration, Some(Duration::from_secs(30)));
        assert_eq!(config.log_dir, PathBuf::from("/tmp/sim"));
        assert_eq!(config.seed, Some(9));
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(Args::try_parse_from(["nginx-logsim", "-d", "ten"]).is_err());
        assert!(Args::try_parse_from(["nginx-logsim", "-d", "1.5"]).is_err());
        assert!(Args::try_parse_from(["nginx-logsim", "-i", "fast"]).is_err());
        assert!(Args::try_parse_from(["nginx-logsim", "-i", "-1"]).is_err());
        assert!(Args::try_parse_from(["nginx-logsim", "--verbose"]).is_err());
    }

    #[test]
    fn test_parse_interval() {
        assert_eq!(parse_interval("0.1"), Ok(Duration::from_millis(100)));
        assert_eq!(parse_interval(" 2 "), Ok(Duration::from_secs(2)));
        assert_eq!(parse_interval("0"), Ok(Duration::ZERO));
        assert_eq!(
            parse_interval("abc"),
            Err(ConfigError::IntervalNotANumber("abc".to_string()))
        );
        assert!(matches!(
            parse_interval("-0.5"),
            Err(ConfigError::IntervalOutOfRange(_))
        ));
        assert!(parse_interval("inf").is_err());
        assert!(parse_interval("NaN").is_err());
    }
}
