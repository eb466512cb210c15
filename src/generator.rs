//! Log Generator
//!
//! Pairs a [`Catalog`] with a [`RandomSource`] and stamps records with the
//! current local time. Generation never fails.

use crate::catalog::Catalog;
use crate::record::{AccessRecord, ErrorRecord};
use crate::source::RandomSource;
use chrono::{DateTime, FixedOffset, Local};

/// Record factory for one simulation run.
pub struct LogGenerator<S> {
    catalog: Catalog,
    source: S,
}

impl<S: RandomSource> LogGenerator<S> {
    pub fn new(catalog: Catalog, source: S) -> Self {
        Self { catalog, source }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Access record stamped with the local wall clock.
    pub fn access_record(&mut self) -> AccessRecord {
        self.access_record_at(now_local())
    }

    pub fn access_record_at(&mut self, time_local: DateTime<FixedOffset>) -> AccessRecord {
        AccessRecord::sample(&self.catalog, &mut self.source, time_local)
    }

    /// Error record stamped with the local wall clock.
    pub fn error_record(&mut self) -> ErrorRecord {
        self.error_record_at(now_local())
    }

    pub fn error_record_at(&mut self, timestamp: DateTime<FixedOffset>) -> ErrorRecord {
        ErrorRecord::sample(&self.catalog, &mut self.source, timestamp)
    }

    /// Bernoulli draw from the same source the records use.
    pub fn roll(&mut self, probability: f64) -> bool {
        self.source.chance(probability)
    }
}

fn now_local() -> DateTime<FixedOffset> {
    Local::now().fixed_offset()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::{RngSource, ScriptedSource};
    use chrono::TimeZone;

    #[test]
    fn test_shared_source_drives_records_and_rolls() {
        let mut script = ScriptedSource::new()
            .indices(&[0, 0, 0, 3, 0, 0])
            .chances(&[true, false]);
        let at = FixedOffset::west_opt(5 * 3600)
            .unwrap()
            .with_ymd_and_hms(2023, 12, 31, 23, 59, 59)
            .unwrap();

        {
            let mut generator = LogGenerator::new(Catalog::nginx(), &mut script);
            let record = generator.access_record_at(at);
            assert_eq!(record.status, 201);
            assert!(record.to_string().contains("[31/Dec/2023:23:59:59 -0500]"));
            assert!(generator.roll(0.2));
        }

        // The borrowed script kept its position across the generator's lifetime.
        assert_eq!(script.chances.len(), 1);
    }

    #[test]
    fn test_wall_clock_records_render() {
        let mut generator = LogGenerator::new(Catalog::default(), RngSource::seeded(5));

        let access = generator.access_record().to_string();
        assert!(access.contains(" HTTP/1.1\" "));

        let error = generator.error_record().to_string();
        let (_, tail) = error.split_once("] ").unwrap();
        assert!(tail.split_once(": ").unwrap().0.contains('#'));
        assert_eq!(generator.catalog().methods.len(), 5);
    }
}
