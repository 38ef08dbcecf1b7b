//! Plausible, monotonic event timestamps.
//!
//! The first event of a trace lands somewhere in roughly the last year; each
//! following event happens at most one day after its predecessor.

use chrono::{DateTime, Duration, Months, Utc};
use rand::Rng;

/// Upper bound of the random month offset for a trace's first event.
pub const MAX_START_OFFSET_MONTHS: u32 = 12;

/// Upper bound of the additional random week offset.
pub const MAX_START_OFFSET_WEEKS: i64 = 4;

/// Upper bound of the additional random day offset.
pub const MAX_START_OFFSET_DAYS: i64 = 7;

/// Largest gap between two consecutive events of a trace (one day).
pub const MAX_EVENT_GAP_MILLIS: i64 = 24 * 60 * 60 * 1000;

/// Draws UTC timestamps for the events of a trace.
#[derive(Debug)]
pub struct TimestampSynthesizer<R> {
    rng: R,
    /// Fixed "now" for the start offsets. The wall clock is read when absent.
    anchor: Option<DateTime<Utc>>,
}

impl<R: Rng> TimestampSynthesizer<R> {
    pub fn new(rng: R) -> Self {
        Self { rng, anchor: None }
    }

    /// Measure start offsets from `now` instead of the wall clock.
    pub fn anchored_at(mut self, now: DateTime<Utc>) -> Self {
        self.anchor = Some(now);
        self
    }

    /// Timestamp of the next event.
    ///
    /// `previous` is the timestamp of the preceding event in the same trace,
    /// or `None` for the first event. The result is never earlier than
    /// `previous`.
    pub fn next(&mut self, previous: Option<DateTime<Utc>>) -> DateTime<Utc> {
        let base = match previous {
            Some(t) => t,
            None => self.random_start(),
        };
        let gap = Duration::milliseconds(self.rng.random_range(0..=MAX_EVENT_GAP_MILLIS));
        base.checked_add_signed(gap).unwrap_or(base)
    }

    fn random_start(&mut self) -> DateTime<Utc> {
        let now = self.anchor.unwrap_or_else(Utc::now);

        let months = Months::new(self.rng.random_range(0..=MAX_START_OFFSET_MONTHS));
        let weeks = Duration::weeks(self.rng.random_range(0..=MAX_START_OFFSET_WEEKS));
        let days = Duration::days(self.rng.random_range(0..=MAX_START_OFFSET_DAYS));

        let start = now.checked_sub_months(months).unwrap_or(now);
        start.checked_sub_signed(weeks + days).unwrap_or(start)
    }
}
