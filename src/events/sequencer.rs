//! Monotonic event timestamps

use chrono::{DateTime, Duration, Utc};

/// Issues strictly increasing event times one second apart
///
/// The sequencer is owned by a single generation call and threaded through
/// event building by mutable reference.
#[derive(Debug, Clone)]
pub struct TimestampSequencer {
    base: DateTime<Utc>,
    issued: i64,
}

impl TimestampSequencer {
    /// Start a sequence at `base`
    pub fn new(base: DateTime<Utc>) -> Self {
        Self { base, issued: 0 }
    }

    /// Next event time: `base + n` seconds, then advance `n`
    pub fn next(&mut self) -> DateTime<Utc> {
        let timestamp = self.peek();
        self.issued += 1;
        timestamp
    }

    /// Document creation time, strictly after every issued event time
    ///
    /// Does not advance the sequence.
    pub fn creation_timestamp(&self) -> DateTime<Utc> {
        self.peek()
    }

    /// Number of timestamps issued so far
    pub fn issued(&self) -> usize {
        self.issued as usize
    }

    /// Base timestamp
    pub fn base(&self) -> DateTime<Utc> {
        self.base
    }

    fn peek(&self) -> DateTime<Utc> {
        self.base + Duration::seconds(self.issued)
    }
}
