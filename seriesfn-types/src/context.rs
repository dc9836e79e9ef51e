//! Per-request metadata supplied by the host.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The query time window attached to a render request.
///
/// Created per request by the host and read-only to this library; transforms
/// that synthesize series take their bounds from here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestContext {
    /// Window start (inclusive).
    pub start_time: DateTime<Utc>,
    /// Window end (exclusive).
    pub end_time: DateTime<Utc>,
}

impl RequestContext {
    /// Build a context from explicit bounds.
    #[must_use]
    pub const fn new(start_time: DateTime<Utc>, end_time: DateTime<Utc>) -> Self {
        Self {
            start_time,
            end_time,
        }
    }

    /// Build a context from epoch seconds; `None` if either bound is outside
    /// the representable timestamp range.
    #[must_use]
    pub fn from_epoch(start: i64, end: i64) -> Option<Self> {
        Some(Self {
            start_time: DateTime::from_timestamp(start, 0)?,
            end_time: DateTime::from_timestamp(end, 0)?,
        })
    }

    /// Window start as epoch seconds.
    #[must_use]
    pub fn start_epoch(&self) -> i64 {
        self.start_time.timestamp()
    }

    /// Window end as epoch seconds.
    #[must_use]
    pub fn end_epoch(&self) -> i64 {
        self.end_time.timestamp()
    }
}
