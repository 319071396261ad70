//! Usage tracking
//!
//! Visitor, pageview and calculation counters. Calculators never touch a
//! sink themselves; the [`Calculator`](crate::calculator::Calculator)
//! dispatcher (or any other boundary layer) reports usage through
//! [`UsageSink`].

use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Kind of event being counted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatKind {
    /// New visitor session
    Visitor,
    /// Page rendered
    Pageview,
    /// Successful calculator run
    Calculation,
}

/// Fire-and-forget usage counter
pub trait UsageSink: Send + Sync {
    /// Count one event
    fn track(&self, kind: StatKind);
}

/// Sink that discards every event
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSink;

impl UsageSink for NoopSink {
    fn track(&self, _kind: StatKind) {}
}

/// Point-in-time copy of the counters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteStats {
    /// When the snapshot was taken
    pub date: DateTime<Utc>,
    /// Visitor sessions counted
    pub visitors: u64,
    /// Pages served
    pub pageviews: u64,
    /// Successful calculations
    pub calculations: u64,
}

/// In-process counters backed by atomics
#[derive(Debug, Default)]
pub struct UsageCounters {
    visitors: AtomicU64,
    pageviews: AtomicU64,
    calculations: AtomicU64,
}

impl UsageCounters {
    /// Counters starting at zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Read all counters
    pub fn snapshot(&self) -> SiteStats {
        SiteStats {
            date: Utc::now(),
            visitors: self.visitors.load(Ordering::Relaxed),
            pageviews: self.pageviews.load(Ordering::Relaxed),
            calculations: self.calculations.load(Ordering::Relaxed),
        }
    }

    fn counter(&self, kind: StatKind) -> &AtomicU64 {
        match kind {
            StatKind::Visitor => &self.visitors,
            StatKind::Pageview => &self.pageviews,
            StatKind::Calculation => &self.calculations,
        }
    }
}

impl UsageSink for UsageCounters {
    fn track(&self, kind: StatKind) {
        self.counter(kind).fetch_add(1, Ordering::Relaxed);
    }
}
