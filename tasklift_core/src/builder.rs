//! Task record builder.
//!
//! Identity and timestamps come from injected sources so that building is
//! deterministic under test.

use chrono::{DateTime, Utc};
use std::sync::atomic::{AtomicU64, Ordering};
use uuid::Uuid;

use crate::model::{ExtractionResult, Task};

/// Source of fresh task identities.
pub trait IdGenerator: Send + Sync {
    fn next_id(&self) -> Uuid;
}

/// Source of creation timestamps.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Time-ordered random UUIDs; never collide within a session.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidV7Ids;

impl IdGenerator for UuidV7Ids {
    fn next_id(&self) -> Uuid {
        Uuid::now_v7()
    }
}

/// Counter-backed identities: `1, 2, 3, ...` encoded as UUIDs.
#[derive(Debug, Default)]
pub struct SequentialIds {
    next: AtomicU64,
}

impl SequentialIds {
    #[must_use]
    pub const fn starting_at(first: u64) -> Self {
        Self {
            next: AtomicU64::new(first),
        }
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&self) -> Uuid {
        let value = self.next.fetch_add(1, Ordering::SeqCst);
        Uuid::from_u128(u128::from(value))
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Wraps extraction results into [`Task`] records.
#[derive(Debug, Default)]
pub struct TaskBuilder<I = UuidV7Ids, C = SystemClock> {
    ids: I,
    clock: C,
}

impl TaskBuilder {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            ids: UuidV7Ids,
            clock: SystemClock,
        }
    }
}

impl<I: IdGenerator, C: Clock> TaskBuilder<I, C> {
    #[must_use]
    pub const fn with_sources(ids: I, clock: C) -> Self {
        Self { ids, clock }
    }

    /// Create a fresh, not yet completed task from an extraction result.
    #[must_use]
    pub fn build(&self, result: ExtractionResult) -> Task {
        Task::from_extraction(self.ids.next_id(), result, self.clock.now())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Category;
    use chrono::TimeZone;
    use std::collections::HashSet;

    struct FixedClock(DateTime<Utc>);

    impl Clock for FixedClock {
        fn now(&self) -> DateTime<Utc> {
            self.0
        }
    }

    fn sample() -> ExtractionResult {
        ExtractionResult::new(
            "Meeting",
            Some("9pm".to_string()),
            Some("AB1-324".to_string()),
            Category::Work,
        )
    }

    #[test]
    fn build_is_deterministic_with_injected_sources() {
        let at = Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).single();
        let Some(at) = at else {
            panic!("valid fixed timestamp");
        };
        let builder = TaskBuilder::with_sources(SequentialIds::starting_at(7), FixedClock(at));

        let task = builder.build(sample());
        assert_eq!(task.id, Uuid::from_u128(7));
        assert_eq!(task.created_at, at);
        assert!(!task.completed);
        assert_eq!(task.title, "Meeting");
        assert_eq!(task.time.as_deref(), Some("9pm"));
        assert_eq!(task.venue.as_deref(), Some("AB1-324"));
        assert_eq!(task.category, Category::Work);

        let next = builder.build(sample());
        assert_eq!(next.id, Uuid::from_u128(8));
    }

    #[test]
    fn rapid_builds_get_distinct_ids() {
        let builder = TaskBuilder::new();
        let ids: HashSet<Uuid> = (0..1000).map(|_| builder.build(sample()).id).collect();
        assert_eq!(ids.len(), 1000);
    }
}
