//! In-process operation counters.
//!
//! The harness stays quiet by design (process logging is the caller's
//! concern), but tests and debugging sessions still want to know what a
//! staging cycle actually did. Counter state is thread-local because the
//! harness is single-threaded per test.

use std::cell::RefCell;

thread_local! {
    static COUNTERS: RefCell<OpCounters> = RefCell::new(OpCounters::default());
}

///
/// OpCounters
///

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct OpCounters {
    pub bulk_writes: u64,
    pub documents_indexed: u64,
    pub empty_payloads: u64,
    pub cleans: u64,
    pub cleans_skipped: u64,
    pub indexes_wiped: u64,
}

///
/// FixtureEvent
///

#[derive(Clone, Copy, Debug)]
pub(crate) enum FixtureEvent {
    BulkWrite { documents: u64 },
    EmptyPayload,
    Clean { indexes: u64 },
    CleanSkipped,
}

pub(crate) fn record(event: FixtureEvent) {
    with_state_mut(|counters| match event {
        FixtureEvent::BulkWrite { documents } => {
            counters.bulk_writes = counters.bulk_writes.saturating_add(1);
            counters.documents_indexed = counters.documents_indexed.saturating_add(documents);
        }
        FixtureEvent::EmptyPayload => {
            counters.empty_payloads = counters.empty_payloads.saturating_add(1);
        }
        FixtureEvent::Clean { indexes } => {
            counters.cleans = counters.cleans.saturating_add(1);
            counters.indexes_wiped = counters.indexes_wiped.saturating_add(indexes);
        }
        FixtureEvent::CleanSkipped => {
            counters.cleans_skipped = counters.cleans_skipped.saturating_add(1);
        }
    });
}

/// Snapshot the current counters for test/debug plumbing.
#[must_use]
pub fn report() -> OpCounters {
    COUNTERS.with(|cell| *cell.borrow())
}

/// Reset all counters.
pub fn reset_all() {
    with_state_mut(|counters| *counters = OpCounters::default());
}

fn with_state_mut<T>(f: impl FnOnce(&mut OpCounters) -> T) -> T {
    COUNTERS.with(|cell| f(&mut cell.borrow_mut()))
}
