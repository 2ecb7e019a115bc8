//! Test-fixture harness for search indexes: stage ordered sets of typed
//! records, bulk-insert them with immediate visibility, and get back a
//! single-use cleanup action that wipes every index the run touched.

// public exports are one module level down
pub mod client;
pub mod ctx;
pub mod dataset;
pub mod document;
pub mod error;
pub mod harness;
pub mod obs;
pub mod record;

pub(crate) mod insert;

// test
#[cfg(test)]
pub(crate) mod test_support;

///
/// CONSTANTS
///

/// Per-document conflict-retry budget attached to every bulk operation.
///
/// The engine retries a version-conflicted write this many times internally;
/// the harness itself never retries above that.
pub const RETRY_ON_CONFLICT: u32 = 3;

///
/// Prelude
///
/// Prelude contains only domain vocabulary.
/// No errors, clients, or helpers are re-exported here.
///

pub mod prelude {
    pub use crate::{
        ctx::Ctx,
        dataset::Dataset,
        harness::{Cleanup, Harness},
        record::{DocumentId, Identifiable},
    };
}
