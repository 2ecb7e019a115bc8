use crate::client::{BulkItem, ClientError};
use thiserror::Error as ThisError;

///
/// FixtureError
///
/// Failure taxonomy for one staging cycle. Every variant is unrecoverable
/// for the current test run by policy: the harness never downgrades a
/// failure to a warning and never retries beyond the engine's own
/// per-document conflict-retry budget. Whether an error aborts the process
/// or only the current test is the caller's decision.
///

#[derive(Debug, ThisError)]
pub enum FixtureError {
    /// Staging with no entries is a test-authoring mistake, not a no-op.
    #[error("data is empty")]
    EmptyDataset,

    #[error(transparent)]
    Normalize(#[from] NormalizeError),

    /// The batched write failed at the client/transport layer.
    #[error("bulk write to index '{index}' failed: {source}")]
    Insert { index: String, source: ClientError },

    /// The batched write succeeded overall but rejected individual
    /// documents. Carries every failing item in full dumped form.
    #[error(
        "bulk write to index '{index}' rejected {} document(s):\n{}",
        .failures.len(),
        dump_items(.failures)
    )]
    Rejected {
        index: String,
        failures: Vec<BulkItem>,
    },

    /// Delete-by-query failed; subsequent tests can no longer rely on
    /// these indexes being empty.
    #[error("cleaning indexes {indexes:?} failed: {source}")]
    Clean {
        indexes: Vec<String>,
        source: ClientError,
    },
}

///
/// NormalizeError
///
/// A record that cannot become a document. Normalization halts the whole
/// insertion pass on the first offending record; it never skips one.
///

#[derive(Debug, ThisError)]
pub enum NormalizeError {
    #[error("record '{id}' failed to serialize: {source}")]
    Serialize {
        id: String,
        source: serde_json::Error,
    },

    #[error("record '{id}' has an unsupported body: expected a JSON object, got {kind}")]
    UnsupportedBody { id: String, kind: &'static str },
}

fn dump_items(items: &[BulkItem]) -> String {
    items
        .iter()
        .map(|item| format!("{item:#?}"))
        .collect::<Vec<_>>()
        .join("\n")
}
