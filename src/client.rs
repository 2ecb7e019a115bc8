use crate::ctx::Ctx;
use derive_more::IntoIterator;
use serde_json::Value;
use thiserror::Error as ThisError;

///
/// SearchClient
///
/// Narrow seam to the engine's transport, consumed as an opaque
/// collaborator. Implementations own connection handling, timeouts, and
/// honoring the passed [`Ctx`]; the harness only builds requests.
///

pub trait SearchClient {
    /// Submit one batched write. `refresh` requests immediate visibility
    /// so reads in the same test observe the documents without waiting
    /// for the engine's refresh interval.
    ///
    /// An `Err` is a transport/validation failure for the whole batch;
    /// per-document failures travel inside the returned summary.
    fn bulk_write(
        &mut self,
        ctx: &Ctx,
        ops: Vec<BulkOp>,
        refresh: bool,
    ) -> Result<BulkSummary, ClientError>;

    /// Delete every document matching `query` across `indexes`.
    fn delete_by_query(
        &mut self,
        ctx: &Ctx,
        indexes: &[String],
        query: &Query,
        proceed_on_conflict: bool,
        refresh: bool,
    ) -> Result<(), ClientError>;
}

///
/// Query
///
/// Predicate vocabulary for delete-by-query. Cleanup always wipes whole
/// indexes, so match-all is the only predicate this layer ever sends.
///

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Query {
    #[default]
    MatchAll,
}

///
/// BulkOp
///
/// One indexed-document operation inside a batched write.
///

#[derive(Clone, Debug, PartialEq)]
pub struct BulkOp {
    pub index: String,
    pub id: String,
    pub retry_on_conflict: u32,
    pub body: Value,
}

///
/// BulkSummary
///
/// Per-item outcome of an overall-successful batched write.
///

#[derive(Clone, Debug, Default, IntoIterator)]
pub struct BulkSummary {
    #[into_iterator(owned, ref)]
    items: Vec<BulkItem>,
}

impl BulkSummary {
    /// Construct a summary from per-item outcomes.
    #[must_use]
    pub const fn new(items: Vec<BulkItem>) -> Self {
        Self { items }
    }

    /// Return all per-item outcomes.
    #[must_use]
    pub fn items(&self) -> &[BulkItem] {
        &self.items
    }

    /// Return the items the engine rejected.
    #[must_use]
    pub fn failures(&self) -> Vec<BulkItem> {
        self.items
            .iter()
            .filter(|item| item.failed())
            .cloned()
            .collect()
    }

    /// Returns `true` if any item was rejected.
    #[must_use]
    pub fn has_failures(&self) -> bool {
        self.items.iter().any(BulkItem::failed)
    }

    /// Return the number of items.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the summary carries no items.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

///
/// BulkItem
///
/// Outcome of a single operation inside a batched write.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BulkItem {
    pub index: String,
    pub id: String,
    pub error: Option<String>,
}

impl BulkItem {
    /// Returns `true` if the engine rejected this operation.
    #[must_use]
    pub const fn failed(&self) -> bool {
        self.error.is_some()
    }
}

///
/// ClientError
///
/// Transport-layer failure reported by a [`SearchClient`] implementation.
/// Carries the client's own diagnostic message; classification beyond
/// "the call failed" belongs to the implementation.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
#[error("{message}")]
pub struct ClientError {
    message: String,
}

impl ClientError {
    /// Construct a client error from a diagnostic message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Return the diagnostic message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}
