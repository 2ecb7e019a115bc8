use crate::{
    RETRY_ON_CONFLICT,
    client::{BulkOp, SearchClient},
    ctx::Ctx,
    document::Document,
    error::FixtureError,
    obs::{self, FixtureEvent},
};

/// Submit one batched write of `documents` into `index`.
///
/// Zero documents is a valid silent no-op: no request is sent. Otherwise
/// every document becomes one indexed-document operation carrying the
/// conflict-retry budget, and the batch requests immediate visibility.
/// Returns the number of documents written.
pub(crate) fn bulk_insert<C: SearchClient>(
    client: &mut C,
    ctx: &Ctx,
    index: &str,
    documents: Vec<Document>,
) -> Result<usize, FixtureError> {
    if documents.is_empty() {
        obs::record(FixtureEvent::EmptyPayload);
        return Ok(0);
    }

    let ops: Vec<BulkOp> = documents
        .into_iter()
        .map(|document| {
            let (id, body) = document.into_parts();
            BulkOp {
                index: index.to_string(),
                id,
                retry_on_conflict: RETRY_ON_CONFLICT,
                body,
            }
        })
        .collect();
    let written = ops.len();

    let summary = client
        .bulk_write(ctx, ops, true)
        .map_err(|source| FixtureError::Insert {
            index: index.to_string(),
            source,
        })?;

    // An overall-successful batch can still reject individual documents;
    // that is as fatal as a transport failure.
    if summary.has_failures() {
        return Err(FixtureError::Rejected {
            index: index.to_string(),
            failures: summary.failures(),
        });
    }

    obs::record(FixtureEvent::BulkWrite {
        documents: u64::try_from(written).unwrap_or(u64::MAX),
    });

    Ok(written)
}
