//! Test-only helpers shared by unit tests: a recording client and a small
//! fixture record.

use crate::{
    client::{BulkItem, BulkOp, BulkSummary, ClientError, Query, SearchClient},
    ctx::Ctx,
    record::{DocumentId, Identifiable},
};
use serde::Serialize;
use std::{cell::RefCell, rc::Rc};

///
/// Product
///
/// Canonical integer-identified fixture record.
///

#[derive(Serialize)]
pub(crate) struct Product {
    pub(crate) id: i64,
    pub(crate) name: String,
}

impl Identifiable for Product {
    fn document_id(&self) -> DocumentId {
        self.id.into()
    }
}

///
/// RecordingClient
///
/// SearchClient double that records every call into a shared log and can
/// be primed to fail or to reject individual items.
///

#[derive(Default)]
pub(crate) struct RecordingClient {
    pub(crate) log: Rc<RefCell<CallLog>>,
    pub(crate) fail_bulk: Option<ClientError>,
    pub(crate) fail_delete: Option<ClientError>,
    /// Items reported as failed inside an otherwise successful summary,
    /// matched by (index, id).
    pub(crate) reject: Vec<BulkItem>,
}

#[derive(Default)]
pub(crate) struct CallLog {
    pub(crate) bulk_calls: Vec<BulkCall>,
    pub(crate) delete_calls: Vec<DeleteCall>,
}

pub(crate) struct BulkCall {
    pub(crate) ops: Vec<BulkOp>,
    pub(crate) refresh: bool,
}

pub(crate) struct DeleteCall {
    pub(crate) indexes: Vec<String>,
    pub(crate) query: Query,
    pub(crate) proceed_on_conflict: bool,
    pub(crate) refresh: bool,
}

impl SearchClient for RecordingClient {
    fn bulk_write(
        &mut self,
        _ctx: &Ctx,
        ops: Vec<BulkOp>,
        refresh: bool,
    ) -> Result<BulkSummary, ClientError> {
        if let Some(err) = self.fail_bulk.clone() {
            return Err(err);
        }

        let items = ops
            .iter()
            .map(|op| {
                let rejection = self
                    .reject
                    .iter()
                    .find(|item| item.index == op.index && item.id == op.id);
                BulkItem {
                    index: op.index.clone(),
                    id: op.id.clone(),
                    error: rejection.and_then(|item| item.error.clone()),
                }
            })
            .collect();

        self.log.borrow_mut().bulk_calls.push(BulkCall { ops, refresh });

        Ok(BulkSummary::new(items))
    }

    fn delete_by_query(
        &mut self,
        _ctx: &Ctx,
        indexes: &[String],
        query: &Query,
        proceed_on_conflict: bool,
        refresh: bool,
    ) -> Result<(), ClientError> {
        if let Some(err) = self.fail_delete.clone() {
            return Err(err);
        }

        self.log.borrow_mut().delete_calls.push(DeleteCall {
            indexes: indexes.to_vec(),
            query: *query,
            proceed_on_conflict,
            refresh,
        });

        Ok(())
    }
}
