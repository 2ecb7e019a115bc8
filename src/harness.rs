use crate::{
    client::{Query, SearchClient},
    ctx::Ctx,
    dataset::Dataset,
    error::FixtureError,
    insert::bulk_insert,
    obs::{self, FixtureEvent},
};

///
/// Harness
///
/// Orchestrates one staging cycle: load a [`Dataset`] entry by entry, track
/// every index the cycle touches, and hand back a single-use [`Cleanup`]
/// that wipes them all.
///
/// ## State
/// The accumulated index list is the only mutable state. It is appended to
/// by [`cleaning_indexes`](Self::cleaning_indexes) and as a side effect of
/// [`exec`](Self::exec), and reset by a successful [`clean`](Self::clean).
/// The harness is single-threaded by design; tests running in parallel use
/// one harness each.
///

pub struct Harness<C> {
    client: C,
    indexes: Vec<String>,
}

impl<C: SearchClient> Harness<C> {
    /// Construct a harness over an engine client.
    #[must_use]
    pub const fn new(client: C) -> Self {
        Self {
            client,
            indexes: Vec::new(),
        }
    }

    /// Register indexes that must be wiped even if they receive no data
    /// through [`exec`](Self::exec), e.g. indexes written by the code
    /// under test. Chains; valid before or after loading.
    pub fn cleaning_indexes<I>(&mut self, indexes: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.indexes.extend(indexes.into_iter().map(Into::into));
        self
    }

    /// Return the accumulated cleanup targets, in registration order.
    /// Duplicates are kept per occurrence.
    #[must_use]
    pub fn indexes(&self) -> &[String] {
        &self.indexes
    }

    /// Load every dataset entry in insertion order and return the cleanup
    /// action for the touched indexes.
    ///
    /// An empty dataset is a caller error, not a no-op. Each entry is
    /// normalized, its index name is appended to the cleanup targets, and
    /// the batch is submitted; an entry whose collection was empty sends
    /// no write but is still appended, because intent to touch the index
    /// was declared. Registration happens before the write so that a
    /// failed batch, which the engine may have partially applied, is
    /// still covered by a direct [`clean`](Self::clean). A record that
    /// fails normalization aborts before its index is registered; no
    /// write was attempted for it.
    pub fn exec(&mut self, ctx: &Ctx, data: Dataset) -> Result<Cleanup<'_, C>, FixtureError> {
        if data.is_empty() {
            return Err(FixtureError::EmptyDataset);
        }

        for entry in data.into_entries() {
            let documents = entry.source.documents()?;
            // No insert may start without its index being a cleanup target.
            self.indexes.push(entry.index.clone());
            bulk_insert(&mut self.client, ctx, &entry.index, documents)?;
        }

        Ok(Cleanup { harness: self })
    }

    /// Wipe every accumulated index and reset the harness to its staged
    /// state.
    ///
    /// With no accumulated indexes this is skipped outright: no
    /// delete-by-query is issued for an empty scope, mirroring the
    /// zero-document insert rule. Otherwise one match-all delete runs
    /// across all targets, proceeding past version conflicts, with
    /// immediate visibility. The target list is reset only after the
    /// delete succeeds, so a failed cleanup can be retried.
    pub fn clean(&mut self, ctx: &Ctx) -> Result<(), FixtureError> {
        if self.indexes.is_empty() {
            obs::record(FixtureEvent::CleanSkipped);
            return Ok(());
        }

        self.client
            .delete_by_query(ctx, &self.indexes, &Query::MatchAll, true, true)
            .map_err(|source| FixtureError::Clean {
                indexes: self.indexes.clone(),
                source,
            })?;

        obs::record(FixtureEvent::Clean {
            indexes: u64::try_from(self.indexes.len()).unwrap_or(u64::MAX),
        });
        self.indexes.clear();

        Ok(())
    }
}

///
/// Cleanup
///
/// Single-use cleanup action returned by [`Harness::exec`]. Consuming
/// [`run`](Self::run) enforces at the type level that cleanup happens at
/// most once per staging cycle.
///

#[must_use = "cleanup must be run, or the loaded fixtures outlive the test"]
pub struct Cleanup<'h, C> {
    harness: &'h mut Harness<C>,
}

impl<C: SearchClient> Cleanup<'_, C> {
    /// Wipe every index accumulated by the staging cycle.
    pub fn run(self, ctx: &Ctx) -> Result<(), FixtureError> {
        self.harness.clean(ctx)
    }
}
