use crate::{document::Document, error::NormalizeError, record::Identifiable};
use serde::Serialize;

///
/// Dataset
///
/// Insertion-ordered association list from index name to a staged record
/// collection. Order is a first-class, load-bearing property: `exec`
/// replays entries oldest-to-newest so fixture loading is deterministic.
///
/// The dataset is owned by the caller until it is passed to the harness
/// and is consumed there; records are normalized lazily at that point, so
/// a bad record surfaces during `exec`, not during staging.
///

#[derive(Default)]
pub struct Dataset {
    entries: Vec<Entry>,
}

impl Dataset {
    /// Construct an empty dataset.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Stage a record collection for one index, chaining.
    ///
    /// Staging the same index twice overwrites the earlier collection in
    /// place; the entry keeps its first-insertion position.
    #[must_use]
    pub fn set<I, R, T>(mut self, index: I, records: T) -> Self
    where
        I: Into<String>,
        R: Identifiable + Serialize + 'static,
        T: IntoIterator<Item = R>,
    {
        let index = index.into();
        let source: Box<dyn DocumentSource> = Box::new(Records(records.into_iter().collect()));

        match self.entries.iter_mut().find(|entry| entry.index == index) {
            Some(entry) => entry.source = source,
            None => self.entries.push(Entry { index, source }),
        }

        self
    }

    /// Return the number of staged entries.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing has been staged.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Consume the dataset in insertion order.
    pub(crate) fn into_entries(self) -> Vec<Entry> {
        self.entries
    }
}

///
/// Entry
///
/// One (index name, staged collection) pair.
///

pub(crate) struct Entry {
    pub(crate) index: String,
    pub(crate) source: Box<dyn DocumentSource>,
}

///
/// DocumentSource
///
/// Type-erased staged collection. Erasure keeps the dataset heterogeneous
/// (each entry may hold a different record type) while normalization stays
/// generic underneath.
///

pub(crate) trait DocumentSource {
    /// Normalize every staged record, halting on the first bad one.
    fn documents(&self) -> Result<Vec<Document>, NormalizeError>;
}

struct Records<R>(Vec<R>);

impl<R> DocumentSource for Records<R>
where
    R: Identifiable + Serialize,
{
    fn documents(&self) -> Result<Vec<Document>, NormalizeError> {
        self.0.iter().map(Document::from_record).collect()
    }
}
