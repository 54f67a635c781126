use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use indexmap::IndexMap;
use parking_lot::RwLock;

use crate::errors::{ErrorKind, StoreError, StoreResult};
use crate::record::{Record, RecordId};
use crate::ID_GENERATOR;

/// The transactional owner of all records.
///
/// # Purpose
/// `PersistenceContext` holds every entity collection and enforces the
/// staged-change discipline: creates, updates, and deletes are staged in
/// memory, visible to in-process snapshots immediately, and become durable
/// only when [`save`](PersistenceContext::save) commits them atomically.
///
/// # Characteristics
/// - **Shared handle**: cloning the context clones a handle to the same
///   underlying state (`Arc` inner); the handle is passed to collaborators
///   explicitly instead of being looked up through process-global state
/// - **Serialized**: all access goes through one read-write lock, so handles
///   may be shared across threads even though the original contract only
///   promises single-threaded use
/// - **Closeable**: after [`close`](PersistenceContext::close) every
///   operation fails with [`ErrorKind::ContextUnavailable`]
///
/// # Examples
///
/// ```rust,ignore
/// use rolodex::store::PersistenceContext;
///
/// let context = PersistenceContext::in_memory();
/// let record = context.insert_new("Contact")?;
/// context.save()?;
/// ```
#[derive(Clone)]
pub struct PersistenceContext {
    inner: Arc<RwLock<ContextState>>,
}

#[derive(Default)]
struct ContextState {
    closed: bool,
    committed: HashMap<String, IndexMap<RecordId, Record>>,
    staged: HashMap<String, StagedChanges>,
}

#[derive(Default)]
struct StagedChanges {
    upserts: IndexMap<RecordId, Record>,
    deletes: HashSet<RecordId>,
}

impl StagedChanges {
    fn is_empty(&self) -> bool {
        self.upserts.is_empty() && self.deletes.is_empty()
    }
}

impl ContextState {
    fn guard_open(&self) -> StoreResult<()> {
        if self.closed {
            Err(StoreError::new(
                "Persistence context has been closed",
                ErrorKind::ContextUnavailable,
            ))
        } else {
            Ok(())
        }
    }
}

impl PersistenceContext {
    /// Creates a fresh in-memory context with no committed records.
    pub fn in_memory() -> Self {
        PersistenceContext {
            inner: Arc::new(RwLock::new(ContextState::default())),
        }
    }

    /// Allocates and stages a new, empty record in the named entity
    /// collection.
    ///
    /// The record is visible to snapshots immediately but is not durable
    /// until [`save`](PersistenceContext::save) commits it.
    ///
    /// # Returns
    ///
    /// The staged record, carrying its newly assigned [`RecordId`].
    pub fn insert_new(&self, entity_name: &str) -> StoreResult<Record> {
        let mut state = self.inner.write();
        state.guard_open()?;

        let id = ID_GENERATOR.next_id();
        let mut record = Record::new();
        record.set_id(id);

        state
            .staged
            .entry(entity_name.to_string())
            .or_default()
            .upserts
            .insert(id, record.clone());

        Ok(record)
    }

    /// Stages the record's current field values, replacing any previously
    /// staged version.
    ///
    /// A staged update on a record that was staged for deletion revives it.
    pub fn stage_update(&self, entity_name: &str, record: Record) -> StoreResult<()> {
        let mut state = self.inner.write();
        state.guard_open()?;

        let id = record.id().ok_or_else(|| {
            StoreError::new(
                "Cannot stage a record that has no identity",
                ErrorKind::ObjectMappingError,
            )
        })?;

        let staged = state.staged.entry(entity_name.to_string()).or_default();
        staged.deletes.remove(&id);
        staged.upserts.insert(id, record);
        Ok(())
    }

    /// Stages the removal of a record from the named entity collection.
    ///
    /// No existence check is performed: staging a delete for an id the
    /// context has never seen succeeds and commits as a no-op. A staged
    /// create that is deleted before the next save simply vanishes.
    pub fn stage_delete(&self, entity_name: &str, id: RecordId) -> StoreResult<()> {
        let mut state = self.inner.write();
        state.guard_open()?;

        let staged = state.staged.entry(entity_name.to_string()).or_default();
        staged.upserts.shift_remove(&id);
        staged.deletes.insert(id);
        Ok(())
    }

    /// Returns a materialized snapshot of the named entity collection.
    ///
    /// The snapshot reflects committed records overlaid with staged changes:
    /// staged deletes are excluded, staged upserts replace or append. Order
    /// is the insertion order of the backing collection; callers that need a
    /// defined order sort the snapshot themselves.
    pub fn snapshot(&self, entity_name: &str) -> StoreResult<Vec<Record>> {
        let state = self.inner.read();
        state.guard_open()?;

        let committed = state.committed.get(entity_name);
        let staged = state.staged.get(entity_name);

        let mut records = Vec::new();
        if let Some(committed) = committed {
            for (id, record) in committed {
                if let Some(staged) = staged {
                    if staged.deletes.contains(id) {
                        continue;
                    }
                    if let Some(updated) = staged.upserts.get(id) {
                        records.push(updated.clone());
                        continue;
                    }
                }
                records.push(record.clone());
            }
        }
        if let Some(staged) = staged {
            for (id, record) in &staged.upserts {
                let already_committed = committed.map(|c| c.contains_key(id)).unwrap_or(false);
                if !already_committed {
                    records.push(record.clone());
                }
            }
        }
        Ok(records)
    }

    /// Returns the number of records the named entity collection currently
    /// holds, staged changes included.
    pub fn count(&self, entity_name: &str) -> StoreResult<usize> {
        Ok(self.snapshot(entity_name)?.len())
    }

    /// Commits all staged changes atomically.
    ///
    /// Every staged upsert and delete across all entity collections is
    /// applied under one write lock, then the staged set is cleared. On
    /// failure nothing is applied and the staged set is left untouched; the
    /// caller may retry or abandon the context. A save with nothing staged
    /// succeeds.
    pub fn save(&self) -> StoreResult<()> {
        let mut state = self.inner.write();
        state.guard_open()?;

        let staged: Vec<(String, StagedChanges)> = state.staged.drain().collect();
        for (entity_name, changes) in staged {
            let committed = state.committed.entry(entity_name).or_default();
            for (id, record) in changes.upserts {
                committed.insert(id, record);
            }
            for id in changes.deletes {
                committed.shift_remove(&id);
            }
        }
        Ok(())
    }

    /// Returns `true` if any staged change is awaiting a save.
    pub fn has_pending_changes(&self) -> bool {
        let state = self.inner.read();
        state.staged.values().any(|changes| !changes.is_empty())
    }

    /// Closes the context. Every subsequent operation fails with
    /// [`ErrorKind::ContextUnavailable`].
    pub fn close(&self) {
        let mut state = self.inner.write();
        state.closed = true;
    }

    /// Returns `true` if the context has been closed.
    pub fn is_closed(&self) -> bool {
        self.inner.read().closed
    }
}
