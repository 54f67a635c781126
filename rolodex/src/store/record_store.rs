use std::cmp::Ordering;

use crate::common::{name_collator, SortOrder};
use crate::errors::{ErrorKind, StoreError, StoreResult};
use crate::filter::{all, Filter};
use crate::record::Storable;
use crate::store::{FindOptions, PersistenceContext};

/// Generic, type-parameterized access to the persistence context.
///
/// # Purpose
/// `RecordStore` is the facade every storable type goes through: create,
/// fetch, count, delete, and save, decoupled from any one record shape. The
/// type's [`Storable`](crate::record::Storable) impl supplies the entity name
/// and record conversion; the store supplies exactly one method family per
/// CRUD verb regardless of how many storable shapes exist.
///
/// # Failure contract
/// The only failure that matters is an unreachable context. Operations that
/// return `StoreResult` report it as [`ErrorKind::ContextUnavailable`];
/// the delete family degrades to `false` and [`count`](RecordStore::count)
/// to `-1`, which are the documented in-band failure values of those
/// operations.
///
/// # Examples
///
/// ```rust,ignore
/// use rolodex::store::{PersistenceContext, RecordStore};
///
/// let context = PersistenceContext::in_memory();
/// let store = RecordStore::new(context);
///
/// let mut contact: Contact = store.create()?;
/// contact.first_name = Some("Anna".to_string());
/// store.update(&contact)?;
/// store.save_all_changes()?;
/// ```
#[derive(Clone)]
pub struct RecordStore {
    context: PersistenceContext,
}

impl RecordStore {
    /// Creates a store bound to the given context.
    ///
    /// The context is injected here rather than resolved through any global
    /// lookup; hand the same (cloned) context to every store that should
    /// share state.
    pub fn new(context: PersistenceContext) -> Self {
        RecordStore { context }
    }

    /// Returns the context this store operates on.
    pub fn context(&self) -> &PersistenceContext {
        &self.context
    }

    /// Allocates a new, uncommitted instance of `T` inside the context.
    ///
    /// The returned entity carries its context-assigned record id and default
    /// field values. It is visible to fetches immediately but not durable
    /// until [`save_all_changes`](RecordStore::save_all_changes).
    pub fn create<T: Storable>(&self) -> StoreResult<T> {
        let record = self.context.insert_new(&T::entity_name())?;
        let id = record.id().ok_or_else(|| {
            StoreError::new(
                "Context returned a record without identity",
                ErrorKind::InternalError,
            )
        })?;

        let mut entity = T::default();
        entity.set_record_id(id);
        Ok(entity)
    }

    /// Stages the entity's current field values.
    ///
    /// This is how field assignments reach the context before a save; the
    /// entity must have been through [`create`](RecordStore::create) first.
    pub fn update<T: Storable>(&self, entity: &T) -> StoreResult<()> {
        let record = entity.to_record()?;
        self.context.stage_update(&T::entity_name(), record)
    }

    /// Returns all records of type `T` in unspecified order.
    pub fn fetch_all<T: Storable>(&self) -> StoreResult<Vec<T>> {
        self.fetch_all_with_options(all(), &FindOptions::new())
    }

    /// Returns all records of type `T` matching `filter`, in unspecified
    /// order.
    pub fn fetch_all_filtered<T: Storable>(&self, filter: Filter) -> StoreResult<Vec<T>> {
        self.fetch_all_with_options(filter, &FindOptions::new())
    }

    /// Returns all records of type `T` matching `filter`, ordered per
    /// `options`.
    ///
    /// The result is a finite, materialized snapshot taken at call time;
    /// changes staged after this call do not show up in it. Text fields are
    /// compared with a case-insensitive collator during sorting, null fields
    /// sort first, and ties keep their unspecified relative order.
    pub fn fetch_all_with_options<T: Storable>(
        &self,
        filter: Filter,
        options: &FindOptions,
    ) -> StoreResult<Vec<T>> {
        let snapshot = self.context.snapshot(&T::entity_name())?;

        let mut matched = Vec::with_capacity(snapshot.len());
        for record in snapshot {
            if filter.apply(&record)? {
                matched.push(record);
            }
        }

        if !options.sort_by.is_empty() {
            let collator = name_collator(
                options.collator_preferences.clone(),
                options.collator_options.clone(),
            )?;
            matched.sort_by(|a, b| {
                for (field, order) in &options.sort_by {
                    let a_value = a.get(field);
                    let b_value = b.get(field);

                    let cmp = if a_value.is_null() && b_value.is_null() {
                        Ordering::Equal
                    } else if a_value.is_null() {
                        Ordering::Less
                    } else if b_value.is_null() {
                        Ordering::Greater
                    } else if let (Some(a_text), Some(b_text)) =
                        (a_value.as_string(), b_value.as_string())
                    {
                        collator.compare(a_text, b_text)
                    } else {
                        a_value.cmp(&b_value)
                    };

                    if cmp != Ordering::Equal {
                        return match order {
                            SortOrder::Ascending => cmp,
                            SortOrder::Descending => cmp.reverse(),
                        };
                    }
                }
                Ordering::Equal
            });
        }

        matched.iter().map(T::from_record).collect()
    }

    /// Returns the number of records of type `T` matching `filter`, or `-1`
    /// if the context is unreachable or the query fails.
    ///
    /// `-1` is an in-band error code: an empty collection counts as `0`, so
    /// the sentinel is unambiguous, but callers that need the cause should
    /// fetch instead.
    pub fn count<T: Storable>(&self, filter: Filter) -> i64 {
        match self.count_matching::<T>(filter) {
            Ok(count) => count as i64,
            Err(err) => {
                log::error!("Count of {} failed: {}", T::entity_name(), err);
                -1
            }
        }
    }

    fn count_matching<T: Storable>(&self, filter: Filter) -> StoreResult<usize> {
        let snapshot = self.context.snapshot(&T::entity_name())?;
        let mut count = 0;
        for record in &snapshot {
            if filter.apply(record)? {
                count += 1;
            }
        }
        Ok(count)
    }

    /// Stages the removal of one record.
    ///
    /// Returns `false` only if the context is unreachable. No existence
    /// check: deleting a record the context has never seen still succeeds.
    pub fn delete<T: Storable>(&self, entity: &T) -> bool {
        self.delete_all(std::slice::from_ref(entity))
    }

    /// Stages the removal of every passed record.
    ///
    /// Returns `false` only if the context is unreachable. If the context
    /// disappears mid-loop the operation aborts, but records already staged
    /// for deletion stay staged.
    pub fn delete_all<T: Storable>(&self, entities: &[T]) -> bool {
        for entity in entities {
            let Some(id) = entity.record_id() else {
                // never entered the context, nothing to remove
                continue;
            };
            if let Err(err) = self.context.stage_delete(&T::entity_name(), id) {
                log::error!("Delete of {} record failed: {}", T::entity_name(), err);
                return false;
            }
        }
        true
    }

    /// Stages the removal of every record of type `T`.
    ///
    /// Fetch-all then delete-all; returns `false` if either step fails.
    pub fn delete_all_of_type<T: Storable>(&self) -> bool {
        match self.fetch_all::<T>() {
            Ok(entities) => self.delete_all(&entities),
            Err(err) => {
                log::error!("Fetch during delete of all {} failed: {}", T::entity_name(), err);
                false
            }
        }
    }

    /// Commits all staged creates, updates, and deletes atomically.
    ///
    /// On failure the error is logged and returned, and the context's staged
    /// state is left unchanged; there is no automatic retry. A save with
    /// nothing staged succeeds.
    pub fn save_all_changes(&self) -> StoreResult<()> {
        self.context.save().map_err(|err| {
            log::error!("Could not save pending changes: {:?}", err);
            err
        })
    }
}
