use crate::common::SortOrder;
use crate::contact::{Contact, FIRST_NAME, LAST_NAME};
use crate::errors::StoreResult;
use crate::filter::{all, field};
use crate::store::{order_by, PersistenceContext, RecordStore};

/// Domain-specific convenience over [`RecordStore`] for the [`Contact`]
/// shape.
///
/// # Purpose
/// Bundles the two operations the contacts screen needs: creating a contact
/// (with an immediate save) and fetching the list, optionally narrowed by a
/// search term matched against either name field.
///
/// # Examples
///
/// ```rust,ignore
/// use rolodex::contact::ContactRepository;
/// use rolodex::store::PersistenceContext;
///
/// let repository = ContactRepository::with_context(PersistenceContext::in_memory());
/// repository.create_contact(Some("Anna"), Some("Lee"))?;
/// let hits = repository.fetch_all_contacts(Some("an"))?;
/// ```
#[derive(Clone)]
pub struct ContactRepository {
    store: RecordStore,
}

impl ContactRepository {
    /// Creates a repository over the given store.
    pub fn new(store: RecordStore) -> Self {
        ContactRepository { store }
    }

    /// Creates a repository with its own store over the given context.
    pub fn with_context(context: PersistenceContext) -> Self {
        ContactRepository::new(RecordStore::new(context))
    }

    /// Returns the underlying record store.
    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    /// Creates a contact with the given names and saves immediately.
    ///
    /// Both fields are assigned verbatim: no trimming, no validation, empty
    /// strings accepted as-is. The save result is propagated, so a caller
    /// holding an `Ok` contact knows it is durable; on error the staged
    /// contact exists in the context but has not been committed.
    pub fn create_contact(
        &self,
        first: Option<&str>,
        last: Option<&str>,
    ) -> StoreResult<Contact> {
        let mut contact: Contact = self.store.create()?;
        contact.first_name = first.map(str::to_string);
        contact.last_name = last.map(str::to_string);

        self.store.update(&contact)?;
        self.store.save_all_changes()?;
        Ok(contact)
    }

    /// Fetches contacts sorted ascending by first name.
    ///
    /// With no search term every contact is returned. With a term, only
    /// contacts whose first or last name contains it as a case-insensitive,
    /// diacritic-insensitive substring are returned. The term is used as
    /// given; trimming and empty-string handling are the caller's concern.
    pub fn fetch_all_contacts(&self, search_term: Option<&str>) -> StoreResult<Vec<Contact>> {
        let filter = match search_term {
            Some(term) => field(FIRST_NAME)
                .contains(term)
                .or(field(LAST_NAME).contains(term)),
            None => all(),
        };

        self.store
            .fetch_all_with_options(filter, &order_by(FIRST_NAME, SortOrder::Ascending))
    }

    /// Returns the number of stored contacts, or `-1` if the context is
    /// unreachable.
    pub fn count_contacts(&self) -> i64 {
        self.store.count::<Contact>(all())
    }
}
