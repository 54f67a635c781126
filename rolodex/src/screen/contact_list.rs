use crate::contact::{Contact, ContactRepository};
use crate::errors::StoreResult;

/// The contacts list screen, minus the UI toolkit.
///
/// # Purpose
/// `ContactListModel` owns the state the screen renders: the baseline list of
/// all contacts and, while a search is active, the filtered view. The host UI
/// shell forwards text and gesture events here and renders
/// [`visible_contacts`](ContactListModel::visible_contacts) back; nothing
/// else sits between the shell and the repository.
///
/// # Behavior contract
/// - Every search keystroke issues a fresh full query; there is no debouncing
///   and no incremental refinement (record volume is assumed small)
/// - A whitespace-only search term clears the filtered view without querying
///   and the screen falls back to the unfiltered baseline
/// - Mutations (add, delete) save and then re-fetch the entire baseline
///   rather than patching rows locally; the post-mutation list reflects the
///   current sort and filter
pub struct ContactListModel {
    repository: ContactRepository,
    all_contacts: Vec<Contact>,
    search_results: Vec<Contact>,
    searching: bool,
    search_term: Option<String>,
}

impl ContactListModel {
    /// Creates an unloaded screen model over the given repository.
    pub fn new(repository: ContactRepository) -> Self {
        ContactListModel {
            repository,
            all_contacts: Vec::new(),
            search_results: Vec::new(),
            searching: false,
            search_term: None,
        }
    }

    /// Fetches the baseline list. Call once when the screen appears.
    pub fn load(&mut self) -> StoreResult<()> {
        self.all_contacts = self.repository.fetch_all_contacts(None)?;
        Ok(())
    }

    /// Handles a change of the search box text.
    ///
    /// The text is trimmed first. An empty result clears the filtered view
    /// without touching the repository; anything else re-queries in full.
    /// The screen stays in search mode either way until
    /// [`end_search`](ContactListModel::end_search).
    pub fn set_search_text(&mut self, text: &str) -> StoreResult<()> {
        self.searching = true;

        let term = text.trim();
        if term.is_empty() {
            self.search_term = None;
            self.search_results.clear();
            return Ok(());
        }

        self.search_term = Some(term.to_string());
        self.search_results = self.repository.fetch_all_contacts(Some(term))?;
        Ok(())
    }

    /// Leaves search mode and drops the filtered view.
    pub fn end_search(&mut self) {
        self.searching = false;
        self.search_term = None;
        self.search_results.clear();
    }

    /// Returns `true` while the search box is active.
    pub fn is_searching(&self) -> bool {
        self.searching
    }

    /// The rows the screen currently shows: the filtered view while a
    /// non-empty search term is active, the baseline otherwise.
    pub fn visible_contacts(&self) -> &[Contact] {
        if self.searching && self.search_term.is_some() {
            &self.search_results
        } else {
            &self.all_contacts
        }
    }

    /// Number of visible rows.
    pub fn row_count(&self) -> usize {
        self.visible_contacts().len()
    }

    /// Renders the text of one visible row.
    pub fn row_text(&self, index: usize) -> Option<String> {
        self.visible_contacts().get(index).map(Contact::display_name)
    }

    /// Handles the add dialog's confirmation.
    ///
    /// Both fields are trimmed; a field left empty becomes absent. The
    /// contact is created and saved through the repository, then the
    /// baseline is re-fetched in full.
    pub fn add_contact(&mut self, first: &str, last: &str) -> StoreResult<Contact> {
        let contact = self
            .repository
            .create_contact(trimmed_or_none(first), trimmed_or_none(last))?;

        self.all_contacts = self.repository.fetch_all_contacts(None)?;
        Ok(contact)
    }

    /// Handles a row-delete gesture on the visible list.
    ///
    /// Deletes the record, saves, and re-fetches the baseline; while a
    /// search is active the filtered view is re-queried as well. An index
    /// past the visible rows is ignored.
    pub fn delete_row(&mut self, index: usize) -> StoreResult<()> {
        let Some(contact) = self.visible_contacts().get(index).cloned() else {
            log::warn!("Ignoring delete of row {} beyond the visible list", index);
            return Ok(());
        };

        self.repository.store().delete(&contact);
        self.repository.store().save_all_changes()?;

        self.all_contacts = self.repository.fetch_all_contacts(None)?;
        if self.searching {
            if let Some(term) = self.search_term.clone() {
                self.search_results = self.repository.fetch_all_contacts(Some(&term))?;
            }
        }
        Ok(())
    }
}

fn trimmed_or_none(text: &str) -> Option<&str> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}
