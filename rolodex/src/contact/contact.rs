use crate::errors::StoreResult;
use crate::record::{Record, RecordId, Storable};

/// Field name of a contact's first name inside its record.
pub const FIRST_NAME: &str = "first_name";
/// Field name of a contact's last name inside its record.
pub const LAST_NAME: &str = "last_name";

/// One person in the contacts list.
///
/// Both name fields are optional and unvalidated: absent, empty, and
/// whitespace-only values are stored verbatim, and nothing enforces
/// uniqueness, so duplicate contacts are permitted. Identity comes solely
/// from the context-assigned record id.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Contact {
    record_id: Option<RecordId>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl Contact {
    /// Renders the contact as list-row text.
    ///
    /// Non-empty name parts are joined with a single space; an absent or
    /// empty part produces no leading or trailing space.
    pub fn display_name(&self) -> String {
        let mut text = String::new();
        if let Some(first) = &self.first_name {
            if !first.is_empty() {
                text.push_str(first);
            }
        }
        if let Some(last) = &self.last_name {
            if !last.is_empty() {
                if !text.is_empty() {
                    text.push(' ');
                }
                text.push_str(last);
            }
        }
        text
    }
}

impl Storable for Contact {
    fn entity_name() -> String {
        "Contact".to_string()
    }

    fn to_record(&self) -> StoreResult<Record> {
        let mut record = Record::new();
        if let Some(id) = self.record_id {
            record.set_id(id);
        }
        record.put(FIRST_NAME, self.first_name.clone());
        record.put(LAST_NAME, self.last_name.clone());
        Ok(record)
    }

    fn from_record(record: &Record) -> StoreResult<Self> {
        Ok(Contact {
            record_id: record.id(),
            first_name: record.get(FIRST_NAME).as_string().cloned(),
            last_name: record.get(LAST_NAME).as_string().cloned(),
        })
    }

    fn record_id(&self) -> Option<RecordId> {
        self.record_id
    }

    fn set_record_id(&mut self, id: RecordId) {
        self.record_id = Some(id);
    }
}
