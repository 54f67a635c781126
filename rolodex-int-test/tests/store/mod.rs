mod record_store_test;

use rolodex::errors::StoreResult;
use rolodex::record::{Record, RecordId, Storable};

/// A second storable shape, so the store's genericity is exercised with
/// something other than contacts.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Note {
    pub record_id: Option<RecordId>,
    pub title: Option<String>,
    pub body: Option<String>,
}

impl Storable for Note {
    fn entity_name() -> String {
        "Note".to_string()
    }

    fn to_record(&self) -> StoreResult<Record> {
        let mut record = Record::new();
        if let Some(id) = self.record_id {
            record.set_id(id);
        }
        record.put("title", self.title.clone());
        record.put("body", self.body.clone());
        Ok(record)
    }

    fn from_record(record: &Record) -> StoreResult<Self> {
        Ok(Note {
            record_id: record.id(),
            title: record.get("title").as_string().cloned(),
            body: record.get("body").as_string().cloned(),
        })
    }

    fn record_id(&self) -> Option<RecordId> {
        self.record_id
    }

    fn set_record_id(&mut self, id: RecordId) {
        self.record_id = Some(id);
    }
}
