use std::collections::BTreeMap;

use crate::common::Value;
use crate::record::RecordId;

/// The untyped field map one entity instance is stored as.
///
/// # Purpose
/// `Record` is the shape the persistence context actually holds: a field name
/// to [`Value`] map plus the record's identity once the context has assigned
/// one. Typed entities convert to and from records through
/// [`Storable`](crate::record::Storable).
///
/// # Characteristics
/// - Absent fields read as [`Value::Null`]; storing `Null` and not storing a
///   field are indistinguishable to queries
/// - The id is `None` until the context stages the record for the first time
///
/// # Usage
/// ```text
/// let mut record = Record::new();
/// record.put("first_name", "Anna");
/// record.put("last_name", Value::Null);
/// assert_eq!(record.get("first_name"), Value::from("Anna"));
/// assert!(record.get("missing").is_null());
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Record {
    id: Option<RecordId>,
    fields: BTreeMap<String, Value>,
}

impl Record {
    /// Creates an empty record with no identity.
    pub fn new() -> Self {
        Record {
            id: None,
            fields: BTreeMap::new(),
        }
    }

    /// Returns the record's identity, if the context has assigned one.
    pub fn id(&self) -> Option<RecordId> {
        self.id
    }

    /// Binds the record to an identity.
    pub fn set_id(&mut self, id: RecordId) {
        self.id = Some(id);
    }

    /// Sets a field value, replacing any previous value for that field.
    pub fn put(&mut self, field: &str, value: impl Into<Value>) {
        self.fields.insert(field.to_string(), value.into());
    }

    /// Reads a field value; absent fields read as [`Value::Null`].
    pub fn get(&self, field: &str) -> Value {
        self.fields.get(field).cloned().unwrap_or(Value::Null)
    }

    /// Returns the names of all fields present on this record.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Returns the number of fields present on this record.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` if no fields are present.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_record_is_empty() {
        let record = Record::new();
        assert!(record.is_empty());
        assert!(record.id().is_none());
    }

    #[test]
    fn test_put_and_get() {
        let mut record = Record::new();
        record.put("first_name", "Anna");
        record.put("age", 30i64);
        assert_eq!(record.get("first_name"), Value::from("Anna"));
        assert_eq!(record.get("age"), Value::I64(30));
        assert_eq!(record.len(), 2);
    }

    #[test]
    fn test_missing_field_reads_null() {
        let record = Record::new();
        assert!(record.get("anything").is_null());
    }

    #[test]
    fn test_put_overwrites() {
        let mut record = Record::new();
        record.put("first_name", "Anna");
        record.put("first_name", "Amy");
        assert_eq!(record.get("first_name"), Value::from("Amy"));
        assert_eq!(record.len(), 1);
    }

    #[test]
    fn test_identity_binding() {
        let mut record = Record::new();
        record.set_id(RecordId::from_raw(7));
        assert_eq!(record.id().map(|id| id.as_u64()), Some(7));
    }

    #[test]
    fn test_field_names() {
        let mut record = Record::new();
        record.put("b", 1i64);
        record.put("a", 2i64);
        let names: Vec<&str> = record.field_names().collect();
        assert_eq!(names, vec!["a", "b"]);
    }
}
