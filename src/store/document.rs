use std::collections::BTreeMap;

use crate::store::value::Value;

/// A document read back from the store.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub id: String,
    pub fields: BTreeMap<String, Value>,
}

impl Document {
    pub fn new(id: impl Into<String>, fields: BTreeMap<String, Value>) -> Self {
        Self {
            id: id.into(),
            fields,
        }
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    pub fn str_field(&self, field: &str) -> Option<&str> {
        self.get(field).and_then(Value::as_str)
    }

    pub fn string_field(&self, field: &str) -> Option<String> {
        self.str_field(field).map(str::to_string)
    }

    pub fn i64_field(&self, field: &str) -> Option<i64> {
        self.get(field).and_then(Value::as_i64)
    }

    pub fn bool_field(&self, field: &str) -> Option<bool> {
        self.get(field).and_then(Value::as_bool)
    }
}

/// A value to write into a single field.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Value(Value),
    /// Replaced by the store's clock at write time.
    ServerTimestamp,
    /// Removes the field. Only meaningful for updates.
    Delete,
}

/// The field writes of one set/add/update call, in field-name order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Fields(BTreeMap<String, FieldValue>);

impl Fields {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(field.into(), FieldValue::Value(value.into()));
        self
    }

    pub fn server_timestamp(mut self, field: impl Into<String>) -> Self {
        self.0.insert(field.into(), FieldValue::ServerTimestamp);
        self
    }

    pub fn delete(mut self, field: impl Into<String>) -> Self {
        self.0.insert(field.into(), FieldValue::Delete);
        self
    }

    pub fn get(&self, field: &str) -> Option<&FieldValue> {
        self.0.get(field)
    }

    pub fn has_deletes(&self) -> bool {
        self.0.values().any(|v| matches!(v, FieldValue::Delete))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &FieldValue)> {
        self.0.iter()
    }
}

impl IntoIterator for Fields {
    type Item = (String, FieldValue);
    type IntoIter = std::collections::btree_map::IntoIter<String, FieldValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
