// File: rusty-forms-types/src/value.rs
// Purpose: Submitted form values, single or multi-valued

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The current value of one field.
///
/// Checkbox groups and multi-selects submit several values under one name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Single(String),
    Multi(Vec<String>),
}

impl FieldValue {
    /// The value as a sequence; a missing or empty value becomes `[""]`
    pub fn to_values(&self) -> Vec<String> {
        match self {
            FieldValue::Single(value) => vec![value.clone()],
            FieldValue::Multi(values) if values.is_empty() => vec![String::new()],
            FieldValue::Multi(values) => values.clone(),
        }
    }

    /// The value flattened to one string, multi values joined with `,`
    pub fn joined(&self) -> String {
        match self {
            FieldValue::Single(value) => value.clone(),
            FieldValue::Multi(values) => values.join(","),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Single(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Single(value)
    }
}

impl From<Vec<String>> for FieldValue {
    fn from(values: Vec<String>) -> Self {
        FieldValue::Multi(values)
    }
}

impl From<Vec<&str>> for FieldValue {
    fn from(values: Vec<&str>) -> Self {
        FieldValue::Multi(values.into_iter().map(str::to_string).collect())
    }
}

/// Snapshot of every field's current value, keyed by field name
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormValues {
    fields: BTreeMap<String, FieldValue>,
}

impl FormValues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    pub fn with(mut self, name: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<FieldValue>) {
        self.fields.insert(name.into(), value.into());
    }

    pub fn remove(&mut self, name: &str) -> Option<FieldValue> {
        self.fields.remove(name)
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.fields.get(name)
    }

    /// Values of a field, normalized to a sequence so multi-valued inputs
    /// are tested the same way as single ones
    pub fn values_of(&self, name: &str) -> Vec<String> {
        self.get(name)
            .map(FieldValue::to_values)
            .unwrap_or_else(|| vec![String::new()])
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &FieldValue)> {
        self.fields.iter()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for FormValues
where
    K: Into<String>,
    V: Into<FieldValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut values = FormValues::new();
        for (name, value) in iter {
            values.insert(name, value);
        }
        values
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_scalar_is_wrapped() {
        let values = FormValues::new().with("age", "25");
        assert_eq!(values.values_of("age"), vec!["25".to_string()]);
    }

    #[test]
    fn test_missing_and_empty_multi_become_blank() {
        let values = FormValues::new().with("colors", Vec::<String>::new());
        assert_eq!(values.values_of("colors"), vec![String::new()]);
        assert_eq!(values.values_of("nope"), vec![String::new()]);
    }

    #[test]
    fn test_multi_values_keep_order() {
        let values = FormValues::new().with("colors", vec!["red", "", "blue"]);
        assert_eq!(values.values_of("colors"), vec!["red", "", "blue"]);
        assert_eq!(values.get("colors").unwrap().joined(), "red,,blue");
    }

    #[test]
    fn test_deserialize_from_json() {
        let values: FormValues =
            serde_json::from_str(r#"{"name": "Ann", "pets": ["cat", "dog"]}"#).unwrap();
        assert_eq!(values.get("name"), Some(&FieldValue::from("Ann")));
        assert_eq!(values.values_of("pets"), vec!["cat", "dog"]);
    }
}
