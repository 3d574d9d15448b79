// src/source/value.rs
use std::fmt;

use serde_yaml::{Mapping, Number, Value};

use crate::error::{GenError, Result};

/// A scalar field value as it appears in the source document.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Str(String),
    Number(Number),
    Bool(bool),
    Null,
}

impl FieldValue {
    /// Returns `None` for sequences, mappings and tagged values.
    pub fn from_yaml(value: &Value) -> Option<Self> {
        match value {
            Value::String(s) => Some(Self::Str(s.clone())),
            Value::Number(n) => Some(Self::Number(n.clone())),
            Value::Bool(b) => Some(Self::Bool(*b)),
            Value::Null => Some(Self::Null),
            Value::Sequence(_) | Value::Mapping(_) | Value::Tagged(_) => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Self::Str(s) => s.is_empty(),
            Self::Null => true,
            Self::Number(_) | Self::Bool(_) => false,
        }
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        Self::Str(s.to_string())
    }
}

/// The one stringification rule every value goes through before output.
impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str(s) => f.write_str(s),
            Self::Number(n) => write!(f, "{n}"),
            Self::Bool(true) => f.write_str("True"),
            Self::Bool(false) => f.write_str("False"),
            Self::Null => Ok(()),
        }
    }
}

/// An ordered field-name → value mapping (a host record or a defaults record).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    fields: Vec<(String, FieldValue)>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a record from a YAML mapping, keeping declaration order.
    pub(crate) fn from_mapping(section: &str, map: &Mapping) -> Result<Self> {
        let mut rec = Self::new();
        for (k, v) in map {
            let name = key_to_string(section, k)?;
            let value = FieldValue::from_yaml(v).ok_or_else(|| GenError::InvalidValue {
                section: section.to_string(),
                field: name.clone(),
            })?;
            rec.insert(name, value);
        }
        Ok(rec)
    }

    /// Null reads as an empty record (`web:` with nothing under it).
    pub(crate) fn from_yaml(section: &str, what: &str, value: &Value) -> Result<Self> {
        match value {
            Value::Null => Ok(Self::new()),
            Value::Mapping(map) => Self::from_mapping(section, map),
            _ => Err(GenError::InvalidDocument(format!(
                "section `{section}`: `{what}` must be a mapping"
            ))),
        }
    }

    /// Replaces the value in place if `name` already exists.
    pub fn insert(&mut self, name: impl Into<String>, value: FieldValue) {
        let name = name.into();
        match self.fields.iter_mut().find(|(k, _)| *k == name) {
            Some(slot) => slot.1 = value,
            None => self.fields.push((name, value)),
        }
    }

    pub fn with(mut self, name: &str, value: impl Into<FieldValue>) -> Self {
        self.insert(name, value.into());
        self
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.fields.iter().find(|(k, _)| k == name).map(|(_, v)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

pub(crate) fn key_to_string(section: &str, key: &Value) -> Result<String> {
    match FieldValue::from_yaml(key) {
        Some(FieldValue::Null) | None => Err(GenError::InvalidDocument(format!(
            "section `{section}`: keys must be strings, numbers or booleans"
        ))),
        Some(v) => Ok(v.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn yaml(text: &str) -> Value {
        serde_yaml::from_str(text).unwrap()
    }

    #[test]
    fn scalars_stringify_once() {
        assert_eq!(FieldValue::from("bob").to_string(), "bob");
        assert_eq!(FieldValue::from_yaml(&yaml("2222")).unwrap().to_string(), "2222");
        assert_eq!(FieldValue::from_yaml(&yaml("1.5")).unwrap().to_string(), "1.5");
        assert_eq!(FieldValue::Bool(true).to_string(), "True");
        assert_eq!(FieldValue::Bool(false).to_string(), "False");
        assert_eq!(FieldValue::Null.to_string(), "");
    }

    #[test]
    fn nested_values_are_rejected() {
        assert!(FieldValue::from_yaml(&yaml("[a, b]")).is_none());
        assert!(FieldValue::from_yaml(&yaml("{a: b}")).is_none());
    }

    #[test]
    fn emptiness() {
        assert!(FieldValue::from("").is_empty());
        assert!(FieldValue::Null.is_empty());
        assert!(!FieldValue::Bool(false).is_empty());
        assert!(!FieldValue::from_yaml(&yaml("0")).unwrap().is_empty());
    }

    #[test]
    fn record_keeps_declaration_order() {
        let v = yaml("zeta: 1\nalpha: two\nmid: true\n");
        let rec = Record::from_yaml("s", "default", &v).unwrap();
        let names: Vec<&str> = rec.iter().map(|(k, _)| k).collect();
        assert_eq!(names, ["zeta", "alpha", "mid"]);
    }

    #[test]
    fn record_insert_overwrites_in_place() {
        let mut rec = Record::new().with("a", "1").with("b", "2");
        rec.insert("a", "3".into());
        let pairs: Vec<(&str, String)> = rec.iter().map(|(k, v)| (k, v.to_string())).collect();
        assert_eq!(pairs, [("a", "3".to_string()), ("b", "2".to_string())]);
    }

    #[test]
    fn record_rejects_nested_field() {
        let v = yaml("user: [a, b]\n");
        let err = Record::from_yaml("work", "default", &v).unwrap_err();
        assert!(matches!(err, GenError::InvalidValue { ref field, .. } if field == "user"));
    }

    #[test]
    fn null_record_is_empty() {
        let rec = Record::from_yaml("s", "hosts", &Value::Null).unwrap();
        assert!(rec.is_empty());
    }

    #[test]
    fn numeric_keys_are_stringified() {
        let v = yaml("10: x\n");
        let rec = Record::from_yaml("s", "hosts", &v).unwrap();
        assert_eq!(rec.get("10"), Some(&FieldValue::from("x")));
    }
}
