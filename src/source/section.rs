// src/source/section.rs
use serde_yaml::Value;

use super::value::{key_to_string, Record};
use crate::error::{GenError, Result};

/// One named group of hosts sharing a defaults record.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub name: String,
    pub defaults: Record,
    /// alias → host record, in declaration order.
    pub hosts: Vec<(String, Record)>,
}

impl Section {
    pub fn new(name: impl Into<String>, defaults: Record) -> Self {
        Self {
            name: name.into(),
            defaults,
            hosts: Vec::new(),
        }
    }

    pub fn with_host(mut self, alias: &str, record: Record) -> Self {
        self.hosts.push((alias.to_string(), record));
        self
    }

    /// The marker line (without terminator) bounding this section's block.
    pub fn sentinel(&self) -> String {
        sentinel_for(&self.name)
    }

    pub(crate) fn from_yaml(name: &str, value: &Value) -> Result<Self> {
        let Value::Mapping(map) = value else {
            return Err(GenError::InvalidDocument(format!(
                "section `{name}` must be a mapping with `default` and `hosts`"
            )));
        };

        let defaults_raw = map
            .get("default")
            .ok_or_else(|| GenError::missing(name, "default"))?;
        let hosts_raw = map
            .get("hosts")
            .ok_or_else(|| GenError::missing(name, "hosts"))?;

        for key in map.keys() {
            if !matches!(key.as_str(), Some("default" | "hosts")) {
                tracing::warn!(section = name, key = ?key, "ignoring unknown section key");
            }
        }

        let defaults = Record::from_yaml(name, "default", defaults_raw)?;

        let mut section = Self::new(name, defaults);
        match hosts_raw {
            Value::Null => {}
            Value::Mapping(hosts) => {
                for (alias, rec) in hosts {
                    let alias = key_to_string(name, alias)?;
                    let record = Record::from_yaml(name, &format!("hosts.{alias}"), rec)?;
                    section.hosts.push((alias, record));
                }
            }
            _ => {
                return Err(GenError::InvalidDocument(format!(
                    "section `{name}`: `hosts` must be a mapping"
                )))
            }
        }

        Ok(section)
    }
}

pub fn sentinel_for(section: &str) -> String {
    format!("#===GENERATED_BY_{section}===#")
}
