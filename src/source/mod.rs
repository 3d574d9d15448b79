// src/source/mod.rs

pub mod section;
pub mod value;

pub use section::{sentinel_for, Section};
pub use value::{FieldValue, Record};

use std::path::Path;

use serde::Deserialize;
use serde_yaml::Value;

use crate::error::{GenError, Result};

/// Reserved top-level key; everything else is a section.
pub const SETTINGS_KEY: &str = "settings";

/// Document-wide settings.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct Settings {
    /// Fallback jump-host template for sections without their own.
    #[serde(default)]
    pub proxycommand: Option<String>,
}

/// The parsed host inventory.
///
/// Sections are kept as raw YAML until asked for, so a malformed section only
/// fails when it is reached.
#[derive(Debug, Default)]
pub struct Document {
    pub settings: Settings,
    entries: Vec<(String, Value)>,
}

impl Document {
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| GenError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let root: Value = serde_yaml::from_str(&text).map_err(|source| GenError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&root)
    }

    pub fn from_yaml(root: &Value) -> Result<Self> {
        let map = match root {
            Value::Mapping(map) => map,
            Value::Null => {
                tracing::warn!("source document is empty, nothing to generate");
                return Ok(Self::default());
            }
            _ => {
                return Err(GenError::InvalidDocument(
                    "top level must be a mapping of sections".to_string(),
                ))
            }
        };

        let mut doc = Self::default();
        for (key, value) in map {
            let name = value::key_to_string("<root>", key)?;
            if name == SETTINGS_KEY {
                doc.settings = parse_settings(value)?;
                continue;
            }
            doc.entries.push((name, value.clone()));
        }
        Ok(doc)
    }

    pub fn section_names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    /// Every non-settings entry in document order, each parsed on demand.
    pub fn sections(&self) -> impl Iterator<Item = (&str, Result<Section>)> {
        self.entries
            .iter()
            .map(|(name, value)| (name.as_str(), Section::from_yaml(name, value)))
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn parse_settings(value: &Value) -> Result<Settings> {
    if value.is_null() {
        return Ok(Settings::default());
    }
    serde_yaml::from_value(value.clone())
        .map_err(|e| GenError::InvalidDocument(format!("settings: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(text: &str) -> Result<Document> {
        let v: Value = serde_yaml::from_str(text).unwrap();
        Document::from_yaml(&v)
    }

    #[test]
    fn settings_entry_is_not_a_section() {
        let d = doc(
            r#"
settings:
  proxycommand: "ssh -q proxyhost nc %h %p"
work:
  default: { domain: example.com }
  hosts: { web: {} }
home:
  default: { domain: lan }
  hosts: {}
"#,
        )
        .unwrap();

        assert_eq!(
            d.settings.proxycommand.as_deref(),
            Some("ssh -q proxyhost nc %h %p")
        );
        let names: Vec<&str> = d.section_names().collect();
        assert_eq!(names, ["work", "home"]);
        assert!(d.sections().all(|(_, s)| s.is_ok()));
    }

    #[test]
    fn settings_without_proxycommand_is_fine() {
        let d = doc("settings: {}\n").unwrap();
        assert!(d.settings.proxycommand.is_none());
        assert!(d.is_empty());
    }

    #[test]
    fn empty_document_has_no_sections() {
        let d = Document::from_yaml(&Value::Null).unwrap();
        assert!(d.is_empty());
    }

    #[test]
    fn non_mapping_root_is_rejected() {
        assert!(matches!(doc("- a\n- b\n"), Err(GenError::InvalidDocument(_))));
    }

    #[test]
    fn section_errors_surface_per_section() {
        let d = doc("broken:\n  hosts: {}\nfine:\n  default: {domain: x}\n  hosts: {}\n").unwrap();
        let results: Vec<(&str, bool)> = d.sections().map(|(n, s)| (n, s.is_ok())).collect();
        assert_eq!(results, [("broken", false), ("fine", true)]);

        let (_, first) = d.sections().next().unwrap();
        assert!(matches!(first, Err(GenError::MissingField { .. })));
    }
}
