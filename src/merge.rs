//! Resolves one section's defaults and per-host overrides into flat,
//! ordered `Host` entries.

use tracing::{debug, warn};

use crate::{
    error::{GenError, Result},
    keys::translate_key,
    source::{FieldValue, Record, Section},
};

/// Jump-host template used when neither the section nor the document sets one.
pub const DEFAULT_PROXY_COMMAND: &str = "ssh proxyhost -W %h:%p";

/// Literal substring in a proxy template replaced by the jump host's FQDN.
pub const PROXY_PLACEHOLDER: &str = "proxyhost";

/// Ordered keyword → value pairs for one `Host` block.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HostEntry {
    fields: Vec<(String, String)>,
}

impl HostEntry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrites an existing keyword in place, or appends it.
    pub fn set(&mut self, key: &str, value: String) {
        match self.fields.iter_mut().find(|(k, _)| k == key) {
            Some(slot) => slot.1 = value,
            None => self.fields.push((key.to_string(), value)),
        }
    }

    pub fn set_if_absent(&mut self, key: &str, value: String) {
        if !self.contains(key) {
            self.fields.push((key.to_string(), value));
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostBlock {
    /// What follows `Host ` in the rendered block.
    pub key: String,
    pub entry: HostEntry,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergedSection {
    pub blocks: Vec<HostBlock>,
}

impl MergedSection {
    pub fn get(&self, key: &str) -> Option<&HostEntry> {
        self.blocks.iter().find(|b| b.key == key).map(|b| &b.entry)
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// A repeated block key replaces the earlier entry but keeps its position.
    fn insert(&mut self, key: String, entry: HostEntry) {
        match self.blocks.iter_mut().find(|b| b.key == key) {
            Some(block) => {
                warn!(key = %block.key, "duplicate block key, later host wins");
                block.entry = entry;
            }
            None => self.blocks.push(HostBlock { key, entry }),
        }
    }
}

/// Merges every host of `section` against its defaults.
///
/// `fallback_proxy` is only consulted when the section's defaults carry no
/// `proxycommand`; the choice is made once per section.
pub fn merge_section(section: &Section, fallback_proxy: &str) -> Result<MergedSection> {
    let defaults = &section.defaults;
    let template = defaults
        .get("proxycommand")
        .map(FieldValue::to_string)
        .unwrap_or_else(|| fallback_proxy.to_string());

    let mut merged = MergedSection::default();
    for (alias, host) in &section.hosts {
        let (key, entry) = merge_host(section, alias, host, &template)?;
        debug!(section = %section.name, alias = %alias, key = %key, fields = entry.len(), "merged host");
        merged.insert(key, entry);
    }
    Ok(merged)
}

fn merge_host(
    section: &Section,
    alias: &str,
    host: &Record,
    template: &str,
) -> Result<(String, HostEntry)> {
    let defaults = &section.defaults;

    let domain = host
        .get("domain")
        .or_else(|| defaults.get("domain"))
        .ok_or_else(|| GenError::missing(&section.name, "domain"))?;
    let fqdn = format!("{alias}.{domain}");

    let mut entry = HostEntry::new();
    let key = match host.get("host") {
        Some(literal) => {
            entry.set("Hostname", fqdn);
            literal.to_string()
        }
        None => fqdn,
    };

    for (name, value) in host.iter() {
        match name {
            "host" | "domain" => continue,
            "proxyhost" => {
                // jump hosts always live in the section's default domain
                let proxy_domain = defaults
                    .get("domain")
                    .ok_or_else(|| GenError::missing(&section.name, "domain"))?;
                let proxy_fqdn = format!("{value}.{proxy_domain}");
                entry.set(
                    translate_key("proxycommand"),
                    template.replace(PROXY_PLACEHOLDER, &proxy_fqdn),
                );
            }
            _ if value.is_empty() => {}
            _ => entry.set(translate_key(name), value.to_string()),
        }
    }

    for (name, value) in defaults.iter() {
        if matches!(name, "domain" | "proxycommand") {
            continue;
        }
        entry.set_if_absent(translate_key(name), value.to_string());
    }

    Ok((key, entry))
}
