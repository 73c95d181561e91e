//! Registry documents and the translation records they hold.
//!
//! A registry file (`lang.json`) is an ordered JSON array whose entries are
//! either a bare default-locale label or a locale-code -> label record.
//! Documents are only ever rewritten whole; entry and field order are
//! preserved across a round-trip.

use std::fmt;
use std::fs;
use std::hash::{DefaultHasher, Hash, Hasher};
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::ser::{PrettyFormatter, Serializer};
use serde_json::{Map, Value};

/// File name of a module's registry document.
pub const REGISTRY_FILE_NAME: &str = "lang.json";

/// Locale code a bare-string record implicitly labels.
pub const DEFAULT_LOCALE: &str = "zh_cn";

/// One translation entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum UsageRecord {
    /// A single default-locale label.
    Label(String),
    /// A locale-code -> label record.
    Record(Map<String, Value>),
}

/// The ordered contents of one registry file.
pub type RegistryDocument = Vec<UsageRecord>;

impl UsageRecord {
    /// Parse the raw argument text of a call site into a record.
    ///
    /// JSON literals (double-quoted strings, objects) parse as such;
    /// single-quoted strings lose their quotes; anything else is kept
    /// verbatim as a bare label.
    pub fn from_argument(raw: &str) -> UsageRecord {
        let trimmed = raw.trim();

        if let Ok(value) = serde_json::from_str::<Value>(trimmed) {
            match value {
                Value::String(label) => return UsageRecord::Label(label),
                Value::Object(map) => return UsageRecord::Record(map),
                _ => {}
            }
        }

        if trimmed.len() >= 2 && trimmed.starts_with('\'') && trimmed.ends_with('\'') {
            return UsageRecord::Label(trimmed[1..trimmed.len() - 1].to_string());
        }

        UsageRecord::Label(trimmed.to_string())
    }

    /// The default-locale label of this record, if it has one. A bare
    /// label is its own default-locale label.
    pub fn default_label(&self) -> Option<&str> {
        match self {
            UsageRecord::Label(label) => Some(label),
            UsageRecord::Record(map) => map.get(DEFAULT_LOCALE).and_then(Value::as_str),
        }
    }

    /// Canonical content hash: field order never affects the result.
    pub fn content_hash(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        match self {
            UsageRecord::Label(label) => {
                0u8.hash(&mut hasher);
                label.hash(&mut hasher);
            }
            UsageRecord::Record(map) => {
                1u8.hash(&mut hasher);
                hash_map(map, &mut hasher);
            }
        }
        hasher.finish()
    }
}

impl fmt::Display for UsageRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UsageRecord::Label(label) => f.write_str(label),
            UsageRecord::Record(map) => {
                let compact =
                    serde_json::to_string(&Value::Object(map.clone())).map_err(|_| fmt::Error)?;
                f.write_str(&compact)
            }
        }
    }
}

fn hash_map(map: &Map<String, Value>, hasher: &mut DefaultHasher) {
    let mut entries: Vec<(&String, &Value)> = map.iter().collect();
    entries.sort_by_key(|(key, _)| *key);
    for (key, value) in entries {
        key.hash(hasher);
        hash_value(value, hasher);
    }
}

fn hash_value(value: &Value, hasher: &mut DefaultHasher) {
    match value {
        Value::Null => 0u8.hash(hasher),
        Value::Bool(flag) => {
            1u8.hash(hasher);
            flag.hash(hasher);
        }
        Value::Number(number) => {
            2u8.hash(hasher);
            number.to_string().hash(hasher);
        }
        Value::String(text) => {
            3u8.hash(hasher);
            text.hash(hasher);
        }
        Value::Array(items) => {
            4u8.hash(hasher);
            items.len().hash(hasher);
            for item in items {
                hash_value(item, hasher);
            }
        }
        Value::Object(map) => {
            5u8.hash(hasher);
            hash_map(map, hasher);
        }
    }
}

/// Load a registry document. Errors name the offending path; callers treat
/// them as recoverable per file.
pub fn load_registry(path: &Path) -> Result<RegistryDocument> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read registry: {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse registry: {}", path.display()))
}

/// Overwrite a registry document, pretty-printed with 4-space indentation.
pub fn write_registry(path: &Path, records: &[UsageRecord]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    let content = to_pretty_json(records)?;
    fs::write(path, content).with_context(|| format!("Failed to write registry: {}", path.display()))
}

fn to_pretty_json(records: &[UsageRecord]) -> Result<String> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = Serializer::with_formatter(&mut buf, formatter);
    records
        .serialize(&mut serializer)
        .context("Failed to serialize registry")?;
    String::from_utf8(buf).context("Registry serialized to invalid UTF-8")
}
