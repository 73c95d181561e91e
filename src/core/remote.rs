//! Client for the canonical registry service.
//!
//! One blocking GET per run, no retry. The service answers an envelope of
//! the form `{"errno": 0, "info": {"data": {"<key>": [record, ...]}}}`;
//! anything else is fatal for the run.

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::core::registry::UsageRecord;

/// Remote records per registry key, in response order.
pub type RemoteData = Vec<(String, Vec<UsageRecord>)>;

#[derive(Debug, Deserialize)]
struct Envelope {
    errno: i64,
    info: Info,
}

#[derive(Debug, Deserialize)]
struct Info {
    data: Map<String, Value>,
}

/// Fetch remote records for `keys` and normalize their field names.
pub fn fetch_updates(endpoint: &str, keys: &[String]) -> Result<RemoteData> {
    let response = ureq::get(endpoint)
        .query("files", &keys.join(","))
        .call()
        .context("Failed to fetch remote registry data")?;
    let body = response
        .into_string()
        .context("Failed to read remote response body")?;
    parse_response(&body)
}

/// Parse a response body into per-key record lists.
pub fn parse_response(body: &str) -> Result<RemoteData> {
    let envelope: Envelope =
        serde_json::from_str(body).context("Failed to parse remote response")?;
    if envelope.errno != 0 {
        bail!("Remote registry returned errno {}", envelope.errno);
    }

    let mut data = Vec::with_capacity(envelope.info.data.len());
    for (key, value) in envelope.info.data {
        let records: Vec<UsageRecord> = serde_json::from_value(value)
            .with_context(|| format!("Failed to parse remote records for key \"{}\"", key))?;
        data.push((key, records.into_iter().map(normalize_record).collect()));
    }
    Ok(data)
}

/// Lower-case a record's top-level field names and replace hyphens with
/// underscores (`Zh-CN` becomes `zh_cn`). Bare labels pass through.
fn normalize_record(record: UsageRecord) -> UsageRecord {
    match record {
        UsageRecord::Record(map) => {
            let mut normalized = Map::with_capacity(map.len());
            for (field, value) in map {
                normalized.insert(field.replace('-', "_").to_lowercase(), value);
            }
            UsageRecord::Record(normalized)
        }
        label => label,
    }
}
