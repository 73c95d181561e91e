//! Set-difference between needed and present translation records.

use crate::core::registry::UsageRecord;

/// Records from `needed` with no counterpart in `current`, preserving
/// `needed`'s order.
///
/// A bare-string record matches a counterpart whose default-locale label
/// equals it; a locale-keyed record matches on structural equality
/// independent of field order. Quadratic over small registries; both the
/// validation path (needed = scanned usages, current = loaded registry)
/// and the update path (needed = remote records, current = local registry)
/// call this.
pub fn diff(needed: &[UsageRecord], current: &[UsageRecord]) -> Vec<UsageRecord> {
    needed
        .iter()
        .filter(|a| !current.iter().any(|b| covers(a, b)))
        .cloned()
        .collect()
}

fn covers(a: &UsageRecord, b: &UsageRecord) -> bool {
    match a {
        UsageRecord::Label(label) => b.default_label() == Some(label.as_str()),
        UsageRecord::Record(_) => a.content_hash() == b.content_hash(),
    }
}
