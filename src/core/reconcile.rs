//! Reconciling local registries against remotely fetched records.
//!
//! Planning walks the remote data in key order and decides per key:
//! forced overwrite, nothing to do, or a deferred confirmation. Deferred
//! confirmations then run strictly in sequence, so exactly one prompt is
//! active at a time and writes land in key order.

use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::core::diff::diff;
use crate::core::registry::{self, UsageRecord, REGISTRY_FILE_NAME};
use crate::core::remote::RemoteData;
use crate::prompt::Confirm;
use crate::report::Reporter;

/// A queued overwrite awaiting operator confirmation.
#[derive(Debug)]
struct PendingUpdate {
    file_path: PathBuf,
    missing: Vec<UsageRecord>,
    remote: Vec<UsageRecord>,
}

/// Outcome counts of a reconciliation run.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ReconcileSummary {
    pub written: usize,
    pub unchanged: usize,
    pub cancelled: usize,
    pub skipped: usize,
}

/// Resolve the registry file a key addresses.
///
/// A project-qualified `project|type|name` key drops its leading segment;
/// an unqualified `component|name` key keeps both segments.
pub fn registry_path_for_key(root: &Path, key: &str) -> PathBuf {
    let segments: Vec<&str> = key.split('|').collect();
    let tail = if segments.len() > 2 {
        &segments[1..]
    } else {
        &segments[..]
    };

    let mut path = root.to_path_buf();
    for segment in tail {
        path.push(segment);
    }
    path.join(REGISTRY_FILE_NAME)
}

/// Reconcile every remote registry against its local file under `root`.
///
/// With `force` each file is overwritten unconditionally, no diff, no
/// prompt. Otherwise a key whose local registry fails to load is logged
/// (`Parse Error: <path>`) and skipped; a key with an empty diff is left
/// alone; the rest queue for sequential confirmation. "yes" overwrites the
/// local file with the full remote document, "no" cancels, any other
/// answer is unrecognized and also leaves the file untouched.
pub fn reconcile(
    root: &Path,
    remote_data: RemoteData,
    force: bool,
    reporter: &dyn Reporter,
    confirm: &mut dyn Confirm,
) -> Result<ReconcileSummary> {
    let mut summary = ReconcileSummary::default();
    let mut pending = Vec::new();

    for (key, remote) in remote_data {
        let file_path = registry_path_for_key(root, &key);

        if force {
            registry::write_registry(&file_path, &remote)?;
            summary.written += 1;
            continue;
        }

        let current = match registry::load_registry(&file_path) {
            Ok(document) => document,
            Err(_) => {
                reporter.error(&format!("Parse Error: {}", file_path.display()));
                summary.skipped += 1;
                continue;
            }
        };

        let missing = diff(&remote, &current);
        if missing.is_empty() {
            summary.unchanged += 1;
        } else {
            pending.push(PendingUpdate {
                file_path,
                missing,
                remote,
            });
        }
    }

    for update in pending {
        let labels: Vec<&str> = update
            .missing
            .iter()
            .filter_map(UsageRecord::default_label)
            .collect();
        reporter.notice(&format!("Find different fields: [{}]", labels.join(", ")));

        let answer = confirm.ask("Whether to use remote language packs? yes/no", "yes")?;
        match answer.as_str() {
            "yes" => {
                reporter.notice("use remote");
                registry::write_registry(&update.file_path, &update.remote)?;
                summary.written += 1;
            }
            "no" => {
                reporter.notice("user cancel");
                summary.cancelled += 1;
            }
            _ => {
                reporter.notice("Can not recognize the instruction");
                summary.cancelled += 1;
            }
        }
    }

    Ok(summary)
}
