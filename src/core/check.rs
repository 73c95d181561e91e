//! Validation path: does every scanned usage have a registry entry?

use std::collections::{BTreeMap, HashMap};
use std::ffi::OsStr;
use std::fs;
use std::path::Path;

use rayon::prelude::*;

use crate::core::classify;
use crate::core::diff::diff;
use crate::core::registry::{self, RegistryDocument, UsageRecord, REGISTRY_FILE_NAME};
use crate::core::scanner::extract_usages;
use crate::report::Reporter;

/// One registry whose scanned usages are not all present.
#[derive(Debug, PartialEq)]
pub struct CoverageIssue {
    pub registry_path: String,
    pub missing: Vec<UsageRecord>,
}

/// Scan `files` for translation usages, bucket them by the registry each
/// file resolves to, and report the records absent from that registry.
///
/// Per-item failures never abort the pass: unreadable source files and
/// malformed registries are reported and skipped. Scanning is parallel per
/// file; buckets merge after the walk-independent scan completes.
pub fn validate_coverage(files: &[String], reporter: &dyn Reporter) -> Vec<CoverageIssue> {
    let scanned: Vec<(String, Vec<UsageRecord>)> = files
        .par_iter()
        .filter_map(|file| {
            let registry_path = classify::registry_path_for(file)?;
            let content = match fs::read_to_string(file) {
                Ok(content) => content,
                Err(err) => {
                    reporter.error(&format!("Failed to read \"{}\": {}", file, err));
                    return None;
                }
            };
            let records: Vec<UsageRecord> = extract_usages(&content)
                .iter()
                .map(|raw| UsageRecord::from_argument(raw))
                .collect();
            Some((registry_path.to_string_lossy().into_owned(), records))
        })
        .collect();

    let mut needed: BTreeMap<String, Vec<UsageRecord>> = BTreeMap::new();
    for (registry_path, records) in scanned {
        needed.entry(registry_path).or_default().extend(records);
    }

    let mut current: HashMap<String, RegistryDocument> = HashMap::new();
    for file in files {
        if Path::new(file).file_name() != Some(OsStr::new(REGISTRY_FILE_NAME)) {
            continue;
        }
        match registry::load_registry(Path::new(file)) {
            Ok(document) => {
                current.insert(file.clone(), document);
            }
            Err(_) => {
                reporter.error(&format!("Failed to parse registry \"{}\", please check!", file));
            }
        }
    }

    let mut issues = Vec::new();
    for (registry_path, need) in needed {
        if need.is_empty() {
            continue;
        }
        let present = current
            .get(&registry_path)
            .map(Vec::as_slice)
            .unwrap_or(&[]);
        let missing = diff(&need, present);
        if !missing.is_empty() {
            issues.push(CoverageIssue {
                registry_path,
                missing,
            });
        }
    }

    if !issues.is_empty() {
        let report: String = issues
            .iter()
            .map(|issue| {
                format!(
                    "\nfile: {} needs the following fields: \n{}",
                    issue.registry_path,
                    issue
                        .missing
                        .iter()
                        .map(ToString::to_string)
                        .collect::<Vec<_>>()
                        .join(" | ")
                )
            })
            .collect();
        reporter.notice(&report);
    }

    issues
}
