//! Recursive discovery of tracked files and their registry keys.

use std::collections::HashSet;
use std::path::Path;

use anyhow::{Context, Result};
use walkdir::WalkDir;

use crate::core::classify::{self, ModuleType};

/// File filter from the command line: the `all` sentinel, or a
/// comma-separated list of path substrings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Filter {
    All,
    Names(Vec<String>),
}

impl Filter {
    pub fn parse(raw: &str) -> Filter {
        if raw == "all" {
            Filter::All
        } else {
            Filter::Names(raw.split(',').map(str::to_string).collect())
        }
    }

    fn includes(&self, path: &str) -> bool {
        match self {
            Filter::All => true,
            Filter::Names(names) => names.iter().any(|name| path.contains(name.as_str())),
        }
    }
}

/// Files and registry keys discovered under a project root. Both lists are
/// deduplicated in first-seen order.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Discovery {
    pub files: Vec<String>,
    pub keys: Vec<String>,
}

/// Walk `root` and collect every file passing `filter`, together with the
/// registry keys their paths classify into.
///
/// The filter runs before classification: an excluded file contributes
/// neither a file nor a key. A module of type `component_modules` keys as
/// `component|<name>` without the project qualifier; every other module
/// keys as `<project>|<type>|<name>`. Enumeration errors abort the run.
/// The result materializes only after the walk completes.
pub fn discover_files_and_keys(project: &str, root: &Path, filter: &Filter) -> Result<Discovery> {
    let mut files = Vec::new();
    let mut seen_files = HashSet::new();
    let mut keys = Vec::new();
    let mut seen_keys = HashSet::new();

    for entry in WalkDir::new(root) {
        let entry =
            entry.with_context(|| format!("Failed to walk directory: {}", root.display()))?;
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path().to_string_lossy().into_owned();
        if !filter.includes(&path) {
            continue;
        }

        if let Some(result) = classify::classify(&path) {
            let key = match result.module_type {
                ModuleType::ComponentModules => format!("component|{}", result.name),
                tracked => format!("{}|{}|{}", project, tracked.as_str(), result.name),
            };
            if seen_keys.insert(key.clone()) {
                keys.push(key);
            }
        }

        if seen_files.insert(path.clone()) {
            files.push(path);
        }
    }

    Ok(Discovery { files, keys })
}
