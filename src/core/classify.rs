//! Path-based module classification.
//!
//! A file belongs to a localization-tracked module when its path contains a
//! segment of the form `/<type>/<name>/`, where `<type>` is one of
//! `component_modules`, `component`, `template`, or `page`. The first such
//! segment decides the module. Paths without a tracked segment are outside
//! the localization tree; that is a valid outcome, not an error.

use std::fmt;
use std::path::PathBuf;
use std::sync::LazyLock;

use regex::Regex;

use crate::core::registry::REGISTRY_FILE_NAME;

/// Namespace prefix stripped from module names.
const NAMESPACE_PREFIX: &str = "didi-component-";

// `component_modules` must precede `component` in the alternation so the
// longer type wins at the same offset.
static SEGMENT_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"/(component_modules|component|template|page)/([^/]+)/")
        .expect("segment pattern is valid")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModuleType {
    Component,
    ComponentModules,
    Template,
    Page,
}

impl ModuleType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ModuleType::Component => "component",
            ModuleType::ComponentModules => "component_modules",
            ModuleType::Template => "template",
            ModuleType::Page => "page",
        }
    }

    fn from_segment(segment: &str) -> Option<Self> {
        match segment {
            "component" => Some(ModuleType::Component),
            "component_modules" => Some(ModuleType::ComponentModules),
            "template" => Some(ModuleType::Template),
            "page" => Some(ModuleType::Page),
            _ => None,
        }
    }
}

impl fmt::Display for ModuleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The module a file path belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub module_type: ModuleType,
    pub name: String,
}

/// Classify a file path into the module that owns it.
///
/// The leftmost tracked segment wins when several are present. The
/// namespace prefix is stripped from the captured name.
pub fn classify(path: &str) -> Option<Classification> {
    let caps = SEGMENT_PATTERN.captures(path)?;
    let module_type = ModuleType::from_segment(&caps[1])?;
    let name = caps[2].replace(NAMESPACE_PREFIX, "");
    Some(Classification { module_type, name })
}

/// Resolve the registry document adjacent to a source file.
///
/// The registry sits directly under the matched module segment:
/// `a/component/card/js/index.js` maps to `a/component/card/lang.json`.
pub fn registry_path_for(path: &str) -> Option<PathBuf> {
    let matched = SEGMENT_PATTERN.find(path)?;
    Some(PathBuf::from(format!(
        "{}{}",
        &path[..matched.end()],
        REGISTRY_FILE_NAME
    )))
}
