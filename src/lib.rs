//! langctl - translation registry scanner and reconciler
//!
//! langctl locates `__i18n(...)` call sites across a project tree, maps
//! each source file to the `lang.json` registry of the module that owns
//! it, and reconciles local registries against a canonical remote service.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (argument parsing and dispatch)
//! - `config`: Configuration file loading and parsing
//! - `core`: Scanning, diffing, and reconciliation engine
//! - `prompt`: Interactive confirmation collaborator
//! - `report`: Injected error/notice reporting

pub mod cli;
pub mod config;
pub mod core;
pub mod prompt;
pub mod report;
