//! Core scanning, diffing, and reconciliation engine.
//!
//! Leaf-first: `classify` and `scanner` are pure functions over paths and
//! source text, `registry` owns the on-disk document format, `diff` is the
//! single reconciliation primitive, and `walker`, `check`, `remote`, and
//! `reconcile` compose them into the two workflows.

pub mod check;
pub mod classify;
pub mod diff;
pub mod reconcile;
pub mod registry;
pub mod remote;
pub mod scanner;
pub mod walker;
