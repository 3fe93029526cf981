//! RegressLab Shared - the static course catalog
//!
//! Modules, quizzes, glossary terms, stories, code exercises and scenario
//! pools are plain Rust data built from `regresslab-domain` types. Both the
//! player and the `xtask content-check` command read them from here.
//!
//! # Design Principles
//!
//! 1. **Content is data** - no behaviour beyond lookup and integrity checks
//! 2. **WASM compatible** - must compile for both native and wasm32 targets

pub mod catalog;

pub use catalog::{
    code_exercise, games_for_module, glossary, module, module_for_game, module_ids, modules, quiz,
    scenario_pool, stories, story, validate_catalog, CatalogIssue,
};
