//! Platform abstraction ports for cross-platform compatibility
//!
//! These traits abstract platform-specific operations so that:
//! 1. Application/presentation code remains platform-agnostic
//! 2. Platform-specific code is isolated in infrastructure
//! 3. Code becomes easily testable with in-memory implementations
//!
//! NOTE: The `Platform` struct (DI container) that aggregates these traits
//! lives in `state/platform.rs`. This module contains only trait definitions.

use std::{future::Future, pin::Pin};

/// Async sleep abstraction
///
/// Used to avoid `#[cfg]` branches in UI code (e.g. polling interpreter load progress).
pub trait SleepProvider: Clone + 'static {
    fn sleep_ms(&self, ms: u64) -> Pin<Box<dyn Future<Output = ()> + 'static>>;
}

/// Random number generation abstraction
pub trait RandomProvider: Clone + 'static {
    /// Generate a uniformly distributed index in `[0, bound)`
    fn random_index(&self, bound: usize) -> usize;
}

/// Persistent storage abstraction (localStorage/file-based)
pub trait StorageProvider: Clone + 'static {
    /// Save a string value with the given key
    fn save(&self, key: &str, value: &str);

    /// Load a string value by key, returns None if not found
    fn load(&self, key: &str) -> Option<String>;

    /// Remove a value by key
    fn remove(&self, key: &str);
}

/// Browser document operations (page title, etc.)
pub trait DocumentProvider: Clone + 'static {
    /// Set the browser page title (window title on desktop)
    fn set_page_title(&self, title: &str);
}

/// Storage key constants
///
/// These are kept in the ports layer as they define the contract for
/// what keys are used across the application.
pub mod storage_keys {
    pub const PROGRESS: &str = "regresslab_progress";
}
