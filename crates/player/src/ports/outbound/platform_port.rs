//! PlatformPort - Unified platform services interface
//!
//! This trait provides a unified interface for all platform-specific operations
//! needed by the UI layer. It abstracts the Platform DI container so that
//! UI code doesn't need to know which adapters were wired in.

use std::{future::Future, pin::Pin};

/// Unified platform services port
///
/// Implemented by the `Platform` struct in `state/platform.rs`.
///
/// Use via Dioxus context: `use_context::<Arc<dyn PlatformPort>>()`
pub trait PlatformPort: Send + Sync {
    // -------------------------------------------------------------------------
    // Sleep operations
    // -------------------------------------------------------------------------

    /// Sleep for the given number of milliseconds
    fn sleep_ms(&self, ms: u64) -> Pin<Box<dyn Future<Output = ()> + 'static>>;

    // -------------------------------------------------------------------------
    // Random operations
    // -------------------------------------------------------------------------

    /// Generate a uniformly distributed index in `[0, bound)`
    fn random_index(&self, bound: usize) -> usize;

    // -------------------------------------------------------------------------
    // Storage operations
    // -------------------------------------------------------------------------

    /// Save a string value with the given key
    fn storage_save(&self, key: &str, value: &str);

    /// Load a string value by key, returns None if not found
    fn storage_load(&self, key: &str) -> Option<String>;

    /// Remove a value by key
    fn storage_remove(&self, key: &str);

    // -------------------------------------------------------------------------
    // Document operations
    // -------------------------------------------------------------------------

    /// Set the browser page title
    fn set_page_title(&self, title: &str);
}
