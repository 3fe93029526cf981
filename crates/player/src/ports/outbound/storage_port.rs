//! Key-value store port - persistence seam for the progress record
//!
//! Application services depend on this narrow get/set contract rather than
//! on the whole platform, so they can be tested with a mock store.

use super::PlatformPort;

#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
pub trait KeyValueStorePort: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

// =============================================================================
// Blanket implementation: PlatformPort -> KeyValueStorePort
// =============================================================================

/// Blanket implementation allowing any `PlatformPort` to be used as `KeyValueStorePort`
impl<T: PlatformPort + ?Sized> KeyValueStorePort for T {
    fn get(&self, key: &str) -> Option<String> {
        PlatformPort::storage_load(self, key)
    }

    fn set(&self, key: &str, value: &str) {
        PlatformPort::storage_save(self, key, value)
    }

    fn remove(&self, key: &str) {
        PlatformPort::storage_remove(self, key)
    }
}
