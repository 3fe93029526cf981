//! WASM platform implementations
//!
//! Provides browser implementations using web-sys and js-sys. The providers
//! hold no JavaScript handles so they stay `Send + Sync` for Dioxus context;
//! every call looks the browser object up again.

use std::{future::Future, pin::Pin};

use wasm_bindgen::JsValue;

use crate::ports::outbound::platform::{
    DocumentProvider, RandomProvider, SleepProvider, StorageProvider,
};
use crate::state::Platform;

use super::SeededRandomProvider;

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// WASM random provider using Math.random
#[derive(Clone, Default)]
pub struct WasmRandomProvider;

impl RandomProvider for WasmRandomProvider {
    fn random_index(&self, bound: usize) -> usize {
        if bound <= 1 {
            return 0;
        }
        let index = (js_sys::Math::random() * bound as f64).floor() as usize;
        index.min(bound - 1)
    }
}

/// WASM storage provider backed by window.localStorage
#[derive(Clone, Default)]
pub struct WasmStorageProvider;

impl StorageProvider for WasmStorageProvider {
    fn save(&self, key: &str, value: &str) {
        match local_storage() {
            Some(storage) => {
                if let Err(e) = storage.set_item(key, value) {
                    tracing::error!("Failed to write localStorage key {}: {:?}", key, e);
                }
            }
            None => tracing::warn!("localStorage unavailable; {} not saved", key),
        }
    }

    fn load(&self, key: &str) -> Option<String> {
        local_storage().and_then(|s| s.get_item(key).ok().flatten())
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = local_storage() {
            if let Err(e) = storage.remove_item(key) {
                tracing::error!("Failed to remove localStorage key {}: {:?}", key, e);
            }
        }
    }
}

/// WASM document provider
#[derive(Clone, Default)]
pub struct WasmDocumentProvider;

impl DocumentProvider for WasmDocumentProvider {
    fn set_page_title(&self, title: &str) {
        if let Some(document) = web_sys::window().and_then(|w| w.document()) {
            document.set_title(title);
        }
    }
}

/// WASM sleep provider wrapping setTimeout in a Promise
#[derive(Clone, Default)]
pub struct WasmSleepProvider;

impl SleepProvider for WasmSleepProvider {
    fn sleep_ms(&self, ms: u64) -> Pin<Box<dyn Future<Output = ()> + 'static>> {
        Box::pin(async move {
            let timeout = i32::try_from(ms).unwrap_or(i32::MAX);
            let promise = js_sys::Promise::new(&mut |resolve, _reject| {
                let scheduled = web_sys::window().map(|w| {
                    w.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, timeout)
                });
                if !matches!(scheduled, Some(Ok(_))) {
                    // No timer available; resolve at once rather than hang
                    let _ = resolve.call0(&JsValue::NULL);
                }
            });
            let _ = wasm_bindgen_futures::JsFuture::from(promise).await;
        })
    }
}

/// Create platform services for the browser
pub fn create_platform(seed: Option<u64>) -> Platform {
    match seed {
        Some(seed) => Platform::new(
            WasmSleepProvider,
            SeededRandomProvider::new(seed),
            WasmStorageProvider,
            WasmDocumentProvider,
        ),
        None => Platform::new(
            WasmSleepProvider,
            WasmRandomProvider,
            WasmStorageProvider,
            WasmDocumentProvider,
        ),
    }
}
