//! Outbound ports - Interfaces for external services
//!
//! These ports define the contracts that infrastructure adapters must implement,
//! allowing application services to interact with browser storage and the
//! code interpreter without depending on concrete implementations.

pub mod interpreter_port;
pub mod platform;
pub mod platform_port;
pub mod storage_port;

pub use interpreter_port::{InterpreterError, InterpreterPort};
pub use platform::{
    storage_keys, DocumentProvider, RandomProvider, SleepProvider, StorageProvider,
};
pub use platform_port::PlatformPort;
pub use storage_port::KeyValueStorePort;

#[cfg(any(test, feature = "testing"))]
pub use interpreter_port::MockInterpreterPort;
#[cfg(any(test, feature = "testing"))]
pub use storage_port::MockKeyValueStorePort;
