//! State containers for player-side dependency injection
//!
//! This module contains DI containers that aggregate adapters behind port
//! traits. They are concrete implementations, not ports.

mod platform;

pub use platform::Platform;
