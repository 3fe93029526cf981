//! Code execution bridge adapters
//!
//! Desktop builds run code through a local Python process; browser builds
//! inject Pyodide on demand.

#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(not(target_arch = "wasm32"))]
mod desktop;

#[cfg(target_arch = "wasm32")]
pub use wasm::PyodideInterpreter;

#[cfg(not(target_arch = "wasm32"))]
pub use desktop::PythonProcessInterpreter;
