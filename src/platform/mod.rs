//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Input events (key codes to intents)
//! - Frame metering
//! - Storage (files on native, LocalStorage on web)

pub mod fps;
pub mod input;
#[cfg(not(target_arch = "wasm32"))]
pub mod storage;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use fps::FpsMeter;
pub use input::intent_for_key;
#[cfg(not(target_arch = "wasm32"))]
pub use storage::FileStorage;
