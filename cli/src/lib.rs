pub mod catalog;
pub mod config;
pub mod engine;

#[cfg(target_arch = "wasm32")]
pub mod wasm;
