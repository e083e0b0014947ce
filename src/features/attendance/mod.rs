#[cfg(target_arch = "wasm32")]
pub(crate) mod client;
pub(crate) mod loader;
pub(crate) mod types;
