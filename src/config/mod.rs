//! Configuration file management and startup secrets.

mod manager;
mod secrets;

pub use manager::{
    AssistantConfig, ConfigFile, ConfigManager, DEFAULT_ENDPOINT, DEFAULT_MODEL, ResolveOptions,
    ResolvedConfig, resolve_config,
};
pub use secrets::{INFERENCE_API_KEY_ENV, Secrets, TRACING_API_KEY_ENV};
