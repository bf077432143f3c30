// Adapters - External system implementations

pub mod channel_observer;
pub mod env_path;
pub mod toml_config;

// Re-export adapters
pub use channel_observer::{ChannelObserver, ClipEvent};
pub use env_path::EnvPathAdapter;
pub use toml_config::{ClipConfig, TomlConfigAdapter};
