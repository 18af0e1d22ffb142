//! Landing page configuration.
//!
//! TOML-based configuration for mount points, timing and form behavior.
//! Every section uses serde defaults so partial configs work out of the box,
//! and an absent file means the built-in defaults.

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{
    FormConfig, LandingConfig, LoggingConfig, ModalConfig, MountsConfig, NavConfig,
    PreloadConfig, ScrollSpyConfig, StickyConfig,
};
pub use toml_loader::{from_toml_str, load_from_path, load_or_default};

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &LandingConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}
