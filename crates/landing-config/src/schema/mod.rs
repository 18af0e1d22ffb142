//! Configuration schema types.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod form;
mod mounts;
mod timing;

pub use form::*;
pub use mounts::*;
pub use timing::*;

use serde::{Deserialize, Serialize};

/// Root configuration for the page controllers.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LandingConfig {
    pub mounts: MountsConfig,
    pub nav: NavConfig,
    pub sticky: StickyConfig,
    pub scroll_spy: ScrollSpyConfig,
    pub preload: PreloadConfig,
    pub modal: ModalConfig,
    pub form: FormConfig,
    pub logging: LoggingConfig,
}

/// Log output settings used by the `landing` binary.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default `tracing` directive when `RUST_LOG` and `--log-level` are unset.
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "landing=info".into(),
        }
    }
}
