//! Scroll, resize and load timing configuration.

use serde::{Deserialize, Serialize};

/// Mobile navigation behavior.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NavConfig {
    /// Viewport widths at or below this count as mobile (valid range: 320-2000).
    pub mobile_breakpoint: u32,
    /// Quiet period before a resize is acted on, in ms (valid range: 0-2000).
    pub resize_debounce_ms: u64,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            mobile_breakpoint: 767,
            resize_debounce_ms: 150,
        }
    }
}

/// Sticky navbar behavior.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StickyConfig {
    /// Scroll offset past which the navbar is marked scrolled (valid range: 0-1000).
    pub threshold: u32,
    /// Minimum spacing between scroll evaluations in ms (valid range: 0-1000).
    pub throttle_ms: u64,
}

impl Default for StickyConfig {
    fn default() -> Self {
        Self {
            threshold: 50,
            throttle_ms: 16,
        }
    }
}

/// Section highlighting and anchor scrolling.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrollSpyConfig {
    /// Extra space below the navbar excluded from the active zone, in px.
    pub top_padding: u32,
    /// Bottom share of the viewport excluded from the active zone (valid range: 0-100).
    pub bottom_margin_percent: u32,
    /// Gap left between the navbar and an anchor target after scrolling, in px.
    pub scroll_offset: u32,
}

impl Default for ScrollSpyConfig {
    fn default() -> Self {
        Self {
            top_padding: 20,
            bottom_margin_percent: 50,
            scroll_offset: 20,
        }
    }
}

/// Loading overlay behavior.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PreloadConfig {
    /// Class that starts the overlay's fade transition.
    pub fade_class: String,
    /// Delay between fade start and overlay removal in ms (valid range: 0-5000).
    pub remove_delay_ms: u64,
}

impl Default for PreloadConfig {
    fn default() -> Self {
        Self {
            fade_class: "fade-out".into(),
            remove_delay_ms: 350,
        }
    }
}
