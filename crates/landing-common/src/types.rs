use serde::{Deserialize, Serialize};
use std::fmt;

/// Handle to an element of the view tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(pub u32);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "node-{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScrollBehavior {
    #[default]
    Auto,
    Smooth,
}

/// Margin applied to the viewport before intersection is tested.
///
/// `top_px` shrinks the observed zone from the top (the sticky navbar);
/// `bottom_percent` shrinks it from the bottom as a share of viewport height.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RootMargin {
    pub top_px: f64,
    pub bottom_percent: f64,
}

impl RootMargin {
    /// CSS `rootMargin` notation, e.g. `-90px 0px -50% 0px`.
    pub fn to_css(&self) -> String {
        format!("-{}px 0px -{}% 0px", self.top_px, self.bottom_percent)
    }
}
