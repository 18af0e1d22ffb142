pub mod errors;
pub mod events;
pub mod id;
pub mod types;

pub use errors::{BridgeError, ConfigError, LandingError, SubmitError};
pub use events::{IntersectionEntry, UiEvent};
pub use id::new_attempt_id;
pub use types::{NodeId, RootMargin, ScrollBehavior};
