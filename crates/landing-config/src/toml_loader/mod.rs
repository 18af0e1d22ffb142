//! TOML config file loading.

mod loader;


pub use loader::{from_toml_str, load_from_path, load_or_default};
