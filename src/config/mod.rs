// Configuration module for menuboard
// Handles loading display, form and key binding settings from a TOML file

pub mod keys;
pub mod loader;
pub mod types;

pub use keys::{parse_key, KeyBindingError, Keymap};
pub use loader::{create_default_config, get_config_path, load_config, load_config_from};
pub use types::{Config, DisplayConfig, FormConfig, KeyBindings, MAX_NOTIFICATION_SECS};
