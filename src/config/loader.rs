// Configuration file loading and creation

use super::types::Config;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Get the path to the default configuration file
pub fn get_config_path() -> PathBuf {
    let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("menuboard");
    path.push("config.toml");
    path
}

/// Load configuration from the default location
pub fn load_config() -> Result<Config, io::Error> {
    load_config_from(&get_config_path())
}

/// Load configuration from `path`, or create a default file there if it doesn't exist
pub fn load_config_from(path: &Path) -> Result<Config, io::Error> {
    if path.exists() {
        let contents = fs::read_to_string(path)?;
        match toml::from_str(&contents) {
            Ok(config) => {
                info!(path = %path.display(), "loaded configuration");
                Ok(config)
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "failed to parse config, using defaults");
                eprintln!("Warning: Failed to parse config file: {}", e);
                eprintln!("Using default configuration");
                Ok(Config::default())
            }
        }
    } else {
        create_default_config(path)?;
        Ok(Config::default())
    }
}

/// Create a default configuration file with helpful comments
pub fn create_default_config(path: &Path) -> Result<(), io::Error> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let config = Config::default();
    let toml_string = toml::to_string_pretty(&config).map_err(io::Error::other)?;

    let commented_toml = format!(
        "# menuboard configuration file\n\
         # Edit this file to customize the menu board\n\
         # After editing, restart menuboard for changes to take effect\n\
         #\n\
         # Key binding format: \"Up\", \"Down\", \"Enter\", \"Esc\", \"Tab\", \"BackTab\",\n\
         #                     \"Delete\", \"F1\"..\"F12\" or single characters like \"Q\"\n\
         #\n\
         # Colors: RGB values from 0-255\n\
         #\n\
         # Courses: \"Appetizers\", \"Main Courses\", \"Desserts\", \"Beverages\"\n\n\
         {}",
        toml_string
    );

    fs::write(path, commented_toml)?;
    info!(path = %path.display(), "created default config file");
    Ok(())
}
