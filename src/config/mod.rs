mod schema;

pub use schema::Config;

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Get the config directory path (~/.config/leadscope/)
pub fn get_config_dir() -> PathBuf {
    let home = dirs::home_dir().expect("Could not determine home directory");
    home.join(".config").join("leadscope")
}

/// Get the default config file path (~/.config/leadscope/config.yaml)
pub fn get_config_path() -> PathBuf {
    get_config_dir().join("config.yaml")
}

/// Load configuration from a YAML file.
///
/// An explicitly given path must exist. The default path is optional: when
/// no file is there, the built-in defaults apply (the scoring weights are
/// complete without a config file).
///
/// # Errors
///
/// Returns an error if an explicit config file does not exist, or if any
/// config file cannot be read or parsed.
pub fn load_config(path: Option<PathBuf>) -> Result<Config> {
    match path {
        Some(config_path) => {
            if !config_path.exists() {
                anyhow::bail!("Config file not found at {}", config_path.display());
            }
            read_config(&config_path)
        }
        None => {
            let config_path = get_config_path();
            if config_path.exists() {
                read_config(&config_path)
            } else {
                Ok(Config::default())
            }
        }
    }
}

fn read_config(path: &Path) -> Result<Config> {
    let config_content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file at {}", path.display()))?;

    let config: Config = serde_saphyr::from_str(&config_content)
        .with_context(|| format!("Failed to parse config: invalid YAML in {}", path.display()))?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_missing_path_is_an_error() {
        let result = load_config(Some(PathBuf::from("/nonexistent/leadscope.yaml")));
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("not found"));
    }
}
