use std::{
    fs::{self, File},
    io::{self, Write},
    path::{Path, PathBuf},
};

use crate::config::{Config, ConfigError};
use crate::utils::app_data_dir;

const CONFIG_FILE: &str = "config.json";
const STAGING_SUFFIX: &str = "tmp";

/// Handles persistence for [`Config`].
#[derive(Debug, Clone)]
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    pub fn new(config_path: PathBuf) -> Self {
        Self { config_path }
    }

    pub fn with_base_dir(base: PathBuf) -> Result<Self, ConfigError> {
        fs::create_dir_all(&base).map_err(|err| ConfigError::io(&base, err))?;
        Ok(Self::new(base.join(CONFIG_FILE)))
    }

    /// Uses `$EXPENSE_CORE_HOME`, falling back to `~/.expense_core`.
    /// Nothing is created on disk until the first save.
    pub fn from_env() -> Self {
        Self::new(app_data_dir().join(CONFIG_FILE))
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Reads the config file, or defaults when none has been saved yet.
    pub fn load(&self) -> Result<Config, ConfigError> {
        let path = self.config_path.as_path();
        let data = match fs::read_to_string(path) {
            Ok(data) => data,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no config file, using defaults");
                return Ok(Config::default());
            }
            Err(err) => return Err(ConfigError::io(path, err)),
        };
        let config = serde_json::from_str(&data).map_err(|err| ConfigError::format(path, err))?;
        tracing::debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    /// Writes pretty JSON beside the target, then renames it into place.
    pub fn save(&self, config: &Config) -> Result<(), ConfigError> {
        let path = self.config_path.as_path();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|err| ConfigError::io(parent, err))?;
        }
        let json =
            serde_json::to_string_pretty(config).map_err(|err| ConfigError::format(path, err))?;
        let staged = staging_path(path);
        write_synced(&staged, json.as_bytes()).map_err(|err| ConfigError::io(&staged, err))?;
        fs::rename(&staged, path).map_err(|err| ConfigError::io(path, err))?;
        tracing::debug!(path = %path.display(), "saved configuration");
        Ok(())
    }
}

fn staging_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|name| name.to_os_string())
        .unwrap_or_else(|| CONFIG_FILE.into());
    name.push(".");
    name.push(STAGING_SUFFIX);
    path.with_file_name(name)
}

fn write_synced(path: &Path, data: &[u8]) -> io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(data)?;
    file.sync_all()
}
