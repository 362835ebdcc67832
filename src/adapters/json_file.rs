//! Catalog sources.
//!
//! Both implement [`ConfigPort`].  [`BuiltinConfig`] hands out the
//! demonstration fleet; [`JsonFileConfig`] reads a catalog document from
//! disk.  Either way the result is validated before it is returned.

use std::io::ErrorKind;
use std::path::PathBuf;

use log::info;

use crate::app::ports::{ConfigError, ConfigPort};
use crate::config::CatalogConfig;

fn validated(cfg: CatalogConfig) -> Result<CatalogConfig, ConfigError> {
    cfg.validate().map_err(ConfigError::ValidationFailed)?;
    Ok(cfg)
}

/// The compiled-in default catalog.
#[derive(Debug, Default)]
pub struct BuiltinConfig;

impl ConfigPort for BuiltinConfig {
    fn load(&self) -> Result<CatalogConfig, ConfigError> {
        info!("catalog: using built-in defaults");
        validated(CatalogConfig::default())
    }
}

/// A JSON catalog file.
#[derive(Debug)]
pub struct JsonFileConfig {
    path: PathBuf,
}

impl JsonFileConfig {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ConfigPort for JsonFileConfig {
    fn load(&self) -> Result<CatalogConfig, ConfigError> {
        let text = std::fs::read_to_string(&self.path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => ConfigError::NotFound(self.path.display().to_string()),
            ErrorKind::InvalidData => {
                ConfigError::Corrupted(format!("{}: not UTF-8", self.path.display()))
            }
            _ => ConfigError::IoError(format!("{}: {e}", self.path.display())),
        })?;
        let cfg: CatalogConfig = serde_json::from_str(&text)
            .map_err(|e| ConfigError::Corrupted(format!("{}: {e}", self.path.display())))?;
        info!(
            "catalog: loaded {} ({} vehicles, {} devices)",
            self.path.display(),
            cfg.vehicles.len(),
            cfg.devices.len()
        );
        validated(cfg)
    }
}
