use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::store::TemplateStore;
use crate::template::Template;

/// Global configuration loaded from `~/.config/quickurl/config.toml`.
///
/// Read-only: the template store built from it is never written back.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuickurlConfig {
    /// Copy the formatted output to the clipboard after every generate.
    #[serde(default)]
    pub copy_on_generate: bool,
    /// Templates the store starts with. Empty means the built-in defaults.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub templates: Vec<Template>,
}

impl QuickurlConfig {
    /// Template store seeded from this config.
    pub fn template_store(&self) -> TemplateStore {
        TemplateStore::from_templates(self.templates.clone())
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("quickurl")
        .context("locate XDG config directory")?;
    Ok(xdg_dirs.get_config_file("config.toml"))
}

/// Load configuration from disk, creating a default file if none exists.
///
/// The config is optional: if its location cannot be resolved or the default
/// file cannot be written, built-in defaults are used. A file that exists but
/// does not parse is still an error.
pub fn load_or_init() -> Result<QuickurlConfig> {
    match config_path() {
        Ok(path) => load_or_init_at(&path),
        Err(e) => {
            tracing::warn!("no config location, using defaults: {:#}", e);
            Ok(QuickurlConfig::default())
        }
    }
}

/// Like [`load_or_init`] for an explicit default location.
pub fn load_or_init_at(path: &Path) -> Result<QuickurlConfig> {
    if path.exists() {
        return load_from(path);
    }

    let default_cfg = QuickurlConfig::default();
    match write_default(path, &default_cfg) {
        Ok(()) => tracing::info!("created default config at {}", path.display()),
        Err(e) => tracing::warn!("could not create default config, using defaults: {:#}", e),
    }
    Ok(default_cfg)
}

fn write_default(path: &Path, cfg: &QuickurlConfig) -> Result<()> {
    let toml = toml::to_string_pretty(cfg)?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("create config dir {}", parent.display()))?;
    }
    fs::write(path, toml).with_context(|| format!("create config {}", path.display()))?;
    Ok(())
}

/// Load configuration from an explicit path. The file must exist.
pub fn load_from(path: &Path) -> Result<QuickurlConfig> {
    let data =
        fs::read_to_string(path).with_context(|| format!("read config {}", path.display()))?;
    let cfg: QuickurlConfig =
        toml::from_str(&data).with_context(|| format!("parse config {}", path.display()))?;
    Ok(cfg)
}
