use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::diff::DiffOptions;
use crate::error::DiffMergeError;

pub const DEFAULT_LOCALE: &str = "en";

pub struct Config {
    default_locale: String,
    read_only: bool,
    translations_path: Option<PathBuf>,
    max_refinements: Option<usize>,
    max_input_bytes: Option<usize>,
}

#[derive(Debug, Deserialize, Serialize, Default)]
pub struct FileConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_locale: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub read_only: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub translations_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_refinements: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_input_bytes: Option<usize>,
}

/// `DIFFMERGE_*` environment overrides. Same fields as the file, env wins.
#[derive(Debug, Deserialize, Default)]
pub struct EnvConfig {
    #[serde(default)]
    pub locale: Option<String>,
    #[serde(default)]
    pub read_only: Option<bool>,
    #[serde(default)]
    pub translations_path: Option<String>,
    #[serde(default)]
    pub max_refinements: Option<usize>,
    #[serde(default)]
    pub max_input_bytes: Option<usize>,
}

/// Effective configuration, as printed by `diffmerge config`
#[derive(Debug, Serialize)]
pub struct ConfigSummary<'a> {
    pub default_locale: &'a str,
    pub read_only: bool,
    pub translations_path: Option<String>,
    pub max_refinements: Option<usize>,
    pub max_input_bytes: Option<usize>,
    pub config_file: Option<String>,
}

static CONFIG: OnceLock<Config> = OnceLock::new();

/// Serializable config patch for test overrides
#[cfg(test)]
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ConfigPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_locale: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub read_only: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_refinements: Option<usize>,
}

impl Config {
    /// Access the global configuration. Lazily initializes if not already initialized.
    pub fn get() -> &'static Config {
        CONFIG.get_or_init(build_config)
    }

    pub fn default_locale(&self) -> &str {
        &self.default_locale
    }

    /// Whether renders omit merge controls unless asked otherwise.
    pub fn read_only(&self) -> bool {
        self.read_only
    }

    pub fn translations_path(&self) -> Option<&Path> {
        self.translations_path.as_deref()
    }

    pub fn max_input_bytes(&self) -> Option<usize> {
        self.max_input_bytes
    }

    pub fn diff_options(&self) -> DiffOptions {
        DiffOptions {
            max_refinements: self.max_refinements,
        }
    }

    pub fn summary(&self) -> ConfigSummary<'_> {
        ConfigSummary {
            default_locale: &self.default_locale,
            read_only: self.read_only,
            translations_path: self
                .translations_path
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
            max_refinements: self.max_refinements,
            max_input_bytes: self.max_input_bytes,
            config_file: config_file_path().map(|p| p.to_string_lossy().to_string()),
        }
    }
}

fn build_config() -> Config {
    let file_cfg = load_file_config().unwrap_or_default();
    let env_cfg = load_env_config();
    #[allow(unused_mut)]
    let mut config = merge_config(file_cfg, env_cfg);
    #[cfg(test)]
    apply_test_config_patch(&mut config);
    config
}

fn merge_config(file_cfg: FileConfig, env_cfg: EnvConfig) -> Config {
    let default_locale = env_cfg
        .locale
        .or(file_cfg.default_locale)
        .map(|l| l.trim().to_string())
        .filter(|l| !l.is_empty())
        .unwrap_or_else(|| DEFAULT_LOCALE.to_string());

    let read_only = env_cfg.read_only.or(file_cfg.read_only).unwrap_or(false);

    let translations_path = env_cfg
        .translations_path
        .or(file_cfg.translations_path)
        .map(|p| p.trim().to_string())
        .filter(|p| !p.is_empty())
        .map(PathBuf::from);

    let max_refinements = env_cfg.max_refinements.or(file_cfg.max_refinements);

    let max_input_bytes = match env_cfg.max_input_bytes.or(file_cfg.max_input_bytes) {
        Some(0) => {
            eprintln!("Warning: Invalid max_input_bytes value '0', ignoring");
            None
        }
        other => other,
    };

    Config {
        default_locale,
        read_only,
        translations_path,
        max_refinements,
        max_input_bytes,
    }
}

fn load_env_config() -> EnvConfig {
    match envy::prefixed("DIFFMERGE_").from_env::<EnvConfig>() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Warning: Ignoring invalid DIFFMERGE_* environment: {}", e);
            EnvConfig::default()
        }
    }
}

fn load_file_config() -> Option<FileConfig> {
    let path = config_file_path()?;
    let data = fs::read(&path).ok()?;
    match serde_json::from_slice::<FileConfig>(&data) {
        Ok(cfg) => Some(cfg),
        Err(e) => {
            eprintln!(
                "Warning: Ignoring invalid config file {}: {}",
                path.display(),
                e
            );
            None
        }
    }
}

fn config_file_path() -> Option<PathBuf> {
    if let Ok(path) = env::var("DIFFMERGE_CONFIG")
        && !path.trim().is_empty()
    {
        return Some(PathBuf::from(path));
    }
    let home = dirs::home_dir()?;
    Some(home.join(".diffmerge").join("config.json"))
}

/// Load the raw file config
pub fn load_file_config_public() -> Result<FileConfig, DiffMergeError> {
    let path = config_file_path().ok_or_else(|| {
        DiffMergeError::ConfigError("Could not determine config file path".to_string())
    })?;

    if !path.exists() {
        return Ok(FileConfig::default());
    }

    let data = fs::read(&path)?;
    Ok(serde_json::from_slice::<FileConfig>(&data)?)
}

/// Save the file config
pub fn save_file_config(config: &FileConfig) -> Result<(), DiffMergeError> {
    let path = config_file_path().ok_or_else(|| {
        DiffMergeError::ConfigError("Could not determine config file path".to_string())
    })?;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let json = serde_json::to_string_pretty(config)?;
    fs::write(&path, json)?;
    Ok(())
}

/// Apply test config patch from environment variable (test-only)
/// Reads DIFFMERGE_TEST_CONFIG_PATCH env var containing JSON and applies patches to config
#[cfg(test)]
fn apply_test_config_patch(config: &mut Config) {
    if let Ok(patch_json) = env::var("DIFFMERGE_TEST_CONFIG_PATCH")
        && let Ok(patch) = serde_json::from_str::<ConfigPatch>(&patch_json)
    {
        if let Some(locale) = patch.default_locale {
            config.default_locale = locale;
        }
        if let Some(read_only) = patch.read_only {
            config.read_only = read_only;
        }
        if patch.max_refinements.is_some() {
            config.max_refinements = patch.max_refinements;
        }
    }
}
