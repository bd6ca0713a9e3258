//! `roomlens-config` — RoomLens configuration management.
//!
//! Provides:
//! - Typed config schema (provider, analysis, logging)
//! - YAML read/write with atomic replacement and a `.bak` copy
//! - `${ENV_VAR}` substitution
//! - Default value application

pub mod defaults;
pub mod env;
pub mod io;
pub mod schema;

pub use defaults::{apply_all_defaults, DEFAULT_FRAMES_PER_VIDEO, DEFAULT_PROVIDER_KIND};
pub use env::{contains_env_var_reference, resolve_env_vars, resolve_env_vars_with, MissingEnvVarError};
pub use io::{config_dir, config_file_path, load_config, write_config};
pub use schema::{AnalysisConfig, LoggingConfig, ProviderConfig, RoomLensConfig};

use anyhow::{Context, Result};
use serde_json::Value;
use std::path::Path;

/// Load, apply env substitution, and apply defaults to a config file.
///
/// This is the main entry point for loading a config at runtime.
pub async fn load_and_prepare(path: &Path) -> Result<RoomLensConfig> {
    let raw_config = load_config(path).await?;

    // Serialize to Value for the env substitution pass.
    let value: Value = serde_json::to_value(&raw_config)
        .context("Failed to serialize config for processing")?;

    let value = resolve_env_vars(&value).context("Failed to resolve env vars in config")?;

    let config: RoomLensConfig =
        serde_json::from_value(value).context("Failed to deserialize config after processing")?;

    Ok(apply_all_defaults(config))
}
