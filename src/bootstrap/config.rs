//! # Configuration Loader / 配置加载器
//!
//! ## Responsibilities / 职责
//!
//! - ✅ Read TOML configuration files / 读取 TOML 配置文件
//! - ✅ Parse TOML into the `BridgeConfig` DTO / 将 TOML 解析为 `BridgeConfig` DTO
//! - ✅ Report I/O and parsing errors with context / 报告带上下文的 I/O 和解析错误
//!
//! Missing sections and keys fall back to the DTO's serde defaults; nothing
//! here validates values.

use anyhow::Context;
use std::path::{Path, PathBuf};

use ka_core::config::BridgeConfig;
use tracing::info;

const CONFIG_DIR_NAME: &str = "keyboard-accessory";
const CONFIG_FILE_NAME: &str = "config.toml";

/// Load configuration from a TOML file
/// 从 TOML 文件加载配置
///
/// # Errors / 错误
///
/// Returns error if:
/// - File cannot be read (I/O error)
/// - Content is not valid TOML (parse error)
/// - TOML structure does not map onto `BridgeConfig` (mapping error)
pub fn load_config(config_path: &Path) -> anyhow::Result<BridgeConfig> {
    let content = std::fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    let toml_value: toml::Value =
        toml::from_str(&content).context("Failed to parse config as TOML")?;
    BridgeConfig::from_toml(&toml_value)
        .with_context(|| format!("Invalid bridge config in {}", config_path.display()))
}

/// Load the file when it exists, otherwise use defaults.
///
/// A file that exists but fails to load is still an error.
pub fn load_config_or_default(config_path: &Path) -> anyhow::Result<BridgeConfig> {
    if !config_path.exists() {
        info!(path = %config_path.display(), "No config file found, using defaults");
        return Ok(BridgeConfig::default());
    }
    load_config(config_path)
}

/// Load from `explicit_path` when given, failing if it cannot be read.
/// Without one, the default location is used and may be absent.
pub fn load_config_from(explicit_path: Option<&Path>) -> anyhow::Result<BridgeConfig> {
    if let Some(path) = explicit_path {
        return load_config(path);
    }
    match default_config_path() {
        Some(path) => load_config_or_default(&path),
        None => Ok(BridgeConfig::default()),
    }
}

/// `<platform config dir>/keyboard-accessory/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}
