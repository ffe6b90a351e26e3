//! # Bridge configuration DTO / 桥接配置 DTO
//!
//! ## Responsibilities / 职责
//!
//! - Define configuration data structures / 定义配置数据结构
//! - Provide TOML → DTO mapping / 提供 TOML → DTO 的映射
//!
//! Missing sections and keys fall back to [`Default`]. No other validation
//! happens here; loading from disk lives in the bootstrap layer.

use serde::{Deserialize, Serialize};

/// Bridge configuration
/// 桥接配置
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BridgeConfig {
    pub generation: GenerationConfig,
    pub lifecycle: LifecycleConfig,
    pub logging: LoggingConfig,
}

/// Captions of the credential generation action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    pub caption: String,
    pub caption_short: String,
    /// Use `caption` instead of `caption_short`.
    pub use_long_caption: bool,
}

impl GenerationConfig {
    /// The caption shown on the generation action.
    pub fn active_caption(&self) -> &str {
        if self.use_long_caption {
            &self.caption
        } else {
            &self.caption_short
        }
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            caption: "Generate password".to_string(),
            caption_short: "Generate".to_string(),
            use_long_caption: true,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LifecycleConfig {
    pub violation_policy: LifecycleViolationPolicy,
}

/// What the bridge does when something tries to reach the backend after
/// teardown.
/// 销毁后仍尝试访问后端时的处理策略。
///
/// Either way the call is dropped: no backend forward and no metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LifecycleViolationPolicy {
    /// Log and panic. Default in debug builds.
    Panic,
    /// Log and drop the call. Default in release builds.
    Log,
}

impl Default for LifecycleViolationPolicy {
    fn default() -> Self {
        if cfg!(debug_assertions) {
            LifecycleViolationPolicy::Panic
        } else {
            LifecycleViolationPolicy::Log
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directives used when `RUST_LOG` is unset.
    pub filter: Option<String>,
    /// Directory for daily-rolling log files. Stdout only when unset.
    pub directory: Option<std::path::PathBuf>,
}

impl BridgeConfig {
    /// Create BridgeConfig from a TOML value
    /// 从 TOML 值创建 BridgeConfig
    pub fn from_toml(toml_value: &toml::Value) -> anyhow::Result<Self> {
        Ok(toml_value.clone().try_into()?)
    }
}
