//! 配置服务
//!
//! 配置文件为 JSON，位于 `<config_dir>/repo-panel/config.json`。
//! 文件不存在时使用默认值；文件损坏时报错（在终端初始化之前）。

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use repo_panel_core::gateway::DEFAULT_TIMEOUT;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::view::theme::Theme;

/// 环境变量：后端地址
pub const ENV_BACKEND_URL: &str = "REPO_PANEL_BACKEND_URL";
/// 环境变量：日志级别
pub const ENV_LOG: &str = "REPO_PANEL_LOG";

/// 配置错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot determine the configuration directory")]
    NoConfigDir,

    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed configuration in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid configuration value: {0}")]
    Invalid(String),
}

/// 应用配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// 后端地址；缺省时使用离线演示数据
    pub backend_url: Option<String>,
    /// 界面语言（`en-US` / `ru-RU`）
    pub language: String,
    pub theme: Theme,
    /// 单次请求超时（秒）
    pub request_timeout_secs: u64,
    /// 日志级别（`RUST_LOG` 未设置时使用）
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend_url: None,
            language: "en-US".to_string(),
            theme: Theme::Dark,
            request_timeout_secs: DEFAULT_TIMEOUT.as_secs(),
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// 应用环境变量覆盖（空字符串视为未设置）
    #[must_use]
    pub fn with_overrides(mut self, backend_url: Option<String>, log_level: Option<String>) -> Self {
        if let Some(url) = backend_url.filter(|v| !v.trim().is_empty()) {
            self.backend_url = Some(url.trim().to_string());
        }
        if let Some(level) = log_level.filter(|v| !v.trim().is_empty()) {
            self.log_level = level.trim().to_string();
        }
        self
    }

    /// 从进程环境读取覆盖
    #[must_use]
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides(
            std::env::var(ENV_BACKEND_URL).ok(),
            std::env::var(ENV_LOG).ok(),
        )
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.request_timeout_secs == 0 {
            return Err(ConfigError::Invalid(
                "request_timeout_secs must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}

/// 配置服务 trait
pub trait ConfigService: Send + Sync {
    /// 加载配置
    fn load(&self) -> Result<AppConfig, ConfigError>;

    /// 保存配置
    fn save(&self, config: &AppConfig) -> Result<(), ConfigError>;
}

/// 本地配置服务
pub struct LocalConfigService {
    path: PathBuf,
}

impl LocalConfigService {
    /// 使用默认路径
    pub fn new() -> Result<Self, ConfigError> {
        let dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(Self::with_path(dir.join("repo-panel").join("config.json")))
    }

    /// 使用指定路径
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ConfigService for LocalConfigService {
    fn load(&self) -> Result<AppConfig, ConfigError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(AppConfig::default()),
            Err(source) => {
                return Err(ConfigError::Read {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        let config: AppConfig =
            serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
                path: self.path.clone(),
                source,
            })?;
        config.validate()?;
        Ok(config)
    }

    fn save(&self, config: &AppConfig) -> Result<(), ConfigError> {
        let write_err = |source| ConfigError::Write {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(write_err)?;
        }
        let json = serde_json::to_string_pretty(config)
            .map_err(|e| ConfigError::Invalid(e.to_string()))?;
        fs::write(&self.path, json).map_err(write_err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let service = LocalConfigService::with_path(dir.path().join("none.json"));

        assert_eq!(service.load().unwrap(), AppConfig::default());
        assert_eq!(
            Duration::from_secs(AppConfig::default().request_timeout_secs),
            DEFAULT_TIMEOUT
        );
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(
            &path,
            r#"{ "backend_url": "http://localhost:34115", "language": "ru-RU", "theme": "light" }"#,
        )
        .unwrap();

        let config = LocalConfigService::with_path(&path).load().unwrap();
        assert_eq!(config.backend_url.as_deref(), Some("http://localhost:34115"));
        assert_eq!(config.language, "ru-RU");
        assert_eq!(config.theme, Theme::Light);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{ not json").unwrap();

        let err = LocalConfigService::with_path(&path).load().unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));

        fs::write(&path, r#"{ "request_timeout_secs": 0 }"#).unwrap();
        let err = LocalConfigService::with_path(&path).load().unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let service = LocalConfigService::with_path(dir.path().join("nested").join("config.json"));
        let config = AppConfig {
            backend_url: Some("https://panel.example.com".into()),
            ..AppConfig::default()
        };

        service.save(&config).unwrap();
        assert_eq!(service.load().unwrap(), config);
    }

    #[test]
    fn environment_overrides_win_unless_blank() {
        let config = AppConfig::default()
            .with_overrides(Some(" http://remote ".into()), Some("debug".into()));
        assert_eq!(config.backend_url.as_deref(), Some("http://remote"));
        assert_eq!(config.log_level, "debug");

        let config = config.with_overrides(Some(String::new()), None);
        assert_eq!(config.backend_url.as_deref(), Some("http://remote"));
    }
}
