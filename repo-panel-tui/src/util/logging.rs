//! 日志初始化
//!
//! TUI 占用了整个终端，日志只写入文件：
//! `<data_local_dir>/repo-panel/logs/repo-panel.log.YYYY-MM-DD`，按天滚动。
//!
//! 过滤规则优先取 `RUST_LOG`，否则使用配置中的 `log_level`
//! （已被 `REPO_PANEL_LOG` 覆盖过）。`log` 宏的记录经 tracing-log 桥接写入同一文件。

use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::backend::AppConfig;

/// 日志目录
pub fn log_dir() -> Result<PathBuf> {
    let base = dirs::data_local_dir().context("cannot determine the local data directory")?;
    Ok(base.join("repo-panel").join("logs"))
}

/// 初始化日志；返回的 guard 必须在程序退出前一直持有，否则缓冲的日志会丢失
pub fn init_logging(config: &AppConfig) -> Result<WorkerGuard> {
    let dir = log_dir()?;
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("failed to create log directory {}", dir.display()))?;

    let appender = RollingFileAppender::new(Rotation::DAILY, &dir, "repo-panel.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(appender);

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let file_layer = fmt::layer()
        .with_writer(non_blocking)
        .with_target(true)
        .with_ansi(false)
        .with_filter(filter);

    tracing_subscriber::registry()
        .with(file_layer)
        .try_init()
        .context("failed to install the log subscriber")?;

    Ok(guard)
}
