//!
//! Repo Panel TUI
//!
//! 仓库面板：列出与 Jira 项目关联的本地仓库，查看提交与合并候选。
//!
//!     repo-panel [ROUTE]
//!
//! ROUTE 为初始路由令牌：`home`（默认）或 `repo:<id>`。
//!
//! 启动顺序：
//!     1. 读取配置（环境变量覆盖文件），应用语言与主题
//!     2. 初始化文件日志
//!     3. 创建 tokio 运行时与后端执行器
//!     4. 初始化终端，运行主循环，恢复终端
//!

mod app;
mod backend;
mod event;
pub mod i18n;
mod message;
mod model;
mod update;
mod util;
mod view;

use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::sync::mpsc;

use backend::{ConfigService, CoreService, Executor, LocalConfigService};
use i18n::{set_language, Language};
use model::Route;
use util::{init_logging, init_terminal, restore_terminal};

fn main() -> Result<()> {
    // 1. 配置
    let config_service = LocalConfigService::new()?;
    let config = config_service.load()?.with_env_overrides();

    let language = Language::from_code(&config.language);
    set_language(language.unwrap_or_default());
    view::theme::set_theme(config.theme);

    // 2. 日志（guard 持有到程序结束）
    let _log_guard = init_logging(&config)?;
    log::info!(
        "Starting repo-panel v{} (config: {}, language: {})",
        env!("CARGO_PKG_VERSION"),
        config_service.path().display(),
        i18n::current_language().code()
    );

    if language.is_none() {
        log::warn!("Unknown language {:?}, falling back to en-US", config.language);
    }

    if !config_service.path().exists() {
        if let Err(e) = config_service.save(&config) {
            log::warn!("Could not write default configuration: {e}");
        }
    }

    // 3. 运行时与后端
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to start the async runtime")?;
    let _enter = runtime.enter();

    let services = Arc::new(CoreService::from_config(&config)?);
    let offline = services.is_offline();
    let (tx, mut rx) = mpsc::unbounded_channel();
    let executor = Executor::new(runtime.handle().clone(), services, tx);

    let initial_route = std::env::args()
        .nth(1)
        .unwrap_or_else(|| Route::HOME.to_string());

    // 4. 终端与主循环
    let mut terminal = init_terminal()?;
    let mut app = model::App::new(&initial_route, offline);

    let result = app::run(&mut terminal, &mut app, &executor, &mut rx);

    // 恢复终端（无论成功失败都执行）
    restore_terminal(&mut terminal)?;

    if let Err(ref e) = result {
        log::error!("Exiting with error: {e:#}");
    } else {
        log::info!("Bye");
    }
    result
}
