//! 核心服务
//!
//! 封装 repo-panel-core 的各种服务，
//! 提供给 TUI 层使用的统一接口

use std::sync::Arc;
use std::time::Duration;

use repo_panel_core::gateway::{HttpGateway, InMemoryGateway};
use repo_panel_core::services::{HistoryService, RepositoryService, ServiceContext, SessionService};
use repo_panel_core::{CoreResult, Gateway};

use super::config_service::AppConfig;

/// TUI 核心服务
///
/// 持有服务上下文，按需创建各业务服务
pub struct CoreService {
    /// 服务上下文（供各服务使用）
    ctx: Arc<ServiceContext>,
    /// 是否为离线演示后端
    offline: bool,
}

impl CoreService {
    /// 以指定网关创建核心服务
    pub fn new(gateway: Arc<dyn Gateway>, offline: bool) -> Self {
        Self {
            ctx: Arc::new(ServiceContext::new(gateway)),
            offline,
        }
    }

    /// 根据配置选择网关
    ///
    /// 配置了 `backend_url` 时连接远端后端，否则使用内置演示数据。
    pub fn from_config(config: &AppConfig) -> CoreResult<Self> {
        match config.backend_url.as_deref() {
            Some(url) => {
                let timeout = Duration::from_secs(config.request_timeout_secs);
                let gateway = HttpGateway::new(url, timeout)?;
                log::info!("Using backend at {}", gateway.base_url());
                Ok(Self::new(Arc::new(gateway), false))
            }
            None => {
                log::info!("No backend configured, using offline demo data");
                Ok(Self::new(Arc::new(InMemoryGateway::demo()), true))
            }
        }
    }

    pub fn is_offline(&self) -> bool {
        self.offline
    }

    // ========== 仓库 ==========

    /// 获取仓库服务
    pub fn repositories(&self) -> RepositoryService {
        RepositoryService::new(self.ctx.clone())
    }

    // ========== Jira 会话 ==========

    /// 获取会话服务
    pub fn session(&self) -> SessionService {
        SessionService::new(self.ctx.clone())
    }

    // ========== 提交历史 ==========

    /// 获取提交历史服务
    pub fn history(&self) -> HistoryService {
        HistoryService::new(self.ctx.clone())
    }
}
