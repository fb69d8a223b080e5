//! 业务逻辑服务层

mod history_service;
mod repository_service;
mod session_service;

pub use history_service::HistoryService;
pub use repository_service::RepositoryService;
pub use session_service::{LogoutResult, SaveCredentialsResult, SessionService};

use std::sync::Arc;

use crate::error::CoreError;
use crate::traits::Gateway;

/// 按错误类别选择日志级别
pub(crate) fn log_failure(context: &str, err: &CoreError) {
    if err.is_expected() {
        log::warn!("{context}: {err}");
    } else {
        log::error!("{context}: {err}");
    }
}

/// 服务上下文 - 持有所有依赖
///
/// 平台层需要创建此上下文，并注入具体的网关实现。
pub struct ServiceContext {
    /// 后端网关
    pub gateway: Arc<dyn Gateway>,
}

impl ServiceContext {
    /// 创建服务上下文
    #[must_use]
    pub fn new(gateway: Arc<dyn Gateway>) -> Self {
        Self { gateway }
    }
}
