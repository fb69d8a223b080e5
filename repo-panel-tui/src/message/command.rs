//! 后端命令与结果
//!
//! Update 层不直接调用后端，而是产出 [`Command`]；
//! 执行器在 tokio 运行时上执行命令，再把 [`BackendEvent`] 作为消息送回主循环。

use repo_panel_core::services::{LogoutResult, SaveCredentialsResult};
use repo_panel_core::types::{
    AvatarLookup, Credentials, Project, Repository, RepositoryHistory, RepositoryId,
    SessionStatus,
};
use repo_panel_core::CoreResult;

use crate::model::Route;

/// 需要后端执行的命令
///
/// 带 `modal` 字段的命令属于某一次弹窗打开，结果只会作用于同一次打开。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// 构建路由对应的视图
    BuildView(Route),
    /// 重新获取仓库列表（主页重渲染）
    ReloadRepositories,
    /// 解析卡片头像
    ResolveAvatar(Repository),
    /// 为弹窗加载 Jira 项目
    LoadProjects { modal: u64 },
    AddRepository {
        modal: u64,
        path: String,
        project_key: String,
    },
    UpdateRepositoryProject {
        modal: u64,
        id: RepositoryId,
        project_key: String,
    },
    DeleteRepository(RepositoryId),
    /// 为登录弹窗预填已保存的凭证
    LoadCredentials { modal: u64 },
    SaveCredentials {
        modal: u64,
        server: String,
        username: String,
        password: String,
    },
    Logout,
    RefreshSession,
}

impl Command {
    /// 日志用名称（不含参数，避免把密码写进日志）
    pub fn name(&self) -> &'static str {
        match self {
            Self::BuildView(_) => "BuildView",
            Self::ReloadRepositories => "ReloadRepositories",
            Self::ResolveAvatar(_) => "ResolveAvatar",
            Self::LoadProjects { .. } => "LoadProjects",
            Self::AddRepository { .. } => "AddRepository",
            Self::UpdateRepositoryProject { .. } => "UpdateRepositoryProject",
            Self::DeleteRepository(_) => "DeleteRepository",
            Self::LoadCredentials { .. } => "LoadCredentials",
            Self::SaveCredentials { .. } => "SaveCredentials",
            Self::Logout => "Logout",
            Self::RefreshSession => "RefreshSession",
        }
    }
}

/// 后端执行结果
#[derive(Debug, Clone)]
pub enum BackendEvent {
    /// 主页构建完成
    HomeBuilt {
        repositories: CoreResult<Vec<Repository>>,
        session: SessionStatus,
    },
    /// 详情页构建完成
    DetailBuilt {
        id: RepositoryId,
        history: RepositoryHistory,
    },
    RepositoriesLoaded(CoreResult<Vec<Repository>>),
    AvatarResolved {
        id: RepositoryId,
        key: String,
        lookup: AvatarLookup,
    },
    ProjectsLoaded {
        modal: u64,
        result: CoreResult<Vec<Project>>,
    },
    RepositoryAdded {
        modal: u64,
        result: CoreResult<()>,
    },
    RepositoryRelinked {
        modal: u64,
        result: CoreResult<()>,
    },
    RepositoryDeleted {
        id: RepositoryId,
        result: CoreResult<()>,
    },
    CredentialsLoaded {
        modal: u64,
        credentials: Option<Credentials>,
    },
    CredentialsSaved {
        modal: u64,
        result: CoreResult<SaveCredentialsResult>,
    },
    /// 退出登录完成（删除凭证可能失败）
    LoggedOut(LogoutResult),
    SessionRefreshed(SessionStatus),
}
