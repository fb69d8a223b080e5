//! 后端网关抽象 Trait

use std::fmt;

use async_trait::async_trait;

use crate::error::CoreResult;
use crate::types::{
    Commit, Credentials, NewRepository, Profile, Project, Repository, RepositoryId,
    SaveCredentialsOutcome,
};

/// 后端网关 Trait
///
/// 每个后端能力对应一个异步方法，任何调用都可能失败。
/// 只有 add / delete / update / save / delete-credentials 会修改后端状态，
/// 调用方需要自行重新获取数据才能观察到变化（后端没有推送通道）。
///
/// 平台实现:
/// - 远程后端: `HttpGateway` (reqwest)
/// - 离线演示 / 测试: `InMemoryGateway`
#[async_trait]
pub trait Gateway: Send + Sync {
    /// 列出所有仓库（按后端顺序）
    async fn list_repositories(&self) -> CoreResult<Vec<Repository>>;

    /// 添加仓库
    async fn add_repository(&self, request: &NewRepository) -> CoreResult<()>;

    /// 删除仓库
    async fn delete_repository(&self, id: RepositoryId) -> CoreResult<()>;

    /// 更新仓库关联的 Jira 项目
    async fn update_repository_project(&self, id: RepositoryId, project_key: &str)
        -> CoreResult<()>;

    /// 获取项目头像
    ///
    /// # Returns
    /// * `Ok(Some(image))` - 图片引用（URL 或 data URI）
    /// * `Ok(None)` - 项目没有头像
    async fn project_avatar(&self, project_key: &str) -> CoreResult<Option<String>>;

    /// 列出 Jira 项目（仅登录后有意义）
    async fn list_projects(&self) -> CoreResult<Vec<Project>>;

    /// 获取已保存的凭证
    ///
    /// # Returns
    /// * `Ok(Some(credentials))` - 凭证存在
    /// * `Ok(None)` - 凭证不存在
    async fn get_credentials(&self) -> CoreResult<Option<Credentials>>;

    /// 保存凭证（后端可能以业务消息拒绝）
    async fn save_credentials(&self, credentials: &Credentials)
        -> CoreResult<SaveCredentialsOutcome>;

    /// 删除凭证
    async fn delete_credentials(&self) -> CoreResult<()>;

    /// 获取当前用户资料
    async fn get_profile(&self) -> CoreResult<Option<Profile>>;

    /// 列出提交记录
    async fn list_commits(&self, id: RepositoryId) -> CoreResult<Vec<Commit>>;

    /// 列出合并候选提交
    async fn list_merge_candidates(&self, id: RepositoryId) -> CoreResult<Vec<Commit>>;
}

/// 网关操作标识（用于日志与故障注入）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    ListRepositories,
    AddRepository,
    DeleteRepository,
    UpdateRepositoryProject,
    ProjectAvatar,
    ListProjects,
    GetCredentials,
    SaveCredentials,
    DeleteCredentials,
    GetProfile,
    ListCommits,
    ListMergeCandidates,
}

impl Operation {
    /// 后端 RPC 方法名
    pub fn method_name(self) -> &'static str {
        match self {
            Self::ListRepositories => "GetRepositories",
            Self::AddRepository => "AddRepository",
            Self::DeleteRepository => "DeleteRepository",
            Self::UpdateRepositoryProject => "UpdateRepositoryJira",
            Self::ProjectAvatar => "GetJiraProjectAvatar",
            Self::ListProjects => "GetJiraProjects",
            Self::GetCredentials => "GetJiraCredentials",
            Self::SaveCredentials => "SaveJiraCredentials",
            Self::DeleteCredentials => "DeleteJiraCredentials",
            Self::GetProfile => "GetJiraProfile",
            Self::ListCommits => "GetRepoCommits",
            Self::ListMergeCandidates => "GetMergeCandidates",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.method_name())
    }
}
