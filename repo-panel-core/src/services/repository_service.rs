//! 仓库管理服务

use std::sync::Arc;

use crate::error::{CoreError, CoreResult};
use crate::services::{log_failure, ServiceContext};
use crate::types::{AvatarLookup, NewRepository, Project, Repository, RepositoryId};

/// 仓库管理服务
pub struct RepositoryService {
    ctx: Arc<ServiceContext>,
}

impl RepositoryService {
    /// 创建仓库服务实例
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self { ctx }
    }

    /// 列出所有仓库
    pub async fn list(&self) -> CoreResult<Vec<Repository>> {
        self.ctx.gateway.list_repositories().await.inspect_err(|e| {
            log_failure("Failed to list repositories", e);
        })
    }

    /// 添加仓库（先做本地校验，校验失败不会发出请求）
    pub async fn add(&self, path: &str, project_key: &str) -> CoreResult<()> {
        let request = NewRepository::new(path, project_key);
        request.validate()?;

        self.ctx
            .gateway
            .add_repository(&request)
            .await
            .inspect_err(|e| log_failure(&format!("Failed to add repository {}", request.path), e))?;
        log::info!(
            "Repository added: {} ({})",
            request.path,
            request.project_key
        );
        Ok(())
    }

    /// 删除仓库
    pub async fn delete(&self, id: RepositoryId) -> CoreResult<()> {
        self.ctx
            .gateway
            .delete_repository(id)
            .await
            .inspect_err(|e| log_failure(&format!("Failed to delete repository {id}"), e))?;
        log::info!("Repository deleted: {id}");
        Ok(())
    }

    /// 重新关联 Jira 项目（必须选择项目）
    pub async fn relink(&self, id: RepositoryId, project_key: &str) -> CoreResult<()> {
        let key = project_key.trim();
        if key.is_empty() {
            return Err(CoreError::ValidationError(
                "a project must be selected".to_string(),
            ));
        }

        self.ctx
            .gateway
            .update_repository_project(id, key)
            .await
            .inspect_err(|e| log_failure(&format!("Failed to relink repository {id}"), e))?;
        log::info!("Repository {id} linked to {key}");
        Ok(())
    }

    /// 列出可供选择的 Jira 项目
    pub async fn projects(&self) -> CoreResult<Vec<Project>> {
        self.ctx
            .gateway
            .list_projects()
            .await
            .inspect_err(|e| log_failure("Failed to list projects", e))
    }

    /// 解析卡片头像
    ///
    /// 获取失败是良性的：记录调试日志并返回 `Absent`。
    pub async fn resolve_avatar(&self, repository: &Repository) -> AvatarLookup {
        if let Some(avatar) = repository.ready_avatar() {
            return AvatarLookup::Present(avatar.to_string());
        }
        let Some(ref key) = repository.jira_key else {
            return AvatarLookup::Absent;
        };

        match self.ctx.gateway.project_avatar(key).await {
            Ok(Some(image)) => AvatarLookup::Resolved(image),
            Ok(None) => AvatarLookup::Absent,
            Err(e) => {
                log::debug!("Avatar for project {key} unavailable: {e}");
                AvatarLookup::Absent
            }
        }
    }

    /// 按 ID 解析详情页标题（重新获取列表，找不到或失败返回 `None`）
    pub async fn title_for(&self, id: RepositoryId) -> Option<String> {
        match self.ctx.gateway.list_repositories().await {
            Ok(repos) => repos
                .iter()
                .find(|r| r.id == id)
                .map(|r| r.display_title().to_string()),
            Err(e) => {
                log_failure("Failed to resolve repository title", &e);
                None
            }
        }
    }
}
